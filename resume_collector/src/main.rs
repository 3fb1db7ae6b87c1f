//! Resume Collector - Main Entry Point
//!
//! Starts the web API server for the Mini Resume Collector.

use resume_collector::{api::run_server, config::ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Mini Resume Collector                        ║");
    println!("║   Submit → Validate → Store                    ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    run_server(ServerConfig::from_env()).await
}
