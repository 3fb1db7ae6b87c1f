//! Resume Validation
//!
//! Named per-field checks applied to a [`ResumeInput`] before anything reaches
//! the store. Every field is checked, so a rejection lists all offending
//! fields rather than only the first one.

use super::types::{CandidateProfile, ResumeInput};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const FULL_NAME_MIN_LEN: usize = 2;
pub const PHONE_NUMBER_MIN_LEN: usize = 10;
pub const PHONE_NUMBER_MAX_LEN: usize = 15;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

// dot-atom local part, then hostname labels with at least one dot.
// Letters and digits from any script are allowed on both sides.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}\p{M}])?",
        r"(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}\p{M}])?)+$",
    ))
    .expect("valid email regex")
});

// ============================================================
// VIOLATIONS
// ============================================================

/// Submission field a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeField {
    FullName,
    Email,
    PhoneNumber,
    ExperienceYears,
}

impl ResumeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeField::FullName => "full_name",
            ResumeField::Email => "email",
            ResumeField::PhoneNumber => "phone_number",
            ResumeField::ExperienceYears => "experience_years",
        }
    }
}

impl fmt::Display for ResumeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    TooShort,
    InvalidFormat,
    LengthOutOfRange,
    NegativeOrNonNumeric,
}

impl ViolationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationReason::TooShort => "too_short",
            ViolationReason::InvalidFormat => "invalid_format",
            ViolationReason::LengthOutOfRange => "length_out_of_range",
            ViolationReason::NegativeOrNonNumeric => "negative_or_non_numeric",
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: ResumeField,
    pub reason: ViolationReason,
}

impl Violation {
    pub fn new(field: ResumeField, reason: ViolationReason) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Rejection of a submission. Always holds at least one violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resume submission ({})", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// True if `field` was rejected for `reason`
    pub fn has(&self, field: ResumeField, reason: ViolationReason) -> bool {
        self.violations.contains(&Violation::new(field, reason))
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================
// FIELD CHECKS
// ============================================================

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn check_full_name(full_name: &str) -> Result<(), ViolationReason> {
    if char_len(full_name) >= FULL_NAME_MIN_LEN {
        Ok(())
    } else {
        Err(ViolationReason::TooShort)
    }
}

pub fn check_email(email: &str) -> Result<(), ViolationReason> {
    let local_len = email.split('@').next().map(str::len).unwrap_or(0);
    if email.len() <= EMAIL_MAX_LEN && local_len <= EMAIL_LOCAL_MAX_LEN && EMAIL_RE.is_match(email)
    {
        Ok(())
    } else {
        Err(ViolationReason::InvalidFormat)
    }
}

/// Length bound only. Spaces, dashes and a leading `+` are all accepted.
pub fn check_phone_number(phone_number: &str) -> Result<(), ViolationReason> {
    let len = char_len(phone_number);
    if (PHONE_NUMBER_MIN_LEN..=PHONE_NUMBER_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ViolationReason::LengthOutOfRange)
    }
}

pub fn check_experience_years(value: &serde_json::Value) -> Result<f64, ViolationReason> {
    match value.as_f64() {
        Some(years) if years.is_finite() && years >= 0.0 => Ok(years),
        _ => Err(ViolationReason::NegativeOrNonNumeric),
    }
}

// ============================================================
// VALIDATOR
// ============================================================

/// Validate a raw submission.
///
/// Returns the admitted profile with values echoed as submitted, or every
/// violation found.
pub fn validate(input: &ResumeInput) -> Result<CandidateProfile, ValidationError> {
    let mut violations = Vec::new();

    if let Err(reason) = check_full_name(&input.full_name) {
        violations.push(Violation::new(ResumeField::FullName, reason));
    }
    if let Err(reason) = check_email(&input.email) {
        violations.push(Violation::new(ResumeField::Email, reason));
    }
    if let Err(reason) = check_phone_number(&input.phone_number) {
        violations.push(Violation::new(ResumeField::PhoneNumber, reason));
    }
    let experience_years = match check_experience_years(&input.experience_years) {
        Ok(years) => years,
        Err(reason) => {
            violations.push(Violation::new(ResumeField::ExperienceYears, reason));
            0.0
        }
    };

    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    Ok(CandidateProfile {
        full_name: input.full_name.clone(),
        email: input.email.clone(),
        phone_number: input.phone_number.clone(),
        experience_years,
        skills: input.skills.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_input() -> ResumeInput {
        ResumeInput {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            experience_years: json!(3.5),
            skills: vec!["Python".to_string(), "Docker".to_string()],
        }
    }

    #[test]
    fn test_valid_input_is_echoed() {
        let profile = validate(&sample_input()).unwrap();
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.email, "john.doe@example.com");
        assert_eq!(profile.phone_number, "9876543210");
        assert_eq!(profile.experience_years, 3.5);
        assert_eq!(profile.skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_integer_experience_and_empty_skills() {
        let mut input = sample_input();
        input.experience_years = json!(0);
        input.skills.clear();

        let profile = validate(&input).unwrap();
        assert_eq!(profile.experience_years, 0.0);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_full_name_too_short() {
        let mut input = sample_input();
        input.full_name = "J".to_string();

        let err = validate(&input).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new(ResumeField::FullName, ViolationReason::TooShort)]
        );
    }

    #[test]
    fn test_full_name_counts_characters_not_bytes() {
        // one character, two bytes
        assert!(check_full_name("é").is_err());
        assert!(check_full_name("Jo").is_ok());
    }

    #[test]
    fn test_email_formats() {
        for ok in [
            "john.doe@example.com",
            "a+tag@sub.example.co.uk",
            "x_y-z@my-host.io",
            "josé@example.com",
            "user@bücher.de",
            "用户@例子.广告",
        ] {
            assert!(check_email(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in [
            "",
            "john.doe",
            "john@localhost",
            "@example.com",
            "john@@example.com",
            "john doe@example.com",
            ".john@example.com",
            "john..doe@example.com",
            "john@-example.com",
            "john@example.com.",
            "josé@bücher",
            "user@-bücher.de",
        ] {
            assert_eq!(
                check_email(bad),
                Err(ViolationReason::InvalidFormat),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(check_email(&long_local).is_err());
    }

    #[test]
    fn test_phone_number_bounds() {
        assert!(check_phone_number("123456789").is_err());
        assert!(check_phone_number("1234567890").is_ok());
        assert!(check_phone_number("123456789012345").is_ok());
        assert!(check_phone_number("1234567890123456").is_err());
        assert_eq!(
            check_phone_number("12345"),
            Err(ViolationReason::LengthOutOfRange)
        );
    }

    #[test]
    fn test_phone_number_accepts_non_digits() {
        assert!(check_phone_number("+1 (555) 010-99").is_ok());
        assert!(check_phone_number("call-me-maybe!").is_ok());
    }

    #[test]
    fn test_experience_years_rejections() {
        for bad in [json!(-1), json!(-0.5), json!("3"), json!(null), json!([1])] {
            assert_eq!(
                check_experience_years(&bad),
                Err(ViolationReason::NegativeOrNonNumeric),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_reports_every_violation() {
        let input = ResumeInput {
            full_name: "J".to_string(),
            email: "nope".to_string(),
            phone_number: "12345".to_string(),
            experience_years: json!(-1),
            skills: vec![],
        };

        let err = validate(&input).unwrap_err();
        assert_eq!(err.violations.len(), 4);
        assert!(err.has(ResumeField::FullName, ViolationReason::TooShort));
        assert!(err.has(ResumeField::Email, ViolationReason::InvalidFormat));
        assert!(err.has(ResumeField::PhoneNumber, ViolationReason::LengthOutOfRange));
        assert!(err.has(
            ResumeField::ExperienceYears,
            ViolationReason::NegativeOrNonNumeric
        ));
    }

    #[test]
    fn test_error_message_names_fields() {
        let mut input = sample_input();
        input.phone_number = "12345".to_string();

        let err = validate(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid resume submission (phone_number: length_out_of_range)"
        );
    }
}
