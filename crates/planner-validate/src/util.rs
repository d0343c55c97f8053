//! Shared field-level checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::ValidationReport;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("phone regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Require a non-blank string field within the standard name length range.
/// Returns the trimmed value when present so duplicate checks can reuse it.
pub fn require_name(
    report: &mut ValidationReport,
    field: &str,
    value: Option<&String>,
) -> Option<String> {
    let trimmed = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if trimmed.is_empty() {
        report.error(format!("{field} is required"));
        return None;
    }
    if trimmed.len() < NAME_MIN_LEN {
        report.error(format!("{field} must be at least {NAME_MIN_LEN} characters"));
        return None;
    }
    if trimmed.len() > NAME_MAX_LEN {
        report.error(format!("{field} must be at most {NAME_MAX_LEN} characters"));
        return None;
    }
    Some(trimmed)
}

/// Require a positive numeric field bounded above.
pub fn require_bounded(
    report: &mut ValidationReport,
    field: &str,
    value: Option<u32>,
    max: u32,
) -> Option<u32> {
    match value {
        None => {
            report.error(format!("{field} is required"));
            None
        }
        Some(0) => {
            report.error(format!("{field} must be greater than zero"));
            None
        }
        Some(v) if v > max => {
            report.error(format!("{field} must not exceed {max}"));
            None
        }
        Some(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_patterns() {
        assert!(is_valid_email("a.carter@school.example"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn phone_patterns() {
        assert!(is_valid_phone("+1 (555) 010-2000"));
        assert!(is_valid_phone("0551234567"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("123"));
    }

    #[test]
    fn name_bounds() {
        let mut report = ValidationReport::new();
        assert!(require_name(&mut report, "Name", Some(&"  Al  ".to_string())).is_some());
        assert!(require_name(&mut report, "Name", Some(&"A".to_string())).is_none());
        assert!(require_name(&mut report, "Name", None).is_none());
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn bounded_numbers() {
        let mut report = ValidationReport::new();
        assert_eq!(require_bounded(&mut report, "Max load", Some(20), 40), Some(20));
        assert!(require_bounded(&mut report, "Max load", Some(0), 40).is_none());
        assert!(require_bounded(&mut report, "Max load", Some(41), 40).is_none());
        assert!(require_bounded(&mut report, "Max load", None, 40).is_none());
        assert_eq!(report.error_count(), 3);
    }
}
