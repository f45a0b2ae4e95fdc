//! Field rules applied when a builder finalizes

use crate::error::{BuildError, BuildResult, ComputerField};

/// A value is blank when nothing is left after stripping characters at or
/// below U+0020 (ASCII space and control characters) from both ends.
/// Unicode spaces such as U+00A0 count as content.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Require a present, non-blank text value. The value is returned untrimmed.
pub fn require_text(field: ComputerField, value: Option<String>) -> BuildResult<String> {
    match value {
        Some(text) if !is_blank(&text) => Ok(text),
        _ => Err(BuildError::missing(field)),
    }
}

/// Require a strictly positive number
pub fn require_positive(field: ComputerField, value: i32) -> BuildResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| BuildError::invalid(field, "must be positive"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_missing_and_blank() {
        assert_eq!(
            require_text(ComputerField::Cpu, None),
            Err(BuildError::missing(ComputerField::Cpu))
        );
        assert!(require_text(ComputerField::Cpu, Some(String::new())).is_err());
        assert!(require_text(ComputerField::Cpu, Some(" \t\n".to_string())).is_err());
    }

    #[test]
    fn test_blank_means_control_or_space_only() {
        assert!(is_blank("\u{1}\u{1f} \u{0}"));
        assert!(!is_blank("\u{A0}"));
        assert!(!is_blank("\u{2003}"));

        assert_eq!(
            require_text(ComputerField::Cpu, Some("\u{1}".to_string())),
            Err(BuildError::missing(ComputerField::Cpu))
        );
        assert_eq!(
            require_text(ComputerField::Cpu, Some("\u{A0}".to_string())),
            Ok("\u{A0}".to_string())
        );
    }

    #[test]
    fn test_require_text_keeps_value_untrimmed() {
        assert_eq!(
            require_text(ComputerField::Motherboard, Some(" Board A ".to_string())),
            Ok(" Board A ".to_string())
        );
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(ComputerField::Ram, 16), Ok(16));
        assert_eq!(require_positive(ComputerField::Ram, 1), Ok(1));
        assert_eq!(
            require_positive(ComputerField::Ram, 0),
            Err(BuildError::invalid(ComputerField::Ram, "must be positive"))
        );
        assert!(require_positive(ComputerField::Ram, -8).is_err());
        assert!(require_positive(ComputerField::Ram, i32::MIN).is_err());
    }
}
