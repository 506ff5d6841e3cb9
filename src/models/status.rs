// src/models/status.rs

//! Review status enumeration and its fixed verdict catalog.

use std::fmt;

/// Review status of a submitted homework.
///
/// A closed enumeration: every value outside this set is rejected at the
/// formatting stage rather than silently passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse an upstream status code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed notification template for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// The upstream wire code for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(ReviewStatus::parse("approved"), Some(ReviewStatus::Approved));
        assert_eq!(
            ReviewStatus::parse("reviewing"),
            Some(ReviewStatus::Reviewing)
        );
        assert_eq!(ReviewStatus::parse("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ReviewStatus::parse(""), None);
        assert_eq!(ReviewStatus::parse("Approved"), None);
        assert_eq!(ReviewStatus::parse("done"), None);
    }

    #[test]
    fn test_verdict_per_status() {
        assert_eq!(
            ReviewStatus::Approved.verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            ReviewStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            ReviewStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }
}
