use thiserror::Error;

use crate::types::ExtractResult;

/// Classifies extraction failures for programmatic matching.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractErrorKind {
    #[error("opening bracket is not the first character of the host")]
    OpeningBracketNotFirst,

    #[error("closing bracket without a prior opening bracket")]
    ClosingBracketWithoutOpening,

    #[error("incomplete bracket pair")]
    UnclosedBracket,

    #[error("invalid IPv6 address inside brackets")]
    InvalidIpv6,

    #[error("invalid trailing characters after IPv6 address")]
    TrailingAfterIpv6,

    #[error("invalid port")]
    InvalidPort,

    #[error("percent-decoding of host failed")]
    PercentDecode,

    #[error("punycode conversion of host failed")]
    PunycodeConversion,

    #[error("invalid consecutive label separators before suffix")]
    ConsecutiveSeparators,

    #[error("invalid characters in hostname")]
    InvalidHostChars,

    #[error("empty domain")]
    EmptyDomain,
}

/// Extraction error carrying the best-effort partial result.
///
/// Fields populated before the failure point are preserved in `partial`;
/// a malformed input never discards the work already done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ExtractError {
    pub kind: ExtractErrorKind,
    pub partial: ExtractResult,
}

impl ExtractError {
    pub(crate) fn new(kind: ExtractErrorKind, partial: ExtractResult) -> Self {
        Self { kind, partial }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_is_matchable() {
        let err = ExtractError::new(ExtractErrorKind::InvalidPort, ExtractResult::default());
        match err.kind {
            ExtractErrorKind::InvalidPort => {}
            _ => panic!("expected InvalidPort"),
        }
    }

    #[test]
    fn test_error_display_comes_from_kind() {
        let err = ExtractError::new(ExtractErrorKind::UnclosedBracket, ExtractResult::default());
        let display = format!("{}", err);
        assert!(display.contains("bracket"), "got: {}", display);
    }

    #[test]
    fn test_partial_result_is_preserved() {
        let partial = ExtractResult {
            scheme: "https://".to_string(),
            ..ExtractResult::default()
        };
        let err = ExtractError::new(ExtractErrorKind::InvalidHostChars, partial);
        assert_eq!(err.partial.scheme, "https://");
        assert!(err.partial.domain.is_empty());
    }
}
