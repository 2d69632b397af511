//! Error types for the email-matchers crate.
//!
//! Matcher evaluation never fails: an expectation that does not hold is reported
//! through [`MatchOutcome`](crate::matcher::MatchOutcome), not through this type.
//! Errors only arise while building the inputs of an assertion, such as
//! compiling a pattern or parsing a raw message. See [`Error::category`].

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing criteria or messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Configuration / validation errors
    // ─────────────────────────────────────────────────────────────────────────
    /// A pattern criterion could not be compiled.
    #[error("invalid pattern /{pattern}/")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// An address token normalized to an empty address.
    #[error("invalid address in {field}: {token:?}")]
    InvalidAddress {
        /// The message field the token was given for.
        field: &'static str,
        /// The raw token.
        token: String,
    },

    /// Address failed strict format validation.
    #[error("invalid email format: {email}")]
    InvalidEmailFormat {
        /// The invalid email address.
        email: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Email parsing errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to parse email message.
    #[error("failed to parse email")]
    ParseEmail {
        /// The underlying parse error.
        #[source]
        source: mailparse::MailParseError,
    },

    /// Failed to extract email body.
    #[error("failed to extract email body")]
    ExtractBody {
        /// The underlying parse error.
        #[source]
        source: mailparse::MailParseError,
    },
}

impl Error {
    /// Returns the error category for logging purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidPattern { .. }
            | Error::InvalidAddress { .. }
            | Error::InvalidEmailFormat { .. } => ErrorCategory::Configuration,

            Error::ParseEmail { .. } | Error::ExtractBody { .. } => ErrorCategory::Parse,
        }
    }
}

/// Error categories for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid criteria or message construction.
    Configuration,
    /// Raw email parsing errors.
    Parse,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Parse => write!(f, "parse"),
        }
    }
}
