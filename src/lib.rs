//! # email-matchers
//!
//! Assertion matchers for verifying the emails your application sends.
//!
//! This crate provides matchers for:
//! - Recipients, exactly as a set ([`deliver_to`], [`cc_to`], [`bcc_to`]) and reply-to ([`reply_to`])
//! - The sender, display name included ([`deliver_from`])
//! - The subject of one email or of any email in a mailbox ([`have_subject`], [`include_email_with_subject`])
//! - Body text ([`have_body_text`]) and headers ([`have_header`])
//!
//! Every matcher accepts either a literal or a pattern, and explains itself
//! for both the positive and the negated assertion.
//!
//! ## Quick Start
//!
//! ```
//! use email_matchers::{deliver_from, deliver_to, have_subject, Matcher, Message};
//!
//! let email = Message::builder()
//!     .from("Jimmy Bean <jimmy_bean@yahoo.com>")
//!     .to_all(["james@yahoo.com", "karen@yahoo.com"])
//!     .subject("Welcome aboard")
//!     .build()
//!     .expect("valid message");
//!
//! deliver_to(["karen@yahoo.com", "james@yahoo.com"]).evaluate(&email).assert_matched();
//! deliver_from("Jimmy Bean <jimmy_bean@yahoo.com>").evaluate(&email).assert_matched();
//! have_subject("Welcome").evaluate(&email).assert_not_matched();
//! ```
//!
//! ## Literals and Patterns
//!
//! Strings are literals, [`Regex`](regex::Regex)es are patterns. Patterns match
//! when found anywhere in the value. Literals must equal the subject or a
//! header value, but only need to appear somewhere in the body:
//!
//! ```
//! use email_matchers::{have_body_text, have_subject, Matcher, Message};
//! use regex::Regex;
//!
//! let email = Message::builder()
//!     .subject(" -- The Subject --")
//!     .body("foo bar baz")
//!     .build()
//!     .unwrap();
//!
//! assert!(have_subject(Regex::new("The Subject").unwrap()).matches(&email));
//! assert!(!have_subject("The Subject").matches(&email));
//! assert!(have_body_text("bar").matches(&email));
//! ```
//!
//! ## Failure Messages
//!
//! ```
//! use email_matchers::{reply_to, Matcher, Message};
//!
//! let email = Message::builder().reply_to("freddy_noe@yahoo.com").build().unwrap();
//! let outcome = reply_to("jimmy_bean@yahoo.com").evaluate(&email);
//!
//! assert_eq!(
//!     outcome.failure_message,
//!     r#"expected email to reply to "jimmy_bean@yahoo.com", but it replied to "freddy_noe@yahoo.com""#
//! );
//! ```
//!
//! ## Your Own Types
//!
//! Matchers read messages through the [`Email`] trait and addresses through
//! [`AddressLike`], so existing mail and user types can be used directly.
//! Raw RFC 5322 mail can be loaded with [`Message::parse`].
//!
//! ## Observability
//!
//! Every evaluation emits a `tracing` debug event with the `matcher`
//! description and the `matched` verdict. Install a subscriber to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
pub mod address;
pub mod criterion;
pub mod error;
pub mod format;
pub mod matcher;
pub mod matchers;
pub mod message;

// Internal modules
mod parser;

// Re-exports for ergonomic API
pub use address::{Address, AddressLike};
pub use criterion::{Criterion, LiteralRule};
pub use error::{Error, ErrorCategory, Result};
pub use matcher::{MatchOutcome, Matcher};
pub use matchers::{
    bcc_to, cc_to, deliver_from, deliver_to, have_body_text, have_header, have_subject,
    include_email_with_subject, reply_to,
};
pub use message::{header_key, Email, Message, MessageBuilder};
