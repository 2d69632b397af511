//! The message fields the matchers read.
//!
//! Matchers only see a message through the [`Email`] trait, so any mail type
//! can be asserted on once it exposes these fields. [`Message`] is a plain
//! implementation, built with [`Message::builder()`] or parsed from raw bytes
//! with [`Message::parse`]:
//!
//! ```
//! use email_matchers::{Email, Message};
//!
//! let message = Message::builder()
//!     .from("Jimmy Bean <jimmy_bean@yahoo.com>")
//!     .to("karen@yahoo.com")
//!     .subject("Welcome")
//!     .body("Hello Karen")
//!     .header("content_type", "text/plain")
//!     .build()
//!     .expect("valid message");
//!
//! assert_eq!(message.subject(), "Welcome");
//! assert_eq!(message.header("content_type"), Some("text/plain"));
//! ```

use crate::address::{Address, AddressLike};
use crate::error::{Error, Result};
use crate::parser;
use email_address::EmailAddress;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Read-only access to the fields of an email.
///
/// Headers are keyed by symbolic name (see [`header_key`]). A missing field is
/// represented as empty, never as an error.
pub trait Email {
    /// Primary recipients.
    fn to(&self) -> Vec<Address>;

    /// Carbon-copy recipients.
    fn cc(&self) -> Vec<Address> {
        Vec::new()
    }

    /// Blind carbon-copy recipients.
    fn bcc(&self) -> Vec<Address>;

    /// Reply-to addresses, in header order.
    fn reply_to(&self) -> Vec<Address>;

    /// The sender, if any.
    fn from(&self) -> Option<Address>;

    /// The subject line.
    fn subject(&self) -> &str;

    /// The decoded body text.
    fn body(&self) -> &str;

    /// All headers by symbolic key.
    fn headers(&self) -> &BTreeMap<String, String>;

    /// Looks up one header by its exact symbolic key.
    fn header(&self, key: &str) -> Option<&str> {
        self.headers().get(key).map(String::as_str)
    }

    /// How the email is named in failure messages.
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("email")
    }
}

impl<E: Email + ?Sized> Email for &E {
    fn to(&self) -> Vec<Address> {
        (**self).to()
    }

    fn cc(&self) -> Vec<Address> {
        (**self).cc()
    }

    fn bcc(&self) -> Vec<Address> {
        (**self).bcc()
    }

    fn reply_to(&self) -> Vec<Address> {
        (**self).reply_to()
    }

    fn from(&self) -> Option<Address> {
        (**self).from()
    }

    fn subject(&self) -> &str {
        (**self).subject()
    }

    fn body(&self) -> &str {
        (**self).body()
    }

    fn headers(&self) -> &BTreeMap<String, String> {
        (**self).headers()
    }

    fn header(&self, key: &str) -> Option<&str> {
        (**self).header(key)
    }

    fn label(&self) -> Cow<'_, str> {
        (**self).label()
    }
}

/// Converts a header name to its symbolic key: `Content-Type` → `content_type`.
#[must_use]
pub fn header_key(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

/// An in-memory email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub(crate) to: Vec<Address>,
    pub(crate) cc: Vec<Address>,
    pub(crate) bcc: Vec<Address>,
    pub(crate) reply_to: Vec<Address>,
    pub(crate) from: Option<Address>,
    pub(crate) subject: String,
    pub(crate) body: String,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) label: Option<String>,
}

impl Message {
    /// Creates a new message builder.
    #[must_use]
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Parses an RFC 5322 message.
    ///
    /// Headers are stored under their symbolic keys; for multipart mail the
    /// first `text/plain` (or else `text/html`) part becomes the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseEmail`] if the message cannot be parsed, or
    /// [`Error::ExtractBody`] if its body cannot be decoded.
    ///
    /// # Example
    ///
    /// ```
    /// use email_matchers::{Email, Message};
    ///
    /// let raw = b"From: Jimmy Bean <jimmy_bean@yahoo.com>\r\n\
    ///             To: karen@yahoo.com\r\n\
    ///             Subject: Hi\r\n\
    ///             \r\n\
    ///             Hello!";
    /// let message = Message::parse(raw).unwrap();
    /// assert_eq!(message.subject(), "Hi");
    /// assert_eq!(message.header("subject"), Some("Hi"));
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Self> {
        parser::parse_message(raw)
    }
}

impl Email for Message {
    fn to(&self) -> Vec<Address> {
        self.to.clone()
    }

    fn cc(&self) -> Vec<Address> {
        self.cc.clone()
    }

    fn bcc(&self) -> Vec<Address> {
        self.bcc.clone()
    }

    fn reply_to(&self) -> Vec<Address> {
        self.reply_to.clone()
    }

    fn from(&self) -> Option<Address> {
        self.from.clone()
    }

    fn subject(&self) -> &str {
        &self.subject
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    fn label(&self) -> Cow<'_, str> {
        self.label
            .as_deref()
            .map_or(Cow::Borrowed("email"), Cow::Borrowed)
    }
}

/// Builder for [`Message`].
///
/// Address tokens are normalized as they are added; [`build()`](Self::build)
/// validates them.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    reply_to: Vec<Address>,
    from: Option<Address>,
    subject: Option<String>,
    body: Option<String>,
    headers: BTreeMap<String, String>,
    label: Option<String>,
    strict_addresses: bool,
}

impl MessageBuilder {
    /// Adds a primary recipient.
    #[must_use]
    pub fn to(mut self, token: impl AddressLike) -> Self {
        self.to.push(token.to_address());
        self
    }

    /// Adds several primary recipients.
    #[must_use]
    pub fn to_all<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AddressLike,
    {
        self.to.extend(tokens.into_iter().map(|t| t.to_address()));
        self
    }

    /// Adds a carbon-copy recipient.
    #[must_use]
    pub fn cc(mut self, token: impl AddressLike) -> Self {
        self.cc.push(token.to_address());
        self
    }

    /// Adds a blind carbon-copy recipient.
    #[must_use]
    pub fn bcc(mut self, token: impl AddressLike) -> Self {
        self.bcc.push(token.to_address());
        self
    }

    /// Adds a reply-to address.
    #[must_use]
    pub fn reply_to(mut self, token: impl AddressLike) -> Self {
        self.reply_to.push(token.to_address());
        self
    }

    /// Sets the sender.
    #[must_use]
    pub fn from(mut self, token: impl AddressLike) -> Self {
        self.from = Some(token.to_address());
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a header, replacing any earlier value.
    ///
    /// The name is stored under its [`header_key`], so `Content-Type` and
    /// `content_type` address the same header.
    #[must_use]
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(header_key(key.as_ref()), value.into());
        self
    }

    /// Sets how the message is named in failure messages (default: `email`).
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Validates every address with [`EmailAddress`] on build.
    ///
    /// Off by default, so test fixtures may use placeholder addresses.
    #[must_use]
    pub fn strict_addresses(mut self, strict: bool) -> Self {
        self.strict_addresses = strict;
        self
    }

    /// Builds the message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if a token normalized to an empty
    /// address, or [`Error::InvalidEmailFormat`] for a malformed address when
    /// strict validation is on.
    pub fn build(self) -> Result<Message> {
        let strict = self.strict_addresses;
        validate_addresses("to", &self.to, strict)?;
        validate_addresses("cc", &self.cc, strict)?;
        validate_addresses("bcc", &self.bcc, strict)?;
        validate_addresses("reply_to", &self.reply_to, strict)?;
        validate_addresses("from", self.from.as_slice(), strict)?;

        Ok(Message {
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            reply_to: self.reply_to,
            from: self.from,
            subject: self.subject.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            headers: self.headers,
            label: self.label,
        })
    }
}

fn validate_addresses(field: &'static str, addresses: &[Address], strict: bool) -> Result<()> {
    for address in addresses {
        if address.is_empty() {
            return Err(Error::InvalidAddress {
                field,
                token: address.to_string(),
            });
        }
        if strict && !EmailAddress::is_valid(address.address()) {
            return Err(Error::InvalidEmailFormat {
                email: address.address().to_string(),
            });
        }
    }
    Ok(())
}
