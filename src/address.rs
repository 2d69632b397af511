//! Address normalization for sender and recipient comparisons.
//!
//! Every recipient or sender token is turned into an [`Address`] before it is
//! compared. A token is anything implementing [`AddressLike`]: plain strings,
//! parsed addresses, [`email_address::EmailAddress`], or your own user types.
//!
//! # Example
//!
//! ```
//! use email_matchers::Address;
//!
//! let addr = Address::parse("Jimmy Bean <jimmy_bean@yahoo.com>");
//! assert_eq!(addr.name(), Some("Jimmy Bean"));
//! assert_eq!(addr.address(), "jimmy_bean@yahoo.com");
//!
//! let bare = Address::parse("jimmy_bean@yahoo.com");
//! assert_eq!(bare.name(), None);
//! ```

use mailparse::MailAddr;
use std::borrow::Cow;
use std::fmt;

/// A normalized mailbox: optional display name plus address.
///
/// Two addresses are equal only when both the addresses and the display names
/// agree, so `Jimmy <j@x.com>` and `j@x.com` are different values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    name: Option<String>,
    address: String,
}

impl Address {
    /// Creates an address from its parts.
    ///
    /// An empty display name is stored as absent.
    #[must_use]
    pub fn new(name: Option<impl Into<String>>, address: impl Into<String>) -> Self {
        let name: Option<String> = name.map(Into::into);
        Self {
            name: name.filter(|n| !n.is_empty()),
            address: address.into(),
        }
    }

    /// Parses a `Display Name <address>` token or a bare address.
    ///
    /// Bracketed tokens go through the same RFC 5322 parser as
    /// [`Message::parse`](crate::Message::parse), so quoted and escaped
    /// display names normalize identically on both sides of a comparison.
    /// Tokens without angle brackets, or that do not parse as exactly one
    /// mailbox, are bare addresses with no display name.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.contains('<') {
            if let Ok(list) = mailparse::addrparse(token) {
                if let [MailAddr::Single(info)] = list.as_slice() {
                    return Self::from(info);
                }
            }
        }
        Self {
            name: None,
            address: token.to_string(),
        }
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the bare address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns `true` if the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    /// Checks whether `expected` names this mailbox.
    ///
    /// Addresses must be equal. When `self` carries a display name,
    /// `expected` must carry the same one; a bare `self` accepts any name.
    ///
    /// ```
    /// use email_matchers::Address;
    ///
    /// let named = Address::parse("David <test@gmail.com>");
    /// let bare = Address::parse("test@gmail.com");
    /// assert!(bare.is_same_mailbox(&named));
    /// assert!(!named.is_same_mailbox(&bare));
    /// assert!(!named.is_same_mailbox(&Address::parse("Other <test@gmail.com>")));
    /// ```
    #[must_use]
    pub fn is_same_mailbox(&self, expected: &Address) -> bool {
        self.address == expected.address && (self.name.is_none() || self.name == expected.name)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

impl From<&mailparse::SingleInfo> for Address {
    fn from(info: &mailparse::SingleInfo) -> Self {
        Self::new(info.display_name.as_deref(), info.addr.as_str())
    }
}

/// Anything that can stand in for an email address in a matcher.
///
/// Strings are parsed with [`Address::parse`]. Implement this for your own
/// types (a user record, a recipient row) to pass them to the matchers
/// directly.
///
/// # Example
///
/// ```
/// use email_matchers::AddressLike;
/// use std::borrow::Cow;
///
/// struct User {
///     email: String,
/// }
///
/// impl AddressLike for User {
///     fn address(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.email)
///     }
/// }
///
/// let user = User { email: "jimmy_bean@yahoo.com".into() };
/// assert_eq!(user.to_address().address(), "jimmy_bean@yahoo.com");
/// ```
pub trait AddressLike {
    /// Returns the address text, optionally with a display name.
    fn address(&self) -> Cow<'_, str>;

    /// Normalizes this token into an [`Address`].
    fn to_address(&self) -> Address {
        Address::parse(&self.address())
    }
}

impl AddressLike for str {
    fn address(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AddressLike for String {
    fn address(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AddressLike for Address {
    fn address(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn to_address(&self) -> Address {
        self.clone()
    }
}

impl AddressLike for email_address::EmailAddress {
    fn address(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: AddressLike + ?Sized> AddressLike for &T {
    fn address(&self) -> Cow<'_, str> {
        (**self).address()
    }

    fn to_address(&self) -> Address {
        (**self).to_address()
    }
}
