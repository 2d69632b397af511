//! Internal module for parsing raw email content into a [`Message`].

use crate::address::Address;
use crate::error::{Error, Result};
use crate::message::{header_key, Message};
use mailparse::{addrparse_header, parse_mail, MailAddr, MailHeaderMap, ParsedMail};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Parses an RFC 5322 message.
///
/// Unparsable address headers are logged and treated as empty rather than
/// failing the whole message.
pub(crate) fn parse_message(raw: &[u8]) -> Result<Message> {
    let parsed = parse_mail(raw).map_err(|source| Error::ParseEmail { source })?;

    let body = extract_body_text(&parsed).map_err(|source| Error::ExtractBody { source })?;

    let mut headers = BTreeMap::new();
    for header in &parsed.headers {
        // First occurrence wins, like a header lookup on the raw mail.
        headers
            .entry(header_key(&header.get_key()))
            .or_insert_with(|| header.get_value());
    }

    let message = Message {
        to: addresses(&parsed, "To"),
        cc: addresses(&parsed, "Cc"),
        bcc: addresses(&parsed, "Bcc"),
        reply_to: addresses(&parsed, "Reply-To"),
        from: addresses(&parsed, "From").into_iter().next(),
        subject: parsed
            .headers
            .get_first_value("Subject")
            .unwrap_or_default(),
        body,
        headers,
        label: None,
    };

    debug!(
        headers = message.headers.len(),
        body_len = message.body.len(),
        "Parsed email"
    );
    Ok(message)
}

/// Collects the mailboxes of an address header, flattening groups.
fn addresses(parsed: &ParsedMail<'_>, name: &str) -> Vec<Address> {
    let Some(header) = parsed.headers.get_first_header(name) else {
        return Vec::new();
    };

    match addrparse_header(header) {
        Ok(list) => list
            .iter()
            .flat_map(|addr| match addr {
                MailAddr::Single(info) => vec![Address::from(info)],
                MailAddr::Group(group) => group.addrs.iter().map(Address::from).collect(),
            })
            .collect(),
        Err(e) => {
            warn!(
                header = name,
                error = %e,
                "Failed to parse address header, treating it as empty"
            );
            Vec::new()
        }
    }
}

/// Extracts text content from a parsed email, handling multipart messages.
fn extract_body_text(
    parsed: &ParsedMail<'_>,
) -> std::result::Result<String, mailparse::MailParseError> {
    if !parsed.subparts.is_empty() {
        // text/plain wins over text/html
        for wanted in ["text/plain", "text/html"] {
            for part in &parsed.subparts {
                if part.ctype.mimetype.eq_ignore_ascii_case(wanted) {
                    if let Ok(body) = part.get_body() {
                        return Ok(body);
                    }
                }
            }
        }

        if let Some(first_part) = parsed.subparts.first() {
            return extract_body_text(first_part);
        }
    }

    parsed.get_body()
}
