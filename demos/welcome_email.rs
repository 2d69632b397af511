//! Example: Asserting on a raw email captured from an outgoing mail queue.
//!
//! This example demonstrates how to:
//! - Parse a raw RFC 5322 message into a `Message`
//! - Evaluate matchers and print their explanations
//! - Watch matcher evaluations through `tracing`
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=email_matchers=debug cargo run --example welcome_email
//! ```

use email_matchers::{
    deliver_from, deliver_to, have_body_text, have_header, have_subject, Criterion, Matcher,
    MatchOutcome, Message,
};
use tracing_subscriber::EnvFilter;

const RAW: &[u8] = b"From: Jimmy Bean <jimmy_bean@yahoo.com>\r\n\
To: karen@yahoo.com\r\n\
Subject: Welcome, Karen\r\n\
Content-Type: text/plain\r\n\
\r\n\
Your activation code is 482913.\r\n";

fn report(outcome: &MatchOutcome) {
    if outcome.matched {
        println!("  ok    {}", outcome.description);
    } else {
        println!("  FAIL  {}", outcome.description);
        println!("        {}", outcome.failure_message);
    }
}

fn main() -> email_matchers::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let email = Message::parse(RAW)?;

    println!("Checking welcome email...");
    report(&deliver_to(["karen@yahoo.com"]).evaluate(&email));
    report(&deliver_from("jimmy_bean@yahoo.com").evaluate(&email));
    report(&have_subject(Criterion::pattern(r"^Welcome, \w+$")?).evaluate(&email));
    report(&have_body_text(Criterion::pattern(r"\b\d{6}\b")?).evaluate(&email));
    report(&have_header("content_type", "text/plain").evaluate(&email));

    Ok(())
}
