use std::sync::LazyLock;
use std::time::Duration;

use leptos::prelude::window;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;

/// Simulated delivery delay before the form reports an outcome.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_RESET: Duration = Duration::from_millis(5000);

/// Minimum message length after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

const SUBJECT_FALLBACK: &str = "Contact from Portfolio";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

// Unreserved characters pass through; everything else is escaped so the
// query survives any mail client's URI parsing.
const MAILTO_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One submission of the contact form. Built on submit, validated, handed to
/// a sender, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Form lifecycle: `Idle -> Submitting -> {Success, Error} -> Idle`. Success
/// returns to idle on its own after [`SUCCESS_RESET`]; error waits for a
/// resubmission or dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Per-field validation messages. Empty means the submission may proceed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Synchronous presence/format checks, run before any state transition. A
/// failed field never aborts the others; all messages surface at once.
pub fn validate(msg: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if msg.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    let email = msg.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some("Please enter a valid email address");
    }

    let message = msg.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters long");
    }

    errors
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendFailure {
    #[error("couldn't open the mail client")]
    MailClientUnavailable,
}

/// Delivery mechanism behind the form. The page wires in [`MailtoSender`];
/// tests substitute their own.
pub trait MessageSender {
    fn send(&self, msg: &ContactMessage) -> Result<(), SendFailure>;
}

/// Composes a `mailto:` URI from the validated message and hands it to the
/// user's mail client.
pub struct MailtoSender {
    recipient: &'static str,
}

impl MailtoSender {
    pub fn new(recipient: &'static str) -> Self {
        Self { recipient }
    }

    pub fn compose(&self, msg: &ContactMessage) -> String {
        let subject = if msg.subject.trim().is_empty() {
            SUBJECT_FALLBACK
        } else {
            msg.subject.trim()
        };
        let body = format!(
            "Hi,\n\nMy name is {}.\n\n{}\n\nBest regards,\n{}\n{}",
            msg.name, msg.message, msg.name, msg.email
        );
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            utf8_percent_encode(subject, MAILTO_COMPONENT),
            utf8_percent_encode(&body, MAILTO_COMPONENT),
        )
    }
}

impl MessageSender for MailtoSender {
    fn send(&self, msg: &ContactMessage) -> Result<(), SendFailure> {
        let link = self.compose(msg);
        window()
            .open_with_url_and_target(&link, "_self")
            .map(|_| ())
            .map_err(|_| SendFailure::MailClientUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let errors = validate(&message("", "a@b.com", "1234567890"));
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);

        let errors = validate(&message("   ", "a@b.com", "1234567890"));
        assert_eq!(errors.name, Some("Name is required"));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let errors = validate(&message("Jo", "bad", "1234567890"));
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.name, None);
        assert_eq!(errors.message, None);

        for bad in ["no-at.example.com", "a@b", "a b@c.com", "@b.com"] {
            assert!(
                !validate(&message("Jo", bad, "1234567890")).is_empty(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_short_message_is_rejected() {
        let errors = validate(&message("Jo", "a@b.com", "short"));
        assert_eq!(
            errors.message,
            Some("Message must be at least 10 characters long")
        );
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, None);

        // Nine characters of padding around whitespace still fails.
        let errors = validate(&message("Jo", "a@b.com", "  123456789  "));
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(&message("Jo", "a@b.com", "1234567890")).is_empty());
    }

    #[test]
    fn test_all_errors_surface_at_once() {
        let errors = validate(&message("", "", ""));
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let sender = MailtoSender::new("me@example.com");
        let mut msg = message("Jo", "a@b.com", "Hello there!");
        msg.subject = "A question & a half".to_string();
        let link = sender.compose(&msg);

        assert!(link.starts_with("mailto:me@example.com?subject="));
        assert!(link.contains("A%20question%20%26%20a%20half"));
        assert!(link.contains("Hello%20there%21"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_mailto_falls_back_to_default_subject() {
        let sender = MailtoSender::new("me@example.com");
        let link = sender.compose(&message("Jo", "a@b.com", "1234567890"));
        assert!(link.contains("subject=Contact%20from%20Portfolio"));
    }

    #[test]
    fn test_custom_sender_receives_the_message() {
        use std::cell::RefCell;

        struct Recording(RefCell<Vec<ContactMessage>>);
        impl MessageSender for Recording {
            fn send(&self, msg: &ContactMessage) -> Result<(), SendFailure> {
                self.0.borrow_mut().push(msg.clone());
                Ok(())
            }
        }

        let sender = Recording(RefCell::new(Vec::new()));
        let msg = message("Jo", "a@b.com", "1234567890");
        assert_eq!(sender.send(&msg), Ok(()));
        assert_eq!(sender.0.borrow().as_slice(), &[msg]);
    }
}
