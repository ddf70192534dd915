//! Contact form state and validation.
//!
//! The form holds a draft of four text fields and the inline error shown
//! for each. Leaving a field validates it, typing into a field clears its
//! error, and submitting validates everything before handing the message
//! to the mail client.

use super::notification::{NotificationCenter, NotificationKind};
use crate::mail::{self, MailLauncher};
use log::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Instant;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const SUCCESS_MESSAGE: &str =
    "Email client opened! Please send the message from your email app.";

/// Specifying the contact form fields, in tab order.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(&self) -> FormField {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

/// The values of one submission attempt.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }
}

/// Outcome of a submit attempt.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubmitOutcome {
    /// Validation failed for the listed fields; nothing was handed off
    Invalid(Vec<FormField>),
    /// The mail link was handed to the mail client
    HandedOff,
    /// Composing or handing off the mail link failed
    Failed,
}

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Validate a single field the way leaving it does. The value is trimmed
/// before any check.
///
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        FormField::Name if value.chars().count() < 2 => Some("Name must be at least 2 characters"),
        FormField::Email if !is_valid_email(value) => Some("Please enter a valid email address"),
        FormField::Subject if value.chars().count() < 3 => {
            Some("Subject must be at least 3 characters")
        }
        FormField::Message if value.chars().count() < 10 => {
            Some("Message must be at least 10 characters")
        }
        _ => None,
    }
}

/// Validate the whole draft the way submitting does. Returns the error of
/// every failing field.
///
pub fn validate_form(draft: &ContactFormDraft) -> BTreeMap<FormField, &'static str> {
    let mut errors = BTreeMap::new();
    if draft.name.trim().chars().count() < 2 {
        errors.insert(
            FormField::Name,
            "Please enter a valid name (at least 2 characters)",
        );
    }
    if !is_valid_email(&draft.email) {
        errors.insert(FormField::Email, "Please enter a valid email address");
    }
    if draft.subject.trim().chars().count() < 3 {
        errors.insert(
            FormField::Subject,
            "Please enter a subject (at least 3 characters)",
        );
    }
    if draft.message.trim().chars().count() < 10 {
        errors.insert(
            FormField::Message,
            "Please enter a message (at least 10 characters)",
        );
    }
    errors
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactFormDraft,
    errors: BTreeMap<FormField, &'static str>,
    focused: Option<FormField>,
    busy: bool,
    recipient: String,
}

impl ContactForm {
    pub fn new(recipient: &str) -> Self {
        ContactForm {
            draft: ContactFormDraft::default(),
            errors: BTreeMap::new(),
            focused: None,
            busy: false,
            recipient: recipient.to_string(),
        }
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Move focus to `field`, blurring the previously focused one.
    ///
    pub fn focus(&mut self, field: FormField) -> &mut Self {
        if let Some(previous) = self.focused {
            if previous != field {
                self.blur(previous);
            }
        }
        self.focused = Some(field);
        self
    }

    pub fn focus_next(&mut self) -> &mut Self {
        let next = self.focused.map(|f| f.next()).unwrap_or(FormField::Name);
        self.focus(next)
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        let previous = self
            .focused
            .map(|f| f.previous())
            .unwrap_or(FormField::Message);
        self.focus(previous)
    }

    /// Clear the draft, every inline error and the focus.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.draft = ContactFormDraft::default();
        self.errors.clear();
        self.focused = None;
        self
    }

    /// Blur the focused field, if any, and leave the form.
    ///
    pub fn leave(&mut self) -> &mut Self {
        if let Some(field) = self.focused.take() {
            self.blur(field);
        }
        self
    }

    /// Validate a single field and show or clear its inline error.
    ///
    pub fn blur(&mut self, field: FormField) -> bool {
        match validate_field(field, self.draft.get(field)) {
            Some(message) => {
                self.errors.insert(field, message);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    /// Replace a field's value, clearing its error without re-validating.
    ///
    pub fn set_value(&mut self, field: FormField, value: &str) -> &mut Self {
        *self.draft.get_mut(field) = value.to_string();
        self.errors.remove(&field);
        self
    }

    /// Type a character into the focused field.
    ///
    pub fn input_char(&mut self, c: char) -> &mut Self {
        if let Some(field) = self.focused {
            self.draft.get_mut(field).push(c);
            self.errors.remove(&field);
        }
        self
    }

    /// Delete the last character of the focused field.
    ///
    pub fn delete_char(&mut self) -> &mut Self {
        if let Some(field) = self.focused {
            self.draft.get_mut(field).pop();
            self.errors.remove(&field);
        }
        self
    }

    /// Validate every field and, if all pass, hand the message to the mail
    /// client. Failed validation shows every applicable error and leaves
    /// the draft intact. A hand-off failure is reported through an error
    /// notification pointing at the recipient address.
    ///
    pub fn submit(
        &mut self,
        launcher: &mut dyn MailLauncher,
        notifications: &mut NotificationCenter,
        now: Instant,
    ) -> SubmitOutcome {
        self.errors = validate_form(&self.draft);
        if !self.errors.is_empty() {
            let fields: Vec<FormField> = self.errors.keys().copied().collect();
            debug!("Contact form rejected, invalid fields: {:?}", fields);
            return SubmitOutcome::Invalid(fields);
        }

        self.busy = true;
        let result = mail::compose_mailto(&self.recipient, &self.draft)
            .and_then(|uri| launcher.launch(&uri));
        let outcome = match result {
            Ok(()) => {
                info!("Handed contact message to the mail client");
                notifications.show(NotificationKind::Success, SUCCESS_MESSAGE, now);
                self.reset();
                SubmitOutcome::HandedOff
            }
            Err(e) => {
                warn!("Mail hand-off failed: {}", e);
                notifications.show(
                    NotificationKind::Error,
                    &format!(
                        "Sorry, there was an error. Please try sending an email directly to {}",
                        self.recipient
                    ),
                    now,
                );
                SubmitOutcome::Failed
            }
        };
        self.busy = false;
        outcome
    }
}
