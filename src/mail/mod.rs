//! Mail client hand-off.
//!
//! The contact form does not deliver messages itself. It builds a `mailto:`
//! link carrying the subject and body and asks the desktop to open it with
//! the user's mail client. Whether the message is eventually sent is out of
//! our hands.

mod error;

pub use error::MailError;

use crate::state::ContactFormDraft;
use log::*;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

/// Compose the plain-text mail body from the form fields.
///
pub fn compose_body(draft: &ContactFormDraft) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
        draft.name, draft.email, draft.subject, draft.message
    )
}

/// Build the `mailto:` link for the draft, addressed to `recipient`.
///
pub fn compose_mailto(recipient: &str, draft: &ContactFormDraft) -> Result<String, MailError> {
    let recipient = recipient.trim();
    let valid = !recipient.is_empty()
        && recipient.contains('@')
        && !recipient
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#' | '/'));
    if !valid {
        return Err(MailError::InvalidRecipient(recipient.to_string()));
    }
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&compose_body(draft))
    ))
}

/// Something able to open a URI on the user's behalf.
///
pub trait MailLauncher {
    fn launch(&mut self, uri: &str) -> Result<(), MailError>;
}

/// Opens URIs with the platform's default handler.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(uri: &str) -> (String, Command) {
        if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(uri);
            ("open".to_string(), command)
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", uri]);
            ("cmd".to_string(), command)
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(uri);
            ("xdg-open".to_string(), command)
        }
    }
}

/// Spawn `command` with its standard streams detached and wait for it on a
/// background thread so the exited opener is reaped.
///
fn spawn_reaped(program: String, mut command: Command) -> Result<JoinHandle<()>, MailError> {
    // Opener output would corrupt the screen
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| MailError::Launch {
            program: program.clone(),
            source,
        })?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!("{} exited with {}", program, status),
        Ok(_) => (),
        Err(e) => warn!("Could not wait for {}: {}", program, e),
    }))
}

impl MailLauncher for SystemLauncher {
    fn launch(&mut self, uri: &str) -> Result<(), MailError> {
        let (program, command) = SystemLauncher::command(uri);
        debug!("Handing '{}' to {}...", uri, program);
        spawn_reaped(program, command).map(|_| ())
    }
}
