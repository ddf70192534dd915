//! Transient notifications. At most one is alive at a time.

use std::time::{Duration, Instant};

/// Delay before a new notification finishes sliding in.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Time a leaving notification takes to fade out before removal.
pub const LEAVE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success!",
            NotificationKind::Error => "Info!",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    created: Instant,
    phase: NotificationPhase,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }
}

/// Holds the single visible notification and drives its lifecycle.
///
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    lifetime: Duration,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        NotificationCenter {
            current: None,
            lifetime,
        }
    }

    /// Show a notification, evicting the one currently displayed.
    ///
    pub fn show(&mut self, kind: NotificationKind, message: &str, now: Instant) -> &mut Self {
        self.current = Some(Notification {
            kind,
            message: message.to_string(),
            created: now,
            phase: NotificationPhase::Entering,
        });
        self
    }

    /// Remove the notification right away (close control).
    ///
    pub fn dismiss(&mut self) -> &mut Self {
        self.current = None;
        self
    }

    /// Move the notification through its phases. Returns true if anything
    /// changed.
    ///
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(notification) = self.current.as_ref() else {
            return false;
        };
        let age = now.saturating_duration_since(notification.created);
        let previous = notification.phase;
        let phase = if age >= self.lifetime + LEAVE_DURATION {
            None
        } else if age >= self.lifetime {
            Some(NotificationPhase::Leaving)
        } else if age >= ENTER_DELAY {
            Some(NotificationPhase::Shown)
        } else {
            Some(NotificationPhase::Entering)
        };
        match phase {
            None => {
                self.current = None;
                true
            }
            Some(phase) if phase != previous => {
                if let Some(notification) = self.current.as_mut() {
                    notification.phase = phase;
                }
                true
            }
            Some(_) => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}
