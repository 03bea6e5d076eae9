//! # Notifications
//!
//! Toast messages and their timed lifecycle:
//!
//! ```text
//! Created ──show_delay──▶ Shown ──(display - show_delay)──▶ Hiding ──exit──▶ Removed
//! ```
//!
//! Every toast owns its own timeline; any number may be on screen at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::settings::ToastSettings;

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Class list for the toast element, e.g. `"notification notification-error"`
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// A message queued for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// DOM id for the toast element
    pub fn element_id(&self) -> String {
        format!("toast-{}", self.id.simple())
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToastPhase {
    /// Inserted, still off-screen
    Created,
    /// `show` class applied
    Shown,
    /// `show` removed, exit transition running
    Hiding,
    /// Element detached
    Removed,
}

/// Fixed schedule for one toast, anchored at its insertion time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTimeline {
    pub inserted_at_ms: f64,
    pub show_at_ms: f64,
    pub hide_at_ms: f64,
    pub remove_at_ms: f64,
}

impl ToastTimeline {
    pub fn new(inserted_at_ms: f64, settings: &ToastSettings) -> Self {
        let hide_at_ms = inserted_at_ms + f64::from(settings.display_ms);
        ToastTimeline {
            inserted_at_ms,
            show_at_ms: inserted_at_ms + f64::from(settings.show_delay_ms),
            hide_at_ms,
            remove_at_ms: hide_at_ms + f64::from(settings.exit_ms),
        }
    }

    pub fn phase_at(&self, now_ms: f64) -> ToastPhase {
        if now_ms >= self.remove_at_ms {
            ToastPhase::Removed
        } else if now_ms >= self.hide_at_ms {
            ToastPhase::Hiding
        } else if now_ms >= self.show_at_ms {
            ToastPhase::Shown
        } else {
            ToastPhase::Created
        }
    }

    /// Phase changes after insertion as `(delay from insertion, phase)`, in order.
    pub fn transitions(&self) -> [(u32, ToastPhase); 3] {
        let delay = |at: f64| (at - self.inserted_at_ms).max(0.0) as u32;
        [
            (delay(self.show_at_ms), ToastPhase::Shown),
            (delay(self.hide_at_ms), ToastPhase::Hiding),
            (delay(self.remove_at_ms), ToastPhase::Removed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phases() {
        let timeline = ToastTimeline::new(0.0, &ToastSettings::default());
        assert_eq!(timeline.phase_at(0.0), ToastPhase::Created);
        assert_eq!(timeline.phase_at(99.0), ToastPhase::Created);
        assert_eq!(timeline.phase_at(100.0), ToastPhase::Shown);
        assert_eq!(timeline.phase_at(4_999.0), ToastPhase::Shown);
        assert_eq!(timeline.phase_at(5_000.0), ToastPhase::Hiding);
        assert_eq!(timeline.phase_at(5_299.0), ToastPhase::Hiding);
        assert_eq!(timeline.phase_at(5_300.0), ToastPhase::Removed);
    }

    #[test]
    fn test_transitions_are_relative() {
        let timeline = ToastTimeline::new(12_345.0, &ToastSettings::default());
        assert_eq!(
            timeline.transitions(),
            [
                (100, ToastPhase::Shown),
                (5_000, ToastPhase::Hiding),
                (5_300, ToastPhase::Removed),
            ]
        );
    }

    #[test]
    fn test_independent_timelines() {
        let settings = ToastSettings::default();
        let first = ToastTimeline::new(0.0, &settings);
        let second = ToastTimeline::new(1_000.0, &settings);
        assert_eq!(first.phase_at(5_100.0), ToastPhase::Hiding);
        assert_eq!(second.phase_at(5_100.0), ToastPhase::Shown);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(NotificationKind::Error.class_name(), "notification notification-error");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn test_unique_ids() {
        let a = Notification::success("ok");
        let b = Notification::success("ok");
        assert_ne!(a.id, b.id);
        assert!(a.element_id().starts_with("toast-"));
    }
}
