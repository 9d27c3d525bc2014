//! Single-slot toast messages.
//!
//! At most one toast exists at a time. Showing a toast evicts the current one
//! immediately. Each toast moves through `Entering -> Visible -> Leaving` and
//! is then removed, either on its own timer or after an explicit dismiss.
//!
//! Timers run as detached tokio tasks. A task only acts if the toast it was
//! spawned for is still the current one, so stale timers from an evicted
//! toast never touch its replacement.

use core::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// Parse a kind name. Unknown names fall back to `Info`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
            Self::Warning => "fa-exclamation-triangle",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one shown toast. Ids are never reused within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    /// CSS class driving the slide transition.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Visible => "visible",
            Self::Leaving => "leaving",
        }
    }
}

/// A toast currently occupying the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// Lifecycle durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// Delay before the entrance transition starts.
    pub enter: Duration,
    /// How long the toast stays visible.
    pub display: Duration,
    /// Length of the exit transition before removal.
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(10),
            display: Duration::from_secs(5),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    last_id: u64,
    current: Option<Toast>,
}

/// The single toast slot.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    slot: Arc<Mutex<Slot>>,
    timings: ToastTimings,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(ToastTimings::default())
    }
}

impl ToastSlot {
    #[must_use]
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timings,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // A panic mid-update cannot leave the slot half-written
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show a toast, evicting whatever was there.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let message = message.into();
        let id = {
            let mut slot = self.lock();
            slot.last_id += 1;
            let id = ToastId(slot.last_id);
            if let Some(evicted) = slot.current.take() {
                tracing::debug!(evicted = %evicted.id, "Toast evicted");
            }
            slot.current = Some(Toast {
                id,
                message,
                kind,
                phase: ToastPhase::Entering,
            });
            id
        };
        tracing::debug!(toast_id = %id, kind = %kind, "Toast shown");

        self.spawn_lifecycle(id);
        id
    }

    /// Start the exit transition for `id`. Stale ids are ignored.
    ///
    /// Returns whether the toast was current.
    pub fn dismiss(&self, id: ToastId) -> bool {
        {
            let mut slot = self.lock();
            match slot.current.as_mut() {
                Some(toast) if toast.id == id => {
                    if toast.phase == ToastPhase::Leaving {
                        return true;
                    }
                    toast.phase = ToastPhase::Leaving;
                }
                _ => return false,
            }
        }
        tracing::debug!(toast_id = %id, "Toast dismissed");

        let this = self.clone();
        self.spawn(async move {
            tokio::time::sleep(this.timings.exit).await;
            this.remove_if_current(id);
        });
        true
    }

    /// Snapshot of the current toast.
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.lock().current.clone()
    }

    fn spawn_lifecycle(&self, id: ToastId) {
        let this = self.clone();
        self.spawn(async move {
            let ToastTimings {
                enter,
                display,
                exit,
            } = this.timings;

            tokio::time::sleep(enter).await;
            if !this.advance(id, ToastPhase::Entering, ToastPhase::Visible) {
                return;
            }
            tokio::time::sleep(display).await;
            // A dismissed toast already runs its own removal timer
            if !this.advance(id, ToastPhase::Visible, ToastPhase::Leaving) {
                return;
            }
            tokio::time::sleep(exit).await;
            this.remove_if_current(id);
        });
    }

    fn spawn(&self, task: impl Future<Output = ()> + Send + 'static) {
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(_) => {
                tracing::debug!("No async runtime, toast timers not started");
            }
        }
    }

    fn advance(&self, id: ToastId, from: ToastPhase, to: ToastPhase) -> bool {
        let mut slot = self.lock();
        match slot.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }

    fn remove_if_current(&self, id: ToastId) {
        let mut slot = self.lock();
        if slot.current.as_ref().is_some_and(|t| t.id == id) {
            slot.current = None;
            tracing::debug!(toast_id = %id, "Toast removed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[test]
    fn test_kind_parse_falls_back_to_info() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("ERROR"), ToastKind::Error);
        assert_eq!(ToastKind::parse("warning"), ToastKind::Warning);
        assert_eq!(ToastKind::parse("celebration"), ToastKind::Info);
        assert_eq!(ToastKind::parse("celebration").icon(), "fa-info-circle");
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle() {
        let slot = ToastSlot::default();
        let id = slot.show("Saved", ToastKind::Success);
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Entering);

        wait(11).await;
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Visible);

        wait(5_000).await;
        let toast = slot.current().unwrap();
        assert_eq!(toast.id, id);
        assert_eq!(toast.phase, ToastPhase::Leaving);

        wait(300).await;
        assert!(slot.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_quick_toasts_leave_one() {
        let slot = ToastSlot::default();
        let first = slot.show("First", ToastKind::Info);
        wait(1_000).await;
        let second = slot.show("Second", ToastKind::Success);
        assert_ne!(first, second);

        let toast = slot.current().unwrap();
        assert_eq!(toast.id, second);
        assert_eq!(toast.message, "Second");

        // The first toast's timers have all fired by now
        wait(4_600).await;
        let toast = slot.current().unwrap();
        assert_eq!(toast.id, second);
        assert_eq!(toast.phase, ToastPhase::Visible);

        wait(1_000).await;
        assert!(slot.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss() {
        let slot = ToastSlot::default();
        let id = slot.show("Bye", ToastKind::Info);
        wait(20).await;

        assert!(slot.dismiss(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);

        wait(301).await;
        assert!(slot.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_dismiss_is_ignored() {
        let slot = ToastSlot::default();
        let old = slot.show("Old", ToastKind::Info);
        let new = slot.show("New", ToastKind::Info);

        assert!(!slot.dismiss(old));
        wait(400).await;
        let toast = slot.current().unwrap();
        assert_eq!(toast.id, new);
        assert_eq!(toast.phase, ToastPhase::Visible);
    }
}
