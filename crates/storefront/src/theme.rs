//! Theme change broadcast and the chart palette.
//!
//! The health chart is an external collaborator. It learns about theme
//! changes through a `watch` channel and reads its colours from
//! [`ChartPalette`], which mirrors the CSS custom properties of each theme.

use petcare_core::Theme;
use serde::Serialize;
use tokio::sync::watch;

/// Broadcasts the current theme to any number of listeners.
#[derive(Debug, Clone)]
pub struct ThemeSignal {
    sender: watch::Sender<Theme>,
}

impl ThemeSignal {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Publish a theme. Having no listeners is fine.
    pub fn publish(&self, theme: Theme) {
        let previous = self.sender.send_replace(theme);
        if previous != theme {
            tracing::debug!(
                theme = theme.as_str(),
                listeners = self.sender.receiver_count(),
                "Theme change broadcast"
            );
        }
    }

    /// Subscribe to theme changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }
}

/// Colours the health chart uses for labels, ticks and grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPalette {
    /// Legend label colour (`--text-primary`).
    pub text_primary: &'static str,
    /// Tick colour (`--text-secondary`).
    pub text_secondary: &'static str,
    /// Grid line colour (`--border-color`).
    pub border: &'static str,
}

impl ChartPalette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text_primary: "#1f2937",
                text_secondary: "#6b7280",
                border: "#e5e7eb",
            },
            Theme::Dark => Self {
                text_primary: "#f9fafb",
                text_secondary: "#9ca3af",
                border: "#374151",
            },
        }
    }

    /// JSON for the chart script's `data-palette` attribute.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_listeners() {
        let signal = ThemeSignal::new(Theme::Light);
        signal.publish(Theme::Dark);
        assert_eq!(signal.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_listener_sees_change() {
        let signal = ThemeSignal::new(Theme::Light);
        let mut rx = signal.subscribe();
        signal.publish(Theme::Dark);
        assert!(rx.changed().await.is_ok());
        assert_eq!(*rx.borrow_and_update(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_ne!(
            ChartPalette::for_theme(Theme::Light),
            ChartPalette::for_theme(Theme::Dark)
        );
        assert!(
            ChartPalette::for_theme(Theme::Dark)
                .to_json()
                .contains("\"textPrimary\":\"#f9fafb\"")
        );
    }
}
