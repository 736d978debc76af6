//! Reusable UI components for staffdeck.

pub mod employee_form;
pub mod page_bar;
pub mod roster_table;
pub mod textfield;

use minitea::style::{Color, Style};

use crate::theme::Theme;

/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    /// Informational status.
    #[default]
    Info,
    /// Success/healthy status.
    Success,
    /// Warning/degraded status.
    Warning,
    /// Error/failed status.
    Error,
}

impl StatusLevel {
    /// Get the icon for this status.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "●",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }
}

/// A transient notification shown above the footer.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display.
    pub message: String,
    /// Severity of the notification.
    pub level: StatusLevel,
}

impl Notification {
    /// Create a new notification.
    #[must_use]
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

/// Render a one-line status banner.
#[must_use]
pub fn banner(theme: &Theme, level: StatusLevel, message: &str) -> String {
    let style = match level {
        StatusLevel::Success => theme.success_style(),
        StatusLevel::Warning => theme.warning_style(),
        StatusLevel::Error => theme.error_style(),
        StatusLevel::Info => theme.info_style(),
    };

    let icon_styled = style.render(level.icon());
    let message_styled = Style::new()
        .foreground(Color::parse(theme.text))
        .render(message);

    Style::new()
        .background(Color::parse(theme.bg_subtle))
        .padding_left(1)
        .padding_right(1)
        .render(&format!("{icon_styled}  {message_styled}"))
}
