//! Theme definitions for staffdeck.
//!
//! Semantic color tokens and style helpers so components never hardcode
//! colors.

use minitea::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Theme preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreset {
    /// Dark backgrounds, bright text.
    #[default]
    Dark,
    /// Light backgrounds, dark text.
    Light,
}

impl ThemePreset {
    /// Get the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Semantic color tokens for the application.
///
/// Colors are hex strings parsed by the styling layer; everything renders
/// through the helpers below.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme preset being used.
    pub preset: ThemePreset,
    /// Brand color, interactive highlights.
    pub primary: &'static str,
    /// Healthy, positive states.
    pub success: &'static str,
    /// Needs attention.
    pub warning: &'static str,
    /// Failed, action needed.
    pub error: &'static str,
    /// Informational highlight.
    pub info: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// De-emphasized text.
    pub muted: &'static str,
    /// Subtle background for headers.
    pub bg_subtle: &'static str,
    /// Background for the selected row.
    pub bg_highlight: &'static str,
    /// Border color for modals.
    pub border: &'static str,
}

impl Theme {
    /// Build a theme from a preset.
    #[must_use]
    pub const fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
        }
    }

    /// The dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            preset: ThemePreset::Dark,
            primary: "#7d56f4",
            success: "#22c55e",
            warning: "#eab308",
            error: "#ef4444",
            info: "#38bdf8",
            text: "#fafafa",
            muted: "#8b8b8b",
            bg_subtle: "#2a2a2e",
            bg_highlight: "#3b3b42",
            border: "#5b5b66",
        }
    }

    /// The light theme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            preset: ThemePreset::Light,
            primary: "#6d28d9",
            success: "#15803d",
            warning: "#a16207",
            error: "#b91c1c",
            info: "#0369a1",
            text: "#1f1f24",
            muted: "#6b7280",
            bg_subtle: "#e5e7eb",
            bg_highlight: "#dbeafe",
            border: "#9ca3af",
        }
    }

    /// Style for the app title.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::new().bold().foreground(Color::parse(self.primary))
    }

    /// Style for section headings and the table header row.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::new()
            .bold()
            .foreground(Color::parse(self.text))
            .background(Color::parse(self.bg_subtle))
    }

    /// Style for de-emphasized text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().foreground(Color::parse(self.muted))
    }

    /// Style for success messages.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::new().foreground(Color::parse(self.success))
    }

    /// Style for warnings.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::new().foreground(Color::parse(self.warning))
    }

    /// Style for errors.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::new().bold().foreground(Color::parse(self.error))
    }

    /// Style for informational messages.
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::new().foreground(Color::parse(self.info))
    }

    /// Style for the selected table row.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::new()
            .bold()
            .foreground(Color::parse(self.primary))
            .background(Color::parse(self.bg_highlight))
    }

    /// Border color for modal frames.
    #[must_use]
    pub fn border_color(&self) -> Color {
        Color::parse(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
