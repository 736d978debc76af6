//! Pagination display for the roster table.
//!
//! Stateless: the page number lives in the view state; this component only
//! renders it and offers the key bindings for navigation hints.

use crate::theme::Theme;

/// Pagination display type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals: "1/5".
    #[default]
    Arabic,
    /// Dot indicators: "•○○○○".
    Dots,
}

/// Pagination bar under the table.
#[derive(Debug, Clone)]
pub struct PageBar {
    /// Display type.
    pub display_type: Type,
    /// Character for the active page in Dots mode.
    pub active_dot: &'static str,
    /// Character for inactive pages in Dots mode.
    pub inactive_dot: &'static str,
}

impl Default for PageBar {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBar {
    /// Create a page bar with Arabic display.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display_type: Type::Arabic,
            active_dot: "•",
            inactive_dot: "○",
        }
    }

    /// Sets the display type.
    #[must_use]
    pub const fn display_type(mut self, t: Type) -> Self {
        self.display_type = t;
        self
    }

    /// Render the bar for the given page state.
    ///
    /// `total_pages` may be 0 for an empty view; the indicator then shows
    /// `0/0`.
    #[must_use]
    pub fn view(&self, theme: &Theme, page: usize, total_pages: usize, total_rows: usize) -> String {
        let indicator = match self.display_type {
            Type::Arabic => Self::arabic_view(page, total_pages),
            Type::Dots => self.dots_view(page, total_pages),
        };
        let count = if total_rows == 1 {
            "1 employee".to_string()
        } else {
            format!("{total_rows} employees")
        };
        format!(
            "{}  {}",
            theme.info_style().render(&indicator),
            theme.muted_style().render(&count)
        )
    }

    fn arabic_view(page: usize, total_pages: usize) -> String {
        if total_pages == 0 {
            "0/0".to_string()
        } else {
            format!("{page}/{total_pages}")
        }
    }

    fn dots_view(&self, page: usize, total_pages: usize) -> String {
        let mut s = String::new();
        for i in 1..=total_pages {
            if i == page {
                s.push_str(self.active_dot);
            } else {
                s.push_str(self.inactive_dot);
            }
        }
        s
    }
}
