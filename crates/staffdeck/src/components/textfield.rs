//! Single-line text input for form fields.
//!
//! A compact input: a character buffer, a cursor, a placeholder, and focus
//! state. Multi-rune messages (pastes) insert all characters at once.

use minitea::{KeyMsg, KeyType};

use crate::theme::Theme;

/// Single-line text input state.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: Vec<char>,
    cursor: usize,
    placeholder: String,
    focus: bool,
}

impl TextField {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder shown while the field is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
    }

    /// Clear the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Focus the field.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blur (unfocus) the field.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Whether the field has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focus
    }

    /// The cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key event. Only focused fields consume input.
    pub fn update(&mut self, key: &KeyMsg) {
        if !self.focus {
            return;
        }

        match key.key_type {
            KeyType::Runes => {
                for &c in &key.runes {
                    if !c.is_control() {
                        self.value.insert(self.cursor, c);
                        self.cursor += 1;
                    }
                }
            }
            KeyType::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            KeyType::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyType::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyType::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyType::Home => self.cursor = 0,
            KeyType::End => self.cursor = self.value.len(),
            KeyType::CtrlU => {
                // Kill to start of line.
                self.value.drain(..self.cursor);
                self.cursor = 0;
            }
            _ => {}
        }
    }

    /// Render the field contents with a cursor block when focused.
    #[must_use]
    pub fn view(&self, theme: &Theme) -> String {
        if self.value.is_empty() && !self.focus {
            return theme.muted_style().faint().render(&self.placeholder);
        }

        let text: String = self.value.iter().collect();
        if !self.focus {
            return text;
        }

        // Reverse-video block at the cursor position.
        let before: String = self.value[..self.cursor].iter().collect();
        let (under, after): (String, String) = if self.cursor < self.value.len() {
            (
                self.value[self.cursor].to_string(),
                self.value[self.cursor + 1..].iter().collect(),
            )
        } else {
            (" ".to_string(), String::new())
        };
        format!(
            "{before}{}{after}",
            minitea::style::Style::new().reverse().render(&under)
        )
    }
}
