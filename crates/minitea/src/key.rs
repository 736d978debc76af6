//! Keyboard input handling.
//!
//! Types for representing keyboard events: special keys, control
//! combinations, and regular character input, plus the translation from
//! crossterm events.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

/// Keyboard key event message.
///
/// `KeyMsg` is sent to the program's update function when a key is pressed.
///
/// # Example
///
/// ```rust
/// use minitea::{KeyMsg, KeyType};
///
/// fn handle_key(key: &KeyMsg) {
///     match key.key_type {
///         KeyType::Enter => println!("Enter pressed"),
///         KeyType::Runes => println!("Typed: {:?}", key.runes),
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For `KeyType::Runes`, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    #[must_use]
    pub const fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// Key type enumeration.
///
/// The set is intentionally small: the keys the runtime can decode and an
/// application built on it actually binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Ctrl+S.
    CtrlS,
    /// Ctrl+U.
    CtrlU,
    /// Tab.
    Tab,
    /// Shift+Tab (back-tab).
    ShiftTab,
    /// Enter / carriage return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete (forward).
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PgUp,
    /// Page down.
    PgDown,
    /// Regular character input; see `KeyMsg::runes`.
    Runes,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CtrlC => "ctrl+c",
            Self::CtrlS => "ctrl+s",
            Self::CtrlU => "ctrl+u",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Enter => "enter",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::Runes => "runes",
        };
        write!(f, "{name}")
    }
}

/// Translate a crossterm key event into a [`KeyMsg`].
///
/// Unrecognized keys map to an empty `Runes` message so callers can ignore
/// them uniformly.
#[must_use]
pub fn from_crossterm_key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    let msg = match code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => KeyMsg::from_type(KeyType::CtrlC),
            's' => KeyMsg::from_type(KeyType::CtrlS),
            'u' => KeyMsg::from_type(KeyType::CtrlU),
            // Other control combinations are dropped rather than delivered
            // as plain characters.
            _ => KeyMsg::from_runes(Vec::new()),
        },
        KeyCode::Char(c) => KeyMsg::from_char(c),
        KeyCode::Enter => KeyMsg::from_type(KeyType::Enter),
        KeyCode::Esc => KeyMsg::from_type(KeyType::Esc),
        KeyCode::Backspace => KeyMsg::from_type(KeyType::Backspace),
        KeyCode::Delete => KeyMsg::from_type(KeyType::Delete),
        KeyCode::Tab if shift => KeyMsg::from_type(KeyType::ShiftTab),
        KeyCode::Tab => KeyMsg::from_type(KeyType::Tab),
        KeyCode::BackTab => KeyMsg::from_type(KeyType::ShiftTab),
        KeyCode::Up => KeyMsg::from_type(KeyType::Up),
        KeyCode::Down => KeyMsg::from_type(KeyType::Down),
        KeyCode::Left => KeyMsg::from_type(KeyType::Left),
        KeyCode::Right => KeyMsg::from_type(KeyType::Right),
        KeyCode::Home => KeyMsg::from_type(KeyType::Home),
        KeyCode::End => KeyMsg::from_type(KeyType::End),
        KeyCode::PageUp => KeyMsg::from_type(KeyType::PgUp),
        KeyCode::PageDown => KeyMsg::from_type(KeyType::PgDown),
        _ => KeyMsg::from_runes(Vec::new()),
    };

    if alt { msg.with_alt() } else { msg }
}

impl KeyMsg {
    /// Create a new key message from multiple characters (e.g. from paste).
    #[must_use]
    pub const fn from_runes(runes: Vec<char>) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes,
            alt: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_char() {
        let key = KeyMsg::from_char('a');
        assert_eq!(key.key_type, KeyType::Runes);
        assert_eq!(key.runes, vec!['a']);
        assert_eq!(key.to_string(), "a");
    }

    #[test]
    fn key_display_special() {
        assert_eq!(KeyMsg::from_type(KeyType::Enter).to_string(), "enter");
        assert_eq!(KeyMsg::from_type(KeyType::ShiftTab).to_string(), "shift+tab");
        assert_eq!(KeyMsg::from_char('x').with_alt().to_string(), "alt+x");
    }

    #[test]
    fn crossterm_plain_char() {
        let key = from_crossterm_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Runes);
        assert_eq!(key.runes, vec!['q']);
    }

    #[test]
    fn crossterm_ctrl_c() {
        let key = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlC);
    }

    #[test]
    fn crossterm_shift_tab() {
        let key = from_crossterm_key(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key.key_type, KeyType::ShiftTab);

        let key = from_crossterm_key(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::ShiftTab);
    }

    #[test]
    fn crossterm_unknown_ctrl_is_dropped() {
        let key = from_crossterm_key(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::Runes);
        assert!(key.runes.is_empty());
    }

    #[test]
    fn crossterm_alt_modifier() {
        let key = from_crossterm_key(KeyCode::Char('f'), KeyModifiers::ALT);
        assert!(key.alt);
        assert_eq!(key.to_string(), "alt+f");
    }
}
