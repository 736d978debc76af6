//! Terminal text styling.
//!
//! A small declarative styling layer: build a [`Style`] with colors and
//! text attributes, then [`Style::render`] a string to wrap it in the
//! corresponding ANSI escape sequences. Styles apply per line so multi-line
//! content stays intact.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

/// A terminal color.
///
/// Colors are specified as ANSI 256-palette indices (`"213"`) or hex RGB
/// (`"#7d56f4"`). Anything unparseable renders as no color at all, which
/// degrades gracefully on dumb terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// No color (terminal default).
    #[default]
    None,
    /// ANSI 256-color palette index.
    Ansi(u8),
    /// 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a palette index string or `#rrggbb` hex literal.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16);
                let g = u8::from_str_radix(&hex[2..4], 16);
                let b = u8::from_str_radix(&hex[4..6], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (r, g, b) {
                    return Self::Rgb(r, g, b);
                }
            }
            return Self::None;
        }
        s.parse::<u8>().map_or(Self::None, Self::Ansi)
    }

    /// SGR parameters selecting this color as foreground.
    fn fg_params(self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Ansi(n) => Some(format!("38;5;{n}")),
            Self::Rgb(r, g, b) => Some(format!("38;2;{r};{g};{b}")),
        }
    }

    /// SGR parameters selecting this color as background.
    fn bg_params(self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Ansi(n) => Some(format!("48;5;{n}")),
            Self::Rgb(r, g, b) => Some(format!("48;2;{r};{g};{b}")),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// A declarative text style.
///
/// # Example
///
/// ```rust
/// use minitea::style::{Color, Style};
///
/// let header = Style::new()
///     .bold()
///     .foreground(Color::parse("#fafafa"))
///     .padding_left(1)
///     .padding_right(1);
/// let out = header.render("Employees");
/// assert!(out.contains("Employees"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    bold: bool,
    faint: bool,
    italic: bool,
    underline: bool,
    reverse: bool,
    foreground: Color,
    background: Color,
    padding_left: usize,
    padding_right: usize,
    width: Option<usize>,
}

impl Style {
    /// Create a new empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render text in bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Render text faint/dim.
    #[must_use]
    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Render text in italics.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underline the text.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Swap foreground and background.
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = color.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    /// Pad with spaces on the left, inside the colored region.
    #[must_use]
    pub const fn padding_left(mut self, n: usize) -> Self {
        self.padding_left = n;
        self
    }

    /// Pad with spaces on the right, inside the colored region.
    #[must_use]
    pub const fn padding_right(mut self, n: usize) -> Self {
        self.padding_right = n;
        self
    }

    /// Pad each line with trailing spaces up to a fixed display width.
    #[must_use]
    pub const fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// The SGR prefix for this style, empty when the style is plain.
    fn sgr_prefix(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.faint {
            params.push("2".to_string());
        }
        if self.italic {
            params.push("3".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        if self.reverse {
            params.push("7".to_string());
        }
        if let Some(fg) = self.foreground.fg_params() {
            params.push(fg);
        }
        if let Some(bg) = self.background.bg_params() {
            params.push(bg);
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", params.join(";"))
        }
    }

    /// Apply the style to a string, line by line.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let prefix = self.sgr_prefix();
        let mut out = String::new();
        let mut first = true;
        for line in text.split('\n') {
            if !first {
                out.push('\n');
            }
            first = false;

            let mut body = String::new();
            body.push_str(&" ".repeat(self.padding_left));
            body.push_str(line);
            body.push_str(&" ".repeat(self.padding_right));
            if let Some(w) = self.width {
                let have = visible_width(&body);
                if have < w {
                    body.push_str(&" ".repeat(w - have));
                }
            }

            if prefix.is_empty() {
                out.push_str(&body);
            } else {
                let _ = write!(out, "{prefix}{body}\x1b[0m");
            }
        }
        out
    }
}

/// Display width of a string, excluding ANSI escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Remove ANSI SGR escape sequences from a string.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Wrap multi-line content in a rounded border box.
///
/// Every content line is padded to the widest line; the border takes the
/// given foreground color.
#[must_use]
pub fn frame(content: &str, border_color: Color) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    let border = Style::new().foreground(border_color);
    let top = border.render(&format!("╭{}╮", "─".repeat(inner + 2)));
    let bottom = border.render(&format!("╰{}╯", "─".repeat(inner + 2)));
    let bar = border.render("│");

    let mut out = String::new();
    out.push_str(&top);
    for line in &lines {
        let pad = inner - visible_width(line);
        let _ = write!(out, "\n{bar} {line}{} {bar}", " ".repeat(pad));
    }
    out.push('\n');
    out.push_str(&bottom);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parse_ansi_index() {
        assert_eq!(Color::parse("212"), Color::Ansi(212));
    }

    #[test]
    fn color_parse_hex() {
        assert_eq!(Color::parse("#7d56f4"), Color::Rgb(0x7d, 0x56, 0xf4));
    }

    #[test]
    fn color_parse_garbage_is_none() {
        assert_eq!(Color::parse("plaid"), Color::None);
        assert_eq!(Color::parse("#xyz"), Color::None);
    }

    #[test]
    fn plain_style_is_identity() {
        assert_eq!(Style::new().render("hello"), "hello");
    }

    #[test]
    fn bold_wraps_in_sgr() {
        let out = Style::new().bold().render("hi");
        assert_eq!(out, "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn padding_inside_color() {
        let out = Style::new()
            .foreground(Color::Ansi(1))
            .padding_left(1)
            .padding_right(2)
            .render("x");
        assert_eq!(out, "\x1b[38;5;1m x  \x1b[0m");
    }

    #[test]
    fn width_pads_to_display_width() {
        let out = Style::new().width(5).render("ab");
        assert_eq!(out, "ab   ");
    }

    #[test]
    fn render_is_per_line() {
        let out = Style::new().bold().render("a\nb");
        assert_eq!(out, "\x1b[1ma\x1b[0m\n\x1b[1mb\x1b[0m");
    }

    #[test]
    fn visible_width_ignores_escapes() {
        let styled = Style::new().bold().foreground(Color::Ansi(3)).render("abc");
        assert_eq!(visible_width(&styled), 3);
        assert_eq!(visible_width("abc"), 3);
    }

    #[test]
    fn strip_ansi_removes_sgr() {
        let styled = Style::new().bold().render("abc");
        assert_eq!(strip_ansi(&styled), "abc");
    }

    #[test]
    fn frame_boxes_content() {
        let boxed = frame("ab\ncdef", Color::None);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[3].starts_with('╰'));
        // All lines share the same display width.
        let w = visible_width(lines[0]);
        assert!(lines.iter().all(|l| visible_width(l) == w));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn styling_never_changes_visible_width(s in "[a-zA-Z0-9 ]{0,24}") {
                let styled = Style::new()
                    .bold()
                    .foreground(Color::Ansi(4))
                    .background(Color::Rgb(10, 20, 30))
                    .render(&s);
                prop_assert_eq!(visible_width(&styled), visible_width(&s));
            }

            #[test]
            fn strip_ansi_recovers_plain_text(s in "[a-zA-Z0-9 ]{0,24}") {
                let styled = Style::new().underline().foreground(Color::Ansi(99)).render(&s);
                prop_assert_eq!(strip_ansi(&styled), s);
            }

            #[test]
            fn framed_lines_are_rectangular(s in "[a-z ]{0,12}(\n[a-z ]{0,12}){0,3}") {
                let boxed = frame(&s, Color::None);
                let widths: Vec<usize> = boxed.lines().map(visible_width).collect();
                prop_assert!(widths.windows(2).all(|w| w[0] == w[1]));
            }
        }
    }
}
