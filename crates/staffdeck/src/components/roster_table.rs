//! The employee roster table.
//!
//! Renders the current page of employees with a header row, sort carets on
//! the active column, a cursor for row selection, and a "No Employees"
//! placeholder when the view is empty. Rows are at most one page
//! ([`crate::roster::ITEMS_PER_PAGE`]), so the table never scrolls
//! internally.

use minitea::{KeyMsg, KeyType, Message};

use crate::employee::Employee;
use crate::roster::{Directive, Order, SortKind};
use crate::theme::Theme;

/// A column definition.
#[derive(Debug, Clone, Copy)]
struct Column {
    title: &'static str,
    width: usize,
    sort: Option<SortKind>,
}

/// Column layout: name, job title, hire date.
const COLUMNS: [Column; 3] = [
    Column {
        title: "Employee name",
        width: 24,
        sort: Some(SortKind::Name),
    },
    Column {
        title: "Job Title",
        width: 24,
        sort: None,
    },
    Column {
        title: "Date Hired",
        width: 14,
        sort: Some(SortKind::HireDate),
    },
];

/// Placeholder row text for an empty view.
const EMPTY_PLACEHOLDER: &str = "No Employees";

/// Table over the current page of employees.
#[derive(Debug, Clone, Default)]
pub struct RosterTable {
    rows: Vec<Employee>,
    cursor: usize,
}

impl RosterTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows with a fresh page slice.
    ///
    /// The cursor is clamped into the new row range.
    pub fn set_rows(&mut self, rows: Vec<Employee>) {
        self.rows = rows;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// The rows currently displayed.
    #[must_use]
    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    /// The cursor position within the page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The employee under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Employee> {
        self.rows.get(self.cursor)
    }

    /// Move the cursor up by `n` rows.
    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Move the cursor down by `n` rows.
    pub fn move_down(&mut self, n: usize) {
        if self.rows.is_empty() {
            return;
        }
        self.cursor = (self.cursor + n).min(self.rows.len() - 1);
    }

    /// Handle navigation keys. Non-navigation messages are ignored.
    pub fn update(&mut self, msg: &Message) {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key_type {
                KeyType::Up => self.move_up(1),
                KeyType::Down => self.move_down(1),
                KeyType::Runes => match key.runes.as_slice() {
                    ['k'] => self.move_up(1),
                    ['j'] => self.move_down(1),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    /// Render the table.
    #[must_use]
    pub fn view(&self, theme: &Theme, directive: &Directive) -> String {
        let mut out = Self::headers_view(theme, directive);

        if self.rows.is_empty() {
            out.push('\n');
            let total_width: usize = COLUMNS.iter().map(|c| c.width + 2).sum();
            let pad = total_width.saturating_sub(EMPTY_PLACEHOLDER.len()) / 2;
            out.push_str(
                &theme
                    .muted_style()
                    .render(&format!("{}{}", " ".repeat(pad), EMPTY_PLACEHOLDER)),
            );
            return out;
        }

        for (idx, emp) in self.rows.iter().enumerate() {
            out.push('\n');
            out.push_str(&Self::render_row(theme, emp, idx == self.cursor));
        }
        out
    }

    /// Render the header row with sort carets.
    fn headers_view(theme: &Theme, directive: &Directive) -> String {
        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|col| {
                let caret = col
                    .sort
                    .and_then(|kind| directive.order_for(kind))
                    .map_or("", |order| match order {
                        // The caret shows the control's primary direction
                        // pointing down, its reverse pointing up.
                        Order::Asc if col.sort == Some(SortKind::Name) => " ▼",
                        Order::Desc if col.sort == Some(SortKind::Name) => " ▲",
                        Order::Desc => " ▼",
                        Order::Asc => " ▲",
                    });
                let label = truncate(&format!("{}{caret}", col.title), col.width);
                theme
                    .header_style()
                    .padding_left(1)
                    .padding_right(1)
                    .render(&format!("{label:width$}", width = col.width))
            })
            .collect();
        cells.join("")
    }

    /// Render a single employee row.
    fn render_row(theme: &Theme, emp: &Employee, selected: bool) -> String {
        let values = [
            emp.name.as_str(),
            emp.job_title.as_str(),
            emp.hire_date.as_str(),
        ];
        let cells: Vec<String> = COLUMNS
            .iter()
            .zip(values)
            .map(|(col, value)| {
                let cell = truncate(value, col.width);
                format!(" {cell:width$} ", width = col.width)
            })
            .collect();
        let row = cells.join("");

        if selected {
            theme.selected_style().render(&row)
        } else {
            minitea::style::Style::new()
                .foreground(minitea::style::Color::parse(theme.text))
                .render(&row)
        }
    }
}

/// Truncate a string to `width` characters, with an ellipsis when cut.
fn truncate(s: &str, width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= width {
        s.to_string()
    } else if width > 0 {
        let truncated: String = chars[..width.saturating_sub(1)].iter().collect();
        format!("{truncated}…")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitea::style::strip_ansi;

    fn emp(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            job_title: "Customer Support".to_string(),
            hire_date: "2020-01-01".to_string(),
        }
    }

    fn page() -> Vec<Employee> {
        vec![emp(1, "Al"), emp(2, "Bob"), emp(3, "Cara")]
    }

    #[test]
    fn cursor_navigation_clamps() {
        let mut table = RosterTable::new();
        table.set_rows(page());

        assert_eq!(table.cursor(), 0);
        table.move_up(1);
        assert_eq!(table.cursor(), 0);

        table.move_down(10);
        assert_eq!(table.cursor(), 2);
        table.move_down(1);
        assert_eq!(table.cursor(), 2);
    }

    #[test]
    fn set_rows_clamps_cursor() {
        let mut table = RosterTable::new();
        table.set_rows(page());
        table.move_down(2);

        table.set_rows(vec![emp(1, "Al")]);
        assert_eq!(table.cursor(), 0);
        assert_eq!(table.selected().unwrap().name, "Al");
    }

    #[test]
    fn selected_on_empty_is_none() {
        let table = RosterTable::new();
        assert!(table.selected().is_none());
    }

    #[test]
    fn keys_move_cursor() {
        let mut table = RosterTable::new();
        table.set_rows(page());

        table.update(&Message::new(KeyMsg::from_char('j')));
        assert_eq!(table.cursor(), 1);
        table.update(&Message::new(KeyMsg::from_type(KeyType::Down)));
        assert_eq!(table.cursor(), 2);
        table.update(&Message::new(KeyMsg::from_char('k')));
        assert_eq!(table.cursor(), 1);
        table.update(&Message::new(KeyMsg::from_type(KeyType::Up)));
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn view_renders_headers_and_rows() {
        let mut table = RosterTable::new();
        table.set_rows(page());
        let view = strip_ansi(&table.view(&Theme::dark(), &Directive::Unsorted));

        assert!(view.contains("Employee name"));
        assert!(view.contains("Job Title"));
        assert!(view.contains("Date Hired"));
        assert!(view.contains("Bob"));
    }

    #[test]
    fn empty_view_shows_placeholder_row() {
        let table = RosterTable::new();
        let view = strip_ansi(&table.view(&Theme::dark(), &Directive::Unsorted));
        assert!(view.contains("No Employees"));
        // Header plus exactly one placeholder line.
        assert_eq!(view.lines().count(), 2);
    }

    #[test]
    fn carets_follow_directive() {
        let table = RosterTable::new();
        let theme = Theme::dark();

        let asc = strip_ansi(&table.view(&theme, &Directive::Name(Order::Asc)));
        assert!(asc.contains("Employee name ▼"));

        let desc = strip_ansi(&table.view(&theme, &Directive::Name(Order::Desc)));
        assert!(desc.contains("Employee name ▲"));

        let newest = strip_ansi(&table.view(&theme, &Directive::HireDate(Order::Desc)));
        assert!(newest.contains("Date Hired ▼"));

        let none = strip_ansi(&table.view(&theme, &Directive::Unsorted));
        assert!(!none.contains('▼'));
        assert!(!none.contains('▲'));
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("abc", 0), "");
    }
}
