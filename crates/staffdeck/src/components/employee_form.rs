//! Add/edit employee modal form.
//!
//! A centered modal with three fields: name, job title (a select over the
//! known titles), and hire date. Submitting validates the draft and emits
//! [`FormMsg::Submitted`]; Esc emits [`FormMsg::Cancelled`]. The form owns
//! no service access; the app turns submissions into create/update calls.

use minitea::{Cmd, KeyMsg, KeyType, Message};

use super::textfield::TextField;
use crate::employee::{Employee, EmployeeDraft, JOB_TITLES};
use crate::messages::FormMsg;
use crate::theme::Theme;

/// What the form does on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Create a new employee.
    Add,
    /// Update the employee with this id.
    Edit(i64),
}

/// The focusable fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    JobTitle,
    HireDate,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::JobTitle,
            Self::JobTitle => Self::HireDate,
            Self::HireDate => Self::Name,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Name => Self::HireDate,
            Self::JobTitle => Self::Name,
            Self::HireDate => Self::JobTitle,
        }
    }
}

/// Modal form state.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    name: TextField,
    job_title: String,
    hire_date: TextField,
    field: Field,
    error: Option<String>,
    open: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeForm {
    /// Create a closed form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: FormMode::Add,
            name: TextField::new().with_placeholder("Full name"),
            job_title: JOB_TITLES[0].to_string(),
            hire_date: TextField::new().with_placeholder("YYYY-MM-DD"),
            field: Field::Name,
            error: None,
            open: false,
        }
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Open the form empty, for creating a new employee.
    pub fn open_add(&mut self) {
        self.mode = FormMode::Add;
        self.name.reset();
        self.job_title = JOB_TITLES[0].to_string();
        self.hire_date.reset();
        self.open_common();
    }

    /// Open the form pre-filled from an existing employee.
    pub fn open_edit(&mut self, employee: &Employee) {
        self.mode = FormMode::Edit(employee.id);
        self.name.set_value(&employee.name);
        self.job_title = employee.job_title.clone();
        self.hire_date.set_value(&employee.hire_date);
        self.open_common();
    }

    fn open_common(&mut self) {
        self.error = None;
        self.field = Field::Name;
        self.open = true;
        self.sync_focus();
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.open = false;
        self.name.blur();
        self.hire_date.blur();
    }

    fn sync_focus(&mut self) {
        if self.field == Field::Name {
            self.name.focus();
        } else {
            self.name.blur();
        }
        if self.field == Field::HireDate {
            self.hire_date.focus();
        } else {
            self.hire_date.blur();
        }
    }

    /// Cycle the job-title select.
    ///
    /// Titles outside the known list (possible on edit) enter the cycle at
    /// the first position.
    fn cycle_job_title(&mut self, forward: bool) {
        let pos = JOB_TITLES.iter().position(|t| *t == self.job_title);
        let next = match (pos, forward) {
            (Some(i), true) => (i + 1) % JOB_TITLES.len(),
            (Some(i), false) => (i + JOB_TITLES.len() - 1) % JOB_TITLES.len(),
            (None, _) => 0,
        };
        self.job_title = JOB_TITLES[next].to_string();
    }

    /// Build and validate the draft, storing a message on failure.
    fn submit(&mut self) -> Option<Cmd> {
        let draft = EmployeeDraft {
            name: self.name.value().trim().to_string(),
            job_title: self.job_title.clone(),
            hire_date: self.hire_date.value().trim().to_string(),
        };

        if let Err(err) = draft.validate() {
            self.error = Some(err.to_string());
            return None;
        }

        let id = match self.mode {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(id),
        };
        self.close();
        Some(Cmd::new(move || {
            FormMsg::Submitted { id, draft }.into_message()
        }))
    }

    /// Handle input while the modal is open.
    pub fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if !self.open {
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        match key.key_type {
            KeyType::Esc => {
                self.close();
                return Some(Cmd::new(|| FormMsg::Cancelled.into_message()));
            }
            KeyType::CtrlS => return self.submit(),
            KeyType::Enter => {
                // Enter advances until the last field, then submits.
                if self.field == Field::HireDate {
                    return self.submit();
                }
                self.field = self.field.next();
                self.sync_focus();
                return None;
            }
            KeyType::Tab | KeyType::Down => {
                self.field = self.field.next();
                self.sync_focus();
                return None;
            }
            KeyType::ShiftTab | KeyType::Up => {
                self.field = self.field.prev();
                self.sync_focus();
                return None;
            }
            KeyType::Left | KeyType::Right if self.field == Field::JobTitle => {
                self.cycle_job_title(key.key_type == KeyType::Right);
                return None;
            }
            _ => {}
        }

        match self.field {
            Field::Name => self.name.update(key),
            Field::HireDate => self.hire_date.update(key),
            Field::JobTitle => {}
        }
        self.error = None;
        None
    }

    /// Render the modal box.
    #[must_use]
    pub fn view(&self, theme: &Theme) -> String {
        if !self.open {
            return String::new();
        }

        let title = match self.mode {
            FormMode::Add => "Add Employee",
            FormMode::Edit(_) => "Edit Employee",
        };

        let marker = |field: Field| if self.field == field { ">" } else { " " };
        let select = format!("◂ {} ▸", self.job_title);
        let job_view = if self.field == Field::JobTitle {
            theme.selected_style().render(&select)
        } else {
            select
        };

        let mut lines = vec![
            theme.title_style().render(title),
            String::new(),
            format!(
                "{} {}  {}",
                marker(Field::Name),
                theme.header_style().render(" Name      "),
                self.name.view(theme)
            ),
            format!(
                "{} {}  {}",
                marker(Field::JobTitle),
                theme.header_style().render(" Job Title "),
                job_view
            ),
            format!(
                "{} {}  {}",
                marker(Field::HireDate),
                theme.header_style().render(" Hire Date "),
                self.hire_date.view(theme)
            ),
        ];

        if let Some(ref error) = self.error {
            lines.push(String::new());
            lines.push(theme.error_style().render(error));
        }

        lines.push(String::new());
        lines.push(
            theme
                .muted_style()
                .render("Enter save  Tab next field  ◂/▸ choose title  Esc cancel"),
        );

        minitea::style::frame(&lines.join("\n"), theme.border_color())
    }

    /// Render the modal centered in the given screen area.
    #[must_use]
    pub fn view_centered(&self, theme: &Theme, screen_width: usize, screen_height: usize) -> String {
        if !self.open {
            return String::new();
        }

        let modal = self.view(theme);
        let modal_lines: Vec<&str> = modal.lines().collect();
        let modal_height = modal_lines.len();
        let modal_width = modal_lines
            .iter()
            .map(|l| minitea::style::visible_width(l))
            .max()
            .unwrap_or(0);

        let top_padding = screen_height.saturating_sub(modal_height) / 2;
        let left_padding = screen_width.saturating_sub(modal_width) / 2;
        let left_pad = " ".repeat(left_padding);

        let mut lines = Vec::with_capacity(screen_height);
        for _ in 0..top_padding {
            lines.push(String::new());
        }
        for line in modal_lines {
            lines.push(format!("{left_pad}{line}"));
        }
        while lines.len() < screen_height {
            lines.push(String::new());
        }

        lines.join("\n")
    }
}
