//! Main application model.
//!
//! `App` is the top-level minitea model: it owns the roster view state, the
//! table and pagination components, the modal form, and the service handle.
//! Every service call is a command executed off-thread; results come back
//! as [`RosterMsg`] values and flow through `update` like any other event.

use std::sync::Arc;

use minitea::{Cmd, KeyMsg, KeyType, Message, Model, WindowSizeMsg, quit};
use tracing::{error, info, warn};

use crate::components::employee_form::EmployeeForm;
use crate::components::page_bar::PageBar;
use crate::components::roster_table::RosterTable;
use crate::components::{Notification, StatusLevel, banner};
use crate::config::Config;
use crate::employee::{EmployeeDraft, JOB_TITLES};
use crate::messages::{FormMsg, RosterMsg};
use crate::roster::{SortKind, ViewState};
use crate::service::{EmployeeService, ServiceError};
use crate::theme::Theme;

/// Maximum number of notifications to display at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Main application state.
pub struct App {
    theme: Theme,
    service: Arc<dyn EmployeeService>,
    state: ViewState,
    table: RosterTable,
    page_bar: PageBar,
    form: EmployeeForm,
    notifications: Vec<Notification>,
    loading: bool,
    fatal: Option<String>,
    width: usize,
    height: usize,
    ready: bool,
}

impl App {
    /// Create the application over the given service.
    #[must_use]
    pub fn new(config: &Config, service: Arc<dyn EmployeeService>) -> Self {
        Self {
            theme: Theme::from_preset(config.theme_preset),
            service,
            state: ViewState::new(),
            table: RosterTable::new(),
            page_bar: PageBar::new(),
            form: EmployeeForm::new(),
            notifications: Vec::new(),
            loading: false,
            fatal: None,
            width: 80,
            height: 24,
            ready: false,
        }
    }

    /// The roster view state (read-only; all mutation goes through update).
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The table component.
    #[must_use]
    pub const fn table(&self) -> &RosterTable {
        &self.table
    }

    /// Current notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The fatal error that ended the session, if any.
    ///
    /// Set when the service rejects our token; the caller reports it after
    /// the program exits instead of rendering a partial view.
    #[must_use]
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal.as_deref()
    }

    /// Show a notification, trimming to the newest few.
    fn notify(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.notifications.push(Notification::new(message, level));
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Push the current page slice into the table component.
    fn sync_table(&mut self) {
        self.table.set_rows(self.state.page_view().rows);
    }

    /// Command: fetch the whole roster.
    fn fetch_cmd(&self) -> Cmd {
        let service = Arc::clone(&self.service);
        Cmd::new(move || match service.fetch_all() {
            Ok(records) => RosterMsg::Loaded(records).into_message(),
            Err(ServiceError::NotAuthorized) => RosterMsg::NotAuthorized.into_message(),
            Err(err) => RosterMsg::LoadFailed(err.to_string()).into_message(),
        })
    }

    /// Command: delete an employee by id.
    fn delete_cmd(&self, id: i64) -> Cmd {
        let service = Arc::clone(&self.service);
        Cmd::new(move || match service.remove(id) {
            Ok(removed) => RosterMsg::Deleted { id, removed }.into_message(),
            Err(ServiceError::NotAuthorized) => RosterMsg::NotAuthorized.into_message(),
            Err(err) => RosterMsg::DeleteFailed(err.to_string()).into_message(),
        })
    }

    /// Command: create or update an employee from a form submission.
    fn save_cmd(&self, id: Option<i64>, draft: EmployeeDraft) -> Cmd {
        let service = Arc::clone(&self.service);
        Cmd::new(move || {
            let result = match id {
                None => service.create(&draft),
                Some(id) => service.update(id, &draft),
            };
            match result {
                Ok(saved) => RosterMsg::Saved {
                    name: saved.name,
                    created: id.is_none(),
                }
                .into_message(),
                Err(ServiceError::NotAuthorized) => RosterMsg::NotAuthorized.into_message(),
                Err(err) => RosterMsg::SaveFailed(err.to_string()).into_message(),
            }
        })
    }

    fn handle_roster_msg(&mut self, msg: &RosterMsg) -> Option<Cmd> {
        match msg {
            RosterMsg::Loaded(records) => {
                info!(count = records.len(), "roster loaded");
                self.loading = false;
                self.state.set_records(records.clone());
                self.sync_table();
                None
            }
            RosterMsg::LoadFailed(reason) => {
                warn!(%reason, "roster fetch failed");
                self.loading = false;
                self.notify(format!("Fetch failed: {reason}"), StatusLevel::Error);
                None
            }
            RosterMsg::NotAuthorized => {
                error!("service rejected the token");
                self.fatal = Some("Not authorized: the service rejected the token".to_string());
                Some(quit())
            }
            RosterMsg::Deleted { id, removed } => {
                if *removed {
                    info!(id = *id, "employee deleted");
                    self.notify("Employee deleted", StatusLevel::Success);
                    self.loading = true;
                    Some(self.fetch_cmd())
                } else {
                    warn!(id = *id, "employee was already gone");
                    self.notify("Employee was already removed", StatusLevel::Warning);
                    None
                }
            }
            RosterMsg::DeleteFailed(reason) => {
                warn!(%reason, "delete failed");
                self.notify(format!("Delete failed: {reason}"), StatusLevel::Error);
                None
            }
            RosterMsg::Saved { name, created } => {
                info!(%name, created = *created, "employee saved");
                let verb = if *created { "added" } else { "updated" };
                self.notify(format!("{name} {verb}"), StatusLevel::Success);
                self.loading = true;
                Some(self.fetch_cmd())
            }
            RosterMsg::SaveFailed(reason) => {
                warn!(%reason, "save failed");
                self.notify(format!("Save failed: {reason}"), StatusLevel::Error);
                None
            }
        }
    }

    /// Advance the job-title filter: off → each known title → off.
    fn cycle_job_filter(&mut self) {
        let pos = self
            .state
            .directive()
            .job_filter()
            .and_then(|current| JOB_TITLES.iter().position(|t| *t == current));
        match pos {
            None => self.state.select_job_filter(JOB_TITLES[0]),
            Some(i) if i + 1 < JOB_TITLES.len() => {
                self.state.select_job_filter(JOB_TITLES[i + 1]);
            }
            Some(_) => self.state.clear_directive(),
        }
        self.sync_table();
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match key.key_type {
            KeyType::Esc => return Some(quit()),
            KeyType::Left => {
                self.state.prev_page();
                self.sync_table();
                return None;
            }
            KeyType::Right => {
                self.state.next_page();
                self.sync_table();
                return None;
            }
            KeyType::Runes => match key.runes.as_slice() {
                ['q'] => return Some(quit()),
                ['r'] => {
                    self.loading = true;
                    return Some(self.fetch_cmd());
                }
                ['n'] => {
                    self.state.select_sort(SortKind::Name);
                    self.sync_table();
                    return None;
                }
                ['d'] => {
                    self.state.select_sort(SortKind::HireDate);
                    self.sync_table();
                    return None;
                }
                ['f'] => {
                    self.cycle_job_filter();
                    return None;
                }
                ['c'] => {
                    self.state.clear_directive();
                    self.sync_table();
                    return None;
                }
                ['a'] => {
                    self.form.open_add();
                    return None;
                }
                ['e'] => {
                    if let Some(selected) = self.table.selected() {
                        let selected = selected.clone();
                        self.form.open_edit(&selected);
                    }
                    return None;
                }
                ['x'] => {
                    if let Some(selected) = self.table.selected() {
                        info!(id = selected.id, "delete requested");
                        return Some(self.delete_cmd(selected.id));
                    }
                    return None;
                }
                ['h'] => {
                    self.state.prev_page();
                    self.sync_table();
                    return None;
                }
                ['l'] => {
                    self.state.next_page();
                    self.sync_table();
                    return None;
                }
                _ => {}
            },
            _ => {}
        }

        // Row navigation falls through to the table.
        None
    }

    fn render_header(&self) -> String {
        let title = self.theme.title_style().render(" staffdeck ");
        let status = if self.loading {
            self.theme.info_style().render("Fetching…")
        } else {
            self.theme.success_style().render("Connected")
        };
        format!("{title} {status}")
    }

    fn render_controls(&self) -> String {
        let directive = self.state.directive();

        let sort_label = |kind: SortKind, label: &str| {
            directive.order_for(kind).map_or_else(
                || self.theme.muted_style().render(label),
                |order| {
                    let caret = match (kind, order) {
                        (SortKind::Name, crate::roster::Order::Asc)
                        | (SortKind::HireDate, crate::roster::Order::Desc) => '▼',
                        _ => '▲',
                    };
                    self.theme
                        .title_style()
                        .render(&format!("{label} {caret}"))
                },
            )
        };

        let filter = directive.job_filter().map_or_else(
            || self.theme.muted_style().render("off"),
            |title| self.theme.title_style().render(title),
        );

        format!(
            "Sort: {} (n)  {} (d)   Filter: {filter} (f)",
            sort_label(SortKind::Name, "name"),
            sort_label(SortKind::HireDate, "hire date"),
        )
    }

    fn render_notifications(&self) -> String {
        self.notifications
            .iter()
            .map(|n| banner(&self.theme, n.level, &n.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_footer(&self) -> String {
        self.theme.muted_style().render(
            "j/k move  ←/→ page  n name  d date  f filter  c clear  a add  e edit  x delete  r refresh  q quit",
        )
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        Some(self.fetch_cmd())
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.height = size.height as usize;
            self.ready = true;
            return None;
        }

        if let Some(roster_msg) = msg.downcast_ref::<RosterMsg>() {
            return self.handle_roster_msg(roster_msg);
        }

        if let Some(form_msg) = msg.downcast_ref::<FormMsg>() {
            return match form_msg {
                FormMsg::Submitted { id, draft } => Some(self.save_cmd(*id, draft.clone())),
                FormMsg::Cancelled => None,
            };
        }

        // The modal captures all input while open.
        if self.form.is_open() {
            return self.form.update(&msg);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_key(key) {
                return Some(cmd);
            }
        }

        self.table.update(&msg);
        None
    }

    fn view(&self) -> String {
        if !self.ready {
            return "Loading...".to_string();
        }

        if self.form.is_open() {
            return self.form.view_centered(&self.theme, self.width, self.height);
        }

        let pv = self.state.page_view();
        let mut sections = vec![
            self.render_header(),
            String::new(),
            self.render_controls(),
            String::new(),
            self.table.view(&self.theme, self.state.directive()),
            String::new(),
            self.page_bar
                .view(&self.theme, pv.page, pv.total_pages, pv.total_rows),
        ];

        let notifications = self.render_notifications();
        if !notifications.is_empty() {
            sections.push(notifications);
        }
        sections.push(self.render_footer());

        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeService, sample_roster};

    fn app_with(service: Arc<FakeService>) -> App {
        App::new(&Config::for_tests(), service)
    }

    #[test]
    fn init_schedules_a_fetch() {
        let service = Arc::new(FakeService::with_records(sample_roster()));
        let app = app_with(service);
        let msg = app.init().unwrap().execute().unwrap();
        match msg.downcast::<RosterMsg>() {
            Some(RosterMsg::Loaded(records)) => assert_eq!(records.len(), sample_roster().len()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn loaded_records_fill_the_table() {
        let service = Arc::new(FakeService::with_records(sample_roster()));
        let mut app = app_with(service);
        app.update(RosterMsg::Loaded(sample_roster()).into_message());
        assert_eq!(app.state().records().len(), sample_roster().len());
        assert!(!app.table().rows().is_empty());
    }

    #[test]
    fn not_authorized_is_fatal_and_quits() {
        let service = Arc::new(FakeService::with_records(vec![]));
        let mut app = app_with(service);
        let cmd = app.update(RosterMsg::NotAuthorized.into_message()).unwrap();
        assert!(cmd.execute().unwrap().is::<minitea::QuitMsg>());
        assert!(app.fatal_error().is_some());
    }

    #[test]
    fn load_failure_keeps_last_known_good_view() {
        let service = Arc::new(FakeService::with_records(sample_roster()));
        let mut app = app_with(service);
        app.update(RosterMsg::Loaded(sample_roster()).into_message());
        let before = app.state().records().to_vec();

        app.update(RosterMsg::LoadFailed("boom".to_string()).into_message());
        assert_eq!(app.state().records(), before);
        assert!(app
            .notifications()
            .iter()
            .any(|n| n.level == StatusLevel::Error));
    }

    #[test]
    fn notifications_trim_to_newest() {
        let service = Arc::new(FakeService::with_records(vec![]));
        let mut app = app_with(service);
        for i in 0..6 {
            app.notify(format!("msg {i}"), StatusLevel::Info);
        }
        assert_eq!(app.notifications().len(), MAX_NOTIFICATIONS);
        assert!(app.notifications().last().unwrap().message.contains('5'));
    }

    #[test]
    fn cycle_job_filter_walks_titles_then_clears() {
        let service = Arc::new(FakeService::with_records(sample_roster()));
        let mut app = app_with(service);
        app.update(RosterMsg::Loaded(sample_roster()).into_message());

        for title in JOB_TITLES {
            app.cycle_job_filter();
            assert_eq!(app.state().directive().job_filter(), Some(title));
        }
        app.cycle_job_filter();
        assert_eq!(app.state().directive().job_filter(), None);
    }
}
