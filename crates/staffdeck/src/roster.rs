//! The roster view pipeline.
//!
//! Takes the raw employee list, the active sort/filter directive, and the
//! current page, and deterministically produces the visible page. The whole
//! pipeline is pure: [`compute`] and [`paginate`] are free functions over
//! their inputs, and [`ViewState`] is a plain value transformed by reducer
//! methods on each UI event.
//!
//! Ordering rules:
//!
//! - Sorts are stable; records comparing equal keep their relative order
//!   from the input sequence.
//! - Name comparison is case-insensitive over Unicode lowercase, which
//!   approximates locale-aware comparison without an ICU dependency.
//! - Hire dates compare as parsed timestamps. Records whose date string
//!   does not parse order after all parseable dates, in both directions,
//!   stable among themselves.

use crate::employee::Employee;

/// Fixed page size for the roster table.
pub const ITEMS_PER_PAGE: usize = 5;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Ascending (A→Z, oldest first).
    Asc,
    /// Descending (Z→A, newest first).
    Desc,
}

impl Order {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Which sort control was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// The name column control.
    Name,
    /// The hire-date column control.
    HireDate,
}

/// The active sort/filter directive.
///
/// Directives are mutually exclusive: selecting a new one replaces the
/// previous one. The job-title filter always carries its value, so a filter
/// directive without a value cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Directive {
    /// Records pass through in their original order.
    #[default]
    Unsorted,
    /// Stable sort by name.
    Name(Order),
    /// Stable sort by hire date. `Desc` means newest first.
    HireDate(Order),
    /// Keep only records whose job title equals the value exactly,
    /// preserving their relative order.
    JobTitle(String),
}

impl Directive {
    /// The active job filter value, if any.
    #[must_use]
    pub fn job_filter(&self) -> Option<&str> {
        match self {
            Self::JobTitle(title) => Some(title),
            _ => None,
        }
    }

    /// The active order for a sort control, if that control is selected.
    ///
    /// Drives the caret indicator next to the column header.
    #[must_use]
    pub const fn order_for(&self, kind: SortKind) -> Option<Order> {
        match (kind, self) {
            (SortKind::Name, Self::Name(order))
            | (SortKind::HireDate, Self::HireDate(order)) => Some(*order),
            _ => None,
        }
    }
}

/// Compute the sorted/filtered view of the records.
///
/// Pure: the input is never mutated, and the output depends only on the
/// arguments. Total over any well-typed employee sequence, including the
/// empty one.
#[must_use]
pub fn compute(records: &[Employee], directive: &Directive) -> Vec<Employee> {
    match directive {
        Directive::Unsorted => records.to_vec(),
        Directive::Name(order) => {
            let mut view = records.to_vec();
            view.sort_by(|a, b| {
                let ord = a.name.to_lowercase().cmp(&b.name.to_lowercase());
                match order {
                    Order::Asc => ord,
                    Order::Desc => ord.reverse(),
                }
            });
            view
        }
        Directive::HireDate(order) => {
            let mut view = records.to_vec();
            view.sort_by(|a, b| hire_date_cmp(a, b, *order));
            view
        }
        Directive::JobTitle(title) => records
            .iter()
            .filter(|emp| emp.job_title == *title)
            .cloned()
            .collect(),
    }
}

/// Compare two employees by hire date.
///
/// Unparseable dates sort after all parseable ones regardless of direction,
/// and compare equal to each other so the stable sort preserves their
/// relative order.
fn hire_date_cmp(a: &Employee, b: &Employee, order: Order) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match (a.hire_timestamp(), b.hire_timestamp()) {
        (Some(x), Some(y)) => match order {
            Order::Asc => x.cmp(&y),
            Order::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Slice a computed view into the requested page.
///
/// Pages are 1-based. Returns the page slice and the total page count
/// (`0` for an empty view). Out-of-range pages are clamped before slicing,
/// though the reducer resets to page 1 on every change that could shrink
/// the view, so clamping is a backstop rather than a code path the UI
/// relies on.
#[must_use]
pub fn paginate(view: &[Employee], page: usize) -> (&[Employee], usize) {
    let total_pages = view.len().div_ceil(ITEMS_PER_PAGE);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * ITEMS_PER_PAGE;
    let end = (start + ITEMS_PER_PAGE).min(view.len());
    if start >= view.len() {
        (&[], total_pages)
    } else {
        (&view[start..end], total_pages)
    }
}

/// Everything the rendering layer needs for one frame of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The employees on the current page, in display order.
    pub rows: Vec<Employee>,
    /// Current page, 1-based. Stays 1 when the view is empty.
    pub page: usize,
    /// Total page count; 0 when the view is empty.
    pub total_pages: usize,
    /// Size of the whole sorted/filtered view.
    pub total_rows: usize,
}

/// The explicit UI state: raw records, the active directive, and the page.
///
/// All mutation goes through reducer methods; each one re-establishes the
/// invariants (page reset on records/directive change, page clamped to the
/// valid range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    records: Vec<Employee>,
    directive: Directive,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// An empty roster with no directive, on page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            directive: Directive::Unsorted,
            page: 1,
        }
    }

    /// The raw records in fetch order.
    #[must_use]
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// The active directive.
    #[must_use]
    pub const fn directive(&self) -> &Directive {
        &self.directive
    }

    /// The current page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Replace the records wholesale, as after a successful fetch.
    ///
    /// Resets to page 1; the directive is kept so a refresh doesn't lose
    /// the user's sort.
    pub fn set_records(&mut self, records: Vec<Employee>) {
        self.records = records;
        self.page = 1;
    }

    /// Activate a sort control.
    ///
    /// Re-activating the control that is already sorting flips its
    /// direction; activating it from any other directive selects its
    /// primary direction (name: ascending, hire date: newest first).
    /// Any active job filter is cleared.
    pub fn select_sort(&mut self, kind: SortKind) {
        self.directive = match kind {
            SortKind::Name => match &self.directive {
                Directive::Name(order) => Directive::Name(order.flipped()),
                _ => Directive::Name(Order::Asc),
            },
            SortKind::HireDate => match &self.directive {
                Directive::HireDate(order) => Directive::HireDate(order.flipped()),
                _ => Directive::HireDate(Order::Desc),
            },
        };
        self.page = 1;
    }

    /// Set a sort directive explicitly (the dropdown's A-Z / Z-A entries).
    pub fn set_directive(&mut self, directive: Directive) {
        self.directive = directive;
        self.page = 1;
    }

    /// Activate the job-title filter with the given value.
    ///
    /// Always selects the filter, regardless of the prior directive;
    /// re-selecting the same value does not toggle anything.
    pub fn select_job_filter(&mut self, title: impl Into<String>) {
        self.directive = Directive::JobTitle(title.into());
        self.page = 1;
    }

    /// Drop the directive and return to the fetch order.
    pub fn clear_directive(&mut self) {
        self.directive = Directive::Unsorted;
        self.page = 1;
    }

    /// Move to the next page, if there is one.
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Move to the previous page, if there is one.
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Jump to a page, clamped to `[1, max(1, total_pages)]`.
    pub fn set_page(&mut self, page: usize) {
        let total = compute(&self.records, &self.directive)
            .len()
            .div_ceil(ITEMS_PER_PAGE);
        self.page = page.clamp(1, total.max(1));
    }

    /// The full sorted/filtered view.
    #[must_use]
    pub fn view(&self) -> Vec<Employee> {
        compute(&self.records, &self.directive)
    }

    /// Run the whole pipeline and hand back the current page.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        let view = compute(&self.records, &self.directive);
        let (slice, total_pages) = paginate(&view, self.page);
        PageView {
            rows: slice.to_vec(),
            page: self.page,
            total_pages,
            total_rows: view.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: i64, name: &str, job_title: &str, hire_date: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            job_title: job_title.to_string(),
            hire_date: hire_date.to_string(),
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            emp(1, "Bob", "Software Engineer", "2020-01-01"),
            emp(2, "Al", "Customer Support", "2021-06-01"),
            emp(3, "Cara", "Software Engineer", "2019-03-15"),
            emp(4, "al", "IT Support Specialist", "2022-02-02"),
        ]
    }

    fn names(view: &[Employee]) -> Vec<&str> {
        view.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn unsorted_preserves_order() {
        let records = sample();
        let view = compute(&records, &Directive::Unsorted);
        assert_eq!(view, records);
    }

    #[test]
    fn name_asc_sorts_case_insensitively() {
        let records = sample();
        let view = compute(&records, &Directive::Name(Order::Asc));
        assert_eq!(names(&view), vec!["Al", "al", "Bob", "Cara"]);
    }

    #[test]
    fn name_desc_keeps_equal_keys_stable() {
        let records = sample();
        let view = compute(&records, &Directive::Name(Order::Desc));
        // "Al" (id 2) appears before "al" (id 4) in the input, so the
        // stable sort keeps that order even descending.
        assert_eq!(names(&view), vec!["Cara", "Bob", "Al", "al"]);
    }

    #[test]
    fn hire_date_desc_is_newest_first() {
        let records = sample();
        let view = compute(&records, &Directive::HireDate(Order::Desc));
        assert_eq!(names(&view), vec!["al", "Al", "Bob", "Cara"]);
    }

    #[test]
    fn hire_date_asc_is_oldest_first() {
        let records = sample();
        let view = compute(&records, &Directive::HireDate(Order::Asc));
        assert_eq!(names(&view), vec!["Cara", "Bob", "Al", "al"]);
    }

    #[test]
    fn malformed_dates_sort_last_in_both_directions() {
        let mut records = sample();
        records.insert(1, emp(9, "Mallory", "Customer Support", "someday"));
        records.push(emp(10, "Trent", "Customer Support", ""));

        for order in [Order::Desc, Order::Asc] {
            let view = compute(&records, &Directive::HireDate(order));
            let tail = &view[view.len() - 2..];
            // Unparseable dates at the end, original order preserved.
            assert_eq!(names(tail), vec!["Mallory", "Trent"]);
        }
    }

    #[test]
    fn job_filter_keeps_matches_in_order() {
        let records = sample();
        let view = compute(&records, &Directive::JobTitle("Software Engineer".to_string()));
        assert_eq!(names(&view), vec!["Bob", "Cara"]);
        assert!(view.len() <= records.len());
    }

    #[test]
    fn job_filter_with_no_matches_is_empty() {
        let records = sample();
        let view = compute(&records, &Directive::JobTitle("Groundskeeper".to_string()));
        assert!(view.is_empty());
    }

    #[test]
    fn compute_never_mutates_input() {
        let records = sample();
        let before = records.clone();
        let _ = compute(&records, &Directive::Name(Order::Desc));
        assert_eq!(records, before);
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = sample();
        let once = compute(&records, &Directive::Name(Order::Asc));
        let twice = compute(&once, &Directive::Name(Order::Asc));
        assert_eq!(once, twice);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let records: Vec<Employee> = (0..12)
            .map(|i| emp(i, &format!("E{i:02}"), "Customer Support", "2020-01-01"))
            .collect();

        let (page1, total) = paginate(&records, 1);
        assert_eq!(total, 3);
        assert_eq!(names(page1), vec!["E00", "E01", "E02", "E03", "E04"]);

        let (page3, _) = paginate(&records, 3);
        assert_eq!(names(page3), vec!["E10", "E11"]);
    }

    #[test]
    fn paginate_empty_view() {
        let (slice, total) = paginate(&[], 1);
        assert!(slice.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        let records = sample();
        let (slice, total) = paginate(&records, 99);
        assert_eq!(total, 1);
        assert_eq!(slice.len(), 4);

        let (slice, _) = paginate(&records, 0);
        assert_eq!(slice.len(), 4);
    }

    #[test]
    fn select_sort_toggles_name() {
        let mut state = ViewState::new();
        state.set_records(sample());

        state.select_sort(SortKind::Name);
        assert_eq!(*state.directive(), Directive::Name(Order::Asc));
        state.select_sort(SortKind::Name);
        assert_eq!(*state.directive(), Directive::Name(Order::Desc));
        state.select_sort(SortKind::Name);
        assert_eq!(*state.directive(), Directive::Name(Order::Asc));
    }

    #[test]
    fn select_sort_hire_date_starts_newest_first() {
        let mut state = ViewState::new();
        state.select_sort(SortKind::HireDate);
        assert_eq!(*state.directive(), Directive::HireDate(Order::Desc));
        state.select_sort(SortKind::HireDate);
        assert_eq!(*state.directive(), Directive::HireDate(Order::Asc));
    }

    #[test]
    fn selecting_sort_clears_job_filter() {
        let mut state = ViewState::new();
        state.select_job_filter("Software Engineer");
        assert_eq!(state.directive().job_filter(), Some("Software Engineer"));

        state.select_sort(SortKind::HireDate);
        assert_eq!(*state.directive(), Directive::HireDate(Order::Desc));
        assert_eq!(state.directive().job_filter(), None);
    }

    #[test]
    fn explicit_directive_selection_replaces_and_resets() {
        let records: Vec<Employee> = (0..12)
            .map(|i| emp(i, &format!("E{i:02}"), "Customer Support", "2020-01-01"))
            .collect();

        let mut state = ViewState::new();
        state.set_records(records);
        state.next_page();

        state.set_directive(Directive::Name(Order::Desc));
        assert_eq!(*state.directive(), Directive::Name(Order::Desc));
        assert_eq!(state.page(), 1);

        // An explicit re-selection is not a toggle.
        state.set_directive(Directive::Name(Order::Desc));
        assert_eq!(*state.directive(), Directive::Name(Order::Desc));
    }

    #[test]
    fn selecting_same_job_filter_does_not_toggle() {
        let mut state = ViewState::new();
        state.select_job_filter("Customer Support");
        state.select_job_filter("Customer Support");
        assert_eq!(
            *state.directive(),
            Directive::JobTitle("Customer Support".to_string())
        );
    }

    #[test]
    fn page_resets_on_records_and_directive_changes() {
        let records: Vec<Employee> = (0..12)
            .map(|i| emp(i, &format!("E{i:02}"), "Customer Support", "2020-01-01"))
            .collect();

        let mut state = ViewState::new();
        state.set_records(records.clone());
        state.next_page();
        assert_eq!(state.page(), 2);

        state.select_sort(SortKind::Name);
        assert_eq!(state.page(), 1);

        state.next_page();
        state.select_job_filter("Customer Support");
        assert_eq!(state.page(), 1);

        state.next_page();
        state.set_records(records);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_navigation_clamps() {
        let mut state = ViewState::new();
        state.set_records(sample());

        state.prev_page();
        assert_eq!(state.page(), 1);
        state.next_page();
        assert_eq!(state.page(), 1); // only 1 page of 4 records

        state.set_page(42);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_view_of_empty_roster() {
        let state = ViewState::new();
        let pv = state.page_view();
        assert!(pv.rows.is_empty());
        assert_eq!(pv.page, 1);
        assert_eq!(pv.total_pages, 0);
        assert_eq!(pv.total_rows, 0);
    }

    #[test]
    fn order_for_drives_carets() {
        let directive = Directive::Name(Order::Desc);
        assert_eq!(directive.order_for(SortKind::Name), Some(Order::Desc));
        assert_eq!(directive.order_for(SortKind::HireDate), None);
        assert_eq!(Directive::Unsorted.order_for(SortKind::Name), None);
    }

    #[test]
    fn two_person_roster_sorts_both_ways() {
        let records = vec![
            emp(1, "Bob", "Software Engineer", "2020-01-01"),
            emp(2, "Al", "Customer Support", "2021-06-01"),
        ];

        let by_name = compute(&records, &Directive::Name(Order::Asc));
        assert_eq!(names(&by_name), vec!["Al", "Bob"]);

        let by_date = compute(&records, &Directive::HireDate(Order::Desc));
        assert_eq!(names(&by_date), vec!["Al", "Bob"]);
    }
}
