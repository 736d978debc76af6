//! Shared test infrastructure.
//!
//! An in-memory [`FakeService`] standing in for the HTTP employee service,
//! plus fixture data and key helpers, used by the unit tests here and the
//! integration suites under `tests/`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use minitea::{KeyMsg, KeyType, Message};

use crate::employee::{Employee, EmployeeDraft};
use crate::service::{EmployeeService, Result, ServiceError};

/// In-memory employee service.
///
/// Behaves like the remote API: fetch returns a snapshot, deletes report
/// whether anything was removed, creates assign fresh ids. Failure modes
/// are toggled per call site with the `fail_*`/`unauthorized` switches.
pub struct FakeService {
    records: Mutex<Vec<Employee>>,
    next_id: AtomicI64,
    /// When set, every call answers NotAuthorized.
    pub unauthorized: AtomicBool,
    /// When set, fetches fail with a transport-style error.
    pub fail_fetch: AtomicBool,
    /// When set, mutations fail with a transport-style error.
    pub fail_mutation: AtomicBool,
}

impl FakeService {
    /// Create a service seeded with the given records.
    #[must_use]
    pub fn with_records(records: Vec<Employee>) -> Self {
        let next_id = records.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            records: Mutex::new(records),
            next_id: AtomicI64::new(next_id),
            unauthorized: AtomicBool::new(false),
            fail_fetch: AtomicBool::new(false),
            fail_mutation: AtomicBool::new(false),
        }
    }

    /// Current snapshot of the stored records.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Employee> {
        self.records.lock().expect("service lock poisoned").clone()
    }

    fn guard(&self, failing: &AtomicBool) -> Result<()> {
        if self.unauthorized.load(Ordering::SeqCst) {
            return Err(ServiceError::NotAuthorized);
        }
        if failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(())
    }
}

impl EmployeeService for FakeService {
    fn fetch_all(&self) -> Result<Vec<Employee>> {
        self.guard(&self.fail_fetch)?;
        Ok(self.snapshot())
    }

    fn remove(&self, id: i64) -> Result<bool> {
        self.guard(&self.fail_mutation)?;
        let mut records = self.records.lock().expect("service lock poisoned");
        let before = records.len();
        records.retain(|e| e.id != id);
        Ok(records.len() < before)
    }

    fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        self.guard(&self.fail_mutation)?;
        let employee = Employee {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name.clone(),
            job_title: draft.job_title.clone(),
            hire_date: draft.hire_date.clone(),
        };
        self.records
            .lock()
            .expect("service lock poisoned")
            .push(employee.clone());
        Ok(employee)
    }

    fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<Employee> {
        self.guard(&self.fail_mutation)?;
        let mut records = self.records.lock().expect("service lock poisoned");
        let record = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ServiceError::Status(reqwest::StatusCode::NOT_FOUND))?;
        record.name = draft.name.clone();
        record.job_title = draft.job_title.clone();
        record.hire_date = draft.hire_date.clone();
        Ok(record.clone())
    }
}

/// A deterministic eight-person roster spanning all three job titles and
/// two pages, with one duplicate name for stability checks.
#[must_use]
pub fn sample_roster() -> Vec<Employee> {
    let rows = [
        (1, "Bob", "Software Engineer", "2020-01-01"),
        (2, "Al", "Customer Support", "2021-06-01"),
        (3, "Cara", "Software Engineer", "2019-03-15"),
        (4, "Dana", "IT Support Specialist", "2022-02-02"),
        (5, "Ed", "Customer Support", "2018-11-30"),
        (6, "Fay", "Software Engineer", "2023-07-19"),
        (7, "Bob", "IT Support Specialist", "2020-05-05"),
        (8, "Gil", "Customer Support", "2024-01-08"),
    ];
    rows.into_iter()
        .map(|(id, name, job_title, hire_date)| Employee {
            id,
            name: name.to_string(),
            job_title: job_title.to_string(),
            hire_date: hire_date.to_string(),
        })
        .collect()
}

/// A character key press as a message.
#[must_use]
pub fn press(c: char) -> Message {
    Message::new(KeyMsg::from_char(c))
}

/// A special key press as a message.
#[must_use]
pub fn key(key_type: KeyType) -> Message {
    Message::new(KeyMsg::from_type(key_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_service_round_trip() {
        let service = FakeService::with_records(sample_roster());
        assert_eq!(service.fetch_all().unwrap().len(), 8);

        assert!(service.remove(1).unwrap());
        assert!(!service.remove(1).unwrap());
        assert_eq!(service.fetch_all().unwrap().len(), 7);
    }

    #[test]
    fn fake_service_create_assigns_fresh_ids() {
        let service = FakeService::with_records(sample_roster());
        let draft = EmployeeDraft {
            name: "Hank".to_string(),
            job_title: "Customer Support".to_string(),
            hire_date: "2024-05-01".to_string(),
        };
        let created = service.create(&draft).unwrap();
        assert_eq!(created.id, 9);
        assert_eq!(service.fetch_all().unwrap().len(), 9);
    }

    #[test]
    fn fake_service_update_replaces_fields() {
        let service = FakeService::with_records(sample_roster());
        let draft = EmployeeDraft {
            name: "Robert".to_string(),
            job_title: "Software Engineer".to_string(),
            hire_date: "2020-01-01".to_string(),
        };
        let updated = service.update(1, &draft).unwrap();
        assert_eq!(updated.name, "Robert");
        assert!(service
            .fetch_all()
            .unwrap()
            .iter()
            .any(|e| e.id == 1 && e.name == "Robert"));
    }

    #[test]
    fn unauthorized_switch_rejects_everything() {
        let service = FakeService::with_records(sample_roster());
        service.unauthorized.store(true, Ordering::SeqCst);
        assert!(matches!(
            service.fetch_all(),
            Err(ServiceError::NotAuthorized)
        ));
        assert!(matches!(service.remove(1), Err(ServiceError::NotAuthorized)));
    }

    #[test]
    fn sample_roster_spans_two_pages() {
        assert!(sample_roster().len() > crate::roster::ITEMS_PER_PAGE);
    }
}
