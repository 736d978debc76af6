//! Employee domain model.
//!
//! The [`Employee`] record mirrors the wire shape of the employee service:
//! `{ id, name, jobTitle, hireDate }`. Hire dates travel as ISO-like strings
//! and are compared as parsed timestamps; parsing tolerance lives here so
//! the rest of the app never touches raw date strings.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Job titles offered by the filter control.
///
/// The model tolerates arbitrary titles coming from the service; this list
/// only drives the select UI.
pub const JOB_TITLES: [&str; 3] = [
    "Customer Support",
    "IT Support Specialist",
    "Software Engineer",
];

/// An employee record as served by the employee service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier.
    pub id: i64,
    /// Display name, used for lexicographic sorting.
    pub name: String,
    /// Job title; usually one of [`JOB_TITLES`] but not guaranteed.
    pub job_title: String,
    /// Hire date as an ISO-like string (`2021-06-01` or RFC 3339).
    pub hire_date: String,
}

impl Employee {
    /// The hire date as a unix timestamp, if the string parses.
    #[must_use]
    pub fn hire_timestamp(&self) -> Option<i64> {
        parse_hire_date(&self.hire_date)
    }
}

/// Parse an ISO-like hire date into a unix timestamp.
///
/// Accepts plain dates (`%Y-%m-%d`, midnight UTC) and full RFC 3339
/// timestamps. Returns `None` for anything else; callers decide how
/// unparseable dates order.
#[must_use]
pub fn parse_hire_date(raw: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.timestamp())
}

/// Payload for creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Display name.
    pub name: String,
    /// Job title.
    pub job_title: String,
    /// Hire date as an ISO-like string.
    pub hire_date: String,
}

/// Validation failures for an [`EmployeeDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The name field is empty.
    #[error("name must not be empty")]
    EmptyName,
    /// The job title field is empty.
    #[error("job title must not be empty")]
    EmptyJobTitle,
    /// The hire date does not parse.
    #[error("hire date {0:?} is not a valid date (expected YYYY-MM-DD)")]
    BadHireDate(String),
}

impl EmployeeDraft {
    /// Validate the draft before it is sent to the service.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.job_title.trim().is_empty() {
            return Err(DraftError::EmptyJobTitle);
        }
        if parse_hire_date(&self.hire_date).is_none() {
            return Err(DraftError::BadHireDate(self.hire_date.clone()));
        }
        Ok(())
    }
}
