//! Employee service client.
//!
//! The app talks to the employee service through the [`EmployeeService`]
//! trait; [`HttpEmployeeService`] is the production implementation over
//! blocking reqwest (commands already run on background threads, so there
//! is no async runtime to integrate with). Tests substitute an in-memory
//! implementation at the same seam.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::employee::{Employee, EmployeeDraft};

/// Errors surfaced by the employee service.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The service rejected our token. Terminal for the session.
    #[error("not authorized")]
    NotAuthorized,

    /// The service answered with an unexpected status code.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// Transport-level failure (connection, TLS, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result alias for service calls.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// The employee service contract.
///
/// Mirrors the remote API: fetch the whole roster, and mutate by id. Every
/// mutation is followed by a fresh fetch on the caller's side; the service
/// never patches the in-memory list.
pub trait EmployeeService: Send + Sync {
    /// Fetch all employees.
    fn fetch_all(&self) -> Result<Vec<Employee>>;

    /// Delete an employee. `Ok(false)` means the id was already gone.
    fn remove(&self, id: i64) -> Result<bool>;

    /// Create a new employee and return the stored record.
    fn create(&self, draft: &EmployeeDraft) -> Result<Employee>;

    /// Update an existing employee and return the stored record.
    fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<Employee>;
}

/// Blocking HTTP client for the employee service.
pub struct HttpEmployeeService {
    base_url: String,
    token: String,
    client: Client,
}

impl HttpEmployeeService {
    /// Create a client for the service at `base_url`, authenticating every
    /// request with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("staffdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Map auth rejections to [`ServiceError::NotAuthorized`] and any other
    /// non-success status to [`ServiceError::Status`].
    fn check_status(status: StatusCode) -> Result<()> {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ServiceError::NotAuthorized);
        }
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }
        Ok(())
    }
}

impl EmployeeService for HttpEmployeeService {
    fn fetch_all(&self) -> Result<Vec<Employee>> {
        let response = self
            .client
            .get(self.url("employees"))
            .bearer_auth(&self.token)
            .send()?;
        Self::check_status(response.status())?;
        Ok(response.json()?)
    }

    fn remove(&self, id: i64) -> Result<bool> {
        let response = self
            .client
            .delete(self.url(&format!("employees/{id}")))
            .bearer_auth(&self.token)
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check_status(response.status())?;
        Ok(true)
    }

    fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let response = self
            .client
            .post(self.url("employees"))
            .bearer_auth(&self.token)
            .json(draft)
            .send()?;
        Self::check_status(response.status())?;
        Ok(response.json()?)
    }

    fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<Employee> {
        let response = self
            .client
            .put(self.url(&format!("employees/{id}")))
            .bearer_auth(&self.token)
            .json(draft)
            .send()?;
        Self::check_status(response.status())?;
        Ok(response.json()?)
    }
}
