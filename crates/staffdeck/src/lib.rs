#![forbid(unsafe_code)]

//! # staffdeck
//!
//! A keyboard-driven terminal client for an employee-management service:
//! an employee table with sorting, job-title filtering, fixed-size
//! pagination, and add/edit/delete through a modal form.
//!
//! The crate exposes its modules so the binary and the integration tests
//! share code:
//!
//! - [`app`] - top-level model: routing, commands, chrome
//! - [`roster`] - the pure sort/filter/paginate pipeline and view state
//! - [`employee`] - the employee record and draft payloads
//! - [`service`] - the employee service trait and HTTP client
//! - [`components`] - table, page bar, modal form, text field, banners
//! - [`config`]/[`cli`]/[`logging`] - runtime wiring
//! - [`test_support`] - in-memory service and fixtures for tests

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod employee;
pub mod logging;
pub mod messages;
pub mod roster;
pub mod service;
pub mod test_support;
pub mod theme;
