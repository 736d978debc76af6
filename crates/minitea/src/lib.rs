#![forbid(unsafe_code)]

//! # minitea
//!
//! A pocket Elm-style runtime for terminal applications: a model holds the
//! state, messages carry events, commands run side effects off-thread, and
//! the view is a pure string render.
//!
//! The crate is deliberately small. It provides:
//!
//! - [`Message`] — type-erased events, plus built-ins like [`QuitMsg`] and
//!   [`WindowSizeMsg`]
//! - [`KeyMsg`]/[`KeyType`] — decoded keyboard input
//! - [`Cmd`] — lazy side effects executed on background threads
//! - [`Program`] — the crossterm event loop (raw mode, alternate screen)
//! - [`style`] — declarative ANSI styling
//! - [`simulator`] — drive a [`Model`] in tests without a terminal
//!
//! # Example
//!
//! ```rust,no_run
//! use minitea::{Cmd, Message, Model, Program};
//!
//! struct Hello;
//!
//! impl Model for Hello {
//!     fn init(&self) -> Option<Cmd> { None }
//!     fn update(&mut self, _msg: Message) -> Option<Cmd> { Some(minitea::quit()) }
//!     fn view(&self) -> String { "press any key".to_string() }
//! }
//!
//! # fn main() -> minitea::Result<()> {
//! Program::new(Hello).with_alt_screen().run()?;
//! # Ok(())
//! # }
//! ```

mod command;
mod key;
mod message;
mod program;

pub mod simulator;
pub mod style;

pub use command::{Cmd, batch, quit};
pub use key::{KeyMsg, KeyType, from_crossterm_key};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};
