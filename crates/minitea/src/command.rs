//! Commands for side effects.
//!
//! Commands represent IO operations that produce messages. They are the only
//! way to perform side effects in the Elm Architecture: the update function
//! stays pure and returns a command, and the program executes it on a
//! background thread.

use crate::message::{BatchMsg, Message, QuitMsg};

/// A command that produces a message when executed.
///
/// Commands are lazy: nothing runs until the program executes them. This
/// keeps update functions pure even when they schedule network calls.
///
/// # Example
///
/// ```rust
/// use minitea::{Cmd, Message};
///
/// struct Fetched(Vec<String>);
///
/// fn fetch_names() -> Cmd {
///     Cmd::new(|| Message::new(Fetched(vec!["Al".into(), "Bob".into()])))
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    #[must_use]
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch multiple commands to run concurrently.
///
/// Commands in a batch run in parallel with no ordering guarantees. Use
/// this to return multiple commands from an update function.
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid_cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid_cmds.len() {
        0 => None,
        1 => valid_cmds.into_iter().next(),
        _ => Some(Cmd::new_optional(move || {
            Some(Message::new(BatchMsg(valid_cmds)))
        })),
    }
}

/// Command that signals the program to quit.
#[must_use]
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_new() {
        let cmd = Cmd::new(|| Message::new(42i32));
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 42);
    }

    #[test]
    fn cmd_none() {
        assert!(Cmd::none().is_none());
    }

    #[test]
    fn batch_empty() {
        assert!(batch(vec![]).is_none());
        assert!(batch(vec![None, None]).is_none());
    }

    #[test]
    fn batch_single_passes_through() {
        let cmd = batch(vec![Some(Cmd::new(|| Message::new(1i32)))]).unwrap();
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 1);
    }

    #[test]
    fn batch_many_wraps() {
        let cmd = batch(vec![
            Some(Cmd::new(|| Message::new(1i32))),
            Some(Cmd::new(|| Message::new(2i32))),
        ])
        .unwrap();
        let msg = cmd.execute().unwrap();
        assert!(msg.is::<BatchMsg>());
    }

    #[test]
    fn quit_produces_quit_msg() {
        let msg = quit().execute().unwrap();
        assert!(msg.is::<QuitMsg>());
    }
}
