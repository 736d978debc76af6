//! Program lifecycle and event loop.
//!
//! The [`Program`] struct manages the lifecycle of a terminal application:
//! raw-mode setup and teardown, event polling, message dispatch, and
//! rendering. Models stay pure; commands run on background threads and post
//! their results back as messages.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::command::Cmd;
use crate::key::from_crossterm_key;
use crate::message::{BatchMsg, InterruptMsg, Message, QuitMsg, WindowSizeMsg};
use crate::KeyType;

/// Errors that can occur when running a program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Raw mode is required for TUI operation; this usually means stdin is
    /// not an interactive terminal.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Elm Architecture contract implemented by application models.
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    ///
    /// Called once when the program starts.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    ///
    /// This is the pure update function at the heart of the architecture.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// Must be a pure function with no side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer (full-screen mode).
    pub alt_screen: bool,
    /// Target frames per second for event polling.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// use minitea::Program;
///
/// let final_model = Program::new(MyModel::new())
///     .with_alt_screen()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use the alternate screen buffer (full-screen mode).
    #[must_use]
    pub const fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Set the target frames per second. Valid range is 1-120.
    #[must_use]
    pub const fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = if fps < 1 {
            1
        } else if fps > 120 {
            120
        } else {
            fps
        };
        self
    }

    /// Run the program on stdout and return the final model state.
    pub fn run(self) -> Result<M> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Run the program against a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        execute!(writer, Hide)?;

        let result = self.event_loop(&mut writer);

        // Best-effort teardown; the original error wins.
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Seed the model with the initial window size.
        if let Ok((width, height)) = terminal::size() {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            Self::handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            // Poll for terminal events with frame-rate limiting.
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
                        if key_msg.key_type == KeyType::CtrlC {
                            let _ = tx.send(Message::new(InterruptMsg));
                        } else {
                            let _ = tx.send(Message::new(key_msg));
                        }
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            // Process all pending messages.
            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    tracing::debug!("quit received, leaving event loop");
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    Self::handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    /// Execute a command on a background thread and feed its message back.
    fn handle_command(cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                if msg.is::<BatchMsg>() {
                    if let Some(batch) = msg.downcast::<BatchMsg>() {
                        for cmd in batch.0 {
                            let tx_clone = tx.clone();
                            thread::spawn(move || {
                                if let Some(msg) = cmd.execute() {
                                    let _ = tx_clone.send(msg);
                                }
                            });
                        }
                    }
                } else {
                    let _ = tx.send(msg);
                }
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if view hasn't changed.
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode needs explicit carriage returns.
        let mut first = true;
        for line in view.split('\n') {
            if !first {
                write!(writer, "\r\n").map_err(Error::Render)?;
            }
            first = false;
            write!(writer, "{line}").map_err(Error::Render)?;
        }
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i32,
    }

    impl Model for Counter {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(n) = msg.downcast::<i32>() {
                self.count += n;
            }
            None
        }

        fn view(&self) -> String {
            format!("Count: {}", self.count)
        }
    }

    #[test]
    fn program_options_default() {
        let opts = ProgramOptions::default();
        assert!(!opts.alt_screen);
        assert_eq!(opts.fps, 60);
    }

    #[test]
    fn with_fps_clamps() {
        let program = Program::new(Counter { count: 0 }).with_fps(500);
        assert_eq!(program.options.fps, 120);
        let program = Program::new(Counter { count: 0 }).with_fps(0);
        assert_eq!(program.options.fps, 1);
    }

    #[test]
    fn with_alt_screen_sets_option() {
        let program = Program::new(Counter { count: 0 }).with_alt_screen();
        assert!(program.options.alt_screen);
    }

    #[test]
    fn handle_command_delivers_message() {
        let (tx, rx) = mpsc::channel();
        Program::<Counter>::handle_command(Cmd::new(|| Message::new(7i32)), tx);
        let msg = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 7);
    }

    #[test]
    fn handle_command_unpacks_batches() {
        let (tx, rx) = mpsc::channel();
        let cmd = crate::batch(vec![
            Some(Cmd::new(|| Message::new(1i32))),
            Some(Cmd::new(|| Message::new(2i32))),
        ])
        .unwrap();
        Program::<Counter>::handle_command(cmd, tx);

        let mut got = vec![
            rx.recv_timeout(Duration::from_secs(1))
                .unwrap()
                .downcast::<i32>()
                .unwrap(),
            rx.recv_timeout(Duration::from_secs(1))
                .unwrap()
                .downcast::<i32>()
                .unwrap(),
        ];
        got.sort_unstable();
        assert_eq!(got, vec![1, 2]);
    }
}
