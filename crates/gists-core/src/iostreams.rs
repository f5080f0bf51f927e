//! Terminal I/O streams.
//!
//! Every command writes through [`IOStreams`] rather than `println!` so the
//! output can be captured in tests.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

/// Width used for separator rules when stdout is not a terminal.
pub const DEFAULT_WIDTH: usize = 80;

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Buffer shared between a test `IOStreams` and its [`TestOutput`].
#[derive(Debug, Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Handle on the output captured by [`IOStreams::test_with_output`].
#[derive(Debug, Clone)]
pub struct TestOutput {
    out: Captured,
    err: Captured,
}

impl TestOutput {
    /// Everything written to stdout so far.
    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    /// Everything written to stderr so far.
    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}

/// Standard streams plus the terminal facts commands care about.
pub struct IOStreams {
    stdin_is_tty: bool,
    stdout_is_tty: bool,
    color_enabled: bool,
    out: Sink,
    err: Sink,
}

impl std::fmt::Debug for IOStreams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IOStreams")
            .field("stdin_is_tty", &self.stdin_is_tty)
            .field("stdout_is_tty", &self.stdout_is_tty)
            .field("color_enabled", &self.color_enabled)
            .finish_non_exhaustive()
    }
}

impl IOStreams {
    /// Streams bound to the real process stdin/stdout/stderr.
    pub fn system() -> Self {
        let stdout_is_tty = io::stdout().is_terminal();
        let color_enabled = stdout_is_tty
            && std::env::var_os("NO_COLOR").is_none()
            && Term::stdout().features().colors_supported();

        Self {
            stdin_is_tty: io::stdin().is_terminal(),
            stdout_is_tty,
            color_enabled,
            out: Arc::new(Mutex::new(Box::new(io::stdout()))),
            err: Arc::new(Mutex::new(Box::new(io::stderr()))),
        }
    }

    /// Non-interactive streams that capture stdout and stderr.
    ///
    /// ```
    /// use gists_core::IOStreams;
    ///
    /// let (ios, output) = IOStreams::test_with_output();
    /// ios.println_out("hello");
    /// assert_eq!(output.stdout(), "hello\n");
    /// ```
    pub fn test_with_output() -> (Self, TestOutput) {
        let out = Captured::default();
        let err = Captured::default();
        let ios = Self {
            stdin_is_tty: false,
            stdout_is_tty: false,
            color_enabled: false,
            out: Arc::new(Mutex::new(Box::new(out.clone()))),
            err: Arc::new(Mutex::new(Box::new(err.clone()))),
        };
        (ios, TestOutput { out, err })
    }

    /// Override the stdin TTY flag.
    pub fn set_stdin_tty(&mut self, is_tty: bool) {
        self.stdin_is_tty = is_tty;
    }

    /// Override the stdout TTY flag.
    pub fn set_stdout_tty(&mut self, is_tty: bool) {
        self.stdout_is_tty = is_tty;
    }

    /// Write a line to stdout.
    pub fn println_out(&self, s: &str) {
        self.writeln_out(format_args!("{s}"));
    }

    /// Write a line to stderr.
    pub fn println_err(&self, s: &str) {
        self.writeln_err(format_args!("{s}"));
    }

    /// Write formatted text plus a newline to stdout.
    pub fn writeln_out(&self, args: std::fmt::Arguments<'_>) {
        Self::emit(&self.out, args);
    }

    /// Write formatted text plus a newline to stderr.
    pub fn writeln_err(&self, args: std::fmt::Arguments<'_>) {
        Self::emit(&self.err, args);
    }

    fn emit(sink: &Sink, args: std::fmt::Arguments<'_>) {
        let mut w = sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Write errors such as a closed pipe are ignored.
        let _ = w.write_fmt(args);
        let _ = w.write_all(b"\n");
        let _ = w.flush();
    }

    /// Whether an interactive prompt can be shown.
    pub fn can_prompt(&self) -> bool {
        self.stdin_is_tty && self.stdout_is_tty
    }

    /// Terminal column count, or [`DEFAULT_WIDTH`] when not attached to one.
    pub fn terminal_width(&self) -> usize {
        if !self.stdout_is_tty {
            return DEFAULT_WIDTH;
        }
        match Term::stdout().size_checked() {
            Some((_, cols)) if cols > 0 => usize::from(cols),
            _ => DEFAULT_WIDTH,
        }
    }

    /// Color scheme matching the stream's color support.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            enabled: self.color_enabled,
        }
    }
}

/// Styles text when color output is enabled; a no-op otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn paint(
        self,
        text: &str,
        style: impl FnOnce(console::StyledObject<&str>) -> console::StyledObject<&str>,
    ) -> String {
        if self.enabled {
            style(console::style(text).force_styling(true)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold text.
    pub fn bold(self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    /// Green text.
    pub fn success(self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    /// Red text.
    pub fn error(self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    /// Cyan text, used for separator rules.
    pub fn cyan(self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }
}

/// `println!` onto an [`IOStreams`] stdout.
#[macro_export]
macro_rules! ios_println {
    ($ios:expr) => {
        $ios.println_out("")
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_out(format_args!($($arg)*))
    };
}

/// `eprintln!` onto an [`IOStreams`] stderr.
#[macro_export]
macro_rules! ios_eprintln {
    ($ios:expr) => {
        $ios.println_err("")
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_err(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_capture_stdout_and_stderr_separately() {
        let (ios, output) = IOStreams::test_with_output();
        ios.println_out("result");
        ios.println_err("oops");
        assert_eq!(output.stdout(), "result\n");
        assert_eq!(output.stderr(), "oops\n");
    }

    #[test]
    fn test_should_capture_macro_output() {
        let (ios, output) = IOStreams::test_with_output();
        ios_println!(ios, "{} files", 2);
        ios_println!(ios);
        ios_eprintln!(ios, "code {}", 7);
        assert_eq!(output.stdout(), "2 files\n\n");
        assert_eq!(output.stderr(), "code 7\n");
    }

    #[test]
    fn test_should_not_prompt_without_tty() {
        let (mut ios, _) = IOStreams::test_with_output();
        assert!(!ios.can_prompt());
        ios.set_stdin_tty(true);
        assert!(!ios.can_prompt());
        ios.set_stdout_tty(true);
        assert!(ios.can_prompt());
    }

    #[test]
    fn test_should_use_default_width_off_terminal() {
        let (ios, _) = IOStreams::test_with_output();
        assert_eq!(ios.terminal_width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_should_leave_text_plain_when_color_disabled() {
        let (ios, _) = IOStreams::test_with_output();
        let cs = ios.color_scheme();
        assert_eq!(cs.bold("id"), "id");
        assert_eq!(cs.success("ok"), "ok");
        assert_eq!(cs.error("bad"), "bad");
        assert_eq!(cs.cyan("https://x"), "https://x");
    }

    #[test]
    fn test_should_style_when_color_enabled() {
        let cs = ColorScheme { enabled: true };
        assert!(cs.bold("id").contains("id"));
        assert_ne!(cs.bold("id"), "id");
    }
}
