// Token Updater: Terminal I/O
//
// Line-based console: styled status lines out, trimmed lines in. Generic
// over the reader and writer so the CLI flow can run against buffers.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use colored::Colorize;

const RULE_WIDTH: usize = 50;

/// Kind of status line, selecting its emoji and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Progress,
    Success,
    Error,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Info => "ℹ️",
            Status::Progress => "🔐",
            Status::Success => "✅",
            Status::Error => "❌",
        }
    }
}

/// Sink for human-readable status lines.
pub trait StatusReporter {
    fn report(&self, status: Status, message: &str);
}

pub struct Console<W, R> {
    out: RefCell<W>,
    input: RefCell<R>,
    colored: bool,
}

impl Console<io::Stdout, io::StdinLock<'static>> {
    /// Console over the process's stdout and stdin.
    pub fn stdio(colored: bool) -> Self {
        Self::new(io::stdout(), io::stdin().lock(), colored)
    }
}

impl<W: Write, R: BufRead> Console<W, R> {
    pub fn new(out: W, input: R, colored: bool) -> Self {
        Self {
            out: RefCell::new(out),
            input: RefCell::new(input),
            colored,
        }
    }

    /// Title framed by two cyan rules, preceded by a blank line.
    pub fn banner(&self, title: &str) -> io::Result<()> {
        let rule = self.paint(&"=".repeat(RULE_WIDTH), Status::Info);
        let heading = self.paint(&format!("🚀 {}", title), Status::Info);

        let mut out = self.out.borrow_mut();
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", heading)?;
        writeln!(out, "{}", rule)?;
        out.flush()
    }

    /// Closing rule, preceded by a blank line.
    pub fn rule(&self) -> io::Result<()> {
        let rule = self.paint(&"=".repeat(RULE_WIDTH), Status::Info);

        let mut out = self.out.borrow_mut();
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        out.flush()
    }

    /// Print `message` as an info line and read one trimmed line.
    /// End of input yields an empty string.
    pub fn prompt(&self, message: &str) -> io::Result<String> {
        self.write_status(Status::Info, message)?;
        self.read_line()
    }

    /// Print `message...` and block until a line (or end of input) arrives.
    pub fn wait_for_enter(&self, message: &str) -> io::Result<()> {
        {
            let mut out = self.out.borrow_mut();
            write!(out, "{} {}...", Status::Info.emoji(), message)?;
            out.flush()?;
        }
        self.read_line().map(|_| ())
    }

    /// Give back the writer and reader.
    pub fn into_parts(self) -> (W, R) {
        (self.out.into_inner(), self.input.into_inner())
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn write_status(&self, status: Status, message: &str) -> io::Result<()> {
        let line = self.paint(&format!("{} {}", status.emoji(), message), status);

        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn paint(&self, text: &str, status: Status) -> String {
        if !self.colored {
            return text.to_string();
        }

        match status {
            Status::Info | Status::Progress => text.cyan().to_string(),
            Status::Success => text.green().to_string(),
            Status::Error => text.red().to_string(),
        }
    }
}

impl<W: Write, R: BufRead> StatusReporter for Console<W, R> {
    fn report(&self, status: Status, message: &str) {
        if let Err(e) = self.write_status(status, message) {
            tracing::warn!(error = %e, "Failed to write status line");
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
