//! Async readline input handling for the consultation loop.
//!
//! Wraps `rustyline_async::Readline` for async line reading with proper
//! handling of EOF (Ctrl+D) and interrupt (Ctrl+C), plus a small
//! assembler that lets a trailing backslash continue a message onto the
//! next line, standing in for Shift+Enter in the web advisor.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line.
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create a new input handler with the given initial prompt.
    ///
    /// Returns the handler and a `SharedWriter` that can print output
    /// without interfering with the readline prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Update the prompt displayed to the user.
    pub fn update_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Read a line of input.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                InputEvent::Message(line.trim().to_string())
            }
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}

/// Accumulates physical lines into one logical message.
///
/// A line ending in `\` keeps the message open; the next line that does
/// not is joined to the buffered ones with newlines and the whole
/// message is released. Ctrl+C drops whatever is buffered.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Vec<String>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a continuation is in progress.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Feed one physical line; returns the full message once complete.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        if let Some(stripped) = line.strip_suffix('\\') {
            self.pending.push(stripped.to_string());
            return None;
        }

        if self.pending.is_empty() {
            return Some(line.to_string());
        }

        self.pending.push(line.to_string());
        Some(self.pending.drain(..).collect::<Vec<_>>().join("\n"))
    }

    /// Drop any buffered continuation lines.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
