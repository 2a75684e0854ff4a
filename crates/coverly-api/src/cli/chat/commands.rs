//! Slash command parsing and help text for the consultation loop.
//!
//! Commands start with `/` and provide in-chat controls for the session.
//! Anything else goes to the advisor as a message.

use console::style;

/// Available slash commands in the consultation loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the session.
    Exit,
    /// Start a new consultation, dropping collected data.
    New,
    /// Show the full transcript so far.
    History,
    /// Show the profile data the advisor has collected.
    Profile,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/new" => Some(ChatCommand::New),
        "/history" => Some(ChatCommand::History),
        "/profile" => Some(ChatCommand::Profile),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}    {}",
        style("/help").cyan(),
        "Show this help message"
    );
    println!("  {}   {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}    {}", style("/exit").cyan(), "End the session");
    println!(
        "  {}     {}",
        style("/new").cyan(),
        "Start a new consultation"
    );
    println!(
        "  {} {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!(
        "  {} {}",
        style("/profile").cyan(),
        "Show the data collected so far"
    );
    println!();
    println!(
        "  {}",
        style("End a line with \\ to continue the message on the next line").dim()
    );
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C cancels the current line").dim()
    );
    println!();
}
