//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`. The bare words `quit` and `exit` also end the
//! session.

use console::style;

/// Available in-chat commands.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Reprint the conversation so far.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a command.
///
/// Returns `None` for anything that should be sent to the advisor.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    if lowered == "quit" || lowered == "exit" {
        return Some(ChatCommand::Exit);
    }
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = lowered.split_whitespace().next().unwrap_or_default();
    match cmd {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}    {}", style("/help").cyan(), "Show this help message");
    println!("  {}   {}", style("/clear").cyan(), "Clear the screen");
    println!("  {} {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}    {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("'quit', 'exit' or Ctrl+D also end the session").dim());
    println!();
}
