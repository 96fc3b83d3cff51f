//! Welcome banner for terminal chat sessions.

use console::style;

/// Print the banner at the start of a chat session.
pub fn print_chat_banner(endpoint: &str) {
    println!();
    println!("  🤝 {}", style("Ogun Startup Advisor").cyan().bold());
    println!(
        "  {}",
        style("Your AI business mentor for the first steps of a new venture").dim()
    );
    println!();
    println!("  {}  {}", style("Relay:").bold(), style(endpoint).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, 'quit' or Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
