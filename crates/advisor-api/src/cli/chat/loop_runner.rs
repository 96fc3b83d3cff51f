//! Main chat loop orchestration.
//!
//! Banner, welcome turn, then one relay round-trip per line until the user
//! quits. The transcript lives only as long as the process.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use advisor_core::chat::session::{ChatSession, SendOutcome};
use advisor_core::chat::transcript::Transcript;
use advisor_infra::relay_client::HttpRelayClient;
use advisor_types::chat::TurnRole;

use super::banner::print_chat_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Printed when the user leaves with `quit`, `exit`, or `/exit`.
pub const FAREWELL: &str = "Bye! Wishing you success in your business journey.";

/// Run the interactive chat loop against the relay at `base_url`.
pub async fn run_chat_loop(base_url: &str, timeout: Duration) -> anyhow::Result<()> {
    let client = HttpRelayClient::new(base_url, timeout)?;
    print_chat_banner(client.endpoint());

    let mut session = ChatSession::new(client);
    if let Some(welcome) = session.transcript().welcome() {
        print_advisor(&welcome.text);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D or type 'quit' to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::History => print_history(session.transcript()),
                        ChatCommand::Exit => {
                            println!("\n  {}\n", style(FAREWELL).cyan());
                            break;
                        }
                        ChatCommand::Unknown(name) => println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        ),
                    }
                    continue;
                }

                let spinner = thinking_spinner();
                let outcome = session.send(&text).await;
                spinner.finish_and_clear();

                match outcome {
                    Some(SendOutcome::ServiceFailed(reason)) => {
                        info!(%reason, "advisor service reported a failure");
                    }
                    Some(SendOutcome::Unreachable(reason)) => {
                        eprintln!("  {} {reason}", style("!").red().bold());
                    }
                    Some(SendOutcome::Replied) | None => {}
                }

                if let Some(turn) = session.transcript().last() {
                    if turn.role == TurnRole::Assistant {
                        print_advisor(&turn.text);
                    }
                }
            }
        }
    }

    chat_input.flush();
    info!(turns = session.transcript().len(), "chat session finished");
    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let template = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(template);
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_advisor(text: &str) {
    println!();
    println!("  {}", style("Ogun >").cyan().bold());
    for line in text.lines() {
        println!("  {line}");
    }
    println!();
}

fn print_history(transcript: &Transcript) {
    println!();
    for turn in transcript.turns() {
        let label = match turn.role {
            TurnRole::User => style("You").green(),
            TurnRole::Assistant => style("Ogun").cyan(),
        };
        let preview: String = if turn.text.chars().count() > 100 {
            let head: String = turn.text.chars().take(97).collect();
            format!("{head}...")
        } else {
            turn.text.clone()
        };
        println!("  {} {}", label.bold(), preview);
    }
    println!();
}
