//! Main consultation loop orchestration.
//!
//! Coordinates the conversation lifecycle: welcome banner, seeded
//! greeting, input loop with slash commands and line continuation, a
//! thinking spinner while the request is in flight, and rendering of
//! replies and the final consultation.

use std::time::Duration;

use console::style;
use tracing::debug;

use coverly_core::consultation::ConsultationView;
use coverly_core::controller::{ChatController, TurnOutcome};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent, LineAssembler};
use super::renderer;

/// Run the interactive consultation loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    print_welcome_banner(state.backend.base_url());

    let mut controller = ChatController::new(state.backend.clone());

    // The transcript opens with the fixed greeting; show it
    if let Some(text) = controller.transcript().last().and_then(|m| m.text()) {
        renderer::print_reply(text);
    }

    let prompt = format!("  {} ", style("你 >").green().bold());
    let continuation_prompt = format!("  {} ", style("... >").green().dim());
    let (mut chat_input, _writer) = ChatInput::new(prompt.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    let mut assembler = LineAssembler::new();

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("諮詢結束。").dim());
                break;
            }
            InputEvent::Interrupted => {
                assembler.clear();
                chat_input.update_prompt(&prompt);
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(line) => {
                // A trailing backslash keeps the message open
                let Some(text) = assembler.feed(&line) else {
                    chat_input.update_prompt(&continuation_prompt);
                    continue;
                };
                chat_input.update_prompt(&prompt);

                let text = text.trim().to_string();
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("諮詢結束。").dim());
                            break;
                        }
                        ChatCommand::New => {
                            controller.reset();
                            println!("\n  {}", style("已開始新的諮詢。").dim());
                            if let Some(text) =
                                controller.transcript().last().and_then(|m| m.text())
                            {
                                renderer::print_reply(text);
                            }
                            continue;
                        }
                        ChatCommand::History => {
                            renderer::print_transcript(controller.transcript().messages());
                            continue;
                        }
                        ChatCommand::Profile => {
                            match controller.profile() {
                                Some(slots) if !slots.is_empty() => {
                                    renderer::print_profile(slots)
                                }
                                _ => println!(
                                    "\n  {}\n",
                                    style("尚未收集到任何資料。").dim()
                                ),
                            }
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Thinking spinner while the request is in flight
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("思考中...");
                spinner.enable_steady_tick(Duration::from_millis(80));

                let outcome = controller.submit(&text).await;
                spinner.finish_and_clear();

                match outcome {
                    TurnOutcome::Ignored => {}
                    TurnOutcome::Replied(message) => {
                        if let Some(reply) = message.text() {
                            renderer::print_reply(reply);
                        }
                    }
                    TurnOutcome::Completed(message) => {
                        debug!("consultation finalized");
                        if let Some(data) = message.consultation() {
                            let view = ConsultationView::from_payload(data);
                            renderer::print_consultation(&view);
                        }
                        println!(
                            "  {}",
                            style("可繼續提問，或輸入 /new 開始新的諮詢。").dim()
                        );
                        println!();
                    }
                    TurnOutcome::Failed(message) => {
                        if let Some(text) = message.text() {
                            renderer::print_error_line(text);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
