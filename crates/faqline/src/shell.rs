// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `faqline shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Each line is either a slash command or a query submitted to the engine;
//! when the latest reply is eligible for feedback, a dimmed hint invites
//! `/helpful` or `/unhelpful`.

use colored::Colorize;
use faqline_config::model::FaqlineConfig;
use faqline_core::{Feedback, FaqlineError, Message, Sender};
use faqline_engine::{FaqSession, FeedbackSlot};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Runs the `faqline shell` interactive REPL.
///
/// Creates one in-memory session for the lifetime of the process; history,
/// feedback state, and the unanswered log all vanish on exit.
pub async fn run_shell(config: FaqlineConfig) -> Result<(), FaqlineError> {
    let mut session = FaqSession::from_config(&config);

    let mut rl = DefaultEditor::new()
        .map_err(|e| FaqlineError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", format!("{} shell", config.agent.name).bold().green());
    println!(
        "Ask a question, or type {} to exit. {} shows all commands.\n",
        "/quit".yellow(),
        "/help".yellow()
    );

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_line(&mut session, trimmed).await {
                    eprintln!("{}: {e}", "error".red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    let unanswered = session.unanswered();
    if !unanswered.is_empty() {
        println!(
            "{}",
            format!("{} unanswered question(s) this session", unanswered.len()).dimmed()
        );
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatches one line of input: slash commands or a query.
async fn handle_line(session: &mut FaqSession, input: &str) -> Result<(), FaqlineError> {
    match input {
        "/help" => {
            println!("  {}        show this help", "/help".yellow());
            println!("  {}     show conversation history", "/history".yellow());
            println!("  {}  show unanswered questions", "/unanswered".yellow());
            println!("  {}     mark the latest answer helpful", "/helpful".yellow());
            println!("  {}   mark the latest answer not helpful", "/unhelpful".yellow());
            println!("  {}        exit the shell", "/quit".yellow());
        }
        "/history" => {
            for msg in session.snapshot() {
                print_message(msg);
            }
        }
        "/unanswered" => {
            if session.unanswered().is_empty() {
                println!("{}", "no unanswered questions yet".dimmed());
            }
            for query in session.unanswered() {
                println!("  {query}");
            }
        }
        "/helpful" => record_feedback(session, Feedback::Helpful)?,
        "/unhelpful" => record_feedback(session, Feedback::NotHelpful)?,
        _ => {
            let reply = session.submit_query(input).await?;
            println!("{} {}", "faqline:".cyan().bold(), reply.text);
            if session.feedback_slot() == FeedbackSlot::Open(reply.id) {
                println!(
                    "{}",
                    "was this helpful? /helpful or /unhelpful".dimmed()
                );
            }
        }
    }
    Ok(())
}

/// Applies feedback to whichever message holds the open slot.
fn record_feedback(session: &mut FaqSession, value: Feedback) -> Result<(), FaqlineError> {
    let Some(id) = session.feedback_slot().open_id() else {
        println!("{}", "no answer is awaiting feedback".dimmed());
        return Ok(());
    };
    session.submit_feedback(id, value)?;
    debug!(%id, %value, "shell feedback applied");
    println!("{}", "thanks for the feedback!".dimmed());
    Ok(())
}

fn print_message(msg: &Message) {
    match msg.sender {
        Sender::User => println!("{} {}", "you:".green().bold(), msg.text),
        Sender::Bot => {
            let mut line = format!("{} {}", "faqline:".cyan().bold(), msg.text);
            match msg.feedback {
                Some(Feedback::Helpful) => line.push_str(&" [helpful]".dimmed().to_string()),
                Some(Feedback::NotHelpful) => {
                    line.push_str(&" [not helpful]".dimmed().to_string());
                }
                None => {}
            }
            println!("{line}");
        }
    }
}
