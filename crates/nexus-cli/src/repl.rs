//! The interactive chat loop: draft ownership, slash commands, and
//! history rendering.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use nexus_chat::{BackendClient, BackendConfig, Message, SendOutcome, Sender, Session};
use nexus_common::{NexusError, Result};
use nexus_config::NexusConfig;

use crate::markdown;

/// REPL helper providing completion, highlighting, and hints for the
/// slash commands.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/new".to_string(), "/quit".to_string()],
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

/// Run the chat REPL until `/quit` or end of input.
pub async fn run(config: NexusConfig) -> Result<()> {
    let backend = BackendClient::new(
        BackendConfig::new(&config.backend.endpoint)
            .with_connect_timeout(config.backend.connect_timeout_secs)
            .with_request_timeout(config.backend.request_timeout_secs),
    );
    let mut session = Session::new(&config.chat.greeting);

    let mut rl = Editor::<ReplHelper, rustyline::history::DefaultHistory>::new()
        .map_err(|e| NexusError::Terminal(e.to_string()))?;
    rl.set_helper(Some(ReplHelper::new()));

    print_banner(&config.chat.model_label);
    render_history(session.messages());

    loop {
        // The editor owns the draft; a submitted line is cleared by the
        // readline itself.
        let line = match rl.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(NexusError::Terminal(e.to_string())),
        };

        match line.trim() {
            "/quit" => break,
            "/new" => {
                // Terminal analog of the sidebar's New Chat button
                session.start_new_chat();
                println!();
                render_history(session.messages());
                continue;
            }
            _ => {}
        }

        let _ = rl.add_history_entry(line.as_str());

        // Transient pending indicator; the reply renders below it
        if !line.trim().is_empty() {
            println!("{}", "thinking...".dimmed());
        }

        match session.send_message(&backend, &line).await {
            SendOutcome::Exchanged(reply) => render_assistant(&reply),
            SendOutcome::EmptyInput => {}
            SendOutcome::Busy => {
                println!("{}", "still waiting on the last reply".dimmed());
            }
        }
    }

    println!("{}", "bye".dimmed());
    Ok(())
}

fn print_banner(model_label: &str) {
    println!(
        "{} {}",
        "Nexus AI".bold().bright_cyan(),
        format!("(model: {model_label})").dimmed()
    );
    println!(
        "{}",
        "Type a message; /new starts a fresh chat, /quit exits.".dimmed()
    );
    println!();
}

fn render_history(messages: &[Message]) {
    for message in messages {
        match message.sender {
            Sender::User => {
                println!("{}", "You".bold().blue());
                println!("{}\n", message.text);
            }
            Sender::Assistant => render_assistant(&message.text),
        }
    }
}

fn render_assistant(text: &str) {
    println!("{}", "Assistant".bold().green());
    println!("{}\n", markdown::render(text));
}
