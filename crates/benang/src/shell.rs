// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `benang shell` command implementation.
//!
//! Interactive chat with a colored prompt and readline history. Each line is
//! routed and answered before the next prompt is shown, so only one query is
//! ever in flight. The conversation lives in memory only.

use std::collections::VecDeque;

use benang_config::model::BenangConfig;
use benang_core::{BenangError, Domain};
use benang_router::{AccountingAssistant, AssistantReply};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;
use uuid::Uuid;

const WELCOME: &str = "Halo! Saya adalah Manajer Operasional Akuntansi Garmen. Ada yang bisa saya \
bantu terkait Penjualan, Inventaris, Laporan Keuangan, atau Biaya Produksi?";

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One entry in the shell transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Agent that produced the entry; `None` for user input.
    pub agent: Option<Domain>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>, agent: Option<Domain>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            agent,
            timestamp: Utc::now(),
        }
    }
}

/// Bounded in-memory conversation log. The oldest entries are dropped first.
#[derive(Debug)]
pub struct Transcript {
    messages: VecDeque<ChatMessage>,
    limit: usize,
}

impl Transcript {
    pub fn new(limit: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        if self.messages.len() == self.limit {
            self.messages.pop_front();
        }
        debug!(id = %message.id, role = message.role.as_str(), "transcript entry added");
        self.messages.push_back(message);
    }

    /// Record a query and its reply: user entry, routing notice, answer.
    pub fn record_exchange(&mut self, query: &str, reply: &AssistantReply) {
        self.push(ChatMessage::new(Role::User, query, None));
        self.push(ChatMessage::new(
            Role::System,
            reply.routing_notice(),
            Some(Domain::General),
        ));
        self.push(ChatMessage::new(
            Role::Assistant,
            reply.answer.clone(),
            Some(reply.classification.domain),
        ));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }
}

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Empty,
    Exit,
    Help,
    History,
    Clear,
    Unknown(&'a str),
    Query(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    match trimmed {
        "/exit" | "/quit" => Input::Exit,
        "/help" => Input::Help,
        "/history" => Input::History,
        "/clear" => Input::Clear,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        query => Input::Query(query),
    }
}

/// Runs the `benang shell` interactive REPL.
pub async fn run_shell(
    config: &BenangConfig,
    assistant: &AccountingAssistant,
) -> Result<(), BenangError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| BenangError::Internal(format!("failed to initialize readline: {e}")))?;

    let mut transcript = Transcript::new(config.shell.history_limit);
    transcript.push(ChatMessage::new(Role::Assistant, WELCOME, Some(Domain::General)));

    println!("{}", format!("{} shell", config.agent.name).bold().green());
    if !config.gemini.credential_state().is_present() {
        println!(
            "{}",
            "Mode simulasi: kunci API Gemini belum dikonfigurasi.".yellow()
        );
    }
    println!("{WELCOME}");
    println!("Type {} for commands, {} to exit.\n", "/help".yellow(), "/exit".yellow());

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Exit => break,
            Input::Help => print_help(),
            Input::History => print_history(&transcript),
            Input::Clear => {
                transcript.clear();
                println!("{}", "transcript cleared".dimmed());
            }
            Input::Unknown(cmd) => {
                println!("{} {cmd}, try /help", "unknown command:".yellow());
            }
            Input::Query(query) => {
                let _ = rl.add_history_entry(query);
                let reply = assistant.ask(query).await;
                if config.shell.show_reasoning {
                    println!("{}", reply.routing_notice().cyan());
                }
                println!("{}\n", reply.answer);
                transcript.record_exchange(query, &reply);
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("  /history  show this session's messages");
    println!("  /clear    forget this session's messages");
    println!("  /help     show this help");
    println!("  /exit     leave the shell");
}

fn print_history(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("{}", "(no messages)".dimmed());
        return;
    }
    for message in transcript.iter() {
        let time = message.timestamp.with_timezone(&Local).format("%H:%M:%S");
        let who = match message.agent {
            Some(domain) if message.role == Role::Assistant => {
                format!("{} [{}]", message.role.as_str(), domain.label())
            }
            _ => message.role.as_str().to_string(),
        };
        println!("{} {}: {}", time.to_string().dimmed(), who.bold(), message.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benang_core::ClassificationResult;

    fn reply(domain: Domain) -> AssistantReply {
        AssistantReply {
            classification: ClassificationResult::new(domain, "alasan"),
            answer: "jawaban".into(),
        }
    }

    #[test]
    fn parses_commands_and_queries() {
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(parse_input("/exit"), Input::Exit);
        assert_eq!(parse_input(" /quit "), Input::Exit);
        assert_eq!(parse_input("/history"), Input::History);
        assert_eq!(parse_input("/clear"), Input::Clear);
        assert_eq!(parse_input("/help"), Input::Help);
        assert_eq!(parse_input("/stok"), Input::Unknown("/stok"));
        assert_eq!(parse_input(" berapa stok? "), Input::Query("berapa stok?"));
    }

    #[test]
    fn exchange_records_user_notice_and_answer() {
        let mut transcript = Transcript::new(10);
        transcript.record_exchange("stok benang?", &reply(Domain::PurchasingAndInventory));

        let roles: Vec<Role> = transcript.iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::User, Role::System, Role::Assistant]);

        let answer = transcript.iter().last().unwrap();
        assert_eq!(answer.agent, Some(Domain::PurchasingAndInventory));
        assert_eq!(answer.content, "jawaban");
        assert!(transcript.iter().nth(1).unwrap().content.starts_with("Mengarahkan ke"));
    }

    #[test]
    fn transcript_drops_oldest_beyond_limit() {
        let mut transcript = Transcript::new(4);
        transcript.record_exchange("pertama", &reply(Domain::SalesAndRevenue));
        transcript.record_exchange("kedua", &reply(Domain::FinancialReporting));

        assert_eq!(transcript.len(), 4);
        let first = transcript.iter().next().unwrap();
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.agent, Some(Domain::SalesAndRevenue));
    }

    #[test]
    fn clear_empties_transcript() {
        let mut transcript = Transcript::new(0);
        transcript.push(ChatMessage::new(Role::User, "x", None));
        assert_eq!(transcript.len(), 1);
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn message_ids_are_unique() {
        let a = ChatMessage::new(Role::User, "a", None);
        let b = ChatMessage::new(Role::User, "a", None);
        assert_ne!(a.id, b.id);
    }
}
