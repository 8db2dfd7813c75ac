use std::collections::VecDeque;
use log::debug;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::models::{AnalysisKind, Mode};
use crate::services::engine::AnalysisEngine;
use crate::services::mode_selector::ModeSelector;

pub const EMPTY_INPUT_HELP: &str = "Please enter a valid text to start the analysis!";

const HELP: &str = "\
Type a text to analyze it, or one of:
  :toggle       switch between online and offline counting
  :mode         show the current mode and kind
  :vowels       count vowels
  :consonants   count consonants
  :history      list previous results, newest first
  :help         show this help
  :quit         leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Toggle,
    ShowMode,
    SetKind(AnalysisKind),
    History,
    Help,
    Quit,
    Unknown(String),
    Analyze(String),
}

pub fn parse_line(line: &str) -> ShellCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return ShellCommand::Analyze(line.to_string());
    };
    match command.to_lowercase().as_str() {
        "toggle" => ShellCommand::Toggle,
        "mode" => ShellCommand::ShowMode,
        "vowels" => ShellCommand::SetKind(AnalysisKind::Vowels),
        "consonants" => ShellCommand::SetKind(AnalysisKind::Consonants),
        "history" => ShellCommand::History,
        "help" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(trimmed.to_string()),
    }
}

/// Line-oriented front end over the engine: mode toggle, kind selection and
/// a newest-first list of results
pub struct Shell {
    engine: AnalysisEngine,
    mode: ModeSelector,
    kind: AnalysisKind,
    history: VecDeque<String>,
}

impl Shell {
    pub fn new(engine: AnalysisEngine, initial_mode: Mode) -> Self {
        Shell {
            engine,
            mode: ModeSelector::new(initial_mode),
            kind: AnalysisKind::Vowels,
            history: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.current_mode()
    }

    pub fn kind(&self) -> AnalysisKind {
        self.kind
    }

    pub fn history(&self) -> impl Iterator<Item = &String> {
        self.history.iter()
    }

    /// Run one command. Returns the lines to show, or None to stop.
    pub async fn execute(&mut self, command: ShellCommand) -> Option<Vec<String>> {
        let lines = match command {
            ShellCommand::Quit => return None,
            ShellCommand::Toggle => {
                let mode = self.mode.toggle();
                debug!("Switched to {} mode ({} counter)", mode, self.engine.counter_for(mode).name());
                vec![format!("mode: {}", mode)]
            }
            ShellCommand::ShowMode => vec![format!("mode: {}, analyzing {}", self.mode(), self.kind)],
            ShellCommand::SetKind(kind) => {
                self.kind = kind;
                vec![format!("analyzing {}", kind)]
            }
            ShellCommand::History if self.history.is_empty() => vec!["(no results yet)".to_string()],
            ShellCommand::History => self.history.iter().cloned().collect(),
            ShellCommand::Help => vec![HELP.to_string()],
            ShellCommand::Unknown(cmd) => vec![format!("unknown command {}, try :help", cmd)],
            ShellCommand::Analyze(text) if text.is_empty() => vec![EMPTY_INPUT_HELP.to_string()],
            ShellCommand::Analyze(text) => {
                let mode = self.mode();
                debug!("Analyzing {} via {} counter", self.kind, self.engine.counter_for(mode).name());
                match self.engine.analyze(&text, self.kind, mode).await {
                    Ok(result) => {
                        let entry = format!("In your analyzed text \"{}\", {}", text, result);
                        self.history.push_front(entry.clone());
                        vec![entry]
                    }
                    Err(e) => vec![format!("analysis failed: {}", e)],
                }
            }
        };
        Some(lines)
    }

    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(format!("mode: {}, analyzing {} (:help for commands)\n", self.mode(), self.kind).as_bytes()).await?;
        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match self.execute(parse_line(&line)).await {
                Some(reply) => {
                    for l in reply {
                        output.write_all(l.as_bytes()).await?;
                        output.write_all(b"\n").await?;
                    }
                }
                None => break,
            }
        }
        output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::counter::LocalCounter;

    fn offline_shell() -> Shell {
        Shell::new(AnalysisEngine::with_counters(LocalCounter, LocalCounter), Mode::Offline)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":toggle"), ShellCommand::Toggle);
        assert_eq!(parse_line("  :Consonants "), ShellCommand::SetKind(AnalysisKind::Consonants));
        assert_eq!(parse_line(":q"), ShellCommand::Quit);
        assert_eq!(parse_line(":nope"), ShellCommand::Unknown(":nope".to_string()));
        assert_eq!(parse_line("Hello World"), ShellCommand::Analyze("Hello World".to_string()));
        assert_eq!(parse_line(""), ShellCommand::Analyze(String::new()));
    }

    #[actix_web::test]
    async fn test_empty_input_shows_help_and_keeps_history() {
        let mut shell = offline_shell();
        let reply = shell.execute(ShellCommand::Analyze(String::new())).await.unwrap();
        assert_eq!(reply, vec![EMPTY_INPUT_HELP.to_string()]);
        assert_eq!(shell.history().count(), 0);
    }

    #[actix_web::test]
    async fn test_results_are_prefixed_and_newest_first() {
        let mut shell = offline_shell();
        shell.execute(ShellCommand::Analyze("aa".to_string())).await.unwrap();
        shell.execute(ShellCommand::SetKind(AnalysisKind::Consonants)).await.unwrap();
        shell.execute(ShellCommand::Analyze("Bb".to_string())).await.unwrap();

        let history: Vec<&String> = shell.history().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], "In your analyzed text \"Bb\", the letter 'B' appears 2 times");
        assert!(history[1].starts_with("In your analyzed text \"aa\", the letter 'A' appears 2 times"));
    }

    #[actix_web::test]
    async fn test_toggle_switches_mode() {
        let mut shell = offline_shell();
        let reply = shell.execute(ShellCommand::Toggle).await.unwrap();
        assert_eq!(reply, vec!["mode: online".to_string()]);
        assert_eq!(shell.mode(), Mode::Online);
    }

    #[actix_web::test]
    async fn test_run_reads_until_quit() {
        let mut shell = offline_shell();
        let input: &[u8] = b":consonants\nHello World\n:quit\nignored\n";
        let mut output = Vec::new();
        shell.run(input, &mut output).await.unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("analyzing consonants"));
        assert!(printed.contains("In your analyzed text \"Hello World\", the letter 'D' appears 1 times"));
        assert!(!printed.contains("ignored"));
        assert_eq!(shell.kind(), AnalysisKind::Consonants);
    }
}
