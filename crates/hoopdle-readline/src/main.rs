use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use hoopdle_core::feedback::JerseyHint;
use hoopdle_core::roster::{Roster, SUGGESTION_LIMIT};
use hoopdle_core::session::{Attempt, GuessSession};
use hoopdle_core::clues::VisibleClues;
use hoopdle_infrastructure::{ClientConfig, HttpGameBackend};

/// CLI helper for rustyline that completes player names from the roster
/// and slash commands.
#[derive(Clone)]
struct CliHelper {
    roster: Roster,
    commands: Vec<String>,
}

impl CliHelper {
    fn new(roster: Roster) -> Self {
        Self {
            roster,
            commands: vec![
                "/clues".to_string(),
                "/history".to_string(),
                "/help".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
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
            // Anything else is a (partial) player name
            let candidates: Vec<Pair> = self
                .roster
                .suggest(line, SUGGESTION_LIMIT)
                .into_iter()
                .map(|player| Pair {
                    display: player.display_name.clone(),
                    replacement: player.display_name,
                })
                .collect();
            Ok((0, candidates))
        }
    }
}

impl Highlighter for CliHelper {
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

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            self.roster
                .suggest(line, 1)
                .first()
                .filter(|player| player.display_name.len() > line.len())
                .and_then(|player| player.display_name.get(line.len()..))
                .map(str::to_string)
        }
    }
}

impl Validator for CliHelper {}

/// Slash commands understood by the REPL. Any other input is a guess.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Clues,
    History,
    Help,
    Quit,
    Guess(String),
}

fn parse_line(line: &str) -> Option<ReplCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(match trimmed {
        "/clues" => ReplCommand::Clues,
        "/history" => ReplCommand::History,
        "/help" => ReplCommand::Help,
        "/quit" | "quit" | "exit" => ReplCommand::Quit,
        other => ReplCommand::Guess(other.to_string()),
    })
}

fn render_cell(value: &str, matched: bool, suffix: &str) -> String {
    let text = format!(" {value}{suffix} ");
    if matched {
        text.black().on_green().to_string()
    } else {
        text.white().on_red().to_string()
    }
}

fn render_attempt(attempt: &Attempt) -> String {
    let feedback = &attempt.feedback;
    let hint = match feedback.jersey_hint {
        JerseyHint::Higher => " ▲",
        JerseyHint::Lower => " ▼",
        JerseyHint::None => "",
    };
    format!(
        "{}  {} {} {}",
        attempt.guessed_name.bold(),
        render_cell(&feedback.guessed_team, feedback.team_match, ""),
        render_cell(&feedback.guessed_position, feedback.position_match, ""),
        render_cell(&feedback.guessed_jersey, feedback.jersey_match, hint),
    )
}

fn render_clue_board(clues: &VisibleClues) -> String {
    format!(
        "{} Team: {}   Position: {}   Jersey: {}",
        "Clues |".bright_black(),
        clues.team.bright_white(),
        clues.position.bright_white(),
        clues.jersey.bright_white(),
    )
}

fn print_help() {
    println!(
        "{}",
        "Guess the daily NBA player in as few tries as possible.".bright_black()
    );
    println!(
        "{}",
        "Green cells match the secret player, red cells do not; ▲/▼ tell you \
         whether the secret jersey number is higher or lower."
            .bright_black()
    );
    println!(
        "{}",
        "The team clue unlocks after 5 attempts, position after 10, jersey after 15."
            .bright_black()
    );
    println!(
        "{}",
        "Commands: /clues  /history  /help  /quit — anything else is a guess (Tab completes names)."
            .bright_black()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend Initialization =====
    let config = ClientConfig::load()?;
    let backend = HttpGameBackend::new(&config)?;
    let mut session = GuessSession::start(&backend).await;

    if let Some(message) = session.snapshot().error_message {
        eprintln!("{}", message.red());
    }

    // ===== REPL Setup =====
    let helper = CliHelper::new(session.roster().clone());
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== hoopdle ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Daily puzzle for {}", chrono::Local::now().format("%Y-%m-%d")).bright_black()
    );
    print_help();
    println!();
    println!("{}", render_clue_board(&session.snapshot().visible_clues));

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline("guess> ");

        match readline {
            Ok(line) => {
                let Some(command) = parse_line(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(&line);

                match command {
                    ReplCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ReplCommand::Help => print_help(),
                    ReplCommand::Clues => {
                        println!("{}", render_clue_board(&session.snapshot().visible_clues));
                    }
                    ReplCommand::History => {
                        let snapshot = session.snapshot();
                        if snapshot.attempts.is_empty() {
                            println!("{}", "No guesses yet.".bright_black());
                        }
                        for attempt in &snapshot.attempts {
                            println!("{}", render_attempt(attempt));
                        }
                    }
                    ReplCommand::Guess(input) => {
                        match session.submit_guess(&input, &backend).await {
                            Ok(attempt) => {
                                println!("{}", render_attempt(&attempt));
                                if attempt.is_win {
                                    println!(
                                        "{}",
                                        format!(
                                            "Congratulations! You found the player in {} guesses.",
                                            session.attempt_count()
                                        )
                                        .bright_green()
                                        .bold()
                                    );
                                    break;
                                }
                                println!("{}", attempt.judge_message.yellow());
                                let snapshot = session.snapshot();
                                println!("{}", render_clue_board(&snapshot.visible_clues));
                                println!(
                                    "{}",
                                    format!("Attempts: {}", snapshot.attempt_count).bright_black()
                                );
                            }
                            Err(err) => {
                                println!("{}", err.to_string().red());
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Input error: {err}").red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopdle_core::roster::Candidate;
    use rustyline::history::DefaultHistory;

    fn sample_helper() -> CliHelper {
        CliHelper::new(Roster::new(vec![
            Candidate::new(1, "Jordan Poole"),
            Candidate::new(2, "James Harden"),
            Candidate::new(3, "Jaylen Brown"),
            Candidate::new(4, "Luka Doncic"),
        ]))
    }

    #[test]
    fn completer_offers_roster_matches_in_roster_order() {
        let helper = sample_helper();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, pairs) = helper.complete("ja", 2, &ctx).unwrap();
        assert_eq!(start, 0);
        let names: Vec<&str> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["James Harden", "Jaylen Brown"]);
    }

    #[test]
    fn completer_caps_player_matches_at_the_dropdown_limit() {
        let players = (0..25)
            .map(|i| Candidate::new(i, format!("Player {i}")))
            .collect();
        let helper = CliHelper::new(Roster::new(players));
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (_, pairs) = helper.complete("player", 6, &ctx).unwrap();
        assert_eq!(pairs.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn slash_lines_complete_commands_not_players() {
        let helper = sample_helper();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, pairs) = helper.complete("/cl", 3, &ctx).unwrap();
        assert_eq!(start, 0);
        let commands: Vec<&str> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(commands, vec!["/clues"]);
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn slash_commands_are_recognized() {
        assert_eq!(parse_line("/clues"), Some(ReplCommand::Clues));
        assert_eq!(parse_line("/history"), Some(ReplCommand::History));
        assert_eq!(parse_line("/help"), Some(ReplCommand::Help));
        assert_eq!(parse_line("/quit"), Some(ReplCommand::Quit));
        assert_eq!(parse_line("exit"), Some(ReplCommand::Quit));
    }

    #[test]
    fn everything_else_is_a_guess() {
        assert_eq!(
            parse_line("  Luka Doncic "),
            Some(ReplCommand::Guess("Luka Doncic".to_string()))
        );
    }
}
