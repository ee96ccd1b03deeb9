use std::{io, path::PathBuf};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;

use crate::{
    app,
    catalog::{Category, categorize},
    config::Settings,
    countdown::{self, compute_remaining},
    domain::Program,
    feed, logging,
};

#[derive(Parser, Debug)]
#[command(name = "ysws-timer")]
#[command(about = "Countdowns for You Ship, We Ship programs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Open the interactive timer board")]
    Ui {
        #[arg(long, help = "Path to the programs feed")]
        programs: Option<PathBuf>,
    },

    #[command(about = "Print programs grouped by category")]
    List {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,

        #[arg(long, help = "Path to the programs feed")]
        programs: Option<PathBuf>,
    },

    #[command(about = "Show the countdown for a single program")]
    Countdown {
        #[arg(help = "Program name (case-insensitive)")]
        name: String,

        #[arg(long, help = "Path to the programs feed")]
        programs: Option<PathBuf>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramExport {
    #[serde(flatten)]
    pub program: Program,
    pub remaining_ms: Option<i64>,
    pub days_left: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryExport {
    pub category: Category,
    pub title: String,
    pub programs: Vec<ProgramExport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardExport {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<CategoryExport>,
}

fn load_settings(programs: Option<PathBuf>) -> Result<Settings, String> {
    Ok(Settings::load()
        .map_err(|e| e.to_string())?
        .with_programs_path(programs))
}

fn load_programs(settings: &Settings) -> Result<Vec<Program>, String> {
    feed::load_programs(&settings.programs_path).map_err(|e| e.to_string())
}

pub fn build_export(programs: &[Program], now: DateTime<Utc>) -> BoardExport {
    let categories = categorize(programs, now)
        .into_iter()
        .map(|bucket| CategoryExport {
            category: bucket.category,
            title: bucket.title.to_string(),
            programs: bucket
                .programs
                .into_iter()
                .map(|program| {
                    let remaining_ms = program
                        .deadline()
                        .and_then(countdown::parse_deadline)
                        .map(|_| compute_remaining(program.deadline(), now).total_ms);
                    let days_left = countdown::days_left(program.deadline(), now);
                    ProgramExport {
                        program,
                        remaining_ms,
                        days_left,
                    }
                })
                .collect(),
        })
        .collect();

    BoardExport {
        generated_at: now,
        categories,
    }
}

fn countdown_line(program: &Program, now: DateTime<Utc>) -> Option<String> {
    let formatted = countdown::format_deadline(program.deadline())?;
    let remaining = compute_remaining(program.deadline(), now);
    let mut line = format!("due {}  {}", formatted, countdown::format_countdown(&remaining));
    if remaining.is_running() {
        if let Some(days) = countdown::days_left(program.deadline(), now) {
            line.push_str(&format!("  ({} days left)", days));
        }
    }
    Some(line)
}

pub fn list(programs: Option<PathBuf>, json: bool) -> Result<(), String> {
    let settings = load_settings(programs)?;
    let programs = load_programs(&settings)?;
    let now = Utc::now();

    if json {
        let export = build_export(&programs, now);
        let json = serde_json::to_string_pretty(&export).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    let buckets = categorize(&programs, now);
    if buckets.is_empty() {
        println!("No programs found in {}", settings.programs_path.display());
        return Ok(());
    }

    for bucket in &buckets {
        println!("{} ({})", bucket.title, bucket.programs.len());
        println!("{}", "-".repeat(40));
        for program in &bucket.programs {
            match countdown_line(program, now) {
                Some(line) => println!("{:24} {}", program.name, line),
                None => println!("{:24} {}", program.name, program.status.label()),
            }
        }
        println!();
    }

    Ok(())
}

pub fn show_countdown(name: &str, programs: Option<PathBuf>) -> Result<(), String> {
    let settings = load_settings(programs)?;
    let programs = load_programs(&settings)?;
    let now = Utc::now();

    let program = programs
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("Program '{}' not found", name))?;

    let category = Category::classify(program, now);
    println!("{} [{}]", program.name, category.title());
    if !program.description.is_empty() {
        println!("{}", program.description);
    }
    match countdown_line(program, now) {
        Some(line) => println!("{}", line),
        None => println!("No deadline ({})", program.status.label()),
    }

    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    };
    clap_complete::generate(shell, &mut Cli::command(), "ysws-timer", &mut io::stdout());
    Ok(())
}

fn run_tui(programs: Option<PathBuf>) -> Result<(), String> {
    logging::init_tui_logger(&crate::storage::get_log_path());
    let settings = load_settings(programs)?;
    app::run_ui(settings).map_err(|e| e.to_string())
}

pub fn run_cli() {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Ui { programs: None });
    if !matches!(command, Command::Ui { .. }) {
        logging::init_cli_logger();
    }

    let result = match command {
        Command::Ui { programs } => run_tui(programs),
        Command::List { json, programs } => list(programs, json),
        Command::Countdown { name, programs } => show_countdown(&name, programs),
        Command::Completions { shell } => print_completions(&shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{ProgramStatus, program};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_export_groups_by_category() {
        let programs = vec![
            program(
                "Arcade",
                ProgramStatus::Active {
                    deadline: Some("2025-03-03T12:00:00Z".to_string()),
                },
            ),
            program("Sprig", ProgramStatus::Draft),
        ];

        let export = build_export(&programs, fixed_now());

        assert_eq!(export.categories.len(), 2);
        assert_eq!(export.categories[0].category, Category::LimitedTime);
        let arcade = &export.categories[0].programs[0];
        assert_eq!(arcade.remaining_ms, Some(2 * 86_400_000));
        assert_eq!(arcade.days_left, Some(2));
        assert_eq!(export.categories[1].programs[0].remaining_ms, None);
    }

    #[test]
    fn test_export_serializes_status_tag() {
        let programs = vec![program("Sprig", ProgramStatus::Draft)];
        let export = build_export(&programs, fixed_now());
        let json = serde_json::to_value(&export).expect("serialize export");

        assert_eq!(json["categories"][0]["category"], "draft");
        assert_eq!(json["categories"][0]["programs"][0]["status"], "draft");
        assert_eq!(json["categories"][0]["programs"][0]["name"], "Sprig");
    }

    #[test]
    fn test_countdown_line_for_running_program() {
        let arcade = program(
            "Arcade",
            ProgramStatus::Active {
                deadline: Some("2025-03-02T13:01:01Z".to_string()),
            },
        );
        let line = countdown_line(&arcade, fixed_now()).expect("line");
        assert!(line.contains("1d 01:01:01"));
        assert!(line.contains("(2 days left)"));
    }

    #[test]
    fn test_countdown_line_absent_without_deadline() {
        let draft = program("Sprig", ProgramStatus::Draft);
        assert!(countdown_line(&draft, fixed_now()).is_none());
    }

    #[test]
    fn test_unsupported_shell_is_error() {
        assert!(print_completions("powershell").is_err());
    }

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = Cli::try_parse_from(["ysws-timer", "list", "--json", "--programs", "feed.json"])
            .expect("parse");
        match cli.command {
            Some(Command::List { json, programs }) => {
                assert!(json);
                assert_eq!(programs, Some(PathBuf::from("feed.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
