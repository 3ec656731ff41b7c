//! Command parsing and dispatch shared by the REPL and one-shot invocations.

use std::fmt::Write as _;
use std::io::Write;

use clap::{Parser, Subcommand};
use morph_core::filter::category_counts;
use morph_core::submission::FieldEdit;
use morph_core::{AnimatedCounter, DirectoryQuery, SubmissionWizard, filter_entities, spawn_counter};
use morph_types::formatting::{format_counter, format_pct, format_xp};
use morph_types::{Category, CategoryFilter, builtin_stats};
use tokio::sync::oneshot;

use crate::session::{APP_NAME, Session};

#[derive(Parser)]
#[command(version, about = "Morph ecosystem directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's quests and XP
    Quests,
    /// Mark a quest done, or undo it
    Toggle { id: String },
    /// Start a new quest day if the date has changed
    Reload,
    /// Clear today's quest progress
    Reset,
    /// Search the project directory
    Search {
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Headline network stats
    Stats,
    /// Animate a number counting up
    Count {
        #[arg(short, long)]
        target: f64,
        #[arg(short, long)]
        duration: Option<u32>,
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Check a project submission
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        twitter: String,
        #[arg(long, default_value = "")]
        website: String,
        #[arg(long)]
        description: String,
    },
    Config,
    Exit,
}

/// Parse one REPL line and run it. Returns `Ok(true)` when the user quits.
pub async fn respond(line: &str, session: &mut Session) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "morph".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    run(cli.command, session).await
}

pub async fn run(command: Option<Commands>, session: &mut Session) -> Result<bool, String> {
    match command {
        Some(Commands::Quests) => print!("{}", render_quests(session)),
        Some(Commands::Toggle { id }) => {
            let done = session.toggle(&id)?;
            println!("{} {}", if done { "completed" } else { "reopened" }, id);
            print!("{}", render_quests(session));
        }
        Some(Commands::Reload) => {
            if session.reload() {
                println!("new day, quests reset");
            }
            print!("{}", render_quests(session));
        }
        Some(Commands::Reset) => {
            session.reset();
            print!("{}", render_quests(session));
        }
        Some(Commands::Search { category, query }) => {
            print!("{}", render_search(session, &DirectoryQuery::new(category, query)));
        }
        Some(Commands::Stats) => {
            for stat in builtin_stats() {
                let growth = stat.growth.as_deref().unwrap_or("");
                println!("{:<24} {:>14} {}", stat.label, stat.display(stat.value), growth);
            }
        }
        Some(Commands::Count {
            target,
            duration,
            steps,
        }) => {
            let duration = duration.unwrap_or(session.config.default_counter_duration_ms);
            let steps = steps.unwrap_or(session.config.counter_steps);
            count(target, duration, steps).await?;
        }
        Some(Commands::Submit {
            name,
            category,
            twitter,
            website,
            description,
        }) => {
            let edits = vec![
                FieldEdit::Name(name),
                FieldEdit::Category(category),
                FieldEdit::TwitterUrl(twitter),
                FieldEdit::Website(website),
                FieldEdit::Description(description),
            ];
            print!("{}", render_submission(edits));
        }
        Some(Commands::Config) => {
            let path = confy::get_configuration_file_path(APP_NAME, None)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|e| format!("unavailable ({e})"));
            println!("config file:  {path}");
            match session.data_dir() {
                Some(dir) => println!("data dir:     {}", dir.display()),
                None => println!("data dir:     (in memory)"),
            }
            println!("storage key:  {}", session.config.storage_key);
            println!("counter:      {} steps", session.config.counter_steps);
        }
        Some(Commands::Exit) => {
            write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

/// Quest checklist with an XP progress bar.
pub fn render_quests(session: &Session) -> String {
    let store = session.store();
    let progress = store.progress(session.state());

    let mut out = String::new();
    let _ = writeln!(out, "Morph Zoo: Daily Quests ({})", session.state().date_key());
    let _ = writeln!(
        out,
        "Today's XP Goal: {}  {} {}",
        format_xp(progress.earned_xp, progress.total_xp),
        progress_bar(progress.fraction, 20),
        format_pct(progress.fraction),
    );
    for quest in &progress.quests {
        let _ = writeln!(
            out,
            "  [{}] {:<16} {:<16} +{} XP",
            if quest.done { "x" } else { " " },
            quest.id,
            quest.title,
            quest.xp
        );
    }
    out
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Directory listing for a query.
pub fn render_search(session: &Session, query: &DirectoryQuery) -> String {
    let projects = session.projects();
    let result = filter_entities(projects, query);

    let mut out = String::new();
    if result.is_no_results() {
        let _ = writeln!(out, "No projects match \"{}\" in {}", query.needle(), query.category);
        return out;
    }

    let counts = category_counts(projects);
    let _ = writeln!(
        out,
        "{} of {} projects ({})",
        result.len(),
        projects.len(),
        CategoryFilter::chips()
            .map(|chip| match chip {
                CategoryFilter::All => format!("All {}", projects.len()),
                CategoryFilter::Only(c) => format!("{} {}", c, counts.get(&c).copied().unwrap_or(0)),
            })
            .collect::<Vec<_>>()
            .join(" | ")
    );
    for project in result.iter() {
        let _ = writeln!(
            out,
            "  {:<14} {:<15} {:<14} {}",
            project.name,
            project.category,
            project.status_text(),
            project.description
        );
    }
    out
}

/// Drive the wizard through every step with the given edits.
pub fn render_submission(edits: Vec<FieldEdit>) -> String {
    let mut wizard = SubmissionWizard::new();
    for edit in edits {
        wizard.update(edit);
    }

    let mut out = String::new();
    loop {
        let step = wizard.step();
        let result = if step == morph_core::WizardStep::Review {
            wizard.submit().map(|project| {
                let _ = writeln!(
                    out,
                    "Submitted! {} ({}) is {}.",
                    project.name,
                    project.category,
                    project.status_text()
                );
                morph_core::WizardStep::Submitted
            })
        } else {
            wizard.next()
        };

        match result {
            Ok(morph_core::WizardStep::Submitted) => return out,
            Ok(_) => {}
            Err(errors) => {
                let _ = writeln!(out, "{} step has problems:", step.title());
                for error in errors {
                    let _ = writeln!(out, "  - {error}");
                }
                return out;
            }
        }
    }
}

/// Animate `target` on stdout.
async fn count(target: f64, duration_ms: u32, steps: u32) -> Result<(), String> {
    let counter = AnimatedCounter::new(target, duration_ms)
        .and_then(|c| c.with_steps(steps))
        .map_err(|e| e.to_string())?;
    let decimals = if target.fract() == 0.0 { 0 } else { 1 };

    let (show, visible) = oneshot::channel();
    let handle = spawn_counter(counter, visible);
    let mut values = handle.subscribe();
    // A terminal readout is visible as soon as it is printed
    show.send(())
        .map_err(|_| "counter stopped before it became visible".to_string())?;

    let mut stdout = std::io::stdout();
    while values.changed().await.is_ok() {
        let value = *values.borrow_and_update();
        write!(stdout, "\r{}", format_counter(value, decimals)).map_err(|e| e.to_string())?;
        stdout.flush().map_err(|e| e.to_string())?;
    }
    writeln!(stdout).map_err(|e| e.to_string())?;

    let phase = handle.wait().await;
    tracing::debug!(?phase, "Counter finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use morph_core::{FixedClock, MemoryStore};
    use morph_types::AppConfig;

    use super::*;

    fn session() -> Session {
        Session::with_parts(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())),
        )
    }

    #[test]
    fn test_render_quests_reflects_toggles() {
        let mut session = session();
        session.toggle("bridger").unwrap();
        let out = render_quests(&session);
        assert!(out.contains("(2026-10-19)"));
        assert!(out.contains("50/110 XP"));
        assert!(out.contains("[x] bridger"));
        assert!(out.contains("[ ] daily-checkin"));
    }

    #[test]
    fn test_toggle_rejects_unknown_quest() {
        let mut session = session();
        assert!(session.toggle("nope").is_err());
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
    }

    #[test]
    fn test_render_search() {
        let session = session();
        let out = render_search(
            &session,
            &DirectoryQuery::new(CategoryFilter::Only(Category::DeFi), "swap"),
        );
        assert!(out.starts_with("1 of 6 projects"));
        assert!(out.contains("BulbaSwap"));

        let none = render_search(
            &session,
            &DirectoryQuery::new(CategoryFilter::Only(Category::Gaming), "swap"),
        );
        assert_eq!(none, "No projects match \"swap\" in Gaming\n");
    }

    #[test]
    fn test_render_submission() {
        let ok = render_submission(vec![
            FieldEdit::Name("Zoo".into()),
            FieldEdit::Category(Some(Category::Gaming)),
            FieldEdit::TwitterUrl("https://x.com/zoo".into()),
            FieldEdit::Description("Rewards hub for the Morph consumer layer.".into()),
        ]);
        assert_eq!(ok, "Submitted! Zoo (Gaming) is Pending Review.\n");

        let bad = render_submission(vec![
            FieldEdit::Name("Zoo".into()),
            FieldEdit::Category(Some(Category::Gaming)),
            FieldEdit::TwitterUrl("zoo".into()),
        ]);
        assert!(bad.starts_with("Links step has problems:"));
    }

    #[tokio::test]
    async fn test_respond_dispatches_commands() {
        let mut session = session();
        assert_eq!(respond("toggle social-warrior", &mut session).await, Ok(false));
        assert!(session.state().is_completed("social-warrior"));
        assert_eq!(respond("reset", &mut session).await, Ok(false));
        assert!(session.state().is_empty());
        assert!(respond("toggle", &mut session).await.is_err());
        assert!(respond("search --category Lending", &mut session).await.is_err());
        assert!(respond("search \"unterminated", &mut session).await.is_err());
        assert_eq!(respond("exit", &mut session).await, Ok(true));
    }

    #[tokio::test(start_paused = true)]
    async fn test_count_runs_to_completion() {
        assert!(count(45.0, 100, 5).await.is_ok());
        assert!(count(45.0, 0, 5).await.is_err());
    }
}
