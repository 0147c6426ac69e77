use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Parser, Subcommand};
use smartplan_core::time::{format_hhmm, local_date_in_timezone, now_in_timezone};
use smartplan_core::{
    analyze_productivity_and_suggest, create_daily_schedule, generate_day_blocks,
    smart_task_prioritization, SlotType, SmartSchedule, Task, TaskStatus,
};
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod logging;
mod state;

use config::{init_config, load_config, Config};

#[derive(Parser, Debug)]
#[command(name = "smartplan", version, about = "Heuristic daily planner for your task list")]
struct Cli {
    /// Log planning decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a schedule for one day from a JSON task list
    Plan {
        /// JSON array of tasks
        #[arg(long)]
        tasks: PathBuf,

        /// Day to plan, YYYY-MM-DD (default: today in the configured timezone).
        /// Today is planned from the current time; any other day is
        /// planned as seen from its midday.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print todo tasks in planning order
    Prioritize {
        #[arg(long)]
        tasks: PathBuf,
    },

    /// Print the focus slots for the configured working day
    Slots {
        /// Include breaks
        #[arg(long)]
        all: bool,
    },

    /// Score today's completed tasks and suggest what to do next
    Analyze {
        #[arg(long)]
        tasks: PathBuf,

        /// Reference instant, RFC3339 (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Manage ~/.smartplan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Plan { tasks, date, json } => {
            let cfg = load_config()?;
            plan(&cfg, &tasks, date, json)?;
        }

        Command::Prioritize { tasks } => {
            let tasks = state::read_tasks(&tasks)?;
            let todo: Vec<Task> =
                tasks.into_iter().filter(|t| t.status == TaskStatus::Todo).collect();
            for (i, t) in smart_task_prioritization(&todo).iter().enumerate() {
                let due = t
                    .due_date
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>2}. [{:?}] {} | due={} | {} min",
                    i + 1,
                    t.priority,
                    t.title,
                    due,
                    t.duration_minutes()
                );
            }
        }

        Command::Slots { all } => {
            let cfg = load_config()?;
            let p = &cfg.preferences;
            let blocks = generate_day_blocks(
                p.working_hours.start,
                p.working_hours.end,
                p.focus_time,
                p.break_time,
            );
            for b in blocks.iter().filter(|b| all || b.slot_type == SlotType::Focus) {
                println!(
                    "{}-{}  {:?}  {} min",
                    format_hhmm(b.start),
                    format_hhmm(b.end),
                    b.slot_type,
                    b.duration
                );
            }
        }

        Command::Analyze { tasks, at } => {
            let cfg = load_config()?;
            let now = match at {
                Some(s) => DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("invalid --at '{s}'"))?,
                None => now_in_timezone(&cfg.timezone)?,
            };
            let completed: Vec<Task> = state::read_tasks(&tasks)?
                .into_iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .collect();
            let analysis = analyze_productivity_and_suggest(&completed, &now);

            println!("Productivity score: {}/100\n", analysis.score);
            println!("## Insights");
            for i in &analysis.insights {
                println!("- {i}");
            }
            println!("\n## Recommendations");
            for r in &analysis.recommendations {
                println!("- {r}");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Reference instant for planning `date`: `now` when planning today, midday otherwise.
fn target_date(
    tz: &str,
    date: Option<NaiveDate>,
    now: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    match date {
        Some(d) if d != now.date_naive() => local_date_in_timezone(d, tz),
        _ => Ok(now),
    }
}

fn plan(cfg: &Config, tasks_path: &Path, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let tasks = state::read_tasks(tasks_path)?;
    let date = target_date(&cfg.timezone, date, now_in_timezone(&cfg.timezone)?)?;
    info!(tasks = tasks.len(), date = %date, "planning day");

    let schedule = create_daily_schedule(&tasks, &cfg.preferences, &date);

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule).context("serialize schedule")?);
        return Ok(());
    }

    print_schedule(&schedule, &tasks);
    Ok(())
}

fn print_schedule(schedule: &SmartSchedule, tasks: &[Task]) {
    println!("# Plan for {}\n", schedule.date.date_naive());

    if schedule.slots.is_empty() {
        println!("(nothing scheduled)\n");
    }
    for s in &schedule.slots {
        println!(
            "{}-{}  [{:?}] {} ({} min)",
            format_hhmm(s.time_slot.start),
            format_hhmm(s.time_slot.end),
            s.task.priority,
            s.task.title,
            s.task.duration_minutes()
        );
        println!("             {}", s.ai_reason);
    }

    println!("\nProductivity score: {}/100", schedule.productivity_score);

    if !schedule.recommendations.is_empty() {
        println!("\n## Recommendations");
        for r in &schedule.recommendations {
            println!("- {r}");
        }
    }

    let unscheduled = schedule.unscheduled_ids(tasks);
    if !unscheduled.is_empty() {
        println!("\n## Not scheduled today");
        for id in unscheduled {
            let title = tasks.iter().find(|t| t.id == id).map(|t| t.title.as_str()).unwrap_or("");
            println!("- {id} {title}");
        }
    }
}
