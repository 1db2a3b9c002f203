//! Pick'em CLI
//!
//! Score weeks once their games are final and report on the season.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pickem_core::{current_week, Trimester, Week};
use season::{
    breakdown, breakdown_report, count_players, generate_report, matchups, matchups_report,
    prize_table, season_standings, special_earners, summarize, survivor_history,
    trimester_standings, week_report, SeasonConfig, SeasonRunner,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pickem")]
#[command(about = "Survivor + spread pick'em scoring", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "pickem.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a week's games and spread lines
    Matchups {
        /// Defaults to the current week
        #[arg(long)]
        week: Option<Week>,
    },
    /// Score one week and write its artifact
    Score {
        #[arg(long)]
        week: Week,
    },
    /// Score every week that has picks but no artifact
    Backfill,
    /// Season leaderboard, or one trimester of it
    Standings {
        #[arg(long)]
        trimester: Option<u8>,
    },
    /// Show one scored week
    Week {
        /// Defaults to the current week
        #[arg(long)]
        week: Option<Week>,
    },
    /// Season summary for a player
    Summary { player: String },
    /// Survivor teams a player has used and has left
    Remaining { player: String },
    /// Pick distribution for a week
    Breakdown {
        /// Defaults to the current week
        #[arg(long)]
        week: Option<Week>,
    },
    /// Prize pool and special-condition earners
    Prizes,
    /// Print the current contest week
    CurrentWeek,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn today_week(config: &SeasonConfig) -> Week {
    current_week(chrono::Local::now().date_naive(), config.season_start)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = SeasonConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let json = cli.json;
    let runner = SeasonRunner::new(config);
    let store = runner.store();

    match cli.command {
        Commands::Matchups { week } => {
            let week = week.unwrap_or_else(|| today_week(runner.config()));
            let schedule = runner.load_schedule().context("loading schedule")?;
            let games = matchups(week, &schedule);
            emit(json, &games, || matchups_report(week, &games))?;
        }
        Commands::Score { week } => {
            let report = runner
                .score_week(week)
                .with_context(|| format!("scoring week {week}"))?;
            report.print_report();
        }
        Commands::Backfill => {
            let results = runner.backfill().context("backfilling scores")?;
            if results.is_empty() {
                println!("Nothing to backfill.");
            }
            let mut failed = 0;
            for (week, result) in results {
                match result {
                    Ok(report) => println!("Week {:>2}: wrote {}", week, report.path.display()),
                    Err(e) => {
                        failed += 1;
                        println!("Week {:>2}: {:#}", week, anyhow::Error::new(e));
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} week(s) could not be scored");
            }
        }
        Commands::Standings { trimester } => {
            let rows = store.load_all().context("loading scored weeks")?;
            match trimester {
                Some(n) => {
                    let t = Trimester::new(n)?;
                    let table = trimester_standings(&rows, t);
                    emit(json, &table, || generate_report(&t.label(), &table))?;
                }
                None => {
                    let table = season_standings(&rows);
                    let title = format!("{} standings", runner.config().name);
                    emit(json, &table, || generate_report(&title, &table))?;
                }
            }
        }
        Commands::Week { week } => {
            let week = week.unwrap_or_else(|| today_week(runner.config()));
            let rows = store
                .load_week(week)
                .with_context(|| format!("loading week {week}"))?;
            emit(json, &rows, || week_report(week, rows.as_deref()))?;
        }
        Commands::Summary { player } => {
            let rows = store.load_all().context("loading scored weeks")?;
            let Some(summary) = summarize(&rows, &player) else {
                bail!("no scored weeks for player `{player}`");
            };
            emit(json, &summary, || summary.generate_report())?;
        }
        Commands::Remaining { player } => {
            let rows = store.load_all().context("loading scored weeks")?;
            let Some(history) = survivor_history(&rows, &player, &runner.config().teams) else {
                bail!("no scored weeks for player `{player}`");
            };
            emit(json, &history, || history.generate_report())?;
        }
        Commands::Breakdown { week } => {
            let week = week.unwrap_or_else(|| today_week(runner.config()));
            let picks = runner
                .load_picks(week)
                .with_context(|| format!("loading picks for week {week}"))?;
            let view = picks.map(|p| breakdown(week, &p));
            emit(json, &view, || breakdown_report(week, view.as_ref()))?;
        }
        Commands::Prizes => {
            let rows = store.load_all().context("loading scored weeks")?;
            let prizes = &runner.config().prizes;
            let players = prizes.players.unwrap_or_else(|| count_players(&rows));
            let table = prize_table(prizes, players);
            let earners = special_earners(&rows);
            emit(json, &(&table, &earners), || table.generate_report(&earners))?;
        }
        Commands::CurrentWeek => {
            let week = today_week(runner.config());
            emit(json, &week, || format!("{week}\n"))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
