//! Draft CLI Tool
//!
//! Offline team balancing over a JSON roster file, without the HTTP service.
//!
//! Usage:
//!   cargo run --bin draft-cli -- draft --teams 3
//!   cargo run --bin draft-cli -- draft --roster players.json --order mirrored --json
//!   cargo run --bin draft-cli -- compare --roster players.json --teams 2
//!   cargo run --bin draft-cli -- sample > players.json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use team_draft::balancer::{
    DraftConfig, DraftOrder, SequentialBalancer, SnakeDraftBalancer, TeamAssignment, TeamBalancer,
};
use team_draft::roster::{sample_players, validate_name, validate_skills};
use team_draft::service::DraftResult;
use team_draft::skills::display_average_score;
use team_draft::types::{Player, ScoreBasis};

#[derive(Parser)]
#[command(name = "draft-cli")]
#[command(about = "Split a volleyball roster into balanced teams from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft teams and print them with their balance report
    Draft {
        /// JSON array of player records; the sample roster when omitted
        #[arg(short, long)]
        roster: Option<PathBuf>,
        /// Number of teams
        #[arg(short, long, default_value = "2")]
        teams: usize,
        /// Pick order (boundary_reset or mirrored)
        #[arg(short, long, default_value = "boundary_reset")]
        order: DraftOrder,
        /// Score basis (stored or raw)
        #[arg(short, long, default_value = "stored")]
        basis: ScoreBasis,
        /// Decimal places for averages
        #[arg(short, long, default_value = "1")]
        decimals: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare the snake draft against sequential chunking
    Compare {
        #[arg(short, long)]
        roster: Option<PathBuf>,
        #[arg(short, long, default_value = "2")]
        teams: usize,
        #[arg(short, long, default_value = "stored")]
        basis: ScoreBasis,
    },
    /// Print the sample roster as JSON
    Sample,
}

/// Read player records, rebuilding each stored average from its skills
fn load_roster(path: Option<&Path>) -> Result<Vec<Player>> {
    let Some(path) = path else {
        return Ok(sample_players()
            .into_iter()
            .zip(1..)
            .map(|(input, id)| Player::new(id, input.name, input.photo_url, input.skills))
            .collect());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    let records: Vec<Player> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid roster file {}", path.display()))?;

    records
        .into_iter()
        .map(|record| {
            validate_name(&record.name)
                .and_then(|_| validate_skills(&record.skills))
                .with_context(|| format!("Invalid player record {}", record.id))?;
            Ok(Player::new(
                record.id,
                record.name,
                record.photo_url,
                record.skills,
            ))
        })
        .collect()
}

fn print_assignment(result: &DraftResult) {
    println!(
        "Drafted {} teams ({}, {} scores)",
        result.teams.len(),
        result.balancer,
        result.score_basis
    );
    for team in &result.teams {
        println!();
        println!("{} - average {}", team.label, team.average_score);
        for player in &team.players {
            println!(
                "  {:<24} {:>3} ({})",
                player.name,
                player.average_score,
                display_average_score(&player.skills)
            );
        }
    }
    println!();
    println!("Average difference: {}", result.average_difference);
}

fn draft_result(
    balancer: &dyn TeamBalancer,
    assignment: TeamAssignment,
    decimals: u32,
) -> DraftResult {
    let report = assignment.report().rounded(decimals);
    DraftResult::from_teams(
        balancer.name(),
        assignment.score_basis(),
        assignment.into_teams(),
        &report,
        "Team",
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Draft {
            roster,
            teams,
            order,
            basis,
            decimals,
            json,
        } => {
            let players = load_roster(roster.as_deref())?;
            let balancer = SnakeDraftBalancer::new(DraftConfig {
                order,
                score_basis: basis,
            });
            let assignment = balancer.balance(&players, teams)?;
            let result = draft_result(&balancer, assignment, decimals);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_assignment(&result);
            }
        }
        Commands::Compare {
            roster,
            teams,
            basis,
        } => {
            let players = load_roster(roster.as_deref())?;
            let balancers: Vec<(&str, Box<dyn TeamBalancer>)> = vec![
                (
                    "snake_draft (boundary_reset)",
                    Box::new(SnakeDraftBalancer::new(DraftConfig {
                        order: DraftOrder::BoundaryReset,
                        score_basis: basis,
                    })),
                ),
                (
                    "snake_draft (mirrored)",
                    Box::new(SnakeDraftBalancer::new(DraftConfig {
                        order: DraftOrder::Mirrored,
                        score_basis: basis,
                    })),
                ),
                ("sequential", Box::new(SequentialBalancer::new(basis))),
            ];

            println!(
                "{:<28} {:>14} {:>14}",
                "balancer", "avg difference", "max difference"
            );
            for (label, balancer) in &balancers {
                let report = balancer.balance(&players, teams)?.report();
                println!(
                    "{:<28} {:>14.3} {:>14.3}",
                    label,
                    report.average_difference,
                    report.max_difference()
                );
            }
        }
        Commands::Sample => {
            let players = load_roster(None)?;
            println!("{}", serde_json::to_string_pretty(&players)?);
        }
    }

    Ok(())
}
