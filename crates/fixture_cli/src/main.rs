//! Fixture CLI
//!
//! Roster JSON → round-robin fixture JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixture_core::{fixture_request_schema, FixtureGenerator, FixtureStats};
use fixture_cli::{load_matches, load_options, load_teams, write_json};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixture")]
#[command(about = "Generate and check round-robin league fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fixture for a roster
    Generate {
        /// Teams JSON file (array of {id, name, active})
        #[arg(long)]
        teams: PathBuf,

        /// Tournament id stamped on every match
        #[arg(long)]
        tournament: u32,

        /// Options JSON file (falls back to FIXTURE_OPTIONS_PATH)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Output file for the fixture JSON (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a match list against a roster
    Validate {
        #[arg(long)]
        teams: PathBuf,

        /// Matches JSON file (match array or saved fixture)
        #[arg(long)]
        matches: PathBuf,

        #[arg(long, default_value_t = 0)]
        tournament: u32,

        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Print summary stats for a match list
    Stats {
        #[arg(long)]
        matches: PathBuf,
    },

    /// Print the JSON schema of API requests
    Schema,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { teams, tournament, options, out } => {
            let roster = load_teams(&teams)?;
            let options = load_options(options.as_deref())?;
            let generator = FixtureGenerator::new(&roster, tournament, options)?;

            eprintln!("🗓️  Generating fixture...");
            eprintln!("   Teams:  {}", generator.team_ids().len());
            eprintln!("   Rounds: {}..={}", generator.round_range().start(), generator.round_range().end());

            let result = generator.generate_fixture();
            print_stats(&generator.get_fixture_stats(&result.matches));

            for note in &result.diagnostics {
                eprintln!("⚠️  {}", note);
            }

            match out {
                Some(path) => {
                    write_json(&path, &result)?;
                    eprintln!("\n📄 Fixture saved to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }

        Commands::Validate { teams, matches, tournament, options } => {
            let roster = load_teams(&teams)?;
            let matches = load_matches(&matches)?;
            let options = load_options(options.as_deref())?;
            let generator = FixtureGenerator::new(&roster, tournament, options)?;

            let report = generator.validate_fixture(&matches);
            if report.is_valid {
                eprintln!("✅ Fixture is valid ({} matches)", matches.len());
            } else {
                for error in &report.errors {
                    eprintln!("❌ {}", error);
                }
                anyhow::bail!("Fixture validation failed with {} errors", report.errors.len());
            }
        }

        Commands::Stats { matches } => {
            let matches = load_matches(&matches)?;
            print_stats(&fixture_core::schedule::fixture_stats(&matches));
        }

        Commands::Schema => {
            let schema = fixture_request_schema().map_err(anyhow::Error::msg)?;
            println!("{}", schema);
        }
    }

    Ok(())
}

fn print_stats(stats: &FixtureStats) {
    eprintln!("\n✅ {}", stats.summary_text());
    for (team_id, count) in &stats.matches_per_team {
        eprintln!("   Team {:>4}: {} matches", team_id, count);
    }
}
