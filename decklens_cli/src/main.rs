use clap::{Parser, Subcommand};
use decklens_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decklens")]
#[command(about = "Card list analyzer for keyword abilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the card list header and the (cost, attack) pairs of cards
    /// carrying a keyword ability (default)
    Report {
        /// Ability to filter on, as a letter code (G) or name (guard)
        #[arg(long)]
        ability: Option<String>,

        /// Render the report as one JSON object instead of list notation
        #[arg(long)]
        json: bool,
    },

    /// Print aggregate statistics for the card list
    Summary {
        /// Render the summary as one JSON object
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    decklens_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Report { ability, json }) => cmd_report(&config, ability, json),
        Some(Commands::Summary { json }) => cmd_summary(&config, json),
        None => {
            // Default to "report" command
            cmd_report(&config, None, false)
        }
    }
}

fn cmd_report(config: &Config, ability: Option<String>, json: bool) -> Result<()> {
    let ability = match ability {
        Some(ref raw) => raw.parse()?,
        None => config.report.ability,
    };
    tracing::debug!("Reporting on ability: {}", ability);

    let records = read_records(io::stdin().lock(), config.input.delimiter_byte()?)?;

    // The whole list is sorted (and every cost parsed) before anything is
    // printed; a bad cost means no output at all, not a dangling header.
    let sorted = sort_by_cost(records)?;
    let report = AbilityReport::build(&sorted, ability)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        let (header, pairs) = report.render_lines();
        println!("{}", header);
        println!("{}", pairs);
    }

    Ok(())
}

fn cmd_summary(config: &Config, json: bool) -> Result<()> {
    let records = read_records(io::stdin().lock(), config.input.delimiter_byte()?)?;
    let summary = summarize(&records)?;

    if json {
        println!("{}", summary.to_json()?);
    } else {
        display_summary(&summary);
    }

    Ok(())
}

fn display_summary(summary: &CardListSummary) {
    println!("Cards: {}", summary.total);

    if !summary.types.is_empty() {
        println!();
        println!("By type:");
        for (card_type, count) in &summary.types {
            println!("  {:<14} {}", card_type, count);
        }
    }

    println!();
    println!("By ability:");
    for (name, count) in &summary.abilities {
        println!("  {:<14} {}", name, count);
    }

    if let Some(ref cost) = summary.cost {
        println!();
        println!(
            "Cost: min {} / max {} / mean {:.1}",
            cost.min, cost.max, cost.mean
        );
    }
}
