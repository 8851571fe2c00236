use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use poker_showdown::core::Hand;
use poker_showdown::showdown::{resolve, resolve_parallel, Showdown};
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "showdown")]
#[command(about = "Rank five card poker hands and find the winners")]
struct Cli {
    /// Players and their cards as `NAME=CARDS`, for example `alice=AS KS QS JS 10S`.
    /// When empty the same lines are read from stdin (`NAME: CARDS` also works).
    players: Vec<String>,

    /// Print the result as JSON
    #[arg(short, long)]
    json: bool,

    /// Evaluate hands on this many threads
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

/// Split a `NAME=CARDS` or `NAME: CARDS` line.
fn parse_player(line: &str) -> Result<(String, Hand), String> {
    let (name, cards) = line
        .split_once('=')
        .or_else(|| line.split_once(':'))
        .ok_or_else(|| format!("Expected NAME=CARDS, got {line:?}"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Missing player name in {line:?}"));
    }
    let hand = Hand::new_from_str(cards).map_err(|e| format!("Player {name}: {e}"))?;
    Ok((name.to_string(), hand))
}

fn read_table(cli: &Cli) -> Result<Vec<(String, Hand)>, String> {
    if !cli.players.is_empty() {
        return cli.players.iter().map(|p| parse_player(p)).collect();
    }

    let mut table = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("Unable to read stdin: {e}"))?;
        if line.trim().is_empty() {
            continue;
        }
        table.push(parse_player(&line)?);
    }
    Ok(table)
}

fn print_table(showdown: &Showdown<String>) {
    match showdown.winners() {
        None => println!("No winner!"),
        Some(group) if group.players.len() == 1 => {
            println!("The winner is {}!", group.players[0]);
        }
        Some(group) => println!("Split pot between {}!", group.players.join(", ")),
    }

    for (place, group) in showdown.iter().enumerate() {
        println!(
            "{:>3}. {:<28} {}",
            place + 1,
            group.score.to_string(),
            group.players.join(", ")
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match read_table(&cli) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    event!(Level::INFO, num_players = table.len(), threads = cli.threads, "Read table");

    let showdown = if cli.threads > 1 {
        resolve_parallel(table, cli.threads)
    } else {
        resolve(table)
    };

    let showdown = match showdown {
        Ok(showdown) => showdown,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&showdown) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Unable to serialize result: {e}");
                process::exit(1);
            }
        }
    } else {
        print_table(&showdown);
    }
}
