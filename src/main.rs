//! `fboard` - CLI for flightboard
//!
//! This binary loads a JSON roster of flight records into an in-memory
//! registry and applies one operation per invocation.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use flightboard::cli::{
    Cli, Command, ConfigCommand, ListCommand, LongestCommand, OutputFormat, RemoveCommand,
    UpdateCommand,
};
use flightboard::{init_logging, roster, Config, Error, Flight, FlightRegistry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&cli.roster, &config, &cmd),
        Command::Longest(cmd) => handle_longest(&cli.roster, &config, &cmd),
        Command::Update(cmd) => handle_update(&cli.roster, &config, &cmd),
        Command::Remove(cmd) => handle_remove(&cli.roster, &config, &cmd),
        Command::Demo => {
            handle_demo();
            Ok(())
        }
        Command::Config(cmd) => handle_config(&config, &cmd),
    }
}

/// Resolve the roster path from the CLI flag or the configuration.
fn resolve_roster(cli_roster: &Option<PathBuf>, config: &Config) -> Result<PathBuf, Error> {
    cli_roster
        .clone()
        .or_else(|| config.roster_path())
        .ok_or(Error::RosterMissing)
}

fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> OutputFormat {
    requested.unwrap_or_else(|| config.output_format())
}

fn handle_list(cli_roster: &Option<PathBuf>, config: &Config, cmd: &ListCommand) -> Result<()> {
    let registry = roster::load_registry(resolve_roster(cli_roster, config)?)?;
    let format = resolve_format(cmd.format, config);

    match &cmd.status {
        Some(status) => print_flights(&registry.flights_by_status(status), format)?,
        None => print_flights(registry.flights(), format)?,
    }
    Ok(())
}

fn handle_longest(
    cli_roster: &Option<PathBuf>,
    config: &Config,
    cmd: &LongestCommand,
) -> Result<()> {
    let registry = roster::load_registry(resolve_roster(cli_roster, config)?)?;
    let format = resolve_format(cmd.format, config);

    match registry.longest_flight() {
        Some(flight) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(flight)?),
            OutputFormat::Table => print_flights(std::slice::from_ref(flight), format)?,
        },
        None => println!("Roster is empty."),
    }
    Ok(())
}

fn handle_update(cli_roster: &Option<PathBuf>, config: &Config, cmd: &UpdateCommand) -> Result<()> {
    let mut registry = roster::load_registry(resolve_roster(cli_roster, config)?)?;

    if !registry.update_status(&cmd.flight_number, &cmd.status) {
        eprintln!("No flight {} in the roster; nothing updated.", cmd.flight_number);
    }
    print_flights(registry.flights(), resolve_format(cmd.format, config))?;
    Ok(())
}

fn handle_remove(cli_roster: &Option<PathBuf>, config: &Config, cmd: &RemoveCommand) -> Result<()> {
    let mut registry = roster::load_registry(resolve_roster(cli_roster, config)?)?;

    if !registry.remove(&cmd.flight_number) {
        eprintln!("No flight {} in the roster; nothing removed.", cmd.flight_number);
    }
    print_flights(registry.flights(), resolve_format(cmd.format, config))?;
    Ok(())
}

/// Run the built-in demonstration scenario against sample data.
fn handle_demo() {
    let mut registry = FlightRegistry::from_flights(sample_flights());

    println!("Loaded {} sample flights:", registry.len());
    for flight in &registry {
        println!("  {flight}");
    }

    println!();
    println!("Cancelling AZ001...");
    registry.update_status("AZ001", "CANCELLED");
    if let Some(flight) = registry.get("AZ001") {
        println!("  {flight}");
    }

    println!();
    match registry.longest_flight() {
        Some(flight) => println!("Longest flight: {flight}"),
        None => println!("Longest flight: none"),
    }

    println!();
    println!("Removing AZ001...");
    registry.remove("AZ001");
    match registry.longest_flight() {
        Some(flight) => println!("Longest remaining flight: {flight}"),
        None => println!("Longest remaining flight: none"),
    }

    println!();
    println!("Updating a flight that does not exist...");
    if registry.update_status("AZ999", "CANCELLED") {
        println!("  AZ999 updated");
    } else {
        println!("  No flight AZ999; roster unchanged.");
    }

    println!();
    println!("Delayed flights:");
    for flight in registry.flights_by_status("DELAYED") {
        println!("  {flight}");
    }
}

/// The sample roster used by the demo scenario.
fn sample_flights() -> Vec<Flight> {
    vec![
        Flight::new("AZ001", "2025-02-19 15:30", "2025-02-20 03:45", 735, "ON_TIME"),
        Flight::new("AZ002", "2025-02-21 11:00", "2025-02-22 02:35", 935, "DELAYED"),
        Flight::new("AZ003", "2025-02-22 09:00", "2025-02-22 21:15", 735, "DELAYED"),
    ]
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Roster]");
                match config.roster_path() {
                    Some(path) => println!("  Default roster:  {}", path.display()),
                    None => println!("  Default roster:  (none, pass --roster)"),
                }
                println!();
                println!("[Output]");
                println!("  Format:          {:?}", config.output_format());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}

/// Print flights as a table or JSON.
fn print_flights(flights: &[Flight], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(flights)?),
        OutputFormat::Table => {
            if flights.is_empty() {
                println!("No flights.");
                return Ok(());
            }
            println!(
                "{:<10} {:<18} {:<18} {:>8}  {}",
                "FLIGHT", "DEPARTURE", "ARRIVAL", "DURATION", "STATUS"
            );
            for flight in flights {
                println!(
                    "{:<10} {:<18} {:<18} {:>8}  {}",
                    flight.flight_number,
                    flight.departure_time,
                    flight.arrival_time,
                    flight.duration_minutes,
                    flight.status
                );
            }
        }
    }
    Ok(())
}
