//! CLI entry logic
//!
//! Parses arguments, loads configuration and dispatches to conversion or
//! history handling.

use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::context::Environment;
use crate::convert;
use crate::errors::CurlpyError;
use crate::history::{ConversionRecord, HistoryStore};
use crate::logging;
use crate::service::ConverterService;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(status) => return status,
    };

    let config = match Config::load(parsed.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::defaults_in(parsed.config_dir.as_deref())
        }
    };

    let parsed = if config.default_options.is_empty() {
        parsed
    } else {
        match parse_args(&merge_default_options(args, &config)) {
            Ok(parsed) => parsed,
            Err(status) => return status,
        }
    };

    logging::init(
        parsed.verbose,
        parsed.debug,
        parsed.log_format.unwrap_or_default(),
    );

    match program(&parsed, &config, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.debug),
    }
}

/// Parse arguments; clap errors are printed and mapped to an exit status
fn parse_args(args: &[String]) -> Result<Args, ExitStatus> {
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(e) => {
            e.print().ok();
            let status = if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
            Err(status)
        }
    }
}

/// Insert config default options right after the program name
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    let mut iter = args.into_iter();
    let mut merged: Vec<String> = iter.next().into_iter().collect();
    merged.extend(config.default_options.iter().cloned());
    merged.extend(iter);
    merged
}

pub fn program(args: &Args, config: &Config, env: &Environment) -> Result<ExitStatus, CurlpyError> {
    debug!(?args, config_dir = %config.config_dir.display(), "Starting");

    if args.is_history_query() {
        return handle_history(args, config);
    }

    let command = read_command(args, env)?;

    if args.check {
        return Ok(match convert::parse_command(&command) {
            Ok(_) => {
                println!("Valid curl command");
                ExitStatus::Success
            }
            Err(e) => {
                eprintln!("Invalid curl command: {}", e);
                ExitStatus::Error
            }
        });
    }

    let mut service = if config.history.enabled && !args.no_history {
        ConverterService::with_history(open_history(config)?)
    } else {
        ConverterService::new()
    };

    let outcome = service.convert_command(&command, args.owner)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.success {
        for warning in &outcome.warnings {
            eprintln!("Warning: {}", warning);
        }
        println!("{}", outcome.python);
    } else {
        eprintln!("Error: {}", outcome.message);
    }

    Ok(ExitStatus::from_success(outcome.success))
}

/// The command from the positional argument, or piped on stdin
fn read_command(args: &Args, env: &Environment) -> Result<String, CurlpyError> {
    if let Some(ref command) = args.command {
        return Ok(command.clone());
    }

    match env.read_piped_stdin()? {
        Some(command) if !command.trim().is_empty() => Ok(command),
        _ => Err(CurlpyError::Argument(format!(
            "no curl command given\nusage: {} [OPTIONS] <COMMAND>",
            env.program_name
        ))),
    }
}

fn open_history(config: &Config) -> Result<HistoryStore, CurlpyError> {
    HistoryStore::open(config.history_file(), config.history.max_entries)
}

fn handle_history(args: &Args, config: &Config) -> Result<ExitStatus, CurlpyError> {
    let mut service = ConverterService::with_history(open_history(config)?);

    if let Some(id) = args.delete {
        return Ok(if service.delete(id, args.owner)? {
            println!("Deleted conversion {}", id);
            ExitStatus::Success
        } else {
            eprintln!("Error: Conversion {} not found", id);
            ExitStatus::Error
        });
    }

    if let Some(id) = args.show {
        let record = service
            .get(id)
            .filter(|r| r.is_owned_by(args.owner));
        return Ok(match record {
            Some(record) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(record)?);
                } else {
                    print_record(record);
                }
                ExitStatus::Success
            }
            None => {
                eprintln!("Error: Conversion {} not found", id);
                ExitStatus::Error
            }
        });
    }

    if args.stats {
        let stats = service.stats(args.owner);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("Total conversions:      {}", stats.total_conversions);
            println!("Successful conversions: {}", stats.successful_conversions);
            println!("Failed conversions:     {}", stats.failed_conversions);
            println!("Success rate:           {:.1}%", stats.success_rate);
        }
        return Ok(ExitStatus::Success);
    }

    let limit = args.limit.unwrap_or(config.history.list_limit);
    let records = service.history(limit, args.owner);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in records {
            println!(
                "{}\t{}\t{}\t{}",
                record.id,
                record.created_at.format("%Y-%m-%d %H:%M:%S"),
                record.status,
                first_line(&record.command)
            );
        }
    }
    Ok(ExitStatus::Success)
}

fn print_record(record: &ConversionRecord) {
    println!("Id:      {}", record.id);
    if let Some(owner) = record.owner {
        println!("Owner:   {}", owner);
    }
    println!("Status:  {}", record.status);
    println!("Created: {}", record.created_at.to_rfc3339());
    println!("Command: {}", record.command.trim());
    println!();
    println!("{}", record.output);
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or("")
}

fn handle_error(error: CurlpyError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}
