//! trip-survey command line
//!
//! Operates on a JSON answers file: validate it, apply chaining, submit it,
//! or manage the local draft slot.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::path::PathBuf;
use survey_client::{ClientConfig, SubmissionClient};
use survey_draft::{DraftStore, FileStorage};
use survey_flow::chain;
use survey_model::form::FormAnswers;
use survey_rules::{ensure_valid, validate_form};
use tracing_subscriber::EnvFilter;

fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .short('f')
        .required(true)
        .help("Path to a JSON answers file")
}

fn draft_dir_arg() -> Arg {
    Arg::new("draft-dir")
        .long("draft-dir")
        .required(true)
        .help("Directory holding the draft slot")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("trip-survey")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Day-movements travel survey toolkit")
        .subcommand_required(true)
        .subcommand(
            Command::new("validate")
                .about("Validate an answers file")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("chain")
                .about("Apply movement chaining and print the result")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("submit")
                .about("Validate and submit an answers file")
                .arg(file_arg())
                .arg(
                    Arg::new("draft-dir")
                        .long("draft-dir")
                        .help("Draft directory whose movements are cleared on success"),
                )
                .arg(
                    Arg::new("lenient")
                        .long("lenient")
                        .action(ArgAction::SetTrue)
                        .help("Fall back to the development base URL when none is configured"),
                ),
        )
        .subcommand(
            Command::new("draft")
                .about("Inspect or reduce the stored draft")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print the stored draft").arg(draft_dir_arg()))
                .subcommand(
                    Command::new("clear-movements")
                        .about("Drop the movements portion of the stored draft")
                        .arg(draft_dir_arg()),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("validate", args)) => cmd_validate(args),
        Some(("chain", args)) => cmd_chain(args),
        Some(("submit", args)) => cmd_submit(args).await,
        Some(("draft", args)) => match args.subcommand() {
            Some(("show", args)) => cmd_draft_show(args),
            Some(("clear-movements", args)) => cmd_draft_clear(args),
            _ => unreachable!("subcommand is required"),
        },
        _ => unreachable!("subcommand is required"),
    }
}

fn load_answers(args: &ArgMatches) -> Result<FormAnswers> {
    let path = args.get_one::<String>("file").expect("required arg");
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}

fn draft_store(args: &ArgMatches) -> DraftStore {
    let dir = args.get_one::<String>("draft-dir").expect("required arg");
    DraftStore::new(Box::new(FileStorage::in_dir(PathBuf::from(dir))))
}

fn cmd_validate(args: &ArgMatches) -> Result<()> {
    let answers = load_answers(args)?;
    let issues = validate_form(&answers);
    if issues.is_empty() {
        println!("OK: {} movement(s), no issues", answers.movements.len());
        return Ok(());
    }
    for issue in &issues {
        println!("{issue}");
    }
    bail!("form has {} validation issue(s)", issues.len());
}

fn cmd_chain(args: &ArgMatches) -> Result<()> {
    let mut answers = load_answers(args)?;
    answers.movements = chain(&answers.movements);
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}

async fn cmd_submit(args: &ArgMatches) -> Result<()> {
    let answers = load_answers(args)?;
    if let Err(invalid) = ensure_valid(&answers) {
        for issue in &invalid.issues {
            eprintln!("{issue}");
        }
        bail!(invalid);
    }

    let config = if args.get_flag("lenient") {
        ClientConfig::from_env_or_default()
    } else {
        ClientConfig::from_env()?
    };
    let client = SubmissionClient::new(config);

    match client.submit(&answers).await {
        Ok(response) => {
            println!("submitted: HTTP {}", response.status);
            if let Some(dir) = args.get_one::<String>("draft-dir") {
                DraftStore::new(Box::new(FileStorage::in_dir(PathBuf::from(dir))))
                    .clear_movements();
                println!("draft movements cleared");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            Err(err.into())
        }
    }
}

fn cmd_draft_show(args: &ArgMatches) -> Result<()> {
    let store = draft_store(args);
    // A fresh store always yields its first restore.
    let snapshot = store.restore().unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn cmd_draft_clear(args: &ArgMatches) -> Result<()> {
    draft_store(args).clear_movements();
    println!("draft movements cleared");
    Ok(())
}
