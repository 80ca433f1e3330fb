// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod session;

use clap::{Parser, Subcommand};
use pantry_card_api::CardSnapshot;
use pantry_card_persistence::{load_snapshot, save_snapshot};
use pantry_domain::RawFormData;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

use session::{Assignment, Outcome, Session, ValidationReport, parse_assignment};

/// Pantry Card - drive the inventory card's item forms from a terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a card snapshot (platform state plus card configuration) in JSON.
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    /// Save the updated inventory back into the snapshot file.
    #[arg(short, long, global = true)]
    write_back: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the add-item form and submit it.
    Add {
        /// A form value, e.g. `--set quantity=2`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,
    },
    /// Open an item in the edit form, change fields and save it.
    Edit {
        /// The item's current name, matched exactly.
        name: String,
        /// A form value, e.g. `--set name=Rye`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,
    },
    /// Validate form values and print the item a submit would send.
    Validate {
        /// A JSON file holding raw form data.
        #[arg(long, conflicts_with = "set")]
        form: Option<PathBuf>,
        /// A form value over an otherwise blank form. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,
    },
}

fn require_snapshot(args: &Args) -> Result<&Path, Box<dyn std::error::Error>> {
    args.snapshot
        .as_deref()
        .ok_or_else(|| "--snapshot is required for add and edit".into())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_validate(
    form: Option<&Path>,
    set: &[Assignment],
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let raw: RawFormData = match form {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => session::raw_form(set),
    };

    let report: ValidationReport = session::validate_form(&raw);
    print_json(&report)?;
    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// A form submission against the snapshot's inventory.
enum Submission<'a> {
    Add(&'a [Assignment]),
    Edit(&'a str, &'a [Assignment]),
}

async fn run_submit(
    args: &Args,
    submission: Submission<'_>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path: &Path = require_snapshot(args)?;
    let snapshot: CardSnapshot = load_snapshot(path)?;
    info!("Loaded snapshot for {}", snapshot.config.entity);

    let mut session: Session = Session::new(snapshot)?;
    let outcome: Outcome = match submission {
        Submission::Add(set) => session.add(set).await,
        Submission::Edit(name, set) => session.edit(name, set).await,
    };
    print_json(&outcome)?;

    if args.write_back {
        if session.changed() {
            save_snapshot(path, &session.current_snapshot()?)?;
            info!("Wrote updated inventory to {}", path.display());
        } else {
            warn!("Nothing changed; snapshot left as is");
        }
    }

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Command::Validate { form, set } => run_validate(form.as_deref(), set),
        Command::Add { set } => run_submit(&args, Submission::Add(set)).await,
        Command::Edit { name, set } => run_submit(&args, Submission::Edit(name, set)).await,
    }
}
