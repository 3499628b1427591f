//! CarVet CLI - Order dashboard tools.
//!
//! # Usage
//!
//! ```bash
//! # Write a sample order book to the data file (reproducible with --seed)
//! carvet seed --count 40 --out demo.json --seed 42
//!
//! # List orders, filtered like the dashboard table
//! carvet list --search octavia --payment paid --from 2024-01-01 --to 2024-01-31
//!
//! # Run the data-quality rules over every order, or just one
//! carvet check
//! carvet check ORD0007 --data demo.json
//!
//! # Show one order in detail
//! carvet show ORD0007
//!
//! # Support notepad
//! carvet note add --author anna --query-type billing "caller asked about invoice"
//! carvet note list
//! ```
//!
//! Data files default to `CARVET_DATA`/`CARVET_NOTES`; the `--data`,
//! `--out`, and `--file` flags override the environment per invocation.
//!
//! # Commands
//!
//! - `seed` - Generate a sample order book
//! - `list` - Filter and render the orders table
//! - `check` - Evaluate data-quality rules
//! - `show` - Order detail view
//! - `note` - Support notepad

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use carvet_core::FieldKey;
use carvet_crm::{QueryType, SeverityPolicy};

mod commands;
mod config;
mod data;

#[derive(Parser)]
#[command(name = "carvet")]
#[command(author, version, about = "CarVet order dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample order book to the data file
    Seed {
        /// Number of orders to generate
        #[arg(short, long, default_value_t = 25)]
        count: usize,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,

        /// Write here instead of the configured data file
        #[arg(long)]
        out: Option<PathBuf>,

        /// Seed the random generator for a reproducible book
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List orders, optionally filtered
    List {
        /// Read this order book instead of the configured data file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Free-text search over the visible columns
        #[arg(short, long)]
        search: Option<String>,

        /// Earliest order date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<chrono::NaiveDate>,

        /// Latest order date (YYYY-MM-DD), inclusive; defaults to `--from`
        #[arg(long)]
        to: Option<chrono::NaiveDate>,

        /// Keep orders with this payment status (repeatable, e.g. `paid`)
        #[arg(long = "payment")]
        payment: Vec<carvet_core::PaymentStatus>,

        /// Keep orders with this workflow status (repeatable, e.g. `completed`)
        #[arg(long = "status")]
        status: Vec<carvet_core::OrderStatus>,

        /// Keep orders from this city (repeatable)
        #[arg(long = "city")]
        city: Vec<String>,

        /// Show exactly these columns instead of the default layout
        #[arg(long, value_delimiter = ',')]
        columns: Vec<FieldKey>,
    },
    /// Run the data-quality rules over the order book
    Check {
        /// Check only this order, e.g. ORD0007
        order_id: Option<String>,

        /// Read this order book instead of the configured data file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Severity policy (`three-tier` or `binary`); overrides the environment
        #[arg(short, long)]
        policy: Option<SeverityPolicy>,
    },
    /// Show one order in detail
    Show {
        /// Order id, e.g. ORD0007
        order_id: String,

        /// Read this order book instead of the configured data file
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Support notepad
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Add a note
    Add {
        /// Agent name
        #[arg(short, long)]
        author: String,

        /// What the conversation was about
        /// (`billing`, `technical`, `complaint`, `general`)
        #[arg(short, long, default_value = "general")]
        query_type: QueryType,

        /// Note text
        text: String,

        /// Use this notepad instead of the configured notes file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List notes, newest first
    List {
        /// Use this notepad instead of the configured notes file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed {
            count,
            force,
            out,
            seed,
        } => commands::seed::run(count, force, out, seed)?,
        Commands::List {
            data,
            search,
            from,
            to,
            payment,
            status,
            city,
            columns,
        } => {
            let args = commands::list::ListArgs {
                data,
                search,
                from,
                to,
                payment,
                status,
                city,
                columns,
            };
            commands::list::run(&args)?;
        }
        Commands::Check {
            order_id,
            data,
            policy,
        } => commands::check::run(data, order_id.as_deref(), policy)?,
        Commands::Show { order_id, data } => commands::show::run(&order_id, data)?,
        Commands::Note { action } => match action {
            NoteAction::Add {
                author,
                query_type,
                text,
                file,
            } => commands::note::add(&author, query_type, &text, file)?,
            NoteAction::List { file } => commands::note::list(file)?,
        },
    }
    Ok(())
}
