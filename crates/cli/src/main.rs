// GridBase CLI - headless grid editing against SQLite databases

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use gridbase_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use gridbase_cli::{load_session, script};
use gridbase_config::Settings;
use gridbase_engine::SqlStatement;
use gridbase_io::{apply_statements, csv::export_visible};

#[derive(Parser)]
#[command(name = "gbase")]
#[command(about = "Headless grid editing for SQLite tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SQL an edit script would generate, without executing it
    #[command(after_help = "\
Examples:
  gbase preview app.db users edits.toml
  gbase preview app.db users edits.toml --json")]
    Preview {
        /// SQLite database file
        db: PathBuf,
        /// Table to edit
        table: String,
        /// TOML edit script
        script: PathBuf,
        /// Emit statements as JSON (sql + params) instead of preview text
        #[arg(long)]
        json: bool,
    },

    /// Apply an edit script to the database in one transaction
    Apply {
        db: PathBuf,
        table: String,
        script: PathBuf,
    },

    /// Show what an edit script would change
    Stats {
        db: PathBuf,
        table: String,
        script: PathBuf,
    },

    /// Export the table as CSV, optionally after applying a script
    #[command(after_help = "\
Examples:
  gbase export app.db users
  gbase export app.db users --script edits.toml --out users.csv")]
    Export {
        db: PathBuf,
        table: String,
        /// Edit script to apply before exporting (deleted rows are filtered)
        #[arg(long)]
        script: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load();

    match command {
        Commands::Preview {
            db,
            table,
            script,
            json,
        } => {
            let conn = Connection::open(&db)?;
            let statements = plan(&conn, &table, &script, &settings)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statements)?);
            } else if statements.is_empty() {
                eprintln!("script produces no statements");
            } else {
                for stmt in &statements {
                    println!("{};", stmt.preview());
                }
            }
            Ok(())
        }

        Commands::Apply { db, table, script } => {
            let mut conn = Connection::open(&db)?;
            let statements = plan(&conn, &table, &script, &settings)?;
            let affected = apply_statements(&mut conn, &statements)?;
            eprintln!(
                "applied {} statement(s), {} row(s) affected",
                statements.len(),
                affected
            );
            Ok(())
        }

        Commands::Stats { db, table, script } => {
            let conn = Connection::open(&db)?;
            let session = edited_session(&conn, &table, &script, &settings)?;
            let summary = session.summary();
            println!("{}", summary.description);
            for detail in &summary.details {
                println!("  {}", detail);
            }
            for warning in &summary.warnings {
                eprintln!("warning: {}", warning);
            }
            Ok(())
        }

        Commands::Export {
            db,
            table,
            script: script_path,
            out,
        } => {
            let conn = Connection::open(&db)?;
            let session = match &script_path {
                Some(path) => edited_session(&conn, &table, path, &settings)?,
                None => load_session(&conn, &table, settings.validation_delay())?,
            };
            let written = match out {
                Some(path) => export_visible(fs::File::create(path)?, &session)?,
                None => export_visible(std::io::stdout().lock(), &session)?,
            };
            eprintln!("exported {} row(s)", written);
            Ok(())
        }
    }
}

/// Load the table, apply the script, and return the session with its
/// pending diff intact.
fn edited_session(
    conn: &Connection,
    table: &str,
    script_path: &PathBuf,
    settings: &Settings,
) -> Result<gridbase_engine::GridSession, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(script_path)?;
    let edit_script = script::EditScript::parse(&text)?;
    let mut session = load_session(conn, table, settings.validation_delay())?;
    script::apply(&mut session, &edit_script)?;
    Ok(session)
}

/// Statements the script's diff would produce.
fn plan(
    conn: &Connection,
    table: &str,
    script_path: &PathBuf,
    settings: &Settings,
) -> Result<Vec<SqlStatement>, Box<dyn std::error::Error>> {
    let session = edited_session(conn, table, script_path, settings)?;
    Ok(session.tracker().statements(table))
}
