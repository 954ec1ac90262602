//! sqlbind CLI
//!
//! Command-line tool for inspecting SQL statements and rendering them with
//! bound values.

mod params;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlbind_core::{ParsedStatement, Script};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

/// Tokenize SQL statements and render them with bound values.
#[derive(Parser)]
#[command(name = "sqlbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL text to process.
    #[arg(short, long, conflicts_with = "file")]
    sql: Option<String>,

    /// Read SQL from a file. Without --sql or --file, SQL is read from stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Bind arguments as a JSON array. Objects bind by name.
    #[arg(short, long, env = "SQLBIND_PARAMS", default_value = "[]")]
    params: String,

    /// Enable verbose output.
    #[arg(short, long, env = "SQLBIND_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first statement with placeholders replaced by bound values.
    Render,

    /// Print the canonical SQL, placeholders and trailing text of the first
    /// statement.
    Canonical,

    /// Render every statement of the script, one per line.
    Split,
}

/// Parses the first statement of `sql`, naming the offending input on failure.
fn parse_statement(sql: &str) -> anyhow::Result<ParsedStatement> {
    ParsedStatement::parse(sql).map_err(|err| {
        let near = err.span().slice(sql).unwrap_or_default();
        let message = format!("Failed to scan SQL near {near:?}");
        anyhow::Error::new(err).context(message)
    })
}

impl Cli {
    fn read_sql(&self) -> anyhow::Result<String> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut sql = String::new();
        std::io::stdin()
            .read_to_string(&mut sql)
            .context("Failed to read SQL from stdin")?;
        Ok(sql)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sql = cli.read_sql()?;
    let args = params::parse_params(&cli.params)?;
    debug!(bytes = sql.len(), args = args.len(), "Loaded input");

    match cli.command {
        Commands::Render => {
            let mut stmt = parse_statement(&sql)?;
            stmt.bind_params(args);
            println!("{stmt}");
            if !stmt.remainder().is_empty() {
                info!("Ignoring text after the first statement; use `split` to render all.");
            }
        }
        Commands::Canonical => {
            let stmt = parse_statement(&sql)?;
            println!("{}", stmt.sql());
            let keys: Vec<String> = stmt.placeholders().map(|key| format!(":{key}")).collect();
            if keys.is_empty() {
                info!("No placeholders.");
            } else {
                info!("Placeholders: {}", keys.join(", "));
            }
            info!("Trailing: {:?}", stmt.trailing());
        }
        Commands::Split => {
            let stmts = Script::new(sql).bind_all(&args)?;
            for stmt in &stmts {
                println!("{stmt};");
            }
            info!("Rendered {} statement(s).", stmts.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlbind_core::{BindArg, ScanError};

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "sqlbind",
            "--sql",
            "select ?",
            "--params",
            r#"["x"]"#,
            "render",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Render));
        assert_eq!(cli.read_sql().unwrap(), "select ?");

        let args: Vec<BindArg> = params::parse_params(&cli.params).unwrap();
        let mut stmt = ParsedStatement::parse(&cli.read_sql().unwrap()).unwrap();
        stmt.bind_params(args);
        assert_eq!(stmt.render(), "select 'x'");
    }

    #[test]
    fn test_scan_error_names_offending_input() {
        let err = parse_statement("select a from t where b = 'x").unwrap_err();
        assert_eq!(err.to_string(), r#"Failed to scan SQL near "'x""#);
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::UnterminatedLiteral { delimiter: '\'', .. })
        ));

        let err = parse_statement("select * from t where a = @a").unwrap_err();
        assert_eq!(err.to_string(), r#"Failed to scan SQL near "@a""#);
    }

    #[test]
    fn test_sql_conflicts_with_file() {
        let result = Cli::try_parse_from(["sqlbind", "--sql", "a", "--file", "b", "split"]);
        assert!(result.is_err());
    }
}
