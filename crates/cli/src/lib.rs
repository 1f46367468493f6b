mod output;

use clap::Parser;
use clap::error::ErrorKind;
use rtscope_api::{MatchMode, Query};
use rtscope_core::discovery::{DB_ENV_VAR, locate_db};
use rtscope_core::{QueryConfig, QueryEngine, SymbolIndex};
use std::io::Write;
use std::path::PathBuf;

pub use output::{OutputFormat, write_item};

#[derive(Parser, Debug)]
#[command(
    name = "rtscope",
    version,
    about = "Query a precomputed symbol index",
    long_about = "Reads a memory-mapped symbol index and answers one query per run: print the \
                  node tree, follow a symbol to its declaration or definition, list references, \
                  or search the symbol dictionary."
)]
pub struct Cli {
    /// Follow this symbol (e.g. /tmp/main.cpp:32:1)
    #[arg(short = 's', long, value_name = "LOCATION")]
    pub follow_symbol: Option<String>,

    /// Print references of the symbol at LOCATION
    #[arg(short = 'r', long, value_name = "LOCATION")]
    pub references: Option<String>,

    /// Print out the node tree
    #[arg(short = 't', long)]
    pub print_tree: bool,

    /// Print out symbols matching PATTERN (all symbols when omitted)
    #[arg(short = 'l', long, value_name = "PATTERN", num_args = 0..=1, default_missing_value = "")]
    pub list_symbols: Option<String>,

    /// Use this database file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub db_file: Option<PathBuf>,

    /// Match only complete symbols (for --list-symbols)
    #[arg(short = 'c', long)]
    pub match_complete_symbol: bool,

    /// Match symbols that start with the search term (for --list-symbols)
    #[arg(short = 'S', long)]
    pub match_starts_with: bool,

    /// Case insensitive matching
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Limit --print-tree to this many levels below the root
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Emit one JSON object per result line
    #[arg(long)]
    pub json: bool,

    /// Also log to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the flag combination into a query.
    pub fn query(&self) -> rtscope_core::Result<Query> {
        let mut config = QueryConfig::new();
        if let Some(location) = &self.follow_symbol {
            config.follow_symbol(location.as_str())?;
        }
        if let Some(location) = &self.references {
            config.references(location.as_str())?;
        }
        if self.print_tree {
            config.show_tree()?;
        }
        if let Some(pattern) = &self.list_symbols {
            config.list_symbols(pattern.as_str())?;
        }
        if self.match_starts_with {
            config.match_mode(MatchMode::StartsWith)?;
        }
        if self.match_complete_symbol {
            config.match_mode(MatchMode::CompleteSymbol)?;
        }
        config
            .case_insensitive(self.case_insensitive)
            .max_depth(self.max_depth);
        config.build()
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let _guard = rtscope_core::logging::init_logging("cli", cli.verbose);

    let query = cli.query()?;
    let cwd = std::env::current_dir()?;
    let db_file = locate_db(cli.db_file.clone(), std::env::var_os(DB_ENV_VAR), &cwd)?;
    tracing::debug!("Running {:?} against {}", query, db_file.display());

    let index = SymbolIndex::open(&db_file)?;
    let engine = QueryEngine::new(index.view());

    // Nothing reaches stdout unless the whole query succeeds.
    let format = cli.format();
    let mut rendered = Vec::new();
    engine.execute(&query, |item| write_item(&mut rendered, format, &item))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;
    Ok(())
}
