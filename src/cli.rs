//! CLI definition and command handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::address;
use crate::config::{self, Config};
use crate::record::{Column, HostRecord};
use crate::table::HostTable;
use crate::view;

#[derive(Parser)]
#[command(name = "hostedit")]
#[command(about = "Edit the hosts file: list, add, remove, update and sort mappings")]
pub struct Cli {
    /// Hosts file to edit (default: HOSTEDIT_HOSTS_FILE, config, then /etc/hosts)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List mappings as index, address, host, comment
    List {
        /// Show only rows containing this text in any column (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Append a mapping and save
    Add {
        address: String,
        host: String,
        #[arg(long, short = 'c', default_value = "")]
        comment: String,
        /// Skip address and host name validation
        #[arg(long)]
        force: bool,
    },
    /// Remove mappings by index (as shown by list) and save
    Remove {
        #[arg(required = true, num_args = 1..)]
        indices: Vec<usize>,
    },
    /// Change fields of one mapping and save
    Update {
        index: usize,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        host: Option<String>,
        #[arg(long, short = 'c')]
        comment: Option<String>,
        /// Skip address and host name validation
        #[arg(long)]
        force: bool,
    },
    /// Sort mappings by a column and save
    Sort {
        #[arg(value_enum)]
        column: Column,
        #[arg(long)]
        descending: bool,
    },
    /// Check whether a string is a valid IPv4 or IPv6 address
    Check { address: String },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&config::config_path())?;
    let path = config.resolve_hosts_file(cli.file.as_deref());
    let mut table = HostTable::new(path);

    match cli.command {
        Commands::List { filter, json } => cmd_list(&mut table, filter.as_deref(), json),
        Commands::Add {
            address,
            host,
            comment,
            force,
        } => {
            let record = HostRecord::new(address.trim(), host.trim(), comment);
            check_record(&record, config.strict && !force)?;
            load(&mut table)?;
            table.insert(record);
            save(&table)?;
            println!("Added mapping at index {}", table.count() - 1);
            Ok(())
        }
        Commands::Remove { indices } => {
            load(&mut table)?;
            let removed = table.remove(&indices)?;
            save(&table)?;
            for r in &removed {
                println!("Removed: {} {}", r.address, r.host_name);
            }
            Ok(())
        }
        Commands::Update {
            index,
            address,
            host,
            comment,
            force,
        } => {
            load(&mut table)?;
            let mut record = table.record_at(index)?.clone();
            if let Some(a) = address {
                record.address = a.trim().to_string();
            }
            if let Some(h) = host {
                record.host_name = h.trim().to_string();
            }
            if let Some(c) = comment {
                record.comment = c;
            }
            check_record(&record, config.strict && !force)?;
            table.update(index, record)?;
            save(&table)?;
            println!("Updated mapping at index {index}");
            Ok(())
        }
        Commands::Sort { column, descending } => {
            load(&mut table)?;
            table.reorder(column, !descending);
            save(&table)?;
            println!("Sorted {} mappings", table.count());
            Ok(())
        }
        Commands::Check { address } => match address::address_family(&address) {
            Some(family) => {
                println!("valid {family}");
                Ok(())
            }
            None => anyhow::bail!("invalid address: {address:?}"),
        },
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load(table: &mut HostTable) -> Result<()> {
    let path = table.path().display().to_string();
    table.load().with_context(|| format!("loading {path}"))?;
    Ok(())
}

fn save(table: &HostTable) -> Result<()> {
    table
        .save()
        .with_context(|| format!("saving {}", table.path().display()))
}

/// Reject records the user should correct before they are written.
///
/// Records that would not read back as written are always refused; `strict`
/// adds the address and host name syntax checks.
fn check_record(record: &HostRecord, strict: bool) -> Result<()> {
    for (name, value) in [("address", &record.address), ("host name", &record.host_name)] {
        if value.is_empty() {
            anyhow::bail!("{name} must not be empty");
        }
        if value.contains(|c: char| c.is_whitespace() || c == '#') {
            anyhow::bail!("{name} {value:?} must not contain whitespace or '#'");
        }
    }
    if record.comment.contains(['\n', '\r']) {
        anyhow::bail!("comment must be a single line");
    }
    if !strict {
        return Ok(());
    }
    if !address::is_valid_address(&record.address) {
        anyhow::bail!(
            "invalid address {:?}: expected an IPv4 or IPv6 literal (use --force to keep it)",
            record.address
        );
    }
    if !address::is_valid_hostname(&record.host_name) {
        anyhow::bail!(
            "invalid host name {:?} (use --force to keep it)",
            record.host_name
        );
    }
    Ok(())
}

/// One `list --json` entry.
#[derive(serde::Serialize)]
struct Row<'a> {
    index: usize,
    #[serde(flatten)]
    record: &'a HostRecord,
}

fn cmd_list(table: &mut HostTable, filter: Option<&str>, json: bool) -> Result<()> {
    load(table)?;
    let rows = view::filter(table.records(), filter.unwrap_or(""));
    if json {
        let out: Vec<Row> = rows
            .into_iter()
            .map(|(index, record)| Row { index, record })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (i, r) in rows {
            println!("{i}\t{}\t{}\t{}", r.address, r.host_name, r.comment);
        }
    }
    Ok(())
}
