//! Split Ledger CLI
//!
//! Thin driver over the engine: keeps a group ledger in a JSON snapshot file,
//! records expenses and settle-up payments, and prints net balances and the
//! settlement plan.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use splitledger_core::{
    GroupLedger, LedgerSnapshot, MatchStrategy, MemoryStore, Money, RemainderStrategy, SplitSpec,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "splitledger", about = "Shared-expense ledger with settle-up suggestions")]
struct Cli {
    /// Ledger snapshot file
    #[arg(short, long, default_value = "ledger.json", env = "SPLITLEDGER_FILE")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an empty ledger file
    Init,

    /// Record an expense (exactly one of --equal / --percent / --custom)
    Add {
        #[arg(long)]
        group: String,

        /// Participant who paid
        #[arg(long)]
        payer: String,

        #[arg(long)]
        description: String,

        /// Total amount, e.g. 100.00
        #[arg(long)]
        amount: Money,

        /// Equal split: comma-separated participants, e.g. alice,bob,carol
        #[arg(long)]
        equal: Option<String>,

        /// Percentage split, e.g. alice=60,bob=40
        #[arg(long)]
        percent: Option<String>,

        /// Custom split with absolute amounts, e.g. alice=60.00,bob=40.00
        #[arg(long)]
        custom: Option<String>,

        /// Stripe the rounding remainder instead of anchoring it on the
        /// first participant
        #[arg(long)]
        striped: bool,
    },

    /// Print net balances for a group
    Balances {
        #[arg(long)]
        group: String,
    },

    /// Print the settlement plan for a group
    Plan {
        #[arg(long)]
        group: String,

        /// Match largest creditor/debtor pairs first (fewer payments)
        #[arg(long)]
        largest_first: bool,
    },

    /// Record a settle-up payment between two participants
    Settle {
        #[arg(long)]
        group: String,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: Money,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init => init(&cli.ledger),
        Command::Add {
            group,
            payer,
            description,
            amount,
            equal,
            percent,
            custom,
            striped,
        } => {
            let spec = parse_spec(equal, percent, custom)?;
            let remainder = if striped {
                RemainderStrategy::Striped
            } else {
                RemainderStrategy::FirstEntry
            };
            let mut ledger = GroupLedger::with_strategies(
                load_store(&cli.ledger)?,
                remainder,
                MatchStrategy::Fifo,
            );
            let expense = ledger.add_expense(&group, &description, amount, &payer, &spec)?;
            save_store(&cli.ledger, ledger.store())?;
            println!("recorded {} ({} paid {})", expense.id(), payer, amount);
            Ok(())
        }
        Command::Balances { group } => {
            let ledger = GroupLedger::new(load_store(&cli.ledger)?);
            let summary = ledger.group_summary(&group)?;
            if summary.balances.is_empty() {
                println!("no expenses recorded for group {group}");
                return Ok(());
            }
            for (id, balance) in &summary.balances {
                println!("{:>12}  {id}", balance.to_string());
            }
            Ok(())
        }
        Command::Plan { group, largest_first } => {
            let matching = if largest_first {
                MatchStrategy::LargestFirst
            } else {
                MatchStrategy::Fifo
            };
            let ledger = GroupLedger::with_strategies(
                load_store(&cli.ledger)?,
                RemainderStrategy::FirstEntry,
                matching,
            );
            let summary = ledger.group_summary(&group)?;
            if summary.settlements.is_empty() {
                println!("group {group} is settled");
                return Ok(());
            }
            for tx in &summary.settlements {
                println!("{} pays {} to {}", tx.from, tx.amount, tx.to);
            }
            Ok(())
        }
        Command::Settle {
            group,
            from,
            to,
            amount,
        } => {
            let mut ledger = GroupLedger::new(load_store(&cli.ledger)?);
            ledger.record_settlement(&group, &from, &to, amount)?;
            save_store(&cli.ledger, ledger.store())?;
            println!("recorded settlement: {from} paid {amount} to {to}");
            Ok(())
        }
    }
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::write(path, LedgerSnapshot::empty().to_json()?)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("created {}", path.display());
    Ok(())
}

fn load_store(path: &Path) -> Result<MemoryStore> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(LedgerSnapshot::from_json(&json)?.restore()?)
}

fn save_store(path: &Path, store: &MemoryStore) -> Result<()> {
    fs::write(path, LedgerSnapshot::capture(store).to_json()?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Build a split spec from exactly one of the three mode flags
fn parse_spec(
    equal: Option<String>,
    percent: Option<String>,
    custom: Option<String>,
) -> Result<SplitSpec> {
    match (equal, percent, custom) {
        (Some(list), None, None) => Ok(SplitSpec::equal(
            list.split(',').map(str::trim).map(String::from),
        )),
        (None, Some(list), None) => {
            let mut entries = Vec::new();
            for (id, value) in parse_pairs(&list)? {
                let percent: f64 = value
                    .parse()
                    .with_context(|| format!("invalid percent {value:?} for {id}"))?;
                entries.push((id, percent));
            }
            Ok(SplitSpec::percentage(entries))
        }
        (None, None, Some(list)) => {
            let mut entries = Vec::new();
            for (id, value) in parse_pairs(&list)? {
                let amount: Money = value
                    .parse()
                    .with_context(|| format!("invalid amount {value:?} for {id}"))?;
                entries.push((id, amount));
            }
            Ok(SplitSpec::custom(entries))
        }
        _ => bail!("specify exactly one of --equal, --percent, --custom"),
    }
}

/// Parse "id=value,id=value" lists
fn parse_pairs(list: &str) -> Result<Vec<(String, String)>> {
    list.split(',')
        .map(|item| {
            let (id, value) = item
                .split_once('=')
                .with_context(|| format!("expected id=value, got {item:?}"))?;
            Ok((id.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
