//! dejournal - command-line access to journal entry hashing and encoding

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dejournal::config::Config;
use dejournal::core::instruction::JournalInstruction;
use dejournal::{ContentHash, Journal, JournalEntry};

#[derive(Parser)]
#[command(name = "dejournal")]
#[command(about = "dejournal - hash, encode and decode journal entries", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the content hash of some text
    Hash {
        /// Text to hash
        text: Option<String>,
        /// Read the text from standard input instead
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
    },

    /// Encode an entry and print the bytes as hex
    Encode {
        /// 64-character hex content hash
        #[arg(long)]
        hash: String,
        /// Mark the entry public
        #[arg(long)]
        public: bool,
        /// Seconds since the epoch (default: now)
        #[arg(long)]
        timestamp: Option<u64>,
        /// Owner wallet address
        #[arg(long, default_value = "")]
        owner: String,
        /// Wrap the entry in a submit instruction
        #[arg(long)]
        instruction: bool,
    },

    /// Decode hex bytes of an entry and print it as JSON
    Decode {
        /// Hex-encoded entry bytes
        hex: String,
    },

    /// Print a vote instruction as hex
    Vote {
        /// Upvote
        #[arg(long, conflicts_with = "down")]
        up: bool,
        /// Downvote
        #[arg(long)]
        down: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    if let Err(e) = run_application() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_application() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let path = path.to_str().context("config path is not valid UTF-8")?;
            dejournal::init(Some(path))?
        }
        None => dejournal::init(None)?,
    };
    let journal = Journal::new(config)?;

    match cli.command {
        Commands::Hash { text, stdin } => {
            let text = if stdin {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read standard input")?;
                buf
            } else {
                text.context("provide TEXT or --stdin")?
            };
            println!("{}", journal.hash(&text)?);
        }
        Commands::Encode {
            hash,
            public,
            timestamp,
            owner,
            instruction,
        } => {
            let hash = ContentHash::parse(&hash)?;
            let entry = match timestamp {
                Some(ts) => JournalEntry::with_timestamp(hash, public, ts, owner),
                None => JournalEntry::new(hash, public, owner),
            };
            let bytes = if instruction {
                JournalInstruction::submit(entry).encode()
            } else {
                journal.encode(&entry)
            };
            println!("{}", hex::encode(bytes));
        }
        Commands::Decode { hex: input } => {
            let bytes = hex::decode(input.trim()).context("input is not valid hex")?;
            let entry = journal.decode(&bytes)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Vote { up, down } => {
            if !up && !down {
                anyhow::bail!("pass --up or --down");
            }
            println!("{}", hex::encode(journal.vote_instruction(up)));
        }
        Commands::Config => {
            print!("{}", config_toml(config)?);
        }
    }

    Ok(())
}

fn config_toml(config: &Config) -> anyhow::Result<String> {
    Ok(config.to_toml_string()?)
}
