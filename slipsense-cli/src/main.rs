use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use slipsense_classify::interpret_slip;
use slipsense_core::time::bangkok_today;
use slipsense_core::types::{RawRecognition, SlipExtractionResult, TxnType, UserIdentity};
use std::path::PathBuf;

mod config;
mod ocr;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SLIPSENSE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "slipsense", version = VERSION, about = "Thai bank-slip interpretation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// OCR a slip image via the configured service and interpret it
    Scan {
        /// Path to the slip image
        #[arg(long)]
        image: PathBuf,

        /// User's first name, for income/expense matching
        #[arg(long)]
        first_name: Option<String>,

        /// User's last name
        #[arg(long)]
        last_name: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interpret already-recognized slip text (skips OCR)
    Parse {
        /// Slip text, as one argument
        #[arg(long)]
        text: Option<String>,

        /// Read slip text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Write a default ~/.slipsense/config.toml
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            image,
            first_name,
            last_name,
            json,
        } => {
            if !image.exists() {
                bail!("image not found: {}", image.display());
            }
            let cfg = config::load_config()?;
            let raw = ocr::recognize_image(&cfg.ocr, &image).await;
            let user = user_from_flags(first_name, last_name);
            let result = interpret_slip(&raw, &user, bangkok_today())?;
            report(&result, json)?;
        }

        Command::Parse {
            text,
            file,
            first_name,
            last_name,
            json,
        } => {
            let text = match (text, file) {
                (Some(t), _) => t,
                (None, Some(p)) => std::fs::read_to_string(&p)
                    .with_context(|| format!("read {}", p.display()))?,
                (None, None) => bail!("pass --text or --file"),
            };
            let raw = RawRecognition::available(text);
            let user = user_from_flags(first_name, last_name);
            let result = interpret_slip(&raw, &user, bangkok_today())?;
            report(&result, json)?;
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}

fn user_from_flags(first: Option<String>, last: Option<String>) -> UserIdentity {
    UserIdentity::new(first.unwrap_or_default(), last.unwrap_or_default())
}

fn report(result: &SlipExtractionResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let ex = &result.extracted;
    println!(
        "valid slip: {} (keyword hits: {})",
        result.is_valid_slip, result.keyword_matches
    );
    println!(
        "type: {} ({})",
        ex.txn_type.map_or("-", type_label),
        ex.type_confidence.as_str()
    );
    match ex.amount {
        Some(a) => println!("amount: {:.2}", a),
        None => println!("amount: -"),
    }
    println!("date: {} {}", ex.date, ex.time.as_deref().unwrap_or(""));
    if let Some(title) = &ex.transaction_title {
        println!("title: {}", title);
    }
    if !ex.account_name.is_empty() {
        println!("account: {}", ex.account_name);
    }
    if let Some(detail) = &result.match_detail {
        println!("match: {}", detail);
    }
    if let Some(warning) = &ex.type_warning {
        println!("warning: {}", warning);
    }
    Ok(())
}

fn type_label(t: TxnType) -> &'static str {
    match t {
        TxnType::Income => "income",
        TxnType::Expense => "expense",
    }
}
