//! Budget CLI
//!
//! Command-line interface for the Budget Tracker API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use budget_client::BudgetClient;
use budget_types::{TransactionId, TransactionRequest};

#[derive(Parser)]
#[command(name = "budget")]
#[command(author, version, about = "Budget tracker API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Budget API
    #[arg(long, env = "BUDGET_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List all transactions
    List,
    /// Show one transaction
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Record a new transaction
    Add(TransactionArgs),
    /// Replace every field of an existing transaction
    Update {
        /// Transaction ID
        id: TransactionId,
        #[command(flatten)]
        fields: TransactionArgs,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
    /// Show income, expense, category and monthly totals
    Summary,
}

#[derive(Args)]
struct TransactionArgs {
    /// Conventionally "income" or "expense"
    #[arg(long = "type")]
    kind: String,
    #[arg(long)]
    category: String,
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,
    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    description: Option<String>,
}

impl TransactionArgs {
    fn into_request(self, today: NaiveDate) -> TransactionRequest {
        TransactionRequest {
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date.unwrap_or(today),
            description: self.description,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = BudgetClient::new(&cli.api_url);
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
        Commands::List => {
            let transactions = client.list_transactions().await?;
            println!("{}", serde_json::to_string_pretty(&transactions)?);
        }
        Commands::Show { id } => {
            let tx = client.get_transaction(id).await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
        Commands::Add(fields) => {
            let tx = client
                .create_transaction(&fields.into_request(today))
                .await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
        Commands::Update { id, fields } => {
            let tx = client
                .update_transaction(id, &fields.into_request(today))
                .await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
        Commands::Delete { id } => {
            client.delete_transaction(id).await?;
            println!("✓ Transaction {} deleted", id);
        }
        Commands::Summary => {
            let summary = client.summary().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
