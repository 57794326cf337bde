use clap::{Parser, Subcommand};
use status_monitor::StatusRecord;

#[derive(Parser)]
#[command(name = "monitor-cli")]
#[command(about = "Query a running status monitor", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the latest status of every target as a table
    Status {
        /// Exit with status 1 if any target is down
        #[arg(long)]
        strict: bool,
    },
    /// Print the raw JSON returned by /api/status
    Raw,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/api/status", cli.url.trim_end_matches('/'));

    let res = client.get(&endpoint).send().await?;
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: monitor returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    match cli.command {
        Commands::Status { strict } => {
            let records: Vec<StatusRecord> = res.json().await?;
            print_table(&records);
            if strict && records.iter().any(|r| !r.reachable) {
                std::process::exit(1);
            }
        }
        Commands::Raw => {
            let json: serde_json::Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn print_table(records: &[StatusRecord]) {
    let width = records
        .iter()
        .map(|r| r.target.len())
        .max()
        .unwrap_or(3)
        .max(3);

    println!("{:<width$}  {:<6}  {:>4}  {:>8}  LAST CHECKED", "URL", "STATUS", "HTTP", "TIME(ms)");
    for r in records {
        let state = if r.reachable { "UP" } else { "DOWN" };
        let code = r.http_code.map_or_else(|| "-".to_string(), |c| c.to_string());
        let latency = r.latency_ms.map_or_else(|| "-".to_string(), |ms| ms.to_string());
        let checked = r.observed_at.with_timezone(&chrono::Local).format("%H:%M:%S");
        println!("{:<width$}  {:<6}  {:>4}  {:>8}  {}", r.target, state, code, latency, checked);
    }
}
