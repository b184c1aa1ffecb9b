use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "lab-cli")]
#[command(about = "Command-line client for the CRUD demo backend", long_about = None)]
struct Cli {
    /// Base URL of the CRUD app (or of the proxy in front of it)
    #[arg(short, long, default_value = "http://localhost:8002")]
    url: String,

    /// Value sent as the Host header, for host-based routing through a proxy
    #[arg(long)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check liveness
    Health,
    /// List every item
    List,
    /// Show one item
    Get { id: u64 },
    /// Create an item
    Create {
        name: String,
        description: String,
        price: f64,
    },
    /// Replace an item's fields
    Update {
        id: u64,
        name: String,
        description: String,
        price: f64,
    },
    /// Delete an item
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)),
        Commands::List => client.get(format!("{}/items", base)),
        Commands::Get { id } => client.get(format!("{}/items/{}", base, id)),
        Commands::Create {
            name,
            description,
            price,
        } => client
            .post(format!("{}/items", base))
            .json(&json!({ "name": name, "description": description, "price": price })),
        Commands::Update {
            id,
            name,
            description,
            price,
        } => client
            .put(format!("{}/items/{}", base, id))
            .json(&json!({ "name": name, "description": description, "price": price })),
        Commands::Delete { id } => client.delete(format!("{}/items/{}", base, id)),
    };

    let request = match &cli.host {
        Some(host) => request.header(reqwest::header::HOST, host),
        None => request,
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let served_by = res
        .headers()
        .get("x-served-by")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if !status.is_success() {
        eprintln!("Error: backend returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if let Some(app) = served_by {
        eprintln!("served by {}", app);
    }
    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
