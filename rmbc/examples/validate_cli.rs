#[cfg(all(feature = "remote", feature = "serde"))]
use clap::{Parser, Subcommand};

#[cfg(all(feature = "remote", feature = "serde"))]
use rmbc::{
    calculate_check_digit, normalize_barcode, validate_barcode, BarcodeComponents, RemoteConfig,
    SubmitOutcome, ValidationService,
};

#[cfg(all(feature = "remote", feature = "serde"))]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "RMBC CLI - Validate Royal Mail barcodes against the 13-character GB format")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(all(feature = "remote", feature = "serde"))]
#[derive(Subcommand)]
enum Commands {
    /// Validate a barcode locally
    Check {
        /// Raw barcode input (normalized before validation)
        barcode: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the positional components of a barcode
    Components {
        /// Raw barcode input
        barcode: String,
    },
    /// Compute the check digit for an eight-digit serial number
    Digit {
        /// Serial number
        serial: String,
    },
    /// Validate, then submit to the simulated confirmation server
    Submit {
        /// Raw barcode input
        barcode: String,

        /// Minimum simulated delay in milliseconds
        #[arg(long, default_value_t = 1_000)]
        min_delay_ms: u64,

        /// Maximum simulated delay in milliseconds
        #[arg(long, default_value_t = 30_000)]
        max_delay_ms: u64,

        /// Probability that the server confirms the barcode
        #[arg(long, default_value_t = 0.5)]
        success_rate: f64,
    },
}

#[cfg(all(feature = "remote", feature = "serde"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { barcode, json } => handle_check(barcode, *json)?,
        Commands::Components { barcode } => handle_components(barcode),
        Commands::Digit { serial } => handle_digit(serial)?,
        Commands::Submit {
            barcode,
            min_delay_ms,
            max_delay_ms,
            success_rate,
        } => {
            handle_submit(barcode, *min_delay_ms, *max_delay_ms, *success_rate).await;
        }
    }

    Ok(())
}

#[cfg(not(all(feature = "remote", feature = "serde")))]
fn main() {
    eprintln!("This example requires the 'remote' and 'serde' features to be enabled.");
    eprintln!("Run with: cargo run --features remote,serde --example validate_cli");
    std::process::exit(1);
}

#[cfg(all(feature = "remote", feature = "serde"))]
fn handle_check(barcode: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let normalized = normalize_barcode(barcode);
    let result = validate_barcode(&normalized);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result.error_message() {
        None => println!("{normalized}: valid"),
        Some(message) => println!("{normalized}: {message}"),
    }

    Ok(())
}

#[cfg(all(feature = "remote", feature = "serde"))]
fn handle_components(barcode: &str) {
    let normalized = normalize_barcode(barcode);
    let components = BarcodeComponents::parse(&normalized);

    println!("Barcode: {normalized}");
    println!("  Prefix:        {}", components.prefix);
    println!("  Serial number: {}", components.serial_number);
    println!("  Check digit:   {}", components.check_digit);
    println!("  Country code:  {}", components.country_code);
}

#[cfg(all(feature = "remote", feature = "serde"))]
fn handle_digit(serial: &str) -> Result<(), Box<dyn std::error::Error>> {
    let digit = calculate_check_digit(serial).map_err(|e| format!("{e}"))?;
    println!("Check digit for {serial}: {digit}");
    Ok(())
}

#[cfg(all(feature = "remote", feature = "serde"))]
async fn handle_submit(barcode: &str, min_delay_ms: u64, max_delay_ms: u64, success_rate: f64) {
    let config = RemoteConfig::default()
        .with_delay_range(min_delay_ms, max_delay_ms)
        .with_success_rate(success_rate);
    let service = ValidationService::new(config);

    let start_time = std::time::Instant::now();
    println!("Submitting {}...", normalize_barcode(barcode));

    match service.submit(barcode).await {
        SubmitOutcome::Resolved { id, status } => println!("Entry {id} resolved: {status}"),
        SubmitOutcome::Rejected { message } => println!("{message}"),
    }

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");
}
