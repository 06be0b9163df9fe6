//! Concurrent submissions through the ValidationService, followed by a
//! textual rendering of the resulting history.

#[cfg(feature = "remote")]
#[tokio::main]
async fn main() {
    use rmbc::{RemoteConfig, SubmitOutcome, ValidationService};

    let config = RemoteConfig::default()
        .with_delay_range(50, 200)
        .with_success_rate(0.5);
    let service = ValidationService::new(config);

    render_history(&service).await;

    // Three well-formed barcodes confirmed concurrently
    let (first, second, third) = tokio::join!(
        service.submit("AB473124829GB"),
        service.submit("  xh545554533gb  "),
        service.submit("AA000000005GB"),
    );

    for outcome in [first, second, third] {
        match outcome {
            SubmitOutcome::Resolved { id, status } => println!("entry {id}: {status}"),
            SubmitOutcome::Rejected { message } => println!("rejected: {message}"),
        }
    }

    // A wrong check digit never reaches the server
    if let SubmitOutcome::Rejected { message } = service.submit("AB473124820GB").await {
        println!("rejected: {message}");
    }

    render_history(&service).await;
}

#[cfg(feature = "remote")]
async fn render_history(service: &rmbc::ValidationService) {
    let entries = service.entries().await;
    if entries.is_empty() {
        println!("No validations yet. Enter a barcode to begin.");
        return;
    }

    println!("Validation History");
    for entry in entries {
        println!(
            "  {} {}  {}",
            entry.status.symbol(),
            entry.barcode,
            entry.status.label()
        );
    }
}

#[cfg(not(feature = "remote"))]
fn main() {
    eprintln!("This example requires the 'remote' feature to be enabled.");
    eprintln!("Run with: cargo run --features remote --example submit_flow");
    std::process::exit(1);
}
