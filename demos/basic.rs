//! Basic example demonstrating the MaveDB API client.
//!
//! Run with:
//! ```
//! MAVEDB_API_URL=http://127.0.0.1:8000/api/ MAVEDB_API_TOKEN=your-token \
//!     cargo run --example basic
//! ```

use mavetools::{Licence, MaveClient};

#[tokio::main]
async fn main() -> mavetools::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating MaveDB client...");
    let client = MaveClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Fetch a score set by URN
    println!("\n--- Fetching Score Set ---");
    let scoreset = client
        .get_model_instance("scoresets", "urn:mavedb:00000001-a-1")
        .await?;
    println!("{}", serde_json::to_string_pretty(&scoreset)?);

    // Submit a new experiment (requires MAVEDB_API_TOKEN)
    if client.has_token() {
        println!("\n--- Submitting Experiment ---");
        let experiment = serde_json::json!({
            "title": "Example experiment",
            "short_description": "Submitted by the mavetools basic example",
            "licence": Licence::cc0(),
        });
        let urn = client.post_model_instance(&experiment, "experiments").await?;
        println!("Created: {urn}");
    } else {
        println!("\nNo MAVEDB_API_TOKEN set; skipping submission.");
    }

    Ok(())
}
