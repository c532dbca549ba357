//! Basic example demonstrating the Clubhouse API client.
//!
//! Run with:
//! ```
//! CLUBHOUSE_API_TOKEN=your-token cargo run --example basic
//! ```

use clubhouse::{ClubhouseError, Config, ReqwestTransport};
use serde_json::json;

#[tokio::main]
async fn main() -> clubhouse::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    println!("Using API {}", config.version);
    let client = config.into_client(ReqwestTransport::new()?)?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Listing Projects ---");
    if let Some(projects) = client.get("projects").await? {
        let count = projects.as_array().map_or(0, Vec::len);
        println!("Found {count} projects");
    }

    println!("\n--- Searching Stories ---");
    let found = client
        .post("stories/search", &json!({"archived": false}))
        .await?;
    println!("{}", serde_json::to_string_pretty(&found).map_err(ClubhouseError::Encode)?);

    println!("\n--- Missing Story ---");
    match client.get("stories/0").await {
        Err(ClubhouseError::ResourceNotExist { message }) => println!("Not found: {message}"),
        Err(e) => return Err(e),
        Ok(story) => println!("Unexpected story: {story:?}"),
    }

    println!("\nDone!");
    Ok(())
}
