//! Caption a remote image.
//!
//! ```bash
//! REALENGINE_API_TOKEN=... cargo run --example caption -- https://example.com/cat.jpg
//! ```

use realengine_sdk::client::RealEngineClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let image_url = std::env::args()
        .nth(1)
        .ok_or("usage: caption <image-url>")?;

    let client = RealEngineClientBuilder::from_env()?.build()?;
    let caption = client.captions().get(&image_url).await?;

    println!("{}", caption);
    Ok(())
}
