//! Example showing the basic request flow against httpbin.org

use color_eyre::Result;
use relay::http::TransportConfig;
use relay::loading::spinner;
use relay::relay::RelayBuilder;
use relay::request::Request;
use relay::streaming::{StreamOutcome, StreamRequest};
use reqwest::Url;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    // Bind the wrapper to httpbin.org with the default transport settings
    let mut relay = RelayBuilder::new().build();
    relay.bind(TransportConfig {
        base_url: Some(Url::parse("https://httpbin.org")?),
        ..TransportConfig::default()
    })?;

    // Show a terminal spinner while requests are outstanding
    relay.use_loading_counter(spinner("requesting..."));

    // GET routes `data` into the query string automatically
    let echoed = relay
        .request(Request::get("/get").data(json!({"page": 1, "q": "relay"})))
        .await?;
    println!("query echo: {}", echoed["args"]);

    // POST keeps `data` as the JSON body
    let created = relay
        .request(Request::post("/post").data(json!({"name": "ada"})))
        .await?;
    println!("body echo: {}", created["json"]);

    // Download mode resolves with the fixed envelope
    let outcome = relay.streaming(StreamRequest::download("/bytes/1024")).await?;
    if let StreamOutcome::Download(response) = outcome {
        println!(
            "downloaded {} bytes (code {})",
            response.data.stream_result.len(),
            response.code
        );
    }

    Ok(())
}
