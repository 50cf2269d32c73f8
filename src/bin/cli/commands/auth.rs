//! Authentication and health command handlers

use serde_json::Value;
use trade_smoke::{CheckContext, ClientResult, SmokeConfig, SmokeRunner, TradeApiClient};

pub async fn handle_auth_command(config: &SmokeConfig, token: Option<&str>) -> ClientResult<()> {
    let client = TradeApiClient::new(config)?;
    let token = token.or(config.auth_token.as_deref());

    println!(
        "Requesting token from {} ({})",
        client.base_url(),
        if token.is_some() {
            "with bearer token"
        } else {
            "unauthenticated"
        }
    );

    let resp = client.auth_token(token).await?;
    println!("  Status: {}", resp.status);
    println!(
        "  Content-Type: {}",
        resp.content_type.as_deref().unwrap_or("<none>")
    );

    match &resp.body {
        Some(body) => {
            if let Some(user) = body.get("user") {
                println!("  User: {}", serde_json::to_string_pretty(user)?);
            }
            match body.get("jwt").and_then(Value::as_str) {
                Some(jwt) => println!("  JWT: {}…", jwt.chars().take(16).collect::<String>()),
                None => println!("  Body: {}", body),
            }
        }
        None => println!("  Body: <empty or not JSON>"),
    }

    Ok(())
}

pub async fn handle_health_command(config: &SmokeConfig) -> ClientResult<()> {
    println!(
        "Waiting up to {}s for {}...",
        config.health_timeout_seconds, config.base_url
    );

    let runner = SmokeRunner::new(CheckContext::new(config.clone())?);
    runner.wait_until_ready().await?;

    println!("  ✓ Web application is reachable");
    Ok(())
}
