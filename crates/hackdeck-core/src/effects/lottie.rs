//! Best-effort decorative animation fetch.
//!
//! The hero panel shows a small animation pulled from a CDN. The payload
//! is pure decoration, so the fetch is a single try: any failure - network,
//! bad status, malformed body - yields the static fallback visual with no
//! retry and nothing surfaced to the user.

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// What the hero panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeroVisual {
    /// The fetched animation payload, handed verbatim to the player.
    Animation { payload: serde_json::Value },
    /// Static placeholder.
    Fallback,
}

async fn try_fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<serde_json::Value, AssetError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AssetError::Request(e.to_string()))?;
    if !response.status().is_success() {
        return Err(AssetError::Status(response.status().as_u16()));
    }
    response
        .json()
        .await
        .map_err(|e| AssetError::Malformed(e.to_string()))
}

/// Fetch the animation payload, falling back to the static visual on any
/// failure.
pub async fn fetch_animation(client: &reqwest::Client, url: &str) -> HeroVisual {
    match try_fetch(client, url).await {
        Ok(payload) => HeroVisual::Animation { payload },
        Err(_) => HeroVisual::Fallback,
    }
}

/// Blocking wrapper for synchronous shells already inside a tokio runtime.
pub fn fetch_animation_blocking(url: &str) -> HeroVisual {
    let client = reqwest::Client::new();
    tokio::runtime::Handle::current().block_on(fetch_animation(&client, url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_fetch_yields_animation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/anim.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"v":"5.7.4","fr":30}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/anim.json", server.url());
        match fetch_animation(&client, &url).await {
            HeroVisual::Animation { payload } => assert_eq!(payload["fr"], 30),
            HeroVisual::Fallback => panic!("expected animation"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/anim.json")
            .with_status(500)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/anim.json", server.url());
        assert_eq!(fetch_animation(&client, &url).await, HeroVisual::Fallback);
    }

    #[tokio::test]
    async fn malformed_payload_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/anim.json")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/anim.json", server.url());
        assert_eq!(fetch_animation(&client, &url).await, HeroVisual::Fallback);
    }

    #[tokio::test]
    async fn unreachable_host_falls_back() {
        let client = reqwest::Client::new();
        // Port 9 (discard) refuses connections on any sane host.
        let visual = fetch_animation(&client, "http://127.0.0.1:9/anim.json").await;
        assert_eq!(visual, HeroVisual::Fallback);
    }
}
