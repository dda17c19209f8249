//! HTTP access to the results store.
//!
//! [`HttpClient`] is the seam requests go through; [`BasicClient`] is the
//! plain reqwest implementation and [`auth::ApiKey`] layers headers on top.
//! [`supabase`] reads result rows from the Supabase REST API.

mod basic;
mod client;
pub mod auth;
pub mod supabase;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, bail};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Issues a GET through `client` and decodes the JSON body.
/// Non-2xx responses fail with the status and body.
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(client: &C, url: Url) -> Result<T> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.clone());

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("GET {url} returned status {status}: {body}");
    }

    Ok(resp.json().await?)
}
