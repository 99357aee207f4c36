use std::time::Instant;

use reqwest::Client;

use super::prelude::*;
use super::report;

fn format_version(version: reqwest::Version) -> String {
    match version {
        reqwest::Version::HTTP_09 => "HTTP/0.9".to_string(),
        reqwest::Version::HTTP_10 => "HTTP/1.0".to_string(),
        reqwest::Version::HTTP_11 => "HTTP/1.1".to_string(),
        reqwest::Version::HTTP_2 => "HTTP/2.0".to_string(),
        reqwest::Version::HTTP_3 => "HTTP/3.0".to_string(),
        _ => "UNKNOWN".to_string(),
    }
}

/// Sends one GET to `url` and records what came back.
/// Transport failures, including a URL that doesn't parse and an exhausted
/// redirect limit, end up in `ProbeResult::error` rather than as an `Err`.
pub async fn probe_url(client: &Client, url: &str) -> ProbeResult {
    let start = Instant::now();
    let status_result = client.get(url).send().await;
    let http_time = start.elapsed().as_secs_f64();

    match status_result {
        Ok(resp) => ProbeResult {
            url: url.to_string(),
            http_status: Some(resp.status().as_u16()),
            http_version: Some(format_version(resp.version())),
            http_time,
            error: None,
        },
        Err(e) => ProbeResult {
            url: url.to_string(),
            http_status: None,
            http_version: None,
            http_time,
            error: Some(report(&e)),
        },
    }
}
