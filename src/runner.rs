use std::ffi::OsString;
use std::process::ExitCode;

use thiserror::Error;

use crate::config::app_config::setup_http_client;
use crate::config::probe_config::ProbeConfig;
use crate::http_probe::prelude::*;

/// The binary result of a probe, as seen by the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Healthy,
    Unhealthy,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Healthy => 0,
            Outcome::Unhealthy => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Why a probe ended unhealthy. Every variant maps to the same exit code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("missing target URL, usage: healthcheck <url>")]
    MissingUrl,
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{url} returned status {status} (accepted: {accepted:?})")]
    UnexpectedStatus {
        url: String,
        status: u16,
        accepted: Vec<u16>,
    },
}

/// Judges a probe result without touching the network.
/// Returns the accepted status code, or the failure that makes the target unhealthy.
pub fn decide(result: &ProbeResult, accepted: &[u16]) -> Result<u16, ProbeFailure> {
    let Some(status) = result.http_status else {
        return Err(ProbeFailure::Transport {
            url: result.url.clone(),
            reason: result
                .error
                .clone()
                .unwrap_or_else(|| "no response".to_string()),
        });
    };

    if result.is_accepted(accepted) {
        Ok(status)
    } else {
        Err(ProbeFailure::UnexpectedStatus {
            url: result.url.clone(),
            status,
            accepted: accepted.to_vec(),
        })
    }
}

/// Runs one probe against the first argument after the program name.
/// Further arguments are ignored.
pub async fn run<I>(args: I, config: &ProbeConfig) -> Outcome
where
    I: IntoIterator<Item = OsString>,
{
    match probe(args, config).await {
        Ok(status) => {
            log::info!("Target is healthy, status {status}");
            Outcome::Healthy
        }
        Err(failure) => {
            log::error!("{failure}");
            Outcome::Unhealthy
        }
    }
}

async fn probe<I>(args: I, config: &ProbeConfig) -> Result<u16, ProbeFailure>
where
    I: IntoIterator<Item = OsString>,
{
    let url = args
        .into_iter()
        .nth(1)
        .ok_or(ProbeFailure::MissingUrl)?
        .into_string()
        .map_err(|raw| ProbeFailure::Transport {
            url: raw.to_string_lossy().into_owned(),
            reason: "URL is not valid UTF-8".to_string(),
        })?;

    let client = setup_http_client(config).map_err(|e| ProbeFailure::Transport {
        url: url.clone(),
        reason: e.to_string(),
    })?;

    let result = probe_url(&client, &url).await;
    log::debug!(
        "Probed {}: status {:?}, version {}, elapsed {:.2}ms",
        result.url,
        result.http_status,
        result.http_version.as_deref().unwrap_or("N/A"),
        result.http_time * 1000.0
    );

    decide(&result, &config.accepted_status_codes)
}
