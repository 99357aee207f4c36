use reqwest::{Client, redirect};

use super::probe_config::ProbeConfig;

/// Setup the HTTP client used for the probe request
/// This function creates a `reqwest::Client` with every transport setting taken from `config`,
/// so nothing is left to the library defaults: redirect limit, timeout and TLS backend.
/// # Arguments
///     * `config` - The pinned probe settings.
/// # Returns
///     A `Result` containing the `Client`, or the `reqwest::Error` if the TLS backend fails to initialise.
pub fn setup_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .use_rustls_tls()
        .redirect(redirect::Policy::limited(config.max_redirects));

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
