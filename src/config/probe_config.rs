use std::time::Duration;

/// The redirect limit reqwest ships with, pinned here so an upgrade can't move it.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Transport and acceptance settings for a single probe.
/// There is no file or environment source: every value is fixed in code so the
/// probe behaves the same regardless of what the HTTP client defaults to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// The HTTP status codes that count as healthy.
    /// Only 200 is accepted.
    pub accepted_status_codes: Vec<u16>,

    /// How many redirects are followed before the request fails.
    /// The status of the final response is the one that gets judged.
    pub max_redirects: usize,

    /// Total request deadline. `None` means the probe waits until the
    /// supervisor kills it.
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            accepted_status_codes: default_status_codes(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: None,
        }
    }
}

fn default_status_codes() -> Vec<u16> {
    vec![200]
}
