/// The outcome of one probe request.
/// `http_status` is `None` when the exchange failed at the transport level,
/// in which case `error` carries the rendered cause chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub url: String,
    pub http_status: Option<u16>,
    pub http_version: Option<String>,
    pub http_time: f64,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn is_accepted(&self, accepted_status_codes: &[u16]) -> bool {
        self.http_status
            .map(|code| accepted_status_codes.contains(&code))
            .unwrap_or(false)
    }
}
