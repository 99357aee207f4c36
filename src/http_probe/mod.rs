pub mod probe;
pub mod result;

#[cfg(test)]
pub(crate) mod test_server;

pub mod prelude {
    pub use super::probe::probe_url;
    pub use super::result::ProbeResult;
}

use std::fmt::Write;

fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
