use std::process::ExitCode;

use config::probe_config::ProbeConfig;

pub mod config;
pub mod http_probe;
pub mod runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    runner::run(std::env::args_os(), &ProbeConfig::default())
        .await
        .into()
}
