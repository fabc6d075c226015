//! WebGuard: watches one element of one web page and emails on change.

mod config;
mod logging;
mod scheduler;

use anyhow::Context;
use guard_logging::guard_info;
use webguard_engine::{
    FetchSettings, HttpFetcher, SmtpNotifier, SmtpSettings, SnapshotStore, WatchTarget,
};

use crate::config::Config;
use crate::logging::{initialize, LogDestination};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();
    initialize(LogDestination::Terminal);

    let config = Config::load().context("configuration error")?;

    let target = WatchTarget::new(&config.target_url, &config.target_selector)
        .context("invalid watch target")?;
    let fetcher = HttpFetcher::new(FetchSettings {
        request_timeout: config.fetch_timeout,
        ..FetchSettings::default()
    });
    let store = SnapshotStore::new(&config.data_dir);
    let notifier = SmtpNotifier::new(SmtpSettings::new(
        &config.smtp_host,
        &config.email_user,
        &config.email_pass,
    ))
    .context("invalid mail settings")?;

    guard_info!(
        "WebGuard monitor started: {} every {}s",
        config.target_url,
        config.check_interval.as_secs()
    );

    scheduler::run(&fetcher, &store, &notifier, &target, config.check_interval).await
}
