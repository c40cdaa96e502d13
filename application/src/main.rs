use std::{io, sync::OnceLock};

use application::{render, replay, Args, Config, Service, Snapshot};
use service::{infra::Memory, query::report::Valuation, Query as _};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    // Report goes to `stdout`, so logs are written to `stderr` only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, input } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { report, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let snapshot = Snapshot::load(&input).await.map_err(|e| {
        log::error!("failed to load `{input}`: {e}");
    })?;

    let service = Service::new(Memory::new());

    let case_id = replay(&service, snapshot).await.map_err(|e| {
        log::error!("failed to replay `{input}`: {e}");
    })?;

    let output = service
        .execute(Valuation { case_id })
        .await
        .map_err(|e| {
            log::error!("failed to valuate `Case(id: {case_id})`: {e}");
        })?
        .ok_or_else(|| {
            log::error!("`Case(id: {case_id})` disappeared after replay");
        })?;
    log::info!(
        "`Case(id: {case_id})` valuated over {} auction rounds",
        output.auction_rounds.len(),
    );

    let json = render(&output, report.pretty).map_err(|e| {
        log::error!("failed to render report: {e}");
    })?;
    println!("{json}");

    Ok(())
}
