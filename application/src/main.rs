use std::{convert::Infallible, io, sync::OnceLock};

use application::{Args, Config, Listing, Service};
use service::{
    command::{
        ClearSorting, LoadCatalog, LoadMore, ResetFilters, SetSorting,
        UpdateFilters,
    },
    infra::{cache, source},
    query::SortIndicatorOf,
    read::SortField,
    Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let source = source::Any::new(&config.source.url).map_err(|e| {
        log::error!("failed to initialize `Source`: {e}");
    })?;
    let cache = cache::Fs::new(config.cache.dir.clone());

    let service = Service::new((&config).into(), source, cache);

    service.execute(LoadCatalog).await.unwrap_or_else(never);

    if args.reset {
        service.execute(ResetFilters).await.unwrap_or_else(never);
    }
    if let Some(update) = args.filter_update(&service.filters()) {
        service
            .execute(UpdateFilters(update))
            .await
            .unwrap_or_else(never);
    }

    if args.clear_sort {
        service.execute(ClearSorting).await.unwrap_or_else(never);
    }
    for field in args.sort {
        service.execute(SetSorting(field)).await.unwrap_or_else(never);
    }

    for _ in 0..args.more {
        if !service.can_load_more() {
            log::info!("all matching apartments are already shown");
            break;
        }
        service.execute(LoadMore).await.unwrap_or_else(never);
    }

    let mut indicators = Vec::with_capacity(SortField::ALL.len());
    for &field in SortField::ALL {
        let indicator = service
            .execute(SortIndicatorOf(field))
            .await
            .unwrap_or_else(never);
        indicators.push((field, indicator));
    }

    println!(
        "{}",
        Listing {
            displayed: service.displayed(),
            total: service.total_filtered_count(),
            indicators,
        },
    );

    Ok(())
}

/// Unwraps an [`Infallible`] result.
fn never<T>(e: Infallible) -> T {
    match e {}
}
