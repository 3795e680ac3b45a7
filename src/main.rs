use {
    anyhow::Context,
    cfresolver::{
        args::Args,
        dnslib::return_resolver_opts,
        utils::{open_input, return_nameservers, submit_lines},
        AddressRangeSet, Lookup, NameserverLookup, Pipeline, ResolutionCache, SystemLookup,
        WorkerPool,
    },
    clap::Parser,
    std::sync::Arc,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries result lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let ranges = AddressRangeSet::load(&args.ranges)
        .await
        .context("Cannot start without the provider ranges")?;
    info!("Loaded {} ranges from {}", ranges.len(), args.ranges.display());

    let lookup: Arc<dyn Lookup> = match &args.resolvers {
        Some(file) => {
            let nameservers = return_nameservers(file).await?;
            let options = return_resolver_opts(args.timeout, args.retries);
            let lookup = NameserverLookup::new(&nameservers, &options);
            info!("Using {} nameservers from {}", lookup.len(), file.display());
            Arc::new(lookup)
        }
        None => Arc::new(SystemLookup),
    };

    let input = open_input(&args.input).await?;

    let cache = Arc::new(ResolutionCache::new());
    let pipeline = Pipeline::new(Arc::clone(&cache), lookup, Arc::new(ranges))
        .with_label(args.label.as_str());

    let pool = WorkerPool::spawn(args.pool_config(), pipeline, |line| println!("{line}"));

    // Drain whatever was queued even if reading stops halfway.
    let fed = submit_lines(input, &args.input, &pool).await;
    let emitted = pool.finish().await?;
    let submitted = fed?;

    let stats = cache.stats().await;
    info!(
        "Processed {submitted} inputs, emitted {emitted} lines. Cache: {} hosts, {} hits, {} misses",
        stats.entries, stats.hits, stats.misses
    );

    Ok(())
}
