use {
    async_trait::async_trait,
    hickory_resolver::{
        config::{LookupIpStrategy, NameServerConfigGroup, ResolverConfig, ResolverOpts},
        name_server::TokioConnectionProvider,
        TokioResolver,
    },
    rand::{rng, seq::IndexedRandom},
    std::{net::IpAddr, time::Duration},
    tracing::debug,
};

/// Name-to-address lookup used by the pipeline.
///
/// Failures are not surfaced: a name that cannot be resolved and a name without
/// addresses both yield an empty list.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn resolve(&self, hostname: &str) -> Vec<IpAddr>;
}

/// Delegates to the host system resolver (getaddrinfo), so `/etc/hosts` and the local
/// resolver configuration apply.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLookup;

#[async_trait]
impl Lookup for SystemLookup {
    async fn resolve(&self, hostname: &str) -> Vec<IpAddr> {
        match tokio::net::lookup_host((hostname, 0)).await {
            Ok(addrs) => dedup(addrs.map(|addr| addr.ip())),
            Err(e) => {
                debug!("Lookup for {hostname} failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Queries user-provided nameservers, picking one at random per lookup.
#[derive(Clone)]
pub struct NameserverLookup {
    resolvers: Vec<TokioResolver>,
}

impl NameserverLookup {
    pub fn new(nameservers: &[IpAddr], options: &ResolverOpts) -> Self {
        let resolvers = nameservers
            .iter()
            .map(|ip| {
                let config = ResolverConfig::from_parts(
                    None,
                    vec![],
                    NameServerConfigGroup::from_ips_clear(&[*ip], 53, true),
                );
                TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                    .with_options(options.clone())
                    .build()
            })
            .collect();

        Self { resolvers }
    }

    fn pick(&self) -> Option<&TokioResolver> {
        self.resolvers.choose(&mut rng())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[async_trait]
impl Lookup for NameserverLookup {
    async fn resolve(&self, hostname: &str) -> Vec<IpAddr> {
        let Some(resolver) = self.pick() else {
            return Vec::new();
        };

        match resolver.lookup_ip(hostname).await {
            Ok(lookup) => dedup(lookup.iter()),
            Err(e) => {
                debug!("Lookup for {hostname} failed: {e}");
                Vec::new()
            }
        }
    }
}

pub fn return_resolver_opts(timeout: u64, retries: usize) -> ResolverOpts {
    let mut options = ResolverOpts::default();
    options.timeout = Duration::from_secs(timeout);
    options.attempts = retries;
    options.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    options.num_concurrent_reqs = 1;
    options
}

/// Splits addresses by family, keeping the order they came in. IPv4-mapped IPv6
/// addresses count as IPv4.
pub fn split(addresses: &[IpAddr]) -> (Vec<IpAddr>, Vec<IpAddr>) {
    addresses
        .iter()
        .map(IpAddr::to_canonical)
        .partition(IpAddr::is_ipv4)
}

fn dedup(addresses: impl Iterator<Item = IpAddr>) -> Vec<IpAddr> {
    let mut unique = Vec::new();
    for ip in addresses {
        if !unique.contains(&ip) {
            unique.push(ip);
        }
    }
    unique
}
