use {
    crate::{
        cache::ResolutionCache,
        classifier::classify,
        dnslib::{split, Lookup},
        format::format_outcome,
        ranges::AddressRangeSet,
        structs::{InputKind, Outcome, ResolutionResult},
    },
    std::{net::IpAddr, sync::Arc},
};

pub const DEFAULT_LABEL: &str = "cloudflare";

/// Per-input work: classify, resolve through the shared cache, check the provider ranges
/// and format. Cloned into every worker; all shared state sits behind `Arc`s.
#[derive(Clone)]
pub struct Pipeline {
    cache: Arc<ResolutionCache>,
    lookup: Arc<dyn Lookup>,
    ranges: Arc<AddressRangeSet>,
    label: Arc<str>,
}

impl Pipeline {
    pub fn new(
        cache: Arc<ResolutionCache>,
        lookup: Arc<dyn Lookup>,
        ranges: Arc<AddressRangeSet>,
    ) -> Self {
        Self {
            cache,
            lookup,
            ranges,
            label: Arc::from(DEFAULT_LABEL),
        }
    }

    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub async fn process(&self, input: &str) -> String {
        format_outcome(&self.outcome(input).await, &self.label)
    }

    pub async fn outcome(&self, input: &str) -> Outcome {
        let addresses: Vec<IpAddr> = match classify(input) {
            InputKind::Literal(ip) | InputKind::UrlAddress(ip) => vec![ip],
            InputKind::Url { host } => self.resolve_cached(host).await,
            InputKind::Hostname(host) => self.resolve_cached(host).await,
            InputKind::InvalidUrl => return Outcome::InvalidUrl(input.to_owned()),
        };

        let (ipv4_addresses, ipv6_addresses) = split(&addresses);
        // Multi-address hosts are judged on their first IPv4 address only.
        let in_known_range = ipv4_addresses
            .first()
            .is_some_and(|ip| self.ranges.contains(*ip));

        Outcome::Resolved(ResolutionResult {
            original: input.to_owned(),
            ipv4_addresses,
            ipv6_addresses,
            in_known_range,
        })
    }

    async fn resolve_cached(&self, hostname: String) -> Vec<IpAddr> {
        if let Some(cached) = self.cache.get(&hostname).await {
            return cached.to_vec();
        }

        let resolved = self.lookup.resolve(&hostname).await;
        self.cache.insert(hostname, resolved).await.to_vec()
    }
}
