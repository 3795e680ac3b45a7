// Hostname -> addresses memo shared by every worker for the lifetime of a run.
//
// Entries are written once and never evicted or replaced. Two workers missing the same
// hostname at the same time may both run the lookup; whichever inserts first wins.

use {
    std::{
        collections::HashMap,
        net::IpAddr,
        sync::{
            atomic::{AtomicU64, Ordering},
            Arc,
        },
    },
    tokio::sync::RwLock,
};

pub type Addresses = Arc<[IpAddr]>;

#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<String, Addresses>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, hostname: &str) -> Option<Addresses> {
        let found = self.entries.read().await.get(hostname).cloned();

        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);

        found
    }

    /// Stores `addresses` unless another worker got there first, and returns the entry
    /// that ends up in the cache.
    pub async fn insert(&self, hostname: String, addresses: Vec<IpAddr>) -> Addresses {
        self.entries
            .write()
            .await
            .entry(hostname)
            .or_insert_with(|| addresses.into())
            .clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len().await,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
