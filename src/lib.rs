pub mod args;
pub mod cache;
pub mod classifier;
pub mod dnslib;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod pool;
pub mod ranges;
pub mod structs;
pub mod utils;

pub use {
    cache::ResolutionCache,
    dnslib::{Lookup, NameserverLookup, SystemLookup},
    error::{Error, Result},
    pipeline::Pipeline,
    pool::{PoolConfig, WorkerPool},
    ranges::AddressRangeSet,
};
