use {
    crate::{
        pipeline::DEFAULT_LABEL,
        pool::{PoolConfig, DEFAULT_QUEUE_SIZE, DEFAULT_WORKERS},
    },
    clap::Parser,
    std::path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(help = "File with one IP address, URL or hostname per line.")]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        default_value = "ip.conf",
        help = "File with the provider CIDR ranges, one per line. Default: ip.conf"
    )]
    pub ranges: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORKERS,
        help = "Number of concurrent workers. Default: 500"
    )]
    pub threads: usize,

    #[arg(
        long,
        default_value_t = DEFAULT_QUEUE_SIZE,
        help = "Capacity of the work and result queues. Default: 1000"
    )]
    pub queue_size: usize,

    #[arg(
        short,
        long,
        default_value = DEFAULT_LABEL,
        help = "Tag appended when the first IPv4 address is inside a loaded range."
    )]
    pub label: String,

    #[arg(
        long,
        help = "File with DNS ips. When omitted the system resolver is used."
    )]
    pub resolvers: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 3,
        help = "Timeout in seconds when querying --resolvers. Default: 3"
    )]
    pub timeout: u64,

    #[arg(
        long,
        default_value_t = 1,
        help = "Query attempts per lookup when using --resolvers. Default: 1"
    )]
    pub retries: usize,
}

impl Args {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            workers: self.threads,
            queue_size: self.queue_size,
        }
    }
}
