use {
    crate::error::{Error, Result},
    ipnetwork::{IpNetwork, Ipv4Network},
    std::{net::IpAddr, path::Path},
    tracing::warn,
};

/// Provider-published IPv4 blocks, loaded once and shared read-only by every worker.
#[derive(Clone, Debug, Default)]
pub struct AddressRangeSet {
    ranges: Vec<Ipv4Network>,
}

impl AddressRangeSet {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| Error::RangesFile {
                    path: path.to_path_buf(),
                    source,
                })?;

        Ok(Self::from_lines(contents.lines()))
    }

    /// Parses one CIDR block per line. Blank lines and `#` comments are ignored; malformed
    /// lines, bare addresses without a prefix length and IPv6 blocks are skipped with a
    /// warning.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ranges = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if !line.contains('/') {
                warn!("Skipping {line}, expected a CIDR block with a prefix length");
                continue;
            }

            match line.parse::<IpNetwork>() {
                Ok(IpNetwork::V4(network)) => ranges.push(network),
                Ok(IpNetwork::V6(network)) => {
                    warn!("Skipping IPv6 range {network}, only IPv4 ranges are checked")
                }
                Err(e) => warn!("Could not parse CIDR {line}: {e}"),
            }
        }

        Self { ranges }
    }

    pub fn contains(&self, addr: IpAddr) -> bool {
        match addr {
            IpAddr::V4(ip) => self.ranges.iter().any(|range| range.contains(ip)),
            IpAddr::V6(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
