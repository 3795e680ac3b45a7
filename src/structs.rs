use std::net::IpAddr;

/// What a single input line turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// The whole line is an IPv4 or IPv6 address.
    Literal(IpAddr),
    /// A URL whose host is a name that still has to be resolved.
    Url { host: String },
    /// A URL whose host is already an address, e.g. `http://[::1]:8080/`.
    UrlAddress(IpAddr),
    /// Anything else is handed to the resolver as-is.
    Hostname(String),
    /// Looked like a URL but its host could not be parsed.
    InvalidUrl,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    pub original: String,
    pub ipv4_addresses: Vec<IpAddr>,
    pub ipv6_addresses: Vec<IpAddr>,
    pub in_known_range: bool,
}

/// The per-input outcome handed to the formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Resolved(ResolutionResult),
    InvalidUrl(String),
}
