use {
    crate::structs::InputKind,
    std::net::IpAddr,
    url::{Host, Url},
};

/// Classifies a trimmed, non-empty input line.
///
/// Anything starting with a `<scheme>://` prefix is treated as a URL; if it doesn't parse, or
/// parses without a host, the line is reported as an invalid URL and never resolved.
pub fn classify(input: &str) -> InputKind {
    if let Ok(addr) = input.parse::<IpAddr>() {
        return InputKind::Literal(addr);
    }

    if has_scheme_prefix(input) {
        return match Url::parse(input).ok().and_then(|url| url_host(&url)) {
            Some(kind) => kind,
            None => InputKind::InvalidUrl,
        };
    }

    InputKind::Hostname(input.to_owned())
}

/// `://` only marks a scheme when nothing path-like comes before it.
fn has_scheme_prefix(input: &str) -> bool {
    input
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.contains(['/', '?', '#']))
}

fn url_host(url: &Url) -> Option<InputKind> {
    match url.host()? {
        Host::Domain(domain) if !domain.is_empty() => Some(InputKind::Url {
            host: domain.to_owned(),
        }),
        Host::Domain(_) => None,
        Host::Ipv4(ip) => Some(InputKind::UrlAddress(IpAddr::V4(ip))),
        Host::Ipv6(ip) => Some(InputKind::UrlAddress(IpAddr::V6(ip))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_addresses() {
        assert_eq!(
            classify("8.8.8.8"),
            InputKind::Literal("8.8.8.8".parse().unwrap())
        );
        assert_eq!(
            classify("2606:4700::6810:84e5"),
            InputKind::Literal("2606:4700::6810:84e5".parse().unwrap())
        );
    }

    #[test]
    fn url_host_is_extracted() {
        assert_eq!(
            classify("https://example.com/path?q=1"),
            InputKind::Url {
                host: "example.com".to_owned()
            }
        );
        assert_eq!(
            classify("http://user:pw@sub.example.org:8080/"),
            InputKind::Url {
                host: "sub.example.org".to_owned()
            }
        );
    }

    #[test]
    fn url_with_address_host() {
        assert_eq!(
            classify("http://[::1]:8080/"),
            InputKind::UrlAddress("::1".parse().unwrap())
        );
        assert_eq!(
            classify("https://104.16.5.5/"),
            InputKind::UrlAddress("104.16.5.5".parse().unwrap())
        );
    }

    #[test]
    fn malformed_urls_are_invalid() {
        assert_eq!(classify("not a valid url://::"), InputKind::InvalidUrl);
        assert_eq!(classify("https://"), InputKind::InvalidUrl);
        assert_eq!(classify("http://exa mple.com/"), InputKind::InvalidUrl);
    }

    #[test]
    fn everything_else_is_a_hostname() {
        assert_eq!(
            classify("example.com"),
            InputKind::Hostname("example.com".to_owned())
        );
        assert_eq!(
            classify("not even a host"),
            InputKind::Hostname("not even a host".to_owned())
        );
        assert_eq!(
            classify("a.test/?next=http://b"),
            InputKind::Hostname("a.test/?next=http://b".to_owned())
        );
        assert_eq!(
            classify("a.test#https://b"),
            InputKind::Hostname("a.test#https://b".to_owned())
        );
        assert_eq!(
            classify("999.1.1.1"),
            InputKind::Hostname("999.1.1.1".to_owned())
        );
    }
}
