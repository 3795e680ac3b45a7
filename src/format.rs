use {
    crate::structs::{Outcome, ResolutionResult},
    std::net::IpAddr,
};

/// Renders one outcome as `<original> : [v4,...] [v6,...] [label]`, leaving out empty
/// groups. An input that resolved to nothing renders as `<original> : `.
pub fn format_outcome(outcome: &Outcome, label: &str) -> String {
    match outcome {
        Outcome::Resolved(result) => format_result(result, label),
        Outcome::InvalidUrl(original) => format!("Invalid URL: {original}"),
    }
}

pub fn format_result(result: &ResolutionResult, label: &str) -> String {
    let mut groups = Vec::with_capacity(3);

    if !result.ipv4_addresses.is_empty() {
        groups.push(format!("[{}]", join_ips(&result.ipv4_addresses)));
    }
    if !result.ipv6_addresses.is_empty() {
        groups.push(format!("[{}]", join_ips(&result.ipv6_addresses)));
    }
    if result.in_known_range {
        groups.push(format!("[{label}]"));
    }

    format!("{} : {}", result.original, groups.join(" "))
}

fn join_ips(ips: &[IpAddr]) -> String {
    ips.iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(original: &str, v4: &[&str], v6: &[&str], in_range: bool) -> ResolutionResult {
        ResolutionResult {
            original: original.to_owned(),
            ipv4_addresses: v4.iter().map(|s| s.parse().unwrap()).collect(),
            ipv6_addresses: v6.iter().map(|s| s.parse().unwrap()).collect(),
            in_known_range: in_range,
        }
    }

    #[test]
    fn all_groups() {
        let line = format_result(
            &result(
                "cloudflare.com",
                &["104.16.132.229", "104.16.133.229"],
                &["2606:4700::6810:84e5"],
                true,
            ),
            "cloudflare",
        );
        assert_eq!(
            line,
            "cloudflare.com : [104.16.132.229,104.16.133.229] [2606:4700::6810:84e5] [cloudflare]"
        );
    }

    #[test]
    fn ipv4_only() {
        let line = format_result(&result("8.8.8.8", &["8.8.8.8"], &[], false), "cloudflare");
        assert_eq!(line, "8.8.8.8 : [8.8.8.8]");
    }

    #[test]
    fn ipv6_only() {
        let line = format_result(&result("v6.test", &[], &["::1"], false), "cloudflare");
        assert_eq!(line, "v6.test : [::1]");
    }

    #[test]
    fn nothing_resolved() {
        let line = format_result(&result("nosuchhost.invalid", &[], &[], false), "cf");
        assert_eq!(line, "nosuchhost.invalid : ");
    }

    #[test]
    fn custom_label_and_invalid_url() {
        let line = format_result(&result("a.test", &["104.16.5.5"], &[], true), "edge");
        assert_eq!(line, "a.test : [104.16.5.5] [edge]");

        let invalid = Outcome::InvalidUrl("not a valid url://::".to_owned());
        assert_eq!(
            format_outcome(&invalid, "cloudflare"),
            "Invalid URL: not a valid url://::"
        );
    }
}
