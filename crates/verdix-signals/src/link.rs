//! Link hygiene assessment

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::{Host, Url};
use verdix_domain::LinkReport;

use crate::LinkError;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid regex"));

/// Points added when the scheme is not https
const NO_HTTPS_PENALTY: u32 = 30;
/// Points added when the host is an IPv4 literal
const IP_HOST_PENALTY: u32 = 30;

const TRIM_CHARS: &[char] = &['.', ',', '!', '?', '(', ')'];

/// Find the first URL-like token (`http://`, `https://` or `www.`) in a text
pub fn find_first_url(text: &str) -> Option<&str> {
    URL_RE.find(text).map(|m| m.as_str())
}

/// Score a single URL-like string
///
/// Strips surrounding punctuation, defaults the scheme to `http` unless the
/// string starts with one, and adds penalties for a non-https scheme and for
/// an IPv4 literal host. A URL embedded later in the string (a redirect
/// parameter, say) does not count as a scheme.
pub fn assess_link(raw: &str) -> Result<LinkReport, LinkError> {
    let trimmed = raw.trim_matches(TRIM_CHARS);
    let candidate = if SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)?;
    let host = parsed
        .host()
        .ok_or_else(|| LinkError::MissingHost(candidate.clone()))?;

    let mut score = 0;
    let mut reasons = Vec::new();

    if parsed.scheme() != "https" {
        score += NO_HTTPS_PENALTY;
        reasons.push("No HTTPS".to_string());
    }

    let domain = match host {
        Host::Ipv4(addr) => {
            score += IP_HOST_PENALTY;
            reasons.push("IP-based URL".to_string());
            addr.to_string()
        }
        Host::Ipv6(addr) => addr.to_string(),
        Host::Domain(name) => registrable_domain(name),
    };

    debug!(domain = %domain, score, "assessed link");

    Ok(LinkReport::new(domain, score, reasons))
}

/// Registrable domain per the public suffix list, falling back to the host
fn registrable_domain(host: &str) -> String {
    let host = host.trim_end_matches('.');
    psl::domain_str(host).unwrap_or(host).to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use verdix_domain::LinkVerdict;

    fn host() -> impl Strategy<Value = String> {
        prop_oneof![
            (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
                .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d)),
            "[a-z]{1,12}\\.(com|org|co\\.uk)",
        ]
    }

    proptest! {
        /// Property: the fraud score only takes the values 0, 30 and 60
        #[test]
        fn test_fraud_score_set(
            scheme in prop_oneof![Just("http://"), Just("https://"), Just("")],
            host in host(),
            path in "(/[a-z]{0,8}){0,3}",
        ) {
            let report = assess_link(&format!("{}{}{}", scheme, host, path)).unwrap();
            prop_assert!([0, 30, 60].contains(&report.fraud_score));
            prop_assert_eq!(report.verdict, LinkVerdict::from_score(report.fraud_score));
        }
    }
}
