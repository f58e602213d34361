//! Hostname handling: picks the effective host for a request and pulls the
//! subdomain label out of it.

/// Label that is treated as the main site, same as no subdomain at all.
pub const MAIN_SITE_LABEL: &str = "www";

/// Pick the host to resolve, preferring a non-empty forwarded host.
pub fn resolve_host<'a>(forwarded: Option<&'a str>, host: Option<&'a str>) -> &'a str {
    forwarded
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .or_else(|| host.map(str::trim))
        .unwrap_or_default()
}

/// Return the subdomain label of `host`, or an empty string when the host
/// has fewer than three labels.
///
/// Any `:port` suffix is ignored, so `foo.example.com:8080` yields `foo`.
pub fn extract_subdomain(host: &str) -> &str {
    let host = strip_port(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 3 {
        labels[0]
    } else {
        ""
    }
}

/// Whether the label should get the welcome page instead of a recipe.
pub fn is_main_site(label: &str) -> bool {
    label.is_empty() || label == MAIN_SITE_LABEL
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
