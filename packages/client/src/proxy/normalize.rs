//! Proxy URL to PAC token normalization
//!
//! Total conversion from raw user input to PAC proxy tokens: a value that
//! does not parse as a URL degrades to a literal `PROXY <raw>` token instead
//! of failing the whole generation. The broken entry then shows up as a
//! non-functional proxy rather than blocking the config.

use crate::Url;

use super::types::ProxyServer;

/// PAC keyword for a URL scheme. Plain `socks` is treated as SOCKS v4 by
/// Chromium, hence the shared `SOCKS` keyword; unknown schemes fall back to
/// an HTTP proxy.
fn scheme_keyword(scheme: &str) -> &'static str {
    match scheme {
        "http" => "PROXY",
        "https" => "HTTPS",
        "socks" | "socks4" => "SOCKS",
        "socks5" => "SOCKS5",
        _ => "PROXY",
    }
}

fn scheme_default_port(scheme: &str) -> u16 {
    match scheme {
        "https" => 443,
        "socks" | "socks4" | "socks5" => 1080,
        _ => 80,
    }
}

/// Convert a raw proxy URL into a PAC proxy token, e.g.
/// `socks5://h:1080` into `SOCKS5 h:1080`.
///
/// Never fails: explicit ports are kept, missing ports take the scheme
/// default (http 80, https 443, socks family 1080).
#[must_use]
pub fn normalize(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        tracing::warn!(
            target: "paxy::proxy",
            url = %raw,
            "proxy URL did not parse, keeping literal HTTP proxy token"
        );
        return format!("PROXY {raw}");
    };

    let scheme = url.scheme();
    let keyword = scheme_keyword(scheme);
    let port = url.port().unwrap_or_else(|| scheme_default_port(scheme));
    let host = url.host_str().unwrap_or_default();

    format!("{keyword} {host}:{port}")
}

/// Join normalized proxy tokens in server order with the `"; "` separator
/// used by PAC return values ("try these in order, else DIRECT").
#[must_use]
pub fn join_proxy_list(servers: &[ProxyServer]) -> String {
    servers
        .iter()
        .map(|server| normalize(&server.url))
        .collect::<Vec<_>>()
        .join("; ")
}
