use paxy_client::error::ValidationError;
use paxy_client::proxy::{ProxyServer, validate_proxy_url};

#[test]
fn test_accepts_supported_protocols() {
    for url in [
        "http://proxy.example.com:8080",
        "http://proxy.example.com",
        "https://secure-proxy.example.com:443",
        "https://secure-proxy.example.com",
        "socks4://socks.example.com:1080",
        "socks5://socks.example.com:1080",
    ] {
        assert_eq!(
            validate_proxy_url(url, &[], None).expect("url should validate"),
            url
        );
    }
}

#[test]
fn test_trims_surrounding_whitespace() {
    assert_eq!(
        validate_proxy_url("  http://p:8080  ", &[], None).expect("url should validate"),
        "http://p:8080"
    );
}

#[test]
fn test_rejects_empty_urls() {
    assert_eq!(validate_proxy_url("", &[], None), Err(ValidationError::UrlRequired));
    assert_eq!(validate_proxy_url("   ", &[], None), Err(ValidationError::UrlRequired));
}

#[test]
fn test_rejects_unsupported_protocols() {
    assert_eq!(
        validate_proxy_url("ftp://ftp.example.com:21", &[], None),
        Err(ValidationError::UrlInvalidProtocol)
    );
    assert_eq!(
        validate_proxy_url("ws://websocket.example.com:80", &[], None),
        Err(ValidationError::UrlInvalidProtocol)
    );
    // bare socks is normalizable for stored values but rejected at entry
    assert_eq!(
        validate_proxy_url("socks://s.example.com", &[], None),
        Err(ValidationError::UrlInvalidProtocol)
    );
}

#[test]
fn test_rejects_invalid_ports() {
    assert_eq!(
        validate_proxy_url("http://proxy.example.com:0", &[], None),
        Err(ValidationError::UrlInvalidPort)
    );
    // out-of-range and non-numeric ports already fail URL parsing
    assert_eq!(
        validate_proxy_url("http://proxy.example.com:65536", &[], None),
        Err(ValidationError::UrlInvalidFormat)
    );
    assert_eq!(
        validate_proxy_url("http://proxy.example.com:abc", &[], None),
        Err(ValidationError::UrlInvalidFormat)
    );
}

#[test]
fn test_rejects_malformed_urls() {
    assert_eq!(
        validate_proxy_url("not-a-url", &[], None),
        Err(ValidationError::UrlInvalidFormat)
    );
    assert_eq!(
        validate_proxy_url("http:///", &[], None),
        Err(ValidationError::UrlInvalidFormat)
    );
}

#[test]
fn test_rejects_duplicate_urls_case_insensitively() {
    let existing = vec![ProxyServer::new(10, "http://Proxy.Example.com:8080")];
    assert_eq!(
        validate_proxy_url("http://proxy.example.com:8080", &existing, None),
        Err(ValidationError::UrlDuplicate)
    );
}

#[test]
fn test_duplicate_check_skips_the_record_being_edited() {
    let existing = vec![ProxyServer::new(10, "http://proxy.example.com:8080")];
    assert!(validate_proxy_url("http://proxy.example.com:8080", &existing, Some(10)).is_ok());
    assert_eq!(
        validate_proxy_url("http://proxy.example.com:8080", &existing, Some(11)),
        Err(ValidationError::UrlDuplicate)
    );
}
