use paxy_client::exceptions::{DomainExceptions, ExceptionAction};
use paxy_client::pac::{DIRECT, NeverEvaluator, PolicyConfig, RoutePolicy, ScriptEvalError};
use paxy_client::proxy::ProxyServer;
use paxy_client::scripts::{PacScriptRecord, ScriptSource};

fn script(id: i64, name: &str, enabled: bool) -> PacScriptRecord {
    let mut record = PacScriptRecord::new(
        name,
        "function FindProxyForURL(url, host) { return \"DIRECT\"; }",
        enabled,
        ScriptSource::Plain,
    );
    record.id = id;
    record
}

fn config(
    proxies: Vec<ProxyServer>,
    exceptions: DomainExceptions,
    scripts: Vec<PacScriptRecord>,
    active: bool,
    override_scripts: bool,
) -> PolicyConfig {
    PolicyConfig {
        proxies,
        exceptions,
        scripts,
        user_proxies_enabled: active,
        override_pac_scripts: override_scripts,
    }
}

/// Evaluator returning a fixed directive for every script.
fn fixed(result: &'static str) -> impl Fn(usize, &PacScriptRecord, &str, &str) -> Result<String, ScriptEvalError>
{
    move |_, _, _, _| Ok(result.to_owned())
}

#[test]
fn test_end_to_end_exception_scenario() {
    let config = config(
        vec![ProxyServer::new(1, "http://p:8080")],
        DomainExceptions::from_iter([
            ("*.ok.com", ExceptionAction::Proxy),
            ("bad.com", ExceptionAction::Direct),
        ]),
        vec![],
        true,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    assert_eq!(
        policy.decide("https://ok.com", "ok.com", &NeverEvaluator),
        "PROXY p:8080; DIRECT"
    );
    assert_eq!(
        policy.decide("https://bad.com", "bad.com", &NeverEvaluator),
        "DIRECT"
    );
    assert_eq!(
        policy.decide("https://other.com", "other.com", &NeverEvaluator),
        "DIRECT"
    );
}

#[test]
fn test_exceptions_are_skipped_entirely_without_user_proxies() {
    // a "no" exception must not force DIRECT when there is no proxy to
    // exempt from; the host falls through to script evaluation
    let config = config(
        vec![],
        DomainExceptions::from_iter([("x.com", ExceptionAction::Direct)]),
        vec![script(1, "route-all", true)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    assert_eq!(
        policy.decide("https://x.com", "x.com", &fixed("PROXY s:1")),
        "PROXY s:1"
    );
}

#[test]
fn test_user_proxies_override_script_results() {
    let config = config(
        vec![ProxyServer::new(1, "http://p:8080")],
        DomainExceptions::new(),
        vec![script(1, "route-all", true)],
        true,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    assert_eq!(
        policy.decide("https://x.com", "x.com", &fixed("PROXY s:1")),
        "PROXY p:8080; DIRECT"
    );
}

#[test]
fn test_script_result_passes_through_without_override() {
    let config = config(
        vec![ProxyServer::new(1, "http://p:8080")],
        DomainExceptions::new(),
        vec![script(1, "route-all", true)],
        true,
        false,
    );
    let policy = RoutePolicy::from_config(&config);

    assert_eq!(
        policy.decide("https://x.com", "x.com", &fixed("PROXY s:1")),
        "PROXY s:1"
    );
}

#[test]
fn test_direct_script_results_fall_through() {
    let config = config(
        vec![],
        DomainExceptions::new(),
        vec![script(1, "first", true), script(2, "second", true)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    // first script says DIRECT, second decides
    let evaluator = |index: usize,
                     _: &PacScriptRecord,
                     _: &str,
                     _: &str|
     -> Result<String, ScriptEvalError> {
        Ok(if index == 0 {
            DIRECT.to_owned()
        } else {
            "SOCKS5 b:1080".to_owned()
        })
    };
    assert_eq!(
        policy.decide("https://x.com", "x.com", &evaluator),
        "SOCKS5 b:1080"
    );
}

#[test]
fn test_failing_script_counts_as_direct_for_that_script_only() {
    let config = config(
        vec![],
        DomainExceptions::new(),
        vec![script(1, "broken", true), script(2, "working", true)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    let evaluator = |index: usize,
                     _: &PacScriptRecord,
                     _: &str,
                     _: &str|
     -> Result<String, ScriptEvalError> {
        if index == 0 {
            Err(ScriptEvalError("boom".to_owned()))
        } else {
            Ok("PROXY s:1".to_owned())
        }
    };
    assert_eq!(policy.decide("https://x.com", "x.com", &evaluator), "PROXY s:1");
}

#[test]
fn test_disabled_scripts_never_influence_the_decision() {
    let config = config(
        vec![],
        DomainExceptions::new(),
        vec![script(1, "disabled", false)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);

    // the evaluator would return a proxy, but the script is disabled
    assert_eq!(
        policy.decide("https://x.com", "x.com", &fixed("PROXY s:1")),
        "DIRECT"
    );
}

#[test]
fn test_all_direct_falls_through_to_direct() {
    let config = config(
        vec![],
        DomainExceptions::new(),
        vec![script(1, "quiet", true)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);
    assert_eq!(policy.decide("https://x.com", "x.com", &fixed(DIRECT)), "DIRECT");
}

#[test]
fn test_multiple_proxies_join_in_order() {
    let config = config(
        vec![
            ProxyServer::new(1, "http://a:80"),
            ProxyServer::new(2, "socks5://b:1080"),
        ],
        DomainExceptions::from_iter([("x.com", ExceptionAction::Proxy)]),
        vec![],
        true,
        true,
    );
    let policy = RoutePolicy::from_config(&config);
    assert_eq!(
        policy.decide("https://x.com", "x.com", &NeverEvaluator),
        "PROXY a:80; SOCKS5 b:1080; DIRECT"
    );
}

#[test]
fn test_toggled_off_proxies_are_ignored() {
    // servers exist but activation is off: exceptions skipped, no override
    let config = config(
        vec![ProxyServer::new(1, "http://p:8080")],
        DomainExceptions::from_iter([("x.com", ExceptionAction::Proxy)]),
        vec![script(1, "route-all", true)],
        false,
        true,
    );
    let policy = RoutePolicy::from_config(&config);
    assert_eq!(
        policy.decide("https://x.com", "x.com", &fixed("PROXY s:1")),
        "PROXY s:1"
    );
}
