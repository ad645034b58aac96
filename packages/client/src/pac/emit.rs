//! PAC program emission
//!
//! Serializes the decision policy into a single PAC program defining one
//! top-level `FindProxyForURL(url, host)`. Each enabled script is embedded
//! in its own try/catch wrapper function so a broken third-party script
//! degrades to `DIRECT` instead of aborting the whole routing decision.
//!
//! Pure string construction over the input snapshot: identical inputs yield
//! identical text.

use std::fmt::Write;

use super::config::PolicyConfig;

/// Exact-then-wildcard exception lookup, emitted only while user proxies
/// are active. `wildcardPatterns` arrives pre-sorted (longest base first)
/// so tie-breaks match the in-process policy.
const EXCEPTION_BLOCK: &str = r#"
  function checkDomainException(domain) {
    const option = domainExceptions[domain];
    if (option === "yes") {
      return userProxyString + "; DIRECT";
    }
    if (option === "no") {
      return "DIRECT";
    }
    return null;
  }

  let exceptionResult = checkDomainException(host);
  if (exceptionResult !== null) {
    return exceptionResult;
  }

  for (const pattern of wildcardPatterns) {
    const base = pattern.slice(2);
    if (host === base || host.endsWith("." + base)) {
      exceptionResult = checkDomainException(pattern);
      if (exceptionResult !== null) {
        return exceptionResult;
      }
    }
  }
"#;

/// Generate the combined PAC program for `config`.
#[must_use]
pub fn compose(config: &PolicyConfig) -> String {
    let has_user_proxies = config.has_user_proxies();
    let user_proxy_string = config.user_proxy_string().unwrap_or_default();
    let enabled: Vec<_> = config.enabled_scripts().collect();

    let mut out = String::new();

    for (index, script) in enabled.iter().enumerate() {
        let _ = write!(
            out,
            "function userPacScript{index}(url, host) {{\n  try {{\n{content}\n    return FindProxyForURL(url, host);\n  }} catch (e) {{\n    return \"DIRECT\";\n  }}\n}}\n\n",
            content = indent(script.content.trim(), "    "),
        );
    }

    out.push_str("function FindProxyForURL(url, host) {\n");
    let _ = writeln!(out, "  const hasUserProxies = {has_user_proxies};");
    let _ = writeln!(out, "  const userProxyString = \"{user_proxy_string}\";");

    if has_user_proxies {
        let exceptions_json = serde_json::to_string(&config.exceptions)
            .unwrap_or_else(|_| String::from("{}"));
        let wildcards_json = serde_json::to_string(&config.exceptions.wildcard_patterns())
            .unwrap_or_else(|_| String::from("[]"));
        out.push('\n');
        let _ = writeln!(out, "  const domainExceptions = {exceptions_json};");
        let _ = writeln!(out, "  const wildcardPatterns = {wildcards_json};");
        out.push_str(EXCEPTION_BLOCK);
    }

    for index in 0..enabled.len() {
        let _ = write!(
            out,
            "\n  try {{\n    const pacResult{index} = userPacScript{index}(url, host);\n    if (pacResult{index} !== \"DIRECT\") {{\n      if (hasUserProxies && {override_scripts}) {{\n        return userProxyString + \"; DIRECT\";\n      }}\n      return pacResult{index};\n    }}\n  }} catch (e) {{\n  }}\n",
            override_scripts = config.override_pac_scripts,
        );
    }

    out.push_str("\n  return \"DIRECT\";\n}\n");
    out
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
