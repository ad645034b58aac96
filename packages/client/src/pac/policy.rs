//! Proxy-routing decision policy
//!
//! The same precedence the generated PAC text implements, as a pure
//! function: domain exceptions while user proxies are active, then user PAC
//! scripts in order, then `DIRECT`. First match wins.

use thiserror::Error;

use crate::exceptions::{DomainExceptions, ExceptionAction};
use crate::scripts::PacScriptRecord;

use super::config::PolicyConfig;

/// The PAC directive for a direct connection.
pub const DIRECT: &str = "DIRECT";

/// Error from a script evaluator. Mapped to `DIRECT` for that script only;
/// a broken script never aborts the overall decision.
#[derive(Debug, Clone, Error)]
#[error("script evaluation failed: {0}")]
pub struct ScriptEvalError(pub String);

/// Extension point standing in for sandboxed PAC script execution.
///
/// The engine never executes third-party script text itself. Hosts that own
/// a real sandbox implement this; everyone else composes text with
/// [`super::compose`] and lets the browser evaluate the embedded scripts.
pub trait ScriptEvaluator {
    /// Evaluate one enabled script for a request. `index` is the script's
    /// position among enabled scripts, matching its wrapper index in
    /// emitted text.
    fn evaluate(
        &self,
        index: usize,
        script: &PacScriptRecord,
        url: &str,
        host: &str,
    ) -> Result<String, ScriptEvalError>;
}

impl<F> ScriptEvaluator for F
where
    F: Fn(usize, &PacScriptRecord, &str, &str) -> Result<String, ScriptEvalError>,
{
    fn evaluate(
        &self,
        index: usize,
        script: &PacScriptRecord,
        url: &str,
        host: &str,
    ) -> Result<String, ScriptEvalError> {
        self(index, script, url, host)
    }
}

/// Evaluator with no sandbox: every script fails, and a failed script
/// counts as `DIRECT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverEvaluator;

impl ScriptEvaluator for NeverEvaluator {
    fn evaluate(
        &self,
        _index: usize,
        _script: &PacScriptRecord,
        _url: &str,
        _host: &str,
    ) -> Result<String, ScriptEvalError> {
        Err(ScriptEvalError("no script sandbox available".to_owned()))
    }
}

/// The decision function behind `FindProxyForURL`, usable without any
/// generated code.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Joined proxy tokens; `None` while user proxies are inactive, which
    /// also disables the exception stage entirely.
    user_proxy_string: Option<String>,
    override_pac_scripts: bool,
    exceptions: DomainExceptions,
    /// Enabled scripts only, in stored order.
    scripts: Vec<PacScriptRecord>,
}

impl RoutePolicy {
    /// Snapshot the parts of `config` the decision needs.
    #[must_use]
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            user_proxy_string: config.user_proxy_string(),
            override_pac_scripts: config.override_pac_scripts,
            exceptions: config.exceptions.clone(),
            scripts: config.enabled_scripts().cloned().collect(),
        }
    }

    /// Decide routing for one request.
    ///
    /// Returns either [`DIRECT`] or a semicolon-separated PAC directive
    /// list such as `PROXY a:80; SOCKS5 b:1080; DIRECT`.
    #[must_use]
    pub fn decide<E: ScriptEvaluator>(&self, url: &str, host: &str, evaluator: &E) -> String {
        // Exceptions are skipped entirely without user proxies; a "no"
        // entry must not force DIRECT when there is no proxy to exempt
        // from.
        if let Some(user_proxies) = &self.user_proxy_string {
            if let Some(action) = self.exceptions.matched_action(host) {
                return match action {
                    ExceptionAction::Proxy => format!("{user_proxies}; {DIRECT}"),
                    ExceptionAction::Direct => DIRECT.to_owned(),
                };
            }
        }

        for (index, script) in self.scripts.iter().enumerate() {
            let result = match evaluator.evaluate(index, script, url, host) {
                Ok(result) => result,
                Err(error) => {
                    tracing::debug!(
                        target: "paxy::pac",
                        script = %script.name,
                        %error,
                        "script evaluation failed, treating as DIRECT"
                    );
                    continue;
                }
            };

            if result != DIRECT {
                if self.override_pac_scripts {
                    if let Some(user_proxies) = &self.user_proxy_string {
                        return format!("{user_proxies}; {DIRECT}");
                    }
                }
                return result;
            }
        }

        DIRECT.to_owned()
    }
}
