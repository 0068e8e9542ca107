use std::fmt::{self, Display};

use itertools::Itertools;
use log::{debug, trace};
use serde::Serialize;

use crate::config::DetectionConfig;
use crate::facts::FactSource;
use crate::method::Method;
use crate::util::split_flag_values;

/// Detect feature flags for a single request.
///
/// The sources named in `config` are checked against `facts` in the fixed order cookie, ip,
/// uriParam. Sources are independent: an unset source, a missing cookie or parameter, a missing
/// remote address or a non-matching address only mean that source did not fire.
///
/// ```
/// # use request_feature_flags::{detect, DetectionConfig, RequestFacts};
/// let config = DetectionConfig::new().with_cookie("FF").with_ip("10.0.0.0");
/// let facts = RequestFacts::new().with_cookie("FF", "dog,cat");
///
/// let detection = detect(&config, &facts);
/// assert!(detection.is_flagged());
/// assert!(detection.has_flag("dog"));
/// assert!(!detection.uses_method("ip"));
/// ```
pub fn detect(config: &DetectionConfig, facts: &dyn FactSource) -> Detection {
    let mut detection = Detection::default();

    if let Some(name) = config.cookie.as_deref() {
        match facts.cookie(name) {
            Some(value) => detection.record_values(Method::Cookie, value),
            None => debug!("flag cookie '{}' not present", name),
        }
    }

    if let Some(ip) = config.ip.as_deref() {
        match facts.remote_addr() {
            Some(addr) if addr == ip => detection.record(Method::Ip),
            Some(addr) => debug!("remote address {} does not match flag ip {}", addr, ip),
            None => debug!("no remote address available, skipping ip detection"),
        }
    }

    if let Some(name) = config.uri_param.as_deref() {
        match facts.query_param(name) {
            Some(value) => detection.record_values(Method::UriParam, value),
            None => debug!("flag query parameter '{}' not present", name),
        }
    }

    trace!("detection result: {}", detection);
    detection
}

/// Detection is the result of [detect]: whether the request is flagged, the flags it carries and
/// the methods that fired.
///
/// A request is flagged exactly when at least one method fired. Only the cookie and uriParam
/// methods contribute flags, so a request flagged by ip alone has no flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Detection {
    flagged: bool,
    flags: Vec<String>,
    methods: Vec<Method>,
}

impl Detection {
    /// Returns true if any detection method fired.
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Returns true if `value` is among the detected flags. Matching is exact and case-sensitive.
    pub fn has_flag(&self, value: &str) -> bool {
        self.flags.iter().any(|flag| flag == value)
    }

    /// Returns true if the method whose canonical name is `method` fired.
    ///
    /// Names that are not `"cookie"`, `"ip"` or `"uriParam"` never match.
    pub fn uses_method(&self, method: &str) -> bool {
        matches!(method.parse::<Method>(), Ok(m) if self.uses(m))
    }

    /// Returns true if `method` fired.
    pub fn uses(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }

    /// The detected flags in detection order. Duplicates are kept.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// The methods that fired, in detection order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    fn record(&mut self, method: Method) {
        debug!("request flagged by {}", method);
        self.flagged = true;
        self.methods.push(method);
    }

    fn record_values(&mut self, method: Method, value: &str) {
        self.record(method);
        self.flags.extend(split_flag_values(value));
    }
}

impl Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.flagged {
            return f.write_str("not flagged");
        }
        write!(
            f,
            "flagged by {} with flags [{}]",
            self.methods.iter().join(", "),
            self.flags.iter().map(|flag| format!("{:?}", flag)).join(", ")
        )
    }
}
