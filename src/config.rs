use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// DetectionConfig names the request signals that [crate::detect] should inspect.
///
/// Each source is optional, and an unset source is skipped entirely. Note that `Some("")` is a
/// configured source naming the empty cookie, parameter or address; only `None` disables it.
///
/// The serialized form mirrors the option object accepted by earlier flag-detection tooling:
///
/// ```
/// # use request_feature_flags::DetectionConfig;
/// let config: DetectionConfig =
///     serde_json::from_str(r#"{"cookie": "FF", "uriParam": "ff", "ip": "10.0.0.0"}"#).unwrap();
/// assert_eq!(config.uri_param.as_deref(), Some("ff"));
/// ```
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Name of the cookie whose comma-separated value lists flags.
    pub cookie: Option<String>,
    /// Exact remote address that flags a request. No CIDR matching or normalization is done.
    pub ip: Option<String>,
    /// Name of the URI query parameter whose comma-separated value lists flags.
    pub uri_param: Option<String>,
}

impl DetectionConfig {
    /// Creates a config with no sources; detecting with it never flags a request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>) -> Self {
        self.cookie = Some(name.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_uri_param(mut self, name: impl Into<String>) -> Self {
        self.uri_param = Some(name.into());
        self
    }

    /// Returns true if no source is configured.
    pub fn is_empty(&self) -> bool {
        self.cookie.is_none() && self.ip.is_none() && self.uri_param.is_none()
    }

    /// Returns a new config where every source set in `other` replaces the one in `self`, and
    /// sources unset in `other` are kept.
    ///
    /// Merging never re-runs detection; pass the merged config to [crate::detect] to get a fresh
    /// [crate::Detection].
    pub fn merge(&self, other: &DetectionConfig) -> DetectionConfig {
        DetectionConfig {
            cookie: other.cookie.clone().or_else(|| self.cookie.clone()),
            ip: other.ip.clone().or_else(|| self.ip.clone()),
            uri_param: other.uri_param.clone().or_else(|| self.uri_param.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;
    use spectral::prelude::*;

    #[test]
    fn parses_option_object() {
        let config: DetectionConfig =
            serde_json::from_str(r#"{"cookie":"FF","ip":"10.0.0.0","uriParam":"ff"}"#)
                .expect("should parse");

        assert_that!(config).is_equal_to(
            DetectionConfig::new()
                .with_cookie("FF")
                .with_ip("10.0.0.0")
                .with_uri_param("ff"),
        );
    }

    #[test]
    fn parses_partial_and_unknown_options() {
        let config: DetectionConfig =
            serde_json::from_str(r#"{"uriParam":"ff","header":"X-FF","ip":null}"#)
                .expect("should parse");

        assert_that!(config.cookie).is_none();
        assert_that!(config.ip).is_none();
        assert_that!(config.uri_param).contains_value("ff".to_string());

        let empty: DetectionConfig = serde_json::from_str("{}").expect("should parse");
        assert_that!(empty.is_empty()).is_true();
    }

    #[test]
    fn rejects_non_string_source() {
        let result = serde_json::from_str::<DetectionConfig>(r#"{"cookie":42}"#);
        assert_that!(result).is_err();
    }

    #[test]
    fn serializes_without_unset_sources() {
        let config = DetectionConfig::new().with_uri_param("ff");
        assert_json_eq!(serde_json::to_value(&config).unwrap(), json!({"uriParam": "ff"}));

        assert_json_eq!(
            serde_json::to_value(DetectionConfig::new()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn empty_string_is_a_configured_source() {
        let config = DetectionConfig::new().with_cookie("");
        assert_that!(config.is_empty()).is_false();
    }

    #[test]
    fn merge_prefers_sources_set_in_other() {
        let base = DetectionConfig::new().with_cookie("FF").with_ip("10.0.0.0");
        let update = DetectionConfig::new().with_ip("10.0.0.1").with_uri_param("ff");

        let merged = base.merge(&update);

        assert_that!(merged).is_equal_to(
            DetectionConfig::new()
                .with_cookie("FF")
                .with_ip("10.0.0.1")
                .with_uri_param("ff"),
        );
        assert_that!(base.merge(&DetectionConfig::new())).is_equal_to(&base);
    }
}
