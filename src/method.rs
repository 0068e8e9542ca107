use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Method identifies the request signal that caused a [crate::Detection] to be flagged.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    /// A configured cookie was present on the request.
    Cookie,
    /// The request's remote address matched the configured IP literal.
    Ip,
    /// A configured URI query parameter was present on the request.
    UriParam,
}

impl Method {
    /// Returns the canonical name of the method: `"cookie"`, `"ip"` or `"uriParam"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Cookie => "cookie",
            Method::Ip => "ip",
            Method::UriParam => "uriParam",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    /// Parses a canonical method name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cookie" => Ok(Method::Cookie),
            "ip" => Ok(Method::Ip),
            "uriParam" => Ok(Method::UriParam),
            _ => Err(UnknownMethodError {
                name: s.to_owned(),
            }),
        }
    }
}

/// Returned when a string does not name a known [Method].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethodError {
    name: String,
}

impl UnknownMethodError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnknownMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown detection method '{}', expected one of cookie, ip, uriParam",
            self.name
        )
    }
}

impl std::error::Error for UnknownMethodError {}
