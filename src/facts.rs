use std::collections::HashMap;

/// FactSource is the read-only view of a request that detection runs against.
///
/// Hosts may implement this directly over their own request type to avoid copying cookies and
/// query parameters into a [RequestFacts]. Values are expected to be already decoded by the HTTP
/// layer.
pub trait FactSource {
    /// Retrieve the value of the cookie named `name`, if the request carried it.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Retrieve the value of the URI query parameter named `name`, if present.
    fn query_param(&self, name: &str) -> Option<&str>;

    /// Retrieve the client's remote address, if the host knows it.
    fn remote_addr(&self) -> Option<&str>;
}

/// RequestFacts is an owned snapshot of the request signals used for flag detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFacts {
    pub cookies: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
    pub remote_addr: Option<String>,
}

impl RequestFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }
}

impl FactSource for RequestFacts {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    fn remote_addr(&self) -> Option<&str> {
        self.remote_addr.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use spectral::prelude::*;

    #[test]
    fn builder_populates_fields() {
        let facts = RequestFacts::new()
            .with_cookie("FF", "dog,cat")
            .with_query_param("ff", "")
            .with_remote_addr("10.0.0.0");

        assert_that!(facts).is_equal_to(RequestFacts {
            cookies: hashmap! { "FF".to_string() => "dog,cat".to_string() },
            query_params: hashmap! { "ff".to_string() => "".to_string() },
            remote_addr: Some("10.0.0.0".to_string()),
        });
    }

    #[test]
    fn lookups_are_exact() {
        let facts = RequestFacts::new()
            .with_cookie("FF", "dog")
            .with_query_param("ff", "cat");

        assert_that!(facts.cookie("FF")).contains_value("dog");
        assert_that!(facts.cookie("ff")).is_none();
        assert_that!(facts.query_param("ff")).contains_value("cat");
        assert_that!(facts.query_param("FF")).is_none();
        assert_that!(facts.remote_addr()).is_none();
    }
}
