#![cfg(test)]

use crate::config::DetectionConfig;
use crate::facts::RequestFacts;
use maplit::hashmap;
use proptest::collection::hash_map;
use proptest::prelude::*;

/// Config with every source set: cookie `FF`, query parameter `ff` and ip `10.0.0.0`.
pub fn all_sources() -> DetectionConfig {
    DetectionConfig::new()
        .with_cookie("FF")
        .with_ip("10.0.0.0")
        .with_uri_param("ff")
}

pub fn empty_facts() -> RequestFacts {
    RequestFacts::new()
}

pub fn facts_with_cookie(name: &str, value: &str) -> RequestFacts {
    RequestFacts {
        cookies: hashmap! { name.to_string() => value.to_string() },
        ..RequestFacts::default()
    }
}

pub fn facts_with_query_param(name: &str, value: &str) -> RequestFacts {
    RequestFacts {
        query_params: hashmap! { name.to_string() => value.to_string() },
        ..RequestFacts::default()
    }
}

pub fn facts_with_remote_addr(addr: &str) -> RequestFacts {
    RequestFacts {
        remote_addr: Some(addr.to_string()),
        ..RequestFacts::default()
    }
}

prop_compose! {
    // Comma-heavy values so empty and repeated segments come up often.
    pub fn any_cookie_value()(s in "[a-z,]{0,12}|.*") -> String {
        s
    }
}

// Literal pools overlapping the names and address in all_sources, so every combination of
// firing sources is reachable.
fn any_source_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("FF".to_string()),
        Just("ff".to_string()),
        Just("other".to_string()),
    ]
}

fn any_remote_addr() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("10.0.0.0".to_string()),
        Just("10.0.0.1".to_string()),
        Just("::1".to_string()),
    ]
}

prop_compose! {
    pub fn any_facts()(
        cookies in hash_map(any_source_name(), any_cookie_value(), 0..3),
        query_params in hash_map(any_source_name(), any_cookie_value(), 0..3),
        remote_addr in proptest::option::of(any_remote_addr()),
    ) -> RequestFacts {
        RequestFacts {
            cookies,
            query_params,
            remote_addr,
        }
    }
}
