const FLAG_SEPARATOR: char = ',';

/// Splits a cookie or query parameter value into flag names.
///
/// Splitting is on a literal comma with no trimming. Empty segments are kept, so `""` yields one
/// empty flag and `"a,,b"` yields three.
pub(crate) fn split_flag_values(value: &str) -> impl Iterator<Item = String> + '_ {
    value.split(FLAG_SEPARATOR).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectral::prelude::*;
    use test_case::test_case;

    #[test_case("dog", &["dog"]; "single")]
    #[test_case("dog,cat", &["dog", "cat"]; "two")]
    #[test_case("", &[""]; "empty value")]
    #[test_case(",", &["", ""]; "lone comma")]
    #[test_case("a,,b", &["a", "", "b"]; "empty middle segment")]
    #[test_case(" dog , cat", &[" dog ", " cat"]; "no trimming")]
    #[test_case("dog,dog", &["dog", "dog"]; "duplicates kept")]
    fn splits_on_literal_comma(value: &str, expected: &[&str]) {
        let flags: Vec<String> = split_flag_values(value).collect();
        assert_that!(flags).is_equal_to(expected.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }
}
