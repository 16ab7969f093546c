//! Default lookup key derivation.

/// Derives the default lookup key for a declared field name.
///
/// The name is split into segments at every `_` and at every point where a
/// lowercase letter is directly followed by an uppercase one. Segments are
/// upper-cased and joined with `_`. Digits never start a segment, so they
/// stay attached to the letters before them.
///
/// ```
/// use envconf::derive_key;
///
/// assert_eq!(derive_key("Int8"), "INT8");
/// assert_eq!(derive_key("IntArr"), "INT_ARR");
/// assert_eq!(derive_key("int_arr"), "INT_ARR");
/// assert_eq!(derive_key("fl32"), "FL32");
/// ```
pub fn derive_key(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);

    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
        current.extend(c.to_uppercase());
        prev_lower = c.is_lowercase();
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        assert_eq!(derive_key("Val"), "VAL");
        assert_eq!(derive_key("N"), "N");
        assert_eq!(derive_key("val"), "VAL");
    }

    #[test]
    fn test_camel_case_segments() {
        assert_eq!(derive_key("IntArr"), "INT_ARR");
        assert_eq!(derive_key("StrArr"), "STR_ARR");
        assert_eq!(derive_key("MaxIdleConns"), "MAX_IDLE_CONNS");
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(derive_key("Int8"), "INT8");
        assert_eq!(derive_key("Int16"), "INT16");
        assert_eq!(derive_key("Fl32"), "FL32");
        assert_eq!(derive_key("S1"), "S1");
        assert_eq!(derive_key("Ipv4Addr"), "IPV4ADDR");
    }

    #[test]
    fn test_snake_case_segments() {
        assert_eq!(derive_key("int_arr"), "INT_ARR");
        assert_eq!(derive_key("fl64"), "FL64");
        assert_eq!(derive_key("max_idle_conns"), "MAX_IDLE_CONNS");
    }

    #[test]
    fn test_uppercase_runs_do_not_split() {
        assert_eq!(derive_key("HTTPPort"), "HTTPPORT");
        assert_eq!(derive_key("URL"), "URL");
    }

    #[test]
    fn test_raw_identifier_and_stray_underscores() {
        assert_eq!(derive_key("r#type"), "TYPE");
        assert_eq!(derive_key("_private"), "PRIVATE");
        assert_eq!(derive_key("double__gap"), "DOUBLE_GAP");
    }
}
