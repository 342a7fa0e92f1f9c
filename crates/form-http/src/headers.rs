//! Header line handling

/// Header sent ahead of any caller supplied header
pub const DEFAULT_CONTENT_TYPE: &str = "Content-Type: application/x-www-form-urlencoded";

/// Build the header lines for a request
///
/// The default Content-Type always comes first, caller lines follow in their
/// original order. Duplicates are not removed, so a caller supplied
/// `Content-Type` is sent after the default one.
pub fn prepare_headers<S: AsRef<str>>(caller: &[S]) -> Vec<String> {
    std::iter::once(DEFAULT_CONTENT_TYPE.to_string())
        .chain(caller.iter().map(|h| h.as_ref().to_string()))
        .collect()
}

/// Split a `"Name: Value"` line into its trimmed name and value
pub fn parse_header_line(line: &str) -> Result<(String, String), String> {
    let Some((name, value)) = line.split_once(':') else {
        return Err(format!("Header must be in format 'Name: Value': {line}"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Header name cannot be empty: {line}"));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_headers_default_only() {
        let caller: [&str; 0] = [];
        assert_eq!(prepare_headers(&caller), vec![DEFAULT_CONTENT_TYPE]);
    }

    #[test]
    fn test_prepare_headers_keeps_order_and_duplicates() {
        let caller = ["Accept: application/json", "Content-Type: text/plain"];
        assert_eq!(
            prepare_headers(&caller),
            vec![
                DEFAULT_CONTENT_TYPE,
                "Accept: application/json",
                "Content-Type: text/plain",
            ]
        );
    }

    #[test]
    fn test_parse_header_line_valid() {
        assert_eq!(
            parse_header_line("Content-Type: application/json"),
            Ok(("Content-Type".to_string(), "application/json".to_string()))
        );
    }

    #[test]
    fn test_parse_header_line_value_with_colon() {
        assert_eq!(
            parse_header_line("Referer: https://example.com:8443/x"),
            Ok((
                "Referer".to_string(),
                "https://example.com:8443/x".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_header_line_no_value() {
        assert_eq!(
            parse_header_line("X-Empty:"),
            Ok(("X-Empty".to_string(), "".to_string()))
        );
    }

    #[test]
    fn test_parse_header_line_no_colon() {
        assert!(parse_header_line("Content-Type").is_err());
    }

    #[test]
    fn test_parse_header_line_empty_name() {
        let result = parse_header_line(" : value");
        assert!(result.is_err());
        assert!(result
            .err()
            .is_some_and(|e| e.contains("Header name cannot be empty")));
    }
}
