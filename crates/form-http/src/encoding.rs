//! Query string and form body encoding

use url::form_urlencoded;

/// Serialize ordered pairs as `application/x-www-form-urlencoded`
///
/// Pairs keep their insertion order, spaces become `+` and reserved bytes are
/// percent-encoded.
pub fn encode_form<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}

/// Append an encoded query to `url`
///
/// Uses `&` when the URL already carries a query string.
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }

    let separator = match url.rfind('?') {
        None => "?",
        Some(pos) if pos + 1 == url.len() => "",
        Some(_) if url.ends_with('&') => "",
        Some(_) => "&",
    };

    format!("{url}{separator}{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form_keeps_order() {
        assert_eq!(encode_form(&[("b", "2"), ("a", "1")]), "b=2&a=1");
    }

    #[test]
    fn test_encode_form_escapes() {
        assert_eq!(
            encode_form(&[("q", "rust lang"), ("sym", "a&b=c/d")]),
            "q=rust+lang&sym=a%26b%3Dc%2Fd"
        );
    }

    #[test]
    fn test_encode_form_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(encode_form(&pairs), "");
    }

    #[test]
    fn test_encode_form_empty_value() {
        assert_eq!(encode_form(&[("flag", "")]), "flag=");
    }

    #[test]
    fn test_append_query_plain_url() {
        assert_eq!(
            append_query("https://api.example.com/items", "a=1&b=2"),
            "https://api.example.com/items?a=1&b=2"
        );
    }

    #[test]
    fn test_append_query_existing_query() {
        assert_eq!(
            append_query("https://api.example.com/items?page=2", "a=1"),
            "https://api.example.com/items?page=2&a=1"
        );
    }

    #[test]
    fn test_append_query_trailing_separator() {
        assert_eq!(append_query("http://h/?", "a=1"), "http://h/?a=1");
        assert_eq!(append_query("http://h/?x=1&", "a=1"), "http://h/?x=1&a=1");
    }

    #[test]
    fn test_append_query_empty_query() {
        assert_eq!(append_query("http://h/path", ""), "http://h/path");
    }
}
