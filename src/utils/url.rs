//! Joining the coach origin with endpoint paths.

/// Strip trailing slashes from a base URL.
///
/// ```
/// use hotmess_coach::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:3000/"), "http://localhost:3000");
/// assert_eq!(normalize_base_url("https://coach.example///"), "https://coach.example");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path with exactly one slash between them.
///
/// ```
/// use hotmess_coach::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:3000/", "/api/chat"),
///     "http://localhost:3000/api/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{endpoint}", normalize_base_url(base_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_without_trailing_slash_is_unchanged() {
        assert_eq!(
            normalize_base_url("http://localhost:3000"),
            "http://localhost:3000"
        );
        assert_eq!(normalize_base_url(""), "");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            normalize_base_url("  http://localhost:3000/ \n"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn chat_endpoint_joins_under_a_path_prefix() {
        assert_eq!(
            construct_api_url("https://coach.example/thanksgiving/", "api/chat"),
            "https://coach.example/thanksgiving/api/chat"
        );
        assert_eq!(
            construct_api_url("https://coach.example", "///api/chat"),
            "https://coach.example/api/chat"
        );
    }
}
