//! Build-time configuration
//!
//! The API base URL can be overridden at compile time with `CLUB_API_URL`.

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the club REST API, no trailing slash
pub fn api_url() -> &'static str {
    option_env!("CLUB_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Resolve an image/file path from the API: absolute URLs pass through,
/// relative paths are served by the API host.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", api_url(), path)
    }
}

/// Avatar used when a member record carries none
pub const DEFAULT_AVATAR: &str = "/static/images/members/default-avatar.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_passthrough_and_prefix() {
        assert_eq!(asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(asset_url("http://cdn.example.com/a.png"), "http://cdn.example.com/a.png");
        assert_eq!(asset_url("/static/a.png"), format!("{}/static/a.png", api_url()));
        // A relative path starting with "http" is still a relative path
        assert_eq!(asset_url("httpdocs/a.png"), format!("{}httpdocs/a.png", api_url()));
    }
}
