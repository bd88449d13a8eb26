//! Build-time configuration.
//!
//! One externally supplied base URL serves two purposes: it prefixes every
//! API call, and it resolves server-relative upload paths (images, PDFs)
//! into absolute URLs. With no `API_BASE_URL` in the build environment the
//! client talks to its own origin.

const DEFAULT_BASE: &str = "";

pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE)
}

/// Absolute URL of an API endpoint, e.g. `api_url("banners")`.
pub fn api_url(path: &str) -> String {
    format!(
        "{}/api/{}",
        base_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves a stored server-relative asset path into a viewable URL.
/// Absolute URLs and data URLs pass through untouched.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_normalizes_slashes() {
        assert_eq!(api_url("banners"), "/api/banners");
        assert_eq!(api_url("/banners"), "/api/banners");
        assert_eq!(api_url("banners/update/3"), "/api/banners/update/3");
    }

    #[test]
    fn asset_url_resolves_relative_paths() {
        assert_eq!(asset_url("uploads/x.png"), "/uploads/x.png");
        assert_eq!(asset_url("/uploads/x.png"), "/uploads/x.png");
    }

    #[test]
    fn asset_url_keeps_absolute_and_data_urls() {
        assert_eq!(asset_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
        assert_eq!(asset_url("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }
}
