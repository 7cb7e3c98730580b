//! Resolution of the Q&A backend base address.

/// Used when neither a runtime nor a build-time base is configured. Relative,
/// so in the browser it resolves against the page origin (and the dev server's
/// `/api` proxy).
pub const DEFAULT_API_BASE: &str = "/api";

/// Picks the base address: the runtime-injected value, then the build-time
/// value, then [`DEFAULT_API_BASE`]. Blank values are skipped and trailing
/// slashes are stripped from the winner.
pub fn resolve_api_base(runtime: Option<&str>, build_time: Option<&str>) -> String {
    let chosen = [runtime, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    chosen.trim_end_matches('/').to_string()
}

/// True for bases like `/api` that need an origin before a native client can
/// use them.
pub fn is_relative(api_base: &str) -> bool {
    !api_base.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_value_wins() {
        let base = resolve_api_base(Some("https://qa.example.com/v1"), Some("http://build"));
        assert_eq!(base, "https://qa.example.com/v1");
    }

    #[test]
    fn build_time_value_used_when_runtime_missing_or_blank() {
        assert_eq!(resolve_api_base(None, Some("http://build/api")), "http://build/api");
        assert_eq!(resolve_api_base(Some("  "), Some("http://build/api")), "http://build/api");
    }

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(Some(""), Some("")), DEFAULT_API_BASE);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(resolve_api_base(Some("http://localhost:8000///"), None), "http://localhost:8000");
        assert_eq!(resolve_api_base(None, Some("/backend/")), "/backend");
    }

    #[test]
    fn relative_detection() {
        assert!(is_relative("/api"));
        assert!(!is_relative("http://localhost:8000"));
    }
}
