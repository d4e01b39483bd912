//! Deployment base path handling.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/quest` for a
//! subdirectory deployment), the router mounts under it. Local builds
//! without `PUBLIC_URL` serve from the root.

/// Base path for the router, `None` when serving from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    base_from(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn base_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn base_is_trimmed_of_trailing_slashes() {
        assert_eq!(base_from("/quest/"), Some(String::from("/quest")));
        assert_eq!(base_from("/quest"), Some(String::from("/quest")));
        assert_eq!(base_from("  "), None);
        assert_eq!(base_from("/"), None);
    }
}
