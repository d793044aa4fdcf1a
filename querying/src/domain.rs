//! Registrable domain (eTLD+1) comparison backed by the Public Suffix List.

/// Strips a single trailing root-label dot.
pub fn trim_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Returns the lowercased registrable domain of `name`, e.g. `example.co.uk`
/// for `www.example.co.uk`. `None` for bare public suffixes and malformed names.
pub fn registrable_domain(name: &str) -> Option<String> {
    let name = trim_root(name).to_lowercase();
    if name.is_empty() || name.split('.').any(str::is_empty) {
        return None;
    }
    psl::domain(name.as_bytes())
        .and_then(|d| std::str::from_utf8(d.as_bytes()).ok())
        .map(|s| s.to_string())
}

pub fn same_registrable_domain(a: &str, b: &str) -> bool {
    match (registrable_domain(a), registrable_domain(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain() {
        assert_eq!(registrable_domain("www.example.com"), Some("example.com".to_string()));
        assert_eq!(registrable_domain("example.com"), Some("example.com".to_string()));
        assert_eq!(registrable_domain("a.b.example.co.uk"), Some("example.co.uk".to_string()));
    }

    #[test]
    fn test_registrable_domain_trailing_dot() {
        assert_eq!(registrable_domain("www.example.com."), Some("example.com".to_string()));
    }

    #[test]
    fn test_registrable_domain_undeterminable() {
        assert_eq!(registrable_domain("com"), None);
        assert_eq!(registrable_domain("co.uk"), None);
        assert_eq!(registrable_domain(""), None);
        assert_eq!(registrable_domain("."), None);
        assert_eq!(registrable_domain("www..example.com"), None);
    }

    #[test]
    fn test_same_domain() {
        assert!(same_registrable_domain("www.a.com", "something.a.com"));
        assert!(same_registrable_domain("www.a.com", "a.com."));
        assert!(same_registrable_domain("WWW.A.COM", "cdn.a.com"));
    }

    #[test]
    fn test_different_domain() {
        assert!(!same_registrable_domain("cname-to.b.com", "other.c.com"));
        assert!(!same_registrable_domain("www.example.co.uk", "www.other.co.uk"));
        assert!(!same_registrable_domain("a.com", "a.net"));
    }

    #[test]
    fn test_public_suffix_never_matches() {
        assert!(!same_registrable_domain("com", "com"));
        assert!(!same_registrable_domain("github.io", "github.io"));
        assert!(!same_registrable_domain("", ""));
    }
}
