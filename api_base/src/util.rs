/// Schemes that mark a path as a fully-qualified URL.
pub const ABSOLUTE_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Returns `true` when `path` starts with `http://` or `https://`.
///
/// Matching is exact and case-sensitive.
pub fn is_absolute(path: &str) -> bool {
    ABSOLUTE_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Join `path` onto `base`.
///
/// * An empty `path` returns `base` unchanged.
/// * An absolute `path` (see [`is_absolute`]) is returned as-is.
/// * Otherwise one trailing `/` is removed from `base`, one leading `/` from
///   `path`, and the two are joined with a single `/`.
///
/// Only a single separator is stripped on each side, so `"http://h//"` and
/// `"//x"` give `"http://h///x"`.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if is_absolute(path) {
        return path.to_string();
    }

    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut url = String::with_capacity(base.len() + path.len() + 1);
    url.push_str(base);
    url.push('/');
    url.push_str(path);
    url
}

/// Join several segments onto `base`, one after the other.
///
/// Empty segments are skipped. An absolute segment replaces everything
/// built so far.
pub fn join_segments(base: &str, segments: &[&str]) -> String {
    segments
        .iter()
        .fold(base.to_string(), |url, seg| join_url(&url, seg))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn empty_path_returns_base() {
        assert_eq!(join_url(BASE, ""), BASE);
        assert_eq!(join_url("http://localhost:3000/", ""), "http://localhost:3000/");
    }

    #[test]
    fn relative_paths_get_exactly_one_separator() {
        assert_eq!(join_url(BASE, "users"), "http://localhost:3000/users");
        assert_eq!(join_url(BASE, "/users"), "http://localhost:3000/users");
        assert_eq!(join_url("http://localhost:3000/", "/users"), "http://localhost:3000/users");
        assert_eq!(join_url("http://localhost:3000/", "users"), "http://localhost:3000/users");
    }

    #[test]
    fn absolute_paths_bypass_base() {
        let abs = "https://other.example.com/x";
        assert_eq!(join_url(BASE, abs), abs);
        assert_eq!(join_url(BASE, "http://a.test"), "http://a.test");
        assert_eq!(join_url(BASE, &join_url(BASE, abs)), join_url(BASE, abs));
    }

    #[test]
    fn only_one_separator_is_stripped() {
        assert_eq!(join_url("http://h//", "//x"), "http://h///x");
        assert_eq!(join_url("http://h", "//x"), "http://h//x");
        assert_eq!(join_url("http://h//", "x"), "http://h//x");
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert!(!is_absolute("HTTP://x"));
        assert_eq!(join_url(BASE, "HTTP://x"), "http://localhost:3000/HTTP://x");
        assert!(!is_absolute("ftp://x"));
        assert!(!is_absolute("http:/x"));
    }

    #[test]
    fn lone_separator_path() {
        assert_eq!(join_url(BASE, "/"), "http://localhost:3000/");
    }

    #[test]
    fn segments_fold_left() {
        assert_eq!(
            join_segments(BASE, &["auth", "/session", "", "all"]),
            "http://localhost:3000/auth/session/all"
        );
        assert_eq!(join_segments(BASE, &[]), BASE);
        assert_eq!(
            join_segments(BASE, &["v1", "https://cdn.test/a", "b"]),
            "https://cdn.test/a/b"
        );
    }
}
