//! URL helpers for requests to the page's own server.

/// Origin of the current page, e.g. "http://localhost:5000".
///
/// Empty when there is no window, which leaves request paths relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL for a server path such as "/book".
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:5000", "/book"), "http://localhost:5000/book");
        assert_eq!(join_url("http://localhost:5000/", "/book"), "http://localhost:5000/book");
        assert_eq!(join_url("http://localhost:5000", "book"), "http://localhost:5000/book");
    }

    #[test]
    fn test_join_url_without_origin() {
        assert_eq!(join_url("", "/appointments"), "/appointments");
    }
}
