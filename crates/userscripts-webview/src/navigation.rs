//! Where link activations inside the web view are allowed to go.

/// Prefixes that stay inside the web view.
///
/// - `userscripts://`: the bundled UI
/// - `http://userscripts.localhost`: the same, as rewritten by WebView2 on Windows
/// - `about:blank`: the default empty page
pub const IN_APP_PREFIXES: &[&str] = &[
    "userscripts://",
    "http://userscripts.localhost",
    "about:blank",
];

/// Schemes handed to the operating system instead of loading in-view.
pub const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the web view load the URL.
    Allow,
    /// Cancel the in-view navigation and open the URL with the OS.
    OpenExternally,
}

/// Decide what happens to a navigation request.
pub fn decide(url: &str) -> NavigationDecision {
    if IN_APP_PREFIXES.iter().any(|prefix| is_within(url, prefix)) {
        return NavigationDecision::Allow;
    }

    match scheme(url) {
        Some(s) if EXTERNAL_SCHEMES.iter().any(|e| s.eq_ignore_ascii_case(e)) => {
            NavigationDecision::OpenExternally
        }
        _ => NavigationDecision::Allow,
    }
}

/// `url` starts with `prefix` and the prefix ends at a URL boundary, so
/// `http://userscripts.localhost.example` does not count.
fn is_within(url: &str, prefix: &str) -> bool {
    let Some(rest) = url.strip_prefix(prefix) else {
        return false;
    };
    prefix.ends_with("://") || rest.is_empty() || rest.starts_with(['/', ':', '?', '#'])
}

/// The URL scheme, if `url` starts with one.
fn scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Stays in the web view --

    #[test]
    fn allows_app_scheme() {
        assert_eq!(decide("userscripts://localhost/"), NavigationDecision::Allow);
        assert_eq!(
            decide("userscripts://localhost/index.html#settings"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn allows_webview2_rewritten_app_scheme() {
        assert_eq!(
            decide("http://userscripts.localhost/index.html"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn allows_about_blank() {
        assert_eq!(decide("about:blank"), NavigationDecision::Allow);
    }

    #[test]
    fn allows_unlisted_schemes() {
        assert_eq!(decide("data:text/plain,hi"), NavigationDecision::Allow);
        assert_eq!(decide("blob:userscripts://localhost/1234"), NavigationDecision::Allow);
    }

    #[test]
    fn allows_strings_without_a_scheme() {
        assert_eq!(decide(""), NavigationDecision::Allow);
        assert_eq!(decide("not a url"), NavigationDecision::Allow);
    }

    // -- Leaves the app --

    #[test]
    fn web_links_open_externally() {
        assert_eq!(
            decide("https://github.com/quoid/userscripts"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(decide("http://example.com"), NavigationDecision::OpenExternally);
        assert_eq!(decide("HTTPS://EXAMPLE.COM"), NavigationDecision::OpenExternally);
    }

    #[test]
    fn mail_and_phone_links_open_externally() {
        assert_eq!(
            decide("mailto:someone@example.com"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(decide("tel:+15555550100"), NavigationDecision::OpenExternally);
    }

    #[test]
    fn lookalike_hosts_are_not_in_app() {
        assert_eq!(
            decide("https://userscripts.localhost.evil.com/"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            decide("http://userscripts.localhost.evil.com/"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(decide("about:blankety"), NavigationDecision::Allow);
    }

    #[test]
    fn scheme_parsing() {
        assert_eq!(scheme("https://x"), Some("https"));
        assert_eq!(scheme("web+app:1"), Some("web+app"));
        assert_eq!(scheme("1http://x"), None);
        assert_eq!(scheme("no scheme"), None);
    }
}
