//! Local content serving via custom protocol.
//!
//! The `userscripts://` scheme serves the bundled UI straight from the
//! asset directory, so no local HTTP server is needed.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Served for the root path and for any path ending in `/`.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Serves local files from a base directory via custom protocol.
///
/// A request for `userscripts://localhost/js/app.js` resolves to
/// `{base_dir}/js/app.js`; `userscripts://localhost/` resolves to
/// `{base_dir}/index.html`.
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: PathBuf,
    /// In-memory overrides (for generated content).
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and content bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = document_path(path);

        if let Some((mime, data)) = self.overrides.get(&*clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(&*clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the root
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    /// The base directory for assets.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Strip the leading `/` and map directory requests to the index document.
fn document_path(path: &str) -> Cow<'_, str> {
    let clean = path.trim_start_matches('/');
    if clean.is_empty() {
        Cow::Borrowed(INDEX_DOCUMENT)
    } else if clean.ends_with('/') {
        Cow::Owned(format!("{clean}{INDEX_DOCUMENT}"))
    } else {
        Cow::Borrowed(clean)
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("map") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        Some("wasm") => "application/wasm",
        Some("txt") => "text/plain",
        Some("xml") => "application/xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// An asset root shaped like a built UI bundle.
    fn bundle() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("index.html"), "<html>app</html>").unwrap();
        fs::create_dir_all(root.join("js")).unwrap();
        fs::write(root.join("js/app.js"), "console.log(1)").unwrap();
        fs::write(root.join("style.css"), "body{}").unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/index.html"), "<html>docs</html>").unwrap();
        tmp
    }

    // -----------------------------------------------------------------
    // Document resolution
    // -----------------------------------------------------------------

    #[test]
    fn root_serves_index() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        for path in ["", "/"] {
            let (mime, data) = cp.resolve(path).unwrap();
            assert_eq!(mime.as_ref(), "text/html");
            assert_eq!(data.as_ref(), b"<html>app</html>");
        }
    }

    #[test]
    fn trailing_slash_serves_nested_index() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        let (_, data) = cp.resolve("/docs/").unwrap();
        assert_eq!(data.as_ref(), b"<html>docs</html>");
    }

    #[test]
    fn nested_assets_resolve_with_mime() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        let (mime, _) = cp.resolve("/js/app.js").unwrap();
        assert_eq!(mime.as_ref(), "application/javascript");
        let (mime, _) = cp.resolve("style.css").unwrap();
        assert_eq!(mime.as_ref(), "text/css");
    }

    #[test]
    fn directory_without_slash_is_not_served() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        assert!(cp.resolve("docs").is_none());
    }

    #[test]
    fn nonexistent_file_returns_none() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        assert!(cp.resolve("does_not_exist.html").is_none());
    }

    #[test]
    fn missing_root_serves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cp = ContentProvider::new(tmp.path().join("absent"));
        assert!(cp.resolve("/").is_none());
    }

    // -----------------------------------------------------------------
    // Security: directory traversal
    // -----------------------------------------------------------------

    #[test]
    fn traversal_with_dotdot_is_blocked() {
        let tmp = bundle();
        let root = tmp.path().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(tmp.path().join("secret.txt"), "nope").unwrap();

        let cp = ContentProvider::new(&root);
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("js/../../secret.txt").is_none());
    }

    #[test]
    fn traversal_with_absolute_path_is_blocked() {
        let tmp = bundle();
        let cp = ContentProvider::new(tmp.path());
        assert!(cp.resolve("/etc/passwd").is_none());
        assert!(cp.resolve("//etc/passwd").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_out_of_root_is_blocked() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("leak.txt"), "secret").unwrap();
        let tmp = bundle();
        std::os::unix::fs::symlink(outside.path().join("leak.txt"), tmp.path().join("leak.txt"))
            .unwrap();

        let cp = ContentProvider::new(tmp.path());
        assert!(cp.resolve("leak.txt").is_none());
    }

    // -----------------------------------------------------------------
    // MIME types
    // -----------------------------------------------------------------

    #[test]
    fn mime_type_html() {
        assert_eq!(mime_from_extension(Path::new("test.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("test.htm")), "text/html");
    }

    #[test]
    fn mime_type_javascript() {
        assert_eq!(
            mime_from_extension(Path::new("module.mjs")),
            "application/javascript"
        );
    }

    #[test]
    fn mime_type_unknown_is_octet_stream() {
        assert_eq!(
            mime_from_extension(Path::new("data.xyz")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_from_extension(Path::new("LICENSE")),
            "application/octet-stream"
        );
    }

    // -----------------------------------------------------------------
    // In-memory overrides
    // -----------------------------------------------------------------

    #[test]
    fn override_takes_precedence() {
        let tmp = bundle();
        let mut cp = ContentProvider::new(tmp.path());
        cp.add_override("index.html", "text/html", b"<html>override</html>".to_vec());

        let (mime, data) = cp.resolve("/").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), b"<html>override</html>");
    }

    #[test]
    fn override_for_nonexistent_path() {
        let tmp = bundle();
        let mut cp = ContentProvider::new(tmp.path());
        cp.add_override("app.json", "application/json", br#"{"version":"1"}"#.to_vec());
        let (mime, _) = cp.resolve("/app.json").unwrap();
        assert_eq!(mime.as_ref(), "application/json");
    }
}
