use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{HeaderValue, Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Custom protocol serving the bundled UI.
pub const SCHEME: &str = "userscripts";

/// The document the web view opens on launch.
///
/// WebView2 only exposes custom protocols as `http://<scheme>.localhost`.
pub fn start_url() -> String {
    if cfg!(target_os = "windows") {
        format!("http://{SCHEME}.localhost/")
    } else {
        format!("{SCHEME}://localhost/")
    }
}

impl WebViewManager {
    /// Create the web view as a child of `window`, covering `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(color) = config.background {
            builder = builder.with_background_color(color);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        // Outside links leave the app
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_new_window_handler(builder, Arc::clone(&self.events));

        builder = self.attach_custom_protocol(builder);
        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;
        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
        })
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            warn!("no content provider set, {SCHEME}:// will not resolve");
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            serve(&cp, request.uri().path())
        })
    }
}

/// Answer one custom protocol request.
fn serve(provider: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    match provider.resolve(path) {
        Some((mime, data)) => {
            let mut response = respond(StatusCode::OK, &mime, data.into_owned());
            let origin = start_url();
            if let Ok(value) = HeaderValue::from_str(origin.trim_end_matches('/')) {
                response
                    .headers_mut()
                    .insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
            response
        }
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            respond(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
        }
    }
}

fn respond(status: StatusCode, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(body));
    *response.status_mut() = status;
    if let Ok(value) = HeaderValue::from_str(mime) {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}
