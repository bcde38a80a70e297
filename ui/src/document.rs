//! Browser document access for the consent widget: script injection and the
//! page scroll lock used while the preferences panel is open.

use consent::{ConsentError, Result, ScriptHost, ScriptLoading};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// The live `window.document`.
pub struct BrowserDocument;

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ConsentError::DocumentUnavailable)
}

impl ScriptHost for BrowserDocument {
    fn has_script(&self, _url: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        if let Ok(document) = document() {
            let scripts = document.scripts();
            return (0..scripts.length())
                .filter_map(|i| scripts.item(i))
                .any(|script| script.get_attribute("src").as_deref() == Some(_url));
        }
        false
    }

    fn append_script(&self, _url: &str, _loading: ScriptLoading) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = document()?;
            let script = document
                .create_element("script")
                .map_err(|e| ConsentError::Document(format!("{e:?}")))?
                .dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(|_| ConsentError::Document("not a script element".to_string()))?;
            script.set_src(_url);
            match _loading {
                ScriptLoading::Async => script.set_async(true),
                ScriptLoading::Defer => script.set_defer(true),
                // injected scripts are async unless told otherwise
                ScriptLoading::Blocking => script.set_async(false),
            }
            let appended = match document.head() {
                Some(head) => head.append_child(&script),
                None => document
                    .body()
                    .ok_or(ConsentError::DocumentUnavailable)?
                    .append_child(&script),
            };
            appended.map_err(|e| ConsentError::Document(format!("{e:?}")))?;
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        Err(ConsentError::DocumentUnavailable)
    }
}

/// Adds `<script src=url>` to the page unless it is already there.
pub fn inject_script(url: &str, loading: ScriptLoading) -> Result<bool> {
    consent::inject_script(&BrowserDocument, url, loading)
}

/// Inline body styles that pin the page at `offset`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn scroll_lock_styles(offset: f64) -> [(&'static str, String); 4] {
    [
        ("position", "fixed".to_string()),
        ("top", format!("-{offset}px")),
        ("width", "100%".to_string()),
        ("overflow", "hidden".to_string()),
    ]
}

/// Pins the body at the current scroll offset so the page behind an open
/// dialog cannot scroll (including iOS Safari). Returns the offset to restore.
pub fn lock_page_scroll() -> f64 {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let offset = window.scroll_y().unwrap_or_default();
        if let Some(body) = window.document().and_then(|d| d.body()) {
            let style = body.style();
            for (property, value) in scroll_lock_styles(offset) {
                if let Err(e) = style.set_property(property, &value) {
                    debug!("could not set body {property}: {e:?}");
                }
            }
        }
        return offset;
    }
    0.0
}

pub fn unlock_page_scroll(_offset: f64) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Some(body) = window.document().and_then(|d| d.body()) {
            let style = body.style();
            for (property, _) in scroll_lock_styles(_offset) {
                if let Err(e) = style.remove_property(property) {
                    debug!("could not clear body {property}: {e:?}");
                }
            }
        }
        window.scroll_to_with_x_and_y(0.0, _offset);
    }
}
