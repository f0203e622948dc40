//! Thin window accessors for the browser build
//!
//! Server-side renders see empty values; everything that depends on them is
//! re-evaluated on the client.

/// Origin the console document was loaded from
pub fn document_origin() -> String {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        String::new()
    }
}

/// Location fragment of the current document, including the leading `#`
pub fn location_fragment() -> String {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        String::new()
    }
}

/// Open `url` in a named browser window
pub fn open_window(url: &str, name: &str) {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) =
            window.open_with_url_and_target_and_features(url, name, "noopener,noreferrer")
        {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = (url, name);
    }
}
