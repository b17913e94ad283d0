// Accessibility helpers

/// Toggle high-contrast mode for accessibility
///
/// Adds or removes the 'hc' class from the HTML element and persists the choice.
pub fn set_high_contrast(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };

        if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
            let _ = if enabled {
                html.class_list().add_1("hc")
            } else {
                html.class_list().remove_1("hc")
            };
        }

        if let Some(storage) = win.local_storage().ok().flatten() {
            let _ = storage.set_item("doolhof.hc", if enabled { "1" } else { "0" });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = enabled;
}

/// Check if high-contrast mode is currently enabled
///
/// Reads the saved preference from localStorage. Returns false if no
/// preference is stored.
#[must_use]
pub fn high_contrast_enabled() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item("doolhof.hc").ok().flatten())
            .is_some_and(|v| v == "1")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
