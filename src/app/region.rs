use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::motion::region::{apply_theme_tokens, Region, ThemeSink};

#[derive(Debug, Clone, Copy)]
pub struct RegionContext(pub RwSignal<Region>);

/// Writes theme tokens onto the root element's inline style.
struct DocumentTheme(Option<web_sys::HtmlElement>);

impl DocumentTheme {
    fn root() -> Self {
        Self(
            document()
                .document_element()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()),
        )
    }
}

impl ThemeSink for DocumentTheme {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Some(root) = &self.0 {
            _ = root.style().set_property(name, value);
        }
    }
}

pub fn provide_region_context() -> RwSignal<Region> {
    let region = RwSignal::new(Region::default());
    provide_context(RegionContext(region));

    Effect::new(move |_| {
        let region = region.get();
        log::debug!("applying {region} theme tokens");
        apply_theme_tokens(region, &mut DocumentTheme::root());
    });

    region
}

pub fn use_region() -> RwSignal<Region> {
    expect_context::<RegionContext>().0
}
