//! API Configuration
//!
//! Where the menu server lives. Resolved once at startup.

/// Used when neither the host page nor the build names a server
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// `<meta name="food-api-url" content="...">` overrides the build-time URL
const META_SELECTOR: &str = "meta[name=\"food-api-url\"]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Host page meta tag, then `FOOD_API_URL` at build time, then the default
    pub fn resolve() -> Self {
        let from_page = page_meta_url();
        Self::from_sources(from_page.as_deref(), option_env!("FOOD_API_URL"))
    }

    fn from_sources(page: Option<&str>, build: Option<&str>) -> Self {
        let chosen = [page, build]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self::new(chosen)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn page_meta_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(META_SELECTOR).ok()??;
    meta.get_attribute("content")
}
