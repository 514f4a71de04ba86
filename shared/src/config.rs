use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
}

/// The three upload endpoints exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    ProductDetails,
    DiyGenerate,
    ReportAnalysis,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ProductDetails => "/eco-agent/product-details",
            Endpoint::DiyGenerate => "/diy/generate",
            Endpoint::ReportAnalysis => "/report-storage/analyse-and-upload",
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Blank overrides fall back to [`DEFAULT_API_BASE_URL`]. Trailing slashes are dropped.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self {
                api_base_url: url.trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }

    /// Resolved on first use and kept for the lifetime of the page.
    /// The override is `ECOVATION_API_URL` as seen by the compiler; the bundle has no process env.
    pub fn global() -> &'static ApiConfig {
        static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
        CONFIG.get_or_init(|| Self::from_override(option_env!("ECOVATION_API_URL")))
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base_url, endpoint.path())
    }
}
