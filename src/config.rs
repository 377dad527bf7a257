use std::time::Duration;

/// Element ids the kiosk page is laid out with.
pub mod ids {
    pub const INPUT: &str = "codigoBarras";
    pub const VIDEO: &str = "video";
    pub const INFO_CARD: &str = "infoCard";
    pub const PDF_VIEWER: &str = "pdfViewer";
}

#[derive(Debug, Clone, PartialEq)]
pub struct KioskConfig {
    /// Prefix for the backend endpoints. Empty means same origin.
    pub api_base_url: String,
    pub snackbar_duration: Duration,
    /// Pause between a camera decode and the search it triggers.
    pub settle_delay: Duration,
    pub debounce_delay: Duration,
    pub scan_interval: Duration,
    pub clock_tick: Duration,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            snackbar_duration: Duration::from_millis(4000),
            settle_delay: Duration::from_millis(500),
            debounce_delay: Duration::from_millis(300),
            scan_interval: Duration::from_millis(100),
            clock_tick: Duration::from_millis(1000),
        }
    }
}

impl KioskConfig {
    /// Defaults, with the API base taken from `KIOSK_API_BASE_URL` at build time if set.
    pub fn from_build_env() -> Self {
        Self::default().with_api_base_url(option_env!("KIOSK_API_BASE_URL").unwrap_or_default())
    }

    pub fn with_api_base_url(mut self, base: &str) -> Self {
        self.api_base_url = base.trim_end_matches('/').to_owned();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
