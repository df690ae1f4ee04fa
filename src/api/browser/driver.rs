use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::debug;

use super::ExtractionError;

/// Minimal page access needed for label-based extraction
pub trait PageDriver {
    /// Navigate to `url` and wait for the initial document
    fn open(&mut self, url: &str) -> Result<(), ExtractionError>;

    /// Text of the element following the first node whose text contains
    /// `label`, or `None` if it is not rendered (yet)
    fn text_after_label(&self, label: &str) -> Option<String>;
}

/// A headless Chrome process with a single tab
///
/// The browser process is killed when the session is dropped, whichever
/// way the extraction ended.
pub struct HeadlessChromeSession {
    tab: Arc<Tab>,
    // Held for its Drop, which terminates the process
    _browser: Browser,
}

impl HeadlessChromeSession {
    pub fn launch() -> Result<Self, ExtractionError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| ExtractionError::Browser(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ExtractionError::Browser(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ExtractionError::Browser(e.to_string()))?;

        debug!("Headless browser launched");
        Ok(Self { tab, _browser: browser })
    }
}

impl PageDriver for HeadlessChromeSession {
    fn open(&mut self, url: &str) -> Result<(), ExtractionError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ExtractionError::Browser(format!("navigation to {} failed: {}", url, e)))?;
        Ok(())
    }

    fn text_after_label(&self, label: &str) -> Option<String> {
        let xpath = label_sibling_xpath(label);
        let element = self.tab.find_element_by_xpath(&xpath).ok()?;
        element.get_inner_text().ok()
    }
}

impl Drop for HeadlessChromeSession {
    fn drop(&mut self) {
        debug!("Closing headless browser");
    }
}

/// XPath of the first element sibling after a node containing `label`
pub fn label_sibling_xpath(label: &str) -> String {
    format!(
        "//*[text()[contains(., '{}')]]/following-sibling::*[1]",
        label.replace('\'', "")
    )
}
