use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;

/// Headless Chrome session for page-level checks.
pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow!("building chrome launch options: {e}"))?;

        Ok(Self {
            browser: ChromeBrowser::new(options)?,
        })
    }

    /// Open `url` in a fresh tab and wait for navigation to settle.
    pub fn open(&self, url: &str) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn has(&self, selector: &str) -> bool {
        self.tab.wait_for_element(selector).is_ok()
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_inner_text()?)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    /// Text direction of the page's locale root.
    pub fn direction(&self) -> Result<Option<String>> {
        self.attribute(".locale_root", "dir")
    }
}
