//! [`RenderingDriver`] backed by a local Chrome/Chromium through the devtools
//! protocol.
use std::{ffi::OsStr, path::PathBuf, sync::Arc, time::Duration};

use headless_chrome::{Browser, Element, LaunchOptions, Tab};

use super::{DriverFactory, Locator, RenderingDriver};
use crate::{config::Config, error::Error, Result};

static USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Keeps the browser process alive between calls when no action is running.
const IDLE_TIMEOUT: Duration = Duration::from_secs(120);

pub struct ChromeDriver {
    // dropping the browser kills the chrome process
    browser: Option<Browser>,
    tab: Arc<Tab>,
}

impl ChromeDriver {
    pub fn launch(headless: bool, path: Option<PathBuf>) -> Result<Self> {
        if headless {
            log::debug!("launching headless chrome");
        } else {
            log::debug!("launching chrome with a visible window");
        }
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .sandbox(false)
            .window_size(Some((1920, 1080)))
            .idle_browser_timeout(IDLE_TIMEOUT)
            .path(path)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(Error::driver_error)?;
        let browser = Browser::new(options)
            .map_err(|e| Error::driver_error(format!("Chrome launch failed: {e}")))?;
        let tab = browser.new_tab().map_err(Error::driver_error)?;
        tab.set_user_agent(USER_AGENT, None, None)
            .map_err(Error::driver_error)?;
        Ok(Self {
            browser: Some(browser),
            tab,
        })
    }

    fn find(&self, locator: &Locator) -> Result<Element<'_>> {
        match locator {
            Locator::Css(css) => self.tab.find_element(css),
            Locator::XPath(xpath) => self.tab.find_element_by_xpath(xpath),
        }
        .map_err(|e| Error::driver_error(format!("{locator} not found: {e}")))
    }
}

impl RenderingDriver for ChromeDriver {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| Error::driver_error(format!("Navigate to {url} failed: {e}")))?;
        Ok(())
    }

    fn wait_for_element(&mut self, locator: &Locator, timeout: Duration) -> Result<()> {
        match locator {
            Locator::Css(css) => self.tab.wait_for_element_with_custom_timeout(css, timeout),
            Locator::XPath(xpath) => self.tab.wait_for_xpath_with_custom_timeout(xpath, timeout),
        }
        .map(drop)
        .map_err(|e| Error::driver_error(format!("waiting for {locator} failed: {e}")))
    }

    fn click(&mut self, locator: &Locator) -> Result<()> {
        self.find(locator)?
            .call_js_fn("function() { this.click(); }", vec![], false)
            .map(drop)
            .map_err(|e| Error::driver_error(format!("clicking {locator} failed: {e}")))
    }

    fn current_html(&mut self) -> Result<String> {
        self.tab.get_content().map_err(Error::driver_error)
    }

    fn close(&mut self) {
        if self.browser.is_none() {
            return;
        }
        if let Err(e) = self.tab.close(false) {
            // the process may already be gone
            log::debug!("closing chrome tab failed: {e}");
        }
        self.browser = None;
    }
}

/// Launches a [`ChromeDriver`] per fetch with the configured binary and mode.
#[derive(Debug, Clone)]
pub struct ChromeFactory {
    headless: bool,
    path: Option<PathBuf>,
}

impl ChromeFactory {
    pub fn from_config(config: &Config) -> Self {
        Self {
            headless: config.headless,
            path: config.chrome_path.clone(),
        }
    }
}

impl DriverFactory for ChromeFactory {
    type Driver = ChromeDriver;

    fn launch(&self) -> Result<Self::Driver> {
        ChromeDriver::launch(self.headless, self.path.clone())
    }
}
