use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use super::{DriverFactory, Locator, RenderingDriver};
use crate::{error::Error, menu::MealPeriod, Result};

/// What the fake browser shows.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    /// Html right after navigation.
    pub initial_html: String,
    /// Html after clicking a period's tab.
    pub tabs: HashMap<MealPeriod, String>,
    /// Tabs that never show up.
    pub missing_tabs: Vec<MealPeriod>,
    /// Tabs that show up but refuse the click.
    pub unclickable_tabs: Vec<MealPeriod>,
    /// Restaurant headers refuse every click.
    pub unclickable_headers: bool,
}

#[derive(Debug, Default)]
pub struct FakeDriver {
    page: FakePage,
    html: String,
    closed: Arc<AtomicBool>,
    pub clicks: Vec<Locator>,
}

impl FakeDriver {
    pub fn new(page: FakePage) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    fn tab_for(locator: &Locator) -> Option<MealPeriod> {
        match locator {
            Locator::XPath(x) if x.starts_with("//em") => MealPeriod::ALL
                .into_iter()
                .find(|p| x.contains(p.tab_marker())),
            _ => None,
        }
    }

    fn exists(&self, locator: &Locator) -> bool {
        if let Some(period) = Self::tab_for(locator) {
            return !self.page.missing_tabs.contains(&period);
        }
        match locator {
            Locator::Css(css) => self.html.contains(css.trim_start_matches('.')),
            Locator::XPath(_) => true,
        }
    }

    fn refuses_click(&self, locator: &Locator) -> bool {
        match (Self::tab_for(locator), locator) {
            (Some(period), _) => self.page.unclickable_tabs.contains(&period),
            (None, Locator::XPath(x)) => self.page.unclickable_headers && x.contains("/dt"),
            (None, Locator::Css(_)) => false,
        }
    }
}

impl RenderingDriver for FakeDriver {
    fn navigate(&mut self, _url: &str) -> Result<()> {
        self.html = self.page.initial_html.clone();
        Ok(())
    }

    fn wait_for_element(&mut self, locator: &Locator, _timeout: Duration) -> Result<()> {
        if self.exists(locator) {
            Ok(())
        } else {
            Err(Error::driver_error(format!("timed out waiting for {locator}")))
        }
    }

    fn click(&mut self, locator: &Locator) -> Result<()> {
        if !self.exists(locator) {
            return Err(Error::driver_error(format!("no element for {locator}")));
        }
        if self.refuses_click(locator) {
            return Err(Error::driver_error(format!("{locator} is not clickable")));
        }
        if let Some(period) = Self::tab_for(locator) {
            self.html = self.page.tabs.get(&period).cloned().unwrap_or_default();
        }
        self.clicks.push(locator.clone());
        Ok(())
    }

    fn current_html(&mut self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn close(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Hands out [`FakeDriver`]s and remembers how many were started and closed.
#[derive(Debug, Default)]
pub struct FakeFactory {
    pub page: FakePage,
    pub fail_launch: bool,
    pub launched: AtomicUsize,
    closed: Mutex<Vec<Arc<AtomicBool>>>,
}

impl FakeFactory {
    pub fn new(page: FakePage) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// A factory whose every launch fails, as when chrome is not installed.
    pub fn failing() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    pub fn all_closed(&self) -> bool {
        self.closed
            .lock()
            .expect("lock should not be poisoned")
            .iter()
            .all(|c| c.load(Ordering::SeqCst))
    }
}

impl DriverFactory for FakeFactory {
    type Driver = FakeDriver;

    fn launch(&self) -> Result<Self::Driver> {
        if self.fail_launch {
            return Err(Error::driver_error("chrome not installed"));
        }
        self.launched.fetch_add(1, Ordering::SeqCst);
        let driver = FakeDriver::new(self.page.clone());
        self.closed
            .lock()
            .expect("lock should not be poisoned")
            .push(driver.closed_flag());
        Ok(driver)
    }
}
