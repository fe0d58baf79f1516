//! Control over a script-executing browser, kept behind a small trait so the
//! page-driving code can run against fakes.
#[cfg(feature = "browser")]
mod chrome;
#[cfg(test)]
pub(crate) mod fake;

use std::{
    fmt::{self, Display, Formatter},
    ops::{Deref, DerefMut},
    time::Duration,
};

use crate::Result;

#[cfg(feature = "browser")]
pub use chrome::{ChromeDriver, ChromeFactory};

#[cfg(not(feature = "browser"))]
pub use disabled::ChromeFactory;

/// How to find an element on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    XPath(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css `{s}`"),
            Self::XPath(s) => write!(f, "xpath `{s}`"),
        }
    }
}

pub trait RenderingDriver {
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Waits until the element exists. Running out of time is an error.
    fn wait_for_element(&mut self, locator: &Locator, timeout: Duration) -> Result<()>;

    /// Clicks the first matching element from script (`element.click()`),
    /// so overlapping elements can't swallow the click.
    fn click(&mut self, locator: &Locator) -> Result<()>;

    /// Html of the page as currently rendered.
    fn current_html(&mut self) -> Result<String>;

    /// Releases the browser. Must not fail; problems are only logged.
    fn close(&mut self);
}

/// Starts fresh driver instances, one per fetch.
pub trait DriverFactory: Send + Sync + 'static {
    type Driver: RenderingDriver;

    fn launch(&self) -> Result<Self::Driver>;
}

/// Closes the wrapped driver when dropped, whichever way the scope is left.
#[derive(Debug)]
pub struct DriverGuard<D: RenderingDriver>(D);

impl<D: RenderingDriver> DriverGuard<D> {
    pub const fn new(driver: D) -> Self {
        Self(driver)
    }
}

impl<D: RenderingDriver> Deref for DriverGuard<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<D: RenderingDriver> DerefMut for DriverGuard<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<D: RenderingDriver> Drop for DriverGuard<D> {
    fn drop(&mut self) {
        self.0.close();
    }
}

#[cfg(not(feature = "browser"))]
mod disabled {
    use super::{DriverFactory, Locator, RenderingDriver};
    use crate::{config::Config, error::Error, Result};
    use std::time::Duration;

    /// Stand-in used when the crate is built without the `browser` feature.
    #[derive(Debug, Clone, Default)]
    pub struct ChromeFactory;

    impl ChromeFactory {
        pub fn from_config(_config: &Config) -> Self {
            Self
        }
    }

    pub enum Unavailable {}

    impl RenderingDriver for Unavailable {
        fn navigate(&mut self, _url: &str) -> Result<()> {
            match *self {}
        }
        fn wait_for_element(&mut self, _locator: &Locator, _timeout: Duration) -> Result<()> {
            match *self {}
        }
        fn click(&mut self, _locator: &Locator) -> Result<()> {
            match *self {}
        }
        fn current_html(&mut self) -> Result<String> {
            match *self {}
        }
        fn close(&mut self) {
            match *self {}
        }
    }

    impl DriverFactory for ChromeFactory {
        type Driver = Unavailable;

        fn launch(&self) -> Result<Self::Driver> {
            Err(Error::driver_error(
                "built without the `browser` feature, website scraping is unavailable",
            ))
        }
    }
}
