//! Process configuration, read once at start-up and passed into the resolver,
//! the browser factory and the delivery adapters.
use std::{
    env,
    fmt::{self, Display, Formatter},
    path::PathBuf,
    time::Duration,
};

use url::Url;

#[derive(Debug)]
pub enum Error {
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    InvalidPort(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { var, source } => write!(f, "{var} is not a valid url: {source}"),
            Self::InvalidPort(value) => write!(f, "PORT should be a port number, got `{value}`"),
        }
    }
}

impl std::error::Error for Error {}

/// Bounded waits and settle pauses used while driving the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause right after navigation, before looking for anything.
    pub initial_settle: Duration,
    /// Upper bound for the menu container to appear.
    pub page_load: Duration,
    /// Pause after the container appears so page scripts can finish.
    pub script_settle: Duration,
    /// Upper bound for a meal tab control to appear.
    pub tab_wait: Duration,
    /// Pause after a tab click for its content to load.
    pub tab_settle: Duration,
    /// Pause after expanding a restaurant block.
    pub expand_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            initial_settle: Duration::from_secs(3),
            page_load: Duration::from_secs(10),
            script_settle: Duration::from_secs(2),
            tab_wait: Duration::from_secs(10),
            tab_settle: Duration::from_millis(1500),
            expand_settle: Duration::from_millis(500),
        }
    }
}

impl Timings {
    /// No pauses at all, for driving fakes in tests.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            initial_settle: Duration::ZERO,
            page_load: Duration::ZERO,
            script_settle: Duration::ZERO,
            tab_wait: Duration::ZERO,
            tab_settle: Duration::ZERO,
            expand_settle: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Option<Url>,
    pub school_code: String,
    pub website_url: Option<Url>,
    pub webhook_url: Option<Url>,
    pub slack_bot_token: Option<String>,
    pub headless: bool,
    pub chrome_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub timings: Timings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            school_code: String::new(),
            website_url: None,
            webhook_url: None,
            slack_bot_token: None,
            headless: true,
            chrome_path: None,
            host: "127.0.0.1".to_string(),
            port: 3000,
            timings: Timings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let url = |var: &'static str| {
            get(var)
                .map(|v| Url::parse(&v).map_err(|source| Error::InvalidUrl { var, source }))
                .transpose()
        };

        let defaults = Self::default();
        let headless = ["SELENIUM_HEADLESS", "MENU_HEADLESS"]
            .into_iter()
            .find_map(|var| get(var).map(|v| parse_flag(var, &v)))
            .unwrap_or(defaults.headless);
        let port = match get("PORT") {
            Some(p) => p.parse().map_err(|_| Error::InvalidPort(p))?,
            None => defaults.port,
        };

        Ok(Self {
            api_url: url("SCHOOL_MENU_API_URL")?,
            school_code: get("SCHOOL_CODE").unwrap_or_default(),
            website_url: url("SCHOOL_MENU_WEBSITE_URL")?,
            webhook_url: url("SLACK_WEBHOOK_URL")?,
            slack_bot_token: get("SLACK_BOT_TOKEN"),
            headless,
            chrome_path: get("CHROME_PATH")
                .map(PathBuf::from)
                .or_else(platform_chrome_path),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            timings: defaults.timings,
        })
    }
}

/// Only `true`, `1` and `yes` switch a flag on, anything else is off.
fn parse_flag(var: &str, value: &str) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => {
            log::warn!("{var}={value:?} is not `true` or `false`, treating it as false");
            false
        }
    }
}

/// Well known Chrome install location for this OS, if one exists on disk.
/// `None` leaves discovery to the browser launcher.
fn platform_chrome_path() -> Option<PathBuf> {
    let candidates: &[&str] = if cfg!(target_os = "linux") {
        &[
            "/usr/bin/google-chrome-stable",
            "/usr/bin/google-chrome",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
        ]
    } else if cfg!(target_os = "macos") {
        &["/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"]
    } else if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ]
    } else {
        &[]
    };
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
