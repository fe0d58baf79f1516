//! Turns a date into a [`MenuSnapshot`], picking the source from the config:
//! the menu api first, then the website, then the built-in sample menus.
mod sample;

use std::{sync::Arc, thread::sleep};

use async_trait::async_trait;
use chrono::NaiveDate;
use url::Url;

use crate::{
    config::{Config, Timings},
    error::Error,
    fetch,
    menu::MenuSnapshot,
    navigate, parse,
    render::{DriverFactory, DriverGuard, Locator, RenderingDriver},
    Result,
};

pub use sample::sample_snapshot;

/// Marker element that only exists once the page scripts rendered the menu.
pub const CONTENT_SELECTOR: &str = ".nb-p-04-content";

/// Anything that can produce the menu of a date.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn menu_for(&self, date: NaiveDate) -> Result<MenuSnapshot>;
}

#[derive(Debug)]
pub struct MenuResolver<F> {
    config: Arc<Config>,
    client: reqwest::Client,
    factory: Arc<F>,
}

impl<F: DriverFactory> MenuResolver<F> {
    pub fn new(config: Arc<Config>, factory: F) -> Self {
        Self {
            config,
            client: fetch::make_client(),
            factory: Arc::new(factory),
        }
    }

    pub async fn resolve(&self, date: NaiveDate) -> Result<MenuSnapshot> {
        if let Some(api_url) = &self.config.api_url {
            let snapshot =
                match fetch::menu_from_api(&self.client, api_url, &self.config.school_code, date)
                    .await
                {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        log::warn!("menu api failed, using the sample menu: {e}");
                        sample_snapshot(date)
                    }
                };
            return Ok(snapshot);
        }

        if let Some(website_url) = &self.config.website_url {
            let factory = Arc::clone(&self.factory);
            let url = website_url.clone();
            let timings = self.config.timings;
            return tokio::task::spawn_blocking(move || {
                scrape_menu_page(&*factory, &url, &timings, date)
            })
            .await?;
        }

        log::info!("no menu source configured, using the sample menu");
        Ok(sample_snapshot(date))
    }
}

#[async_trait]
impl<F: DriverFactory> MenuSource for MenuResolver<F> {
    async fn menu_for(&self, date: NaiveDate) -> Result<MenuSnapshot> {
        self.resolve(date).await
    }
}

/// Opens the menu page in a fresh browser and reads every meal tab. The
/// browser is closed on every way out of this function.
pub fn scrape_menu_page<F: DriverFactory + ?Sized>(
    factory: &F,
    url: &Url,
    timings: &Timings,
    date: NaiveDate,
) -> Result<MenuSnapshot> {
    let mut driver = DriverGuard::new(factory.launch()?);

    log::info!("opening {url}");
    driver.navigate(url.as_str())?;
    sleep(timings.initial_settle);
    driver
        .wait_for_element(&Locator::css(CONTENT_SELECTOR), timings.page_load)
        .map_err(|e| {
            log::warn!("menu container never showed up: {e}");
            Error::extraction_error("페이지 로딩 시간 초과. 크롤링에 실패했습니다.")
        })?;
    sleep(timings.script_settle);

    match driver.current_html().map(|html| parse::displayed_date(&html)) {
        Ok(Some(shown)) if shown != date => {
            log::warn!("page shows {shown} but {date} was requested");
        }
        Ok(Some(shown)) => log::debug!("page shows {shown}"),
        Ok(None) => log::debug!("page does not show a date"),
        Err(e) => log::debug!("could not read the page date: {e}"),
    }

    navigate::read_meal_tabs(&mut *driver, timings, date)
}
