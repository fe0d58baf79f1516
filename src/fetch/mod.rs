//! Http access: the remote menu api and a shared client builder.
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::menu::{CourseOffering, MenuSnapshot, RestaurantMenuMap};

pub const API_TIMEOUT: Duration = Duration::from_secs(5);

/// Restaurant name the api items are filed under, since the api has no
/// restaurant breakdown.
pub const API_RESTAURANT: &str = "급식";

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Body of the menu api: flat item names per meal, missing meals are empty.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ApiMenu {
    #[serde(default)]
    pub breakfast: Vec<String>,
    #[serde(default)]
    pub lunch: Vec<String>,
    #[serde(default)]
    pub dinner: Vec<String>,
}

impl ApiMenu {
    /// Files each meal's items under a single [`API_RESTAURANT`] entry so the
    /// snapshot has the same shape as a scraped one.
    pub fn into_snapshot(self, date: NaiveDate) -> MenuSnapshot {
        let wrap = |items: Vec<String>| -> RestaurantMenuMap {
            [(API_RESTAURANT, vec![CourseOffering::items_only(items)])]
                .into_iter()
                .collect()
        };
        MenuSnapshot::new(date, wrap(self.breakfast), wrap(self.lunch), wrap(self.dinner))
    }
}

#[instrument(skip(client, api_url, school_code, date), fields(
    date = %date.format("%Y-%m-%d"),
), level = Level::DEBUG)]
pub async fn menu_from_api(
    client: &reqwest::Client,
    api_url: &Url,
    school_code: &str,
    date: NaiveDate,
) -> crate::Result<MenuSnapshot> {
    let mut url = api_url.clone();
    url.query_pairs_mut()
        .append_pair("date", date.format("%Y-%m-%d").to_string().as_str())
        .append_pair("school_code", school_code);
    let start = std::time::Instant::now();
    let menu: ApiMenu = client
        .get(url)
        .timeout(API_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    log::debug!("Got menu from api in \t {:?}", start.elapsed());
    Ok(menu.into_snapshot(date))
}
