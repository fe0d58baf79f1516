//! Walks the meal tabs of the menu page and hands each one to the parser.
use std::thread::sleep;

use chrono::NaiveDate;

use crate::{
    config::Timings,
    error::Error,
    menu::{MealPeriod, MenuSnapshot, RestaurantMenuMap},
    parse,
    render::{Locator, RenderingDriver},
    Result,
};

const RESTAURANT_HEADER_XPATH: &str =
    "//dl[contains(concat(' ', normalize-space(@class), ' '), ' nb-p-04-list-02 ')]/dt";

/// The tab label of a meal period: an `em` whose text contains the marker.
#[must_use]
pub fn tab_locator(period: MealPeriod) -> Locator {
    Locator::xpath(format!("//em[contains(text(), '{}')]", period.tab_marker()))
}

/// Header of the `index`th (0 based) restaurant block.
fn restaurant_header(index: usize) -> Locator {
    Locator::xpath(format!("({RESTAURANT_HEADER_XPATH})[{}]", index + 1))
}

/// Reads every meal tab into a snapshot for `date`.
///
/// A tab that can't be found or read leaves its period empty. If every period
/// comes back empty the tab that is open by default is read as lunch, and if
/// that is empty too the whole extraction fails.
pub fn read_meal_tabs<D: RenderingDriver + ?Sized>(
    driver: &mut D,
    timings: &Timings,
    date: NaiveDate,
) -> Result<MenuSnapshot> {
    let mut snapshot = MenuSnapshot::empty(date);

    for period in MealPeriod::ALL {
        log::info!("opening {period} tab");
        let menus = match read_tab(driver, period, timings) {
            Ok(menus) => {
                log::info!(
                    "{period}: {} restaurants, {} courses",
                    menus.len(),
                    menus.courses().count()
                );
                menus
            }
            Err(e) => {
                log::warn!("could not read the {period} tab: {e}");
                RestaurantMenuMap::new()
            }
        };
        *snapshot.meal_mut(period) = menus;
    }

    if snapshot.is_empty() {
        log::warn!("no tab gave a menu, reading the default tab as lunch");
        match driver.current_html() {
            Ok(html) => snapshot.lunch = parse::restaurants_from_html(&html),
            Err(e) => log::warn!("could not read the default tab: {e}"),
        }
    }

    if snapshot.is_empty() {
        return Err(Error::extraction_error(
            "메뉴를 찾을 수 없습니다. 크롤링에 실패했습니다.",
        ));
    }
    log::info!(
        "menu extraction done, {} restaurants in total",
        snapshot.restaurant_count()
    );
    Ok(snapshot)
}

fn read_tab<D: RenderingDriver + ?Sized>(
    driver: &mut D,
    period: MealPeriod,
    timings: &Timings,
) -> Result<RestaurantMenuMap> {
    let tab = tab_locator(period);
    driver.wait_for_element(&tab, timings.tab_wait)?;
    driver.click(&tab)?;
    sleep(timings.tab_settle);
    expand_restaurants(driver, timings);
    let html = driver.current_html()?;
    Ok(parse::restaurants_from_html(&html))
}

/// Clicks every named restaurant header so collapsed blocks render their
/// courses. Failures are ignored; a block is parsed in whatever state it is.
fn expand_restaurants<D: RenderingDriver + ?Sized>(driver: &mut D, timings: &Timings) {
    let html = match driver.current_html() {
        Ok(html) => html,
        Err(e) => {
            log::debug!("skipping restaurant expansion: {e}");
            return;
        }
    };
    for (index, name) in parse::restaurant_names(&html).into_iter().enumerate() {
        let Some(name) = name else { continue };
        match driver.click(&restaurant_header(index)) {
            Ok(()) => sleep(timings.expand_settle),
            Err(e) => log::debug!("could not expand {name} (ignored): {e}"),
        }
    }
}
