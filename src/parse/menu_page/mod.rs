//! Reads the rendered cafeteria page while one meal tab is active.
//!
//! The page repeats a `dl.nb-p-04-list-02` block per restaurant. The `dt`
//! holds the restaurant name, every `dd` is one course with a
//! `.meals-detail` region (time, course name, price) and a `.nb-p-04-03`
//! region holding one `p` per menu item.
mod course;
mod restaurant;

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::menu::RestaurantMenuMap;
use crate::parse::element_text;
use crate::static_selector;

pub use course::course_from_element;
pub use restaurant::{restaurant_from_element, restaurant_name};

static_selector!(RESTAURANT_SELECTOR <- "dl.nb-p-04-list-02");

/// Restaurant menus of the active tab. Never fails: anything that can't be
/// read is left out.
pub fn restaurants_from_html(html: &str) -> RestaurantMenuMap {
    let document = Html::parse_document(html);
    restaurants_from_element(document.root_element())
}

pub fn restaurants_from_element(element: ElementRef<'_>) -> RestaurantMenuMap {
    element
        .select(&RESTAURANT_SELECTOR)
        .filter_map(restaurant_from_element)
        .collect()
}

/// Names from every restaurant header (`dt`) in document order. Headers
/// without a name are kept as `None`, so position `n` is the `n`th header on
/// the page. Blocks without a header have no entry.
pub fn restaurant_names(html: &str) -> Vec<Option<String>> {
    static_selector!(HEADER_SELECTOR <- "dl.nb-p-04-list-02 > dt");
    static_selector!(HEADER_NAME_SELECTOR <- "span.ng-binding");
    let document = Html::parse_document(html);
    document
        .select(&HEADER_SELECTOR)
        .map(|header| {
            header
                .select(&HEADER_NAME_SELECTOR)
                .next()
                .map(element_text)
                .filter(|name| !name.is_empty())
        })
        .collect()
}

/// The date the page says it is showing, read from the date picker.
pub fn displayed_date(html: &str) -> Option<NaiveDate> {
    static_selector!(CURRENT_DATE_SELECTOR <- ".nb-p-time-select-current");
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(\d{4})\s*\.\s*(\d{1,2})\s*\.\s*(\d{1,2})").expect("regex should be valid")
    });

    let document = Html::parse_document(html);
    let text = element_text(document.select(&CURRENT_DATE_SELECTOR).next()?);
    let caps = re.captures(&text)?;
    NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn lunch_html() -> String {
        fs::read_to_string("./src/parse/html_examples/menu_page/lunch_tab.html").unwrap()
    }

    #[test]
    fn test_restaurants_from_html() {
        let menus = restaurants_from_html(&lunch_html());
        assert_eq!(
            menus.names().collect::<Vec<_>>(),
            ["카우잇츠(cau eats)", "(다빈치)라면", "참슬기식당(310관 B4층)"]
        );

        let cau_eats = menus.get("카우잇츠(cau eats)").unwrap();
        assert_eq!(cau_eats.len(), 2);
        assert_eq!(cau_eats[1].course_label, "중식(일품1)");
        assert_eq!(cau_eats[1].items, ["떡만두국", "김치"]);
        assert_eq!(cau_eats[1].price, "4,000 원");

        let ramen = menus.get("(다빈치)라면").unwrap();
        assert_eq!(ramen[0].time_range, "11:00~16:00");
        assert_eq!(ramen[0].course_label, "");
        assert_eq!(ramen[0].price, "2,500 원");
    }

    #[test]
    fn test_empty_courses_and_restaurants_are_omitted() {
        let menus = restaurants_from_html(&lunch_html());
        // the fixture has a closed restaurant whose only course is empty
        assert!(menus.get("생활관식당(블루미르308관)").is_none());
        // and an empty course next to a real one
        assert_eq!(menus.get("참슬기식당(310관 B4층)").map(<[_]>::len), Some(1));
        assert!(menus.courses().all(|c| !c.items.is_empty()));
    }

    #[test]
    fn test_unnamed_blocks_are_skipped() {
        let names = restaurant_names(&lunch_html());
        assert_eq!(names.len(), 5);
        assert_eq!(names[4], None);
        assert_eq!(restaurants_from_html(&lunch_html()).len(), 3);
    }

    #[test]
    fn test_names_follow_headers_only() {
        let html = r#"
            <dl class="nb-p-04-list-02"><dd>no header</dd></dl>
            <dl class="nb-p-04-list-02"><dt><span class="ng-binding">A</span></dt></dl>
            <dl class="nb-p-04-list-02"><dt></dt></dl>
            <dl class="nb-p-04-list-02"><dt><span class="ng-binding">B</span></dt></dl>"#;
        assert_eq!(
            restaurant_names(html),
            [Some("A".to_string()), None, Some("B".to_string())]
        );
    }

    #[test]
    fn test_page_without_menus() {
        let menus = restaurants_from_html("<html><body><p>점검 중입니다</p></body></html>");
        assert!(menus.is_empty());
        assert!(restaurant_names("").is_empty());
    }

    #[test]
    fn test_displayed_date() {
        assert_eq!(
            displayed_date(&lunch_html()),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(displayed_date("<div>no date here</div>"), None);
    }
}
