use scraper::ElementRef;

use super::course::course_from_element;
use crate::menu::CourseOffering;
use crate::parse::element_text;
use crate::static_selector;

static_selector!(NAME_SELECTOR <- "dt span.ng-binding");

/// Display name of a restaurant block, `None` if it has no (non blank) name.
pub fn restaurant_name(element: ElementRef<'_>) -> Option<String> {
    element
        .select(&NAME_SELECTOR)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty())
}

/// Reads one `dl` restaurant block. Blocks without a name are skipped.
/// Courses are returned as found, empty ones included; the map drops those.
pub fn restaurant_from_element(element: ElementRef<'_>) -> Option<(String, Vec<CourseOffering>)> {
    static_selector!(COURSE_SELECTOR <- "dd");
    let name = restaurant_name(element)?;
    let courses = element.select(&COURSE_SELECTOR).map(course_from_element).collect();
    Some((name, courses))
}
