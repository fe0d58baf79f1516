use std::sync::OnceLock;

use regex::Regex;

use crate::menu::MealPeriod;

/// Building markers and the short label shown for restaurants carrying them.
/// The first entry with a matching marker wins.
static BUILDING_LABELS: &[(&[&str], &str)] = &[
    (&["308관"], "308관"),
    (&["309관"], "309관"),
    (&["310관", "B4층"], "310관 B4"),
    (&["303관", "B1층"], "303관 B1"),
    (&["102관", "University Club"], "102관"),
];

/// Course names that only repeat what the section header already says.
static REDUNDANT_COURSES: &[&str] = &["한식"];

/// Short label for a restaurant, ex. `참슬기식당(310관 B4층)` -> `310관 B4`.
/// Names without a known building are returned unchanged.
pub fn simplify_restaurant_name(name: &str) -> &str {
    BUILDING_LABELS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| name.contains(m)))
        .map_or(name, |(_, label)| *label)
}

/// Strips the meal name wrapper from a course label, ex. `중식(특식)` ->
/// `특식`. Labels that are only a meal name come back empty.
pub fn clean_course_label(label: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^(?:조식|중식|석식)\s*\((.*)\)$").expect("regex should be valid")
    });

    let label = label.trim();
    let inner = re
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map_or(label, |m| m.as_str())
        .trim();

    let is_meal_name = MealPeriod::ALL.iter().any(|p| p.name() == inner);
    if is_meal_name || REDUNDANT_COURSES.contains(&inner) {
        String::new()
    } else {
        inner.to_string()
    }
}

/// `5,500 원` -> `5,500원`.
pub fn compact_price(price: &str) -> String {
    price.trim().replace(" 원", "원")
}
