//! Renders a [`MenuSnapshot`] as the chat message text.
mod labels;

use std::fmt::Write;

use chrono::{Datelike, Weekday};

use crate::menu::{MealPeriod, MenuSnapshot, RestaurantMenuMap};

pub use labels::{clean_course_label, compact_price, simplify_restaurant_name};

const ITEM_SEPARATOR: &str = " · ";
const NO_MENU_LINE: &str = "- (메뉴 없음)";
const NO_MENU_NOTICE: &str = "⚠️ 해당 날짜의 메뉴 정보가 없습니다.";

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// Earliest start and latest end over every course with a `start~end` time,
/// formatted as `start~end`.
///
/// All times are zero padded `HH:MM`, so comparing the strings is enough.
pub fn time_range(menus: &RestaurantMenuMap) -> Option<String> {
    let mut bounds = menus.courses().filter_map(|c| c.time_bounds());
    let (mut start, mut end) = bounds.next()?;
    for (s, e) in bounds {
        start = start.min(s);
        end = end.max(e);
    }
    Some(format!("{start}~{end}"))
}

/// One section of the message. The flag tells whether any course was listed.
fn format_section(period: MealPeriod, menus: &RestaurantMenuMap) -> (String, bool) {
    let mut section = match time_range(menus) {
        Some(range) => format!("*{} {} ({range})*\n", period.emoji(), period.name()),
        None => format!("*{} {}*\n", period.emoji(), period.name()),
    };

    let mut found = false;
    for (restaurant, courses) in menus {
        let label = simplify_restaurant_name(restaurant);
        for course in courses.iter().filter(|c| c.has_items()) {
            found = true;
            let price = compact_price(&course.price);
            let course_name = clean_course_label(&course.course_label);

            section.push_str("- ");
            section.push_str(label);
            if !price.is_empty() {
                let _ = write!(section, " ({price})");
            }
            section.push_str(" : ");
            if !course_name.is_empty() {
                section.push_str(&course_name);
                section.push(' ');
            }
            section.push_str(&course.items.join(ITEM_SEPARATOR));
            section.push('\n');
        }
    }

    if !found {
        section.push_str(NO_MENU_LINE);
        section.push('\n');
    }
    (section, found)
}

/// The full message for a snapshot. Pure: same snapshot, same text.
#[must_use]
pub fn format_menu_message(snapshot: &MenuSnapshot) -> String {
    let date = snapshot.date();
    let mut message = format!(
        "📅 {}({}) 오늘의 급식\n\n",
        date.format("%m/%d"),
        weekday_name(date.weekday())
    );

    let mut found_any = false;
    let sections: Vec<String> = MealPeriod::ALL
        .into_iter()
        .map(|period| {
            let (section, found) = format_section(period, snapshot.meal(period));
            found_any |= found;
            section
        })
        .collect();
    message.push_str(&sections.join("\n"));

    if !found_any {
        message.push('\n');
        message.push_str(NO_MENU_NOTICE);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::CourseOffering;
    use crate::resolve::sample_snapshot;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn course(time: &str, label: &str, items: &[&str], price: &str) -> CourseOffering {
        CourseOffering::new(
            time,
            label,
            items.iter().map(|s| (*s).to_string()).collect(),
            price,
        )
    }

    #[test]
    fn test_time_range() {
        let menus: RestaurantMenuMap = [
            ("a", vec![course("11:30~14:00", "", &["밥"], "")]),
            ("b", vec![course("11:00~13:30", "", &["국"], "")]),
            ("c", vec![course("11:30~13:30", "", &["김치"], ""), course("", "", &["물"], "")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(time_range(&menus).as_deref(), Some("11:00~14:00"));

        let untimed: RestaurantMenuMap =
            [("a", vec![course("", "", &["밥"], "")])].into_iter().collect();
        assert_eq!(time_range(&untimed), None);
    }

    #[test]
    fn test_sample_monday_message() {
        let message = format_menu_message(&sample_snapshot(date()));
        assert!(message.starts_with("📅 01/15(월) 오늘의 급식\n\n"));
        assert!(message.contains("*🌅 조식 (07:00~09:00)*\n- 310관 B4 (3,500원) : 밥 · 된장국"));
        assert!(message.contains("\n*🍴 중식 (11:00~16:00)*\n"));
        assert!(message.contains(
            "- 카우잇츠(cau eats) (5,500원) : 특식 김치국 · 찹스테이크 · 생선까스*타르소스"
        ));
        assert!(message.contains("- (다빈치)라면 (2,500원) : 신라면 · 너구리"));
        assert!(message.contains("- 303관 B1 (4,000원) : 밥 · 김치찌개 · 제육볶음"));
        assert!(message.contains("*🌙 석식 (17:30~19:00)*\n- 310관 B4 (4,500원) : 밥 · 미역국"));
        assert!(!message.contains("메뉴 없음"));
        assert!(!message.contains("⚠️"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let snapshot = sample_snapshot(date());
        assert_eq!(format_menu_message(&snapshot), format_menu_message(&snapshot));
    }

    #[test]
    fn test_empty_snapshot() {
        let message = format_menu_message(&MenuSnapshot::empty(date()));
        assert_eq!(
            message,
            "📅 01/15(월) 오늘의 급식\n\n\
             *🌅 조식*\n- (메뉴 없음)\n\n\
             *🍴 중식*\n- (메뉴 없음)\n\n\
             *🌙 석식*\n- (메뉴 없음)\n\n\
             ⚠️ 해당 날짜의 메뉴 정보가 없습니다."
        );
    }

    #[test]
    fn test_one_empty_period() {
        let mut snapshot = MenuSnapshot::empty(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        snapshot
            .lunch
            .insert("카우잇츠(cau eats)", vec![course("", "중식", &["떡만두국"], "")]);
        let message = format_menu_message(&snapshot);
        assert!(message.starts_with("📅 01/20(토)"));
        assert!(message.contains("*🍴 중식*\n- 카우잇츠(cau eats) : 떡만두국\n"));
        assert!(message.contains("*🌅 조식*\n- (메뉴 없음)\n"));
        assert!(!message.contains("⚠️"));
    }

    #[test]
    fn test_empty_courses_never_show() {
        let mut snapshot = MenuSnapshot::empty(date());
        snapshot.dinner.insert(
            "생활관식당(블루미르308관)",
            vec![course("17:30~19:00", "석식", &[], "4,500 원")],
        );
        snapshot.dinner.insert(
            "참슬기식당(310관 B4층)",
            vec![
                course("17:00~18:30", "석식(특식)", &[], "6,000 원"),
                course("17:30~19:00", "석식", &["밥"], "4,500 원"),
            ],
        );
        let message = format_menu_message(&snapshot);
        assert!(!message.contains("308관"));
        assert!(!message.contains("6,000원"));
        assert!(message.contains("*🌙 석식 (17:30~19:00)*\n- 310관 B4 (4,500원) : 밥\n"));
    }
}
