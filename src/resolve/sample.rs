//! Built-in menus used when no live source is configured. They depend only
//! on the weekday of the requested date.
use chrono::{Datelike, NaiveDate};

use crate::menu::{CourseOffering, MenuSnapshot, RestaurantMenuMap};

struct WeekdayMenu {
    breakfast: &'static [&'static str],
    lunch: &'static [&'static str],
    dinner: &'static [&'static str],
}

/// Monday first.
static WEEKDAY_MENUS: [WeekdayMenu; 7] = [
    WeekdayMenu {
        breakfast: &["밥", "된장국", "계란후라이", "김치", "요구르트"],
        lunch: &["밥", "김치찌개", "제육볶음", "시금치나물", "배추김치", "수정과"],
        dinner: &["밥", "미역국", "돈까스", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "미역국", "어묵볶음", "단무지", "우유"],
        lunch: &["밥", "된장찌개", "치킨너겟", "시금치나물", "배추김치", "요구르트"],
        dinner: &["밥", "계란국", "불고기", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "계란국", "소시지", "단무지", "우유"],
        lunch: &["밥", "순두부찌개", "닭볶음탕", "시금치나물", "배추김치", "수정과"],
        dinner: &["밥", "된장국", "제육볶음", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "된장국", "계란후라이", "김치", "요구르트"],
        lunch: &["밥", "김치찌개", "돈까스", "시금치나물", "배추김치", "수정과"],
        dinner: &["밥", "미역국", "불고기", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "미역국", "어묵볶음", "단무지", "우유"],
        lunch: &["밥", "된장찌개", "치킨너겟", "시금치나물", "배추김치", "요구르트"],
        dinner: &["밥", "계란국", "제육볶음", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "계란국", "소시지", "단무지", "우유"],
        lunch: &["밥", "순두부찌개", "닭볶음탕", "시금치나물", "배추김치", "수정과"],
        dinner: &["밥", "된장국", "돈까스", "콩나물무침", "깍두기"],
    },
    WeekdayMenu {
        breakfast: &["밥", "된장국", "계란후라이", "김치", "요구르트"],
        lunch: &["밥", "김치찌개", "제육볶음", "시금치나물", "배추김치", "수정과"],
        dinner: &["밥", "미역국", "불고기", "콩나물무침", "깍두기"],
    },
];

const CHAMSEULGI: &str = "참슬기식당(310관 B4층)";
const DORMITORY: &str = "생활관식당(블루미르308관)";

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn course(time: &str, label: &str, names: &[&str], price: &str) -> CourseOffering {
    CourseOffering::new(time, label, items(names), price)
}

/// The sample menu for the weekday of `date`.
#[must_use]
pub fn sample_snapshot(date: NaiveDate) -> MenuSnapshot {
    let menu = &WEEKDAY_MENUS[date.weekday().num_days_from_monday() as usize];

    let breakfast: RestaurantMenuMap = [(
        CHAMSEULGI,
        vec![course("07:00~09:00", "조식", menu.breakfast, "3,500 원")],
    )]
    .into_iter()
    .collect();

    let lunch: RestaurantMenuMap = [
        (
            "카우잇츠(cau eats)",
            vec![
                course(
                    "11:30~14:00",
                    "중식(특식)",
                    &["김치국", "찹스테이크", "생선까스*타르소스", "파래자반", "파인애플", "깍두기"],
                    "5,500 원",
                ),
                course("11:30~14:00", "중식(일품1)", &["떡만두국", "김치"], "4,000 원"),
                course(
                    "11:30~14:00",
                    "중식(일품2)",
                    &["비빔칼국수", "대패삼겹구이", "단무지"],
                    "4,000 원",
                ),
            ],
        ),
        (
            "(다빈치)라면",
            vec![course(
                "11:00~16:00",
                "중식(중식)",
                &["신라면", "너구리", "진라면매운맛", "안성탕면"],
                "2,500 원",
            )],
        ),
        (
            CHAMSEULGI,
            vec![
                course(
                    "11:00~13:30",
                    "중식(한식)",
                    &["육개장칼국수", "찐만두", "무말랭이지"],
                    "4,000 원",
                ),
                course(
                    "11:30~13:30",
                    "중식(특식)",
                    &["사천짜장덮밥", "계란부추국", "유린기", "감자샐러드", "김치"],
                    "5,500 원",
                ),
            ],
        ),
        (
            DORMITORY,
            vec![course("11:30~13:30", "중식", menu.lunch, "4,500 원")],
        ),
        (
            "학생식당(303관B1층)",
            vec![course("11:30~14:00", "중식", menu.lunch, "4,000 원")],
        ),
    ]
    .into_iter()
    .collect();

    let dinner: RestaurantMenuMap = [
        (
            CHAMSEULGI,
            vec![course("17:30~19:00", "석식", menu.dinner, "4,500 원")],
        ),
        (
            DORMITORY,
            vec![course("17:30~19:00", "석식", menu.dinner, "4,500 원")],
        ),
    ]
    .into_iter()
    .collect();

    MenuSnapshot::new(date, breakfast, lunch, dinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_same_weekday_same_menu() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for weeks in 1..=8 {
            let later = monday + Duration::weeks(weeks);
            let a = sample_snapshot(monday);
            let b = sample_snapshot(later);
            assert_eq!(a.breakfast, b.breakfast);
            assert_eq!(a.lunch, b.lunch);
            assert_eq!(a.dinner, b.dinner);
            assert_ne!(a.date(), b.date());
        }
    }

    #[test]
    fn test_every_weekday_has_all_meals() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for day in 0..7 {
            let snapshot = sample_snapshot(monday + Duration::days(day));
            assert_eq!(snapshot.breakfast.len(), 1);
            assert_eq!(snapshot.lunch.len(), 5);
            assert_eq!(snapshot.dinner.len(), 2);
        }
    }

    #[test]
    fn test_monday_lunch() {
        let snapshot = sample_snapshot(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let students = snapshot.lunch.get("학생식당(303관B1층)").unwrap();
        assert_eq!(students[0].price, "4,000 원");
        assert_eq!(students[0].items[1], "김치찌개");
        // tuesday differs
        let tuesday = sample_snapshot(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(
            tuesday.lunch.get("학생식당(303관B1층)").unwrap()[0].items[1],
            "된장찌개"
        );
    }
}
