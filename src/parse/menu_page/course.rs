use scraper::ElementRef;

use crate::menu::CourseOffering;
use crate::parse::element_text;
use crate::static_selector;

/// Currency marker that tells the price apart from the other detail fragments.
const WON: char = '원';

/// Reads one `dd` course element. Missing parts become empty strings; a
/// course without menu items comes back with an empty `items` list.
pub fn course_from_element(element: ElementRef<'_>) -> CourseOffering {
    // example html dd element at ../html_examples/menu_page/course.html
    static_selector!(DETAIL_SELECTOR <- ".meals-detail");
    static_selector!(DETAIL_TEXT_SELECTOR <- "span.ng-binding");
    static_selector!(MENU_SELECTOR <- ".nb-p-04-03");
    static_selector!(MENU_ITEM_SELECTOR <- "p");

    let details: Vec<String> = element
        .select(&DETAIL_SELECTOR)
        .next()
        .map(|detail| detail.select(&DETAIL_TEXT_SELECTOR).map(element_text).collect())
        .unwrap_or_default();

    // first fragment is the serving time, second the course name
    let (time_range, course_label) = match details.as_slice() {
        [time, course, ..] => (time.clone(), course.clone()),
        [time] => (time.clone(), String::new()),
        [] => (String::new(), String::new()),
    };

    let items = element
        .select(&MENU_SELECTOR)
        .next()
        .map(|menu| {
            menu.select(&MENU_ITEM_SELECTOR)
                .map(element_text)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let price = details
        .iter()
        .find(|text| text.contains(WON))
        .cloned()
        .unwrap_or_default();

    CourseOffering {
        time_range,
        course_label,
        items,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn first_course(html: &str) -> CourseOffering {
        static_selector!(COURSE_SELECTOR <- "dd");
        let document = scraper::Html::parse_document(html);
        let element = document
            .select(&COURSE_SELECTOR)
            .next()
            .expect("fixture should have a dd element");
        course_from_element(element)
    }

    #[test]
    fn test_course_from_html_element() {
        let html = fs::read_to_string("./src/parse/html_examples/menu_page/course.html").unwrap();
        let course = first_course(&html);
        assert_eq!(course.time_range, "11:30~14:00");
        assert_eq!(course.course_label, "중식(특식)");
        assert_eq!(
            course.items,
            ["김치국", "찹스테이크", "생선까스*타르소스", "파래자반", "파인애플", "깍두기"]
        );
        assert_eq!(course.price, "5,500 원");
    }

    #[test]
    fn test_single_detail_is_time() {
        let course = first_course(
            r#"<dl><dd>
                <div class="meals-detail"><span class="ng-binding">07:00~09:00</span></div>
                <div class="nb-p-04-03"><p>밥</p></div>
            </dd></dl>"#,
        );
        assert_eq!(course.time_range, "07:00~09:00");
        assert_eq!(course.course_label, "");
        assert_eq!(course.price, "");
        assert_eq!(course.items, ["밥"]);
    }

    #[test]
    fn test_missing_parts_degrade_to_empty() {
        let course = first_course("<dl><dd><p>not inside the menu block</p></dd></dl>");
        assert_eq!(course, CourseOffering::default());
        assert!(!course.has_items());
    }

    #[test]
    fn test_blank_items_are_discarded() {
        let course = first_course(
            r#"<dl><dd><div class="nb-p-04-03"><p> </p><p>
                신라면
            </p><p></p></div></dd></dl>"#,
        );
        assert_eq!(course.items, ["신라면"]);
    }
}
