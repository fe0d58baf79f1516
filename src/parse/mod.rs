mod menu_page;
mod remove_excess_whitespace;
pub(crate) mod static_selector;

pub use menu_page::{
    course_from_element, displayed_date, restaurant_from_element, restaurant_name,
    restaurant_names, restaurants_from_element, restaurants_from_html,
};
pub use remove_excess_whitespace::{element_text, remove_excess_whitespace};
