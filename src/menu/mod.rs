mod course;
mod meal;
mod snapshot;

pub use course::CourseOffering;
pub use meal::MealPeriod;
pub use snapshot::{MenuSnapshot, RestaurantMenuMap};
