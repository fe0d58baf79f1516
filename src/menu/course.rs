/// One priced serving option at a restaurant for one meal period.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseOffering {
    /// `HH:MM~HH:MM`, or empty when the page has no time.
    pub time_range: String,
    /// Raw course description, ex. `중식(특식)`.
    pub course_label: String,
    pub items: Vec<String>,
    /// Raw price including the currency suffix, ex. `5,500 원`.
    pub price: String,
}

impl CourseOffering {
    pub fn new(
        time_range: impl Into<String>,
        course_label: impl Into<String>,
        items: Vec<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            time_range: time_range.into(),
            course_label: course_label.into(),
            items,
            price: price.into(),
        }
    }

    /// A course without a label, time or price. Used for sources that only
    /// provide item names.
    pub fn items_only(items: Vec<String>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Start and end of the time range, if it has the `start~end` form.
    #[must_use]
    pub fn time_bounds(&self) -> Option<(&str, &str)> {
        let (start, end) = self.time_range.split_once('~')?;
        Some((start.trim(), end.trim()))
    }
}
