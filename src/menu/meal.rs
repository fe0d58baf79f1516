use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    /// Every period in display order.
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Korean name of the period, as shown on the page and in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "조식",
            Self::Lunch => "중식",
            Self::Dinner => "석식",
        }
    }

    /// Word found in the label of the period's tab on the menu page.
    #[must_use]
    pub const fn tab_marker(self) -> &'static str {
        self.name()
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Breakfast => "🌅",
            Self::Lunch => "🍴",
            Self::Dinner => "🌙",
        }
    }
}

impl Display for MealPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
