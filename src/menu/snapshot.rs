use std::slice::Iter;

use chrono::NaiveDate;
use serde::ser::SerializeMap;

use super::{CourseOffering, MealPeriod};

/// Restaurant name -> courses, in the order the restaurants were found.
///
/// Names are unique and every stored restaurant has at least one course with
/// items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantMenuMap {
    restaurants: Vec<(String, Vec<CourseOffering>)>,
}

impl RestaurantMenuMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            restaurants: Vec::new(),
        }
    }

    /// Stores the courses of a restaurant, dropping courses without items.
    ///
    /// Nothing is stored if no course is left. A name that is already present
    /// has its courses replaced in place.
    pub fn insert(&mut self, name: impl Into<String>, courses: Vec<CourseOffering>) {
        let courses: Vec<_> = courses.into_iter().filter(CourseOffering::has_items).collect();
        if courses.is_empty() {
            return;
        }
        let name = name.into();
        match self.restaurants.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = courses,
            None => self.restaurants.push((name, courses)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[CourseOffering]> {
        self.restaurants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_slice())
    }

    pub fn iter(&self) -> Iter<'_, (String, Vec<CourseOffering>)> {
        self.restaurants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.restaurants.iter().map(|(n, _)| n.as_str())
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseOffering> {
        self.restaurants.iter().flat_map(|(_, c)| c)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl<'a> IntoIterator for &'a RestaurantMenuMap {
    type Item = &'a (String, Vec<CourseOffering>);
    type IntoIter = Iter<'a, (String, Vec<CourseOffering>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<CourseOffering>)> for RestaurantMenuMap {
    fn from_iter<T: IntoIterator<Item = (S, Vec<CourseOffering>)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, courses) in iter {
            map.insert(name, courses);
        }
        map
    }
}

impl serde::Serialize for RestaurantMenuMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.restaurants.len()))?;
        for (name, courses) in &self.restaurants {
            map.serialize_entry(name, courses)?;
        }
        map.end()
    }
}

/// The resolved menu of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MenuSnapshot {
    date: NaiveDate,
    pub breakfast: RestaurantMenuMap,
    pub lunch: RestaurantMenuMap,
    pub dinner: RestaurantMenuMap,
}

impl MenuSnapshot {
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        breakfast: RestaurantMenuMap,
        lunch: RestaurantMenuMap,
        dinner: RestaurantMenuMap,
    ) -> Self {
        Self {
            date,
            breakfast,
            lunch,
            dinner,
        }
    }

    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self::new(
            date,
            RestaurantMenuMap::new(),
            RestaurantMenuMap::new(),
            RestaurantMenuMap::new(),
        )
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn meal(&self, period: MealPeriod) -> &RestaurantMenuMap {
        match period {
            MealPeriod::Breakfast => &self.breakfast,
            MealPeriod::Lunch => &self.lunch,
            MealPeriod::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, period: MealPeriod) -> &mut RestaurantMenuMap {
        match period {
            MealPeriod::Breakfast => &mut self.breakfast,
            MealPeriod::Lunch => &mut self.lunch,
            MealPeriod::Dinner => &mut self.dinner,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        MealPeriod::ALL.iter().all(|p| self.meal(*p).is_empty())
    }

    /// Number of distinct restaurants across all periods.
    #[must_use]
    pub fn restaurant_count(&self) -> usize {
        let mut names: Vec<&str> = MealPeriod::ALL
            .iter()
            .flat_map(|p| self.meal(*p).names())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(items: &[&str]) -> CourseOffering {
        CourseOffering::new(
            "11:30~13:30",
            "중식",
            items.iter().map(|s| (*s).to_string()).collect(),
            "4,500 원",
        )
    }

    #[test]
    fn test_insert_drops_empty_courses() {
        let mut map = RestaurantMenuMap::new();
        map.insert("학생식당", vec![course(&[]), course(&["밥", "국"])]);
        map.insert("라면", vec![course(&[])]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("학생식당").map(<[_]>::len), Some(1));
        assert!(map.get("라면").is_none());
    }

    #[test]
    fn test_insert_keeps_order_and_replaces_duplicates() {
        let mut map = RestaurantMenuMap::new();
        map.insert("b", vec![course(&["1"])]);
        map.insert("a", vec![course(&["2"])]);
        map.insert("b", vec![course(&["3"]), course(&["4"])]);
        assert_eq!(map.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(map.get("b").map(<[_]>::len), Some(2));
        assert_eq!(map.courses().count(), 3);
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let map: RestaurantMenuMap = [("z", vec![course(&["밥"])]), ("a", vec![course(&["국"])])]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"z":"#));
        assert!(json.find(r#""a":"#).unwrap() > json.find(r#""z":"#).unwrap());
    }

    #[test]
    fn test_snapshot_counts() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut snapshot = MenuSnapshot::empty(date);
        assert!(snapshot.is_empty());
        snapshot.meal_mut(MealPeriod::Lunch).insert("학생식당", vec![course(&["밥"])]);
        snapshot.meal_mut(MealPeriod::Dinner).insert("학생식당", vec![course(&["국"])]);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.restaurant_count(), 1);
        assert_eq!(snapshot.date(), date);
    }
}
