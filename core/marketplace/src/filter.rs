// core/marketplace/src/filter.rs

use crate::types::Item;
use rewear_primitives::{Category, Condition, Gender};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Selector value meaning "no constraint"
pub const ALL: &str = "all";

/// One facet of the browse filter: either unconstrained or a single value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    Any,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl<T> Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Parse a selector from its string form.
    ///
    /// `"all"` is unconstrained. A value the facet does not recognize also
    /// falls back to unconstrained instead of failing.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            return Selector::Any;
        }
        match raw.parse() {
            Ok(value) => Selector::Only(value),
            Err(e) => {
                warn!(value = %raw, error = %e, "Unrecognized filter value, treating as 'all'");
                Selector::Any
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str(ALL),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selector::parse(&raw))
    }
}

/// Active search and facet constraints of a browse session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Selector<Category>,
    pub size: Selector<String>,
    pub gender: Selector<Gender>,
    pub condition: Selector<Condition>,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Selector::Only(size.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Selector::Only(gender);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Selector::Only(condition);
        self
    }

    /// Whether an item passes every predicate
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item)
            && self.category.matches(&item.category)
            && self.size.matches(&item.size)
            && self.gender.matches(&item.gender)
            && self.condition.matches(&item.condition)
    }

    /// Case-insensitive substring match against title or description.
    /// An empty search matches everything.
    pub fn matches_search(&self, item: &Item) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }

    /// Number of constraints in effect (each facet plus the search box)
    pub fn active_count(&self) -> usize {
        let facets = [
            self.category.is_any(),
            self.size.is_any(),
            self.gender.is_any(),
            self.condition.is_any(),
        ];
        let search = usize::from(!self.search.is_empty());
        facets.iter().filter(|any| !**any).count() + search
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_items;

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::<Category>::parse("all"), Selector::Any);
        assert_eq!(
            Selector::<Category>::parse("Jacket"),
            Selector::Only(Category::Jacket)
        );
        assert_eq!(Selector::<Category>::parse("Dress"), Selector::Any);
        assert_eq!(
            Selector::<String>::parse("XL"),
            Selector::Only("XL".to_string())
        );
    }

    #[test]
    fn test_selector_match_is_case_sensitive() {
        let size = Selector::Only("M".to_string());
        assert!(size.matches(&"M".to_string()));
        assert!(!size.matches(&"m".to_string()));
    }

    #[test]
    fn test_criteria_serialize_as_plain_strings() {
        let criteria = FilterCriteria::default().with_category(Category::TShirt);
        let json = serde_json::to_value(&criteria).unwrap();

        assert_eq!(json["category"], "T-Shirt");
        assert_eq!(json["size"], "all");

        let parsed: FilterCriteria =
            serde_json::from_str(r#"{"search":"denim","gender":"Unisex"}"#).unwrap();
        assert_eq!(parsed.search, "denim");
        assert_eq!(parsed.gender, Selector::Only(Gender::Unisex));
        assert!(parsed.category.is_any());
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let items = demo_items();
        let jacket = &items[0];

        assert!(FilterCriteria::default().with_search("DENIM").matches_search(jacket));
        assert!(FilterCriteria::default().with_search("casual wear").matches_search(jacket));
        assert!(!FilterCriteria::default().with_search("running").matches_search(jacket));
    }

    #[test]
    fn test_missing_description_only_fails_that_branch() {
        let mut item = demo_items().remove(0);
        item.description = None;

        assert!(FilterCriteria::default().with_search("vintage").matches(&item));
        assert!(!FilterCriteria::default().with_search("casual").matches(&item));
    }

    #[test]
    fn test_active_count() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());

        let criteria = criteria
            .with_search("shoe")
            .with_size("9")
            .with_gender(Gender::Male);
        assert_eq!(criteria.active_count(), 3);
    }
}
