//! Catalog search and filter predicates.
//!
//! A filter is a conjunction of optional predicates. Inactive predicates match
//! everything; the result keeps catalog order.

use crate::catalog::Flower;
use crate::types::{Grade, ShopId};

/// Category chips offered on the search view. Matched as substrings of the
/// flower name, the same way as the free-text keyword.
pub const CATEGORIES: [&str; 6] = ["장미", "리시안셔스", "유칼립투스", "작약", "해바라기", "안개꽃"];

/// Active search/filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text keyword, substring of the name (case-sensitive).
    pub keyword: Option<String>,
    pub grade: Option<Grade>,
    pub shop: Option<ShopId>,
    /// Category keyword, substring of the name.
    pub category: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl CatalogFilter {
    /// Build a filter, treating empty strings as "no filter".
    #[must_use]
    pub fn new(
        keyword: Option<String>,
        grade: Option<Grade>,
        shop: Option<ShopId>,
        category: Option<String>,
    ) -> Self {
        Self {
            keyword: non_empty(keyword),
            grade,
            shop,
            category: non_empty(category),
        }
    }

    /// Whether a flower satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, flower: &Flower) -> bool {
        if self
            .keyword
            .as_deref()
            .is_some_and(|keyword| !flower.name.contains(keyword))
        {
            return false;
        }
        if self.grade.is_some_and(|grade| flower.grade != grade) {
            return false;
        }
        if self.shop.is_some_and(|shop| flower.shop_id != shop) {
            return false;
        }
        !self
            .category
            .as_deref()
            .is_some_and(|category| !flower.name.contains(category))
    }

    /// The matching flowers, in the order given.
    #[must_use]
    pub fn apply<'a>(&self, flowers: &'a [Flower]) -> Vec<&'a Flower> {
        flowers.iter().filter(|f| self.matches(f)).collect()
    }

    /// Number of active grade/shop/category selections. The keyword is not
    /// counted; it has its own clear control.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.grade.is_some())
            + usize::from(self.shop.is_some())
            + usize::from(self.category.is_some())
    }

    /// Reset grade, shop and category, keeping the keyword.
    pub fn clear_filters(&mut self) {
        self.grade = None;
        self.shop = None;
        self.category = None;
    }

    /// Select a category, or deselect it if it is already active.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = non_empty(Some(category.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(filter: &CatalogFilter) -> Vec<&'static str> {
        filter
            .apply(Catalog::standard().flowers())
            .iter()
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = Catalog::standard();
        let all = CatalogFilter::default().apply(catalog.flowers());
        assert_eq!(all.len(), 7);
        let ids: Vec<i32> = all.iter().map(|f| f.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_grade_and_shop_intersection() {
        let filter = CatalogFilter::new(None, Some(Grade::B), Some(ShopId::new(1)), None);
        assert_eq!(names(&filter), vec!["시안 블루 장미"]);
    }

    #[test]
    fn test_keyword_substring() {
        let filter = CatalogFilter::new(Some("장미".to_string()), None, None, None);
        assert_eq!(names(&filter), vec!["시안 블루 장미"]);

        let filter = CatalogFilter::new(Some("로즈".to_string()), None, None, None);
        assert_eq!(names(&filter), vec!["줄리엣 로즈"]);
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        let filter = CatalogFilter::new(Some("Rose".to_string()), None, None, None);
        assert!(names(&filter).is_empty());
    }

    #[test]
    fn test_category_and_keyword_share_name_space() {
        let filter = CatalogFilter::new(
            Some("핑크".to_string()),
            None,
            None,
            Some("리시안셔스".to_string()),
        );
        assert_eq!(names(&filter), vec!["리시안셔스 핑크"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let filter = CatalogFilter::new(None, Some(Grade::A), Some(ShopId::new(3)), None);
        assert!(names(&filter).is_empty());
    }

    #[test]
    fn test_empty_strings_are_inactive() {
        let filter = CatalogFilter::new(Some(String::new()), None, None, Some(String::new()));
        assert_eq!(filter, CatalogFilter::default());
    }

    #[test]
    fn test_active_filter_count_and_clear() {
        let mut filter = CatalogFilter::new(
            Some("장미".to_string()),
            Some(Grade::C),
            Some(ShopId::new(2)),
            Some("작약".to_string()),
        );
        assert_eq!(filter.active_filter_count(), 3);
        filter.clear_filters();
        assert_eq!(filter.active_filter_count(), 0);
        assert_eq!(filter.keyword.as_deref(), Some("장미"));
    }

    #[test]
    fn test_toggle_category() {
        let mut filter = CatalogFilter::default();
        filter.toggle_category("작약");
        assert_eq!(filter.category.as_deref(), Some("작약"));
        filter.toggle_category("작약");
        assert!(filter.category.is_none());
        filter.toggle_category("작약");
        filter.toggle_category("안개꽃");
        assert_eq!(filter.category.as_deref(), Some("안개꽃"));
    }
}
