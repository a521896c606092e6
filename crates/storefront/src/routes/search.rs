//! Search route handler.
//!
//! The keyword, grade, shop and category selections all live in the query
//! string, so every filter state has a shareable URL and no script is needed
//! to apply them.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use unsold_flower_core::{CATEGORIES, Catalog, CatalogFilter, Grade, ShopId};

use crate::filters;
use crate::routes::products::FlowerCardView;
use crate::state::AppState;

/// Raw search query parameters.
///
/// Values are kept as strings so an invalid grade or shop is ignored instead
/// of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub grade: Option<String>,
    pub shop: Option<String>,
    pub category: Option<String>,
}

impl SearchQuery {
    /// Resolve into a filter over `catalog`, dropping unusable values.
    #[must_use]
    pub fn to_filter(&self, catalog: &Catalog) -> CatalogFilter {
        let grade = self
            .grade
            .as_deref()
            .and_then(|raw| raw.parse::<Grade>().ok());
        let shop = self
            .shop
            .as_deref()
            .and_then(|raw| raw.parse::<ShopId>().ok())
            .filter(|id| catalog.shop(*id).is_some());

        CatalogFilter::new(self.q.clone(), grade, shop, self.category.clone())
    }
}

/// Build the `/search` URL that reproduces `filter`.
#[must_use]
pub fn search_href(filter: &CatalogFilter) -> String {
    let mut pairs = Vec::new();
    if let Some(keyword) = &filter.keyword {
        pairs.push(format!("q={}", urlencoding::encode(keyword)));
    }
    if let Some(grade) = filter.grade {
        pairs.push(format!("grade={}", grade.code()));
    }
    if let Some(shop) = filter.shop {
        pairs.push(format!("shop={shop}"));
    }
    if let Some(category) = &filter.category {
        pairs.push(format!("category={}", urlencoding::encode(category)));
    }

    if pairs.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{}", pairs.join("&"))
    }
}

/// One `<option>` of a filter select.
#[derive(Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One category chip.
#[derive(Clone)]
pub struct CategoryChipView {
    pub name: &'static str,
    pub href: String,
    pub active: bool,
}

/// Search page template.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub active_tab: &'static str,
    pub keyword: String,
    pub category: String,
    pub grade_options: Vec<OptionView>,
    pub shop_options: Vec<OptionView>,
    pub categories: Vec<CategoryChipView>,
    pub results: Vec<FlowerCardView>,
    pub active_filter_count: usize,
    pub clear_filters_href: String,
    pub clear_keyword_href: String,
}

/// Display the filtered flower grid.
#[instrument(skip(state))]
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> SearchTemplate {
    let catalog = state.catalog();
    let filter = query.to_filter(&catalog);

    let results: Vec<FlowerCardView> = filter
        .apply(catalog.flowers())
        .into_iter()
        .map(|flower| FlowerCardView::new(flower, catalog.shop(flower.shop_id)))
        .collect();
    tracing::debug!(results = results.len(), "Search filtered");

    let grade_options = Grade::ALL
        .iter()
        .map(|grade| OptionView {
            value: grade.code().to_string(),
            label: format!("{} {}", grade.emoji(), grade.label()),
            selected: filter.grade == Some(*grade),
        })
        .collect();

    let shop_options = catalog
        .shops()
        .iter()
        .map(|shop| OptionView {
            value: shop.id.to_string(),
            label: shop.name.to_string(),
            selected: filter.shop == Some(shop.id),
        })
        .collect();

    let categories = CATEGORIES
        .iter()
        .map(|&name| {
            let mut toggled = filter.clone();
            toggled.toggle_category(name);
            CategoryChipView {
                name,
                href: search_href(&toggled),
                active: filter.category.as_deref() == Some(name),
            }
        })
        .collect();

    let mut cleared = filter.clone();
    cleared.clear_filters();
    let mut without_keyword = filter.clone();
    without_keyword.keyword = None;

    SearchTemplate {
        active_tab: "search",
        keyword: filter.keyword.clone().unwrap_or_default(),
        category: filter.category.clone().unwrap_or_default(),
        grade_options,
        shop_options,
        categories,
        results,
        active_filter_count: filter.active_filter_count(),
        clear_filters_href: search_href(&cleared),
        clear_keyword_href: search_href(&without_keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str, grade: &str, shop: &str, category: &str) -> SearchQuery {
        let opt = |v: &str| (!v.is_empty()).then(|| v.to_string());
        SearchQuery {
            q: opt(q),
            grade: opt(grade),
            shop: opt(shop),
            category: opt(category),
        }
    }

    #[test]
    fn test_invalid_grade_and_shop_are_ignored() {
        let catalog = Catalog::standard();
        let filter = query("", "Z", "abc", "").to_filter(&catalog);
        assert_eq!(filter.active_filter_count(), 0);

        let filter = query("", "b", "99", "").to_filter(&catalog);
        assert!(filter.grade.is_none());
        assert!(filter.shop.is_none());
    }

    #[test]
    fn test_grade_b_in_first_market() {
        let catalog = Catalog::standard();
        let filter = query("", "B", "1", "").to_filter(&catalog);
        let names: Vec<_> = filter
            .apply(catalog.flowers())
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["시안 블루 장미"]);
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href(&CatalogFilter::default()), "/search");

        let filter = CatalogFilter::new(None, Some(Grade::A), Some(ShopId::new(2)), None);
        assert_eq!(search_href(&filter), "/search?grade=A&shop=2");

        let filter = CatalogFilter::new(Some("장미".to_string()), None, None, None);
        assert_eq!(search_href(&filter), "/search?q=%EC%9E%A5%EB%AF%B8");
    }
}
