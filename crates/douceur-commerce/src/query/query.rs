//! Catalog query builder and evaluation.

use crate::catalog::Product;
use crate::i18n::Language;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::query::QueryResults;
use serde::{Deserialize, Serialize};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Preserve catalog source order.
    #[default]
    Default,
    /// Price per kilogram, low to high.
    PriceAsc,
    /// Price per kilogram, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Name A-Z in the active language.
    Name,
    /// New arrivals first.
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Name => "Name: A-Z",
            SortKey::Newest => "New Arrivals",
        }
    }
}

/// Category filter: everything, or one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match one category key exactly.
    Key(CategoryId),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Key(id) => &product.category_id == id,
        }
    }
}

/// A catalog listing query: filters, sort, and page.
///
/// Evaluation is pure: the source list is never mutated, and an empty
/// result set is an ordinary outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against the localized name,
    /// description, and category. Empty matches everything.
    pub search: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Inclusive price bounds, per kilogram.
    pub price_range: Option<(Money, Money)>,
    /// Keep only in-stock products.
    pub in_stock_only: bool,
    /// Keep only out-of-stock products. Combined with `in_stock_only`
    /// this is a valid, always-empty query.
    pub out_of_stock_only: bool,
    /// Keep only new arrivals.
    pub new_only: bool,
    /// Keep only bestsellers.
    pub bestseller_only: bool,
    /// Inclusive rating floor.
    pub min_rating: Option<f64>,
    /// Sort order.
    pub sort: SortKey,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query matching the whole catalog, first page.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_range: None,
            in_stock_only: false,
            out_of_stock_only: false,
            new_only: false,
            bestseller_only: false,
            min_rating: None,
            sort: SortKey::Default,
            page: 1,
            per_page: 12,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Filter to one category key.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category = CategoryFilter::Key(id.into());
        self
    }

    /// Set inclusive price bounds.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Keep only in-stock products.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Keep only out-of-stock products.
    pub fn out_of_stock(mut self) -> Self {
        self.out_of_stock_only = true;
        self
    }

    /// Keep only new arrivals.
    pub fn only_new(mut self) -> Self {
        self.new_only = true;
        self
    }

    /// Keep only bestsellers.
    pub fn only_bestsellers(mut self) -> Self {
        self.bestseller_only = true;
        self
    }

    /// Set the inclusive rating floor.
    pub fn with_min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Check a single product against every active predicate.
    pub fn matches(&self, product: &Product, lang: Language) -> bool {
        if !self.category.matches(product) {
            return false;
        }
        if let Some((min, max)) = self.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        if self.out_of_stock_only && product.in_stock {
            return false;
        }
        if self.new_only && !product.is_new {
            return false;
        }
        if self.bestseller_only && !product.is_bestseller {
            return false;
        }
        if let Some(min) = self.min_rating {
            if product.rating < min {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            product.name.get(lang),
            product.description.get(lang),
            product.category.get(lang),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Run the query: filter, stable-sort a copy, and slice the page.
    pub fn run(&self, products: &[Product], lang: Language) -> QueryResults<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p, lang))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Default => {}
            SortKey::PriceAsc => matched.sort_by_key(|p| p.price),
            SortKey::PriceDesc => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Name => matched.sort_by_cached_key(|p| p.name.get(lang).to_lowercase()),
            SortKey::Newest => matched.sort_by_key(|p| !p.is_new),
        }

        QueryResults::paginate(matched, self.page, self.per_page)
    }

    /// Total match count without sorting or pagination.
    pub fn count(&self, products: &[Product], lang: Language) -> usize {
        products.iter().filter(|p| self.matches(p, lang)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocalizedList, LocalizedText};
    use crate::ids::ProductId;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: LocalizedText::new(
                format!("{id} name"),
                format!("{id} nom"),
                format!("{id} اسم"),
            ),
            description: LocalizedText::from_single("honey and almonds"),
            category: LocalizedText::from_single("Traditionnel"),
            category_id: CategoryId::new("traditional"),
            price: Money::new(price),
            original_price: None,
            images: vec!["/images/p.jpg".to_string()],
            ingredients: LocalizedList::default(),
            is_new: false,
            is_bestseller: false,
            in_stock: true,
            rating: 4.0,
            review_count: 10,
        }
    }

    fn catalog() -> Vec<Product> {
        let mut products = Vec::new();
        for (i, price) in [9_000, 4_000, 12_000, 7_500, 6_000].iter().enumerate() {
            products.push(product(&format!("p{i}"), *price));
        }
        products[1].is_new = true;
        products[1].rating = 4.9;
        products[3].is_new = true;
        products[2].in_stock = false;
        products[4].is_bestseller = true;
        products[4].category_id = CategoryId::new("seasonal");
        products
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = catalog();
        let results = CatalogQuery::new().run(&products, Language::Fr);
        assert_eq!(results.pagination.total, products.len());
    }

    #[test]
    fn test_search_is_case_insensitive_and_localized() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_search("P2 NOM")
            .run(&products, Language::Fr);
        assert_eq!(results.pagination.total, 1);

        // The same needle misses in English, where the name is "p2 name".
        let results = CatalogQuery::new()
            .with_search("P2 NOM")
            .run(&products, Language::En);
        assert_eq!(results.pagination.total, 0);
    }

    #[test]
    fn test_category_filter() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_category("seasonal")
            .run(&products, Language::Fr);
        assert_eq!(results.pagination.total, 1);
        assert_eq!(results.items[0].id.as_str(), "p4");
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = catalog();
        let query =
            CatalogQuery::new().with_price_range(Money::new(6_000), Money::new(9_000));
        let results = query.run(&products, Language::Fr);

        assert_eq!(results.pagination.total, 3);
        for p in &results.items {
            assert!(p.price >= Money::new(6_000) && p.price <= Money::new(9_000));
        }
    }

    #[test]
    fn test_stock_flags() {
        let products = catalog();

        let in_stock = CatalogQuery::new().in_stock().run(&products, Language::Fr);
        assert_eq!(in_stock.pagination.total, 4);

        let out = CatalogQuery::new().out_of_stock().run(&products, Language::Fr);
        assert_eq!(out.pagination.total, 1);

        // Both flags is a valid, always-empty combination.
        let both = CatalogQuery::new()
            .in_stock()
            .out_of_stock()
            .run(&products, Language::Fr);
        assert_eq!(both.pagination.total, 0);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_min_rating(4.9)
            .run(&products, Language::Fr);
        assert_eq!(results.pagination.total, 1);
        assert_eq!(results.items[0].id.as_str(), "p1");
    }

    #[test]
    fn test_no_false_negatives() {
        let products = catalog();
        let query = CatalogQuery::new()
            .in_stock()
            .with_min_rating(4.0)
            .with_pagination(1, 100);
        let results = query.run(&products, Language::Fr);

        let expected: Vec<&Product> = products
            .iter()
            .filter(|p| query.matches(p, Language::Fr))
            .collect();
        assert_eq!(results.pagination.total, expected.len());
        for p in expected {
            assert!(results.items.iter().any(|r| r.id == p.id));
        }
    }

    #[test]
    fn test_price_sorts_are_reverses_without_ties() {
        let products = catalog();

        let asc = CatalogQuery::new()
            .with_sort(SortKey::PriceAsc)
            .with_pagination(1, 100)
            .run(&products, Language::Fr);
        let desc = CatalogQuery::new()
            .with_sort(SortKey::PriceDesc)
            .with_pagination(1, 100)
            .run(&products, Language::Fr);

        let mut reversed: Vec<&str> = desc.items.iter().map(|p| p.id.as_str()).collect();
        reversed.reverse();
        let ascending: Vec<&str> = asc.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn test_newest_sort_is_stable_partition() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_sort(SortKey::Newest)
            .with_pagination(1, 100)
            .run(&products, Language::Fr);

        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        // p1 and p3 are new, in original relative order; the rest follow,
        // also in original relative order.
        assert_eq!(ids, vec!["p1", "p3", "p0", "p2", "p4"]);
    }

    #[test]
    fn test_sort_does_not_mutate_source() {
        let products = catalog();
        let before: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let _ = CatalogQuery::new()
            .with_sort(SortKey::PriceAsc)
            .run(&products, Language::Fr);
        let after: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pagination_slices_and_reports_total() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_pagination(2, 2)
            .run(&products, Language::Fr);

        assert_eq!(results.len(), 2);
        assert_eq!(results.pagination.total, 5);
        assert_eq!(results.pagination.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let products = catalog();
        let results = CatalogQuery::new()
            .with_pagination(40, 2)
            .run(&products, Language::Fr);
        assert!(results.is_empty());
        assert_eq!(results.pagination.total, 5);
    }

    #[test]
    fn test_name_sort_uses_active_language() {
        let mut products = vec![product("x", 1_000), product("y", 2_000)];
        products[0].name = LocalizedText::new("Zellige", "Amandine", "z");
        products[1].name = LocalizedText::new("Amlou", "Zeste", "a");

        let fr = CatalogQuery::new()
            .with_sort(SortKey::Name)
            .run(&products, Language::Fr);
        let fr_ids: Vec<&str> = fr.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(fr_ids, vec!["x", "y"]);

        let en = CatalogQuery::new()
            .with_sort(SortKey::Name)
            .run(&products, Language::En);
        let en_ids: Vec<&str> = en.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(en_ids, vec!["y", "x"]);
    }
}
