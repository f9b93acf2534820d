//! Blog posts and their listing query.
//!
//! Posts are static content like the catalog: loaded once, never mutated.
//! The listing reuses the catalog's pagination machinery and is always
//! ordered newest-first.

use crate::i18n::{Language, LocalizedText};
use crate::ids::{CategoryId, PostId};
use crate::query::{CategoryFilter, QueryResults};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Title in all shop languages.
    pub title: LocalizedText,
    /// Short teaser shown on the listing page.
    pub excerpt: LocalizedText,
    /// Full body.
    pub content: LocalizedText,
    /// Category display name.
    pub category: LocalizedText,
    /// Stable category key used for filtering.
    pub category_id: CategoryId,
    /// Cover image reference.
    pub image: String,
    /// Author display name.
    pub author: String,
    /// Publication time, unix seconds.
    pub published_at: i64,
}

/// A blog listing query: search, category, and page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostQuery {
    /// Case-insensitive substring matched against the localized title,
    /// excerpt, and content. Empty matches everything.
    pub search: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl PostQuery {
    /// Create a query matching every post, first page.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            page: 1,
            per_page: 6,
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

    /// Set pagination.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Check a single post against every active predicate.
    pub fn matches(&self, post: &Post, lang: Language) -> bool {
        match &self.category {
            CategoryFilter::All => {}
            CategoryFilter::Key(id) => {
                if &post.category_id != id {
                    return false;
                }
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            post.title.get(lang),
            post.excerpt.get(lang),
            post.content.get(lang),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Run the query: filter, order newest-first, and slice the page.
    pub fn run(&self, posts: &[Post], lang: Language) -> QueryResults<Post> {
        let mut matched: Vec<Post> = posts
            .iter()
            .filter(|p| self.matches(p, lang))
            .cloned()
            .collect();
        matched.sort_by_key(|p| Reverse(p.published_at));

        QueryResults::paginate(matched, self.page, self.per_page)
    }
}
