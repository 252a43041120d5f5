// file: src/search/sort.rs
// description: stable sorting of ranked results
// reference: internal ranking logic

use crate::models::{Ranked, Searchable};
use crate::search::filters::{SortBy, SortOrder};
use std::cmp::Ordering;

/// Sorts one ranked collection in place. Relevance is always descending with
/// ties kept in corpus order (stable sort); the other modes honor the
/// requested direction. Each mode compares one key type only.
pub fn sort_ranked<T: Searchable>(items: &mut [Ranked<T>], sort_by: SortBy, order: SortOrder) {
    match sort_by {
        SortBy::Relevance => {
            items.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        }
        SortBy::Date => {
            items.sort_by(|a, b| directed(a.item.date().cmp(&b.item.date()), order));
        }
        SortBy::Title => {
            items.sort_by(|a, b| {
                let left = a.item.display_name().to_lowercase();
                let right = b.item.display_name().to_lowercase();
                directed(left.cmp(&right), order)
            });
        }
        SortBy::Popular => {
            items.sort_by(|a, b| directed(a.item.popularity().cmp(&b.item.popularity()), order));
        }
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
