use clap::ValueEnum;

use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    #[default]
    All,
    /// Communities with more than 1,000 members
    Large,
    /// Communities with more than 5,000 posts
    Active,
}

#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub search_text: String,
    pub category: Option<String>,
    pub mode: FilterMode,
}

impl Criteria {
    pub fn search(search_text: &str) -> Self {
        Criteria {
            search_text: search_text.to_string(),
            ..Criteria::default()
        }
    }
}

pub fn matches<R: Record>(record: &R, criteria: &Criteria) -> bool {
    matches_search(record, &criteria.search_text)
        && matches_category(record, criteria.category.as_deref())
        && matches_mode(record, criteria.mode)
}

fn matches_search<R: Record>(record: &R, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    record
        .haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

// Category selection is an exact, case-sensitive match on the record's own
// category; records without one never match a selected category.
fn matches_category<R: Record>(record: &R, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(category) => record.category() == Some(category),
    }
}

fn matches_mode<R: Record>(record: &R, mode: FilterMode) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Large => record.members().is_some_and(|members| members > 1000),
        FilterMode::Active => record.post_count().is_some_and(|posts| posts > 5000),
    }
}

pub fn apply<R: Record + Clone>(records: &[R], criteria: &Criteria) -> Vec<R> {
    records
        .iter()
        .filter(|record| matches(*record, criteria))
        .cloned()
        .collect()
}
