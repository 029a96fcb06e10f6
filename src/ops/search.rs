use regex::Regex;

use crate::model::Note;

/// A record with text fields a query can match against
pub trait Searchable {
    /// The fields a query is matched against
    fn search_fields(&self) -> [&str; 3];
}

impl Searchable for Note {
    fn search_fields(&self) -> [&str; 3] {
        [self.title.as_str(), self.content.as_str(), self.subject.as_str()]
    }
}

/// Case-insensitive substring match on any searchable field.
/// An empty query matches everything.
pub fn matches<T: Searchable>(query: &str, item: &T) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filtered view of `items` in their original order. Never mutates the source.
pub fn filter<'a, T, I>(query: &str, items: I) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| matches(query, *item)).collect()
}

/// Regex that highlights every literal, case-insensitive occurrence of `query`
pub fn highlight_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}
