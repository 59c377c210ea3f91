use super::item::{Assignment, Note, ReadingMaterial, Timer};

/// Text an item is matched against when searching
pub trait Searchable {
    fn search_text(&self) -> String;
}

impl Searchable for Assignment {
    fn search_text(&self) -> String {
        self.0.clone()
    }
}

impl Searchable for Note {
    fn search_text(&self) -> String {
        self.0.clone()
    }
}

impl Searchable for ReadingMaterial {
    fn search_text(&self) -> String {
        self.to_string()
    }
}

impl Searchable for Timer {
    fn search_text(&self) -> String {
        self.description.clone()
    }
}

fn matches<T: Searchable>(item: &T, needle: &str) -> bool {
    item.search_text().to_lowercase().contains(needle)
}

/// Positions of the items matching `query` (case-insensitive substring).
/// An empty query matches everything.
pub fn filter_indices<T: Searchable>(items: &[T], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Items matching `query`, in their original order
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter_indices(items, query)
        .into_iter()
        .map(|idx| &items[idx])
        .collect()
}
