use super::enums::Tab;
use super::item::{Assignment, Note, ReadingMaterial, Timer};
use super::search::{filter_indices, Searchable};
use chrono::Duration;

/// An ordered list of items with a selection cursor.
///
/// The cursor is `None` exactly when the list is empty, otherwise it is a
/// valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
    cursor: Option<usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
        }
    }
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let cursor = if items.is_empty() { None } else { Some(0) };
        Self { items, cursor }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn selected_mut(&mut self) -> Option<&mut T> {
        self.cursor.and_then(|idx| self.items.get_mut(idx))
    }

    /// Add an item at the end, activating the cursor if the list was empty
    pub fn append(&mut self, item: T) {
        self.items.push(item);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    /// Remove the item at `index`; out-of-range indices are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }

        let removed = self.items.remove(index);
        self.cursor = match self.items.len() {
            0 => None,
            len => self.cursor.map(|c| c.min(len - 1)),
        };
        Some(removed)
    }

    pub fn move_up(&mut self) {
        if let Some(c) = self.cursor {
            self.cursor = Some(c.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(c) = self.cursor {
            if c + 1 < self.items.len() {
                self.cursor = Some(c + 1);
            }
        }
    }

    /// Move to the closest visible index above the cursor
    pub fn move_up_within(&mut self, visible: &[usize]) {
        let Some(c) = self.cursor else { return };
        let target = visible
            .iter()
            .rev()
            .find(|&&idx| idx < c)
            .or_else(|| if visible.contains(&c) { None } else { visible.last() });
        if let Some(&idx) = target {
            self.cursor = Some(idx);
        }
    }

    /// Move to the closest visible index below the cursor
    pub fn move_down_within(&mut self, visible: &[usize]) {
        let Some(c) = self.cursor else { return };
        let target = visible
            .iter()
            .find(|&&idx| idx > c)
            .or_else(|| if visible.contains(&c) { None } else { visible.first() });
        if let Some(&idx) = target {
            self.cursor = Some(idx);
        }
    }

    /// Put the cursor on the first visible index unless it is already visible
    pub fn snap_into(&mut self, visible: &[usize]) {
        if let (Some(c), Some(&first)) = (self.cursor, visible.first()) {
            if !visible.contains(&c) {
                self.cursor = Some(first);
            }
        }
    }
}

/// Type-erased cursor operations, so the controller can act on whichever
/// collection the active tab points at.
pub trait ListCursor {
    fn len(&self) -> usize;
    fn cursor(&self) -> Option<usize>;
    fn move_up(&mut self);
    fn move_down(&mut self);
    fn move_up_within(&mut self, visible: &[usize]);
    fn move_down_within(&mut self, visible: &[usize]);
    fn snap_into(&mut self, visible: &[usize]);
    /// Remove the selected item, returning whether anything was removed
    fn remove_selected(&mut self) -> bool;
    fn visible_indices(&self, query: &str) -> Vec<usize>;
}

impl<T: Searchable> ListCursor for Collection<T> {
    fn len(&self) -> usize {
        Collection::len(self)
    }

    fn cursor(&self) -> Option<usize> {
        Collection::cursor(self)
    }

    fn move_up(&mut self) {
        Collection::move_up(self)
    }

    fn move_down(&mut self) {
        Collection::move_down(self)
    }

    fn move_up_within(&mut self, visible: &[usize]) {
        Collection::move_up_within(self, visible)
    }

    fn move_down_within(&mut self, visible: &[usize]) {
        Collection::move_down_within(self, visible)
    }

    fn snap_into(&mut self, visible: &[usize]) {
        Collection::snap_into(self, visible)
    }

    fn remove_selected(&mut self) -> bool {
        match self.cursor {
            Some(idx) => self.remove_at(idx).is_some(),
            None => false,
        }
    }

    fn visible_indices(&self, query: &str) -> Vec<usize> {
        filter_indices(&self.items, query)
    }
}

/// A parsed item waiting to be added to its collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewItem {
    Assignment(Assignment),
    ReadingMaterial(ReadingMaterial),
    Note(Note),
    Timer(Timer),
}

/// The four collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    pub assignments: Collection<Assignment>,
    pub reading_materials: Collection<ReadingMaterial>,
    pub notes: Collection<Note>,
    pub timers: Collection<Timer>,
}

impl ItemStore {
    /// Store pre-filled with a starter set of coursework
    pub fn seeded() -> Self {
        let mut macbeth = ReadingMaterial::new("Macbeth", "Shakespeare");
        macbeth.read = true;

        Self {
            assignments: Collection::new(vec![
                Assignment("Essay on Shakespeare".to_string()),
                Assignment("Book report on '1984'".to_string()),
                Assignment("Research on Romantic Era".to_string()),
            ]),
            reading_materials: Collection::new(vec![
                macbeth,
                ReadingMaterial::new("1984", "George Orwell"),
            ]),
            notes: Collection::new(vec![
                Note("Note about Macbeth's main theme.".to_string()),
                Note("Personal thoughts on 1984.".to_string()),
            ]),
            timers: Collection::default(),
        }
    }

    /// Cursor operations for the collection behind `tab`
    pub fn list(&self, tab: Tab) -> &dyn ListCursor {
        match tab {
            Tab::Assignments => &self.assignments,
            Tab::ReadingMaterials => &self.reading_materials,
            Tab::Notes => &self.notes,
            Tab::Timers => &self.timers,
        }
    }

    pub fn list_mut(&mut self, tab: Tab) -> &mut dyn ListCursor {
        match tab {
            Tab::Assignments => &mut self.assignments,
            Tab::ReadingMaterials => &mut self.reading_materials,
            Tab::Notes => &mut self.notes,
            Tab::Timers => &mut self.timers,
        }
    }

    /// Append a parsed item to the matching collection
    pub fn insert(&mut self, item: NewItem) {
        match item {
            NewItem::Assignment(a) => self.assignments.append(a),
            NewItem::ReadingMaterial(r) => self.reading_materials.append(r),
            NewItem::Note(n) => self.notes.append(n),
            NewItem::Timer(t) => self.timers.append(t),
        }
    }

    /// Count every timer down by `unit`
    pub fn tick_timers(&mut self, unit: Duration) {
        for timer in &mut self.timers.items {
            timer.tick(unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(n: usize) -> Collection<Note> {
        Collection::new((0..n).map(|i| Note(format!("note {}", i))).collect())
    }

    #[test]
    fn test_new_collection_cursor() {
        assert_eq!(labels(0).cursor(), None);
        assert_eq!(labels(3).cursor(), Some(0));
    }

    #[test]
    fn test_move_down_saturates() {
        let mut notes = labels(3);
        for _ in 0..10 {
            notes.move_down();
        }
        assert_eq!(notes.cursor(), Some(2));
    }

    #[test]
    fn test_move_up_saturates() {
        let mut notes = labels(3);
        notes.move_up();
        assert_eq!(notes.cursor(), Some(0));
    }

    #[test]
    fn test_moves_on_empty_are_noops() {
        let mut notes = labels(0);
        notes.move_down();
        notes.move_up();
        assert_eq!(notes.cursor(), None);
    }

    #[test]
    fn test_remove_last_clamps_cursor() {
        let mut notes = labels(3);
        notes.move_down();
        notes.move_down();
        notes.remove_at(2);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.cursor(), Some(1));
    }

    #[test]
    fn test_remove_middle_keeps_cursor() {
        let mut notes = labels(3);
        notes.move_down();
        let removed = notes.remove_at(1);
        assert_eq!(removed, Some(Note("note 1".to_string())));
        assert_eq!(notes.cursor(), Some(1));
        assert_eq!(notes.items()[1], Note("note 2".to_string()));
    }

    #[test]
    fn test_remove_only_item_deactivates_cursor() {
        let mut notes = labels(1);
        notes.remove_at(0);
        assert!(notes.items().is_empty());
        assert_eq!(notes.cursor(), None);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut notes = labels(2);
        assert_eq!(notes.remove_at(5), None);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.cursor(), Some(0));
    }

    #[test]
    fn test_append_to_empty_activates_cursor() {
        let mut notes = labels(0);
        notes.append(Note("first".to_string()));
        assert_eq!(notes.cursor(), Some(0));
    }

    #[test]
    fn test_delete_property_holds_for_every_position() {
        for len in 1..6 {
            for pos in 0..len {
                let mut notes = labels(len);
                for _ in 0..pos {
                    notes.move_down();
                }
                assert!(ListCursor::remove_selected(&mut notes));
                assert_eq!(notes.len(), len - 1);
                match notes.cursor() {
                    Some(c) => assert!(c < notes.len()),
                    None => assert!(notes.items().is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_move_within_visible_subset() {
        let mut notes = labels(5);
        let visible = vec![1, 3];

        // cursor 0 is hidden: down jumps to the first match
        notes.move_down_within(&visible);
        assert_eq!(notes.cursor(), Some(1));
        notes.move_down_within(&visible);
        assert_eq!(notes.cursor(), Some(3));
        notes.move_down_within(&visible);
        assert_eq!(notes.cursor(), Some(3));
        notes.move_up_within(&visible);
        assert_eq!(notes.cursor(), Some(1));
        notes.move_up_within(&visible);
        assert_eq!(notes.cursor(), Some(1));
    }

    #[test]
    fn test_move_within_empty_subset_is_noop() {
        let mut notes = labels(3);
        notes.move_down_within(&[]);
        assert_eq!(notes.cursor(), Some(0));
    }

    #[test]
    fn test_snap_into_visible_subset() {
        let mut notes = labels(4);
        notes.snap_into(&[2, 3]);
        assert_eq!(notes.cursor(), Some(2));
        notes.move_down();
        notes.snap_into(&[2, 3]);
        assert_eq!(notes.cursor(), Some(3));
        notes.snap_into(&[]);
        assert_eq!(notes.cursor(), Some(3));
    }

    #[test]
    fn test_insert_routes_by_kind() {
        let mut store = ItemStore::default();
        store.insert(NewItem::Timer(Timer::new("Drill", Duration::minutes(5))));
        store.insert(NewItem::Note(Note("Remember the quiz".to_string())));

        assert_eq!(store.timers.len(), 1);
        assert_eq!(store.notes.len(), 1);
        assert!(store.assignments.items().is_empty());
        assert_eq!(store.list(Tab::Timers).cursor(), Some(0));
    }

    #[test]
    fn test_tick_timers() {
        let mut store = ItemStore::default();
        store.insert(NewItem::Timer(Timer::new("Short", Duration::seconds(1))));
        store.insert(NewItem::Timer(Timer::new("Long", Duration::minutes(2))));

        store.tick_timers(Duration::seconds(5));

        let remaining: Vec<Duration> = store.timers.items().iter().map(|t| t.remaining).collect();
        assert_eq!(remaining, vec![Duration::zero(), Duration::seconds(115)]);
    }

    #[test]
    fn test_seeded_store() {
        let store = ItemStore::seeded();
        assert_eq!(store.assignments.len(), 3);
        assert_eq!(store.reading_materials.len(), 2);
        assert!(store.reading_materials.items()[0].read);
        assert_eq!(store.notes.len(), 2);
        assert!(store.timers.items().is_empty());
    }
}
