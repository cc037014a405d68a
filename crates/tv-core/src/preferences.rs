//! Preference store: favorite set and recently-watched history.
//!
//! Neither structure validates ids against the catalog; resolution happens at
//! derivation time, where unknown ids are skipped.

use std::collections::VecDeque;

/// Maximum number of entries kept in the recently-watched list.
pub const RECENT_LIMIT: usize = 5;

/// Set of favorite channel ids, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Add or remove `id`.  Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut favorites = Self::new();
        for id in iter {
            let id = id.into();
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }
}

/// Bounded most-recent-first list of unique channel ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentlyWatched {
    ids: VecDeque<String>,
}

impl RecentlyWatched {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `id` to the front, dropping any older occurrence and anything past
    /// `RECENT_LIMIT`.
    pub fn record(&mut self, id: &str) {
        self.ids.retain(|r| r != id);
        self.ids.push_front(id.to_string());
        self.ids.truncate(RECENT_LIMIT);
    }

    /// Position in the list (0 = most recent).
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|r| r == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub favorites: Favorites,
    pub recently_watched: RecentlyWatched,
}

impl Preferences {
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn record_watched(&mut self, id: &str) {
        self.recently_watched.record(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent(r: &RecentlyWatched) -> Vec<&str> {
        r.iter().collect()
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut favorites: Favorites = ["espn", "history"].into_iter().collect();
        let before = favorites.clone();
        assert!(favorites.toggle("sportv"));
        assert!(!favorites.toggle("sportv"));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle("espn"));
        assert!(favorites.toggle("espn"));
        assert!(favorites.contains("espn"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn favorites_keep_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.toggle("b");
        favorites.toggle("a");
        favorites.toggle("c");
        favorites.toggle("a");
        favorites.toggle("a");
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn from_iter_deduplicates() {
        let favorites: Favorites = ["x", "y", "x"].into_iter().collect();
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn record_moves_to_front_without_duplicates() {
        let mut r = RecentlyWatched::new();
        r.record("a");
        r.record("b");
        r.record("c");
        r.record("a");
        assert_eq!(recent(&r), vec!["a", "c", "b"]);
        assert_eq!(r.position("c"), Some(1));
        assert_eq!(r.position("zzz"), None);
    }

    #[test]
    fn record_is_bounded() {
        let mut r = RecentlyWatched::new();
        for id in ["1", "2", "3", "4", "5", "6", "7"] {
            r.record(id);
            assert!(r.len() <= RECENT_LIMIT);
        }
        assert_eq!(recent(&r), vec!["7", "6", "5", "4", "3"]);

        // Re-recording an entry already present never evicts another one.
        r.record("5");
        assert_eq!(recent(&r), vec!["5", "7", "6", "4", "3"]);
    }

    #[test]
    fn toggle_does_not_touch_recent() {
        let mut prefs = Preferences::default();
        prefs.record_watched("espn");
        prefs.toggle_favorite("espn");
        prefs.toggle_favorite("history");
        assert_eq!(recent(&prefs.recently_watched), vec!["espn"]);
    }
}
