//! Session — the single owner of all mutable browsing state.
//!
//! Every user intent maps to one named operation here.  Derived lists
//! (`organized`, `favorites_view`, …) are recomputed from scratch on each call;
//! nothing derived is stored.  `rev` increments whenever an operation actually
//! changes state so the view layer knows when to redraw.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Channel, ALL_CATEGORY};
use crate::navigator::Navigator;
use crate::organizer;
use crate::preferences::Preferences;
use crate::selection::{Phase, Selection, SettleTicket};

/// Category + search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            search_term: String::new(),
        }
    }
}

/// What the view layer should show in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display<'a> {
    /// No active channel: show the organized list.
    List,
    /// Channel chosen; render a loading indicator.
    Loading(&'a Channel),
    /// Channel ready; render its URL in the embedded surface.
    Ready(&'a Channel),
}

pub struct Session {
    catalog: Arc<Catalog>,
    filter: FilterState,
    prefs: Preferences,
    selection: Selection,
    rev: u64,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        info!(
            "session: {} channels in {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Self {
            catalog,
            filter: FilterState::default(),
            prefs: Preferences::default(),
            selection: Selection::new(),
            rev: 1,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.prefs.favorites.contains(id)
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.selection
            .active_id()
            .and_then(|id| self.catalog.channel(id))
    }

    // ── Filter ────────────────────────────────────────────────────────────────

    /// Switch the active category.  Unknown ids are ignored.
    pub fn set_category(&mut self, id: &str) -> bool {
        if self.catalog.category(id).is_none() {
            debug!("session: ignoring unknown category {:?}", id);
            return false;
        }
        if self.filter.active_category == id {
            return false;
        }
        debug!(
            "session: category {:?} → {:?}",
            self.filter.active_category, id
        );
        self.filter.active_category = id.to_string();
        self.rev += 1;
        true
    }

    /// Back to the `"all"` pseudo-category.
    pub fn reset_category(&mut self) -> bool {
        self.set_category(ALL_CATEGORY)
    }

    pub fn set_search(&mut self, term: &str) -> bool {
        if self.filter.search_term == term {
            return false;
        }
        debug!("session: search {:?} → {:?}", self.filter.search_term, term);
        self.filter.search_term = term.to_string();
        self.rev += 1;
        true
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search("")
    }

    // ── Preferences ───────────────────────────────────────────────────────────

    /// Toggle favorite membership.  Returns the new membership; ids outside
    /// the catalog are ignored and report `false`.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if !self.catalog.contains_channel(id) {
            debug!("session: ignoring favorite toggle for unknown id {:?}", id);
            return false;
        }
        let now = self.prefs.toggle_favorite(id);
        debug!("session: favorite {:?} → {}", id, now);
        self.rev += 1;
        now
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    /// Make `id` the active channel and record it as watched.  Returns the
    /// ticket to hand to the settle timer, or `None` for unknown ids.
    pub fn select_channel(&mut self, id: &str) -> Option<SettleTicket> {
        if !self.catalog.contains_channel(id) {
            warn!("session: ignoring selection of unknown channel {:?}", id);
            return None;
        }
        self.prefs.record_watched(id);
        let ticket = self.selection.select(id);
        debug!(
            "session: select {:?} (generation {})",
            id, ticket.generation
        );
        self.rev += 1;
        Some(ticket)
    }

    /// Deliver a fired settle timer.  Returns whether the channel became ready.
    pub fn settle(&mut self, ticket: &SettleTicket) -> bool {
        if self.selection.settle(ticket) {
            debug!("session: {:?} ready", ticket.channel_id);
            self.rev += 1;
            true
        } else {
            debug!(
                "session: stale settle for {:?} (generation {}, current {})",
                ticket.channel_id,
                ticket.generation,
                self.selection.generation()
            );
            false
        }
    }

    pub fn back_to_list(&mut self) -> bool {
        if self.selection.back_to_list() {
            debug!("session: back to list");
            self.rev += 1;
            true
        } else {
            false
        }
    }

    /// Hand the channel's URL to the host navigation primitive.  Does not
    /// change any state.
    pub fn open_external(&self, id: &str, navigator: &dyn Navigator) -> anyhow::Result<()> {
        let channel = self
            .catalog
            .channel(id)
            .ok_or_else(|| anyhow::anyhow!("unknown channel {:?}", id))?;
        info!("session: opening {:?} externally: {}", id, channel.url);
        navigator.open(&channel.url)
    }

    // ── Derivations ───────────────────────────────────────────────────────────

    pub fn organized(&self) -> Vec<&Channel> {
        organizer::organize(
            self.catalog.channels(),
            &self.filter.active_category,
            &self.filter.search_term,
            &self.prefs.favorites,
            &self.prefs.recently_watched,
        )
    }

    /// The organized list without the active channel.
    pub fn other_channels(&self) -> Vec<&Channel> {
        let active = self.selection.active_id();
        self.organized()
            .into_iter()
            .filter(|c| Some(c.id.as_str()) != active)
            .collect()
    }

    pub fn favorites_view(&self) -> Vec<&Channel> {
        organizer::favorites_view(&self.catalog, &self.prefs.favorites)
    }

    pub fn recent_view(&self) -> Vec<&Channel> {
        organizer::recent_view(&self.catalog, &self.prefs.recently_watched)
    }

    pub fn display(&self) -> Display<'_> {
        match (self.selection.phase(), self.active_channel()) {
            (Phase::Loading, Some(c)) => Display::Loading(c),
            (Phase::Ready, Some(c)) => Display::Ready(c),
            _ => Display::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::builtin()))
    }

    fn ids(channels: &[&Channel]) -> Vec<String> {
        channels.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn defaults() {
        let s = session();
        assert_eq!(s.filter().active_category, ALL_CATEGORY);
        assert!(s.filter().search_term.is_empty());
        assert_eq!(s.display(), Display::List);
        assert_eq!(s.organized().len(), s.catalog().len());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut s = session();
        let rev = s.rev();
        assert!(!s.toggle_favorite("nope"));
        assert!(s.select_channel("nope").is_none());
        assert!(!s.set_category("nope"));
        assert_eq!(s.rev(), rev);
        assert!(s.preferences().favorites.is_empty());
        assert!(s.preferences().recently_watched.is_empty());
    }

    #[test]
    fn rev_only_moves_on_change() {
        let mut s = session();
        let rev = s.rev();
        assert!(!s.set_search(""));
        assert!(!s.reset_category());
        assert!(!s.back_to_list());
        assert_eq!(s.rev(), rev);
        assert!(s.set_search("es"));
        assert!(s.rev() > rev);
    }

    #[test]
    fn selection_flows_through_display() {
        let mut s = session();
        let ticket = s.select_channel("history").unwrap();
        assert!(matches!(s.display(), Display::Loading(c) if c.id == "history"));
        assert!(s.settle(&ticket));
        assert!(matches!(s.display(), Display::Ready(c) if c.id == "history"));
        assert!(s.back_to_list());
        assert_eq!(s.display(), Display::List);
        assert!(!s.selection().is_loading());
    }

    #[test]
    fn back_to_list_keeps_preferences() {
        let mut s = session();
        s.toggle_favorite("espn");
        s.select_channel("history");
        s.back_to_list();
        assert!(s.is_favorite("espn"));
        assert_eq!(
            s.preferences().recently_watched.iter().collect::<Vec<_>>(),
            vec!["history"]
        );
    }

    #[test]
    fn other_channels_exclude_active() {
        let mut s = session();
        s.select_channel("espn");
        let others = s.other_channels();
        assert_eq!(others.len(), s.catalog().len() - 1);
        assert!(others.iter().all(|c| c.id != "espn"));
    }

    #[test]
    fn empty_filter_result_and_reset() {
        let mut s = session();
        s.set_category("news");
        assert!(s.organized().is_empty());
        assert!(s.reset_category());
        assert_eq!(s.organized().len(), s.catalog().len());
    }

    #[test]
    fn open_external_uses_navigator_without_state_change() {
        let s = session();
        let nav = RecordingNavigator::new();
        let rev = s.rev();
        s.open_external("espn", &nav).unwrap();
        assert!(s.open_external("nope", &nav).is_err());
        assert_eq!(nav.opened(), vec!["https://embedcanaistv.com/espn/"]);
        assert_eq!(s.rev(), rev);
        assert_eq!(s.display(), Display::List);
    }

    #[test]
    fn views_follow_preferences() {
        let mut s = session();
        s.toggle_favorite("multishow");
        s.toggle_favorite("espn");
        s.select_channel("sportv");
        s.select_channel("globors");
        assert_eq!(ids(&s.favorites_view()), vec!["espn", "multishow"]);
        assert_eq!(ids(&s.recent_view()), vec!["globors", "sportv"]);
    }
}
