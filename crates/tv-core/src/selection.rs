//! Selection state machine: which channel is active and its loading phase.
//!
//! ```text
//!  Idle ──select──▶ Loading ──settle(current ticket)──▶ Ready
//!   ▲                 │  ▲                                │
//!   └──back_to_list───┘  └────────────select──────────────┘
//! ```
//!
//! Every `select` and `back_to_list` bumps `generation`.  A `SettleTicket`
//! only settles the selection it was issued for; stale tickets are ignored.

use std::time::Duration;

/// Default settling delay before a loading channel is considered ready.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Handle for a pending settle.  Delivered back to `Selection::settle` once
/// the settling delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleTicket {
    pub generation: u64,
    pub channel_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<String>,
    phase: Phase,
    generation: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Enter `Loading` for `id` from any phase.  Any ticket issued earlier
    /// becomes stale.
    pub fn select(&mut self, id: &str) -> SettleTicket {
        self.generation += 1;
        self.active = Some(id.to_string());
        self.phase = Phase::Loading;
        SettleTicket {
            generation: self.generation,
            channel_id: id.to_string(),
        }
    }

    /// `Loading → Ready` for the selection `ticket` was issued for.  Returns
    /// whether the state changed.
    pub fn settle(&mut self, ticket: &SettleTicket) -> bool {
        if ticket.generation != self.generation || self.phase != Phase::Loading {
            return false;
        }
        if self.active.as_deref() != Some(ticket.channel_id.as_str()) {
            return false;
        }
        self.phase = Phase::Ready;
        true
    }

    /// Clear the active channel.  Returns whether anything was active.
    pub fn back_to_list(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.generation += 1;
        self.active = None;
        self.phase = Phase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let s = Selection::new();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.active_id().is_none());
        assert!(!s.is_loading());
    }

    #[test]
    fn select_then_settle_reaches_ready() {
        let mut s = Selection::new();
        let ticket = s.select("espn");
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(s.active_id(), Some("espn"));
        assert!(s.settle(&ticket));
        assert_eq!(s.phase(), Phase::Ready);
        // Settling twice is a no-op.
        assert!(!s.settle(&ticket));
    }

    #[test]
    fn stale_ticket_never_settles_newer_selection() {
        let mut s = Selection::new();
        let first = s.select("espn");
        let second = s.select("sportv");
        assert!(!s.settle(&first));
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(s.active_id(), Some("sportv"));
        assert!(s.settle(&second));
        assert_eq!(s.phase(), Phase::Ready);
    }

    #[test]
    fn reselecting_same_channel_invalidates_old_ticket() {
        let mut s = Selection::new();
        let first = s.select("espn");
        let second = s.select("espn");
        assert!(!s.settle(&first));
        assert!(s.settle(&second));
    }

    #[test]
    fn ready_to_loading_on_new_selection() {
        let mut s = Selection::new();
        let t = s.select("espn");
        s.settle(&t);
        let t2 = s.select("history");
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(t2.generation, t.generation + 1);
    }

    #[test]
    fn back_to_list_clears_and_invalidates() {
        let mut s = Selection::new();
        let ticket = s.select("espn");
        assert!(s.back_to_list());
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.active_id().is_none());
        assert!(!s.settle(&ticket));
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.back_to_list());
    }
}
