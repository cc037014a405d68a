//! FocusRing — manages keyboard focus cycling between panes.

use crate::action::ComponentId;

pub struct FocusRing {
    items: Vec<ComponentId>,
    current: usize,
}

impl FocusRing {
    pub fn new(items: Vec<ComponentId>) -> Self {
        Self { items, current: 0 }
    }

    pub fn current(&self) -> Option<ComponentId> {
        self.items.get(self.current).copied()
    }

    pub fn next(&mut self) -> Option<ComponentId> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.items.len();
        self.current()
    }

    pub fn prev(&mut self) -> Option<ComponentId> {
        if self.items.is_empty() {
            return None;
        }
        self.current = if self.current == 0 {
            self.items.len() - 1
        } else {
            self.current - 1
        };
        self.current()
    }

    pub fn set(&mut self, id: ComponentId) {
        if let Some(pos) = self.items.iter().position(|&x| x == id) {
            self.current = pos;
        }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.current() == Some(id)
    }

    /// Replace the ring contents when the layout switches between browsing
    /// and watching. Focus goes to the first pane of the new layout.
    pub fn set_items(&mut self, items: Vec<ComponentId>) {
        if self.items != items {
            self.items = items;
            self.current = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_both_ways() {
        let mut ring = FocusRing::new(vec![ComponentId::ChannelList, ComponentId::Shelves]);
        assert!(ring.is_focused(ComponentId::ChannelList));
        assert_eq!(ring.next(), Some(ComponentId::Shelves));
        assert_eq!(ring.next(), Some(ComponentId::ChannelList));
        assert_eq!(ring.prev(), Some(ComponentId::Shelves));
        ring.set(ComponentId::HelpOverlay);
        assert!(ring.is_focused(ComponentId::Shelves));
    }

    #[test]
    fn layout_switch_resets_focus() {
        let mut ring = FocusRing::new(vec![ComponentId::ChannelList, ComponentId::Shelves]);
        ring.next();
        ring.set_items(vec![ComponentId::Player, ComponentId::ChannelList]);
        assert_eq!(ring.current(), Some(ComponentId::Player));
        ring.next();
        // Same layout again keeps the current pane.
        ring.set_items(vec![ComponentId::Player, ComponentId::ChannelList]);
        assert_eq!(ring.current(), Some(ComponentId::ChannelList));
        assert_eq!(FocusRing::new(Vec::new()).next(), None);
    }
}
