//! Cursor + scroll window over a list whose items are re-derived every frame.
//!
//! The list itself is never stored here; callers pass its current length.

#[derive(Debug, Clone, Default)]
pub struct ScrollableList {
    pub selected: usize,
    pub scroll_offset: usize,
    len: usize,
}

impl ScrollableList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the item count, clamping the cursor into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll_offset > self.selected {
            self.scroll_offset = self.selected;
        }
    }

    pub fn select_up(&mut self, n: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn select_down(&mut self, n: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = (self.selected + n).min(self.len.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    pub fn select(&mut self, idx: usize) {
        if idx < self.len {
            self.selected = idx;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.len).then_some(self.selected)
    }

    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected.saturating_sub(height - 1);
        }
    }

    /// Visible index range for a viewport of `height` rows.
    pub fn visible_range(&self, height: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(self.len);
        let end = (self.scroll_offset + height).min(self.len);
        start..end
    }

    /// Map a click at `row` (relative to the first visible row) to an item
    /// index and select it.
    pub fn handle_click(&mut self, row: usize) -> Option<usize> {
        let target = self.scroll_offset + row;
        if target < self.len {
            self.selected = target;
            Some(target)
        } else {
            None
        }
    }

    pub fn selected_in_view(&self, height: usize) -> usize {
        self.selected
            .saturating_sub(self.scroll_offset)
            .min(height.saturating_sub(1))
    }
}
