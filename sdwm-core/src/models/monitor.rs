//! A physical display and the windows living on it.
use super::{Handle, TagMask, Window, WindowHandle, Xyhw};
use crate::layouts::Layout;
use serde::{Deserialize, Serialize};

pub type MonitorId = usize;

/// Every managed window belongs to exactly one monitor, and is listed exactly once in both its
/// insertion order and its stacking order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Monitor<H: Handle> {
    pub id: MonitorId,
    /// Full geometry of the output.
    pub outer: Xyhw,
    /// Area windows are arranged in.
    pub work: Xyhw,
    pub master_fraction: f32,
    pub master_count: i32,
    tagset: [TagMask; 2],
    selected_tagset: usize,
    layouts: [Layout; 2],
    selected_layout: usize,
    /// Insertion order, newest first.
    #[serde(bound = "")]
    clients: Vec<Window<H>>,
    /// Stacking order, topmost first.
    #[serde(bound = "")]
    stack: Vec<WindowHandle<H>>,
    #[serde(bound = "")]
    pub selected: Option<WindowHandle<H>>,
}

impl<H: Handle> Monitor<H> {
    #[must_use]
    pub fn new(
        id: MonitorId,
        tags: TagMask,
        layouts: [Layout; 2],
        master_fraction: f32,
        master_count: i32,
    ) -> Self {
        Self {
            id,
            outer: Xyhw::default(),
            work: Xyhw::default(),
            master_fraction,
            master_count,
            tagset: [tags, tags],
            selected_tagset: 0,
            layouts,
            selected_layout: 0,
            clients: vec![],
            stack: vec![],
            selected: None,
        }
    }

    #[must_use]
    pub const fn active_tags(&self) -> TagMask {
        self.tagset[self.selected_tagset]
    }

    pub fn set_active_tags(&mut self, tags: TagMask) {
        self.tagset[self.selected_tagset] = tags;
    }

    /// Switches to the other tag set slot.
    pub fn toggle_tagset(&mut self) {
        self.selected_tagset ^= 1;
    }

    #[must_use]
    pub const fn selected_tagset(&self) -> usize {
        self.selected_tagset
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layouts[self.selected_layout]
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layouts[self.selected_layout] = layout;
    }

    /// Switches to the other layout slot.
    pub fn toggle_layout(&mut self) {
        self.selected_layout ^= 1;
    }

    #[must_use]
    pub const fn is_visible(&self, window: &Window<H>) -> bool {
        window.has_tag(self.active_tags())
    }

    #[must_use]
    pub fn is_visible_handle(&self, handle: WindowHandle<H>) -> bool {
        self.window(handle).is_some_and(|w| self.is_visible(w))
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle<H>) -> bool {
        self.clients.iter().any(|w| w.handle == handle)
    }

    #[must_use]
    pub fn clients(&self) -> &[Window<H>] {
        &self.clients
    }

    #[must_use]
    pub fn stack(&self) -> &[WindowHandle<H>] {
        &self.stack
    }

    #[must_use]
    pub fn window(&self, handle: WindowHandle<H>) -> Option<&Window<H>> {
        self.clients.iter().find(|w| w.handle == handle)
    }

    pub fn window_mut(&mut self, handle: WindowHandle<H>) -> Option<&mut Window<H>> {
        self.clients.iter_mut().find(|w| w.handle == handle)
    }

    #[must_use]
    pub fn selected_window(&self) -> Option<&Window<H>> {
        self.window(self.selected?)
    }

    /// Visible windows taking part in the layout, in insertion order.
    pub fn tiled(&self) -> impl Iterator<Item = &Window<H>> {
        self.clients
            .iter()
            .filter(|w| !w.floating && self.is_visible(w))
    }

    /// Topmost visible window.
    #[must_use]
    pub fn first_visible(&self) -> Option<WindowHandle<H>> {
        self.stack
            .iter()
            .copied()
            .find(|h| self.is_visible_handle(*h))
    }

    /// Adds a window at the head of the insertion order.
    pub fn attach(&mut self, window: Window<H>) {
        self.clients.insert(0, window);
    }

    /// Removes a window from the insertion order.
    pub fn detach(&mut self, handle: WindowHandle<H>) -> Option<Window<H>> {
        let index = self.clients.iter().position(|w| w.handle == handle)?;
        Some(self.clients.remove(index))
    }

    /// Puts a window on top of the stacking order.
    pub fn attach_stack(&mut self, handle: WindowHandle<H>) {
        self.stack.insert(0, handle);
    }

    /// Removes a window from the stacking order. If it was selected, the topmost visible window
    /// is selected instead.
    pub fn detach_stack(&mut self, handle: WindowHandle<H>) {
        self.stack.retain(|h| *h != handle);
        if self.selected == Some(handle) {
            self.selected = self.first_visible();
        }
    }

    /// Moves a window to the head of the insertion order.
    pub fn pop(&mut self, handle: WindowHandle<H>) {
        if let Some(window) = self.detach(handle) {
            self.attach(window);
        }
    }

    /// Empties the monitor, returning its windows in insertion order.
    pub fn take_clients(&mut self) -> Vec<Window<H>> {
        self.stack.clear();
        self.selected = None;
        std::mem::take(&mut self.clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn monitor() -> Monitor<MockHandle> {
        Monitor::new(0, 1, [Layout::Tile, Layout::Floating], 0.55, 1)
    }

    fn window(handle: i32, tags: TagMask) -> Window<MockHandle> {
        let mut window = Window::new(WindowHandle(handle), Xyhw::new(0, 0, 100, 100), 1);
        window.tags = tags;
        window
    }

    fn manage(monitor: &mut Monitor<MockHandle>, handle: i32, tags: TagMask) {
        monitor.attach(window(handle, tags));
        monitor.attach_stack(WindowHandle(handle));
    }

    fn same_members(monitor: &Monitor<MockHandle>) -> bool {
        let mut clients: Vec<i32> = monitor.clients().iter().map(|w| w.handle.0).collect();
        let mut stack: Vec<i32> = monitor.stack().iter().map(|h| h.0).collect();
        clients.sort_unstable();
        stack.sort_unstable();
        clients == stack
    }

    #[test]
    fn attach_inserts_at_the_head() {
        let mut subject = monitor();
        manage(&mut subject, 1, 1);
        manage(&mut subject, 2, 1);
        manage(&mut subject, 3, 1);
        let order: Vec<i32> = subject.clients().iter().map(|w| w.handle.0).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(subject.stack()[0], WindowHandle(3));
    }

    #[test]
    fn both_orders_hold_the_same_windows() {
        let mut subject = monitor();
        for handle in 1..=5 {
            manage(&mut subject, handle, 1);
            assert!(same_members(&subject));
        }
        subject.detach(WindowHandle(3));
        subject.detach_stack(WindowHandle(3));
        assert!(same_members(&subject));
        subject.pop(WindowHandle(1));
        assert!(same_members(&subject));
        subject.detach_stack(WindowHandle(5));
        subject.attach_stack(WindowHandle(5));
        assert!(same_members(&subject));
        assert_eq!(subject.clients().len(), 4);
        assert_eq!(subject.stack().len(), 4);
    }

    #[test]
    fn detaching_a_missing_window_is_harmless() {
        let mut subject = monitor();
        manage(&mut subject, 1, 1);
        assert!(subject.detach(WindowHandle(9)).is_none());
        subject.detach_stack(WindowHandle(9));
        assert_eq!(subject.clients().len(), 1);
        assert_eq!(subject.stack().len(), 1);
    }

    #[test]
    fn detach_stack_reselects_topmost_visible_window() {
        let mut subject = monitor();
        manage(&mut subject, 1, 1);
        manage(&mut subject, 2, 2);
        manage(&mut subject, 3, 1);
        manage(&mut subject, 4, 2);
        subject.selected = Some(WindowHandle(4));
        // Stack is 4, 3, 2, 1. Only tag 1 is visible.
        subject.detach_stack(WindowHandle(4));
        assert_eq!(subject.selected, Some(WindowHandle(3)));
    }

    #[test]
    fn detach_stack_clears_selection_without_visible_windows() {
        let mut subject = monitor();
        manage(&mut subject, 1, 2);
        manage(&mut subject, 2, 1);
        subject.selected = Some(WindowHandle(2));
        subject.detach_stack(WindowHandle(2));
        assert_eq!(subject.selected, None);
    }

    #[test]
    fn tiled_skips_floating_and_hidden_windows() {
        let mut subject = monitor();
        manage(&mut subject, 1, 1);
        manage(&mut subject, 2, 2);
        manage(&mut subject, 3, 1);
        if let Some(w) = subject.window_mut(WindowHandle(3)) {
            w.floating = true;
        }
        let tiled: Vec<i32> = subject.tiled().map(|w| w.handle.0).collect();
        assert_eq!(tiled, vec![1]);
    }

    #[test]
    fn tag_and_layout_slots_toggle() {
        let mut subject = monitor();
        subject.toggle_tagset();
        subject.set_active_tags(4);
        assert_eq!(subject.active_tags(), 4);
        subject.toggle_tagset();
        assert_eq!(subject.active_tags(), 1);

        assert_eq!(subject.layout(), Layout::Tile);
        subject.toggle_layout();
        assert_eq!(subject.layout(), Layout::Floating);
    }
}
