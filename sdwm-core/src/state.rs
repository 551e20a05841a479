//! Everything the window manager knows about the session.

use crate::config::{Config, Keybind, Mousebind};
use crate::layouts::Layout;
use crate::models::{ClampMode, Handle, Mode, Monitor, MonitorId, Tags, Window, WindowHandle, Xyhw};
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    /// Monitors in the order they appeared.
    pub monitors: Vec<Monitor<H>>,
    /// Index into `monitors`.
    pub selected_monitor: usize,
    /// The whole virtual screen.
    pub screen: Xyhw,
    pub root: WindowHandle<H>,
    pub tags: Tags,
    pub mode: Mode<H>,
    pub actions: VecDeque<DisplayAction<H>>,
    pub running: bool,
    /// Monitor under the pointer at the last root motion event.
    pub(crate) motion_monitor: Option<usize>,
    next_monitor_id: MonitorId,
    pub border_width: i32,
    pub snap: i32,
    pub lock_fullscreen: bool,
    pub master_fraction: f32,
    pub master_count: i32,
    pub layouts: [Layout; 2],
    pub key_bindings: Vec<Keybind>,
    pub mouse_bindings: Vec<Mousebind>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config, root: WindowHandle<H>) -> Self {
        let layouts = config.layouts();
        let first = layouts.first().copied().unwrap_or_default();
        let last = layouts.last().copied().unwrap_or(Layout::Floating);
        Self {
            monitors: vec![],
            selected_monitor: 0,
            screen: Xyhw::default(),
            root,
            tags: Tags::new(config.tag_count()),
            mode: Mode::Normal,
            actions: VecDeque::new(),
            running: true,
            motion_monitor: None,
            next_monitor_id: 0,
            border_width: config.border_width(),
            snap: config.snap(),
            lock_fullscreen: config.lock_fullscreen(),
            master_fraction: config.master_fraction(),
            master_count: config.master_count(),
            layouts: [first, last],
            key_bindings: config.key_bindings(),
            mouse_bindings: config.mouse_bindings(),
        }
    }

    /// A fresh monitor showing the first tag.
    pub(crate) fn create_monitor(&mut self) -> Monitor<H> {
        let id = self.next_monitor_id;
        self.next_monitor_id += 1;
        Monitor::new(
            id,
            1,
            self.layouts,
            self.master_fraction,
            self.master_count,
        )
    }

    #[must_use]
    pub fn current_monitor(&self) -> Option<&Monitor<H>> {
        self.monitors.get(self.selected_monitor)
    }

    pub fn current_monitor_mut(&mut self) -> Option<&mut Monitor<H>> {
        self.monitors.get_mut(self.selected_monitor)
    }

    /// The selected window of the selected monitor.
    #[must_use]
    pub fn selected_window(&self) -> Option<WindowHandle<H>> {
        self.current_monitor()?.selected
    }

    /// Index of the monitor owning `handle`.
    #[must_use]
    pub fn monitor_of(&self, handle: WindowHandle<H>) -> Option<usize> {
        self.monitors.iter().position(|m| m.contains(handle))
    }

    #[must_use]
    pub fn window(&self, handle: WindowHandle<H>) -> Option<&Window<H>> {
        self.monitors.iter().find_map(|m| m.window(handle))
    }

    pub fn window_mut(&mut self, handle: WindowHandle<H>) -> Option<&mut Window<H>> {
        self.monitors.iter_mut().find_map(|m| m.window_mut(handle))
    }

    #[must_use]
    pub fn is_managed(&self, handle: WindowHandle<H>) -> bool {
        self.monitor_of(handle).is_some()
    }

    /// Whether the window carries a tag its monitor currently shows.
    #[must_use]
    pub fn is_visible(&self, handle: WindowHandle<H>) -> bool {
        self.monitors.iter().any(|m| m.is_visible_handle(handle))
    }

    /// Clamps `geometry` and commits it when it differs from the current one.
    pub fn resize(&mut self, handle: WindowHandle<H>, mut geometry: Xyhw, mode: ClampMode) {
        let Some(index) = self.monitor_of(handle) else {
            return;
        };
        let monitor = &self.monitors[index];
        let Some(window) = monitor.window(handle) else {
            return;
        };
        if window.apply_size_hints(&mut geometry, mode, &self.screen, &monitor.work) {
            self.resize_client(handle, geometry);
        }
    }

    /// Commits a geometry as is, remembering the previous one.
    pub fn resize_client(&mut self, handle: WindowHandle<H>, geometry: Xyhw) {
        let Some(window) = self.window_mut(handle) else {
            return;
        };
        window.old_geometry = window.geometry;
        window.geometry = geometry;
        let border = window.border;
        self.actions
            .push_back(DisplayAction::ConfigureWindow(handle, geometry, border));
    }

    /// The monitor whose work area overlaps `rect` the most. Ties and rectangles outside every
    /// monitor go to the selected monitor.
    #[must_use]
    pub fn rect_to_monitor(&self, rect: &Xyhw) -> usize {
        let mut best = self.selected_monitor;
        let mut best_area = self
            .monitors
            .get(best)
            .map_or(0, |m| m.work.intersection_area(rect));
        for (index, monitor) in self.monitors.iter().enumerate() {
            let area = monitor.work.intersection_area(rect);
            if area > best_area {
                best = index;
                best_area = area;
            }
        }
        best
    }

    /// The next (positive) or previous monitor, wrapping around.
    #[must_use]
    pub fn dir_to_monitor(&self, direction: i32) -> usize {
        let count = self.monitors.len();
        if count == 0 {
            return 0;
        }
        if direction > 0 {
            (self.selected_monitor + 1) % count
        } else if self.selected_monitor == 0 {
            count - 1
        } else {
            self.selected_monitor - 1
        }
    }

    /// The monitor a window belongs to. The root resolves to the monitor under the given root
    /// coordinates, unknown windows to the selected monitor.
    #[must_use]
    pub fn window_to_monitor(&self, handle: WindowHandle<H>, x: i32, y: i32) -> usize {
        if handle == self.root {
            return self.rect_to_monitor(&Xyhw::new(x, y, 1, 1));
        }
        self.monitor_of(handle).unwrap_or(self.selected_monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::MockHandle;

    fn state_with(rects: &[Xyhw]) -> State<MockHandle> {
        let mut state = State::new(&TestConfig::new(9), WindowHandle(0));
        for rect in rects {
            let mut monitor = state.create_monitor();
            monitor.outer = *rect;
            monitor.work = *rect;
            state.monitors.push(monitor);
        }
        state.screen = Xyhw::new(0, 0, 3840, 1080);
        state
    }

    fn side_by_side() -> State<MockHandle> {
        state_with(&[
            Xyhw::new(0, 0, 1920, 1080),
            Xyhw::new(1920, 0, 1920, 1080),
        ])
    }

    #[test]
    fn layout_slots_take_first_and_last_configured_layouts() {
        let state = side_by_side();
        assert_eq!(state.layouts, [Layout::Tile, Layout::Floating]);
        assert_eq!(state.monitors[1].layout(), Layout::Tile);
        assert_ne!(state.monitors[0].id, state.monitors[1].id);
    }

    #[test]
    fn rect_to_monitor_prefers_largest_overlap() {
        let state = side_by_side();
        assert_eq!(state.rect_to_monitor(&Xyhw::new(1800, 0, 200, 100)), 0);
        assert_eq!(state.rect_to_monitor(&Xyhw::new(1850, 0, 200, 100)), 1);
    }

    #[test]
    fn rect_to_monitor_breaks_ties_with_selected_monitor() {
        let mut state = side_by_side();
        let straddling = Xyhw::new(1820, 0, 200, 100);
        state.selected_monitor = 1;
        assert_eq!(state.rect_to_monitor(&straddling), 1);
        state.selected_monitor = 0;
        assert_eq!(state.rect_to_monitor(&straddling), 0);
    }

    #[test]
    fn rect_to_monitor_falls_back_to_selected_monitor() {
        let mut state = side_by_side();
        state.selected_monitor = 1;
        assert_eq!(state.rect_to_monitor(&Xyhw::new(-500, -500, 10, 10)), 1);
    }

    #[test]
    fn dir_to_monitor_wraps_both_ways() {
        let mut state = state_with(&[
            Xyhw::new(0, 0, 100, 100),
            Xyhw::new(100, 0, 100, 100),
            Xyhw::new(200, 0, 100, 100),
        ]);
        assert_eq!(state.dir_to_monitor(-1), 2);
        assert_eq!(state.dir_to_monitor(1), 1);
        state.selected_monitor = 2;
        assert_eq!(state.dir_to_monitor(1), 0);
    }

    #[test]
    fn root_resolves_to_monitor_under_pointer() {
        let state = side_by_side();
        assert_eq!(state.window_to_monitor(WindowHandle(0), 2500, 10), 1);
        assert_eq!(state.window_to_monitor(WindowHandle(42), 2500, 10), 0);
    }

    #[test]
    fn resize_skips_unchanged_geometry() {
        let mut state = side_by_side();
        let geometry = Xyhw::new(10, 10, 300, 200);
        state.monitors[0].attach(Window::new(WindowHandle(5), geometry, 1));
        state.monitors[0].attach_stack(WindowHandle(5));

        state.resize(WindowHandle(5), geometry, ClampMode::Layout);
        assert!(state.actions.is_empty());

        let moved = Xyhw::new(20, 10, 300, 200);
        state.resize(WindowHandle(5), moved, ClampMode::Layout);
        assert_eq!(
            state.actions.pop_front(),
            Some(DisplayAction::ConfigureWindow(WindowHandle(5), moved, 1))
        );
        let window = state.window(WindowHandle(5)).unwrap();
        assert_eq!(window.old_geometry, geometry);
    }
}
