#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::models::ConfigureRequest;
use crate::state::State;
use std::cmp;

impl<H: Handle> State<H> {
    /// Starts managing a window that asked to be mapped.
    pub fn window_created_handler(&mut self, mut window: Window<H>) {
        let handle = window.handle;
        if self.is_managed(handle) || self.monitors.is_empty() {
            return;
        }

        let parent = window
            .transient
            .and_then(|p| Some((self.monitor_of(p)?, self.window(p)?.tags)));
        let index = match parent {
            Some((index, tags)) => {
                window.tags = tags;
                index
            }
            None => {
                let index = self.selected_monitor;
                window.tags = self.monitors[index].active_tags();
                index
            }
        };
        tracing::debug!("Managing window {:?} on monitor {}", handle, index);

        let work = self.monitors[index].work;
        let mut geometry = window.geometry;
        if geometry.x() + window.outer_width() > work.right() {
            geometry.set_x(work.right() - window.outer_width());
        }
        if geometry.y() + window.outer_height() > work.bottom() {
            geometry.set_y(work.bottom() - window.outer_height());
        }
        geometry.set_x(cmp::max(geometry.x(), work.x()));
        geometry.set_y(cmp::max(geometry.y(), work.y()));
        window.geometry = geometry;
        window.old_geometry = geometry;
        window.old_border = window.border;
        window.border = self.border_width;

        self.actions
            .push_back(DisplayAction::AddedWindow(handle, window.border));
        self.actions
            .push_back(DisplayAction::GrabButtons(handle, false));

        window.floating = window.transient.is_some();
        window.old_floating = window.floating;
        if window.floating {
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        }

        let monitor = &mut self.monitors[index];
        monitor.attach(window);
        monitor.attach_stack(handle);

        if index == self.selected_monitor {
            if let Some(selected) = self.selected_window() {
                self.unfocus(selected, false);
            }
        }
        self.monitors[index].selected = Some(handle);
        self.arrange(Some(index));
        self.actions.push_back(DisplayAction::MapWindow(handle));
        self.focus(None);
    }

    /// Stops managing a window. `destroyed` is false when the window still exists, it then gets
    /// its original border back.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle<H>, destroyed: bool) {
        let Some(index) = self.monitor_of(handle) else {
            return;
        };
        let monitor = &mut self.monitors[index];
        let Some(window) = monitor.detach(handle) else {
            return;
        };
        monitor.detach_stack(handle);
        tracing::debug!("Released window {:?}", handle);
        if !destroyed {
            self.actions
                .push_back(DisplayAction::ReleaseWindow(handle, window.old_border));
        }
        self.focus(None);
        self.arrange(Some(index));
    }

    /// A client wants its window moved, resized or restacked.
    pub fn configure_request_handler(&mut self, request: ConfigureRequest<H>) {
        let Some(index) = self.monitor_of(request.handle) else {
            self.actions
                .push_back(DisplayAction::ForwardConfigure(request));
            return;
        };
        let floating_layout = self
            .current_monitor()
            .is_some_and(|m| m.layout().is_floating());
        let outer = self.monitors[index].outer;
        let visible = self.is_visible(request.handle);
        let Some(window) = self.monitors[index].window_mut(request.handle) else {
            return;
        };

        if let Some(border) = request.border {
            window.border = border;
            return;
        }
        if !window.floating && !floating_layout {
            let (geometry, border) = (window.geometry, window.border);
            self.actions.push_back(DisplayAction::NotifyGeometry(
                request.handle,
                geometry,
                border,
            ));
            return;
        }

        let mut geometry = window.geometry;
        if let Some(x) = request.x {
            window.old_geometry.set_x(geometry.x());
            geometry.set_x(outer.x() + x);
        }
        if let Some(y) = request.y {
            window.old_geometry.set_y(geometry.y());
            geometry.set_y(outer.y() + y);
        }
        if let Some(w) = request.w {
            window.old_geometry.set_w(geometry.w());
            geometry.set_w(w);
        }
        if let Some(h) = request.h {
            window.old_geometry.set_h(geometry.h());
            geometry.set_h(h);
        }
        if window.floating {
            let outer_width = geometry.w() + 2 * window.border;
            let outer_height = geometry.h() + 2 * window.border;
            if geometry.right() > outer.right() {
                geometry.set_x(outer.x() + (outer.w() / 2 - outer_width / 2));
            }
            if geometry.bottom() > outer.bottom() {
                geometry.set_y(outer.y() + (outer.h() / 2 - outer_height / 2));
            }
        }
        window.geometry = geometry;
        let border = window.border;

        let moved = request.x.is_some() || request.y.is_some();
        let sized = request.w.is_some() || request.h.is_some();
        if moved && !sized {
            self.actions.push_back(DisplayAction::NotifyGeometry(
                request.handle,
                geometry,
                border,
            ));
        }
        if visible {
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(request.handle, geometry));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Layout;

    fn dialog(handle: i32, parent: i32) -> Window<i32> {
        let mut window = Window::new(WindowHandle(handle), Xyhw::new(50, 50, 200, 100), 2);
        window.transient = Some(WindowHandle(parent));
        window
    }

    #[test]
    fn managed_windows_join_both_lists_and_get_selected() {
        let mut manager = Manager::new_test(9);
        manager.take_test_actions();
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        let monitor = &manager.state.monitors[0];
        assert_eq!(monitor.clients().len(), 1);
        assert_eq!(monitor.stack(), &[WindowHandle(1)]);
        assert_eq!(monitor.selected, Some(WindowHandle(1)));
        assert_eq!(monitor.clients()[0].tags, 1);
        let actions = manager.take_test_actions();
        assert_eq!(
            actions[0],
            DisplayAction::AddedWindow(WindowHandle(1), 1)
        );
        assert!(actions.contains(&DisplayAction::MapWindow(WindowHandle(1))));
    }

    #[test]
    fn managing_twice_is_ignored() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        assert_eq!(manager.state.monitors[0].clients().len(), 1);
    }

    #[test]
    fn new_windows_are_clamped_into_the_work_area() {
        let mut manager = Manager::new_test(9);
        manager.state.monitors[0].set_layout(Layout::Floating);
        manager.manage_test_window(1, Xyhw::new(1900, -40, 100, 100));
        let geometry = manager.state.window(WindowHandle(1)).unwrap().geometry;
        assert_eq!(geometry.x(), 1820);
        assert_eq!(geometry.y(), 0);
    }

    #[test]
    fn transient_windows_follow_their_parent_and_float() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.state.window_mut(WindowHandle(1)).unwrap().tags = 4;
        manager.state.window_created_handler(dialog(2, 1));
        let window = manager.state.window(WindowHandle(2)).unwrap();
        assert!(window.floating);
        assert_eq!(window.tags, 4);
        assert_eq!(window.old_border, 2);
        assert_eq!(window.border, 1);
    }

    #[test]
    fn unmanaging_the_selection_reselects_topmost_visible_window() {
        let mut manager = Manager::new_test(9);
        for handle in 1..=3 {
            manager.manage_test_window(handle, Xyhw::new(0, 0, 100, 100));
        }
        manager.state.focus(Some(WindowHandle(1)));
        // stack is now 1, 3, 2
        manager.state.window_destroyed_handler(WindowHandle(1), true);
        assert_eq!(manager.state.selected_window(), Some(WindowHandle(3)));
        assert!(!manager.state.is_managed(WindowHandle(1)));
    }

    #[test]
    fn unmapped_windows_get_their_border_back() {
        let mut manager = Manager::new_test(9);
        manager.state.window_created_handler(dialog(5, 9));
        manager.state.window_destroyed_handler(WindowHandle(5), false);
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::ReleaseWindow(WindowHandle(5), 2)));
    }

    #[test]
    fn configure_requests_of_unmanaged_windows_are_forwarded() {
        let mut manager = Manager::new_test(9);
        let mut request = ConfigureRequest::new(WindowHandle(8));
        request.w = Some(640);
        manager.state.configure_request_handler(request.clone());
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::ForwardConfigure(request))
        );
    }

    #[test]
    fn tiled_windows_keep_their_geometry() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        let before = manager.state.window(WindowHandle(1)).unwrap().geometry;
        let mut request = ConfigureRequest::new(WindowHandle(1));
        request.w = Some(640);
        manager.state.configure_request_handler(request);
        assert_eq!(manager.state.window(WindowHandle(1)).unwrap().geometry, before);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::NotifyGeometry(WindowHandle(1), before, 1))
        );
    }

    #[test]
    fn floating_windows_spilling_out_are_centered() {
        let mut manager = Manager::new_test(9);
        manager.state.window_created_handler(dialog(5, 9));
        manager.state.actions.clear();
        let mut request = ConfigureRequest::new(WindowHandle(5));
        request.x = Some(1800);
        request.w = Some(400);
        manager.state.configure_request_handler(request);
        let geometry = manager.state.window(WindowHandle(5)).unwrap().geometry;
        assert_eq!(geometry.x(), 960 - 201);
        assert_eq!(geometry.w(), 400);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(WindowHandle(5), geometry))
        );
    }

    #[test]
    fn new_windows_are_not_parked_off_screen() {
        let mut manager = Manager::new_test(9);
        manager.take_test_actions();
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        let actions = manager.take_test_actions();
        assert!(
            !actions
                .iter()
                .any(|a| matches!(a, DisplayAction::MoveResizeWindow(_, g) if g.x() >= 1920))
        );
    }

    #[test]
    fn configure_requests_only_save_the_requested_fields() {
        let mut manager = Manager::new_test(9);
        manager.state.window_created_handler(dialog(5, 9));
        let window = manager.state.window_mut(WindowHandle(5)).unwrap();
        window.old_geometry = Xyhw::new(1, 2, 3, 4);
        let before = window.geometry;
        let mut request = ConfigureRequest::new(WindowHandle(5));
        request.x = Some(70);
        request.h = Some(90);
        manager.state.configure_request_handler(request);
        let window = manager.state.window(WindowHandle(5)).unwrap();
        assert_eq!(
            window.old_geometry,
            Xyhw::new(before.x(), 2, 3, before.h())
        );
        assert_eq!(window.geometry.x(), 70);
        assert_eq!(window.geometry.h(), 90);
    }

    #[test]
    fn border_requests_only_change_the_border() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        let mut request = ConfigureRequest::new(WindowHandle(1));
        request.border = Some(5);
        request.x = Some(10);
        manager.state.configure_request_handler(request);
        let window = manager.state.window(WindowHandle(1)).unwrap();
        assert_eq!(window.border, 5);
        assert!(manager.state.actions.is_empty());
    }
}
