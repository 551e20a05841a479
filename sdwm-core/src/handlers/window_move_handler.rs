#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::DisplayServer;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Moves the selected window with the pointer until the button is released.
    pub fn move_mouse(&mut self) -> Option<()> {
        let (handle, origin) = self.start_drag(Mode::MovingWindow)?;
        let Some((start_x, start_y)) = self.display_server.cursor_point() else {
            self.display_server.ungrab_pointer();
            return None;
        };
        self.drag_loop(Mode::MovingWindow(handle), |manager, x, y| {
            manager.window_move_handler(handle, &origin, x - start_x, y - start_y);
        });
        self.finish_drag(handle);
        Some(())
    }

    /// Places a dragged window at `origin` plus the pointer offset, snapping to the edges of the
    /// selected monitor. A tiled window dragged further than the snap distance starts floating.
    pub fn window_move_handler(
        &mut self,
        handle: WindowHandle<H>,
        origin: &Xyhw,
        offset_x: i32,
        offset_y: i32,
    ) {
        let state = &mut self.state;
        let Some(monitor) = state.current_monitor() else {
            return;
        };
        let work = monitor.work;
        let floating_layout = monitor.layout().is_floating();
        let Some(window) = state.window(handle) else {
            return;
        };
        let snap = state.snap;
        let width = window.outer_width();
        let height = window.outer_height();

        let mut x = origin.x() + offset_x;
        let mut y = origin.y() + offset_y;
        if (work.x() - x).abs() < snap {
            x = work.x();
        } else if (work.right() - (x + width)).abs() < snap {
            x = work.right() - width;
        }
        if (work.y() - y).abs() < snap {
            y = work.y();
        } else if (work.bottom() - (y + height)).abs() < snap {
            y = work.bottom() - height;
        }

        let current = window.geometry;
        let beyond_snap = (x - current.x()).abs() > snap || (y - current.y()).abs() > snap;
        if !window.floating && !floating_layout && beyond_snap {
            state.toggle_floating(handle);
        }
        let Some(window) = state.window(handle) else {
            return;
        };
        if floating_layout || window.floating {
            let geometry = Xyhw::new(x, y, window.geometry.w(), window.geometry.h());
            state.resize(handle, geometry, ClampMode::Interactive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Layout;

    fn motion(x: i32, y: i32, time: u64) -> DisplayEvent<i32> {
        DisplayEvent::Motion(WindowHandle(0), x, y, time)
    }

    #[test]
    fn dragging_near_the_left_edge_snaps_to_it() {
        let mut manager = Manager::new_test(9);
        manager.state.monitors[0].set_layout(Layout::Floating);
        manager.manage_test_window(1, Xyhw::new(100, 100, 200, 100));
        manager.display_server.pointer = Some((150, 150));
        manager.display_server.events =
            vec![motion(70, 150, 100), DisplayEvent::ButtonRelease].into();

        assert!(manager.move_mouse().is_some());
        let geometry = manager.state.window(WindowHandle(1)).unwrap().geometry;
        assert_eq!(geometry.x(), 0);
        assert_eq!(geometry.y(), 100);
        assert_eq!(manager.state.mode, Mode::Normal);
        assert!(manager.display_server.grabbed.is_none());
    }

    #[test]
    fn motion_is_rate_limited() {
        let mut manager = Manager::new_test(9);
        manager.state.monitors[0].set_layout(Layout::Floating);
        manager.manage_test_window(1, Xyhw::new(500, 500, 200, 100));
        manager.display_server.pointer = Some((600, 600));
        manager.display_server.events = vec![
            motion(650, 600, 100),
            motion(900, 600, 110),
            DisplayEvent::ButtonRelease,
        ]
        .into();

        manager.move_mouse();
        let geometry = manager.state.window(WindowHandle(1)).unwrap().geometry;
        assert_eq!(geometry.x(), 550);
    }

    #[test]
    fn dragging_a_tiled_window_makes_it_float() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.manage_test_window(2, Xyhw::new(0, 0, 100, 100));
        manager.display_server.pointer = Some((500, 500));
        manager.display_server.events =
            vec![motion(700, 600, 100), DisplayEvent::ButtonRelease].into();

        manager.move_mouse();
        let window = manager.state.window(WindowHandle(2)).unwrap();
        assert!(window.floating);
        assert_eq!(window.geometry.x(), 200);
        assert_eq!(window.geometry.y(), 100);
    }

    #[test]
    fn map_requests_are_served_while_dragging() {
        let mut manager = Manager::new_test(9);
        manager.state.monitors[0].set_layout(Layout::Floating);
        manager.manage_test_window(1, Xyhw::new(100, 100, 200, 100));
        let window = crate::models::Window::new(WindowHandle(2), Xyhw::new(0, 0, 50, 50), 0);
        manager.display_server.events = vec![
            DisplayEvent::WindowCreate(window),
            DisplayEvent::KeyboardMappingChanged,
            DisplayEvent::ButtonRelease,
        ]
        .into();

        manager.move_mouse();
        assert!(manager.state.is_managed(WindowHandle(2)));
        assert!(!manager
            .display_server
            .actions
            .contains(&crate::DisplayAction::ReloadKeyGrabs));
    }

    #[test]
    fn dropping_on_another_monitor_moves_the_window_there() {
        let mut manager = Manager::new_test(9);
        manager.set_test_screens(&[0, 1920].map(|x| crate::models::BBox {
            x,
            y: 0,
            width: 1920,
            height: 1080,
        }));
        manager.state.monitors[0].set_layout(Layout::Floating);
        manager.manage_test_window(1, Xyhw::new(100, 100, 200, 100));
        manager.display_server.pointer = Some((150, 150));
        manager.display_server.events =
            vec![motion(2150, 150, 100), DisplayEvent::ButtonRelease].into();

        manager.move_mouse();
        assert!(manager.state.monitors[1].contains(WindowHandle(1)));
        assert_eq!(manager.state.selected_monitor, 1);
        assert_eq!(manager.state.selected_window(), Some(WindowHandle(1)));
    }

    #[test]
    fn fullscreen_windows_cannot_be_dragged() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.state.window_mut(WindowHandle(1)).unwrap().fullscreen = true;
        assert!(manager.move_mouse().is_none());
        assert!(manager.display_server.grabbed.is_none());
    }
}
