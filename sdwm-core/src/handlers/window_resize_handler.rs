#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use std::cmp;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Resizes the selected window from its bottom right corner until the button is released.
    pub fn resize_mouse(&mut self) -> Option<()> {
        let (handle, origin) = self.start_drag(Mode::ResizingWindow)?;
        self.warp_to_corner(handle);
        self.drag_loop(Mode::ResizingWindow(handle), |manager, x, y| {
            manager.window_resize_handler(handle, &origin, x, y);
        });
        self.warp_to_corner(handle);
        self.finish_drag(handle);
        Some(())
    }

    fn warp_to_corner(&mut self, handle: WindowHandle<H>) {
        if let Some(window) = self.state.window(handle) {
            let x = window.geometry.w() + window.border - 1;
            let y = window.geometry.h() + window.border - 1;
            self.state
                .actions
                .push_back(DisplayAction::WarpPointer(handle, x, y));
            self.flush_actions();
        }
    }

    /// Sizes a dragged window so its bottom right corner follows the pointer at `x`, `y`.
    pub fn window_resize_handler(
        &mut self,
        handle: WindowHandle<H>,
        origin: &Xyhw,
        x: i32,
        y: i32,
    ) {
        let state = &mut self.state;
        let (Some(selected), Some(own)) = (
            state.current_monitor(),
            state.monitor_of(handle).map(|i| &state.monitors[i]),
        ) else {
            return;
        };
        let floating_layout = selected.layout().is_floating();
        let bounds = selected.work;
        let own_work = own.work;
        let Some(window) = state.window(handle) else {
            return;
        };
        let snap = state.snap;
        let width = cmp::max(x - origin.x() - 2 * window.border + 1, 1);
        let height = cmp::max(y - origin.y() - 2 * window.border + 1, 1);

        let inside = own_work.x() + width >= bounds.x()
            && own_work.x() + width <= bounds.right()
            && own_work.y() + height >= bounds.y()
            && own_work.y() + height <= bounds.bottom();
        let current = window.geometry;
        let beyond_snap =
            (width - current.w()).abs() > snap || (height - current.h()).abs() > snap;
        if inside && !window.floating && !floating_layout && beyond_snap {
            state.toggle_floating(handle);
        }
        let Some(window) = state.window(handle) else {
            return;
        };
        if floating_layout || window.floating {
            let geometry = Xyhw::new(origin.x(), origin.y(), width, height);
            state.resize(handle, geometry, ClampMode::Interactive);
        }
    }
}
