use super::{Config, DisplayEvent, Handle, Manager};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Routes an event to its handler.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) {
        tracing::trace!("DisplayEvent: {:?}", event);
        match event {
            DisplayEvent::WindowCreate(window) => self.state.window_created_handler(window),
            DisplayEvent::WindowDestroy(handle) => {
                self.state.window_destroyed_handler(handle, true);
            }
            DisplayEvent::WindowUnmap(handle) => {
                self.state.window_destroyed_handler(handle, false);
            }
            DisplayEvent::ConfigureRequest(request) => {
                self.state.configure_request_handler(request);
            }
            DisplayEvent::ScreenResize(width, height) => {
                self.screen_resize_handler(width, height);
            }
            DisplayEvent::PointerEnter(handle, x, y) => {
                self.state.pointer_enter_handler(handle, x, y);
            }
            DisplayEvent::FocusIn(handle) => self.state.focus_in_handler(handle),
            DisplayEvent::Motion(handle, x, y, _) => self.state.motion_handler(handle, x, y),
            DisplayEvent::MouseCombo(modmask, button, handle, x, y) => {
                self.mouse_combo_handler(modmask, button, handle, x, y);
            }
            DisplayEvent::KeyCombo(modmask, keysym) => self.key_combo_handler(modmask, keysym),
            DisplayEvent::KeyboardMappingChanged => {
                self.state.actions.push_back(DisplayAction::ReloadKeyGrabs);
            }
            // Nothing is drawn by the window manager itself, and button releases only matter
            // while dragging.
            DisplayEvent::Expose(_) | DisplayEvent::ButtonRelease => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Window, WindowHandle, Xyhw};

    #[test]
    fn map_requests_manage_and_unmaps_release() {
        let mut manager = Manager::new_test(9);
        let window = Window::new(WindowHandle(3), Xyhw::new(0, 0, 300, 300), 4);
        manager.display_event_handler(DisplayEvent::WindowCreate(window));
        assert!(manager.state.is_managed(WindowHandle(3)));

        manager.display_event_handler(DisplayEvent::WindowUnmap(WindowHandle(3)));
        assert!(!manager.state.is_managed(WindowHandle(3)));
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::ReleaseWindow(WindowHandle(3), 4)));
    }

    #[test]
    fn destroyed_windows_are_not_touched() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(3, Xyhw::new(0, 0, 300, 300));
        manager.display_event_handler(DisplayEvent::WindowDestroy(WindowHandle(3)));
        assert!(!manager.state.is_managed(WindowHandle(3)));
        assert!(!manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::ReleaseWindow(..))));
    }

    #[test]
    fn keyboard_mapping_changes_reload_grabs() {
        let mut manager = Manager::new_test(9);
        manager.display_event_handler(DisplayEvent::KeyboardMappingChanged);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::ReloadKeyGrabs)
        );
    }
}
