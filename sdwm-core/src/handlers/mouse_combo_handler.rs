#![allow(clippy::wildcard_imports)]

use super::*;
use crate::config::ClickTarget;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// A button was pressed: the selection follows the click, then the matching mouse binding
    /// runs.
    pub fn mouse_combo_handler(
        &mut self,
        modmask: ModMask,
        button: Button,
        handle: WindowHandle<H>,
        x: i32,
        y: i32,
    ) {
        let state = &mut self.state;
        let index = state.window_to_monitor(handle, x, y);
        if index != state.selected_monitor {
            if let Some(selected) = state.selected_window() {
                state.unfocus(selected, true);
            }
            state.selected_monitor = index;
            state.focus(None);
        }

        let mut click = ClickTarget::RootWindow;
        if state.is_managed(handle) {
            state.focus(Some(handle));
            state.restack(state.selected_monitor);
            state.actions.push_back(DisplayAction::ReplayClick);
            click = ClickTarget::ClientWindow;
        }

        let modmask = modmask.clean();
        let command = state
            .mouse_bindings
            .iter()
            .find(|b| b.click == click && b.button == button && b.modifier.clean() == modmask)
            .map(|b| b.command.clone());
        if let Some(command) = command {
            self.flush_actions();
            self.command_handler(&command);
        }
    }

    /// Runs every key binding matching the combination.
    pub fn key_combo_handler(&mut self, modmask: ModMask, keysym: XKeysym) {
        let modmask = modmask.clean();
        let commands: Vec<Command> = self
            .state
            .key_bindings
            .iter()
            .filter(|k| k.key == keysym && k.modifier.clean() == modmask)
            .map(|k| k.command.clone())
            .collect();
        for command in commands {
            self.command_handler(&command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keybind;
    use crate::models::BBox;

    #[test]
    fn clicking_a_client_focuses_and_replays() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.manage_test_window(2, Xyhw::new(0, 0, 100, 100));
        manager.mouse_combo_handler(ModMask::Zero, Button::Button1, WindowHandle(1), 5, 5);
        assert_eq!(manager.state.selected_window(), Some(WindowHandle(1)));
        assert!(manager.state.actions.contains(&DisplayAction::ReplayClick));
    }

    #[test]
    fn clicking_the_root_selects_the_monitor_under_the_pointer() {
        let mut manager = Manager::new_test(9);
        manager.set_test_screens(&[0, 1920].map(|x| BBox {
            x,
            y: 0,
            width: 1920,
            height: 1080,
        }));
        let root = manager.state.root;
        manager.mouse_combo_handler(ModMask::Zero, Button::Button1, root, 2000, 10);
        assert_eq!(manager.state.selected_monitor, 1);
        assert!(!manager.state.actions.contains(&DisplayAction::ReplayClick));
    }

    #[test]
    fn mouse_bindings_ignore_lock_modifiers() {
        let mut manager = Manager::new_test(9);
        manager.manage_test_window(1, Xyhw::new(0, 0, 100, 100));
        manager.mouse_combo_handler(
            ModMask::Alt | ModMask::NumLock,
            Button::Button2,
            WindowHandle(1),
            5,
            5,
        );
        assert!(manager.state.window(WindowHandle(1)).unwrap().floating);
    }

    #[test]
    fn key_bindings_run_their_command() {
        let mut manager = Manager::new_test(9);
        manager.state.key_bindings = vec![Keybind {
            modifier: ModMask::Alt | ModMask::Shift,
            key: x11_dl::keysym::XK_q,
            command: Command::Quit,
        }];
        manager.key_combo_handler(ModMask::Alt, x11_dl::keysym::XK_q);
        assert!(manager.state.running);
        let locked = ModMask::Alt | ModMask::Shift | ModMask::Lock;
        manager.key_combo_handler(locked, x11_dl::keysym::XK_q);
        assert!(!manager.state.running);
    }
}
