use crate::config::Config;
use crate::layouts::Layout;
use crate::models::{Handle, WindowHandle};
use crate::{Command, DisplayServer, Manager};

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Handles events until a quit command or the connection goes away, then hands every
    /// window back.
    pub fn event_loop(mut self) {
        self.run();
    }

    pub(crate) fn run(&mut self) {
        while self.state.running {
            let Some(event) = self.display_server.next_event() else {
                tracing::warn!("Lost the connection to the display server");
                break;
            };
            self.display_event_handler(event);
            self.flush_actions();
        }
        self.cleanup();
    }

    /// Shows every window, stops tiling and releases all windows as they were before.
    fn cleanup(&mut self) {
        self.command_handler(&Command::View(!0));
        if let Some(monitor) = self.state.current_monitor_mut() {
            monitor.set_layout(Layout::Floating);
        }
        let handles: Vec<WindowHandle<H>> = self
            .state
            .monitors
            .iter()
            .flat_map(|m| m.clients().iter().map(|w| w.handle))
            .collect();
        for handle in handles {
            self.state.window_destroyed_handler(handle, false);
        }
        self.flush_actions();
        self.display_server.cleanup();
    }
}
