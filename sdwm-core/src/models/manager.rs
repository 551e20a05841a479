use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, Xyhw};
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connects to the display server and takes over the existing monitors.
    ///
    /// # Errors
    ///
    /// Will error if the display server cannot be started. See [`DisplayServer::new`].
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        let mut state = State::new(&config, display_server.root());
        let (width, height) = display_server.screen_size();
        state.screen = Xyhw::new(0, 0, width, height);

        let mut manager = Self {
            state,
            config,
            display_server,
        };
        manager.update_geometry();
        manager.state.focus(None);
        manager.flush_actions();
        Ok(manager)
    }

    /// Hands every queued action to the display server, oldest first.
    pub fn flush_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            self.display_server.execute_action(act);
        }
        self.display_server.flush();
    }

    /// Queries the outputs and pointer and reconciles the monitors with them.
    pub(crate) fn update_geometry(&mut self) -> bool {
        let screens = self.display_server.screens();
        let pointer = self.display_server.cursor_point();
        self.state.update_geometry(&screens, pointer)
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(tags: usize) -> Self {
        Self::new(crate::config::TestConfig::new(tags)).expect("mock display server starts")
    }

    /// Replaces the mock's outputs and reconciles the monitors with them.
    pub fn set_test_screens(&mut self, rects: &[crate::models::BBox]) {
        self.display_server.screens = rects
            .iter()
            .map(|bbox| crate::models::Screen::new(*bbox, String::new()))
            .collect();
        let width = rects.iter().map(|b| b.x + b.width).max().unwrap_or(0);
        let height = rects.iter().map(|b| b.y + b.height).max().unwrap_or(0);
        self.display_server.screen_size = (width, height);
        self.state.screen = Xyhw::new(0, 0, width, height);
        self.update_geometry();
        self.flush_actions();
        self.display_server.actions.clear();
    }

    /// Manages a window with the given geometry, like a map request would.
    pub fn manage_test_window(&mut self, handle: i32, geometry: Xyhw) {
        let window = crate::models::Window::new(crate::models::WindowHandle(handle), geometry, 0);
        self.state.window_created_handler(window);
        self.flush_actions();
    }

    /// Actions the display server received since the last call.
    pub fn take_test_actions(
        &mut self,
    ) -> Vec<crate::DisplayAction<crate::models::MockHandle>> {
        std::mem::take(&mut self.display_server.actions)
    }
}
