//! Objects (such as windows and monitors) the window manager keeps track of.
mod configure_request;
mod manager;
mod mode;
mod monitor;
mod screen;
mod tag;
mod window;
mod xyhw;

pub use configure_request::ConfigureRequest;
pub use manager::Manager;
pub use mode::Mode;
pub use monitor::{Monitor, MonitorId};
pub use screen::{BBox, Screen};
pub use tag::{TagMask, Tags, MAX_TAGS};
pub use window::{ClampMode, Handle, Window, WindowHandle};
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use xyhw::Xyhw;
