mod arrange_handler;
pub mod command_handler;
pub mod display_event_handler;
mod drag_handler;
mod focus_handler;
mod monitor_handler;
mod mouse_combo_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

use super::command::Command;
use super::config::Config;
use super::models::{ClampMode, Handle, Manager, Mode, Window, WindowHandle, Xyhw};
use super::DisplayEvent;
