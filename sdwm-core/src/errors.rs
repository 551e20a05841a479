use thiserror::Error;

pub type Result<T> = std::result::Result<T, SdwmError>;

#[derive(Debug, Error)]
pub enum SdwmError {
    #[error("cannot open display")]
    CannotOpenDisplay,
    #[error("another window manager is already running")]
    AnotherWindowManager,
    #[error("cannot allocate color '{0}'")]
    ColorAllocation(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
