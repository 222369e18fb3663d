use std::ffi::NulError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("unable to initialize SDL: {0}")]
    Init(String),

    #[error("unable to initialize the video subsystem: {0}")]
    Video(String),

    #[error("unable to get the event pump: {0}")]
    EventPump(String),

    #[error("unable to create window: {0}")]
    Build(#[from] sdl2::video::WindowBuildError),

    #[error("window title contains a nul byte")]
    InvalidTitle(#[from] NulError),

    #[error("SDL call failed: {0}")]
    Sdl(String),
}

pub type WindowResult<T> = Result<T, WindowError>;
