pub mod command;
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod session;
pub mod source;
pub mod status;
pub mod transform;
