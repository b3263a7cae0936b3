//! Utility modules shared by the renderer and the CLI.

pub mod html;
pub mod mime;
pub mod slug;
