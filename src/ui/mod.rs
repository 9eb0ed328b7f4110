//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions, word wrap and hit-testing geometry
//! - [`toolbar`]: The clickable button row and window title
//! - status and overlay bars drawn on top of the text area

pub mod layout;
pub mod toolbar;

mod overlays;
mod render;
mod status;

pub use render::render;
