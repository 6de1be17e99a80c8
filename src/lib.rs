//! worktop - pane/tab layout engine with drag-and-drop
//!
//! This crate provides the state, transforms, and drag/drop protocol for a
//! workbench-style shell: resizable columns of tabs, with tab and pane
//! reassignment by drag, implementing the Elm Architecture pattern. It has
//! no UI framework dependency; hosts render the layout, forward gesture
//! events as [`Msg`] values, and execute the returned [`Cmd`]s.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod persist;
pub mod registry;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkbenchConfig;
pub use messages::Msg;
pub use model::{LayoutEngine, Pane, PaneId, PaneLayout, TabId, WorkbenchModel};
pub use registry::TabRegistry;
