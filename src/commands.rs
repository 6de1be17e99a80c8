//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed by the host
//! after an update: repainting, writing the drag payload into the native
//! transport, or persisting the layout through the adapter.

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the workspace
    Redraw,
    /// The layout changed; hand it to the persistence adapter
    PersistLayout,
    /// Write this payload string into the native drag transport, under
    /// both the custom type and `text/plain`. Must happen at drag-start:
    /// the transport is unreadable during hover.
    SetDragPayload(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Redraw plus persist, the pair every accepted mutation returns
    pub fn layout_changed() -> Cmd {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::PersistLayout])
    }
}
