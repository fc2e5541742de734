use std::fmt;

use crate::{
    editor::{
        control::ControlEvent,
        patch::{EditorPatch, apply_patch},
        state::EditorState,
    },
    foundation::clock::Clock,
    scene::Composition,
    template::render_template,
};

type Subscriber = Box<dyn FnMut(&EditorState)>;

/// Owner of the session's [`EditorState`].
///
/// Updates go through [`EditorStore::apply`] only. Each call merges the patch into a fresh
/// state value, swaps it in, and then notifies subscribers with the new state. Subscribers
/// never observe a half-applied patch.
pub struct EditorStore {
    state: EditorState,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl EditorStore {
    /// Store holding `initial`.
    pub fn new(initial: EditorState) -> Self {
        Self {
            state: initial,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Store holding session defaults computed from `clock`.
    pub fn with_clock(clock: &dyn Clock) -> Self {
        Self::new(EditorState::new(clock))
    }

    /// Current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Number of patches applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register an observer called after every applied patch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&EditorState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Merge `patch` into the current state and notify subscribers.
    ///
    /// No validation happens here; bad colors or unknown ids are stored as given.
    pub fn apply(&mut self, patch: &EditorPatch) -> &EditorState {
        self.state = apply_patch(&self.state, patch);
        self.revision += 1;
        tracing::debug!(revision = self.revision, "applied editor patch");

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Translate a control event and apply it.
    pub fn dispatch(&mut self, event: ControlEvent) -> &EditorState {
        let patch = event.into_patch();
        self.apply(&patch)
    }

    /// Render the active template for the current state.
    ///
    /// The returned composition is an owned snapshot, so it is also what gets handed to export:
    /// later patches do not affect it.
    pub fn preview(&self) -> Composition {
        render_template(&self.state)
    }
}

impl fmt::Debug for EditorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/store.rs"]
mod tests;
