//! Adapter between the simulation and whatever draws it.

use super::organism::{Organism, Visual};

/// A presentation layer that owns one visual node per organism.
///
/// The ecosystem creates a node at every birth, updates it once per tick
/// while the organism lives, and hands it back for destruction at death.
pub trait Stage {
    /// Opaque per-organism visual resource.
    type Handle;

    /// Creates the node for a newly born organism.
    fn create_visual(&mut self, organism: &Organism) -> Self::Handle;

    /// Moves, turns, scales and fades an existing node.
    fn update_visual(&mut self, handle: &mut Self::Handle, visual: &Visual);

    /// Releases a node after its organism died.
    fn destroy_visual(&mut self, handle: Self::Handle);
}

/// A stage that draws nothing, for tests and batch runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Stage for Headless {
    type Handle = ();

    fn create_visual(&mut self, _organism: &Organism) {}

    fn update_visual(&mut self, _handle: &mut (), _visual: &Visual) {}

    fn destroy_visual(&mut self, _handle: ()) {}
}
