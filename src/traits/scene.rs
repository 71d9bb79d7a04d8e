use rand::RngCore;

use crate::scenes::{Assembled, CompoundDescriptor};
use super::display_context::DisplayContext;

/// Scene construction abstraction
pub trait SceneProvider {
    /// Build the scene for a freshly created surface
    fn assemble(&self, context: &DisplayContext, rng: &mut dyn RngCore) -> Assembled;

    /// Replace the built-in compound layout, if the scene has one
    fn with_layout(&mut self, _layout: Vec<CompoundDescriptor>) {}

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
