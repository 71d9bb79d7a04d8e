pub mod display_context;
pub mod renderer;
pub mod scene;

pub use display_context::*;
pub use renderer::*;
pub use scene::*;
