mod bounds;
mod color;

pub use bounds::Bounds;
pub use color::Color;
