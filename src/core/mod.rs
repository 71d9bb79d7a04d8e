pub mod animation;
pub mod animation_loop;
pub mod clock;
pub mod driver;
pub mod particles;
pub mod scheduler;

pub use animation::*;
pub use animation_loop::*;
pub use clock::*;
pub use driver::*;
pub use particles::*;
pub use scheduler::*;
