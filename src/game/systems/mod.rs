pub mod movement;
pub mod render;
pub mod scoring;
pub mod turn;

pub use movement::*;
pub use render::*;
pub use scoring::*;
pub use turn::*;
