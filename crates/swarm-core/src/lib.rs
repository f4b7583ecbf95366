pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod forces;
pub mod gate;
pub mod highlight;
pub mod integrator;
pub mod particle;
pub mod pointer;
pub mod state;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use forces::PointerProximity;
pub use gate::*;
pub use highlight::*;
pub use particle::*;
pub use pointer::*;
pub use state::*;
