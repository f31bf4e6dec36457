pub mod collision;
pub mod index_pairs;
pub mod loader;
pub mod simple_collision_system;

pub use collision::*;
pub use index_pairs::*;
pub use loader::*;
pub use simple_collision_system::*;
