//! Toroidal Game of Life: the world data model and the generation engine.
//!
//! [`World`] holds one generation of cells; [`engine::next_generation`] is
//! the pure transition to the next. Scheduling repeated steps is the
//! caller's job.

pub mod engine;
pub mod render;
pub mod world;

pub use engine::next_generation;
pub use world::World;
