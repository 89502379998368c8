//! Particle engine: short-lived boxes moved by [`lunatix_physics::move_box`]
//! and kept in a fixed-capacity [`ParticleSystem`].
//!
//! Drawing is left to the caller, [`ParticleSystem::visible_particles`] gives
//! the areas to show on the current frame.

pub mod particle;
pub mod particle_system;

pub use particle::{DELAY, Particle};
pub use particle_system::{ParticleError, ParticleSystem, Result};
