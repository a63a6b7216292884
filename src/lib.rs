//! TerraForge library - procedural island terrain with rain and tide
//! simulation.
//!
//! The crate owns the simulation core: heightfield synthesis from
//! seeded gradient noise, surface normal estimation, a recycled rain
//! particle pool, and a clamped water level. Rendering consumes the
//! exposed mesh, drop positions, and water level; it lives outside this
//! crate.

pub mod cli;
pub mod noise;
pub mod params;
pub mod terrain;
pub mod tide;
pub mod weather;
pub mod world;
