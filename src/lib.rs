//! A small 2D rigid-body motion and collision-response engine.
//!
//! Bodies accumulate forces and impulses between ticks; [`World::step`]
//! integrates every body (semi-implicit Euler at a fixed, configurable
//! timestep) and then resolves collisions between overlapping rectangular
//! extents by zeroing the offending velocity component.

pub mod body;
pub mod collision;
pub mod dynamics;
pub mod math;
pub mod object;
pub mod time_step;
pub mod world;

pub use body::*;
pub use collision::*;
pub use dynamics::*;
pub use math::*;
pub use object::*;
pub use time_step::*;
pub use world::*;
