use bitflags::bitflags;

use crate::dynamics::{Acceleration, Force, Impulse, Mass, Velocity};
use crate::math::Vec2;
use crate::time_step::TimeStep;

bitflags! {
    pub struct BodyFlags: u32 {
        /// Velocity may never be altered by collision resolution
        /// (e.g. an immovable platform).
        const COLLISION_CONSTANT = 0x0001;
        /// The force set changed since the last rebalance; the cached
        /// net force must be recomputed on the next tick.
        const FORCES_CHANGED     = 0x0002;
    }
}

/// Kinematic state of one game object.
///
/// A body accumulates impulses and forces between ticks and integrates them
/// in [`Body::integrate`]. It knows nothing about its owner; the positional
/// side effect of a tick is handed back as a displacement.
#[derive(Debug, Clone)]
pub struct Body {
    velocity: Velocity,
    acceleration: Acceleration,
    mass: Mass,

    /// Pending impulses, consumed and cleared on the next tick.
    impulses: Vec<Impulse>,
    /// Forces active until removed.
    forces: Vec<Force>,
    /// Per-axis sum of the active forces, recomputed only when
    /// `FORCES_CHANGED` is set.
    net_force: Vec2,

    pub flags: BodyFlags,

    /// Half-extents of the rectangular collision volume.
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(half_extents: Vec2, mass: Mass) -> Self {
        Self {
            velocity: Velocity::ZERO,
            acceleration: Acceleration::ZERO,
            mass,
            impulses: Vec::new(),
            forces: Vec::new(),
            net_force: Vec2::ZERO,
            flags: BodyFlags::empty(),
            half_extents,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    #[inline]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[inline]
    pub fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }

    /// Cached per-axis sum of the active forces, as of the last rebalance.
    #[inline]
    pub fn net_force(&self) -> Vec2 {
        self.net_force
    }

    /// Impulses waiting to be consumed by the next tick.
    #[inline]
    pub fn pending_impulses(&self) -> &[Impulse] {
        &self.impulses
    }

    /// Forces currently contributing to the net force.
    #[inline]
    pub fn active_forces(&self) -> &[Force] {
        &self.forces
    }

    #[inline]
    pub fn is_collision_constant(&self) -> bool {
        self.flags.contains(BodyFlags::COLLISION_CONSTANT)
    }

    #[inline]
    pub fn set_collision_constant(&mut self, constant: bool) {
        self.flags.set(BodyFlags::COLLISION_CONSTANT, constant);
    }

    /// Queue an impulse for the next tick.
    pub fn apply_impulse(&mut self, impulse: Impulse) {
        self.impulses.push(impulse);
    }

    /// Add a force to the active set.
    pub fn apply_force(&mut self, force: Force) {
        self.forces.push(force);
        self.flags.insert(BodyFlags::FORCES_CHANGED);
    }

    /// Remove the first force equal to `force` from the active set.
    /// Returns whether anything was removed.
    pub fn remove_force(&mut self, force: Force) -> bool {
        match self.forces.iter().position(|f| *f == force) {
            Some(index) => {
                self.forces.remove(index);
                self.flags.insert(BodyFlags::FORCES_CHANGED);
                true
            }
            None => false,
        }
    }

    /// Advance this body by one tick and return the resulting displacement.
    ///
    /// Fixed order: pending impulses are folded into velocity and cleared,
    /// the net force is rebalanced if the force set changed, acceleration is
    /// derived from net force and mass, velocity is advanced by one timestep
    /// of acceleration (semi-implicit Euler), and the displacement
    /// `velocity * dt` is returned for the owner to accumulate.
    pub fn integrate(&mut self, step: &TimeStep) -> Vec2 {
        self.resolve_impulses();
        if self.flags.contains(BodyFlags::FORCES_CHANGED) {
            self.balance_forces();
        }
        self.acceleration = Acceleration(self.net_force * self.mass.inv());
        self.velocity.0 += self.acceleration.0 * step.dt;
        self.velocity.0 * step.dt
    }

    /// Impart every pending impulse, then clear the list. A pure sum, so
    /// the result does not depend on insertion order. With a zero inverse
    /// mass the impulses are consumed with no effect.
    fn resolve_impulses(&mut self) {
        let inv_mass = self.mass.inv();
        for impulse in self.impulses.drain(..) {
            self.velocity.0 += impulse.0 * inv_mass;
        }
    }

    /// Sum the active forces per axis into the cached net force and clear
    /// the dirty flag.
    fn balance_forces(&mut self) {
        let mut net = Vec2::ZERO;
        for force in &self.forces {
            net += force.0;
        }
        self.net_force = net;
        self.flags.remove(BodyFlags::FORCES_CHANGED);
    }
}

impl Default for Body {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Vec2::ZERO, Mass::default())
    }
}
