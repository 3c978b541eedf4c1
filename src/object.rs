use crate::body::Body;
use crate::math::Vec2;
use crate::time_step::TimeStep;

/// A simulated object: identity, world position, and its exclusively-owned
/// [`Body`]. The body holds no back-reference; each tick it hands its
/// displacement back and the object accumulates it here.
#[derive(Debug, Clone)]
pub struct GameObject {
    /// Assigned by the world on insertion.
    pub id: usize,

    /// Center of the object (and of its collision rectangle).
    pub position: Vec2,

    pub body: Body,
}

impl GameObject {
    pub fn new(position: Vec2, body: Body) -> Self {
        Self {
            id: 0,
            position,
            body,
        }
    }

    /// Advance this object by one tick: integrate the body and accumulate
    /// the resulting displacement into the position.
    pub fn advance(&mut self, step: &TimeStep) {
        let displacement = self.body.integrate(step);
        self.position += displacement;
    }

    #[inline]
    pub fn collision_constant(&self) -> bool {
        self.body.is_collision_constant()
    }
}
