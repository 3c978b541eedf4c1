use crate::math::Vec2;

/// Non-negative scalar mass, stored together with its precomputed inverse.
///
/// A zero mass (the unconfigured default) and an infinite mass both carry an
/// inverse of exactly `0.0`, so impulse and force integration become no-ops
/// for such bodies instead of dividing by zero. In other words, a body whose
/// mass was never set behaves as immovable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f32,
    inv: f32,
}

impl Mass {
    pub const INFINITE: Self = Mass {
        value: f32::INFINITY,
        inv: 0.0,
    };

    /// Panics if `value` is negative.
    #[inline]
    pub fn new(value: f32) -> Self {
        assert!(value >= 0.0, "mass must be non-negative");
        Mass {
            value,
            inv: if value > 0.0 { value.recip() } else { 0.0 },
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Inverse mass. Exactly `0.0` for zero or infinite mass.
    #[inline]
    pub fn inv(&self) -> f32 {
        self.inv
    }
}

impl Default for Mass {
    #[inline(always)]
    fn default() -> Self {
        Self::INFINITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub const ZERO: Self = Velocity(Vec2::ZERO);

    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Velocity(Vec2::new(x, y))
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration(pub Vec2);

impl Acceleration {
    pub const ZERO: Self = Acceleration(Vec2::ZERO);

    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Acceleration(Vec2::new(x, y))
    }
}

/// A continuously-active vector quantity. It contributes to a body's net
/// force every tick until removed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force(pub Vec2);

impl Force {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Force(Vec2::new(x, y))
    }

    /// Force of the given magnitude pointing in `direction` (radians).
    #[inline]
    pub fn from_polar(magnitude: f32, direction: f32) -> Self {
        Force(Vec2::from_angle(direction) * magnitude)
    }
}

/// An instantaneous velocity-changing quantity, consumed on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Impulse(pub Vec2);

impl Impulse {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Impulse(Vec2::new(x, y))
    }

    /// Impulse of the given magnitude pointing in `direction` (radians).
    #[inline]
    pub fn from_polar(magnitude: f32, direction: f32) -> Self {
        Impulse(Vec2::from_angle(direction) * magnitude)
    }
}
