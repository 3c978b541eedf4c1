use log::debug;

use crate::dynamics::Velocity;
use crate::math::{Axis, Vec2};
use crate::object::GameObject;

/// Overlap depth on one axis: distance from the near box's far edge to the
/// far box's near edge. Positive when the intervals intersect.
fn axis_overlap(center_a: f32, half_a: f32, center_b: f32, half_b: f32) -> f32 {
    if center_a < center_b {
        (center_a + half_a) - (center_b - half_b)
    } else {
        (center_b + half_b) - (center_a - half_a)
    }
}

/// Per-axis penetration depths of two rectangular bodies, or `None` when
/// they do not overlap. Touching edges do not count as overlap.
pub fn penetration(a: &GameObject, b: &GameObject) -> Option<Vec2> {
    let ha = a.body.half_extents;
    let hb = b.body.half_extents;
    let x = axis_overlap(a.position.x, ha.x, b.position.x, hb.x);
    let y = axis_overlap(a.position.y, ha.y, b.position.y, hb.y);
    if x > 0.0 && y > 0.0 {
        Some(Vec2::new(x, y))
    } else {
        None
    }
}

/// Resolve an axis-aligned collision between two overlapping objects by
/// zeroing one velocity component. A no-op when the objects do not overlap.
///
/// The corrected object is `b` when `a`'s speed is exactly zero, otherwise
/// `a`; integration rarely lands a moving body on exact zero, so `a` wins
/// the tie-break in practice. The dominant axis is the one with the smaller
/// penetration (the minimum-translation-vector rule, ties going to X), and
/// the velocity component on that axis is zeroed unless the corrected
/// object is collision-constant. No force or impulse is applied; this is a
/// velocity clamp, not a momentum exchange.
pub fn resolve_collision(a: &mut GameObject, b: &mut GameObject) {
    let overlap = match penetration(a, b) {
        Some(overlap) => overlap,
        None => return,
    };

    let cur = if a.body.velocity().magnitude() == 0.0 {
        b
    } else {
        a
    };
    if cur.collision_constant() {
        return;
    }

    let axis = if overlap.x <= overlap.y {
        Axis::X
    } else {
        Axis::Y
    };
    debug!("object {}: zeroing {:?} velocity on collision", cur.id, axis);

    let v = cur.body.velocity();
    cur.body.set_velocity(match axis {
        Axis::X => Velocity::new(0.0, v.0.y),
        Axis::Y => Velocity::new(v.0.x, 0.0),
    });
}

#[cfg(test)]
mod tests {
    use crate::body::Body;
    use crate::dynamics::Mass;

    use super::*;

    fn object_at(position: Vec2, half_extents: Vec2) -> GameObject {
        GameObject::new(position, Body::new(half_extents, Mass::new(1.0)))
    }

    #[test]
    fn penetration_is_none_when_separated() {
        let a = object_at(Vec2::ZERO, Vec2::ONE);
        let b = object_at(Vec2::new(3.0, 0.0), Vec2::ONE);
        assert_eq!(penetration(&a, &b), None);

        // Touching edges are not an overlap.
        let c = object_at(Vec2::new(2.0, 0.0), Vec2::ONE);
        assert_eq!(penetration(&a, &c), None);
    }

    #[test]
    fn penetration_depths_per_axis() {
        let a = object_at(Vec2::ZERO, Vec2::ONE);
        let b = object_at(Vec2::new(1.5, 0.0), Vec2::ONE);
        assert_eq!(penetration(&a, &b), Some(Vec2::new(0.5, 2.0)));
        // Symmetric in argument order.
        assert_eq!(penetration(&b, &a), Some(Vec2::new(0.5, 2.0)));
    }

    #[test]
    fn shallow_x_overlap_zeroes_x_velocity() {
        let mut a = object_at(Vec2::ZERO, Vec2::ONE);
        let mut b = object_at(Vec2::new(1.5, 0.0), Vec2::ONE);
        b.body.set_velocity(Velocity::new(-2.0, 0.0));

        resolve_collision(&mut a, &mut b);

        assert_eq!(b.body.velocity(), Velocity::ZERO);
        assert_eq!(a.body.velocity(), Velocity::ZERO);
    }

    #[test]
    fn the_other_velocity_component_is_preserved() {
        let mut a = object_at(Vec2::ZERO, Vec2::ONE);
        let mut b = object_at(Vec2::new(1.5, 0.0), Vec2::ONE);
        b.body.set_velocity(Velocity::new(-2.0, 1.25));

        resolve_collision(&mut a, &mut b);

        assert_eq!(b.body.velocity(), Velocity::new(0.0, 1.25));
    }

    #[test]
    fn shallow_y_overlap_zeroes_y_velocity() {
        let mut floor = object_at(Vec2::ZERO, Vec2::ONE);
        let mut falling = object_at(Vec2::new(0.0, 1.5), Vec2::ONE);
        falling.body.set_velocity(Velocity::new(0.5, -2.0));

        resolve_collision(&mut floor, &mut falling);

        assert_eq!(falling.body.velocity(), Velocity::new(0.5, 0.0));
    }

    #[test]
    fn collision_constant_body_is_never_altered() {
        let mut a = object_at(Vec2::ZERO, Vec2::ONE);
        let mut b = object_at(Vec2::new(0.25, 0.0), Vec2::ONE);
        b.body.set_velocity(Velocity::new(-5.0, 5.0));
        b.body.set_collision_constant(true);

        resolve_collision(&mut a, &mut b);

        assert_eq!(b.body.velocity(), Velocity::new(-5.0, 5.0));
        assert_eq!(a.body.velocity(), Velocity::ZERO);
    }

    #[test]
    fn the_moving_object_is_the_one_corrected() {
        let mut moving = object_at(Vec2::ZERO, Vec2::ONE);
        moving.body.set_velocity(Velocity::new(3.0, 0.0));
        let mut resting = object_at(Vec2::new(1.5, 0.0), Vec2::ONE);

        resolve_collision(&mut moving, &mut resting);

        assert_eq!(moving.body.velocity(), Velocity::ZERO);
        assert_eq!(resting.body.velocity(), Velocity::ZERO);
    }

    #[test]
    fn disjoint_objects_are_untouched() {
        let mut a = object_at(Vec2::ZERO, Vec2::ONE);
        a.body.set_velocity(Velocity::new(1.0, 1.0));
        let mut b = object_at(Vec2::new(10.0, 10.0), Vec2::ONE);

        resolve_collision(&mut a, &mut b);

        assert_eq!(a.body.velocity(), Velocity::new(1.0, 1.0));
    }

    #[test]
    fn axis_aligned_motion_produces_no_nan() {
        // Vertical-only motion with the x overlap dominant; the ratio
        // heuristic this replaced would divide by zero here.
        let mut a = object_at(Vec2::ZERO, Vec2::ONE);
        let mut b = object_at(Vec2::new(1.5, 0.0), Vec2::ONE);
        b.body.set_velocity(Velocity::new(0.0, -2.0));

        resolve_collision(&mut a, &mut b);

        let v = b.body.velocity();
        assert!(v.0.x.is_finite() && v.0.y.is_finite());
        assert_eq!(v, Velocity::new(0.0, -2.0));
    }
}
