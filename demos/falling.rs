//! A crate falling onto an immovable floor, printed to stdout.
//!
//! Run with `RUST_LOG=debug` to see the collision resolution log.

use kinetic2d::{Body, Force, GameObject, Mass, Vec2, World};

fn main() {
    env_logger::init();

    let mut world = World::new();

    let mut floor = GameObject::new(
        Vec2::new(0.0, -2.0),
        Body::new(Vec2::new(10.0, 1.0), Mass::INFINITE),
    );
    floor.body.set_collision_constant(true);
    world.add_object(floor);

    let mut body = Body::new(Vec2::splat(0.5), Mass::new(1.0));
    body.apply_force(Force::new(0.0, -9.8));
    let falling = world.add_object(GameObject::new(Vec2::new(0.0, 4.0), body));

    let dt = world.time_step().dt;
    for frame in 0..240 {
        world.step();

        if frame % 24 == 0 {
            let object = world.get_object(falling).unwrap();
            let velocity = object.body.velocity();
            println!(
                "t = {:>5.2}s  position = ({:>6.3}, {:>6.3})  velocity = ({:>6.3}, {:>7.3})",
                (frame + 1) as f32 * dt,
                object.position.x,
                object.position.y,
                velocity.0.x,
                velocity.0.y,
            );
        }
    }
}
