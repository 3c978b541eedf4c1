use log::trace;

use crate::body::Body;
use crate::collision::resolve_collision;
use crate::dynamics::Mass;
use crate::math::Vec2;
use crate::object::GameObject;
use crate::time_step::TimeStep;

/// The step driver. Owns every simulated object and runs the tick:
/// integrate all bodies first, then resolve collisions between
/// overlapping pairs. Resolution never interleaves with integration, so
/// every pair is resolved against post-integration state.
#[derive(Debug, Clone)]
pub struct World {
    pub objects: Vec<GameObject>,
    time_step: TimeStep,
}

impl World {
    /// 60 Hz fixed step.
    pub fn new() -> Self {
        Self::with_time_step(TimeStep::default())
    }

    pub fn with_time_step(time_step: TimeStep) -> Self {
        Self {
            objects: Vec::new(),
            time_step,
        }
    }

    #[inline]
    pub fn time_step(&self) -> &TimeStep {
        &self.time_step
    }

    pub fn add_object(&mut self, mut object: GameObject) -> usize {
        let id = self.objects.len();
        object.id = id;
        self.objects.push(object);
        id
    }

    pub fn create_object(
        &mut self,
        position: Vec2,
        half_extents: Vec2,
        mass: Mass,
    ) -> usize {
        self.add_object(GameObject::new(position, Body::new(half_extents, mass)))
    }

    pub fn get_object(&self, id: usize) -> Option<&GameObject> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: usize) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        trace!("stepping {} objects", self.objects.len());

        for object in &mut self.objects {
            object.advance(&self.time_step);
        }

        // O(n^2) broad-phase over the rectangular extents.
        for i in 0..self.objects.len() {
            for j in i + 1..self.objects.len() {
                let [a, b] = self.objects.get_disjoint_mut([i, j]).unwrap();

                if a.body.mass().inv() == 0.0 && b.body.mass().inv() == 0.0 {
                    continue;
                }

                resolve_collision(a, b);
            }
        }
    }
}

impl Default for World {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
