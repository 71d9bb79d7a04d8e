use glam::Vec3;

use crate::camera::Sway;
use crate::scene::{ObjectId, SceneObject};

/// Horizontal wrap limit for drifting clouds
pub const CLOUD_WRAP_X: f32 = 60.0;

/// Per-class update rule applied once per tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Behavior {
    /// Slow turn, bob and sway; speed and phase depend on the index
    Castle,
    /// Layered horizontal drift with wrap-around
    Cloud,
    /// Each child puff drifts on its own phase
    CloudLayer,
    /// Spin about each axis and float around a base position
    Planet { spin: Vec3, x: Sway, y: Sway },
    /// Constant spin, e.g. a starfield
    Spin { rate: Vec3 },
}

/// Entry of the animatable set
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animated {
    pub object: ObjectId,
    /// Creation order; source of the phase offset
    pub index: usize,
    pub behavior: Behavior,
}

/// Ordered set of animated scene objects
#[derive(Clone, Debug, Default)]
pub struct AnimatableSet {
    entries: Vec<Animated>,
}

impl AnimatableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; its index is the number of entries already
    /// sharing the same behavior class
    pub fn push(&mut self, object: ObjectId, behavior: Behavior) -> usize {
        let index = self
            .entries
            .iter()
            .filter(|e| std::mem::discriminant(&e.behavior) == std::mem::discriminant(&behavior))
            .count();
        self.entries.push(Animated {
            object,
            index,
            behavior,
        });
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animated> {
        self.entries.iter()
    }

    pub fn count_of(&self, behavior: fn(&Behavior) -> bool) -> usize {
        self.entries.iter().filter(|e| behavior(&e.behavior)).count()
    }
}

impl Animated {
    pub fn apply(&self, object: &mut SceneObject, time: f32) {
        let i = self.index as f32;
        let transform = &mut object.transform;

        match self.behavior {
            Behavior::Castle => {
                transform.rotation.y += 0.003 + i * 0.001;
                transform.position.y = (time * 0.5 + i * 0.8).sin() * 0.3;
                transform.rotation.z = (time * 0.3 + i).sin() * 0.02;
            }
            Behavior::Cloud => {
                let layer_speed = 1.0 + (self.index % 3) as f32 * 0.3;
                transform.position.x += (time * 0.15 + i).sin() * 0.018 * layer_speed;
                transform.position.y += (time * 0.25 + i).sin() * 0.01;
                transform.rotation.y += 0.0008;

                if transform.position.x > CLOUD_WRAP_X {
                    transform.position.x = -CLOUD_WRAP_X;
                } else if transform.position.x < -CLOUD_WRAP_X {
                    transform.position.x = CLOUD_WRAP_X;
                }
            }
            Behavior::CloudLayer => {
                for (j, puff) in object.children.iter_mut().enumerate() {
                    let j = j as f32;
                    puff.transform.position.x += (time * 0.3 + j).sin() * 0.02;
                    puff.transform.position.y += (time * 0.2 + j).cos() * 0.01;
                }
            }
            Behavior::Planet { spin, x, y } => {
                transform.rotation += spin;
                transform.position.x = x.sample(time);
                transform.position.y = y.sample(time);
            }
            Behavior::Spin { rate } => {
                transform.rotation += rate;
            }
        }
    }
}
