use cgmath::num_traits::zero;
use legion::Entity;

use crate::collision::{CollisionMask, Shape};
use crate::util::Timer;
use crate::Vec2;

mod mass;
mod player;
mod zombie;

pub use mass::Mass;
pub use player::{Player, PlayerPlan, Shot};
pub use zombie::Zombie;

/// Clamps an entity inside the circular arena wall of the given radius.
#[derive(Clone, Debug)]
pub struct ConfineWithin(pub f32);

#[derive(Clone, Debug)]
pub struct ForceAccumulator(pub Vec2);

impl Default for ForceAccumulator {
    fn default() -> Self {
        ForceAccumulator(zero())
    }
}

#[derive(Clone, Debug)]
pub struct Health(pub f32);

/// A collider that deals damage.
#[derive(Clone, Debug)]
pub struct Hitbox {
    pub shape: Shape,
    pub mask: CollisionMask,
    pub damage: f32,
}

#[derive(Clone, Debug, Default)]
pub struct HitboxState {
    pub hit_entities: Vec<Entity>,
}

/// A collider that receives damage.
#[derive(Clone, Debug)]
pub struct Hurtbox {
    pub shape: Shape,
    pub mask: CollisionMask,
}

#[derive(Clone, Debug, Default)]
pub struct HurtboxState {
    pub hit_by_entities: Vec<Entity>,
}

#[derive(Clone, Debug)]
pub struct InterpolatedPosition(pub Vec2);

#[derive(Clone, Debug)]
pub struct Lifespan(pub Timer);

#[derive(Clone, Debug)]
pub struct Position(pub Vec2);

#[derive(Clone, Debug)]
pub struct PrevPosition(pub Vec2);

#[derive(Clone, Debug)]
pub struct RemoveOnHit;

/// Key into the renderer's sprite table for this entity.
#[derive(Clone, Debug)]
pub struct Sprite(pub String);

#[derive(Clone, Debug)]
pub struct Velocity(pub Vec2);
