use cgmath::num_traits::zero;
use cgmath::vec2;
use cgmath::InnerSpace;
use legion::{Entity, World};
use rand::Rng;
use rand_distr::Distribution;

use crate::collision::{Circle, CollisionMask};
use crate::component::{
    ConfineWithin, ForceAccumulator, Health, Hitbox, HitboxState, Hurtbox, HurtboxState,
    InterpolatedPosition, Mass, Player, PlayerPlan, Position, PrevPosition, Sprite, Velocity,
    Zombie,
};
use crate::util::{Timer, UnitDisc};
use crate::weapon::Weapon;
use crate::Vec2;

pub const ARENA_RADIUS: f32 = 400.0;

const PLAYER_RADIUS: f32 = 20.0;
const PLAYER_HEALTH: f32 = 10.0;
const ZOMBIE_RADIUS: f32 = 15.0;
const ZOMBIE_HEALTH: f32 = 3.0;
const ZOMBIE_WALK_SPEED: f32 = 120.0;
/// Clawing applies every step the zombie stays in contact.
const CLAW_DAMAGE: f32 = 0.5;
/// Zombies never spawn closer to the center than this.
const SPAWN_KEEPOUT: f32 = 150.0;

/// The survivor, standing at the center of the arena with the given weapon in
/// hand.
pub fn spawn_player(world: &mut World, weapon: Weapon) -> Entity {
    world.push((
        Position(zero()),
        PrevPosition(zero()),
        InterpolatedPosition(zero()),
        Velocity(zero()),
        ForceAccumulator::default(),
        Mass::new(100.0),
        Hurtbox {
            shape: Circle {
                radius: PLAYER_RADIUS,
            }
            .into(),
            mask: CollisionMask::PLAYER,
        },
        HurtboxState::default(),
        Health(PLAYER_HEALTH),
        ConfineWithin(ARENA_RADIUS),
        Sprite("actors/survivor".into()),
        Player {
            shoot_cooldown: Timer::elapsed(),
            weapon,
        },
        PlayerPlan::default(),
    ))
}

pub fn spawn_zombie(world: &mut World, pos: Vec2) -> Entity {
    world.push((
        Position(pos),
        PrevPosition(pos),
        InterpolatedPosition(pos),
        Velocity(zero()),
        ForceAccumulator::default(),
        Mass::new(80.0),
        Zombie {
            walk_speed: ZOMBIE_WALK_SPEED,
        },
        Hurtbox {
            shape: Circle {
                radius: ZOMBIE_RADIUS,
            }
            .into(),
            mask: CollisionMask::ZOMBIE,
        },
        HurtboxState::default(),
        Hitbox {
            shape: Circle {
                radius: ZOMBIE_RADIUS,
            }
            .into(),
            mask: CollisionMask::PLAYER,
            damage: CLAW_DAMAGE,
        },
        HitboxState::default(),
        Health(ZOMBIE_HEALTH),
        ConfineWithin(ARENA_RADIUS),
        Sprite("actors/zombie".into()),
    ))
}

/// Scatters a wave of zombies over the arena, keeping them off the player's
/// spawn at the center.
pub fn spawn_zombies<R: Rng + ?Sized>(rng: &mut R, world: &mut World, count: usize) {
    for _ in 0..count {
        let scatter: Vec2 = UnitDisc.sample(rng) * ARENA_RADIUS;
        let pos = if scatter.magnitude2() < SPAWN_KEEPOUT * SPAWN_KEEPOUT {
            if scatter.magnitude2() > 0.0 {
                scatter.normalize_to(SPAWN_KEEPOUT)
            } else {
                vec2(SPAWN_KEEPOUT, 0.0)
            }
        } else {
            scatter
        };
        spawn_zombie(world, pos);
    }
}
