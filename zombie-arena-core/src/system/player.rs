use cgmath::num_traits::zero;
use cgmath::InnerSpace;
use legion::systems::CommandBuffer;
use rand_pcg::Pcg32;

use crate::collision::{Circle, CollisionMask};
use crate::component::{
    ForceAccumulator, Hitbox, HitboxState, InterpolatedPosition, Lifespan, Mass, Player,
    PlayerPlan, Position, PrevPosition, RemoveOnHit, Shot, Sprite, Velocity,
};
use crate::resource::{CombatStats, Input, Time};
use crate::util::{clamp_magnitude, Timer};

const RUN_SPEED: f32 = 250.0;
const MAX_MOVE_FORCE: f32 = 1.0e6;
/// Minimum time between trigger pulls.
const SHOT_INTERVAL: f32 = 0.1;
const MUZZLE_OFFSET: f32 = 20.0;
const BULLET_SPEED: f32 = 1000.0;
const BULLET_RADIUS: f32 = 5.0;
const BULLET_LIFESPAN: f32 = 1.0;

#[legion::system(for_each)]
pub fn player_plan(
    &Velocity(vel): &Velocity,
    ForceAccumulator(force): &mut ForceAccumulator,
    mass: &Mass,
    player: &mut Player,
    plan: &mut PlayerPlan,
    #[resource] time: &Time,
    #[resource] input: &Input,
    #[resource] rng: &mut Pcg32,
    #[resource] stats: &mut CombatStats,
) {
    let deadzoned_move = {
        let r = input.move_.magnitude();
        if r > 1.0 {
            input.move_.normalize()
        } else if r > 0.5 {
            input.move_.normalize_to((r - 0.5) * 2.0)
        } else {
            zero()
        }
    };
    let goal_vel = RUN_SPEED * deadzoned_move;
    let goal_force = (goal_vel - vel) * mass.mass() / time.elapsed_seconds;
    *force += clamp_magnitude(goal_force, 0.0, MAX_MOVE_FORCE);

    if input.reload {
        player.weapon.reload();
    }

    plan.shot = None;
    let trigger_ready = player.shoot_cooldown.step_and_is_elapsed(time);
    if trigger_ready && input.fire && input.aim.magnitude2() > 0.0 {
        let damage = player.weapon.fire(rng);
        if damage > 0.0 {
            stats.shots_fired += 1;
            plan.shot = Some(Shot {
                dir: input.aim,
                damage,
            });
        } else {
            // Dry click. The round stays hypothetical but the trigger still
            // cycles at the same rate.
            stats.shots_dry += 1;
        }
        player.shoot_cooldown.reset(SHOT_INTERVAL);
    }
}

#[legion::system(for_each)]
pub fn player_act(
    cmd: &mut CommandBuffer,
    &Position(pos): &Position,
    &Velocity(vel): &Velocity,
    plan: &mut PlayerPlan,
) {
    if let Some(Shot { dir, damage }) = plan.shot.take() {
        let muzzle = pos + dir.normalize_to(MUZZLE_OFFSET);
        cmd.push((
            Position(muzzle),
            PrevPosition(muzzle),
            InterpolatedPosition(muzzle),
            Velocity(vel + dir.normalize_to(BULLET_SPEED)),
            Lifespan(Timer::with_remaining(BULLET_LIFESPAN)),
            Hitbox {
                shape: Circle {
                    radius: BULLET_RADIUS,
                }
                .into(),
                mask: CollisionMask::ZOMBIE,
                damage,
            },
            HitboxState::default(),
            RemoveOnHit,
            Sprite("shots/tracer".into()),
        ));
    }
}
