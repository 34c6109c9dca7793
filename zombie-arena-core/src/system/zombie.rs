use cgmath::InnerSpace;
use legion::world::SubWorld;
use legion::IntoQuery;

use crate::component::{ForceAccumulator, Mass, Player, Position, Velocity, Zombie};
use crate::resource::Time;
use crate::util::clamp_magnitude;
use crate::Vec2;

const MAX_SEEK_FORCE: f32 = 1.0e6;

/// Zombies have exactly one idea: walk at the nearest living survivor.
#[legion::system]
#[read_component(Position)]
#[read_component(Player)]
#[read_component(Velocity)]
#[read_component(Mass)]
#[read_component(Zombie)]
#[write_component(ForceAccumulator)]
pub fn zombie_seek(world: &mut SubWorld, #[resource] time: &Time) {
    let survivors: Vec<Vec2> = <(&Position, &Player)>::query()
        .iter(world)
        .map(|(&Position(pos), _)| pos)
        .collect();

    for (&Position(pos), &Velocity(vel), mass, zombie, ForceAccumulator(force)) in
        <(&Position, &Velocity, &Mass, &Zombie, &mut ForceAccumulator)>::query().iter_mut(world)
    {
        let mut nearest: Option<(f32, Vec2)> = None;
        for &target in &survivors {
            let dist2 = (target - pos).magnitude2();
            if nearest.map_or(true, |(best, _)| dist2 < best) {
                nearest = Some((dist2, target));
            }
        }
        let (dist2, target) = match nearest {
            Some(nearest) => nearest,
            None => continue,
        };
        // Standing on the target; no direction to lean in.
        if dist2 <= f32::EPSILON {
            continue;
        }

        let goal_vel = (target - pos).normalize_to(zombie.walk_speed);
        let goal_force = (goal_vel - vel) * mass.mass() / time.elapsed_seconds;
        *force += clamp_magnitude(goal_force, 0.0, MAX_SEEK_FORCE);
    }
}
