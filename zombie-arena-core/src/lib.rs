use std::ops::Deref;

use legion::{Resources, Schedule, World};
use log::warn;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub mod collision;
pub mod component;
pub mod loadout;
pub mod resource;
pub mod spawn;
pub mod system;
pub mod util;
pub mod weapon;

use resource::{CombatStats, Input, Subframe, Time};
use system::{
    collide_system, confine_within_system, damage_system, interpolate_system, lifespan_system,
    physics_system, player_act_system, player_plan_system, remove_on_hit_system,
    zombie_seek_system,
};

pub type Vec2 = cgmath::Vector2<f32>;

pub struct Game {
    rng: Pcg32,
    world: World,
    is_paused: bool,

    step_resources: Resources,
    step_schedule: Schedule,

    interpolate_resources: Resources,
    interpolate_schedule: Schedule,
}

impl Game {
    /// A game seeded from OS entropy.
    pub fn new() -> Game {
        let mut seed = <Pcg32 as SeedableRng>::Seed::default();
        getrandom::getrandom(&mut seed[..]).unwrap_or_else(|_| {
            warn!("getrandom() failed; proceeding with the default seed");
        });
        Game::with_rng(Pcg32::from_seed(seed))
    }

    /// A game whose every damage roll and spawn scatter is reproducible.
    pub fn with_seed(seed: u64) -> Game {
        Game::with_rng(Pcg32::seed_from_u64(seed))
    }

    fn with_rng(rng: Pcg32) -> Game {
        let mut step_resources = Resources::default();
        step_resources.insert(CombatStats::default());

        Game {
            rng,
            world: World::default(),
            is_paused: false,

            step_resources,
            step_schedule: Schedule::builder()
                .add_system(player_plan_system())
                .add_system(zombie_seek_system())
                .add_system(physics_system())
                .add_system(confine_within_system())
                .add_system(player_act_system())
                .add_system(collide_system())
                .add_system(damage_system())
                .add_system(lifespan_system())
                .add_system(remove_on_hit_system())
                .build(),

            interpolate_resources: Resources::default(),
            interpolate_schedule: Schedule::builder().add_system(interpolate_system()).build(),
        }
    }

    pub fn rng_mut(&mut self) -> &mut impl Rng {
        &mut self.rng
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn rng_and_world_mut(&mut self) -> (&mut impl Rng, &mut World) {
        (&mut self.rng, &mut self.world)
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_is_paused(&mut self, is_paused: bool) {
        self.is_paused = is_paused;
    }

    pub fn combat_stats(&self) -> impl Deref<Target = CombatStats> + '_ {
        self.step_resources.get::<CombatStats>().unwrap()
    }

    pub fn reset(&mut self) {
        self.is_paused = false;
        self.world.clear();
        self.step_resources.insert(CombatStats::default());
    }

    /// Runs one synchronous simulation step. Everything — movement, firing,
    /// reloading, collisions, damage — happens on the calling thread before
    /// this returns.
    pub fn step(&mut self, elapsed_seconds: f32, input: Input) {
        self.step_resources.insert(Time { elapsed_seconds });
        self.step_resources.insert(input);
        self.step_resources.insert(self.rng.clone());

        self.step_schedule
            .execute(&mut self.world, &mut self.step_resources);

        self.rng = self.step_resources.remove().unwrap();
    }

    /// Blends previous and current positions for the renderer.
    pub fn interpolate(&mut self, subframe: Subframe) {
        self.interpolate_resources.insert(subframe);

        self.interpolate_schedule
            .execute(&mut self.world, &mut self.interpolate_resources);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
