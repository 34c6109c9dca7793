use cgmath::num_traits::zero;

use crate::Vec2;

#[derive(Clone, Debug)]
pub struct Time {
    pub elapsed_seconds: f32,
}

/// Interpolation factor in the closed-open interval [0, 1), with zero at the
/// previous position and one at the current position.
#[derive(Clone, Debug)]
pub struct Subframe(pub f32);

/// Player intent for one step, already mapped from whatever device the outer
/// loop samples.
#[derive(Clone, Debug)]
pub struct Input {
    pub move_: Vec2,
    pub aim: Vec2,
    pub fire: bool,
    pub reload: bool,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            move_: zero(),
            aim: zero(),
            fire: false,
            reload: false,
        }
    }
}

/// Running combat totals for the whole run. Cleared by `Game::reset`.
#[derive(Clone, Debug, Default)]
pub struct CombatStats {
    /// Live rounds that left the barrel.
    pub shots_fired: usize,
    /// Trigger pulls on an empty magazine.
    pub shots_dry: usize,
    pub kills: usize,
}
