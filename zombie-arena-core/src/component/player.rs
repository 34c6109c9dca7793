use crate::util::Timer;
use crate::weapon::Weapon;
use crate::Vec2;

#[derive(Clone, Debug)]
pub struct Player {
    pub shoot_cooldown: Timer,
    pub weapon: Weapon,
}

/// One shot the player has committed to this step: the aim direction and the
/// damage already rolled for the round.
#[derive(Clone, Copy, Debug)]
pub struct Shot {
    pub dir: Vec2,
    pub damage: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PlayerPlan {
    pub shot: Option<Shot>,
}
