#[derive(Clone, Debug)]
pub struct Zombie {
    /// Shambling speed the zombie tries to hold while closing on a survivor.
    pub walk_speed: f32,
}
