use rand::Rng;

/// The loaded-ammunition container: a current round count capped by a fixed
/// capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Magazine {
    rounds: u32,
    capacity: u32,
}

impl Magazine {
    /// A factory-fresh magazine, loaded to capacity.
    pub fn full(capacity: u32) -> Magazine {
        Magazine {
            rounds: capacity,
            capacity,
        }
    }

    /// A magazine in an arbitrary state. `rounds` is capped at `capacity`.
    pub fn with_rounds(capacity: u32, rounds: u32) -> Magazine {
        Magazine {
            rounds: rounds.min(capacity),
            capacity,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.rounds == 0
    }

    /// Consumes one round. Returns false without touching anything when the
    /// magazine has run dry.
    pub fn fire(&mut self) -> bool {
        if self.rounds == 0 {
            return false;
        }
        self.rounds -= 1;
        true
    }

    /// Loads the magazine back to capacity.
    pub fn refill(&mut self) {
        self.rounds = self.capacity;
    }

    /// Loads `n` more rounds, saturating at capacity.
    pub fn refill_by(&mut self, n: u32) {
        self.rounds = (self.rounds + n).min(self.capacity);
    }
}

/// An equipped firearm: a magazine, the spare rounds not loaded into it, the
/// damage ceiling of a single round, and the sprite key the renderer draws it
/// with.
#[derive(Clone, Debug)]
pub struct Weapon {
    magazine: Magazine,
    stock_rounds: u32,
    base_damage_per_round: f32,
    sprite: String,
}

impl Weapon {
    pub fn new(
        magazine: Magazine,
        stock_rounds: u32,
        base_damage_per_round: f32,
        sprite: impl Into<String>,
    ) -> Weapon {
        Weapon {
            magazine,
            stock_rounds,
            base_damage_per_round,
            sprite: sprite.into(),
        }
    }

    /// Attempts to fire one round and returns the damage it deals.
    ///
    /// On a live round the damage is `base_damage_per_round` minus a loss in
    /// effectiveness drawn uniformly from [0, 1) — a round that hits a
    /// non-critical location or glances off armor, without simulating
    /// individual ballistics. On an empty magazine the result is exactly 0.0,
    /// nothing is drawn from `rng`, and no state changes; running dry is a
    /// normal outcome, not an error.
    pub fn fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        if !self.magazine.fire() {
            return 0.0;
        }
        let loss_in_effectiveness: f32 = rng.gen();
        self.base_damage_per_round - loss_in_effectiveness
    }

    /// Moves rounds from stock into the magazine, but only once the magazine
    /// is completely empty. A magazine with even one round left is not topped
    /// up; the reload is committed only after running dry.
    pub fn reload(&mut self) {
        if !self.magazine.is_empty() {
            return;
        }
        if self.stock_rounds > self.magazine.capacity() {
            self.magazine.refill();
            self.stock_rounds -= self.magazine.capacity();
        } else {
            // Down to the last few rounds: load everything that's left.
            self.magazine.refill_by(self.stock_rounds);
            self.stock_rounds = 0;
        }
    }

    pub fn magazine(&self) -> &Magazine {
        &self.magazine
    }

    pub fn stock_rounds(&self) -> u32 {
        self.stock_rounds
    }

    pub fn base_damage_per_round(&self) -> f32 {
        self.base_damage_per_round
    }

    /// Key into the renderer's sprite table. Fixed at construction.
    pub fn sprite(&self) -> &str {
        &self.sprite
    }
}
