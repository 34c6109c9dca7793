use cgmath::InnerSpace;

use crate::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub radius: f32,
}

/// Everything in the arena collides as a circle: survivors, zombies, and
/// bullets alike.
#[derive(Clone, Debug)]
pub enum Shape {
    Circle(Circle),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Shape {
        Shape::Circle(circle)
    }
}

pub fn test(shape_a: &Shape, pos_a: Vec2, shape_b: &Shape, pos_b: Vec2) -> bool {
    match (shape_a, shape_b) {
        (Shape::Circle(a), Shape::Circle(b)) => {
            let reach = a.radius + b.radius;
            (pos_b - pos_a).magnitude2() < reach * reach
        }
    }
}

/// Routes damage: a hitbox only registers against hurtboxes whose mask
/// overlaps its own.
#[derive(Clone, Copy, Debug)]
pub struct CollisionMask(u32);

impl CollisionMask {
    /// Things that bullets hurt.
    pub const ZOMBIE: CollisionMask = CollisionMask(0x00000001);
    /// Things that claws hurt.
    pub const PLAYER: CollisionMask = CollisionMask(0x00000002);

    pub fn overlaps(self, rhs: CollisionMask) -> bool {
        (self.0 & rhs.0) != 0
    }
}
