use lunatix_math::Vector2D;
use lunatix_physics::{FloatingBox, move_box};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of a randomly drawn lifetime, in updates.
pub const DELAY: u32 = 16;

/// A short-lived box moving at constant velocity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    area: FloatingBox,
    lifetime: u32,
    velocity: Vector2D,
}

impl Particle {
    /// A still particle with a random lifetime.
    pub fn new(area: FloatingBox) -> Self {
        Self::with_velocity(area, Vector2D::ZERO)
    }

    /// A moving particle with a random lifetime in `[0, DELAY)`.
    pub fn with_velocity(area: FloatingBox, velocity: Vector2D) -> Self {
        let lifetime = rand::thread_rng().gen_range(0..DELAY);
        Self::with_lifetime(area, velocity, lifetime)
    }

    pub const fn with_lifetime(area: FloatingBox, velocity: Vector2D, lifetime: u32) -> Self {
        Self {
            area,
            lifetime,
            velocity,
        }
    }

    /// Moves the particle one step and consumes one unit of lifetime.
    /// Dead particles do not move.
    pub fn update(&mut self) {
        if self.lifetime > 0 {
            move_box(&mut self.area, self.velocity);
            self.lifetime -= 1;
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.lifetime == 0
    }

    /// Remaining lifetime
    #[inline]
    pub fn delay(&self) -> u32 {
        self.lifetime
    }

    #[inline]
    pub fn area(&self) -> &FloatingBox {
        &self.area
    }

    #[inline]
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }
}
