//! 2D hitboxes, polygons and collision detection.
//!
//! Shapes are plain values ([`FloatPosition`], [`FloatingBox`], [`Segment`],
//! [`Line`], [`Circle`], [`Polygon`]); the predicates in [`collision`] and the
//! helpers in [`movement`] operate on them. Coordinates use the tolerance
//! comparison from [`lunatix_math::float`].

pub mod collision;
pub mod error;
pub mod hitbox;
pub mod movement;
pub mod polygon;
pub mod settings;

pub use collision::*;
pub use error::{ConfigError, PolygonError, Result};
pub use hitbox::{Circle, FloatPosition, FloatingBox, Line, Segment};
pub use movement::*;
pub use polygon::{Polygon, TRIANGLE_SIDES};
pub use settings::{CollisionSettings, PhysicsSettings, SeparatingAxes, load_or_default, load_settings};

pub use lunatix_math::{self as math, Vector2D};
