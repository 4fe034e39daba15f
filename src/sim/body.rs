//! Simulated bodies
//!
//! One data type covers the lander, the moon tiles, the landing pads and any
//! decoration. Geometry is an axis-aligned box centered at `position`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::CONTACT_SLOP;

/// How a body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// The controlled body (exactly one per simulation)
    Dynamic,
    /// Immovable collision source
    StaticObstacle,
    /// Collision source with scripted straight-line motion
    KinematicObstacle,
    /// Drawn but never collides
    Decoration,
}

/// What the landing rules see when the lander touches an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Surface {
    /// Bare moon rock
    #[default]
    Terrain,
    /// Safe to land on
    LandingPad,
}

/// Which sides of the lander touched something during the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Any contact other than touching down with the bottom
    pub fn any_side_or_top(&self) -> bool {
        self.top || self.left || self.right
    }
}

/// Terminal classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Neutral,
    Win,
    Loss,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Neutral
    }
}

/// Opaque handle the renderer uses to pick a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// A simulated body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    pub surface: Surface,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Control or scripted direction (not a velocity)
    pub movement: Vec3,
    pub scale: Vec3,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_power: f32,
    /// Recomputed every step, never accumulated
    pub collisions: CollisionFlags,
    /// Only meaningful on the dynamic body
    pub outcome: Outcome,
    /// Inactive bodies keep their data but are skipped
    pub active: bool,
    pub sprite: SpriteId,
}

impl Body {
    /// A unit box at `position`, at rest
    pub fn new(kind: BodyKind, position: Vec3) -> Self {
        Self {
            kind,
            surface: Surface::Terrain,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movement: Vec3::ZERO,
            scale: Vec3::ONE,
            width: 1.0,
            height: 1.0,
            speed: 0.0,
            jump_power: 0.0,
            collisions: CollisionFlags::default(),
            outcome: Outcome::Neutral,
            active: true,
            sprite: SpriteId::default(),
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteId) -> Self {
        self.sprite = sprite;
        self
    }

    /// Scripted motion for kinematic obstacles; fixed for the lifetime of the body
    pub fn with_motion(mut self, movement: Vec3, speed: f32) -> Self {
        self.movement = movement;
        self.speed = speed;
        self
    }

    /// Half-extents of the collision box
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * self.scale.x, self.height * self.scale.y) * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.half_extents().y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.half_extents().y
    }

    /// Whether this body can be collided against at all
    pub fn is_collidable(&self) -> bool {
        self.active && self.kind != BodyKind::Decoration
    }

    pub fn is_landing_pad(&self) -> bool {
        self.surface == Surface::LandingPad
    }

    /// Penetration depth of the two boxes on each axis (negative = gap)
    pub fn penetration(&self, other: &Body) -> Vec2 {
        let reach = self.half_extents() + other.half_extents();
        let distance = (self.position - other.position).truncate().abs();
        reach - distance
    }

    /// Pure box-overlap query, independent of velocity and side.
    ///
    /// Boxes that merely touch (penetration within `CONTACT_SLOP`) do not overlap.
    /// This applies to every caller, including `GameState::over_landing_pad`:
    /// a lander resting exactly on a pad's top is not "over" it.
    pub fn overlaps(&self, other: &Body) -> bool {
        let depth = self.penetration(other);
        depth.x > CONTACT_SLOP && depth.y > CONTACT_SLOP
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
