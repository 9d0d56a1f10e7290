use glam::{Mat4, Vec2};

use crate::entity::EntityId;

/// Placement of one entity as a 4x4 affine matrix.
///
/// Only the translation components are ever mutated in this game; rotation
/// and scale stay identity, so the named x/y accessors are the whole
/// mutation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    pub fn x(&self) -> f32 {
        self.0.w_axis.x
    }

    pub fn y(&self) -> f32 {
        self.0.w_axis.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.0.w_axis.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.0.w_axis.y = y;
    }

    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// This transform with an extra translation composed on top.
    pub fn offset_by(&self, dx: f32, dy: f32) -> Self {
        let mut out = *self;
        out.0.w_axis.x += dx;
        out.0.w_axis.y += dy;
        out
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }
}

/// Owns the one transform per entity.
///
/// All positional mutation goes through here; no other component holds a
/// copy. Clamping is the caller's job, this is a dumb store.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: [Transform; EntityId::COUNT],
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: [Transform::IDENTITY; EntityId::COUNT],
        }
    }

    pub fn get(&self, id: EntityId) -> &Transform {
        &self.transforms[id.index()]
    }

    pub fn set_x(&mut self, id: EntityId, x: f32) {
        self.transforms[id.index()].set_x(x);
    }

    pub fn set_y(&mut self, id: EntityId, y: f32) {
        self.transforms[id.index()].set_y(y);
    }

    pub fn reset_all_to_identity(&mut self) {
        self.transforms = [Transform::IDENTITY; EntityId::COUNT];
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
