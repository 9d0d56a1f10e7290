//! Static quad generation for the shared vertex data.
//!
//! Shapes are defined in local space, centered on the origin; world
//! placement is the transform registry's job at draw time. That is why two
//! shapes cover five entities.

use crate::entity::{EntityId, ItemTable};
use crate::environment::Environment;

pub const VERTS_PER_QUAD: usize = 6;
pub const FLOATS_PER_VERTEX: usize = 3;
pub const FLOATS_PER_QUAD: usize = VERTS_PER_QUAD * FLOATS_PER_VERTEX;

/// The distinct visual shapes, each occupying one slot of the shared
/// vertex data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Paddle,
    Ball,
}

impl ShapeId {
    pub const COUNT: usize = 2;

    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Region of the shared vertex data one shape occupies. Produced once at
/// startup so no component recomputes offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadHandle {
    pub first_vertex: u32,
    pub vertex_count: u32,
}

/// Write one rectangle (two triangles centered on the local origin) into
/// `buffer` at the shape's slot.
pub fn build_quad(buffer: &mut [f32], slot: usize, width_px: i32, height_px: i32, env: &Environment) {
    let half_width = env.half_extent_x(width_px);
    let half_height = env.half_extent_y(height_px);

    #[rustfmt::skip]
    let quad = [
        // First triangle
        -half_width,  half_height, 1.0,
        -half_width, -half_height, 1.0,
         half_width,  half_height, 1.0,
        // Second triangle
         half_width,  half_height, 1.0,
        -half_width, -half_height, 1.0,
         half_width, -half_height, 1.0,
    ];

    buffer[slot * FLOATS_PER_QUAD..(slot + 1) * FLOATS_PER_QUAD].copy_from_slice(&quad);
}

/// The shared vertex data for every shape, plus a handle per shape.
#[derive(Debug, Clone)]
pub struct ShapeSet {
    vertices: Vec<f32>,
    handles: [QuadHandle; ShapeId::COUNT],
}

impl ShapeSet {
    /// Build both quads from the item measurements. Called once at startup;
    /// never per frame.
    pub fn build(items: &ItemTable, env: &Environment) -> Self {
        let mut vertices = vec![0.0; ShapeId::COUNT * FLOATS_PER_QUAD];

        let paddle = items.get(EntityId::PaddleLeft);
        build_quad(&mut vertices, ShapeId::Paddle.slot(), paddle.width, paddle.height, env);

        let ball = items.get(EntityId::Ball);
        build_quad(&mut vertices, ShapeId::Ball.slot(), ball.width, ball.height, env);

        let handle = |shape: ShapeId| QuadHandle {
            first_vertex: (shape.slot() * VERTS_PER_QUAD) as u32,
            vertex_count: VERTS_PER_QUAD as u32,
        };

        Self {
            vertices,
            handles: [handle(ShapeId::Paddle), handle(ShapeId::Ball)],
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn handle(&self, shape: ShapeId) -> QuadHandle {
        self.handles[shape.slot()]
    }
}
