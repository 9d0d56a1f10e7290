//! Render dispatch: selects how an entity's quads are emitted.
//!
//! The actual GPU draw lives behind [`DrawBackend`]; this module only
//! decides which transforms and shape regions to hand it.

use glam::Mat4;

use crate::display::Display;
use crate::entity::EntityId;
use crate::environment::Environment;
use crate::geometry::QuadHandle;
use crate::transform::TransformRegistry;

/// Draw primitive the rendering backend must provide: one quad from the
/// shared vertex data, placed by a world transform.
pub trait DrawBackend {
    fn draw_quad(&mut self, shape: QuadHandle, transform: Mat4);
}

/// The two draw strategies. The set is closed, so a tag dispatched through
/// one match beats open-ended virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// One quad at the registry transform.
    Basic,
    /// One quad per lit display cell, offset from the registry transform.
    Display,
}

/// Per-entity record binding a shape region to a draw strategy.
#[derive(Debug, Clone, Copy)]
pub struct RenderItem {
    pub entity: EntityId,
    pub shape: QuadHandle,
    pub kind: RenderKind,
}

/// Extra data a strategy needs beyond the registry transform.
#[derive(Debug, Clone, Copy)]
pub enum RenderPayload<'a> {
    None,
    Display(&'a Display),
}

/// Issue the draw calls for one entity.
pub fn draw(
    item: &RenderItem,
    payload: RenderPayload<'_>,
    registry: &TransformRegistry,
    env: &Environment,
    backend: &mut dyn DrawBackend,
) {
    let transform = registry.get(item.entity);
    match (item.kind, payload) {
        (RenderKind::Basic, _) => {
            backend.draw_quad(item.shape, transform.matrix());
        }
        (RenderKind::Display, RenderPayload::Display(display)) => {
            for (pos_x, pos_y) in display.active_cells() {
                let placed = transform.offset_by(pos_x * env.delta_width, pos_y * env.delta_height);
                backend.draw_quad(item.shape, placed.matrix());
            }
        }
        (RenderKind::Display, RenderPayload::None) => {
            // unreachable through Game wiring
            log::warn!("display entity {:?} drawn without cell data", item.entity);
        }
    }
}
