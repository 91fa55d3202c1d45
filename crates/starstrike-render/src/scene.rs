//! Scene-graph interface the adapter drives.

use glam::{Vec2, Vec3};
use thiserror::Error;

use starstrike_core::enums::EntityKind;
use starstrike_core::types::Viewport;

use crate::texture::TextureHandle;

/// Stable identity of a mesh in the scene, derived from the entity it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshId {
    Player,
    Enemy(usize),
    Projectile(u64),
}

impl MeshId {
    pub fn kind(&self) -> EntityKind {
        match self {
            MeshId::Player => EntityKind::PlayerShip,
            MeshId::Enemy(_) => EntityKind::EnemyShip,
            MeshId::Projectile(_) => EntityKind::Projectile,
        }
    }
}

/// How a mesh should look: a textured quad facing the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDesc {
    pub kind: EntityKind,
    /// Plane size in world units.
    pub size: Vec2,
    /// `None` when the texture failed to load; the backend draws it untextured.
    pub texture: Option<TextureHandle>,
}

/// Scene-graph failures surfaced by a backend.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("mesh {0:?} is already in the scene")]
    DuplicateMesh(MeshId),

    #[error("mesh {0:?} is not in the scene")]
    UnknownMesh(MeshId),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Minimal scene-graph API: the calls a 3D toolkit exposes for
/// mesh creation, scene add/remove and camera projection updates.
pub trait SceneGraph {
    /// Create a mesh and add it to the scene at `position`.
    fn add_mesh(&mut self, id: MeshId, desc: MeshDesc, position: Vec3) -> Result<(), RenderError>;

    /// Remove a mesh from the scene and release it.
    fn remove_mesh(&mut self, id: MeshId) -> Result<(), RenderError>;

    fn set_position(&mut self, id: MeshId, position: Vec3) -> Result<(), RenderError>;

    fn set_visible(&mut self, id: MeshId, visible: bool) -> Result<(), RenderError>;

    /// Recompute the camera projection after the window changed.
    fn update_projection(&mut self, viewport: &Viewport);

    /// Render the current scene.
    fn draw(&mut self) -> Result<(), RenderError>;
}
