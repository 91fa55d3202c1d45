//! In-memory scene graph.
//!
//! Records every mesh and the camera state without drawing anything. The
//! binary uses it to run without a display and logs its `describe` dump at
//! debug level when the game loop stops. Tests inspect it to check what the
//! adapter asked for.

use std::collections::BTreeMap;
use std::fmt::Write;

use glam::Vec3;

use starstrike_core::types::Viewport;

use crate::scene::{MeshDesc, MeshId, RenderError, SceneGraph};

/// One mesh as the scene holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshState {
    pub desc: MeshDesc,
    pub position: Vec3,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessScene {
    meshes: BTreeMap<MeshId, MeshState>,
    projection: Option<Viewport>,
    draws: u64,
    projection_updates: u64,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, id: MeshId) -> Option<&MeshState> {
        self.meshes.get(&id)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn projection(&self) -> Option<&Viewport> {
        self.projection.as_ref()
    }

    pub fn projection_updates(&self) -> u64 {
        self.projection_updates
    }

    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Human-readable dump of the scene, one mesh per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene (draws={}, meshes={}) ===",
            self.draws,
            self.meshes.len()
        );
        if let Some(viewport) = &self.projection {
            let _ = writeln!(
                out,
                "Camera: {}x{} fov={:.0} visible={:.2}x{:.2}",
                viewport.width_px,
                viewport.height_px,
                viewport.fov_deg,
                viewport.half_width() * 2.0,
                viewport.half_height() * 2.0
            );
        }
        for (id, mesh) in &self.meshes {
            let _ = writeln!(
                out,
                "  {:?} pos=({:.2}, {:.2}){}{}",
                id,
                mesh.position.x,
                mesh.position.y,
                if mesh.visible { "" } else { " hidden" },
                if mesh.desc.texture.is_some() { "" } else { " untextured" },
            );
        }
        out
    }

    fn mesh_mut(&mut self, id: MeshId) -> Result<&mut MeshState, RenderError> {
        self.meshes.get_mut(&id).ok_or(RenderError::UnknownMesh(id))
    }
}

impl SceneGraph for HeadlessScene {
    fn add_mesh(&mut self, id: MeshId, desc: MeshDesc, position: Vec3) -> Result<(), RenderError> {
        if self.meshes.contains_key(&id) {
            return Err(RenderError::DuplicateMesh(id));
        }
        log::trace!("scene add {:?} at {:?}", id, position);
        self.meshes.insert(
            id,
            MeshState {
                desc,
                position,
                visible: true,
            },
        );
        Ok(())
    }

    fn remove_mesh(&mut self, id: MeshId) -> Result<(), RenderError> {
        log::trace!("scene remove {:?}", id);
        self.meshes
            .remove(&id)
            .map(|_| ())
            .ok_or(RenderError::UnknownMesh(id))
    }

    fn set_position(&mut self, id: MeshId, position: Vec3) -> Result<(), RenderError> {
        self.mesh_mut(id)?.position = position;
        Ok(())
    }

    fn set_visible(&mut self, id: MeshId, visible: bool) -> Result<(), RenderError> {
        log::trace!("scene {:?} visible={}", id, visible);
        self.mesh_mut(id)?.visible = visible;
        Ok(())
    }

    fn update_projection(&mut self, viewport: &Viewport) {
        log::debug!(
            "camera projection updated: aspect {:.3}",
            viewport.aspect()
        );
        self.projection = Some(*viewport);
        self.projection_updates += 1;
    }

    fn draw(&mut self) -> Result<(), RenderError> {
        self.draws += 1;
        Ok(())
    }
}
