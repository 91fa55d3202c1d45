//! Keeps a scene graph in step with simulation snapshots.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use glam::{Vec2, Vec3};

use starstrike_core::constants::{ENEMY_TEXTURE, PLAYER_TEXTURE, PROJECTILE_TEXTURE};
use starstrike_core::enums::EntityKind;
use starstrike_core::state::FrameSnapshot;
use starstrike_core::types::Viewport;

use crate::scene::{MeshDesc, MeshId, RenderError, SceneGraph};
use crate::texture::{TextureHandle, TextureLoader};

/// Ship quads are 1x1, projectiles a thin sliver.
const SHIP_SIZE: Vec2 = Vec2::new(1.0, 1.0);
const PROJECTILE_SIZE: Vec2 = Vec2::new(0.1, 0.3);

/// Textures per entity kind. A missing entry means the load failed.
#[derive(Debug, Clone, Default)]
struct TextureSet {
    player: Option<TextureHandle>,
    enemy: Option<TextureHandle>,
    projectile: Option<TextureHandle>,
}

impl TextureSet {
    fn load(loader: &mut impl TextureLoader) -> Self {
        Self {
            player: load_or_log(loader, PLAYER_TEXTURE),
            enemy: load_or_log(loader, ENEMY_TEXTURE),
            projectile: load_or_log(loader, PROJECTILE_TEXTURE),
        }
    }

    fn for_kind(&self, kind: EntityKind) -> Option<TextureHandle> {
        match kind {
            EntityKind::PlayerShip => self.player.clone(),
            EntityKind::EnemyShip => self.enemy.clone(),
            EntityKind::Projectile => self.projectile.clone(),
        }
    }
}

fn load_or_log(loader: &mut impl TextureLoader, path: &str) -> Option<TextureHandle> {
    match loader.load(Path::new(path)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("failed to load texture, drawing untextured: {e}");
            None
        }
    }
}

/// What the scene should contain for one entity this frame.
struct Desired {
    position: Vec3,
    visible: bool,
}

/// Drives a [`SceneGraph`] from [`FrameSnapshot`]s.
pub struct RenderAdapter<S: SceneGraph> {
    scene: S,
    textures: TextureSet,
    /// Meshes currently in the scene and their visibility.
    live: BTreeMap<MeshId, bool>,
    viewport: Option<Viewport>,
    frames: u64,
}

impl<S: SceneGraph> RenderAdapter<S> {
    /// Load textures up front and wrap the scene. Texture failures are
    /// logged; affected meshes render untextured.
    pub fn new(scene: S, loader: &mut impl TextureLoader) -> Self {
        Self {
            scene,
            textures: TextureSet::load(loader),
            live: BTreeMap::new(),
            viewport: None,
            frames: 0,
        }
    }

    /// Bring the scene in line with `frame` and draw it.
    pub fn present(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        if self.viewport != Some(frame.viewport) {
            self.scene.update_projection(&frame.viewport);
            self.viewport = Some(frame.viewport);
        }

        let desired = desired_meshes(frame);

        let stale: Vec<MeshId> = self
            .live
            .keys()
            .filter(|id| !desired.contains_key(*id))
            .copied()
            .collect();
        for id in stale {
            self.scene.remove_mesh(id)?;
            self.live.remove(&id);
        }

        for (id, want) in &desired {
            match self.live.get(id).copied() {
                None => {
                    let desc = self.mesh_desc(id.kind());
                    self.scene.add_mesh(*id, desc, want.position)?;
                    if !want.visible {
                        self.scene.set_visible(*id, false)?;
                    }
                    self.live.insert(*id, want.visible);
                }
                Some(was_visible) => {
                    self.scene.set_position(*id, want.position)?;
                    if was_visible != want.visible {
                        self.scene.set_visible(*id, want.visible)?;
                        self.live.insert(*id, want.visible);
                    }
                }
            }
        }

        self.scene.draw()?;
        self.frames += 1;
        log::trace!(
            "frame {} presented: {} meshes",
            self.frames,
            self.live.len()
        );
        Ok(())
    }

    /// Ids of the meshes the adapter has put in the scene.
    pub fn live_meshes(&self) -> BTreeSet<MeshId> {
        self.live.keys().copied().collect()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    fn mesh_desc(&self, kind: EntityKind) -> MeshDesc {
        let size = match kind {
            EntityKind::PlayerShip | EntityKind::EnemyShip => SHIP_SIZE,
            EntityKind::Projectile => PROJECTILE_SIZE,
        };
        MeshDesc {
            kind,
            size,
            texture: self.textures.for_kind(kind),
        }
    }
}

fn desired_meshes(frame: &FrameSnapshot) -> BTreeMap<MeshId, Desired> {
    let mut desired = BTreeMap::new();
    desired.insert(
        MeshId::Player,
        Desired {
            position: frame.player.position.to_vec3(),
            visible: true,
        },
    );
    for enemy in &frame.enemies {
        desired.insert(
            MeshId::Enemy(enemy.slot),
            Desired {
                position: enemy.position.to_vec3(),
                visible: enemy.visible,
            },
        );
    }
    for projectile in &frame.projectiles {
        desired.insert(
            MeshId::Projectile(projectile.seq),
            Desired {
                position: projectile.position.to_vec3(),
                visible: true,
            },
        );
    }
    desired
}
