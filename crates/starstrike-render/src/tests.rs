//! Tests for the render adapter, headless scene and texture loading.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glam::Vec3;

use starstrike_core::config::SimConfig;
use starstrike_core::enums::EntityKind;
use starstrike_core::input::{InputEvent, InputState, Key};
use starstrike_core::state::{EnemyView, FrameSnapshot, ProjectileView};
use starstrike_core::types::Position;
use starstrike_sim::SimulationEngine;

use crate::adapter::RenderAdapter;
use crate::headless::HeadlessScene;
use crate::scene::{MeshId, RenderError, SceneGraph};
use crate::texture::{FsTextureLoader, TextureError, TextureHandle, TextureLoader};

/// Loader that succeeds for every path except the ones listed.
#[derive(Default)]
struct StubLoader {
    missing: Vec<&'static str>,
    requested: Vec<PathBuf>,
}

impl TextureLoader for StubLoader {
    fn load(&mut self, path: &Path) -> Result<TextureHandle, TextureError> {
        self.requested.push(path.to_path_buf());
        if self.missing.iter().any(|m| path == Path::new(m)) {
            return Err(TextureError::NotFound(path.to_path_buf()));
        }
        Ok(TextureHandle {
            id: self.requested.len() as u32,
            path: path.to_path_buf(),
            byte_len: 1,
        })
    }
}

fn adapter() -> RenderAdapter<HeadlessScene> {
    RenderAdapter::new(HeadlessScene::new(), &mut StubLoader::default())
}

fn expected_meshes(frame: &FrameSnapshot) -> BTreeSet<MeshId> {
    let mut ids = BTreeSet::from([MeshId::Player]);
    ids.extend(frame.enemies.iter().map(|e| MeshId::Enemy(e.slot)));
    ids.extend(frame.projectiles.iter().map(|p| MeshId::Projectile(p.seq)));
    ids
}

fn frame_with(enemies: Vec<EnemyView>, projectiles: Vec<ProjectileView>) -> FrameSnapshot {
    FrameSnapshot {
        enemies,
        projectiles,
        ..Default::default()
    }
}

fn enemy(slot: usize, x: f32, y: f32, visible: bool) -> EnemyView {
    EnemyView {
        slot,
        position: Position::new(x, y),
        visible,
        respawn_in_ms: 0.0,
    }
}

fn projectile(seq: u64, x: f32, y: f32) -> ProjectileView {
    ProjectileView {
        seq,
        position: Position::new(x, y),
    }
}

// ---- Adapter ----

#[test]
fn test_first_present_creates_all_meshes() {
    let mut adapter = adapter();
    let frame = frame_with(
        vec![enemy(0, 1.0, 3.0, true), enemy(1, -2.0, 2.5, true)],
        vec![projectile(4, 0.0, -2.0)],
    );
    adapter.present(&frame).unwrap();

    let scene = adapter.scene();
    assert_eq!(scene.mesh_count(), 4);
    assert_eq!(scene.draw_count(), 1);
    assert_eq!(scene.projection_updates(), 1);
    let e1 = scene.mesh(MeshId::Enemy(1)).unwrap();
    assert_eq!(e1.position, Vec3::new(-2.0, 2.5, 0.0));
    assert_eq!(e1.desc.kind, EntityKind::EnemyShip);
    assert!(e1.desc.texture.is_some());
    assert_eq!(
        scene.mesh(MeshId::Projectile(4)).unwrap().desc.kind,
        EntityKind::Projectile
    );
}

#[test]
fn test_present_removes_vanished_and_moves_survivors() {
    let mut adapter = adapter();
    adapter
        .present(&frame_with(
            vec![enemy(0, 0.0, 3.0, true)],
            vec![projectile(0, 0.0, -2.0), projectile(1, 0.5, -2.5)],
        ))
        .unwrap();
    adapter
        .present(&frame_with(
            vec![enemy(0, 0.0, 2.9, true)],
            vec![projectile(1, 0.5, -2.4)],
        ))
        .unwrap();

    let scene = adapter.scene();
    assert!(scene.mesh(MeshId::Projectile(0)).is_none());
    assert_eq!(
        scene.mesh(MeshId::Projectile(1)).unwrap().position,
        Vec3::new(0.5, -2.4, 0.0)
    );
    assert_eq!(
        scene.mesh(MeshId::Enemy(0)).unwrap().position,
        Vec3::new(0.0, 2.9, 0.0)
    );
    assert_eq!(scene.draw_count(), 2);
    assert_eq!(scene.projection_updates(), 1, "viewport unchanged");
}

#[test]
fn test_destroyed_enemy_is_hidden_then_shown() {
    let mut adapter = adapter();
    adapter
        .present(&frame_with(vec![enemy(0, 0.0, 1.0, false)], vec![]))
        .unwrap();
    assert!(!adapter.scene().mesh(MeshId::Enemy(0)).unwrap().visible);

    adapter
        .present(&frame_with(vec![enemy(0, 3.0, 3.0, true)], vec![]))
        .unwrap();
    let mesh = adapter.scene().mesh(MeshId::Enemy(0)).unwrap();
    assert!(mesh.visible);
    assert_eq!(mesh.position, Vec3::new(3.0, 3.0, 0.0));
}

#[test]
fn test_resize_updates_projection() {
    let mut adapter = adapter();
    let mut frame = FrameSnapshot::default();
    adapter.present(&frame).unwrap();
    frame.viewport.resize(400, 400);
    adapter.present(&frame).unwrap();

    let scene = adapter.scene();
    assert_eq!(scene.projection_updates(), 2);
    assert_eq!(scene.projection().unwrap().width_px, 400);
}

#[test]
fn test_texture_failure_is_not_fatal() {
    let mut loader = StubLoader {
        missing: vec![starstrike_core::constants::PLAYER_TEXTURE],
        ..Default::default()
    };
    let mut adapter = RenderAdapter::new(HeadlessScene::new(), &mut loader);
    assert_eq!(loader.requested.len(), 3);

    adapter
        .present(&frame_with(vec![enemy(0, 0.0, 3.0, true)], vec![]))
        .unwrap();
    let scene = adapter.scene();
    let player = scene.mesh(MeshId::Player).expect("player still drawn");
    assert!(player.desc.texture.is_none());
    assert!(scene.mesh(MeshId::Enemy(0)).unwrap().desc.texture.is_some());
    assert!(scene.describe().contains("Player pos=(0.00, 0.00) untextured"));
}

#[test]
fn test_adapter_tracks_live_simulation() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 3,
        enemy_speed: 2.0,
        ..Default::default()
    })
    .unwrap();
    let mut adapter = adapter();

    for i in 0..600u32 {
        let mut input = InputState::default();
        if i % 4 == 0 {
            input.record(InputEvent::KeyDown { key: Key::Fire });
        }
        if i % 9 == 0 {
            input.record(InputEvent::KeyDown { key: Key::Left });
        }
        if i == 300 {
            input.record(InputEvent::Resize {
                width: 1024,
                height: 768,
            });
        }
        let frame = engine.tick(&input);
        adapter.present(&frame).unwrap();

        assert_eq!(adapter.live_meshes(), expected_meshes(&frame));
        for view in frame.visible_enemies() {
            let mesh = adapter.scene().mesh(MeshId::Enemy(view.slot)).unwrap();
            assert!(mesh.visible);
            assert_eq!(mesh.position, view.position.to_vec3());
        }
    }

    assert_eq!(adapter.frames_presented(), 600);
    assert_eq!(adapter.scene().projection_updates(), 2);
}

// ---- Headless scene ----

#[test]
fn test_headless_rejects_duplicate_and_unknown_meshes() {
    let mut scene = HeadlessScene::new();
    let desc = crate::scene::MeshDesc {
        kind: EntityKind::PlayerShip,
        size: glam::Vec2::ONE,
        texture: None,
    };
    scene.add_mesh(MeshId::Player, desc.clone(), Vec3::ZERO).unwrap();
    assert_eq!(
        scene.add_mesh(MeshId::Player, desc, Vec3::ZERO),
        Err(RenderError::DuplicateMesh(MeshId::Player))
    );
    assert_eq!(
        scene.remove_mesh(MeshId::Enemy(2)),
        Err(RenderError::UnknownMesh(MeshId::Enemy(2)))
    );
    assert_eq!(
        scene.set_position(MeshId::Projectile(9), Vec3::ONE),
        Err(RenderError::UnknownMesh(MeshId::Projectile(9)))
    );
}

// ---- Filesystem loader ----

#[test]
fn test_fs_loader_missing_file() {
    let mut loader = FsTextureLoader::new("/nonexistent-asset-root");
    let err = loader.load(Path::new("models/playerSpaceShip.png")).unwrap_err();
    assert!(matches!(err, TextureError::NotFound(_)));
    assert!(err.to_string().contains("playerSpaceShip.png"));
}

#[test]
fn test_fs_loader_reads_existing_file() {
    let dir = std::env::temp_dir().join(format!("starstrike-tex-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("models")).unwrap();
    std::fs::write(dir.join("models/ship.png"), b"\x89PNG").unwrap();
    std::fs::write(dir.join("models/empty.png"), b"").unwrap();

    let mut loader = FsTextureLoader::new(&dir);
    let first = loader.load(Path::new("models/ship.png")).unwrap();
    let second = loader.load(Path::new("models/ship.png")).unwrap();
    assert_eq!(first.byte_len, 4);
    assert_ne!(first.id, second.id);
    assert!(matches!(
        loader.load(Path::new("models/empty.png")),
        Err(TextureError::Empty(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
