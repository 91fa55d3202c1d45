//! Render adapter for STARSTRIKE.
//!
//! The simulation never talks to a renderer. Each tick the host hands the
//! `FrameSnapshot` to a [`RenderAdapter`], which keeps an external scene
//! graph in step with it: meshes are created for new entities, dropped for
//! vanished ones and moved for the rest.
//!
//! The scene graph itself is behind the [`SceneGraph`] trait. [`HeadlessScene`]
//! is an in-memory implementation used by the binary and by tests; a GPU or
//! browser backend plugs in without changing consumers.

pub mod adapter;
pub mod headless;
pub mod scene;
pub mod texture;

pub use adapter::RenderAdapter;
pub use headless::HeadlessScene;
pub use scene::{MeshDesc, MeshId, RenderError, SceneGraph};
pub use texture::{FsTextureLoader, TextureError, TextureHandle, TextureLoader};

#[cfg(test)]
mod tests;
