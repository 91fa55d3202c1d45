//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`SimConfig`](crate::config::SimConfig);
//! a config file may override any of them.

/// Default simulation tick rate (Hz). Matches a 60 fps host frame callback.
pub const TICK_RATE: u32 = 60;

// --- Viewport / camera ---

/// Default window width in pixels.
pub const VIEWPORT_WIDTH_PX: u32 = 1280;

/// Default window height in pixels.
pub const VIEWPORT_HEIGHT_PX: u32 = 720;

/// Vertical field of view of the perspective camera (degrees).
pub const CAMERA_FOV_DEG: f32 = 75.0;

/// Distance from the camera to the play plane (z = 0).
pub const CAMERA_DISTANCE: f32 = 5.0;

// --- Player ---

/// Horizontal displacement per left/right key event.
pub const PLAYER_STEP: f32 = 0.1;

/// Fixed y of the player ship, near the bottom of the default viewport.
pub const PLAYER_Y: f32 = -3.0;

// --- Projectiles ---

/// Projectile climb speed (units per second).
pub const PROJECTILE_SPEED: f32 = 6.0;

// --- Enemies ---

/// Number of enemy slots kept alive on screen.
pub const ENEMY_COUNT: usize = 5;

/// Enemy descent speed (units per second).
pub const ENEMY_SPEED: f32 = 1.0;

/// Height at which enemies spawn and respawn.
pub const ENEMY_SPAWN_Y: f32 = 3.0;

/// Lower bound of the random spawn x range.
pub const ENEMY_SPAWN_X_MIN: f32 = -5.0;

/// Upper bound of the random spawn x range.
pub const ENEMY_SPAWN_X_MAX: f32 = 5.0;

/// Delay between an enemy's destruction and its respawn (milliseconds).
pub const ENEMY_RESPAWN_DELAY_MS: u64 = 2000;

/// Largest respawn delay a config may ask for (one hour).
pub const MAX_RESPAWN_DELAY_MS: u64 = 3_600_000;

// --- Collision ---

/// Half extent of the axis-aligned box used for projectile/enemy hits.
pub const COLLISION_HALF_EXTENT: f32 = 0.5;

// --- Assets ---

/// Player ship texture, relative to the asset root.
pub const PLAYER_TEXTURE: &str = "models/playerSpaceShip.png";

/// Enemy ship texture, relative to the asset root.
pub const ENEMY_TEXTURE: &str = "models/enemySpaceShip.png";

/// Projectile texture, relative to the asset root.
pub const PROJECTILE_TEXTURE: &str = "models/projectile.png";
