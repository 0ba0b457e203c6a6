//! Game constants and tuning parameters.
//!
//! Distances are in world units. Speeds and accelerations are per tick,
//! since the game advances in fixed steps rather than by elapsed time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Heightmap ---

/// Red-channel value that maps to height 0.
pub const HEIGHTMAP_ZERO_LEVEL: u8 = 127;

/// Raw height per red-channel step away from [`HEIGHTMAP_ZERO_LEVEL`].
pub const HEIGHT_PER_PIXEL: f32 = 1.0 / 127.0;

/// Default heightmap asset.
pub const HEIGHTMAP_PATH: &str = "heights.png";

/// Tile-space to world-space scale of the game terrain (x, height, z).
pub const TERRAIN_SCALE: [f32; 3] = [0.25, 1.3, 0.25];

// --- Raycasting ---

/// Hard cap on terrain height evaluations per raycast.
pub const MAX_RAY_STEPS: usize = 1000;

/// Ray step length as a fraction of the smaller horizontal terrain scale.
pub const RAY_STEP_FRACTION: f32 = 0.5;

// --- Player ---

/// Walking distance per tick.
pub const MOVE_SPEED: f32 = 0.03;

/// Movement multiplier while the run key is held.
pub const RUN_SPEED_MULTIPLIER: f32 = 2.0;

/// Movement multiplier while the sneak key is held.
pub const SNEAK_SPEED_MULTIPLIER: f32 = 0.5;

/// Upward velocity applied when a jump starts.
pub const JUMP_SPEED: f32 = 0.046;

/// Vertical acceleration per tick (negative is down).
pub const GRAVITY: f32 = -0.0025;

/// Eye height above the player's feet.
pub const PLAYER_HEIGHT: f32 = 0.4;

/// Beams are fired from this fraction of [`PLAYER_HEIGHT`].
pub const MUZZLE_HEIGHT_FRACTION: f32 = 0.9;

// --- Mouse look ---

/// Yaw in degrees per pixel of horizontal mouse movement.
pub const MOUSE_YAW_DEGREES_PER_PIXEL: f32 = 0.125;

/// Change of the view direction's y component per pixel of vertical mouse movement.
pub const MOUSE_PITCH_PER_PIXEL: f32 = 1.0 / 500.0;

// --- Laser beams ---

/// Life lost by a laser beam each tick. Beams start at life 1.0.
pub const LASER_BEAM_DECAY: f32 = 0.05;

// --- Camera ---

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEG: f32 = 60.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.001;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 100.0;
