use glam::Vec3;

// Shared interaction tuning constants used by the core and the web frontend.
// Times are milliseconds on the same clock as `performance.now()`.

// Quality governor
pub const QUALITY_WINDOW_MS: f64 = 1000.0; // minimum span between FPS evaluations
pub const LOW_QUALITY_FPS: u32 = 30; // below this the renderer is degraded
pub const HIGH_QUALITY_FPS: u32 = 50; // above this the renderer is restored

// Chest lifecycle, measured from the open action
pub const OPEN_HINT_DELAY_MS: f64 = 1000.0;
pub const REWARD_REVEAL_DELAY_MS: f64 = 2000.0;
pub const REARM_DELAY_MS: f64 = 3000.0;
pub const CLOSE_RESHOW_DELAY_MS: f64 = 500.0; // measured from the close-reward action

// Effects
pub const PARTICLE_LIFETIME_MS: f64 = 2000.0;
pub const PARTICLE_COUNT: u32 = 100;
pub const PARTICLE_PRESET: &str = "dust";
pub const PARTICLE_COLORS: [&str; 3] = ["#FFD700", "#FFA500", "#FF6347"];
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_LAUNCH_DELAY_MS: f64 = 10.0;
pub const CONFETTI_FLIGHT_MS: f64 = 1000.0;
pub const CONFETTI_FADE_MS: f64 = 1000.0;
pub const CONFETTI_MIN_DISTANCE_PX: f32 = 100.0;
pub const CONFETTI_DISTANCE_SPAN_PX: f32 = 100.0;

// Lid and glow
pub const LID_OPEN_ANGLE_DEG: f32 = -120.0;
pub const LID_OPEN_DURATION_MS: u32 = 2000;
pub const LID_EASING: &str = "easeInOutQuad";
pub const GLOW_MATERIAL: &str = "emissive: #ff8800; emissiveIntensity: 0.5";

// Gestures
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const DRAG_UNITS_PER_PIXEL: f32 = 0.01;

// Scene layout (A-Frame units)
pub const OFFSCENE_POSITION: Vec3 = Vec3::new(0.0, -10.0, 0.0);
pub const LID_OFFSET: Vec3 = Vec3::new(0.0, 0.3, 0.0);
pub const PARTICLE_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const GROUND_Y: f32 = 0.0;
pub const GROUND_HALF_EXTENT: f32 = 5.0; // ground plane is 10 x 10 around the origin
pub const CAMERA_HEIGHT: f32 = 1.6; // A-Frame default eye height
pub const CAMERA_FOVY_DEG: f32 = 80.0; // A-Frame default vertical field of view

// Copy
pub const INITIAL_INSTRUCTIONS: &str = "Click 'Scan Surface' to begin";
pub const SCANNED_INSTRUCTIONS: &str =
    "Surface scanned! Tap on the surface to place the treasure chest.";
pub const PLACED_INSTRUCTIONS: &str = "Treasure chest placed! Tap OPEN to reveal your reward.";
pub const OPENING_INSTRUCTIONS: &str = "✨ Treasure chest opening! ✨";
pub const REVEALED_INSTRUCTIONS: &str = "🎁 Reward revealed! 🎁";
pub const OPEN_LABEL: &str = "OPEN TREASURE";
pub const PLACE_NEW_LABEL: &str = "PLACE NEW CHEST";
