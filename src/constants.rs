// DOM and scene element identifiers used by the web frontend.

// HUD controls
pub const SCAN_BUTTON_ID: &str = "scan-button";
pub const PLACE_BUTTON_ID: &str = "place-button";
pub const OPEN_BUTTON_ID: &str = "open-button";
pub const CLOSE_REWARD_ID: &str = "close-reward";
pub const INSTRUCTIONS_ID: &str = "instructions";

// Reward card
pub const REWARD_DISPLAY_ID: &str = "reward-display";
pub const REWARD_TITLE_ID: &str = "reward-title";
pub const REWARD_DESCRIPTION_ID: &str = "reward-description";
pub const REWARD_IMAGE_ID: &str = "reward-image";
pub const UI_CONTAINER_ID: &str = "ui-container"; // confetti is parented here

// Scene entities
pub const CHEST_CONTAINER_ID: &str = "chest-container";
pub const CHEST_ID: &str = "treasure-chest";
pub const GROUND_PLANE_ID: &str = "ground-plane";
pub const LID_ID: &str = "chest-lid";
pub const SCENE_SELECTOR: &str = "a-scene";
pub const LOADER_SELECTOR: &str = ".arjs-loader";

// Audio clips
pub const OPEN_SOUND_ID: &str = "open-sound";
pub const REWARD_SOUND_ID: &str = "reward-sound";

// Reward card styling
pub const REWARD_SHOWN_TRANSFORM: &str = "translate(-50%, -50%) scale(1)";
pub const REWARD_HIDDEN_TRANSFORM: &str = "translate(-50%, -50%) scale(0)";
pub const REWARD_TRANSITION: &str =
    "transform 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275), box-shadow 0.5s";
pub const REWARD_GLOW_SHADOW: &str = "0 0 30px rgba(255, 215, 0, 0.8)";

// Confetti styling
pub const CONFETTI_SIZE_PX: u32 = 10;
pub const CONFETTI_Z_INDEX: &str = "1001";
pub const CONFETTI_TRANSITION: &str = "all 1s ease-out";
