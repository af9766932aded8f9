// Play field (units match the web page's pixels)
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const CEILING_Y: f64 = 0.0;
pub const FLOOR_Y: f64 = 580.0; // field height minus the sprite's leeway

// Player
pub const PLAYER_START_Y: f64 = 200.0;
pub const PLAYER_LEFT: f64 = 80.0;
pub const PLAYER_SIZE: f64 = 64.0;
pub const GRAVITY: f64 = 5.0; // units per frame
pub const JUMP_IMPULSE: f64 = 60.0;

// Obstacles
pub const OBSTACLE_STEP: f64 = 5.0; // units per tick
pub const OBSTACLE_SPAWN_X: f64 = 800.0;
pub const OBSTACLE_REMOVAL_X: f64 = -50.0;
pub const OBSTACLE_WIDTH: f64 = 48.0;
pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.02;
pub const GAP_HEIGHT_MIN: f64 = 150.0;
pub const GAP_HEIGHT_MAX: f64 = 300.0;
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = 400.0;

// Collision and scoring
pub const COLLISION_BAND_LEFT: f64 = 0.0;
pub const COLLISION_BAND_RIGHT: f64 = 100.0;
pub const SCORING_LINE_X: f64 = 50.0;

// Scheduling
pub const OBSTACLE_TICK_MS: u64 = 16;
pub const FRAME_MS: u64 = 16; // ~60 FPS display refresh
pub const MAX_POLL_MS: u64 = 50;

// Landing page gags
pub const LOSS_PER_PET: u64 = 1337;
pub const SHOOK_DURATION_MS: u64 = 500;
pub const RUG_BANNER_PERIOD_SECS: u64 = 10;
pub const RUG_BANNER_VISIBLE_SECS: u64 = 2;
pub const CLOSE_BUTTON_STAY_CHANCE: f64 = 0.2;
pub const CLOSE_BUTTON_DODGE_X: f64 = 250.0;
pub const CLOSE_BUTTON_DODGE_Y: f64 = 100.0;
