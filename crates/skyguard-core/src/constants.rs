//! Simulation constants and default tuning parameters.
//!
//! Distances are playfield units, speeds are units per tick.

// --- Spawn pacing ---

/// Spawn interval with a score of zero (milliseconds).
pub const SPAWN_INTERVAL_BASE_MS: f64 = 4000.0;

/// Lower bound on the spawn interval (milliseconds).
pub const SPAWN_INTERVAL_MIN_MS: f64 = 1000.0;

/// Interval reduction per `SPAWN_SCORE_STEP` points (milliseconds).
pub const SPAWN_INTERVAL_STEP_MS: f64 = 400.0;

/// Score span over which the interval shrinks by one step.
pub const SPAWN_SCORE_STEP: f64 = 100.0;

/// Height above the top edge at which enemies appear.
pub const ENEMY_SPAWN_HEIGHT: f64 = 20.0;

// --- Enemies ---

/// Enemy speed with a score of zero.
pub const ENEMY_BASE_SPEED: f64 = 0.5;

/// Speed added per `ENEMY_SPEED_SCORE_STEP` points. Unbounded above.
pub const ENEMY_SPEED_GAIN: f64 = 0.5;

/// Score span over which enemy speed grows by one gain.
pub const ENEMY_SPEED_SCORE_STEP: f64 = 500.0;

/// Distance to target below which an enemy counts as arrived.
pub const ARRIVAL_THRESHOLD: f64 = 5.0;

// --- Interceptors ---

/// Interceptor travel per tick, independent of path length.
pub const INTERCEPTOR_SPEED: f64 = 8.0;

/// Horizontal destination offsets of one volley, one interceptor each.
pub const VOLLEY_OFFSETS: [f64; 3] = [-15.0, 0.0, 15.0];

/// Ammo spent per volley.
pub const AMMO_PER_VOLLEY: u32 = 3;

/// Starting ammo of every battery.
pub const BATTERY_INITIAL_AMMO: u32 = 20_000;

// --- Explosions ---

/// Peak explosion radius, reached at the lifetime midpoint.
pub const EXPLOSION_MAX_RADIUS: f64 = 50.0;

/// Explosion lifetime in ticks (~1s at 60 Hz).
pub const EXPLOSION_DURATION_TICKS: u32 = 60;

// --- Scoring & outcome ---

/// Points awarded per enemy destroyed by an explosion.
pub const POINTS_PER_KILL: u32 = 20;

/// Score at which the session is won.
pub const WIN_SCORE: u32 = 1000;

// --- Layout ---

/// Depth of the bottom ground band. Fire commands inside it are rejected.
pub const GROUND_BAND: f64 = 60.0;

/// Distance of installations above the bottom edge.
pub const INSTALLATION_GROUND_OFFSET: f64 = 40.0;

/// Battery x positions as fractions of the width (left, middle, right).
pub const BATTERY_X_FRACTIONS: [f64; 3] = [0.1, 0.5, 0.9];

/// City x positions as fractions of the width.
pub const CITY_X_FRACTIONS: [f64; 6] = [0.2, 0.3, 0.4, 0.6, 0.7, 0.8];

// --- Driver ---

/// Nominal display refresh rate driving the simulation (Hz).
pub const TICK_RATE: u32 = 60;
