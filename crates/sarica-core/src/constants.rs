/// Highest level a member can reach. Experience past this point is retained unspent.
pub const MAX_LEVEL: u32 = 244;

/// Levels per stage (nine steps).
pub const LEVELS_PER_STAGE: u32 = 9;

/// Levels per realm (three stages).
pub const LEVELS_PER_REALM: u32 = 27;

/// Levels per path (three realms).
pub const LEVELS_PER_PATH: u32 = 81;

/// Experience curve: `floor((CURVE_BASE * (level + 1)) ^ CURVE_EXPONENT * CURVE_SCALE)`.
pub const CURVE_BASE: f64 = 10.0;
pub const CURVE_EXPONENT: f64 = 1.5;
pub const CURVE_SCALE: f64 = 3.0;

/// Divisor applied to raw points when scaling the softmax share into an affinity.
pub const AFFINITY_POINT_DIVISOR: f64 = 100.0;

/// Logarithm base used to bucket affinities into grade tiers.
pub const GRADE_LOG_BASE: f64 = 3.0;

/// Current on-disk schema version.
pub const SCHEMA_VERSION: u32 = 1;
