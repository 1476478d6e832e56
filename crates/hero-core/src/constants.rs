// Particle tuning constants shared by the field and the web frontend.

// Population
pub const AREA_PER_PARTICLE: u32 = 15_000; // surface px² per particle; lower = denser

// Interaction
pub const INTERACTION_RADIUS: f32 = 150.0; // repulsion kicks in below this pointer distance
pub const EASE_FACTOR: f32 = 0.05; // fraction of the gap to the idle target closed per tick

// Idle drift (phases accumulate for the page's lifetime, so they are f64)
pub const FLOAT_Y_PHASE_RATIO: f64 = 0.7; // y runs slower than x, giving the asymmetric loop
pub const FLOAT_ANGLE_SEED_MAX: f64 = 360.0;
pub const FLOAT_SPEED_MIN: f64 = 0.02;
pub const FLOAT_SPEED_SPAN: f64 = 0.01;
pub const FLOAT_RADIUS_MIN: f32 = 30.0;
pub const FLOAT_RADIUS_SPAN: f32 = 20.0;

// Rotation
pub const ANGLE_SEED_MAX: f64 = 360.0; // seeded like degrees, consumed as radians
pub const ROTATION_SPEED_MIN: f64 = 0.01;
pub const ROTATION_SPEED_SPAN: f64 = 0.01;

// Appearance
pub const SIZE_MIN: f32 = 20.0;
pub const SIZE_SPAN: f32 = 30.0;
pub const DENSITY_MIN: f32 = 1.0;
pub const DENSITY_SPAN: f32 = 20.0;
pub const OPACITY_MIN: f32 = 0.4;
pub const OPACITY_SPAN: f32 = 0.7; // upper bound 1.1 is intentional; the canvas clamps alpha
