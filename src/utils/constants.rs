pub const GRAVITY: f64 = 30.0; // u/s^2, arcade-scaled

pub const MAX_TIMESTEP: f64 = 0.1; // Hard ceiling applied inside the integrator
pub const MIN_GROUND_CLEARANCE: f64 = 0.5; // u

// Fixed per-frame damping factors
pub const LATERAL_DAMPING: f64 = 0.98;
pub const ANGULAR_DAMPING: f64 = 0.97;

// Longitudinal response curve: 1.8 * (1 - r)^1.5 + 0.2
pub const LAUNCH_GAIN: f64 = 1.8;
pub const LAUNCH_EXPONENT: f64 = 1.5;
pub const LAUNCH_FLOOR: f64 = 0.2;

// Brake and reverse arbitration multipliers (of base deceleration / acceleration)
pub const BRAKE_MULTIPLIER: f64 = 6.0;
pub const REVERSE_BRAKE_MULTIPLIER: f64 = 2.0;
pub const REVERSE_STOP_MULTIPLIER: f64 = 2.5;
pub const REVERSE_ACCEL_MULTIPLIER: f64 = 0.4;
pub const REVERSE_BRAKE_SPEED: f64 = 5.0; // u/s

pub const WHEEL_COUNT: usize = 4;

// Road band used when a query source carries no width of its own
pub const DEFAULT_ROAD_HALF_WIDTH: f64 = 8.0; // u

// Obstacle hit response
pub const COLLISION_SPEED_CAP: f64 = 60.0; // u/s
pub const COLLISION_BUMP: f64 = 4.0; // u/s upward
pub const COLLISION_ANGULAR_KICK: f64 = 1.5; // rad/s, symmetric bound
