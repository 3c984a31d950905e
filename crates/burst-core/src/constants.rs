// Tuning constants for the click-burst effect.

// Surface
pub const SURFACE_SCALE: f64 = 2.0; // backing pixels per CSS pixel
pub const SURFACE_Z_INDEX: i32 = 99999;

// Particle motion
pub const RADIUS_DECAY_PER_FRAME: f32 = 0.3;
pub const VELOCITY_DECAY_PER_FRAME: f32 = 0.9; // geometric, applied to both axes
pub const VELOCITY_JITTER: f32 = 0.5; // added to the speed multiplier per axis
pub const NORMAL_SPAN: f32 = 2.0; // normal = -NORMAL_SPAN / extent * trig(angle)

// Particle sizing
pub const RADIUS_BASE_MIN: f32 = 4.0;
pub const RADIUS_BASE_MAX: f32 = 6.0;
pub const RADIUS_JITTER: f32 = 2.0;

// Speed multipliers
pub const SPEED_MIN: f32 = 6.0;
pub const SPEED_MAX: f32 = 12.0;
pub const ESCALATED_SPEED_MIN: f32 = 10.0; // plus the escalation multiplier
pub const ESCALATED_SPEED_MAX: f32 = 12.0; // plus the escalation multiplier

// Bursts (half-open ranges)
pub const PRESS_BURST_MIN: u32 = 10;
pub const PRESS_BURST_MAX: u32 = 20;
pub const RELEASE_BURST_MIN: u32 = 50;
pub const RELEASE_BURST_MAX: u32 = 100;

// Escalation
pub const ESCALATION_GROWTH_PER_FRAME: f32 = 0.2;
pub const ESCALATION_DECAY_PER_FRAME: f32 = 0.4;

// Long-press detection
pub const LONG_PRESS_THRESHOLD_MS: u64 = 500;

// Default particle palette
pub const DEFAULT_PALETTE: [&str; 5] = ["#F73859", "#14FFEC", "#00E0FF", "#FF99FE", "#FAF15D"];

// CSS hooks
pub const CLASS_PRESSED: &str = "is-pressed";
pub const CLASS_LONG_PRESS: &str = "is-longpress";
pub const CLASS_POINTER: &str = "pointer";
