//! Timing, geometry and animation constants shared by the demos.

use std::time::Duration;

/// Period of the compass needle approach/decay timer.
pub const NEEDLE_TICK: Duration = Duration::from_millis(16);

/// Period of the charge-flow marker timer.
pub const FLOW_TICK: Duration = Duration::from_millis(30);

/// Needle deflection (degrees) reached with the current switched on.
pub const TARGET_DEFLECTION_DEG: f64 = 30.0;

/// Fraction of the remaining delta covered by each approach tick.
pub const APPROACH_RATE: f64 = 0.1;

/// Below this delta (degrees) the needle snaps onto its target.
pub const APPROACH_SNAP_DEG: f64 = 1.0;

/// Multiplier applied to the angle by each decay tick.
pub const DECAY_FACTOR: f64 = 0.9;

/// Below this magnitude (degrees) the decaying needle snaps to rest.
pub const DECAY_SNAP_DEG: f64 = 0.5;

/// Flow offset step per tick.
pub const FLOW_STEP: f64 = 2.0;

/// Flow offset wraps modulo this value.
pub const FLOW_PERIOD: f64 = 400.0;

/// Number of flow markers drawn along the wire.
pub const FLOW_MARKERS: usize = 5;

/// Spacing between consecutive flow markers, in offset units.
pub const FLOW_MARKER_SPACING: f64 = 80.0;

/// Number of decorative field rings drawn around the compass while current flows.
pub const COMPASS_FIELD_RINGS: usize = 3;

/// Diameter of the innermost compass field ring.
pub const COMPASS_RING_BASE: f64 = 150.0;

/// Diameter increment between compass field rings.
pub const COMPASS_RING_STEP: f64 = 80.0;

/// Upper bound of the intensity slider.
pub const MAX_INTENSITY: u8 = 100;

/// Intensity the field view starts with.
pub const DEFAULT_INTENSITY: u8 = 50;

/// Ring count at zero intensity.
pub const MIN_RINGS: usize = 5;

/// Additional rings gained between zero and full intensity.
pub const EXTRA_RINGS: usize = 8;

/// Radius of the innermost field ring.
pub const RING_BASE_RADIUS: f64 = 30.0;

/// Radial span covered by the field rings.
pub const RING_SPAN: f64 = 180.0;

/// Opacity floor of the outer rings (before strength scaling).
pub const RING_MIN_OPACITY: f64 = 0.2;

/// Opacity lost from the innermost to the outermost ring.
pub const RING_OPACITY_FALLOFF: f64 = 0.8;

/// Filing count at full intensity.
pub const MAX_FILINGS: usize = 100;

/// Closest distance of a filing from the wire.
pub const FILING_MIN_DISTANCE: f64 = 40.0;

/// Width of the band filings are scattered over.
pub const FILING_DISTANCE_SPAN: f64 = 160.0;

/// Shortest filing.
pub const FILING_MIN_LENGTH: f64 = 8.0;

/// Range of filing lengths above the minimum.
pub const FILING_LENGTH_SPAN: f64 = 8.0;

/// Filing opacity at full strength.
pub const FILING_OPACITY: f64 = 0.6;

/// Tilt applied by the perspective view, in degrees.
pub const PERSPECTIVE_TILT_DEG: f64 = 20.0;

/// Grid lines per axis in the perspective overlay.
pub const PERSPECTIVE_GRID_LINES: usize = 10;

/// Delay between answering a question and moving on.
pub const ANSWER_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Delay between the last answer's advance and returning to the guide.
pub const QUIZ_FINISH_DELAY: Duration = Duration::from_millis(2000);

/// Period of the right-hand illustration animation.
pub const HAND_ANIMATION_PERIOD: Duration = Duration::from_millis(2000);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (question bank, tab name).
    pub const ERROR_CONFIG: i32 = 4;
}
