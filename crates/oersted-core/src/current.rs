//! Oersted's experiment: a switchable current deflecting a compass needle.
//!
//! The demo is a two-state machine (`Off`, `On(direction)`) with two
//! animation concerns. The needle timer eases the needle toward its
//! target (or back to rest); the flow timer walks the charge-flow markers
//! along the wire while current flows. Every state change re-arms both
//! slots, so at most one timer per concern is ever alive.

use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    APPROACH_RATE, APPROACH_SNAP_DEG, COMPASS_FIELD_RINGS, COMPASS_RING_BASE, COMPASS_RING_STEP,
    DECAY_FACTOR, DECAY_SNAP_DEG, FLOW_MARKERS, FLOW_MARKER_SPACING, FLOW_PERIOD, FLOW_STEP,
    FLOW_TICK, NEEDLE_TICK, TARGET_DEFLECTION_DEG,
};
use crate::timer::{Interval, TimerSlot};

/// Conventional current direction along the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentDirection {
    Left,
    Right,
}

impl CurrentDirection {
    /// `+1.0` for right, `-1.0` for left.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }

    /// Display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Observable state of the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentState {
    Off,
    On(CurrentDirection),
}

/// Animated quantities of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NeedleState {
    /// Needle rotation from rest, in degrees.
    pub angle: f64,
    /// Position of the flow markers, in `[0, 400)`.
    pub flow_offset: f64,
}

/// Compass and wire demo.
#[derive(Debug, Clone)]
pub struct CurrentFieldDemo {
    on: bool,
    direction: CurrentDirection,
    needle: NeedleState,
    needle_timer: TimerSlot<Interval>,
    flow_timer: TimerSlot<Interval>,
}

impl CurrentFieldDemo {
    /// Create the demo with the current off, needle at rest and the
    /// direction preset to right.
    #[must_use]
    pub fn new() -> Self {
        let mut demo = Self {
            on: false,
            direction: CurrentDirection::Right,
            needle: NeedleState::default(),
            needle_timer: TimerSlot::new(),
            flow_timer: TimerSlot::new(),
        };
        demo.restart_timers();
        demo
    }

    /// Start from an arbitrary needle state, current off.
    #[must_use]
    pub fn with_needle(needle: NeedleState) -> Self {
        let mut demo = Self::new();
        demo.needle = needle;
        demo.restart_timers();
        demo
    }

    /// Current state of the circuit.
    #[must_use]
    pub fn state(&self) -> CurrentState {
        if self.on {
            CurrentState::On(self.direction)
        } else {
            CurrentState::Off
        }
    }

    /// Whether current is flowing.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Direction used while on (remembered while off).
    #[must_use]
    pub fn direction(&self) -> CurrentDirection {
        self.direction
    }

    /// Animated state.
    #[must_use]
    pub fn needle(&self) -> NeedleState {
        self.needle
    }

    /// Angle the needle is heading for in the current state.
    #[must_use]
    pub fn target_angle(&self) -> f64 {
        if self.on {
            TARGET_DEFLECTION_DEG * self.direction.sign()
        } else {
            0.0
        }
    }

    /// Flip the switch.
    pub fn toggle(&mut self) {
        self.set_current(!self.on);
    }

    /// Switch current on or off. Setting the state it is already in does
    /// not restart the animation.
    pub fn set_current(&mut self, on: bool) {
        if self.on == on {
            return;
        }
        self.on = on;
        tracing::debug!(on, direction = self.direction.as_str(), "current switched");
        self.restart_timers();
    }

    /// Reverse the current. Only valid while on; returns `false` (and
    /// changes nothing) when off.
    pub fn reverse(&mut self) -> bool {
        if !self.on {
            tracing::warn!("reverse ignored while current is off");
            return false;
        }
        self.direction = self.direction.reversed();
        tracing::debug!(direction = self.direction.as_str(), "current reversed");
        self.restart_timers();
        true
    }

    /// Cancel both timers, then arm the pair belonging to the current state.
    fn restart_timers(&mut self) {
        self.needle_timer.cancel();
        self.flow_timer.cancel();
        if !self.is_settled() {
            self.needle_timer.arm(Interval::new(NEEDLE_TICK));
        }
        if self.on {
            self.flow_timer.arm(Interval::new(FLOW_TICK));
        }
    }

    /// Whether the needle rests on the value its state pulls it toward.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_settled(&self) -> bool {
        self.needle.angle == self.target_angle()
    }

    /// Feed elapsed time to the running timers.
    pub fn advance(&mut self, dt: Duration) {
        for _ in 0..self.needle_timer.advance(dt) {
            self.needle_tick();
            if self.is_settled() {
                self.needle_timer.cancel();
                break;
            }
        }
        for _ in 0..self.flow_timer.advance(dt) {
            self.flow_tick();
        }
    }

    fn needle_tick(&mut self) {
        let angle = self.needle.angle;
        self.needle.angle = if self.on {
            approach(angle, self.target_angle())
        } else {
            decay(angle)
        };
    }

    fn flow_tick(&mut self) {
        let step = FLOW_STEP * self.direction.sign();
        self.needle.flow_offset = (self.needle.flow_offset + step + FLOW_PERIOD) % FLOW_PERIOD;
    }

    /// Live timer count per concern: `(needle, flow)`.
    #[must_use]
    pub fn active_timers(&self) -> (usize, usize) {
        (
            self.needle_timer.active_count(),
            self.flow_timer.active_count(),
        )
    }

    /// Marker positions along the wire as percentages, empty while off.
    #[must_use]
    pub fn flow_markers(&self) -> Vec<f64> {
        if !self.on {
            return Vec::new();
        }
        (0..FLOW_MARKERS)
            .map(|i| {
                let offset = self.needle.flow_offset + i as f64 * FLOW_MARKER_SPACING;
                (offset % FLOW_PERIOD) / (FLOW_PERIOD / 100.0)
            })
            .collect()
    }

    /// Deflection readout, shown while on and visibly deflected.
    #[must_use]
    pub fn deflection_label(&self) -> Option<String> {
        let magnitude = self.needle.angle.abs();
        (self.on && magnitude > APPROACH_SNAP_DEG).then(|| format!("{magnitude:.1}°"))
    }

    /// Diameters of the field rings drawn around the compass, empty while off.
    #[must_use]
    pub fn field_ring_diameters(&self) -> Vec<f64> {
        if !self.on {
            return Vec::new();
        }
        (0..COMPASS_FIELD_RINGS)
            .map(|i| COMPASS_RING_BASE + i as f64 * COMPASS_RING_STEP)
            .collect()
    }
}

impl Default for CurrentFieldDemo {
    fn default() -> Self {
        Self::new()
    }
}

/// One approach step: cover 10% of the remaining delta, snapping when close.
#[must_use]
pub fn approach(angle: f64, target: f64) -> f64 {
    let diff = target - angle;
    if diff.abs() < APPROACH_SNAP_DEG {
        target
    } else {
        angle + diff * APPROACH_RATE
    }
}

/// One decay step toward rest, snapping to zero when small.
#[must_use]
pub fn decay(angle: f64) -> f64 {
    if angle.abs() < DECAY_SNAP_DEG {
        0.0
    } else {
        angle * DECAY_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = NEEDLE_TICK;

    fn run(demo: &mut CurrentFieldDemo, ms: u64) {
        for _ in 0..ms {
            demo.advance(Duration::from_millis(1));
        }
    }

    #[test]
    fn starts_off_and_at_rest() {
        let demo = CurrentFieldDemo::new();
        assert_eq!(demo.state(), CurrentState::Off);
        assert_eq!(demo.direction(), CurrentDirection::Right);
        assert_eq!(demo.needle(), NeedleState::default());
        assert_eq!(demo.active_timers(), (0, 0));
    }

    #[test]
    fn approach_step_covers_ten_percent() {
        assert!((approach(0.0, 30.0) - 3.0).abs() < 1e-12);
        assert!((approach(29.5, 30.0) - 30.0).abs() < f64::EPSILON);
        assert!((approach(0.0, -30.0) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn decay_step_snaps_to_zero() {
        assert!((decay(30.0) - 27.0).abs() < 1e-12);
        assert!(decay(0.49).abs() < f64::EPSILON);
        assert!(decay(-0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn needle_converges_to_target_when_on() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        assert_eq!(demo.state(), CurrentState::On(CurrentDirection::Right));
        demo.advance(TICK * 200);
        assert!((demo.needle().angle - 30.0).abs() < f64::EPSILON);
        assert!(demo.is_settled());
    }

    #[test]
    fn needle_decays_to_exact_zero_when_off() {
        let mut demo = CurrentFieldDemo::with_needle(NeedleState {
            angle: 30.0,
            flow_offset: 0.0,
        });
        assert_eq!(demo.active_timers(), (1, 0));
        demo.advance(TICK * 200);
        assert!(demo.needle().angle.abs() < f64::EPSILON);
        assert_eq!(demo.active_timers(), (0, 0));
    }

    #[test]
    fn needle_timer_stops_once_settled() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        demo.advance(TICK * 200);
        assert_eq!(demo.active_timers(), (0, 1));
    }

    #[test]
    fn flow_advances_and_wraps() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        demo.advance(FLOW_TICK * 3);
        assert!((demo.needle().flow_offset - 6.0).abs() < f64::EPSILON);
        demo.advance(FLOW_TICK * 197);
        assert!(demo.needle().flow_offset.abs() < f64::EPSILON);
    }

    #[test]
    fn leftward_flow_wraps_below_zero() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        assert!(demo.reverse());
        demo.advance(FLOW_TICK);
        assert!((demo.needle().flow_offset - 398.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flow_freezes_when_switched_off() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        demo.advance(FLOW_TICK * 5);
        demo.toggle();
        let frozen = demo.needle().flow_offset;
        demo.advance(FLOW_TICK * 5);
        assert!((demo.needle().flow_offset - frozen).abs() < f64::EPSILON);
        assert_eq!(demo.active_timers().1, 0);
    }

    #[test]
    fn reverse_is_noop_while_off() {
        let mut demo = CurrentFieldDemo::new();
        assert!(!demo.reverse());
        assert_eq!(demo.direction(), CurrentDirection::Right);
        assert_eq!(demo.state(), CurrentState::Off);
    }

    #[test]
    fn reverse_flips_target_and_flow_sign() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        assert!((demo.target_angle() - 30.0).abs() < f64::EPSILON);
        assert!(demo.reverse());
        assert!((demo.target_angle() + 30.0).abs() < f64::EPSILON);
        demo.advance(TICK * 300);
        assert!((demo.needle().angle + 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn direction_survives_switching_off() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        demo.reverse();
        demo.toggle();
        demo.toggle();
        assert_eq!(demo.state(), CurrentState::On(CurrentDirection::Left));
    }

    #[test]
    fn rapid_toggling_never_stacks_timers() {
        let mut demo = CurrentFieldDemo::new();
        for i in 0..50 {
            demo.toggle();
            if i % 3 == 0 {
                demo.reverse();
            }
            run(&mut demo, 7);
            let (needle, flow) = demo.active_timers();
            assert!(needle <= 1 && flow <= 1);
        }
    }

    #[test]
    fn set_current_same_state_keeps_timers() {
        let mut demo = CurrentFieldDemo::new();
        demo.set_current(true);
        demo.advance(Duration::from_millis(10));
        let before = demo.needle();
        demo.set_current(true);
        demo.advance(Duration::from_millis(6));
        // the 16ms needle period completed across both calls
        assert!(demo.needle().angle > before.angle);
    }

    #[test]
    fn markers_only_while_on() {
        let mut demo = CurrentFieldDemo::new();
        assert!(demo.flow_markers().is_empty());
        demo.toggle();
        let markers = demo.flow_markers();
        assert_eq!(markers.len(), 5);
        assert_eq!(markers, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn deflection_label_hidden_near_rest() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        assert_eq!(demo.deflection_label(), None);
        demo.advance(TICK * 200);
        assert_eq!(demo.deflection_label().as_deref(), Some("30.0°"));
    }

    #[test]
    fn field_rings_while_on() {
        let mut demo = CurrentFieldDemo::new();
        assert!(demo.field_ring_diameters().is_empty());
        demo.toggle();
        assert_eq!(demo.field_ring_diameters(), vec![150.0, 230.0, 310.0]);
    }
}
