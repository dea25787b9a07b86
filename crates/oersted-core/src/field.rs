//! Magnetic field pattern around a straight wire seen end-on.
//!
//! Rings are a pure function of intensity. Filings are drawn from an
//! injected random source and are redrawn on every intensity change, so two
//! snapshots at equal intensity differ unless the generator is seeded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::constants::{
    DEFAULT_INTENSITY, EXTRA_RINGS, FILING_DISTANCE_SPAN, FILING_LENGTH_SPAN, FILING_MIN_DISTANCE,
    FILING_MIN_LENGTH, FILING_OPACITY, MAX_FILINGS, MAX_INTENSITY, MIN_RINGS, PERSPECTIVE_TILT_DEG,
    RING_BASE_RADIUS, RING_MIN_OPACITY, RING_OPACITY_FALLOFF, RING_SPAN,
};

/// Current intensity as a whole percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    /// Zero current.
    pub const MIN: Self = Self(0);
    /// Full current.
    pub const MAX: Self = Self(MAX_INTENSITY);

    /// Clamp any integer into range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_INTENSITY)) as u8)
    }

    /// Percentage value.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Normalized field strength in `[0, 1]`.
    #[must_use]
    pub fn strength(self) -> f64 {
        f64::from(self.0) / f64::from(MAX_INTENSITY)
    }

    /// Shift by a signed step, clamping at the ends.
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        Self::clamped(i64::from(self.0) + delta)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

/// One concentric field line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    pub radius: f64,
    pub opacity: f64,
}

/// One iron filing, positioned relative to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Filing {
    pub x: f64,
    pub y: f64,
    /// Orientation in degrees, perpendicular to the radial angle.
    pub rotation: f64,
    pub length: f64,
    /// Radial angle in degrees, in `[0, 360)`.
    pub angle: f64,
}

impl Filing {
    /// Distance from the wire.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Segment endpoints, centred on the filing position.
    #[must_use]
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let half = self.length / 2.0;
        (
            (self.x - cos * half, self.y - sin * half),
            (self.x + cos * half, self.y + sin * half),
        )
    }
}

/// Render-time projection of an intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub intensity: Intensity,
    pub rings: Vec<Ring>,
    pub filings: Vec<Filing>,
}

impl FieldSnapshot {
    /// Build a snapshot, drawing filings from `rng`.
    pub fn generate<R: Rng + ?Sized>(intensity: Intensity, rng: &mut R) -> Self {
        Self {
            intensity,
            rings: field_rings(intensity),
            filings: sample_filings(intensity, rng),
        }
    }

    /// Opacity applied to every filing.
    #[must_use]
    pub fn filing_opacity(&self) -> f64 {
        FILING_OPACITY * self.intensity.strength()
    }

    /// Glow around the wire as `(diameter, opacity)`; absent at zero intensity.
    #[must_use]
    pub fn glow(&self) -> Option<(f64, f64)> {
        let s = self.intensity.strength();
        (self.intensity > Intensity::MIN).then(|| (100.0 + 200.0 * s, 0.1 * s))
    }

    /// Rings that carry direction arrows (every other ring).
    pub fn arrowed_rings(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter().step_by(2)
    }
}

/// `ceil(5 + s * 8)` computed exactly for whole-percent intensities.
#[must_use]
pub fn ring_count(intensity: Intensity) -> usize {
    let extra = EXTRA_RINGS * usize::from(intensity.percent());
    let max = usize::from(MAX_INTENSITY);
    MIN_RINGS + extra.div_ceil(max)
}

/// `ceil(s * 100)` computed exactly for whole-percent intensities.
#[must_use]
pub fn filing_count(intensity: Intensity) -> usize {
    (MAX_FILINGS * usize::from(intensity.percent())).div_ceil(usize::from(MAX_INTENSITY))
}

/// Concentric rings, innermost first.
#[must_use]
pub fn field_rings(intensity: Intensity) -> Vec<Ring> {
    let count = ring_count(intensity);
    let strength = intensity.strength();
    (0..count)
        .map(|i| {
            let fraction = i as f64 / count as f64;
            Ring {
                radius: RING_BASE_RADIUS + i as f64 * RING_SPAN / count as f64,
                opacity: (1.0 - fraction * RING_OPACITY_FALLOFF).max(RING_MIN_OPACITY) * strength,
            }
        })
        .collect()
}

/// Scatter filings around the wire, each aligned with the local field.
pub fn sample_filings<R: Rng + ?Sized>(intensity: Intensity, rng: &mut R) -> Vec<Filing> {
    (0..filing_count(intensity))
        .map(|_| {
            let angle = rng.gen_range(0.0..360.0);
            let distance = FILING_MIN_DISTANCE + rng.gen_range(0.0..FILING_DISTANCE_SPAN);
            let length = FILING_MIN_LENGTH + rng.gen_range(0.0..FILING_LENGTH_SPAN);
            let (sin, cos) = f64::to_radians(angle).sin_cos();
            Filing {
                x: cos * distance,
                y: sin * distance,
                rotation: angle + 90.0,
                length,
                angle,
            }
        })
        .collect()
}

/// Field visualizer state: intensity input, perspective toggle and the
/// snapshot derived from them.
#[derive(Debug, Clone)]
pub struct FieldPatternRenderer<R = StdRng> {
    rng: R,
    perspective: bool,
    snapshot: FieldSnapshot,
}

impl FieldPatternRenderer<StdRng> {
    /// Renderer with a reproducible generator.
    #[must_use]
    pub fn seeded(intensity: Intensity, seed: u64) -> Self {
        Self::new(intensity, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FieldPatternRenderer<R> {
    /// Renderer drawing filings from `rng`.
    pub fn new(intensity: Intensity, mut rng: R) -> Self {
        let snapshot = FieldSnapshot::generate(intensity, &mut rng);
        Self {
            rng,
            perspective: false,
            snapshot,
        }
    }

    /// Current intensity.
    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.snapshot.intensity
    }

    /// Latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &FieldSnapshot {
        &self.snapshot
    }

    /// Set the intensity and recompute. Filings are redrawn even when the
    /// value did not change.
    pub fn set_intensity(&mut self, intensity: Intensity) {
        tracing::debug!(intensity = intensity.percent(), "field regenerated");
        self.snapshot = FieldSnapshot::generate(intensity, &mut self.rng);
    }

    /// Move the slider by a signed step.
    pub fn nudge(&mut self, delta: i64) {
        self.set_intensity(self.intensity().offset(delta));
    }

    /// Whether the perspective view is on.
    #[must_use]
    pub fn perspective(&self) -> bool {
        self.perspective
    }

    /// Flip the perspective view. Has no effect on the snapshot.
    pub fn toggle_perspective(&mut self) {
        self.perspective = !self.perspective;
    }

    /// Vertical scale applied by the current view.
    #[must_use]
    pub fn vertical_scale(&self) -> f64 {
        if self.perspective {
            PERSPECTIVE_TILT_DEG.to_radians().cos()
        } else {
            1.0
        }
    }

    /// Caption under the wire.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Current: {}%", self.intensity().percent())
    }
}
