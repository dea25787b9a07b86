//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use oersted_core::field::Intensity;
use oersted_core::questions::MatchPolicy;
use oersted_core::tabs::{DemoSettings, Tab};
use oersted_core::OerstedError;

/// Frame interval used when `--frame-interval` cannot be parsed.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Shortest frame interval the event loop accepts.
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// How quiz answers are compared with the expected keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchArg {
    /// Case-insensitive substring match.
    Substring,
    /// The keyword must appear as a whole word.
    WholeWord,
}

impl From<MatchArg> for MatchPolicy {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Substring => Self::Substring,
            MatchArg::WholeWord => Self::WholeWord,
        }
    }
}

/// Oersted's experiment: interactive electromagnetism demos in the terminal.
#[derive(Parser, Debug)]
#[command(name = "oersted", version)]
pub struct AppConfig {
    /// Demo shown at startup: oersted, field or right-hand.
    #[arg(long, default_value = "oersted", env = "OERSTED_TAB")]
    pub tab: String,

    /// Initial current intensity in percent, clamped to 0..=100.
    #[arg(
        long,
        default_value_t = 50,
        env = "OERSTED_INTENSITY",
        allow_negative_numbers = true
    )]
    pub intensity: i64,

    /// Seed for the iron filing scatter.
    #[arg(long, env = "OERSTED_SEED")]
    pub seed: Option<u64>,

    /// Answer matching policy for the quiz.
    #[arg(long, value_enum, default_value_t = MatchArg::Substring)]
    pub answer_match: MatchArg,

    /// Time between frames (e.g., "16ms", "1s").
    #[arg(long, default_value = "16ms")]
    pub frame_interval: String,

    /// Print the field snapshot for --intensity and --seed, then exit.
    #[arg(long)]
    pub dump_field: bool,

    /// Print the question bank, then exit.
    #[arg(long)]
    pub list_questions: bool,

    /// Machine-readable output for --dump-field and --list-questions.
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether this run opens the interactive TUI.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.completion.is_none() && !self.dump_field && !self.list_questions
    }

    /// Tab selected with `--tab`.
    pub fn initial_tab(&self) -> Result<Tab, OerstedError> {
        self.tab.parse()
    }

    /// Clamped initial intensity.
    #[must_use]
    pub fn initial_intensity(&self) -> Intensity {
        Intensity::clamped(self.intensity)
    }

    /// Settings every demo view is mounted with.
    pub fn settings(&self) -> Result<DemoSettings, OerstedError> {
        let mut settings = DemoSettings::new(self.answer_match.into())?;
        settings.initial_intensity = self.initial_intensity();
        settings.seed = self.seed;
        Ok(settings)
    }

    /// Parse the frame interval, falling back to the default.
    #[must_use]
    pub fn frame_interval_duration(&self) -> Duration {
        parse_duration(&self.frame_interval).map_or(DEFAULT_FRAME_INTERVAL, |d| {
            d.max(MIN_FRAME_INTERVAL)
        })
    }
}

/// Parse a duration string like "16ms", "30s", "5m", "1h".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_millis(n))
    }
}
