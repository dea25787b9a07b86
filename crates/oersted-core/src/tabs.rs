//! Tab container mounting exactly one demo at a time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::current::CurrentFieldDemo;
use crate::error::OerstedError;
use crate::field::{FieldPatternRenderer, Intensity};
use crate::questions::{MatchPolicy, QuestionBank};
use crate::quiz::RuleQuiz;

/// The three demos, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Oersted,
    Field,
    RightHand,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Oersted, Tab::Field, Tab::RightHand];

    /// Title shown in the tab bar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Oersted => "Oersted's Experiment",
            Self::Field => "Magnetic Field Visualizer",
            Self::RightHand => "Right-Hand Rule",
        }
    }

    /// Position in the tab bar.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Oersted => 0,
            Self::Field => 1,
            Self::RightHand => 2,
        }
    }

    /// Tab at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following tab, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Oersted => "oersted",
            Self::Field => "field",
            Self::RightHand => "right-hand",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tab {
    type Err = OerstedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == wanted)
            .ok_or_else(|| OerstedError::InvalidTab(s.to_string()))
    }
}

/// Settings each view is mounted with.
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub initial_intensity: Intensity,
    pub seed: Option<u64>,
    pub policy: MatchPolicy,
    pub bank: QuestionBank,
}

impl DemoSettings {
    /// Defaults over the built-in question bank.
    pub fn new(policy: MatchPolicy) -> Result<Self, OerstedError> {
        Ok(Self {
            initial_intensity: Intensity::default(),
            seed: None,
            policy,
            bank: QuestionBank::builtin(policy)?,
        })
    }
}

/// The mounted demo.
#[derive(Debug, Clone)]
pub enum ActiveView {
    Oersted(CurrentFieldDemo),
    Field(FieldPatternRenderer),
    RightHand(RuleQuiz),
}

impl ActiveView {
    #[must_use]
    pub fn tab(&self) -> Tab {
        match self {
            Self::Oersted(_) => Tab::Oersted,
            Self::Field(_) => Tab::Field,
            Self::RightHand(_) => Tab::RightHand,
        }
    }
}

/// Owner of the mounted view.
///
/// Switching tabs drops the old view (and every timer it owned) and mounts
/// a fresh one, so no state survives a round trip through another tab.
#[derive(Debug, Clone)]
pub struct TabContainer {
    settings: DemoSettings,
    rng: StdRng,
    view: ActiveView,
}

impl TabContainer {
    /// Mount `initial` with `settings`.
    #[must_use]
    pub fn new(settings: DemoSettings, initial: Tab) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let view = mount(&settings, &mut rng, initial);
        Self {
            settings,
            rng,
            view,
        }
    }

    #[must_use]
    pub fn active(&self) -> Tab {
        self.view.tab()
    }

    #[must_use]
    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ActiveView {
        &mut self.view
    }

    #[must_use]
    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// Show `tab`. Selecting the active tab keeps its state.
    pub fn select(&mut self, tab: Tab) {
        if tab == self.active() {
            return;
        }
        tracing::debug!(from = %self.active(), to = %tab, "tab switched");
        self.view = mount(&self.settings, &mut self.rng, tab);
    }

    pub fn next(&mut self) {
        self.select(self.active().next());
    }

    pub fn previous(&mut self) {
        self.select(self.active().previous());
    }

    /// Feed elapsed time to the mounted view.
    pub fn advance(&mut self, dt: Duration) {
        match &mut self.view {
            ActiveView::Oersted(demo) => demo.advance(dt),
            ActiveView::Field(_) => {}
            ActiveView::RightHand(quiz) => quiz.advance(dt),
        }
    }
}

fn mount(settings: &DemoSettings, rng: &mut StdRng, tab: Tab) -> ActiveView {
    match tab {
        Tab::Oersted => ActiveView::Oersted(CurrentFieldDemo::new()),
        Tab::Field => ActiveView::Field(FieldPatternRenderer::new(
            settings.initial_intensity,
            StdRng::seed_from_u64(rng.gen()),
        )),
        Tab::RightHand => {
            ActiveView::RightHand(RuleQuiz::new(settings.bank.clone(), settings.policy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(tab: Tab) -> TabContainer {
        let mut settings = DemoSettings::new(MatchPolicy::Substring).unwrap();
        settings.seed = Some(11);
        TabContainer::new(settings, tab)
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(Tab::RightHand.next(), Tab::Oersted);
        assert_eq!(Tab::Oersted.previous(), Tab::RightHand);
        assert_eq!(Tab::from_index(1), Some(Tab::Field));
        assert_eq!(Tab::from_index(3), None);
    }

    #[test]
    fn tab_names_parse() {
        assert_eq!("right-hand".parse::<Tab>(), Ok(Tab::RightHand));
        assert_eq!(" Field ".parse::<Tab>(), Ok(Tab::Field));
        assert_eq!(
            "compass".parse::<Tab>(),
            Err(OerstedError::InvalidTab("compass".into()))
        );
        assert_eq!(Tab::RightHand.to_string(), "right-hand");
    }

    #[test]
    fn exactly_one_view_mounted() {
        let mut tabs = container(Tab::Oersted);
        assert_eq!(tabs.active(), Tab::Oersted);
        tabs.next();
        assert!(matches!(tabs.view(), ActiveView::Field(_)));
        tabs.select(Tab::RightHand);
        assert!(matches!(tabs.view(), ActiveView::RightHand(_)));
    }

    #[test]
    fn switching_away_resets_state() {
        let mut tabs = container(Tab::Oersted);
        if let ActiveView::Oersted(demo) = tabs.view_mut() {
            demo.toggle();
        }
        tabs.advance(Duration::from_secs(1));
        tabs.next();
        tabs.previous();
        let ActiveView::Oersted(demo) = tabs.view() else {
            panic!("expected the compass demo");
        };
        assert!(!demo.is_on());
        assert!(demo.needle().angle.abs() < f64::EPSILON);
    }

    #[test]
    fn reselecting_active_tab_keeps_state() {
        let mut tabs = container(Tab::RightHand);
        if let ActiveView::RightHand(quiz) = tabs.view_mut() {
            quiz.start_practice();
        }
        tabs.select(Tab::RightHand);
        let ActiveView::RightHand(quiz) = tabs.view() else {
            panic!("expected the quiz");
        };
        assert!(quiz.is_practicing());
    }

    #[test]
    fn field_mounts_with_configured_intensity() {
        let mut settings = DemoSettings::new(MatchPolicy::Substring).unwrap();
        settings.initial_intensity = Intensity::clamped(100);
        let tabs = TabContainer::new(settings, Tab::Field);
        let ActiveView::Field(field) = tabs.view() else {
            panic!("expected the field view");
        };
        assert_eq!(field.snapshot().filings.len(), 100);
    }

    #[test]
    fn seeded_containers_mount_identical_fields() {
        let a = container(Tab::Field);
        let b = container(Tab::Field);
        match (a.view(), b.view()) {
            (ActiveView::Field(x), ActiveView::Field(y)) => assert_eq!(x.snapshot(), y.snapshot()),
            _ => panic!("expected field views"),
        }
    }
}
