//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use oersted_core::field::Intensity;
use oersted_core::tabs::{ActiveView, Tab, TabContainer};

use crate::compass::render_compass;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState};
use crate::messages::TuiMessage;
use crate::pattern::render_pattern;
use crate::quiz::{option_letter, render_quiz};
use crate::styles::ColorTheme;

/// Maximum number of activity log entries kept.
pub const MAX_LOG_ENTRIES: usize = 500;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Mounted demo.
    tabs: TabContainer,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Activity log.
    pub logs: Vec<String>,
    /// Log panel scroll state.
    pub log_scroll: LogScrollState,
    /// Show logs toggle.
    pub show_logs: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app around a mounted tab container.
    #[must_use]
    pub fn new(tabs: TabContainer, rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            tabs,
            rx,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_logs: false,
            terminal_width: 80,
            terminal_height: 24,
            theme: ColorTheme::default(),
        }
    }

    /// The tab container driving the demos.
    #[must_use]
    pub fn tabs(&self) -> &TabContainer {
        &self.tabs
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Tick(dt) => self.tabs.advance(dt),
            TuiMessage::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Append an activity log entry, dropping the oldest past the cap.
    pub fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_ENTRIES {
            self.logs.remove(0);
            self.log_scroll.on_oldest_dropped();
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextTab => self.switch_tab(self.tabs.active().next()),
            KeyAction::PreviousTab => self.switch_tab(self.tabs.active().previous()),
            KeyAction::SelectTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    self.switch_tab(tab);
                }
            }
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::ScrollUp => self.log_scroll.scroll_up(),
            KeyAction::ScrollDown => self.log_scroll.scroll_down(self.logs.len()),
            KeyAction::None => {}
            demo_action => self.dispatch_to_view(demo_action),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tabs.active() {
            return;
        }
        self.tabs.select(tab);
        self.push_log(format!("[INFO] showing {}", tab.title()));
    }

    /// Route a demo action to the mounted view. Actions for other views are
    /// ignored.
    fn dispatch_to_view(&mut self, action: KeyAction) {
        let line = match (self.tabs.view_mut(), action) {
            (ActiveView::Oersted(demo), KeyAction::ToggleCurrent) => {
                demo.toggle();
                Some(if demo.is_on() {
                    format!("[INFO] current on, flowing {}", demo.direction().as_str())
                } else {
                    "[INFO] current off".to_string()
                })
            }
            (ActiveView::Oersted(demo), KeyAction::ReverseCurrent) => Some(if demo.reverse() {
                format!("[INFO] current reversed, flowing {}", demo.direction().as_str())
            } else {
                "[WARN] turn the current on before reversing it".to_string()
            }),
            (ActiveView::Field(field), KeyAction::NudgeIntensity(delta)) => {
                field.nudge(delta);
                Some(format!("[INFO] intensity {}%", field.intensity().percent()))
            }
            (ActiveView::Field(field), KeyAction::SetIntensity(value)) => {
                field.set_intensity(Intensity::clamped(value));
                Some(format!("[INFO] intensity {}%", field.intensity().percent()))
            }
            (ActiveView::Field(field), KeyAction::TogglePerspective) => {
                field.toggle_perspective();
                Some(format!(
                    "[INFO] perspective view {}",
                    if field.perspective() { "on" } else { "off" }
                ))
            }
            (ActiveView::RightHand(quiz), KeyAction::StartPractice) if !quiz.is_practicing() => {
                quiz.start_practice();
                Some("[INFO] practice started".to_string())
            }
            (ActiveView::RightHand(quiz), KeyAction::Answer(index)) => {
                quiz.select_option(index).map(|outcome| {
                    let verdict = if outcome.correct { "correct" } else { "wrong" };
                    format!(
                        "[INFO] answer {} is {verdict}, score {}",
                        option_letter(index),
                        outcome.score
                    )
                })
            }
            (ActiveView::RightHand(quiz), KeyAction::ReturnToGuide) if quiz.is_practicing() => {
                quiz.return_to_guide();
                Some("[INFO] back to the guide".to_string())
            }
            _ => None,
        };
        if let Some(line) = line {
            self.push_log(line);
        }
    }

    /// Feed elapsed time to the mounted demo.
    pub fn advance(&mut self, dt: Duration) {
        self.tabs.advance(dt);
    }

    /// Compute the layout.
    ///
    /// Returns (header, body, logs, footer) rects; `logs` is `None` when the
    /// log panel is hidden.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Option<Rect>, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        if !show_logs {
            return (outer[0], outer[1], None, outer[2]);
        }

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // demo
                Constraint::Percentage(35), // logs
            ])
            .split(outer[1]);

        (outer[0], main[0], Some(main[1]), outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, body_area, logs_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_logs);

        render_header(frame, header_area, self.tabs.active(), &self.theme);

        let practicing = match self.tabs.view() {
            ActiveView::Oersted(demo) => {
                render_compass(frame, body_area, demo, &self.theme);
                false
            }
            ActiveView::Field(field) => {
                render_pattern(frame, body_area, field, &self.theme);
                false
            }
            ActiveView::RightHand(quiz) => {
                render_quiz(frame, body_area, quiz, &self.theme);
                quiz.is_practicing()
            }
        };

        if let Some(area) = logs_area {
            render_logs(frame, area, &self.logs, &self.log_scroll, &self.theme);
        }

        render_footer(frame, footer_area, self.tabs.active(), practicing);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Each iteration renders, waits up to `frame_interval` for input,
    /// drains pending messages and feeds the real elapsed time to the demo.
    pub fn run(&mut self, frame_interval: Duration) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal, frame_interval);
        loop_outcome(result, Self::teardown_terminal(&mut terminal))
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        frame_interval: Duration,
    ) -> io::Result<()> {
        tracing::debug!(?frame_interval, tab = %self.tabs.active(), "event loop started");
        let mut last_frame = Instant::now();
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(frame_interval)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();

            let now = Instant::now();
            self.advance(now.duration_since(last_frame));
            last_frame = now;
        }
    }
}

/// Combine the event loop result with the teardown result. A loop error
/// wins; a teardown failure after a failed loop is only logged.
fn loop_outcome(result: io::Result<()>, teardown: io::Result<()>) -> io::Result<()> {
    match (result, teardown) {
        (Err(e), Err(teardown_err)) => {
            tracing::warn!(error = %teardown_err, "terminal teardown failed");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), teardown) => teardown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use oersted_core::questions::MatchPolicy;
    use oersted_core::tabs::DemoSettings;
    use ratatui::backend::TestBackend;

    #[test]
    fn loop_error_is_not_hidden_by_teardown() {
        let loop_err = io::Error::other("draw failed");
        let teardown_err = io::Error::other("restore failed");
        let err = loop_outcome(Err(loop_err), Err(teardown_err)).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");

        let teardown_err = io::Error::other("restore failed");
        let err = loop_outcome(Ok(()), Err(teardown_err)).unwrap_err();
        assert_eq!(err.to_string(), "restore failed");
        assert!(loop_outcome(Ok(()), Ok(())).is_ok());
    }

    fn make_app(tab: Tab) -> (TuiApp, crossbeam_channel::Sender<TuiMessage>) {
        let (tx, rx) = unbounded();
        let mut settings = DemoSettings::new(MatchPolicy::Substring).unwrap();
        settings.seed = Some(42);
        let app = TuiApp::new(TabContainer::new(settings, tab), rx);
        (app, tx)
    }

    fn screen(app: &TuiApp) -> String {
        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();
        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn initial_state() {
        let (app, _tx) = make_app(Tab::Oersted);
        assert!(!app.should_quit);
        assert!(app.logs.is_empty());
        assert!(!app.show_logs);
        assert_eq!(app.tabs().active(), Tab::Oersted);
    }

    #[test]
    fn handle_quit() {
        let (mut app, tx) = make_app(Tab::Oersted);
        tx.send(TuiMessage::Quit).unwrap();
        app.update();
        assert!(app.should_quit);
    }

    #[test]
    fn key_action_quit() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn handle_resize() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn tick_messages_drive_the_needle() {
        let (mut app, tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::ToggleCurrent);
        tx.send(TuiMessage::Tick(Duration::from_secs(2))).unwrap();
        app.update();
        let ActiveView::Oersted(demo) = app.tabs().view() else {
            panic!("compass demo should be mounted");
        };
        assert!((demo.needle().angle - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tabs_cycle_and_select() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::NextTab);
        assert_eq!(app.tabs().active(), Tab::Field);
        app.handle_key_action(KeyAction::PreviousTab);
        app.handle_key_action(KeyAction::PreviousTab);
        assert_eq!(app.tabs().active(), Tab::RightHand);
        app.handle_key_action(KeyAction::SelectTab(0));
        assert_eq!(app.tabs().active(), Tab::Oersted);
        app.handle_key_action(KeyAction::SelectTab(9));
        assert_eq!(app.tabs().active(), Tab::Oersted);
        assert_eq!(app.logs.len(), 4);
    }

    #[test]
    fn reverse_while_off_logs_a_warning() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::ReverseCurrent);
        assert!(app.logs[0].starts_with("[WARN]"));
    }

    #[test]
    fn actions_for_other_views_are_ignored() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::NudgeIntensity(10));
        app.handle_key_action(KeyAction::Answer(1));
        assert!(app.logs.is_empty());
    }

    #[test]
    fn intensity_keys_move_the_slider() {
        let (mut app, _tx) = make_app(Tab::Field);
        app.handle_key_action(KeyAction::NudgeIntensity(10));
        app.handle_key_action(KeyAction::NudgeIntensity(-1));
        let ActiveView::Field(field) = app.tabs().view() else {
            panic!("field view should be mounted");
        };
        assert_eq!(field.intensity().percent(), 59);

        app.handle_key_action(KeyAction::SetIntensity(100));
        app.handle_key_action(KeyAction::NudgeIntensity(10));
        let ActiveView::Field(field) = app.tabs().view() else {
            panic!("field view should be mounted");
        };
        assert_eq!(field.intensity(), Intensity::MAX);
    }

    #[test]
    fn quiz_keys_answer_questions() {
        let (mut app, _tx) = make_app(Tab::RightHand);
        app.handle_key_action(KeyAction::Answer(1));
        assert!(app.logs.is_empty());

        app.handle_key_action(KeyAction::StartPractice);
        app.handle_key_action(KeyAction::Answer(1));
        assert_eq!(
            app.logs.last().map(String::as_str),
            Some("[INFO] answer b is correct, score 1")
        );

        app.handle_key_action(KeyAction::ReturnToGuide);
        let ActiveView::RightHand(quiz) = app.tabs().view() else {
            panic!("quiz should be mounted");
        };
        assert!(!quiz.is_practicing());
    }

    #[test]
    fn key_action_toggle_logs() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(app.show_logs);
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(!app.show_logs);
    }

    #[test]
    fn scroll_up_down() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        for i in 0..20 {
            app.handle_message(TuiMessage::Log(format!("log {i}")));
        }
        assert!(app.log_scroll.auto_scroll);

        app.handle_key_action(KeyAction::ScrollUp);
        assert!(!app.log_scroll.auto_scroll);

        for _ in 0..30 {
            app.handle_key_action(KeyAction::ScrollDown);
        }
        assert!(app.log_scroll.auto_scroll);
    }

    #[test]
    fn log_cap_at_500() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        for i in 0..510 {
            app.handle_message(TuiMessage::Log(format!("msg {i}")));
        }
        assert_eq!(app.logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(app.logs[0], "msg 10");
        assert_eq!(app.log_scroll.offset, MAX_LOG_ENTRIES - 1);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, logs, footer) = TuiApp::compute_layout(area, false);
        assert_eq!(header.y, 0);
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 2);
        assert_eq!(footer.y + footer.height, area.height);
        assert!(logs.is_none());
        assert_eq!(header.height + body.height + footer.height, area.height);

        let (_, body, logs, _) = TuiApp::compute_layout(area, true);
        let logs = logs.unwrap();
        assert_eq!(body.width + logs.width, area.width);
    }

    #[test]
    fn renders_every_tab() {
        let (mut app, _tx) = make_app(Tab::Oersted);
        assert!(screen(&app).contains("Current: OFF"));
        app.handle_key_action(KeyAction::NextTab);
        assert!(screen(&app).contains("Current Intensity"));
        app.handle_key_action(KeyAction::NextTab);
        assert!(screen(&app).contains("Remember"));
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(screen(&app).contains("Logs"));
    }
}
