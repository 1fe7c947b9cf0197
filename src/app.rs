//! Presentation driver: screen state, option cursor, and the wall-clock
//! scheduling that feeds the session its one-second ticks and reveal-delay
//! advances. All session mutation goes through the session's own transition
//! methods; this type only forwards input and reacts to the events those
//! transitions emit.

use std::time::{Duration, Instant};

use crate::config::QuizConfig;
use crate::models::{OptionKey, QuestionBank};
use crate::session::{select_plan, EmptyBankError, Phase, QuizSession, SessionEvent};

const NUM_OPTIONS: usize = 4;

/// Countdown cadence.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the answer outcome stays on screen before the next question.
const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Result,
}

/// Outcome of the current question, kept while the reveal is on screen so
/// the quiz view can highlight the chosen and correct options.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub chosen: OptionKey,
    pub correct_option: OptionKey,
    pub correct: bool,
}

pub struct App {
    pub screen: Screen,
    bank: QuestionBank,
    config: QuizConfig,
    session: Option<QuizSession>,
    selected_option: usize,
    reveal: Option<Reveal>,
    reveal_since: Option<Instant>,
    last_tick: Instant,
    result_scroll: usize,
}

impl App {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        Self {
            screen: Screen::Welcome,
            bank,
            config,
            session: None,
            selected_option: 0,
            reveal: None,
            reveal_since: None,
            last_tick: Instant::now(),
            result_scroll: 0,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Draw a fresh plan and begin a session. A plan of size zero (possible
    /// with `--count 0`) finishes immediately and lands on the result
    /// screen.
    pub fn start_session(&mut self, now: Instant) -> Result<(), EmptyBankError> {
        let plan = select_plan(&self.bank, self.config.session_size)?;
        if let Some(session) = self.session.as_mut() {
            session.reset(plan);
        } else {
            self.session = Some(QuizSession::new(plan, self.config.time_limit));
        }

        let finished = self
            .session
            .as_ref()
            .is_some_and(|s| s.phase() == Phase::Finished);
        self.screen = if finished { Screen::Result } else { Screen::Quiz };
        self.selected_option = 0;
        self.reveal = None;
        self.reveal_since = None;
        self.last_tick = now;
        self.result_scroll = 0;
        Ok(())
    }

    /// Back to the welcome screen, discarding the finished session.
    pub fn restart(&mut self) {
        self.screen = Screen::Welcome;
        self.session = None;
        self.reveal = None;
        self.reveal_since = None;
    }

    pub fn select_next_option(&mut self) {
        if self.options_locked() {
            return;
        }
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        if self.options_locked() {
            return;
        }
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    /// Submit the option under the cursor. The session's phase guard makes
    /// this a no-op during the reveal, so stray late presses cannot score.
    pub fn submit_answer(&mut self, now: Instant) {
        let Some(chosen) = OptionKey::from_index(self.selected_option) else {
            return;
        };
        let events = match self.session.as_mut() {
            Some(session) => session.submit_answer(&self.bank, chosen),
            None => return,
        };
        self.apply_events(&events, now);
    }

    /// Called by the event loop between input events. Delivers at most one
    /// session tick per elapsed second while a question is open, and the
    /// advance once the reveal delay has passed.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen != Screen::Quiz {
            return;
        }
        let phase = match &self.session {
            Some(session) => session.phase(),
            None => return,
        };

        match phase {
            Phase::AwaitingAnswer => {
                if now.duration_since(self.last_tick) >= TICK_INTERVAL {
                    self.last_tick = now;
                    let events = match self.session.as_mut() {
                        Some(session) => session.tick(),
                        None => return,
                    };
                    self.apply_events(&events, now);
                }
            }
            Phase::Revealing => {
                let due = self
                    .reveal_since
                    .is_some_and(|since| now.duration_since(since) >= REVEAL_DELAY);
                if due {
                    let events = match self.session.as_mut() {
                        Some(session) => session.advance(),
                        None => return,
                    };
                    self.apply_events(&events, now);
                }
            }
            Phase::Finished => {
                self.screen = Screen::Result;
            }
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max = self.session.as_ref().map_or(0, |s| s.total());
        if self.result_scroll + 1 < max {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn options_locked(&self) -> bool {
        self.session
            .as_ref()
            .is_none_or(|s| s.phase() != Phase::AwaitingAnswer)
    }

    fn apply_events(&mut self, events: &[SessionEvent], now: Instant) {
        for event in events {
            match event {
                SessionEvent::QuestionPresented { .. } => {
                    self.selected_option = 0;
                    self.reveal = None;
                    self.reveal_since = None;
                    self.last_tick = now;
                }
                SessionEvent::AnswerOutcome {
                    correct,
                    chosen,
                    correct_option,
                } => {
                    self.reveal = Some(Reveal {
                        chosen: *chosen,
                        correct_option: *correct_option,
                        correct: *correct,
                    });
                    self.reveal_since = Some(now);
                }
                SessionEvent::TimerTick { .. } | SessionEvent::TimeExpired => {}
                SessionEvent::SessionComplete { .. } => {
                    self.screen = Screen::Result;
                    self.reveal = None;
                    self.reveal_since = None;
                    self.result_scroll = 0;
                }
            }
        }
    }
}
