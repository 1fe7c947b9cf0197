//! The quiz session state machine.
//!
//! A session owns its question order (bank indices), position, score, and
//! the per-question countdown. The bank itself is passed into the methods
//! that need question data; the session never copies or mutates it. All
//! transitions are phase-guarded: a call that arrives in the wrong phase is
//! a silent no-op, which is how the one-second timer and user input are
//! kept from double-applying to the same question.

use crate::models::{OptionKey, Question, QuestionBank};

use super::SessionPlan;

/// Where the session is within the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Timer running, options selectable.
    AwaitingAnswer,
    /// Outcome shown, options locked; leaves via [`QuizSession::advance`].
    Revealing,
    /// Terminal; only [`QuizSession::reset`] leaves this phase.
    Finished,
}

/// Outcomes emitted by session transitions for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new question became the current one (0-based index into the plan).
    QuestionPresented { index: usize, total: usize },
    /// The current question was answered and scored.
    AnswerOutcome {
        correct: bool,
        chosen: OptionKey,
        correct_option: OptionKey,
    },
    /// One second elapsed on the countdown.
    TimerTick { seconds_remaining: u16 },
    /// The countdown ran out before an answer arrived.
    TimeExpired,
    /// The session reached its end.
    SessionComplete { score: usize, total: usize },
}

/// Read-only view of a running session, handed to the renderer. Borrows the
/// current question from the bank.
pub struct SessionSnapshot<'a> {
    pub phase: Phase,
    /// 1-based position of the current question.
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub time_remaining: u16,
    pub question: &'a Question,
}

pub struct QuizSession {
    plan: SessionPlan,
    current: usize,
    score: usize,
    time_remaining: u16,
    time_limit: u16,
    phase: Phase,
    /// One slot per plan entry; `None` means unanswered (not reached yet,
    /// or timed out).
    answers: Vec<Option<OptionKey>>,
}

impl QuizSession {
    /// Start a session over the given plan. An empty plan has nothing to
    /// ask and begins already `Finished`.
    pub fn new(plan: SessionPlan, time_limit: u16) -> Self {
        let phase = if plan.is_empty() {
            Phase::Finished
        } else {
            Phase::AwaitingAnswer
        };
        let answers = vec![None; plan.len()];

        Self {
            plan,
            current: 0,
            score: 0,
            time_remaining: time_limit,
            time_limit,
            phase,
            answers,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 0-based position within the plan.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.plan.len()
    }

    pub fn time_remaining(&self) -> u16 {
        self.time_remaining
    }

    pub fn plan(&self) -> &[usize] {
        &self.plan
    }

    pub fn answers(&self) -> &[Option<OptionKey>] {
        &self.answers
    }

    /// The question currently being asked, if any.
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        if self.phase == Phase::Finished {
            return None;
        }
        bank.get(*self.plan.get(self.current)?)
    }

    /// Snapshot for rendering. `None` once the session is finished.
    pub fn snapshot<'a>(&self, bank: &'a QuestionBank) -> Option<SessionSnapshot<'a>> {
        let question = self.current_question(bank)?;
        Some(SessionSnapshot {
            phase: self.phase,
            number: self.current + 1,
            total: self.plan.len(),
            score: self.score,
            time_remaining: self.time_remaining,
            question,
        })
    }

    /// Advance the countdown by one second.
    ///
    /// At zero the question is left recorded as unanswered and the session
    /// moves on by itself; the caller gets `TimeExpired` followed by the
    /// events of the auto-advance. Ignored outside `AwaitingAnswer`.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.phase != Phase::AwaitingAnswer {
            return Vec::new();
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        let mut events = vec![SessionEvent::TimerTick {
            seconds_remaining: self.time_remaining,
        }];

        if self.time_remaining == 0 {
            events.push(SessionEvent::TimeExpired);
            self.phase = Phase::Revealing;
            events.extend(self.advance());
        }

        events
    }

    /// Score an answer for the current question.
    ///
    /// Stops the countdown (the phase change makes further `tick` calls
    /// no-ops) and compares by exact key. Ignored outside `AwaitingAnswer`,
    /// so a second submit or a submit racing a timeout cannot score twice.
    pub fn submit_answer(&mut self, bank: &QuestionBank, chosen: OptionKey) -> Vec<SessionEvent> {
        if self.phase != Phase::AwaitingAnswer {
            return Vec::new();
        }
        let Some(question) = self.current_question(bank) else {
            return Vec::new();
        };

        let correct_option = question.correct;
        let correct = chosen == correct_option;

        self.answers[self.current] = Some(chosen);
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Revealing;

        vec![SessionEvent::AnswerOutcome {
            correct,
            chosen,
            correct_option,
        }]
    }

    /// Leave the reveal: present the next question with a fresh countdown,
    /// or finish the session when the plan is exhausted. Ignored outside
    /// `Revealing`.
    pub fn advance(&mut self) -> Vec<SessionEvent> {
        if self.phase != Phase::Revealing {
            return Vec::new();
        }

        if self.current + 1 < self.plan.len() {
            self.current += 1;
            self.time_remaining = self.time_limit;
            self.phase = Phase::AwaitingAnswer;
            vec![SessionEvent::QuestionPresented {
                index: self.current,
                total: self.plan.len(),
            }]
        } else {
            self.phase = Phase::Finished;
            vec![SessionEvent::SessionComplete {
                score: self.score,
                total: self.plan.len(),
            }]
        }
    }

    /// Discard all progress and start over on a new plan.
    pub fn reset(&mut self, plan: SessionPlan) {
        *self = Self::new(plan, self.time_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    /// Bank where question `i` has correct answer `A` and distinct texts.
    fn bank_of(size: usize) -> QuestionBank {
        let questions = (0..size)
            .map(|i| Question {
                text: format!("question {}", i),
                options: [
                    "Noah".to_string(),
                    "Moses".to_string(),
                    "David".to_string(),
                    "Abraham".to_string(),
                ],
                correct: OptionKey::A,
            })
            .collect();
        QuestionBank::new(questions)
    }

    fn session(bank: &QuestionBank, count: usize, time_limit: u16) -> QuizSession {
        QuizSession::new((0..count.min(bank.len())).collect(), time_limit)
    }

    #[test]
    fn test_initial_state() {
        let bank = bank_of(3);
        let s = session(&bank, 3, 30);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn test_empty_plan_is_born_finished() {
        let s = QuizSession::new(Vec::new(), 30);
        assert_eq!(s.phase(), Phase::Finished);
        assert_eq!(s.total(), 0);
        let bank = bank_of(3);
        assert!(s.snapshot(&bank).is_none());
    }

    #[test]
    fn test_correct_answer_scores_and_reveals() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        let events = s.submit_answer(&bank, OptionKey::A);
        assert_eq!(
            events,
            vec![SessionEvent::AnswerOutcome {
                correct: true,
                chosen: OptionKey::A,
                correct_option: OptionKey::A,
            }]
        );
        assert_eq!(s.score(), 1);
        assert_eq!(s.phase(), Phase::Revealing);
    }

    #[test]
    fn test_wrong_answer_names_the_correct_option() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        let events = s.submit_answer(&bank, OptionKey::B);
        assert_eq!(
            events,
            vec![SessionEvent::AnswerOutcome {
                correct: false,
                chosen: OptionKey::B,
                correct_option: OptionKey::A,
            }]
        );
        assert_eq!(s.score(), 0);
        assert_eq!(s.phase(), Phase::Revealing);
    }

    #[test]
    fn test_double_submit_scores_once() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        s.submit_answer(&bank, OptionKey::A);
        let second = s.submit_answer(&bank, OptionKey::A);
        assert!(second.is_empty());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_tick_counts_down() {
        let bank = bank_of(1);
        let mut s = session(&bank, 1, 30);
        let events = s.tick();
        assert_eq!(
            events,
            vec![SessionEvent::TimerTick {
                seconds_remaining: 29
            }]
        );
        assert_eq!(s.time_remaining(), 29);
    }

    #[test]
    fn test_tick_is_ignored_while_revealing() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        s.submit_answer(&bank, OptionKey::A);
        assert!(s.tick().is_empty());
        assert_eq!(s.time_remaining(), 30);
    }

    #[test]
    fn test_timeout_expires_and_auto_advances() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 3);
        s.tick();
        s.tick();
        let events = s.tick();
        assert_eq!(
            events,
            vec![
                SessionEvent::TimerTick {
                    seconds_remaining: 0
                },
                SessionEvent::TimeExpired,
                SessionEvent::QuestionPresented { index: 1, total: 2 },
            ]
        );
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert_eq!(s.time_remaining(), 3);
        assert_eq!(s.answers()[0], None);
    }

    #[test]
    fn test_timeout_on_last_question_finishes() {
        let bank = bank_of(1);
        let mut s = session(&bank, 1, 2);
        s.tick();
        let events = s.tick();
        assert_eq!(
            events,
            vec![
                SessionEvent::TimerTick {
                    seconds_remaining: 0
                },
                SessionEvent::TimeExpired,
                SessionEvent::SessionComplete { score: 0, total: 1 },
            ]
        );
        assert_eq!(s.phase(), Phase::Finished);
    }

    #[test]
    fn test_advance_resets_the_countdown() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        s.tick();
        s.submit_answer(&bank, OptionKey::A);
        let events = s.advance();
        assert_eq!(
            events,
            vec![SessionEvent::QuestionPresented { index: 1, total: 2 }]
        );
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_advance_is_ignored_outside_reveal() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 30);
        assert!(s.advance().is_empty());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_full_session_one_right_one_timed_out() {
        let bank = bank_of(2);
        let mut s = session(&bank, 2, 2);

        s.submit_answer(&bank, OptionKey::A);
        s.advance();

        s.tick();
        let events = s.tick();
        assert!(events.contains(&SessionEvent::SessionComplete { score: 1, total: 2 }));
        assert_eq!(s.phase(), Phase::Finished);
        assert_eq!(s.answers(), &[Some(OptionKey::A), None]);
    }

    #[test]
    fn test_score_never_exceeds_questions_answered() {
        let bank = bank_of(3);
        let mut s = session(&bank, 3, 30);
        for expected_max in 1..=3 {
            s.submit_answer(&bank, OptionKey::A);
            assert!(s.score() <= expected_max);
            s.advance();
        }
        assert_eq!(s.score(), 3);
    }

    #[test]
    fn test_reset_starts_over() {
        let bank = bank_of(3);
        let mut s = session(&bank, 2, 30);
        s.submit_answer(&bank, OptionKey::A);
        s.reset(vec![2, 0]);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(
            s.current_question(&bank).map(|q| q.text.as_str()),
            Some("question 2")
        );
    }

    #[test]
    fn test_snapshot_reflects_the_current_question() {
        let bank = bank_of(3);
        let s = QuizSession::new(vec![1, 2], 30);
        let snap = s.snapshot(&bank).unwrap();
        assert_eq!(snap.number, 1);
        assert_eq!(snap.total, 2);
        assert_eq!(snap.question.text, "question 1");
        assert_eq!(snap.time_remaining, 30);
    }
}
