//! Session selection and the quiz state machine.

mod selector;
mod session;

pub use selector::{select_plan, EmptyBankError, SessionPlan};
pub use session::{Phase, QuizSession, SessionEvent, SessionSnapshot};
