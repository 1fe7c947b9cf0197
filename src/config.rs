/// Questions drawn per session.
pub const DEFAULT_SESSION_SIZE: usize = 15;

/// Seconds allowed per question.
pub const DEFAULT_TIME_LIMIT_SECS: u16 = 30;

/// Bank size below which a low-inventory warning is raised.
pub const DEFAULT_MIN_BANK_SIZE: usize = 200;

/// Tunable session parameters, populated from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct QuizConfig {
    /// Desired questions per session. Shrinks to the bank size when the
    /// bank is smaller.
    pub session_size: usize,
    /// Countdown, in seconds, per question.
    pub time_limit: u16,
    /// Recommended minimum bank size.
    pub min_bank_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            session_size: DEFAULT_SESSION_SIZE,
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            min_bank_size: DEFAULT_MIN_BANK_SIZE,
        }
    }
}
