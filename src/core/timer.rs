//! Pausable round countdown
//!
//! The timer counts whole elapsed seconds. It is driven externally: the
//! round schedules one tick per second while the timer is running.

/// Round length in seconds (4 minutes)
pub const TIME_LIMIT_SECS: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    /// Time ran out
    Expired,
    /// The round was finished by solving every word
    Stopped,
}

impl TimerState {
    /// Short label for status lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "time's up",
            Self::Stopped => "solved",
        }
    }
}

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer was not running; nothing changed
    Ignored,
    Advanced,
    /// This tick reached the limit
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTimer {
    elapsed: u32,
    limit: u32,
    state: TimerState,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(TIME_LIMIT_SECS)
    }
}

impl RoundTimer {
    /// A running timer at zero
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            elapsed: 0,
            limit,
            state: TimerState::Running,
        }
    }

    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.elapsed)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Expired or stopped
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TimerState::Expired | TimerState::Stopped)
    }

    /// Count one second
    ///
    /// Reaching the limit clamps the elapsed time and expires the timer.
    ///
    /// # Examples
    /// ```
    /// use quizwordz::core::{RoundTimer, Tick};
    ///
    /// let mut timer = RoundTimer::new(2);
    /// assert_eq!(timer.tick(), Tick::Advanced);
    /// assert_eq!(timer.tick(), Tick::Expired);
    /// assert_eq!(timer.tick(), Tick::Ignored);
    /// assert_eq!(timer.elapsed(), 2);
    /// ```
    pub fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Ignored;
        }
        if self.elapsed + 1 >= self.limit {
            self.elapsed = self.limit;
            self.state = TimerState::Expired;
            Tick::Expired
        } else {
            self.elapsed += 1;
            Tick::Advanced
        }
    }

    /// Running → Paused; refused in any other state
    pub fn pause(&mut self) -> bool {
        if self.is_running() {
            self.state = TimerState::Paused;
            true
        } else {
            false
        }
    }

    /// Paused → Running; refused in any other state
    pub fn resume(&mut self) -> bool {
        if self.is_paused() {
            self.state = TimerState::Running;
            true
        } else {
            false
        }
    }

    /// Freeze the timer because the round was solved; returns the time taken
    pub fn stop(&mut self) -> u32 {
        if !self.is_finished() {
            self.state = TimerState::Stopped;
        }
        self.elapsed
    }
}
