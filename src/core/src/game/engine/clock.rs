use crate::game::GameSimConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Quarter(usize),
    Overtime(usize),
}

/// Game clock and period sequencing. Quarters run in order, after the last one
/// overtime periods follow for as long as the score is tied.
pub struct GameClock {
    period: Period,
    remaining: f64,
    num_periods: usize,
    quarter_length: f64,
    overtime_length: f64,
}

impl GameClock {
    pub fn new(config: &GameSimConfig) -> Self {
        GameClock {
            period: Period::Quarter(1),
            remaining: config.quarter_length,
            num_periods: config.num_periods,
            quarter_length: config.quarter_length,
            overtime_length: config.overtime_length(),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// 1-based count of periods started so far, overtime included.
    pub fn period_number(&self) -> usize {
        match self.period {
            Period::Quarter(q) => q,
            Period::Overtime(n) => self.num_periods + n,
        }
    }

    pub fn overtimes(&self) -> usize {
        match self.period {
            Period::Quarter(_) => 0,
            Period::Overtime(n) => n,
        }
    }

    /// Minutes left in the current period.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    /// Runs the clock for one possession. The last possession of a period only
    /// gets the time that was left. Returns the minutes actually played.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let played = dt.min(self.remaining).max(0.0);
        self.remaining = (self.remaining - dt).max(0.0);
        played
    }

    /// Moves to the next period once the current one has run out. `None` means
    /// the game is over.
    pub fn next_period(&mut self, tied: bool) -> Option<Period> {
        let next = match self.period {
            Period::Quarter(q) if q < self.num_periods => Period::Quarter(q + 1),
            Period::Quarter(_) if tied => Period::Overtime(1),
            Period::Overtime(n) if tied => Period::Overtime(n + 1),
            _ => return None,
        };

        self.period = next;
        self.remaining = match next {
            Period::Quarter(_) => self.quarter_length,
            Period::Overtime(_) => self.overtime_length,
        };

        Some(next)
    }

    /// True once regulation is over, when a tie sends the game to overtime.
    pub fn is_final_period(&self) -> bool {
        match self.period {
            Period::Quarter(q) => q >= self.num_periods,
            Period::Overtime(_) => true,
        }
    }
}
