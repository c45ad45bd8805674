//! Per-guess countdown timer
//!
//! The timer is driven by [`CountdownTimer::advance`]; it ticks once per
//! whole second of running time and never reads a clock itself.

use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    /// Ran out while running; terminal until reset
    Expired,
    /// Stopped by a win; only a round reset clears it
    Stopped,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    limit: u32,
    remaining: u32,
    state: TimerState,
    /// Running time not yet converted into a tick
    carry: Duration,
}

impl CountdownTimer {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            state: TimerState::Idle,
            carry: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Seconds left
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Seconds consumed since the last reset
    #[must_use]
    pub const fn used(&self) -> u32 {
        self.limit.saturating_sub(self.remaining)
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running)
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.state, TimerState::Expired)
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self.state, TimerState::Stopped)
    }

    /// Start or resume; ignored when running, stopped or expired
    pub fn start(&mut self) {
        if matches!(self.state, TimerState::Idle | TimerState::Paused) {
            self.state = TimerState::Running;
        }
    }

    /// Pause a running timer, keeping the remaining seconds
    ///
    /// The partial second in progress is dropped, as a restarted ticker
    /// begins a fresh second.
    pub fn pause(&mut self) {
        if self.is_running() {
            self.state = TimerState::Paused;
            self.carry = Duration::ZERO;
        }
    }

    pub fn stop_on_win(&mut self) {
        self.state = TimerState::Stopped;
        self.carry = Duration::ZERO;
    }

    /// Full reset for a new round; clears stopped and expired
    pub fn reset_for_new_round(&mut self, limit: u32) {
        self.limit = limit;
        self.remaining = limit;
        self.state = TimerState::Idle;
        self.carry = Duration::ZERO;
    }

    /// Refill for the next guess row; a stopped timer stays stopped
    pub fn reset_for_new_guess(&mut self, limit: u32) {
        self.limit = limit;
        self.remaining = limit;
        self.carry = Duration::ZERO;
        if !self.is_stopped() {
            self.state = TimerState::Idle;
        }
    }

    /// Apply `elapsed` running time
    ///
    /// Returns `true` on the call where the timer expires, and only then.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.carry += elapsed;
        while self.carry >= TICK {
            self.carry -= TICK;
            if self.remaining <= 1 {
                self.remaining = 0;
                self.state = TimerState::Expired;
                self.carry = Duration::ZERO;
                tracing::info!(limit = self.limit, "countdown expired");
                return true;
            }
            self.remaining -= 1;
        }
        false
    }

    /// Time until the next tick while running
    #[must_use]
    pub fn next_tick(&self) -> Option<Duration> {
        self.is_running().then(|| TICK.saturating_sub(self.carry))
    }

    /// Remaining time as a percentage of the limit
    #[must_use]
    pub fn percentage_remaining(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        f64::from(self.remaining) / f64::from(self.limit) * 100.0
    }

    /// Remaining time as `mm:ss`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn idle_timer_does_not_tick() {
        let mut timer = CountdownTimer::new(10);
        assert!(!timer.advance(secs(5)));
        assert_eq!(timer.remaining(), 10);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn ticks_once_per_whole_second() {
        let mut timer = CountdownTimer::new(10);
        timer.start();
        timer.advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), 10);
        timer.advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), 9);
        timer.advance(secs(3));
        assert_eq!(timer.remaining(), 6);
        assert_eq!(timer.used(), 4);
        assert_eq!(timer.next_tick(), Some(Duration::from_millis(800)));
    }

    #[test]
    fn expires_once_and_never_goes_negative() {
        let mut timer = CountdownTimer::new(3);
        timer.start();
        assert!(!timer.advance(secs(2)));
        assert_eq!(timer.remaining(), 1);

        assert!(timer.advance(secs(10)));
        assert_eq!(timer.remaining(), 0);
        assert!(timer.is_expired());

        assert!(!timer.advance(secs(10)));
        timer.start();
        assert!(timer.is_expired());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn pause_preserves_remaining() {
        let mut timer = CountdownTimer::new(60);
        timer.start();
        timer.advance(Duration::from_millis(2500));
        timer.pause();
        assert_eq!(timer.state(), TimerState::Paused);

        timer.advance(secs(30));
        assert_eq!(timer.remaining(), 58);

        timer.start();
        timer.advance(Duration::from_millis(999));
        assert_eq!(timer.remaining(), 58);
        timer.advance(Duration::from_millis(1));
        assert_eq!(timer.remaining(), 57);
    }

    #[test]
    fn stopped_is_sticky() {
        let mut timer = CountdownTimer::new(60);
        timer.start();
        timer.stop_on_win();
        timer.start();
        assert!(timer.is_stopped());

        timer.reset_for_new_guess(60);
        timer.start();
        assert!(timer.is_stopped());
        assert!(!timer.advance(secs(5)));

        timer.reset_for_new_round(60);
        timer.start();
        assert!(timer.is_running());
    }

    #[test]
    fn new_guess_clears_expiry() {
        let mut timer = CountdownTimer::new(1);
        timer.start();
        assert!(timer.advance(secs(1)));

        timer.reset_for_new_guess(30);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), 30);
        assert_eq!(timer.limit(), 30);
    }

    #[test]
    fn derived_views() {
        let mut timer = CountdownTimer::new(120);
        assert_eq!(timer.formatted(), "02:00");
        assert!((timer.percentage_remaining() - 100.0).abs() < f64::EPSILON);

        timer.start();
        timer.advance(secs(55));
        assert_eq!(timer.formatted(), "01:05");
        assert!((timer.percentage_remaining() - 65.0 / 120.0 * 100.0).abs() < 1e-9);

        assert!((CountdownTimer::new(0).percentage_remaining()).abs() < f64::EPSILON);
    }
}
