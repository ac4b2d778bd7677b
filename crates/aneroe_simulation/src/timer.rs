//! Countdown helper shared by every time-windowed buffer.
//!
//! Все таймеры персонажа (tap buffer, link buffer) тикают только через
//! `decrement_timer`, чтобы expiry срабатывал ровно один раз.

/// Tolerance for accumulated f32 error (0.2s / (1/60) должно дать ровно 12 тиков).
pub const TIMER_EPSILON: f32 = 1e-5;

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerStep {
    /// true on the step that crossed zero
    pub expired: bool,
    /// Remaining time (never negative)
    pub next: f32,
}

/// Decrement `current` by one fixed step.
///
/// Crossing zero yields `expired = true, next = 0.0`. An already stopped
/// timer (`current <= 0`) stays at zero and does NOT expire again.
pub fn decrement_timer(current: f32, rate: f32) -> TimerStep {
    if current <= 0.0 {
        return TimerStep {
            expired: false,
            next: 0.0,
        };
    }

    let next = current - rate;
    if next <= TIMER_EPSILON {
        TimerStep {
            expired: true,
            next: 0.0,
        }
    } else {
        TimerStep {
            expired: false,
            next,
        }
    }
}
