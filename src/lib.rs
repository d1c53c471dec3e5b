use log::{debug, info};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// Default timer parameters
pub mod defaults {
    use crate::Preset;

    pub const POMODORO_MINUTES: u32 = 25;
    pub const SHORT_BREAK_MINUTES: u32 = 5;
    pub const LONG_BREAK_MINUTES: u32 = 15;

    /// Built-in catalog used when the embedded preset data is unusable.
    pub fn presets() -> Vec<Preset> {
        vec![
            Preset::new("pomodoro", "Pomodoro", POMODORO_MINUTES),
            Preset::new("short-break", "Short break", SHORT_BREAK_MINUTES),
            Preset::new("long-break", "Long break", LONG_BREAK_MINUTES),
        ]
    }
}

pub type PresetId = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub label: String,
    pub minutes: u32,
}

impl Preset {
    pub fn new(id: &str, label: &str, minutes: u32) -> Self {
        Preset {
            id: id.to_string(),
            label: label.to_string(),
            minutes,
        }
    }

    pub fn seconds(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }
}

/// Phase of the countdown, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Ready,
    Running,
    Paused,
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerPhase::Idle => write!(f, "Idle"),
            TimerPhase::Ready => write!(f, "Ready"),
            TimerPhase::Running => write!(f, "Running"),
            TimerPhase::Paused => write!(f, "Paused"),
        }
    }
}

/// What a single tick did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Ignored,
    /// One second was taken off the remaining time.
    Counted,
    /// The countdown reached zero and the timer went back to idle.
    Finished,
}

/// Countdown state shared by the preset selector, the tick controller and
/// the display.
///
/// Invariants: `remaining_seconds <= total_seconds`, and `is_running`
/// implies `is_configured`. Both are kept by only mutating through the
/// methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    is_configured: bool,
    is_running: bool,
    remaining_seconds: u32,
    total_seconds: u32,
    active_preset: Option<PresetId>,
}

impl TimerState {
    pub fn is_configured(&self) -> bool {
        self.is_configured
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    pub fn phase(&self) -> TimerPhase {
        if !self.is_configured {
            TimerPhase::Idle
        } else if self.is_running {
            TimerPhase::Running
        } else if self.remaining_seconds < self.total_seconds {
            TimerPhase::Paused
        } else {
            TimerPhase::Ready
        }
    }

    /// Back to unconfigured/zero with no active preset.
    pub fn reset(&mut self) {
        *self = TimerState::default();
    }

    fn configure(&mut self, active_preset: Option<PresetId>, seconds: u32) {
        self.reset();
        self.active_preset = active_preset;
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.is_configured = seconds > 0;
    }

    /// Select `preset`, or deselect it when it is already the active one.
    pub fn select_preset(&mut self, preset: &Preset) {
        if self.active_preset.as_deref() == Some(preset.id.as_str()) {
            debug!("Deselecting active preset '{}'", preset.id);
            self.reset();
            return;
        }

        self.configure(Some(preset.id.clone()), preset.seconds());
        info!(
            "Selected preset '{}' ({} seconds)",
            preset.id, self.total_seconds
        );
    }

    /// Configure an ad-hoc duration that belongs to no preset.
    pub fn set_custom(&mut self, seconds: u32) {
        self.configure(None, seconds);
        info!("Configured custom duration of {} seconds", seconds);
    }

    /// Returns whether the timer is running afterwards.
    pub fn start(&mut self) -> bool {
        if !self.is_configured {
            debug!("Start ignored, no duration configured");
            return false;
        }
        if !self.is_running {
            self.is_running = true;
            info!("Timer started at {} seconds", self.remaining_seconds);
        }
        true
    }

    pub fn stop(&mut self) {
        if self.is_running {
            self.is_running = false;
            info!("Timer stopped at {} seconds", self.remaining_seconds);
        }
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            info!(
                "Countdown of {} seconds finished, returning to idle",
                self.total_seconds
            );
            self.reset();
            return TickOutcome::Finished;
        }
        TickOutcome::Counted
    }

    /// Elapsed time over total duration, in [0, 1].
    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.remaining_seconds, self.total_seconds)
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Actions the UI feeds into the timer reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    SelectPreset(Preset),
    SetCustom(u32),
    Toggle,
    Tick,
    Reset,
}

impl TimerState {
    pub fn apply(&mut self, action: TimerAction) {
        match action {
            TimerAction::SelectPreset(preset) => self.select_preset(&preset),
            TimerAction::SetCustom(seconds) => self.set_custom(seconds),
            TimerAction::Toggle => self.toggle(),
            TimerAction::Tick => {
                self.tick();
            }
            TimerAction::Reset => self.reset(),
        }
    }
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Format seconds as zero-padded `MM:SS`. Minutes are not folded into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `(total - remaining) / total`, or 0 for a zero-length countdown.
pub fn progress_fraction(remaining_seconds: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    (elapsed as f64 / total_seconds as f64).clamp(0.0, 1.0)
}

/// Render a progress fraction as a percentage with two decimals.
pub fn format_progress_pct(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Label of the start/stop control for the given phase.
pub fn toggle_label(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Idle | TimerPhase::Ready => "Start",
        TimerPhase::Running => "Stop",
        TimerPhase::Paused => "Resume",
    }
}

pub mod presets;

#[cfg(test)]
mod tests {
    use super::*;

    fn five_minutes() -> Preset {
        Preset::new("five", "Five", 5)
    }

    fn running(preset: &Preset) -> TimerState {
        let mut state = TimerState::default();
        state.select_preset(preset);
        assert!(state.start());
        state
    }

    #[test]
    fn selecting_preset_while_idle_configures_full_duration() {
        let mut state = TimerState::default();
        state.select_preset(&five_minutes());

        assert!(state.is_configured());
        assert!(!state.is_running());
        assert_eq!(state.remaining_seconds(), 300);
        assert_eq!(state.total_seconds(), 300);
        assert_eq!(state.active_preset(), Some("five"));
        assert_eq!(state.phase(), TimerPhase::Ready);
    }

    #[test]
    fn start_without_configuration_is_noop() {
        let mut state = TimerState::default();
        assert!(!state.start());
        assert_eq!(state, TimerState::default());

        state.apply(TimerAction::Toggle);
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn each_tick_decrements_by_one_and_progress_grows() {
        let mut state = running(&five_minutes());
        let mut last_progress = state.progress_fraction();
        assert_eq!(last_progress, 0.0);

        for expected in (290..300).rev() {
            assert_eq!(state.tick(), TickOutcome::Counted);
            assert_eq!(state.remaining_seconds(), expected);
            let progress = state.progress_fraction();
            assert!(progress > last_progress);
            assert!(progress <= 1.0);
            last_progress = progress;
        }
    }

    #[test]
    fn five_minute_example_after_three_ticks() {
        let mut state = running(&five_minutes());
        for _ in 0..3 {
            state.tick();
        }

        assert_eq!(state.remaining_seconds(), 297);
        assert_eq!(state.total_seconds(), 300);
        assert_eq!(state.clock(), "04:57");
        assert_eq!(format_progress_pct(state.progress_fraction()), "1.00%");
    }

    #[test]
    fn reaching_zero_returns_to_idle() {
        let mut state = running(&Preset::new("one", "One", 1));
        for _ in 0..59 {
            assert_eq!(state.tick(), TickOutcome::Counted);
        }
        assert_eq!(state.remaining_seconds(), 1);

        assert_eq!(state.tick(), TickOutcome::Finished);
        assert!(!state.is_configured());
        assert!(!state.is_running());
        assert_eq!(state.active_preset(), None);
        assert_eq!(state.phase(), TimerPhase::Idle);
        assert_eq!(state.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn stop_halts_decrements_and_restart_resumes() {
        let mut state = running(&five_minutes());
        state.tick();
        state.tick();
        state.stop();

        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.remaining_seconds(), 298);
        assert_eq!(state.phase(), TimerPhase::Paused);
        assert_eq!(toggle_label(state.phase()), "Resume");

        state.toggle();
        assert!(state.is_running());
        state.tick();
        assert_eq!(state.remaining_seconds(), 297);
    }

    #[test]
    fn reselecting_active_preset_deselects() {
        let preset = five_minutes();
        let mut state = running(&preset);
        state.tick();

        state.select_preset(&preset);
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn selecting_other_preset_replaces_and_stops() {
        let mut state = running(&five_minutes());
        state.tick();

        state.select_preset(&Preset::new("ten", "Ten", 10));
        assert!(!state.is_running());
        assert_eq!(state.active_preset(), Some("ten"));
        assert_eq!(state.remaining_seconds(), 600);
        assert_eq!(state.total_seconds(), 600);
    }

    #[test]
    fn custom_duration_has_no_active_preset() {
        let mut state = running(&five_minutes());
        state.set_custom(90);

        assert!(state.is_configured());
        assert!(!state.is_running());
        assert_eq!(state.active_preset(), None);
        assert_eq!(state.clock(), "01:30");
    }

    #[test]
    fn zero_custom_duration_stays_unconfigured() {
        let mut state = TimerState::default();
        state.set_custom(0);
        assert!(!state.is_configured());
        assert!(!state.start());
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let mut state = Rc::new(TimerState::default());
        state = state.reduce(TimerAction::SelectPreset(five_minutes()));
        state = state.reduce(TimerAction::Toggle);
        state = state.reduce(TimerAction::Tick);
        assert_eq!(state.remaining_seconds(), 299);

        state = state.reduce(TimerAction::Toggle);
        let paused = state.clone();
        state = state.reduce(TimerAction::Tick);
        assert!(Rc::ptr_eq(&paused, &state));

        state = state.reduce(TimerAction::Reset);
        assert_eq!(*state, TimerState::default());
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(100 * 60 + 5), "100:05");
    }

    #[test]
    fn progress_guards_zero_total() {
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(0, 60), 1.0);
        assert_eq!(progress_fraction(30, 60), 0.5);
        assert_eq!(format_progress_pct(0.0), "0.00%");
    }
}
