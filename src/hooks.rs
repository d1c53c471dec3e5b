use crate::ticker::Ticker;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to trigger parsing and validation of the current text.
    /// Typically used with `onchange`.
    pub on_commit: Callback<()>,
    /// Commits on Enter.
    pub on_keydown: Callback<KeyboardEvent>,
    /// Empties the field and clears any error.
    pub clear: Callback<()>,
    /// Reports whether the timer is configured; once it goes idle the same
    /// text may be committed again.
    pub on_timer_configured: Callback<bool>,
}

/// Remembers the canonical text of the last accepted value so that Enter
/// followed by blur does not commit twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitTracker {
    committed: Option<String>,
}

impl CommitTracker {
    pub fn accepts(&self, text: &str) -> bool {
        self.committed.as_deref() != Some(text)
    }

    pub fn record(&mut self, canonical: String) {
        self.committed = Some(canonical);
    }

    pub fn forget(&mut self) {
        self.committed = None;
    }

    /// An idle timer no longer runs the committed value.
    pub fn follow_timer(&mut self, configured: bool) {
        if !configured {
            self.forget();
        }
    }
}

/// Custom hook to manage state for a validated input field.
///
/// A successful commit rewrites the text to the value's canonical
/// `Display` form and hands the value to `on_valid`.
#[hook]
pub fn use_validated_input<T>(
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
    on_valid: Callback<T>,
) -> ValidatedInput
where
    T: std::fmt::Display + 'static,
{
    let text_state_handle: UseStateHandle<String> = use_state(String::new);
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);
    let committed_handle: UseStateHandle<CommitTracker> = use_state(CommitTracker::default);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text_handle = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        let committed_setter = committed_handle.clone();
        let parse_fn = parse_and_validate.clone();

        Callback::from(move |_: ()| {
            if !committed_setter.accepts(&current_text_handle) {
                return;
            }
            match parse_fn(&current_text_handle) {
                Ok(parsed_val) => {
                    let canonical = parsed_val.to_string();
                    current_text_handle.set(canonical.clone()); // Update text to canonical form
                    let mut tracker = (*committed_setter).clone();
                    tracker.record(canonical);
                    committed_setter.set(tracker);
                    error_setter.set(None);
                    on_valid.emit(parsed_val);
                }
                Err(err_msg) => {
                    error_setter.set(Some(err_msg));
                }
            }
        })
    };

    let on_keydown = {
        let on_commit = on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_commit.emit(());
            }
        })
    };

    let clear = {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        let committed_setter = committed_handle.clone();
        Callback::from(move |_: ()| {
            text_setter.set(String::new());
            error_setter.set(None);
            committed_setter.set(CommitTracker::default());
        })
    };

    let on_timer_configured = {
        let committed_setter = committed_handle.clone();
        Callback::from(move |configured: bool| {
            let mut tracker = (*committed_setter).clone();
            tracker.follow_timer(configured);
            if tracker != *committed_setter {
                committed_setter.set(tracker);
            }
        })
    };

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
        on_keydown,
        clear,
        on_timer_configured,
    }
}

/// Runs `on_tick` every `period_ms` while `active` is true.
///
/// The interval is cancelled when `active` turns false and when the
/// component unmounts, so at most one interval is alive at a time.
#[hook]
pub fn use_interval(active: bool, period_ms: u32, on_tick: Callback<()>) {
    let ticker = use_mut_ref(Ticker::<Interval>::default);

    use_effect_with(active, move |&active| {
        if active {
            ticker
                .borrow_mut()
                .start(period_ms, move || on_tick.emit(()));
        }
        move || ticker.borrow_mut().cancel()
    });
}

/// Keeps the browser tab title in sync with `title`.
#[hook]
pub fn use_document_title(title: String) {
    use_effect_with(title, |title| {
        gloo_utils::document().set_title(title);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomodoro_timer::{TickOutcome, TimerAction, TimerState};

    #[test]
    fn same_text_is_committed_once() {
        let mut tracker = CommitTracker::default();
        assert!(tracker.accepts("1:30"));

        tracker.record("1:30".to_string());
        assert!(!tracker.accepts("1:30"));
        assert!(tracker.accepts("2:00"));
    }

    #[test]
    fn finished_custom_countdown_can_be_committed_again() {
        let mut tracker = CommitTracker::default();
        let mut timer = TimerState::default();

        tracker.record("0:03".to_string());
        timer.apply(TimerAction::SetCustom(3));
        timer.apply(TimerAction::Toggle);
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.tick(), TickOutcome::Finished);

        tracker.follow_timer(timer.is_configured());
        assert!(tracker.accepts("0:03"));
    }

    #[test]
    fn configured_timer_keeps_the_commit() {
        let mut tracker = CommitTracker::default();
        let mut timer = TimerState::default();

        tracker.record("0:03".to_string());
        timer.apply(TimerAction::SetCustom(3));
        timer.apply(TimerAction::Toggle);
        timer.tick();

        tracker.follow_timer(timer.is_configured());
        assert!(!tracker.accepts("0:03"));
    }
}
