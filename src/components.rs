//! Pure Yew view components for the timer UI.
//!
//! These components render from props only; all timer state lives in the
//! reducer owned by the main component.

use pomodoro_timer::{
    format_clock, format_progress_pct, progress_fraction, toggle_label, Preset, TimerPhase,
};
use std::rc::Rc;
use yew::prelude::*;

/// Remaining time as `MM:SS` plus the current phase.
#[derive(Properties, PartialEq)]
pub struct ClockDisplayProps {
    pub remaining_seconds: u32,
    pub phase: TimerPhase,
}

#[function_component(ClockDisplay)]
pub fn clock_display(props: &ClockDisplayProps) -> Html {
    let clock = format_clock(props.remaining_seconds);
    html! {
        <div class="clock" role="timer" aria-live="polite">
            <span class="clock-time" aria-label={format!("{} remaining", clock)}>{ clock }</span>
            <span class={classes!("clock-phase", props.phase.to_string().to_lowercase())}>
                { props.phase.to_string() }
            </span>
        </div>
    }
}

/// Fill bar that grows with elapsed time.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub remaining_seconds: u32,
    pub total_seconds: u32,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let pct = format_progress_pct(progress_fraction(
        props.remaining_seconds,
        props.total_seconds,
    ));
    html! {
        <div class="progress">
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}", pct)}></div>
            </div>
            <span class="progress-label">{ pct }</span>
        </div>
    }
}

/// One button per preset; the active one is highlighted.
#[derive(Properties, PartialEq)]
pub struct PresetSelectorProps {
    pub presets: Rc<Vec<Preset>>,
    pub active: Option<AttrValue>,
    pub onselect: Callback<Preset>,
}

#[function_component(PresetSelector)]
pub fn preset_selector(props: &PresetSelectorProps) -> Html {
    html! {
        <div class="presets">
            { props.presets.iter().map(|preset| {
                let is_active = props.active.as_deref() == Some(preset.id.as_str());
                let onclick = {
                    let onselect = props.onselect.clone();
                    let preset = preset.clone();
                    Callback::from(move |_| onselect.emit(preset.clone()))
                };
                html! {
                    <button
                        key={preset.id.clone()}
                        class={classes!("preset", is_active.then_some("active"))}
                        aria-pressed={is_active.to_string()}
                        data-minutes={preset.minutes.to_string()}
                        {onclick}
                    >
                        <span class="preset-label">{ preset.label.clone() }</span>
                        <span class="preset-duration">{ format!("{} min", preset.minutes) }</span>
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Start/stop toggle and reset.
#[derive(Properties, PartialEq)]
pub struct TimerControlsProps {
    pub phase: TimerPhase,
    pub ontoggle: Callback<()>,
    pub onreset: Callback<()>,
}

#[function_component(TimerControls)]
pub fn timer_controls(props: &TimerControlsProps) -> Html {
    let idle = props.phase == TimerPhase::Idle;
    html! {
        <div class="controls">
            <button class="btn-primary"
                disabled={idle}
                onclick={props.ontoggle.reform(|_| ())}
            >
                { toggle_label(props.phase) }
            </button>
            <button class="btn-secondary"
                disabled={idle}
                onclick={props.onreset.reform(|_| ())}
            >
                { "Reset" }
            </button>
        </div>
    }
}

/// Free-form duration field with inline validation error.
#[derive(Properties, PartialEq)]
pub struct CustomDurationFieldProps {
    pub text: AttrValue,
    pub error: Option<AttrValue>,
    pub placeholder: AttrValue,
    pub oninput: Callback<InputEvent>,
    pub oncommit: Callback<()>,
    pub onkeydown: Callback<KeyboardEvent>,
}

#[function_component(CustomDurationField)]
pub fn custom_duration_field(props: &CustomDurationFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for="custom_duration_input">{ "Custom duration:" }</label>
            <input
                type="text"
                id="custom_duration_input"
                value={props.text.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                placeholder={props.placeholder.clone()}
                oninput={props.oninput.clone()}
                onchange={props.oncommit.reform(|_| ())}
                onkeydown={props.onkeydown.clone()}
            />
            if let Some(ref error) = props.error {
                <div class="input-error">{ error.clone() }</div>
            }
        </div>
    }
}
