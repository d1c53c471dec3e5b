//! Main module for the Pomodoro Timer application using Yew.
//! Wires UI components, the timer reducer and the tick interval.

use log::warn;
use pomodoro_timer::{
    defaults, presets::read_presets_from_csv_string, Preset, TimerAction, TimerPhase, TimerState,
};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod ticker;
mod utils;

use components::{ClockDisplay, CustomDurationField, PresetSelector, ProgressBar, TimerControls};
use config::*;
use hooks::{use_document_title, use_interval, use_validated_input};
use utils::{document_title, validate_custom_duration, CustomDuration};

/// Load the embedded preset catalog, falling back to the built-in presets.
fn load_presets() -> Vec<Preset> {
    read_presets_from_csv_string(PRESETS_CSV).unwrap_or_else(|e| {
        warn!("Using built-in presets: {}", e);
        defaults::presets()
    })
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let presets = use_memo((), |_| load_presets());
    let timer = use_reducer(TimerState::default);

    // One-second tick while running
    {
        let dispatcher = timer.dispatcher();
        use_interval(
            timer.is_running(),
            TICK_INTERVAL_MS,
            Callback::from(move |_: ()| dispatcher.dispatch(TimerAction::Tick)),
        );
    }

    let clock = timer.clock();
    let phase_label = timer.phase().to_string();
    use_document_title(document_title(
        APP_TITLE,
        timer
            .is_configured()
            .then_some((clock.as_str(), phase_label.as_str())),
    ));

    let custom = {
        let dispatcher = timer.dispatcher();
        let parse: Rc<dyn Fn(&str) -> Result<CustomDuration, String>> =
            Rc::new(validate_custom_duration);
        use_validated_input(
            parse,
            Callback::from(move |value: CustomDuration| {
                dispatcher.dispatch(TimerAction::SetCustom(value.0))
            }),
        )
    };

    // A finished countdown leaves the field text in place; allow committing it again
    {
        let on_timer_configured = custom.on_timer_configured.clone();
        use_effect_with(timer.is_configured(), move |&configured| {
            on_timer_configured.emit(configured);
        });
    }

    let onselect = {
        let dispatcher = timer.dispatcher();
        let clear_custom = custom.clear.clone();
        Callback::from(move |preset: Preset| {
            clear_custom.emit(());
            dispatcher.dispatch(TimerAction::SelectPreset(preset));
        })
    };

    let ontoggle = {
        let dispatcher = timer.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TimerAction::Toggle))
    };

    let onreset = {
        let dispatcher = timer.dispatcher();
        let clear_custom = custom.clear.clone();
        Callback::from(move |_: ()| {
            clear_custom.emit(());
            dispatcher.dispatch(TimerAction::Reset);
        })
    };

    let phase = timer.phase();

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>
            <PresetSelector
                presets={presets.clone()}
                active={timer.active_preset().map(|id| AttrValue::from(id.to_string()))}
                {onselect}
            />
            <CustomDurationField
                text={AttrValue::from(custom.text.clone())}
                error={custom.error.clone().map(AttrValue::from)}
                placeholder={CUSTOM_DURATION_PLACEHOLDER}
                oninput={custom.on_text_input.clone()}
                oncommit={custom.on_commit.clone()}
                onkeydown={custom.on_keydown.clone()}
            />
            <ClockDisplay remaining_seconds={timer.remaining_seconds()} {phase} />
            <ProgressBar
                remaining_seconds={timer.remaining_seconds()}
                total_seconds={timer.total_seconds()}
            />
            <TimerControls {phase} {ontoggle} {onreset} />
            if phase == TimerPhase::Idle {
                <p class="hint">{ "Pick a preset or enter a duration to begin." }</p>
            }
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
