//! Vectorization parameter controls.
//!
//! Renders a slider for each numeric parameter and a color picker for
//! each color. Sliders report on every `input` event so their value
//! label tracks the thumb; color pickers report on `change`, once the
//! picker closes.
//!
//! Controls report the raw value of the one field that changed. The
//! owner applies it to its live parameters, so two controls firing
//! before the next render do not overwrite each other.

use dioxus::prelude::*;
use svgtrace_protocol::{ParamField, TraceParams};

/// Props for the [`ParamControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ParamControlsProps {
    /// Current parameters (read-only).
    params: TraceParams,
    /// Fired with the changed field and its raw control value.
    on_change: EventHandler<(ParamField, String)>,
}

/// Renders all parameter controls.
#[component]
pub fn ParamControls(props: ParamControlsProps) -> Element {
    let params = &props.params;
    let on_change = props.on_change;

    rsx! {
        div { class: "controls",
            for field in ParamField::SLIDERS {
                {render_slider(field, params, on_change)}
            }
            for field in ParamField::COLORS {
                {render_color(field, params, on_change)}
            }
        }
    }
}

/// Render a labeled range slider with its value label.
fn render_slider(
    field: ParamField,
    params: &TraceParams,
    on_change: EventHandler<(ParamField, String)>,
) -> Element {
    let (Some(spec), Some(value)) = (field.slider(), params.slider_value(field)) else {
        return rsx! {};
    };
    let id = field.form_name();
    let label = field.label();
    let description = field.description();
    let display = params.display_value(field);
    let (min, max, step) = (spec.min, spec.max, spec.step);

    rsx! {
        div { class: "control",
            div { class: "control-header",
                label { r#for: "{id}", "{label}" }
                span { id: "{id}Value", class: "control-value", "{display}" }
            }
            p { class: "control-help", "{description}" }
            input {
                r#type: "range",
                id: "{id}",
                name: "{id}",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |e| on_change.call((field, e.value())),
            }
        }
    }
}

/// Render a labeled color picker.
fn render_color(
    field: ParamField,
    params: &TraceParams,
    on_change: EventHandler<(ParamField, String)>,
) -> Element {
    let id = field.form_name();
    let label = field.label();
    let description = field.description();
    let value = params.form_value(field);

    rsx! {
        div { class: "control",
            div { class: "control-header",
                label { r#for: "{id}", "{label}" }
                input {
                    r#type: "color",
                    id: "{id}",
                    name: "{id}",
                    value: "{value}",
                    onchange: move |e| on_change.call((field, e.value())),
                }
            }
            p { class: "control-help", "{description}" }
        }
    }
}
