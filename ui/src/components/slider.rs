use dioxus::prelude::*;

use crate::core::config::SliderSpec;

/// Integer range input bound to a [`SliderSpec`]. Emits clamped values only.
#[component]
pub fn RangeSlider(
    id: String,
    label: String,
    spec: SliderSpec,
    value: u32,
    on_change: EventHandler<u32>,
) -> Element {
    let on_input = move |evt: FormEvent| {
        if let Ok(raw) = evt.value().trim().parse::<u32>() {
            on_change.call(spec.clamp(raw));
        }
    };

    rsx! {
        div { class: "slider",
            div { class: "slider__header",
                label { class: "slider__label", r#for: "{id}", "{label}" }
                output { class: "slider__value", "{value}" }
            }
            input {
                id: "{id}",
                class: "slider__input",
                r#type: "range",
                min: "{spec.min}",
                max: "{spec.max}",
                step: "{spec.step}",
                value: "{value}",
                oninput: on_input,
            }
            div { class: "slider__bounds",
                span { "{spec.min}" }
                span { "{spec.max}" }
            }
        }
    }
}
