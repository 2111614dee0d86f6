use dioxus::prelude::*;
use shop::OrderStep;

/// Horizontal progress indicator for the order flow.
#[component]
pub fn OrderStepper(current: OrderStep) -> Element {
    rsx! {
        ol {
            class: "stepper",
            for step in OrderStep::ALL {
                li {
                    key: "{step.index()}",
                    class: step_class(step, current),
                    span { class: "stepper-index", "{step.index() + 1}" }
                    span { class: "stepper-label", "{step.label()}" }
                }
            }
        }
    }
}

fn step_class(step: OrderStep, current: OrderStep) -> &'static str {
    if step.index() < current.index() {
        "stepper-step done"
    } else if step == current {
        "stepper-step active"
    } else {
        "stepper-step"
    }
}
