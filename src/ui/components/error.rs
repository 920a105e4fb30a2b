use dioxus::prelude::*;

/// Alert box showing an error message verbatim
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "error-alert bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            role: "alert",
            p { "{message}" }
        }
    }
}
