use dioxus::prelude::*;

/// Full-viewport loading spinner
#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "loading-indicator h-screen flex flex-col justify-center items-center",
            role: "status",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            p { class: "mt-4 text-gray-300", "Loading..." }
        }
    }
}
