use dioxus::prelude::*;

#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto p-6", {children} }
    }
}
