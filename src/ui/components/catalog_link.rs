use crate::ui::Route;
use dioxus::prelude::*;

/// In-app link rendered as a plain anchor
///
/// The href is the route's path; clicks are handled by the router instead of
/// the webview. Unlike `Link`, rendering does not need a router in scope.
#[component]
pub fn CatalogLink(to: Route, #[props(default)] class: String, children: Element) -> Element {
    let href = to.to_string();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator().push(to.clone());
            },
            {children}
        }
    }
}
