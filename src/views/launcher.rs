use dioxus::prelude::*;

#[component]
pub fn Launcher(on_open: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "bubblechat-launcher",
            r#type: "button",
            title: "Open chat",
            aria_label: "Open chat",
            onclick: move |_| on_open.call(()),
            span { class: "launcher-icon", dangerous_inner_html: "&#128172;" }
        }
    }
}
