use crate::types::{Author, Message};
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn ChatPanel(
    title: String,
    messages: Vec<Message>,
    loading: bool,
    input: String,
    on_close: EventHandler<()>,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bubblechat-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "{title}" }
                button {
                    class: "btn btn-ghost panel-close",
                    r#type: "button",
                    title: "Close chat",
                    aria_label: "Close chat",
                    onclick: move |_| on_close.call(()),
                    span { dangerous_inner_html: "&#10005;" }
                }
            }

            div { class: "panel-messages",
                for msg in messages.iter() {
                    MessageRow { key: "{msg.id}", text: msg.text.clone(), author: msg.author() }
                }
                if loading {
                    TypingIndicator {}
                }
                div { id: "bubblechat-end" }
            }

            div { class: "composer",
                div { class: "hstack",
                    input {
                        r#type: "text",
                        placeholder: "Type your message...",
                        value: "{input}",
                        disabled: loading,
                        oninput: move |ev| on_input.call(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                on_send.call(());
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| on_send.call(()),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(text: String, author: Author) -> Element {
    let side = author.css_class();
    rsx! {
        div { class: format_args!("message-row {side}"),
            if matches!(author, Author::Assistant) {
                span { class: "avatar assistant", dangerous_inner_html: "&#128640;" }
            }
            div { class: format_args!("bubble {side}"),
                p { "{text}" }
            }
            if matches!(author, Author::User) {
                span { class: "avatar user", dangerous_inner_html: "&#128100;" }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row assistant",
            div { class: "bubble assistant typing",
                span { class: "dot" }
                span { class: "dot" }
                span { class: "dot" }
            }
        }
    }
}
