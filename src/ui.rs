use crate::client::{ChatBackend, HttpBackend, dispatch};
use crate::config::WidgetConfig;
use crate::history::ChatHistory;
use crate::session::{ChatSession, SubmitOutcome};
use crate::storage::default_store;
use crate::views::{ChatPanel, Launcher};
use dioxus::prelude::*;
use std::rc::Rc;

const WIDGET_CSS: Asset = asset!("/assets/bubblechat.css");
const SCROLL_TO_END_JS: &str = r#"
setTimeout(() => {
    const end = document.getElementById('bubblechat-end');
    if (end) end.scrollIntoView({ behavior: 'smooth' });
}, 100);
"#;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        WidgetConfig::load().unwrap_or_else(|err| {
            tracing::error!("invalid widget config, using defaults: {err}");
            WidgetConfig::default()
        })
    });

    rsx! {
        BubbleChat { config }
    }
}

/// Floating chat widget anchored to the bottom-right corner of the host page.
#[component]
pub fn BubbleChat(config: WidgetConfig) -> Element {
    let storage_key = config.storage_key.clone();
    let mut session =
        use_signal(move || ChatSession::restore(ChatHistory::new(default_store(), storage_key)));
    let backend_config = config.clone();
    let backend = use_hook(move || build_backend(&backend_config));

    use_scroll_to_end(session);

    // Reply tasks are owned by this scope, so they are dropped if the widget unmounts.
    let on_send = use_callback(move |()| {
        let outcome = session.with_mut(|chat| chat.submit());
        if let SubmitOutcome::Dispatch(pending) = outcome {
            let backend = backend.clone();
            spawn(async move {
                let reply = dispatch(backend.as_ref(), &pending.query).await;
                session.with_mut(|chat| chat.settle(&pending, reply));
            });
        }
    });

    let chat = session.read();
    let is_open = chat.is_open();
    let messages = chat.messages().to_vec();
    let loading = chat.is_loading();
    let input = chat.input().to_string();
    drop(chat);

    rsx! {
        document::Link { rel: "stylesheet", href: WIDGET_CSS }
        div { class: "bubblechat",
            if is_open {
                ChatPanel {
                    title: config.title.clone(),
                    messages,
                    loading,
                    input,
                    on_close: move |_| session.with_mut(|chat| chat.close()),
                    on_input: move |text: String| session.with_mut(|chat| chat.set_input(text)),
                    on_send,
                }
            } else {
                Launcher { on_open: move |_| session.with_mut(|chat| chat.open()) }
            }
        }
    }
}

fn build_backend(config: &WidgetConfig) -> Rc<dyn ChatBackend> {
    match HttpBackend::from_config(config) {
        Ok(backend) => Rc::new(backend),
        Err(err) => {
            tracing::warn!("falling back to default http client: {err}");
            Rc::new(HttpBackend::new(config.endpoint.clone()))
        }
    }
}

fn use_scroll_to_end(session: Signal<ChatSession>) {
    use_effect(move || {
        let chat = session.read();
        if chat.is_open() {
            let _ = document::eval(SCROLL_TO_END_JS);
        }
    });
}
