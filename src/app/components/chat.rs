//! Floating AI assistant widget.
//!
//! One launcher button, one panel, chat history kept in a signal for the
//! life of the page. Every send posts the full visible history; the
//! backend holds no conversation state.

use dioxus::prelude::*;

use crate::api::ai::{AiClient, ChatRole, ChatTurn};
use crate::app::hooks::use_auth;

#[component]
pub fn ChatWidget() -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);
    let mut history = use_signal(Vec::<ChatTurn>::new);
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let mut send = move |_: ()| {
        let text = draft().trim().to_string();
        if text.is_empty() || busy() {
            return;
        }
        draft.set(String::new());
        error.set(None);
        history.write().push(ChatTurn::user(text));
        busy.set(true);

        let token = auth.token();
        spawn(async move {
            match AiClient::new().generate(token.as_deref(), &history()).await {
                Ok(reply) => history.write().push(ChatTurn::assistant(reply)),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let messages: Vec<(&'static str, String)> = history()
        .iter()
        .map(|turn| {
            let class = match turn.role {
                ChatRole::User => "chat-msg chat-user",
                ChatRole::Assistant => "chat-msg chat-assistant",
            };
            (class, turn.text.clone())
        })
        .collect();
    let error_text = error().unwrap_or_default();

    rsx! {
        div { class: "chat-widget",
            if open() {
                div { class: "chat-panel", role: "log", aria_label: "Pavit assistant",
                    header { class: "chat-header",
                        strong { "Pavit assistant" }
                        button {
                            class: "btn btn-ghost btn-sm",
                            aria_label: "Close chat",
                            onclick: move |_| open.set(false),
                            "×"
                        }
                    }
                    div { class: "chat-history",
                        if messages.is_empty() {
                            p { class: "chat-empty",
                                "Ask about plans, device onboarding or alert rules."
                            }
                        }
                        for (class, text) in messages {
                            div { class: "{class}", "{text}" }
                        }
                        if busy() {
                            div { class: "chat-msg chat-assistant", aria_busy: "true", "..." }
                        }
                        if !error_text.is_empty() {
                            div { class: "chat-msg chat-error", "{error_text}" }
                        }
                    }
                    form {
                        class: "chat-compose",
                        onsubmit: move |e| {
                            e.prevent_default();
                            send(());
                        },
                        input {
                            r#type: "text",
                            placeholder: "Type a question",
                            value: "{draft}",
                            oninput: move |e| draft.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: busy(),
                            "Send"
                        }
                    }
                }
            } else {
                button {
                    class: "chat-launcher",
                    aria_label: "Open assistant",
                    onclick: move |_| open.set(true),
                    "Chat"
                }
            }
        }
    }
}
