use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub level: ToastLevel,
    pub content: String,
}

const MAX_STACKED: usize = 4;

/// Copyable handle to the global toast stack; anything holding it can push
/// user-facing notices.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    messages: Signal<Vec<ToastMessage>>,
    next_id: Signal<u64>,
}

pub fn use_toasts() -> Toasts {
    Toasts {
        messages: use_signal(Vec::new),
        next_id: use_signal(|| 0),
    }
}

impl Toasts {
    pub fn success(&self, content: impl Into<String>) {
        self.push(ToastLevel::Success, content.into());
    }

    pub fn error(&self, content: impl Into<String>) {
        self.push(ToastLevel::Error, content.into());
    }

    pub fn info(&self, content: impl Into<String>) {
        self.push(ToastLevel::Info, content.into());
    }

    fn push(&self, level: ToastLevel, content: String) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut messages = self.messages;
        let mut stack = messages.write();
        stack.push(ToastMessage { id, level, content });
        if stack.len() > MAX_STACKED {
            stack.remove(0);
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut messages = self.messages;
        messages.write().retain(|message| message.id != id);
    }

    fn snapshot(&self) -> Vec<ToastMessage> {
        self.messages.read().clone()
    }
}

/// Stacked notices in the top-right corner; click to dismiss.
#[component]
pub fn ToastHost(toasts: Toasts) -> Element {
    let stack = toasts.snapshot();

    rsx! {
        div {
            style: "position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;",
            {stack.into_iter().map(|message| {
                let (border, color) = match message.level {
                    ToastLevel::Success => ("#2d7a36", "#2d7a36"),
                    ToastLevel::Error => ("#c2373f", "#c2373f"),
                    ToastLevel::Info => ("#2a5ad9", "#333"),
                };
                let id = message.id;
                rsx!(
                    div {
                        style: "background: #fff; border: 1px solid {border}; border-left: 4px solid {border}; color: {color}; padding: 10px 14px; border-radius: 6px; box-shadow: 0 6px 16px rgba(0,0,0,0.12); max-width: 360px; cursor: pointer;",
                        onclick: move |_| toasts.dismiss(id),
                        "{message.content}"
                    }
                )
            })}
        }
    }
}
