//! App-wide toast notifications.
//!
//! Signal-backed stack with fire-and-forget semantics: pushing returns
//! immediately and the entry removes itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Info => "toast toast--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastLevel::Success => "check-circle",
            ToastLevel::Error => "x-circle",
            ToastLevel::Warning => "alert-circle",
            ToastLevel::Info => "alert-circle",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    title: String,
    description: Option<String>,
}

/// Centralized toast stack. Provide once at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, level: ToastLevel, title: &str, description: Option<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ToastEntry {
                id,
                level,
                title: title.to_string(),
                description,
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.close(id);
        });
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn success(&self, title: &str, description: impl Into<Option<String>>) {
        self.push(ToastLevel::Success, title, description.into());
    }

    pub fn error(&self, title: &str, description: impl Into<Option<String>>) {
        self.push(ToastLevel::Error, title, description.into());
    }

    pub fn warning(&self, title: &str, description: impl Into<Option<String>>) {
        self.push(ToastLevel::Warning, title, description.into());
    }

    pub fn info(&self, title: &str, description: impl Into<Option<String>>) {
        self.push(ToastLevel::Info, title, description.into());
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the toast stack.
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    view! {
                        <div class=entry.level.class()>
                            <span class="toast__icon">
                                {crate::shared::icons::icon(entry.level.icon_name())}
                            </span>
                            <div class="toast__body">
                                <div class="toast__title">{entry.title.clone()}</div>
                                {entry.description.clone().map(|d| view! {
                                    <div class="toast__description">{d}</div>
                                })}
                            </div>
                            <button
                                class="toast__close"
                                on:click=move |_| svc.close(id)
                                aria-label="Dismiss"
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
