//! Transient toast notifications.
//!
//! Every auth operation and gateway call surfaces its outcome here. The
//! queue is bounded; pushing past the cap drops the oldest entry, and a
//! click dismisses a toast.

use leptos::prelude::*;

/// Most toasts kept on screen at once.
const MAX_TOASTS: usize = 4;

/// Visual level of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

/// One queued notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub level: ToastLevel,
}

/// Toast queue provided as context to the whole app.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

/// Creates the toast queue and provides it as context.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// Returns the toast queue from context.
///
/// Panics when called outside the app tree, which is a programming error.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

impl Toasts {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Queues a success toast.
    pub fn success(&self, title: impl Into<String>) {
        self.push(title.into(), ToastLevel::Success);
    }

    /// Queues an error toast.
    pub fn error(&self, title: impl Into<String>) {
        self.push(title.into(), ToastLevel::Error);
    }

    fn push(&self, title: String, level: ToastLevel) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.queue.update(|queue| {
            queue.push(Toast { id, title, level });
            if queue.len() > MAX_TOASTS {
                queue.remove(0);
            }
        });
    }

    /// Removes a toast by ID.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.retain(|toast| toast.id != id));
    }

    /// Snapshot of the queued toasts.
    pub fn entries(&self) -> Vec<Toast> {
        self.queue.get()
    }
}

/// Renders the queued toasts; clicking one dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .entries()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.level.css_class()
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {toast.title}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_queues_in_order() {
        let toasts = Toasts::new();
        toasts.success("first");
        toasts.error("second");

        let entries = toasts.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "first");
        assert_eq!(entries[0].level, ToastLevel::Success);
        assert_eq!(entries[1].title, "second");
        assert_eq!(entries[1].level, ToastLevel::Error);
    }

    #[test]
    fn queue_is_bounded() {
        let toasts = Toasts::new();
        for i in 0..10 {
            toasts.success(format!("toast {i}"));
        }

        let entries = toasts.entries();
        assert_eq!(entries.len(), MAX_TOASTS);
        // Oldest entries were dropped.
        assert_eq!(entries[0].title, "toast 6");
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let toasts = Toasts::new();
        toasts.success("keep");
        toasts.error("drop");

        let target = toasts.entries()[1].id;
        toasts.dismiss(target);

        let entries = toasts.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "keep");
    }

    #[test]
    fn ids_are_unique_across_drops() {
        let toasts = Toasts::new();
        toasts.success("a");
        let first = toasts.entries()[0].id;
        toasts.dismiss(first);
        toasts.success("b");

        assert_ne!(toasts.entries()[0].id, first);
    }
}
