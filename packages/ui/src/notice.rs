//! Transient notices (snackbar).
//!
//! One notice is visible at a time; showing a new one replaces the old. Each
//! notice hides itself after the configured duration unless a newer notice
//! has replaced it by then.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::platform::sleep_ms;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "snackbar success",
            NoticeLevel::Error => "snackbar error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    current: Option<Notice>,
    seq: u64,
}

impl NoticeState {
    /// Replace the visible notice. Returns the id to dismiss it with.
    pub fn show(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice {
            id: self.seq,
            level,
            message: message.into(),
        });
        self.seq
    }

    /// Hide notice `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Handle for showing notices from event handlers and spawned tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Notices {
    state: Signal<NoticeState>,
    duration_ms: u32,
}

impl Notices {
    pub fn new(state: Signal<NoticeState>, duration_ms: u32) -> Self {
        Self { state, duration_ms }
    }

    /// The hide timer runs in the root scope, so it still fires after the
    /// calling view has been unmounted by a navigation.
    pub fn show(&self, level: NoticeLevel, message: impl Into<String>) {
        let mut state = self.state;
        let id = state.write().show(level, message);
        let duration_ms = self.duration_ms;
        spawn_forever(async move {
            sleep_ms(duration_ms).await;
            state.write().dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.show(NoticeLevel::Error, message);
    }

    pub fn close(&self) {
        let mut state = self.state;
        let id = state.read().current().map(|n| n.id);
        if let Some(id) = id {
            state.write().dismiss(id);
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.state.read().current().cloned()
    }
}

pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

/// Renders the visible notice, if any, pinned to the top of the page.
#[component]
pub fn Snackbar() -> Element {
    let notices = use_notices();
    let Some(notice) = notices.current() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: notice.level.class(),
            role: "status",
            span { "{notice.message}" }
            button {
                class: "snackbar-close",
                onclick: move |_: MouseEvent| notices.close(),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut state = NoticeState::default();
        let first = state.show(NoticeLevel::Success, "one");
        let second = state.show(NoticeLevel::Error, "two");
        assert_ne!(first, second);
        assert_eq!(state.current().map(|n| n.message.as_str()), Some("two"));
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut state = NoticeState::default();
        let first = state.show(NoticeLevel::Success, "Product Watch added successfully");
        let second = state.show(NoticeLevel::Error, "later");

        state.dismiss(first);
        assert_eq!(state.current().map(|n| n.id), Some(second));

        state.dismiss(second);
        assert!(state.current().is_none());
    }

    thread_local! {
        static HANDLE: std::cell::Cell<Option<Notices>> = const { std::cell::Cell::new(None) };
    }

    #[component]
    fn Harness() -> Element {
        let state = use_signal(NoticeState::default);
        let notices = use_context_provider(|| Notices::new(state, 30));
        let mut mounted = use_signal(|| true);
        use_hook(move || {
            HANDLE.with(|h| h.set(Some(notices)));
            spawn(async move {
                sleep_ms(10).await;
                mounted.set(false);
            });
        });
        rsx! {
            if mounted() {
                Announcer {}
            }
        }
    }

    #[component]
    fn Announcer() -> Element {
        let notices = use_notices();
        use_effect(move || notices.success("Order placed successfully!"));
        rsx! {}
    }

    #[tokio::test]
    async fn test_notice_hides_after_caller_unmounts() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + std::time::Duration::from_millis(200);
        while tokio::time::timeout_at(deadline, dom.wait_for_work()).await.is_ok() {
            dom.render_immediate_to_vec();
        }

        let shown = dom.in_runtime(|| {
            HANDLE
                .with(|h| h.get())
                .map(|notices| notices.state.peek().seq)
        });
        assert_eq!(shown, Some(1));
        let current = dom.in_runtime(|| HANDLE.with(|h| h.get()).and_then(|n| n.current()));
        assert_eq!(current, None);
    }
}
