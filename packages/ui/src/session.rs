//! Shop context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use shop::{OrderDraft, SessionService, ShopConfig};

use crate::notice::{NoticeState, Notices};
use crate::platform::{make_token_store, PlatformTokenStore};

/// The API client every view talks to.
pub type ShopClient = ApiClient<PlatformTokenStore>;

/// Text typed into the navbar search box; read by the catalog filter.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchQuery(pub Signal<String>);

/// Hand-off slot between the product page and the order flow.
///
/// The detail view fills it on "Place order"; the order view takes it once on
/// entry, so a reload of `/create-order` shows the empty-flow message.
#[derive(Clone, Copy, PartialEq)]
pub struct PendingOrder(pub Signal<Option<OrderDraft>>);

impl PendingOrder {
    pub fn put(&mut self, draft: OrderDraft) {
        self.0.set(Some(draft));
    }

    pub fn take(&mut self) -> Option<OrderDraft> {
        self.0.write().take()
    }
}

/// Get the session service. Writing to the signal (login/logout) re-renders
/// every component that reads it.
pub fn use_session() -> Signal<SessionService<PlatformTokenStore>> {
    use_context::<Signal<SessionService<PlatformTokenStore>>>()
}

pub fn use_api() -> ShopClient {
    use_context::<ShopClient>()
}

pub fn use_config() -> ShopConfig {
    use_context::<ShopConfig>()
}

pub fn use_search() -> Signal<String> {
    use_context::<SearchQuery>().0
}

pub fn use_pending_order() -> PendingOrder {
    use_context::<PendingOrder>()
}

/// The draft waiting in the hand-off slot when the calling component mounted.
///
/// The slot is read without subscribing during the first render and emptied
/// by an effect afterwards, so the provider's signal is never written while
/// the caller renders.
pub fn use_pending_draft() -> Option<OrderDraft> {
    let mut pending = use_pending_order();
    let draft = use_hook(move || pending.0.peek().clone());
    use_effect(move || {
        pending.take();
    });
    draft
}

/// Provider component that installs the shop context.
/// Wrap the router with this component.
///
/// The session service and the API client share one token store, so a token
/// written at login is the one the next request sends.
#[component]
pub fn ShopProvider(config: ShopConfig, children: Element) -> Element {
    let tokens = use_hook(|| make_token_store(&config));

    let client = tokens.clone();
    let client_config = config.clone();
    use_context_provider(move || ShopClient::from_config(&client_config, client));

    let session = use_signal(move || SessionService::new(tokens));
    use_context_provider(|| session);

    let notice_state = use_signal(NoticeState::default);
    let notice_duration = config.ui.notice_duration_ms;
    use_context_provider(move || Notices::new(notice_state, notice_duration));

    let search = use_signal(String::new);
    use_context_provider(|| SearchQuery(search));

    let pending = use_signal(|| None::<OrderDraft>);
    use_context_provider(|| PendingOrder(pending));

    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::ProductSnapshot;

    fn draft() -> OrderDraft {
        OrderDraft {
            product: ProductSnapshot {
                id: "p1".to_string(),
                name: "Ladies Watch".to_string(),
                category: "Watches".to_string(),
                description: String::new(),
                price: 1998.0,
                available_items: 4,
                image_url: String::new(),
            },
            quantity: Some(2),
        }
    }

    thread_local! {
        static SLOT: std::cell::Cell<Option<PendingOrder>> = const { std::cell::Cell::new(None) };
        static SEEN: std::cell::RefCell<Vec<Option<OrderDraft>>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    #[component]
    fn Harness() -> Element {
        let pending = use_signal(|| Some(draft()));
        let slot = use_context_provider(|| PendingOrder(pending));
        use_hook(move || SLOT.with(|s| s.set(Some(slot))));
        rsx! {
            OrderPage {}
        }
    }

    #[component]
    fn OrderPage() -> Element {
        let draft = use_pending_draft();
        SEEN.with(|seen| seen.borrow_mut().push(draft));
        rsx! {}
    }

    #[tokio::test]
    async fn test_pending_draft_is_taken_once() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + std::time::Duration::from_millis(50);
        while tokio::time::timeout_at(deadline, dom.wait_for_work()).await.is_ok() {
            dom.render_immediate_to_vec();
        }

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|d| d.as_ref() == Some(&draft())));

        let left = dom.in_runtime(|| SLOT.with(|s| s.get()).and_then(|slot| slot.0.peek().clone()));
        assert_eq!(left, None);
    }
}
