//! Cart Client
//!
//! Every operation makes one request against the cart API; the server is the
//! source of truth. Successful mutations refresh the badge from a fresh
//! fetch. Failures never reach the caller: they become an error toast and a
//! `false` / empty return.

use leptos_notify::Notifier;
use serde::Serialize;

use crate::api::{self, ApiReply, ApiRequest, CartTransport, Method};
use crate::badge::{badge_count, BadgeSink};
use crate::error::CartError;
use crate::models::{AddToCart, CartIdArgs, CartItem, CartResponse, UpdateCartArgs};

const ADDED_MESSAGE: &str = "Added to cart successfully!";

pub struct CartClient<T, N, B> {
    transport: T,
    notifier: N,
    badge: B,
}

impl<T, N, B> CartClient<T, N, B>
where
    T: CartTransport,
    N: Notifier,
    B: BadgeSink,
{
    pub fn new(transport: T, notifier: N, badge: B) -> Self {
        Self {
            transport,
            notifier,
            badge,
        }
    }

    pub async fn add(&self, request: &AddToCart) -> bool {
        log::info!(
            "adding product {} x{} (variant {:?}, color {:?}, size {:?})",
            request.product_id,
            request.quantity,
            request.variant_id,
            request.color,
            request.size
        );
        match self.post(api::ADD_PATH, Some(request)).await {
            Ok(_) => {
                self.update_badge().await;
                self.notifier.notify_success(ADDED_MESSAGE);
                true
            }
            Err(err) => self.fail("Failed to add to cart", err),
        }
    }

    /// Current cart lines; empty on failure
    pub async fn get(&self) -> Vec<CartItem> {
        match self.fetch_items().await {
            Ok(items) => items,
            Err(err) => {
                self.fail("Failed to load cart", err);
                Vec::new()
            }
        }
    }

    /// Set a line's quantity; zero is passed through for the server to handle
    pub async fn update(&self, cart_id: u32, quantity: u32) -> bool {
        log::info!("updating cart line {} to quantity {}", cart_id, quantity);
        let args = UpdateCartArgs { cart_id, quantity };
        self.mutate(api::UPDATE_PATH, Some(&args), "Failed to update cart").await
    }

    pub async fn remove(&self, cart_id: u32) -> bool {
        log::info!("removing cart line {}", cart_id);
        self.mutate(api::REMOVE_PATH, Some(&CartIdArgs { cart_id }), "Failed to remove item")
            .await
    }

    pub async fn clear(&self) -> bool {
        log::info!("clearing cart");
        self.mutate::<()>(api::CLEAR_PATH, None, "Failed to clear cart").await
    }

    /// Recompute the badge from a fresh fetch. On failure the badge keeps its
    /// previous value and `None` is returned.
    pub async fn update_badge(&self) -> Option<u32> {
        match self.fetch_items().await {
            Ok(items) => {
                let count = badge_count(&items);
                log::debug!("badge count {} from {} lines", count, items.len());
                self.badge.set_count(count);
                Some(count)
            }
            Err(err) => {
                log::warn!("badge refresh failed: {}", err);
                None
            }
        }
    }

    /// Display total of the freshly fetched cart
    pub async fn get_total(&self) -> f64 {
        cart_total(&self.get().await)
    }

    async fn mutate<A: Serialize>(&self, path: &'static str, args: Option<&A>, action: &str) -> bool {
        match self.post(path, args).await {
            Ok(_) => {
                self.update_badge().await;
                true
            }
            Err(err) => self.fail(action, err),
        }
    }

    async fn fetch_items(&self) -> Result<Vec<CartItem>, CartError> {
        let request = ApiRequest {
            method: Method::Get,
            path: api::GET_PATH,
            body: None,
        };
        let response = self.call(request).await?;
        let items = response.items.unwrap_or_default();
        log::debug!("fetched {} cart lines", items.len());
        Ok(items)
    }

    async fn post<A: Serialize>(&self, path: &'static str, args: Option<&A>) -> Result<CartResponse, CartError> {
        let body = args
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| CartError::Parse(e.to_string()))?;
        self.call(ApiRequest {
            method: Method::Post,
            path,
            body,
        })
        .await
    }

    async fn call(&self, request: ApiRequest) -> Result<CartResponse, CartError> {
        let path = request.path;
        let reply = self.transport.send(request).await?;
        log::debug!("{} -> {}", path, reply.status);
        parse_reply(&reply)
    }

    fn fail(&self, action: &str, err: CartError) -> bool {
        log::error!("{}: {}", action, err);
        self.notifier.notify_error(&err.user_message(action));
        false
    }
}

/// Interpret a reply: non-2xx and `success: false` are server errors, a
/// 2xx body that is not the cart envelope is a parse error.
pub fn parse_reply(reply: &ApiReply) -> Result<CartResponse, CartError> {
    let parsed = serde_json::from_str::<CartResponse>(&reply.body);
    if !reply.is_ok() {
        let message = parsed.ok().and_then(|r| r.error.or(r.message));
        return Err(CartError::Server {
            status: Some(reply.status),
            message,
        });
    }
    let response = parsed.map_err(|e| CartError::Parse(e.to_string()))?;
    if !response.success {
        return Err(CartError::Server {
            status: None,
            message: response.error.or(response.message),
        });
    }
    Ok(response)
}

/// Σ price × quantity; a display figure, not authoritative money
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use leptos_notify::NotificationKind;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeTransport {
        replies: Rc<RefCell<VecDeque<Result<ApiReply, CartError>>>>,
        requests: Rc<RefCell<Vec<ApiRequest>>>,
    }

    impl FakeTransport {
        fn reply(&self, status: u16, body: &str) -> &Self {
            self.replies.borrow_mut().push_back(Ok(ApiReply {
                status,
                body: body.to_string(),
            }));
            self
        }

        fn fail(&self, err: CartError) -> &Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        fn paths(&self) -> Vec<(Method, &'static str)> {
            self.requests.borrow().iter().map(|r| (r.method, r.path)).collect()
        }

        fn body(&self, index: usize) -> serde_json::Value {
            let requests = self.requests.borrow();
            serde_json::from_str(requests[index].body.as_deref().unwrap()).unwrap()
        }
    }

    #[async_trait(?Send)]
    impl CartTransport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiReply, CartError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(CartError::Network("no scripted reply".into())))
        }
    }

    #[derive(Clone, Default)]
    struct FakeNotifier {
        shown: Rc<RefCell<Vec<(NotificationKind, String)>>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.shown.borrow_mut().push((kind, message.to_string()));
        }
    }

    #[derive(Clone, Default)]
    struct FakeBadge {
        writes: Rc<RefCell<Vec<u32>>>,
    }

    impl BadgeSink for FakeBadge {
        fn set_count(&self, count: u32) {
            self.writes.borrow_mut().push(count);
        }
    }

    fn client() -> (CartClient<FakeTransport, FakeNotifier, FakeBadge>, FakeTransport, FakeNotifier, FakeBadge) {
        let transport = FakeTransport::default();
        let notifier = FakeNotifier::default();
        let badge = FakeBadge::default();
        let client = CartClient::new(transport.clone(), notifier.clone(), badge.clone());
        (client, transport, notifier, badge)
    }

    const TWO_LINES: &str = r#"{"success": true, "items": [
        {"cart_id": 1, "product_id": 10, "quantity": 2, "price": 10, "name": "Tee"},
        {"cart_id": 2, "product_id": 11, "quantity": 1, "price": "5.00", "name": "Cap"}
    ]}"#;

    #[test]
    fn test_add_refreshes_badge_once_from_fresh_get() {
        let (cart, transport, notifier, badge) = client();
        transport.reply(200, r#"{"success": true}"#).reply(200, TWO_LINES);

        let request = AddToCart::new(10, 2).variant(Some(5), Some("Black".into()), Some("L".into()));
        assert!(block_on(cart.add(&request)));

        assert_eq!(
            transport.paths(),
            vec![(Method::Post, api::ADD_PATH), (Method::Get, api::GET_PATH)]
        );
        assert_eq!(
            transport.body(0),
            serde_json::json!({"product_id": 10, "quantity": 2, "variant_id": 5, "color": "Black", "size": "L"})
        );
        assert_eq!(*badge.writes.borrow(), vec![3]);
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Success, ADDED_MESSAGE.to_string())]
        );
    }

    #[test]
    fn test_add_out_of_stock_leaves_badge() {
        let (cart, transport, notifier, badge) = client();
        transport.reply(200, r#"{"success": false, "error": "Out of stock"}"#);

        assert!(!block_on(cart.add(&AddToCart::new(10, 1))));

        assert_eq!(transport.paths().len(), 1);
        assert!(badge.writes.borrow().is_empty());
        let shown = notifier.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, NotificationKind::Error);
        assert!(shown[0].1.contains("Out of stock"));
    }

    #[test]
    fn test_add_http_error_prefixes_action() {
        let (cart, transport, notifier, _badge) = client();
        transport.reply(400, r#"{"success": false, "error": "Out of stock"}"#);

        assert!(!block_on(cart.add(&AddToCart::new(10, 1))));
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Error, "Failed to add to cart: Out of stock".to_string())]
        );
    }

    #[test]
    fn test_add_network_failure() {
        let (cart, transport, notifier, badge) = client();
        transport.fail(CartError::Network("TypeError: Failed to fetch".into()));

        assert!(!block_on(cart.add(&AddToCart::new(10, 1))));
        assert!(badge.writes.borrow().is_empty());
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Error, "Network error. Please try again.".to_string())]
        );
    }

    #[test]
    fn test_add_unparseable_body() {
        let (cart, transport, notifier, _badge) = client();
        transport.reply(200, "<html>Login</html>");

        assert!(!block_on(cart.add(&AddToCart::new(10, 1))));
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Error, "Failed to add to cart".to_string())]
        );
    }

    #[test]
    fn test_add_succeeds_even_if_badge_refresh_fails() {
        let (cart, transport, notifier, badge) = client();
        transport.reply(200, r#"{"success": true}"#).reply(500, "");

        assert!(block_on(cart.add(&AddToCart::new(10, 1))));
        assert!(badge.writes.borrow().is_empty());
        assert_eq!(notifier.shown.borrow().len(), 1);
        assert_eq!(notifier.shown.borrow()[0].0, NotificationKind::Success);
    }

    #[test]
    fn test_get_total() {
        let (cart, transport, _notifier, _badge) = client();
        transport.reply(200, TWO_LINES);
        assert_eq!(block_on(cart.get_total()), 25.0);
    }

    #[test]
    fn test_get_failure_returns_empty_and_notifies() {
        let (cart, transport, notifier, _badge) = client();
        transport.reply(401, r#"{"success": false, "error": "Please log in"}"#);

        assert!(block_on(cart.get()).is_empty());
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Error, "Failed to load cart: Please log in".to_string())]
        );
    }

    #[test]
    fn test_get_without_items_field() {
        let (cart, transport, notifier, _badge) = client();
        transport.reply(200, r#"{"success": true}"#);
        assert!(block_on(cart.get()).is_empty());
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn test_update_refreshes_badge_without_toast() {
        let (cart, transport, notifier, badge) = client();
        transport.reply(200, r#"{"success": true}"#).reply(200, TWO_LINES);

        assert!(block_on(cart.update(1, 0)));
        assert_eq!(transport.body(0), serde_json::json!({"cart_id": 1, "quantity": 0}));
        assert_eq!(*badge.writes.borrow(), vec![3]);
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn test_remove_and_clear_requests() {
        let (cart, transport, _notifier, badge) = client();
        transport
            .reply(200, r#"{"success": true}"#)
            .reply(200, TWO_LINES)
            .reply(200, r#"{"success": true}"#)
            .reply(200, r#"{"success": true, "items": []}"#);

        assert!(block_on(cart.remove(2)));
        assert!(block_on(cart.clear()));

        assert_eq!(transport.body(0), serde_json::json!({"cart_id": 2}));
        let requests = transport.requests.borrow();
        assert_eq!(requests[2].path, api::CLEAR_PATH);
        assert_eq!(requests[2].body, None);
        assert_eq!(*badge.writes.borrow(), vec![3, 0]);
    }

    #[test]
    fn test_failed_mutation_notifies() {
        let (cart, transport, notifier, badge) = client();
        transport.reply(200, r#"{"success": false}"#);

        assert!(!block_on(cart.remove(9)));
        assert!(badge.writes.borrow().is_empty());
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(NotificationKind::Error, "Failed to remove item".to_string())]
        );
    }

    #[test]
    fn test_update_badge_failure_is_silent() {
        let (cart, transport, notifier, badge) = client();
        transport.fail(CartError::Network("offline".into()));

        assert_eq!(block_on(cart.update_badge()), None);
        assert!(badge.writes.borrow().is_empty());
        assert!(notifier.shown.borrow().is_empty());
    }
}
