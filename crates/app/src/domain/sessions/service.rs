//! Sessions service.
//!
//! Each operation runs a strictly sequential chain of remote calls and
//! republishes the full item list afterwards, so the local state always
//! reflects what the store returned rather than an in-memory guess. No
//! locks are held across await points; the remote store only guarantees
//! per-row atomicity and partial completion is possible on any multi-step
//! operation.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::{
    domain::{
        carts::{records::CartStatus, repository::RestCartsRepository},
        orders::{
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
            repository::RestOrdersRepository,
        },
        products::repository::RestProductsRepository,
        sessions::{
            data::{ItemQuantityPatch, SessionCompletion},
            errors::SessionsServiceError,
            records::{
                SessionItemRecord, SessionItemUuid, SessionRecord, SessionStatus, SessionUuid,
            },
            repositories::{RestSessionItemsRepository, RestSessionsRepository},
            state::SessionState,
        },
        users::{records::UserRecord, repository::RestUsersRepository},
    },
    store::{RowStore, RowStoreError},
};

/// Origin tag written on item rows scanned through this client.
const SCANNED_BY: &str = "customer";

/// Name recorded on an order item when the product row is gone by checkout
/// time.
const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Terminal payment and order state written at checkout.
const COMPLETED: &str = "completed";

#[derive(Clone)]
pub struct RestSessionsService {
    store: Arc<dyn RowStore>,
    state: Arc<SessionState>,
    carts: RestCartsRepository,
    products: RestProductsRepository,
    sessions: RestSessionsRepository,
    items: RestSessionItemsRepository,
    orders: RestOrdersRepository,
    users: RestUsersRepository,
}

impl RestSessionsService {
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>, state: Arc<SessionState>) -> Self {
        Self {
            store,
            state,
            carts: RestCartsRepository::new(),
            products: RestProductsRepository::new(),
            sessions: RestSessionsRepository::new(),
            items: RestSessionItemsRepository::new(),
            orders: RestOrdersRepository::new(),
            users: RestUsersRepository::new(),
        }
    }

    /// Make sure a user row exists for `user_id`, creating a guest record
    /// when absent. Failures are logged and never abort the caller.
    async fn ensure_user(&self, user_id: &str) {
        let result = async {
            if self.users.find(self.store.as_ref(), user_id).await?.is_some() {
                return Ok::<bool, RowStoreError>(false);
            }

            let user = UserRecord {
                user_id: user_id.to_string(),
                email: format!("{user_id}@guest.local"),
                name: "Guest User".to_string(),
                phone: None,
            };

            self.users.create(self.store.as_ref(), &user).await?;

            Ok(true)
        }
        .await;

        match result {
            Ok(true) => tracing::debug!(user = user_id, "created guest user record"),
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(user = user_id, %error, "could not ensure user record");
            }
        }
    }

    /// Re-read the item rows for `session` and republish them, so readers
    /// observe what the store actually holds rather than an in-memory
    /// guess. A failed re-read keeps the previous snapshot; the write that
    /// preceded it already happened.
    async fn reload_items(&self, session: SessionUuid) {
        match self
            .items
            .list_for_session(self.store.as_ref(), session)
            .await
        {
            Ok(items) => self.state.set_items(items),
            Err(error) => {
                tracing::warn!(session = %session, %error, "failed to reload session items");
            }
        }
    }
}

#[async_trait]
impl SessionsService for RestSessionsService {
    async fn start_session(
        &self,
        cart_code: &str,
        user_id: &str,
    ) -> Result<SessionRecord, SessionsServiceError> {
        if self.state.session().is_some() {
            return Err(SessionsServiceError::SessionAlreadyActive);
        }

        self.ensure_user(user_id).await;

        let cart = self
            .carts
            .find_by_code(self.store.as_ref(), cart_code)
            .await?
            .ok_or(SessionsServiceError::CartNotFound)?;

        if cart.status != CartStatus::Available {
            return Err(SessionsServiceError::CartUnavailable);
        }

        let session = SessionRecord {
            session_id: SessionUuid::random(),
            cart_id: cart.cart_id.clone(),
            user_id: user_id.to_string(),
            status: SessionStatus::Active,
            started_at: Timestamp::now(),
            completed_at: None,
            total_amount: Decimal::ZERO,
        };

        self.sessions.create(self.store.as_ref(), &session).await?;

        // The availability check and the claim are separate requests; two
        // clients can both pass the check before either patches the row.
        self.carts
            .set_status(self.store.as_ref(), cart_code, CartStatus::InUse)
            .await?;

        self.state.set_session(session.clone());
        self.reload_items(session.session_id).await;

        tracing::info!(session = %session.session_id, cart = cart_code, "shopping session started");

        Ok(session)
    }

    async fn add_item(
        &self,
        barcode: &str,
        session: SessionUuid,
    ) -> Result<SessionItemRecord, SessionsServiceError> {
        if self.state.session().is_none() {
            return Err(SessionsServiceError::NoActiveSession);
        }

        let product = self
            .products
            .find_by_barcode(self.store.as_ref(), barcode)
            .await?
            .ok_or(SessionsServiceError::ProductNotFound)?;

        let existing = self
            .items
            .find_for_barcode(self.store.as_ref(), session, barcode)
            .await?;

        let item = if let Some(mut item) = existing {
            item.quantity += 1;
            item.total_price = Decimal::from(item.quantity) * item.unit_price;

            let patch = ItemQuantityPatch {
                quantity: item.quantity,
                total_price: item.total_price,
            };
            self.items
                .set_quantity(self.store.as_ref(), item.item_id, &patch)
                .await?;

            tracing::debug!(item = %item.item_id, quantity = item.quantity, "merged repeat scan");

            item
        } else {
            let item = SessionItemRecord {
                item_id: SessionItemUuid::random(),
                session_id: session,
                product_id: product.product_id.clone(),
                barcode: barcode.to_string(),
                quantity: 1,
                unit_price: product.price,
                total_price: product.price,
                scanned_by: SCANNED_BY.to_string(),
            };

            self.items.create(self.store.as_ref(), &item).await?;

            tracing::debug!(item = %item.item_id, product = %product.product_id, "added item");

            item
        };

        self.reload_items(session).await;

        Ok(item)
    }

    async fn update_quantity(
        &self,
        item: SessionItemUuid,
        quantity: u32,
    ) -> Result<(), SessionsServiceError> {
        if self.state.session().is_none() {
            return Err(SessionsServiceError::NoActiveSession);
        }

        // Quantity zero is a removal, so item rows never hold a
        // non-positive count.
        if quantity == 0 {
            return self.remove_item(item).await;
        }

        let Some(existing) = self.items.find_by_id(self.store.as_ref(), item).await? else {
            tracing::debug!(item = %item, "quantity update for unknown item ignored");
            return Ok(());
        };

        let patch = ItemQuantityPatch {
            quantity,
            total_price: Decimal::from(quantity) * existing.unit_price,
        };
        self.items
            .set_quantity(self.store.as_ref(), item, &patch)
            .await?;

        self.reload_items(existing.session_id).await;

        Ok(())
    }

    async fn remove_item(&self, item: SessionItemUuid) -> Result<(), SessionsServiceError> {
        if self.state.session().is_none() {
            return Err(SessionsServiceError::NoActiveSession);
        }

        let existing = self.items.find_by_id(self.store.as_ref(), item).await?;

        self.items.delete(self.store.as_ref(), item).await?;

        if let Some(existing) = existing {
            self.reload_items(existing.session_id).await;
        }

        Ok(())
    }

    async fn checkout(
        &self,
        session: SessionUuid,
        payment_method: &str,
        discount: Decimal,
    ) -> Result<OrderRecord, SessionsServiceError> {
        let Some(current) = self.state.session() else {
            return Err(SessionsServiceError::NoActiveSession);
        };

        // Totals come from the snapshot taken here; rows written after
        // this point are not part of the order.
        let items = self.state.items();
        let total_amount: Decimal = items.iter().map(|item| item.total_price).sum();
        let final_amount = total_amount - discount;

        let order = OrderRecord {
            order_id: OrderUuid::random(),
            session_id: session,
            user_id: current.user_id.clone(),
            total_amount,
            discount_amount: discount,
            final_amount,
            payment_method: payment_method.to_string(),
            payment_status: COMPLETED.to_string(),
            order_status: COMPLETED.to_string(),
        };

        // Ordered, non-atomic writes: the order first (a failure here
        // changes nothing), its items next, then session completion and
        // cart release. A crash mid-sequence leaves recoverable partial
        // state, never a corrupt session.
        self.orders.create_order(self.store.as_ref(), &order).await?;

        for item in &items {
            let product = match self
                .products
                .find_by_id(self.store.as_ref(), &item.product_id)
                .await
            {
                Ok(product) => product,
                Err(error) => {
                    tracing::warn!(
                        product = %item.product_id,
                        %error,
                        "product lookup failed during checkout"
                    );
                    None
                }
            };

            let order_item = OrderItemRecord {
                order_item_id: OrderItemUuid::random(),
                order_id: order.order_id,
                product_id: item.product_id.clone(),
                product_name: product
                    .as_ref()
                    .map_or_else(|| UNKNOWN_PRODUCT_NAME.to_string(), |p| p.name.clone()),
                barcode: item.barcode.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                total_price: item.total_price,
                category: product.and_then(|p| p.category),
            };

            self.orders
                .create_order_item(self.store.as_ref(), &order_item)
                .await?;
        }

        let completion = SessionCompletion {
            status: SessionStatus::Completed,
            completed_at: Timestamp::now(),
            total_amount,
        };
        self.sessions
            .complete(self.store.as_ref(), session, &completion)
            .await?;

        self.carts
            .set_status(self.store.as_ref(), &current.cart_id, CartStatus::Available)
            .await?;

        self.state.clear();

        tracing::info!(order = %order.order_id, %final_amount, "checkout completed");

        Ok(order)
    }

    fn current_session(&self) -> Option<SessionRecord> {
        self.state.session()
    }

    fn current_items(&self) -> Vec<SessionItemRecord> {
        self.state.items()
    }

    fn watch_session(&self) -> watch::Receiver<Option<SessionRecord>> {
        self.state.watch_session()
    }

    fn watch_items(&self) -> watch::Receiver<Vec<SessionItemRecord>> {
        self.state.watch_items()
    }
}

#[automock]
#[async_trait]
pub trait SessionsService: Send + Sync {
    /// Claim an available cart and open a new active session on it.
    async fn start_session(
        &self,
        cart_code: &str,
        user_id: &str,
    ) -> Result<SessionRecord, SessionsServiceError>;

    /// Record one scan of `barcode`: a new line item on first scan, a
    /// quantity increment on every repeat.
    async fn add_item(
        &self,
        barcode: &str,
        session: SessionUuid,
    ) -> Result<SessionItemRecord, SessionsServiceError>;

    /// Set an item's quantity; zero removes the item.
    async fn update_quantity(
        &self,
        item: SessionItemUuid,
        quantity: u32,
    ) -> Result<(), SessionsServiceError>;

    /// Delete a line item.
    async fn remove_item(&self, item: SessionItemUuid) -> Result<(), SessionsServiceError>;

    /// Freeze the session into an order, complete it and release the cart.
    async fn checkout(
        &self,
        session: SessionUuid,
        payment_method: &str,
        discount: Decimal,
    ) -> Result<OrderRecord, SessionsServiceError>;

    /// The session currently held by this process, if any.
    fn current_session(&self) -> Option<SessionRecord>;

    /// Snapshot of the current line items.
    fn current_items(&self) -> Vec<SessionItemRecord>;

    /// Subscribe to session changes; the latest value is replayed.
    fn watch_session(&self) -> watch::Receiver<Option<SessionRecord>>;

    /// Subscribe to item-list changes; the latest value is replayed.
    fn watch_items(&self) -> watch::Receiver<Vec<SessionItemRecord>>;
}
