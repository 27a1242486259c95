//! Session-stored shopper state.
//!
//! Everything a shopper accumulates (cart, wishlist, review votes, flash
//! notices, the last placed order) lives in the session under the keys
//! below. Handlers go through these helpers rather than touching keys.

use tower_sessions::Session;

use super::cart::Cart;
use super::notice::Notice;
use super::order::PlacedOrder;
use super::votes::ReviewVotes;
use super::wishlist::Wishlist;
use crate::state::AppState;

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Session keys for shopper data.
pub mod keys {
    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for wishlisted product handles.
    pub const WISHLIST: &str = "wishlist";

    /// Key for helpful / not-helpful review votes.
    pub const REVIEW_VOTES: &str = "review_votes";

    /// Key for flash notices shown on the next page render.
    pub const NOTICES: &str = "notices";

    /// Key for the most recently placed order.
    pub const LAST_ORDER: &str = "last_order";
}

/// Load the cart.
///
/// A session that has never stored a cart starts with the demo cart when
/// `SEED_DEMO_CART` is on. Nothing is written until the cart changes.
pub async fn load_cart(session: &Session, state: &AppState) -> SessionResult<Cart> {
    match session.get::<Cart>(keys::CART).await? {
        Some(cart) => Ok(cart),
        None if state.config().seed_demo_cart => Ok(Cart::demo(state.catalog())),
        None => Ok(Cart::default()),
    }
}

pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    session.insert(keys::CART, cart).await
}

pub async fn load_wishlist(session: &Session) -> SessionResult<Wishlist> {
    Ok(session
        .get::<Wishlist>(keys::WISHLIST)
        .await?
        .unwrap_or_default())
}

pub async fn save_wishlist(session: &Session, wishlist: &Wishlist) -> SessionResult<()> {
    session.insert(keys::WISHLIST, wishlist).await
}

pub async fn load_votes(session: &Session) -> SessionResult<ReviewVotes> {
    Ok(session
        .get::<ReviewVotes>(keys::REVIEW_VOTES)
        .await?
        .unwrap_or_default())
}

pub async fn save_votes(session: &Session, votes: &ReviewVotes) -> SessionResult<()> {
    session.insert(keys::REVIEW_VOTES, votes).await
}

/// Queue a notice for the next rendered page.
pub async fn push_notice(session: &Session, notice: Notice) -> SessionResult<()> {
    let mut notices = session
        .get::<Vec<Notice>>(keys::NOTICES)
        .await?
        .unwrap_or_default();
    notices.push(notice);
    session.insert(keys::NOTICES, notices).await
}

/// Take and clear all queued notices.
pub async fn take_notices(session: &Session) -> SessionResult<Vec<Notice>> {
    Ok(session
        .remove::<Vec<Notice>>(keys::NOTICES)
        .await?
        .unwrap_or_default())
}

pub async fn load_last_order(session: &Session) -> SessionResult<Option<PlacedOrder>> {
    session.get::<PlacedOrder>(keys::LAST_ORDER).await
}

pub async fn save_last_order(session: &Session, order: &PlacedOrder) -> SessionResult<()> {
    session.insert(keys::LAST_ORDER, order).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;
    use crate::config::StorefrontConfig;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn state(seed_demo_cart: bool) -> AppState {
        let config = StorefrontConfig {
            seed_demo_cart,
            ..StorefrontConfig::default()
        };
        AppState::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_new_session_gets_demo_cart() {
        let session = session();
        let cart = load_cart(&session, &state(true)).await.unwrap();
        assert_eq!(cart.lines().len(), 2);

        let cart = load_cart(&session, &state(false)).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_saved_empty_cart_is_not_reseeded() {
        let session = session();
        save_cart(&session, &Cart::default()).await.unwrap();
        let cart = load_cart(&session, &state(true)).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_notices_are_taken_once() {
        let session = session();
        push_notice(&session, Notice::success("Added")).await.unwrap();
        push_notice(&session, Notice::info("Heads up")).await.unwrap();

        let notices = take_notices(&session).await.unwrap();
        assert_eq!(notices.len(), 2);
        assert!(take_notices(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wishlist_defaults_to_empty() {
        let session = session();
        assert!(load_wishlist(&session).await.unwrap().is_empty());
        assert!(load_last_order(&session).await.unwrap().is_none());
    }
}
