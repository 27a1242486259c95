//! Shopper-side domain models.
//!
//! These live in the session, not in the catalog: the cart, wishlist, review
//! votes, flash notices and placed orders.

pub mod cart;
pub mod notice;
pub mod order;
pub mod session;
pub mod votes;
pub mod wishlist;

pub use cart::{Cart, CartLine, NewLine};
pub use notice::{Notice, NoticeAction, NoticeLevel};
pub use order::{OrderContact, OrderLine, PlacedOrder, generate_order_number};
pub use votes::{ReviewVotes, VoteDirection, VoteOutcome};
pub use wishlist::Wishlist;
