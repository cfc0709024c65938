//! View Snapshot
//!
//! The renderable description of the session: what screen is active, what
//! it shows, and which workflow step (if any) is running. Hosts pull a
//! fresh [`ViewState`] after each processed event or tick and render it
//! however they like - the core performs no I/O and makes no layout
//! decisions.
//!
//! Everything here is `Serialize`, so a headless host can also ship
//! snapshots over a wire as JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::cart::CartItem;
use crate::catalog::Product;
use crate::workflow::checkout::CheckoutState;
use crate::workflow::login::LoginState;

/// A full renderable snapshot of the session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewState {
    /// Whether the session is still running
    pub running: bool,
    /// The active screen and its contents
    pub screen: ScreenView,
}

/// The active screen, with everything a renderer needs for it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ScreenView {
    /// Transient welcome banner
    Welcome,
    /// Main menu
    Menu {
        /// Total units in the cart (for the badge)
        cart_items: u32,
        /// Logged-in user, if any
        user: Option<UserView>,
    },
    /// Product list
    Shop {
        /// Catalog rows in selection order
        products: Vec<ProductView>,
        /// Transient "added to cart" confirmation (product name)
        added_notice: Option<String>,
    },
    /// Cart contents, or the checkout flow when one is running
    Cart {
        /// Cart lines in insertion order
        items: Vec<CartLineView>,
        /// Order total
        total: Decimal,
        /// Whether a user is logged in (checkout is offered only then)
        logged_in: bool,
        /// Active checkout step, if checkout mode is on
        checkout: Option<CheckoutView>,
    },
    /// Profile, or the login flow when one is running
    Profile {
        /// Logged-in user, if any
        user: Option<UserView>,
        /// Active login step, if login mode is on
        login: Option<LoginView>,
    },
    /// Help text
    Help,
}

/// A catalog row
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductView {
    /// 1-based selection index (the digit key)
    pub index: usize,
    /// Product id
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Description line
    pub description: String,
    /// Country of origin
    pub origin: String,
    /// Roast label
    pub roast: String,
}

impl ProductView {
    /// Project a catalog product into a row
    pub fn from_product(index: usize, product: &Product) -> Self {
        Self {
            index,
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            origin: product.origin.clone(),
            roast: product.roast.label().to_string(),
        }
    }
}

/// A cart line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLineView {
    /// 1-based ordinal (the digit key that removes it)
    pub index: usize,
    /// Units ordered
    pub quantity: u32,
    /// Product name
    pub name: String,
    /// Unit price
    pub unit_price: Decimal,
    /// quantity x unit price
    pub line_total: Decimal,
    /// Country of origin
    pub origin: String,
    /// Roast label
    pub roast: String,
}

impl CartLineView {
    /// Project a cart item into a line
    pub fn from_item(index: usize, item: &CartItem) -> Self {
        Self {
            index,
            quantity: item.quantity,
            name: item.product.name.clone(),
            unit_price: item.product.price,
            line_total: item.line_total(),
            origin: item.product.origin.clone(),
            roast: item.product.roast.label().to_string(),
        }
    }
}

/// Logged-in user details for the menu and profile screens
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserView {
    /// User id
    pub id: String,
    /// Email as typed at login
    pub email: String,
    /// Display name as typed at login
    pub name: String,
    /// Mock lifetime order count
    pub orders: u32,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            orders: user.orders,
        }
    }
}

/// The login flow as the renderer sees it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginView {
    /// Current step (never `Idle`; the view is absent then)
    pub stage: LoginState,
    /// Text typed so far for the current field
    pub buffer: String,
}

/// The checkout flow as the renderer sees it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutView {
    /// Current step (never `Idle`; the view is absent then)
    pub stage: CheckoutState,
    /// Email to show on the confirmation screen
    pub email: Option<String>,
}
