//! Session Controller
//!
//! The top-level state machine for one connected ordering session. It owns
//! the cart, the auth state, both workflows, and the timer queue, and it
//! routes every incoming key event through a single fixed-precedence
//! dispatch:
//!
//! 1. A showing welcome screen swallows any key and activates the menu.
//! 2. Ctrl+C terminates the session.
//! 3. `q` terminates, but only from the main menu.
//! 4. `b` returns to the menu from any sub-screen - unless a login or
//!    checkout workflow is running, in which case the workflow sees the
//!    key instead.
//! 5. Everything else goes to the active screen's handler, where an
//!    unrecognized key is a silent no-op.
//!
//! # Design Philosophy
//!
//! One deterministic dispatch table instead of layered listeners: there is
//! never ambiguity about which handler wins. The controller is fully
//! synchronous; hosts feed it key events and a clock, and pull a fresh
//! [`ViewState`] to render after each call.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::event::KeyEvent;
use crate::timer::{TimerAction, TimerId, TimerQueue};
use crate::view::{
    CartLineView, CheckoutView, LoginView, ProductView, ScreenView, UserView, ViewState,
};
use crate::workflow::checkout::{CheckoutOutcome, CheckoutState, CheckoutWorkflow};
use crate::workflow::login::{LoginOutcome, LoginState, LoginWorkflow};

/// The top-level screens. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Transient welcome banner; auto-exits
    Welcome,
    /// Main menu
    Menu,
    /// Product list
    Shop,
    /// Cart and checkout
    Cart,
    /// Profile and login
    Profile,
    /// Help text
    Help,
}

/// One connected session: screens, cart, auth, workflows, timers.
#[derive(Debug)]
pub struct SessionController {
    config: SessionConfig,
    catalog: Catalog,
    screen: Screen,
    cart: Cart,
    auth: AuthSession,
    login: LoginWorkflow,
    checkout: CheckoutWorkflow,
    /// Product name shown in the shop's transient confirmation
    added_notice: Option<String>,
    added_timer: Option<TimerId>,
    welcome_timer: Option<TimerId>,
    timers: TimerQueue,
    terminal_size: Option<(u16, u16)>,
    running: bool,
}

impl SessionController {
    /// Create a session showing the welcome screen.
    ///
    /// `now` anchors the welcome auto-dismiss timer; hosts pass
    /// `Instant::now()`, tests pass a fake clock.
    pub fn new(catalog: Catalog, config: SessionConfig, now: Instant) -> Self {
        let mut timers = TimerQueue::new();
        let welcome_timer = timers.schedule(now, config.welcome_delay(), TimerAction::DismissWelcome);
        Self {
            config,
            catalog,
            screen: Screen::Welcome,
            cart: Cart::new(),
            auth: AuthSession::new(),
            login: LoginWorkflow::new(),
            checkout: CheckoutWorkflow::new(),
            added_notice: None,
            added_timer: None,
            welcome_timer: Some(welcome_timer),
            timers,
            terminal_size: None,
            running: true,
        }
    }

    // ========================================================================
    // Host interface
    // ========================================================================

    /// Process one key event through the global dispatch.
    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) {
        if !self.running {
            return;
        }

        // 1. Transient welcome: any key dismisses it
        if self.screen == Screen::Welcome {
            self.dismiss_welcome();
            return;
        }

        // 2. Interrupt terminates unconditionally
        if event.is_interrupt() {
            self.shutdown("interrupt");
            return;
        }

        // 3 + 4. Global quit/back - suppressed while a workflow owns the
        // screen, so `b` typed into the email field stays text and `n` at
        // the confirm step stays the only way out of checkout.
        if !self.workflow_active() {
            if let Some(c) = event.printable() {
                if c == 'q' && self.screen == Screen::Menu {
                    self.shutdown("quit");
                    return;
                }
                if c == 'b' && self.screen != Screen::Menu {
                    self.go_to_menu();
                    return;
                }
            }
        }

        // 5. Screen-local dispatch
        match self.screen {
            Screen::Welcome => {}
            Screen::Menu => self.handle_menu_key(event),
            Screen::Shop => self.handle_shop_key(event, now),
            Screen::Cart => self.handle_cart_key(event, now),
            Screen::Profile => self.handle_profile_key(event, now),
            Screen::Help => {}
        }
    }

    /// Fire due timers and apply their continuations.
    ///
    /// Hosts call this from their frame tick; tests call it with a fake
    /// clock to step through simulated latencies.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        for action in self.timers.fire_due(now) {
            self.apply_timer(action, now);
        }
    }

    /// Terminal dimensions changed. Stored for renderers; no state effect.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((width, height));
        tracing::trace!(width, height, "terminal resized");
    }

    /// Host transport reported an interrupt (e.g. SIGINT outside the key
    /// stream). Terminates the session and releases all timers.
    pub fn on_interrupt(&mut self) {
        self.shutdown("interrupt");
    }

    /// Host transport closed (disconnect, forced termination). Releases
    /// timers and discards workflow state.
    pub fn on_close(&mut self) {
        self.shutdown("transport closed");
        self.login.reset();
        self.checkout.reset();
    }

    /// Whether the session is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Project the current state into a renderable snapshot
    pub fn snapshot(&self) -> ViewState {
        let screen = match self.screen {
            Screen::Welcome => ScreenView::Welcome,
            Screen::Menu => ScreenView::Menu {
                cart_items: self.cart.item_count(),
                user: self.auth.user().map(UserView::from),
            },
            Screen::Shop => ScreenView::Shop {
                products: self
                    .catalog
                    .products()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| ProductView::from_product(i + 1, p))
                    .collect(),
                added_notice: self.added_notice.clone(),
            },
            Screen::Cart => ScreenView::Cart {
                items: self
                    .cart
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(i, item)| CartLineView::from_item(i + 1, item))
                    .collect(),
                total: self.cart.total(),
                logged_in: self.auth.is_logged_in(),
                checkout: self.checkout.is_active().then(|| CheckoutView {
                    stage: self.checkout.state(),
                    email: self.auth.user().map(|u| u.email.clone()),
                }),
            },
            Screen::Profile => ScreenView::Profile {
                user: self.auth.user().map(UserView::from),
                login: self.login.is_active().then(|| LoginView {
                    stage: self.login.state(),
                    buffer: self.login.buffer().to_string(),
                }),
            },
            Screen::Help => ScreenView::Help,
        };
        ViewState {
            running: self.running,
            screen,
        }
    }

    // ========================================================================
    // State inspection (also used by the integration tests)
    // ========================================================================

    /// The active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The session's cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The session's auth state
    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    /// Current login workflow step
    pub fn login_state(&self) -> LoginState {
        self.login.state()
    }

    /// Current checkout workflow step
    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    /// The injected catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shop's transient confirmation, if showing
    pub fn added_notice(&self) -> Option<&str> {
        self.added_notice.as_deref()
    }

    /// Number of timers still pending
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Last reported terminal dimensions
    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_size
    }

    // ========================================================================
    // Screen handlers
    // ========================================================================

    fn handle_menu_key(&mut self, event: KeyEvent) {
        let Some(c) = event.printable() else { return };
        match c.to_ascii_lowercase() {
            's' => self.screen = Screen::Shop,
            'c' => self.screen = Screen::Cart,
            'p' => self.screen = Screen::Profile,
            'h' => self.screen = Screen::Help,
            _ => {}
        }
    }

    fn handle_shop_key(&mut self, event: KeyEvent, now: Instant) {
        let Some(digit) = event.printable().and_then(|c| c.to_digit(10)) else {
            return;
        };
        let Some(product) = self.catalog.get(digit as usize).cloned() else {
            return;
        };
        self.cart.add(product.clone(), 1);
        self.added_notice = Some(product.name);
        // Re-adding restarts the confirmation rather than letting the
        // older timer clear the newer notice early
        if let Some(id) = self.added_timer.take() {
            self.timers.cancel(id);
        }
        self.added_timer = Some(self.timers.schedule(
            now,
            self.config.added_notice_delay(),
            TimerAction::ClearAddedNotice,
        ));
    }

    fn handle_cart_key(&mut self, event: KeyEvent, now: Instant) {
        if self.checkout.is_active() {
            if self.checkout.handle_key(event) == CheckoutOutcome::Confirmed {
                self.timers.schedule(
                    now,
                    self.config.checkout_processing_delay(),
                    TimerAction::FinishCheckoutProcessing,
                );
            }
            return;
        }

        let Some(c) = event.printable() else { return };
        if let Some(digit) = c.to_digit(10) {
            if digit >= 1 {
                self.cart.remove_at(digit as usize - 1);
            }
            return;
        }
        match c.to_ascii_lowercase() {
            // Checkout is only offered with something to buy and someone
            // to bill; otherwise the key does nothing
            'o' => {
                if !self.cart.is_empty() && self.auth.is_logged_in() {
                    self.checkout.start();
                }
            }
            'c' => {
                if !self.cart.is_empty() {
                    self.cart.clear();
                }
            }
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, event: KeyEvent, now: Instant) {
        if self.login.is_active() {
            if self.login.handle_key(event) == LoginOutcome::Committed {
                self.timers.schedule(
                    now,
                    self.config.login_processing_delay(),
                    TimerAction::CompleteLogin,
                );
            }
            return;
        }

        let Some(c) = event.printable() else { return };
        match c.to_ascii_lowercase() {
            'l' => {
                if !self.auth.is_logged_in() {
                    self.login.start();
                }
            }
            'o' => {
                if self.auth.is_logged_in() {
                    self.auth.logout();
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Timer continuations
    // ========================================================================

    fn apply_timer(&mut self, action: TimerAction, now: Instant) {
        tracing::trace!(?action, "timer fired");
        match action {
            TimerAction::DismissWelcome => {
                self.welcome_timer = None;
                if self.screen == Screen::Welcome {
                    self.screen = Screen::Menu;
                }
            }
            TimerAction::ClearAddedNotice => {
                self.added_notice = None;
                self.added_timer = None;
            }
            TimerAction::CompleteLogin => {
                if let Some((email, name)) = self.login.complete() {
                    self.auth.login(email, name);
                }
            }
            TimerAction::FinishCheckoutProcessing => {
                if self.checkout.finish_processing() {
                    self.timers.schedule(
                        now,
                        self.config.checkout_complete_delay(),
                        TimerAction::FinishCheckoutComplete,
                    );
                }
            }
            TimerAction::FinishCheckoutComplete => {
                if self.checkout.finish_complete() {
                    self.cart.clear();
                    self.screen = Screen::Menu;
                    tracing::info!("order placed, cart cleared");
                }
            }
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Whether the active screen is currently owned by a workflow
    fn workflow_active(&self) -> bool {
        (self.screen == Screen::Cart && self.checkout.is_active())
            || (self.screen == Screen::Profile && self.login.is_active())
    }

    fn dismiss_welcome(&mut self) {
        if let Some(id) = self.welcome_timer.take() {
            self.timers.cancel(id);
        }
        self.screen = Screen::Menu;
    }

    fn go_to_menu(&mut self) {
        // Drop the shop's transient notice with the screen it lives on
        self.added_notice = None;
        if let Some(id) = self.added_timer.take() {
            self.timers.cancel(id);
        }
        self.screen = Screen::Menu;
    }

    fn shutdown(&mut self, reason: &str) {
        if self.running {
            tracing::info!(reason, "session terminating");
        }
        self.running = false;
        self.timers.cancel_all();
    }
}
