//! Screen Rendering
//!
//! Pure presentation: each `ScreenView` variant becomes a list of styled
//! lines. Nothing here inspects or mutates session state - the core's
//! snapshot is the single source of truth for what to show.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use brewshop_core::{
    CartLineView, CheckoutState, CheckoutView, Decimal, LoginState, LoginView, ProductView,
    ScreenView, UserView, ViewState,
};

use crate::theme;

/// Render the current snapshot into the full frame
pub fn draw(frame: &mut Frame, view: &ViewState) {
    let width = frame.area().width.saturating_sub(4) as usize;
    let lines = match &view.screen {
        ScreenView::Welcome => welcome_lines(),
        ScreenView::Menu { cart_items, user } => menu_lines(*cart_items, user.as_ref()),
        ScreenView::Shop {
            products,
            added_notice,
        } => shop_lines(products, added_notice.as_deref(), width),
        ScreenView::Cart {
            items,
            total,
            logged_in,
            checkout,
        } => match checkout {
            Some(checkout) => checkout_lines(items, *total, checkout),
            None => cart_lines(items, *total, *logged_in),
        },
        ScreenView::Profile { user, login } => match login {
            Some(login) => login_lines(login),
            None => profile_lines(user.as_ref()),
        },
        ScreenView::Help => help_lines(),
    };
    frame.render_widget(Paragraph::new(Text::from(lines)), frame.area());
}

fn welcome_lines() -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::default(),
        header("*** BREWSHOP COFFEE ***"),
        Line::default(),
        Line::styled("Premium beans, zero mouse required", Style::default().fg(theme::PRICE_YELLOW)),
        Line::default(),
        dim("Press any key to continue..."),
    ]
}

fn menu_lines(cart_items: u32, user: Option<&UserView>) -> Vec<Line<'static>> {
    let login_status = match user {
        Some(user) => format!("Logged in as: {}", user.name),
        None => "Not logged in".to_string(),
    };
    let cart_label = if cart_items > 0 {
        format!("Cart - View your items ({cart_items} items)")
    } else {
        "Cart - View your items".to_string()
    };
    vec![
        header("=== BREWSHOP COFFEE ==="),
        Line::default(),
        dim("Welcome to the terminal-based coffee experience!"),
        dim(login_status),
        Line::default(),
        command('S', theme::COMMAND_GREEN, "Shop - Browse our coffee selection"),
        command('C', theme::PRICE_YELLOW, &cart_label),
        command('P', theme::ORIGIN_BLUE, "Profile - Account & login"),
        command('H', theme::HEADER_CYAN, "Help - Commands & information"),
        command('Q', theme::DANGER_RED, "Quit - Leave the shop"),
        Line::default(),
        dim("Choose an option (S/C/P/H/Q):"),
    ]
}

fn shop_lines(
    products: &[ProductView],
    added_notice: Option<&str>,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        header("=== COFFEE SELECTION ==="),
        Line::default(),
        dim("Premium coffee beans, ethically sourced and freshly roasted"),
        Line::default(),
    ];

    if let Some(name) = added_notice {
        lines.push(Line::styled(
            format!("Added {name} to cart!"),
            Style::default()
                .fg(theme::SUCCESS_GREEN)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
    }

    for product in products {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", product.index),
                Style::default()
                    .fg(theme::COMMAND_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                product.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" - ${:.2}", product.price),
                Style::default().fg(theme::PRICE_YELLOW),
            ),
        ]));
        for wrapped in textwrap::wrap(&product.description, width.max(20)) {
            lines.push(Line::styled(
                format!("    {wrapped}"),
                Style::default().fg(theme::DIM_GRAY),
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("    Origin: {}", product.origin),
                Style::default().fg(theme::ORIGIN_BLUE),
            ),
            Span::styled(
                format!(" | Roast: {}", product.roast),
                Style::default().fg(theme::ROAST_MAGENTA),
            ),
        ]));
        lines.push(Line::default());
    }

    lines.push(dim(format!(
        "Select a product (1-{}) to add to cart",
        products.len()
    )));
    lines.push(back_hint());
    lines
}

fn cart_lines(items: &[CartLineView], total: Decimal, logged_in: bool) -> Vec<Line<'static>> {
    let mut lines = vec![header("=== SHOPPING CART ==="), Line::default()];

    if items.is_empty() {
        lines.push(dim("Your cart is empty. Visit the shop to add some coffee!"));
        lines.push(Line::default());
        lines.push(back_hint());
        return lines;
    }

    for item in items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", item.index),
                Style::default()
                    .fg(theme::DANGER_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}x {}", item.quantity, item.name)),
            Span::styled(
                format!(" - ${:.2}", item.line_total),
                Style::default().fg(theme::PRICE_YELLOW),
            ),
        ]));
        lines.push(dim(format!(
            "    ${:.2} each | {} | {} roast",
            item.unit_price, item.origin, item.roast
        )));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        format!("Total: ${total:.2}"),
        Style::default()
            .fg(theme::SUCCESS_GREEN)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());
    lines.push(dim(format!("Select item number (1-{}) to remove", items.len())));
    if logged_in {
        lines.push(command('O', theme::COMMAND_GREEN, "Order - Proceed to checkout"));
    } else {
        lines.push(dim("Login to your profile to place an order"));
    }
    lines.push(command('C', theme::DANGER_RED, "Clear cart"));
    lines.push(back_hint());
    lines
}

fn checkout_lines(
    items: &[CartLineView],
    total: Decimal,
    checkout: &CheckoutView,
) -> Vec<Line<'static>> {
    let mut lines = vec![header("=== CHECKOUT ==="), Line::default()];

    match checkout.stage {
        CheckoutState::Idle | CheckoutState::Confirming => {
            lines.push(Line::raw("Order Summary:"));
            for item in items {
                lines.push(Line::raw(format!(
                    "  {}x {} - ${:.2}",
                    item.quantity, item.name, item.line_total
                )));
            }
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Total: ${total:.2}"),
                Style::default()
                    .fg(theme::SUCCESS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::default());
            lines.push(Line::styled(
                "Confirm your order? [Y/N]:",
                Style::default().fg(theme::BUSY_YELLOW),
            ));
        }
        CheckoutState::Processing => {
            lines.push(Line::styled(
                "Processing payment... Please wait...",
                Style::default().fg(theme::BUSY_YELLOW),
            ));
        }
        CheckoutState::Complete => {
            lines.push(Line::styled(
                "Order placed successfully!",
                Style::default()
                    .fg(theme::SUCCESS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
            if let Some(email) = &checkout.email {
                lines.push(Line::raw(format!("Confirmation email sent to {email}")));
            }
            lines.push(Line::raw("Your coffee will ship within 2-3 business days"));
            lines.push(Line::default());
            lines.push(dim("Returning to main menu..."));
        }
    }
    lines
}

fn profile_lines(user: Option<&UserView>) -> Vec<Line<'static>> {
    let mut lines = vec![header("=== PROFILE ==="), Line::default()];

    match user {
        Some(user) => {
            lines.push(Line::styled(
                "Logged In",
                Style::default()
                    .fg(theme::SUCCESS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::default());
            lines.push(Line::raw(format!("Name:            {}", user.name)));
            lines.push(Line::raw(format!("Email:           {}", user.email)));
            lines.push(dim(format!("User ID:         {}", user.id)));
            lines.push(Line::from(vec![
                Span::raw("Previous Orders: "),
                Span::styled(
                    user.orders.to_string(),
                    Style::default().fg(theme::PRICE_YELLOW),
                ),
            ]));
            lines.push(Line::default());
            lines.push(dim("Thanks for being a valued customer!"));
            lines.push(Line::default());
            lines.push(command('O', theme::DANGER_RED, "Logout"));
        }
        None => {
            lines.push(dim("You are not logged in"));
            lines.push(Line::default());
            lines.push(command('L', theme::COMMAND_GREEN, "Login to your account"));
            lines.push(Line::default());
            lines.push(dim("Login to place orders and view your account"));
        }
    }
    lines.push(back_hint());
    lines
}

fn login_lines(login: &LoginView) -> Vec<Line<'static>> {
    let mut lines = vec![header("=== LOGIN ==="), Line::default()];

    match login.stage {
        LoginState::Processing => {
            lines.push(Line::styled(
                "Logging in... Please wait...",
                Style::default().fg(theme::BUSY_YELLOW),
            ));
        }
        stage => {
            let prompt = if stage == LoginState::CollectingName {
                "Enter your name:"
            } else {
                "Enter your email:"
            };
            lines.push(Line::raw(prompt));
            lines.push(Line::from(vec![
                Span::styled(
                    login.buffer.clone(),
                    Style::default().fg(theme::INPUT_GREEN),
                ),
                Span::styled("_", Style::default().fg(theme::DIM_GRAY)),
            ]));
            lines.push(Line::default());
            lines.push(dim("Press Enter to continue, Esc to cancel"));
        }
    }
    lines
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        header("=== HELP & INFORMATION ==="),
        Line::default(),
        Line::styled(
            "Welcome to Brewshop!",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        dim("A terminal-based coffee ordering experience. Navigate with"),
        dim("single-letter commands; no mouse, no forms, just coffee."),
        Line::default(),
        Line::styled(
            "Navigation Commands:",
            Style::default().fg(theme::BUSY_YELLOW),
        ),
        command('S', theme::COMMAND_GREEN, "Shop (browse coffee selection)"),
        command('C', theme::PRICE_YELLOW, "Cart (view and manage your items)"),
        command('P', theme::ORIGIN_BLUE, "Profile (login/logout and account info)"),
        command('H', theme::HEADER_CYAN, "Help (this screen)"),
        command('Q', theme::DANGER_RED, "Quit (exit from main menu)"),
        command('B', theme::DANGER_RED, "Back (return to main menu from any screen)"),
        Line::default(),
        Line::styled("Shopping:", Style::default().fg(theme::BUSY_YELLOW)),
        Line::raw("  - Select products by typing their number"),
        Line::raw("  - Repeat selections bump the quantity"),
        Line::raw("  - Login to place orders and checkout"),
        Line::default(),
        Line::styled(
            "Keyboard Shortcuts:",
            Style::default().fg(theme::BUSY_YELLOW),
        ),
        Line::raw("  Ctrl+C - Force exit from anywhere"),
        Line::raw("  Esc    - Cancel current action (like login)"),
        Line::default(),
        back_hint(),
    ]
}

// Small helpers ------------------------------------------------------------

fn header(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme::HEADER_CYAN)
            .add_modifier(Modifier::BOLD),
    )
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), Style::default().fg(theme::DIM_GRAY))
}

fn command(key: char, color: ratatui::style::Color, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{key}] "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(label.to_string()),
    ])
}

fn back_hint() -> Line<'static> {
    command('B', theme::DANGER_RED, "Back to main menu")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_shows_cart_badge_and_login_status() {
        let user = UserView {
            id: "abc".to_string(),
            email: "bean@example.com".to_string(),
            name: "Bean".to_string(),
            orders: 3,
        };
        let text = flatten(&menu_lines(2, Some(&user)));
        assert!(text.contains("(2 items)"));
        assert!(text.contains("Logged in as: Bean"));

        let text = flatten(&menu_lines(0, None));
        assert!(!text.contains("items)"));
        assert!(text.contains("Not logged in"));
    }

    #[test]
    fn test_empty_cart_offers_no_checkout() {
        let text = flatten(&cart_lines(&[], Decimal::ZERO, true));
        assert!(text.contains("Your cart is empty"));
        assert!(!text.contains("[O]"));
    }

    #[test]
    fn test_cart_checkout_gated_on_login() {
        let items = vec![CartLineView {
            index: 1,
            quantity: 2,
            name: "Kenya AA".to_string(),
            unit_price: Decimal::new(3000, 2),
            line_total: Decimal::new(6000, 2),
            origin: "Kenya".to_string(),
            roast: "Medium-Dark".to_string(),
        }];
        let total = Decimal::new(6000, 2);

        let text = flatten(&cart_lines(&items, total, true));
        assert!(text.contains("Total: $60.00"));
        assert!(text.contains("[O] Order"));

        let text = flatten(&cart_lines(&items, total, false));
        assert!(text.contains("Login to your profile to place an order"));
        assert!(!text.contains("[O] Order"));
    }

    #[test]
    fn test_checkout_complete_shows_confirmation_email() {
        let checkout = CheckoutView {
            stage: CheckoutState::Complete,
            email: Some("bean@example.com".to_string()),
        };
        let text = flatten(&checkout_lines(&[], Decimal::ZERO, &checkout));
        assert!(text.contains("Order placed successfully!"));
        assert!(text.contains("Confirmation email sent to bean@example.com"));
    }

    #[test]
    fn test_login_prompt_follows_stage() {
        let email_stage = LoginView {
            stage: LoginState::CollectingEmail,
            buffer: "bean@".to_string(),
        };
        let text = flatten(&login_lines(&email_stage));
        assert!(text.contains("Enter your email:"));
        assert!(text.contains("bean@"));

        let name_stage = LoginView {
            stage: LoginState::CollectingName,
            buffer: String::new(),
        };
        let text = flatten(&login_lines(&name_stage));
        assert!(text.contains("Enter your name:"));

        let processing = LoginView {
            stage: LoginState::Processing,
            buffer: String::new(),
        };
        let text = flatten(&login_lines(&processing));
        assert!(text.contains("Logging in..."));
    }

    #[test]
    fn test_shop_wraps_descriptions_and_flags_added_notice() {
        let products = vec![ProductView {
            index: 1,
            id: "brazilian-blend".to_string(),
            name: "Brazilian Blend".to_string(),
            price: Decimal::new(2500, 2),
            description: "Rich and smooth with notes of chocolate and caramel".to_string(),
            origin: "Brazil".to_string(),
            roast: "Medium".to_string(),
        }];
        let text = flatten(&shop_lines(&products, Some("Brazilian Blend"), 80));
        assert!(text.contains("Added Brazilian Blend to cart!"));
        assert!(text.contains("[1] Brazilian Blend - $25.00"));
        assert!(text.contains("Origin: Brazil"));
        assert!(text.contains("Select a product (1-1)"));
    }
}
