//! Theme and Colors
//!
//! The coffee-shop palette: warm browns and creams for chrome, green for
//! confirmations and prices-you-want-to-pay, red for removal commands.

use ratatui::style::Color;

/// Headers and screen titles
pub const HEADER_CYAN: Color = Color::Cyan;

/// Command keys shown in brackets, e.g. `[1]`
pub const COMMAND_GREEN: Color = Color::Rgb(120, 230, 120);

/// Destructive command keys, e.g. `[C] Clear cart`
pub const DANGER_RED: Color = Color::Rgb(255, 100, 100);

/// Prices and totals
pub const PRICE_YELLOW: Color = Color::Rgb(255, 223, 128);

/// Dim hint/description text
pub const DIM_GRAY: Color = Color::Rgb(130, 130, 130);

/// Success banners ("Added to cart", "Order placed")
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// In-progress notices ("Processing payment...")
pub const BUSY_YELLOW: Color = Color::Rgb(255, 210, 90);

/// Product origin accent
pub const ORIGIN_BLUE: Color = Color::Rgb(130, 170, 255);

/// Roast level accent
pub const ROAST_MAGENTA: Color = Color::Magenta;

/// Typed user input (login fields)
pub const INPUT_GREEN: Color = Color::Rgb(130, 220, 130);
