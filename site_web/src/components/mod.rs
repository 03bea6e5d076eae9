//! Page components
//!
//! Each component owns its state and the listeners that feed it.
//!
//! - `navigation` - smooth anchor scrolling and the mobile menu
//! - `navbar` - header background and auto-hide on scroll
//! - `reveal` - one-shot `[data-aos]` reveals
//! - `pricing` - the quote calculator panel
//! - `animator` - animated counters used by pricing
//! - `contact` - contact form submit handling
//! - `toast` - notification toasts
//! - `parallax` - mouse-follow offsets on `.shape`
//! - `page_load` - body fade-in on load

pub mod animator;
pub mod contact;
pub mod navbar;
pub mod navigation;
pub mod page_load;
pub mod parallax;
pub mod pricing;
pub mod reveal;
pub mod toast;
