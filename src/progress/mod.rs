//! Progress module containing progress tracking and display.
//!
//! # Overview
//!
//! - `stream` - [`ProgressStream`], counting body bytes and computing percentages
//! - `style` - [`ProgressBarOpts`], progress bar styling
//! - `display` - [`ProgressBarListener`], a listener drawing a terminal bar
//!
//! # Examples
//!
//! ```rust
//! use ferry::progress::{ProgressBarListener, ProgressBarOpts};
//!
//! let visible = ProgressBarListener::new(ProgressBarOpts::with_message_style());
//! let hidden = ProgressBarListener::hidden();
//! assert!(hidden.bar().is_hidden());
//! ```

pub(crate) mod display;
pub mod stream;
pub(crate) mod style;

pub use display::ProgressBarListener;
pub use stream::{percent, ProgressStream};
pub use style::ProgressBarOpts;
