//! Services
//!
//! - [`http`] - router assembly and middleware
//! - [`quote`] - menu resolution and quote computation
//! - [`booking`] - order booking and status lifecycle

pub mod booking;
pub mod http;
pub mod quote;

pub use http::{build_app, build_router};
pub use quote::{QuoteSelection, ResolvedQuote, resolve_quote};
