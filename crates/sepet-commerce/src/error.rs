//! Domain error types.

use thiserror::Error;

/// Errors from basket mutations.
///
/// Nothing here is fatal to a session. The storefront controller logs
/// these and treats the offending operation as a no-op, so the basket
/// behaves as if the bad input never arrived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// The id does not resolve in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// A first insertion asked for a non-positive quantity.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),
}
