//! Storefront controller for Sepet.
//!
//! This crate wires the pure basket engine from `sepet-commerce` to the
//! world around it:
//!
//! - **Data**: the three startup documents (company, products, site
//!   copy) with lenient parsing and a degraded mode for bad data
//! - **Location**: the query string as the only cart carrier, with a
//!   one-time rehydration pass
//! - **Message**: the plain-text order summary and the WhatsApp deep
//!   links it travels through
//! - **Store**: the [`Storefront`](store::Storefront) controller that
//!   owns all session state, accepts typed commands, and runs the
//!   recompute, location sync, and render-notify sequence after every
//!   mutation
//!
//! Presentation is an external collaborator: this crate ends at the
//! notify boundary and at returned strings and links.

pub mod copy;
pub mod data;
pub mod location;
pub mod message;
pub mod panel;
pub mod store;

pub use copy::SiteCopy;
pub use data::{CompanyInfo, StartupData};
pub use location::{Location, MemoryLocation, REHYDRATE_DELAY};
pub use message::Platform;
pub use panel::PanelState;
pub use store::{Command, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::copy::SiteCopy;
    pub use crate::data::{CompanyInfo, StartupData};
    pub use crate::location::{Location, MemoryLocation, REHYDRATE_DELAY};
    pub use crate::message::Platform;
    pub use crate::panel::PanelState;
    pub use crate::store::{Command, Storefront};

    pub use sepet_commerce::prelude::*;
}
