//! The storefront controller.
//!
//! One struct owns every piece of session state (catalog, company,
//! copy, basket, panel, platform, location backend) instead of the
//! state living in ambient globals. Presentation talks to it through
//! typed commands and payload-less change notifications.

use tracing::debug;

use sepet_commerce::basket::{Basket, Totals};
use sepet_commerce::catalog::CatalogIndex;
use sepet_commerce::ids::ProductId;

use crate::copy::SiteCopy;
use crate::data::{CompanyInfo, StartupData};
use crate::location::{decode_pairs, encode_basket, Location};
use crate::message::{contact_link, order_message, whatsapp_link, Platform};
use crate::panel::PanelState;

/// Typed commands from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a product. The quantity applies only when the line does not
    /// exist yet; an existing line steps up by exactly one.
    Add { id: ProductId, quantity: u32 },
    /// Step an existing line up by one (the plus control).
    Increment { id: ProductId },
    /// Step a line down by one; a quantity-1 line is removed instead,
    /// the branch the cart controls take.
    Decrease { id: ProductId },
    /// Drop a line entirely (the delete control).
    Remove { id: ProductId },
    /// Empty the basket.
    Clear,
}

type Subscriber = Box<dyn FnMut()>;

/// Session-wide storefront state and the mutation pipeline.
///
/// Every mutation runs the same sequence: recompute totals, rewrite
/// the location query, notify subscribers. Consumers re-read the
/// basket and totals when notified; the notification itself carries
/// nothing.
pub struct Storefront {
    company: CompanyInfo,
    catalog: CatalogIndex,
    copy: SiteCopy,
    basket: Basket,
    panel: PanelState,
    platform: Platform,
    location: Box<dyn Location>,
    /// Query string as it was when the session started, before any
    /// rewrite. Rehydration reads this, not the live query.
    initial_query: String,
    subscribers: Vec<Subscriber>,
    rehydrated: bool,
}

impl Storefront {
    /// Build a storefront from resolved startup data.
    ///
    /// With degraded startup data (empty catalog) the storefront still
    /// works; every add is a logged no-op.
    pub fn new(data: StartupData, platform: Platform, location: Box<dyn Location>) -> Self {
        let initial_query = location.query();
        Self {
            company: data.company,
            catalog: data.catalog,
            copy: data.copy,
            basket: Basket::new(),
            panel: PanelState::default(),
            platform,
            location,
            initial_query,
            subscribers: Vec::new(),
            rehydrated: false,
        }
    }

    /// Register a render callback, invoked after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut() + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Rehydrate the basket from the initial query state.
    ///
    /// Runs at most once, and should be called only after the startup
    /// documents have resolved and [`REHYDRATE_DELAY`] has passed.
    /// Every entry goes through the normal [`Command::Add`] path, so
    /// rehydrated lines get the same validation and price snapshots as
    /// manual adds, and a duplicated id in the query survives as an
    /// increment-by-one rather than a quantity overwrite.
    ///
    /// [`REHYDRATE_DELAY`]: crate::location::REHYDRATE_DELAY
    pub fn rehydrate(&mut self) {
        if self.rehydrated {
            return;
        }
        self.rehydrated = true;

        let pairs = decode_pairs(&self.initial_query);
        for (id, quantity) in pairs {
            if !self.catalog.contains(&id) {
                debug!(id = id.as_str(), "ignoring unknown id in location state");
                continue;
            }
            self.dispatch(Command::Add { id, quantity });
        }
    }

    /// Apply a command, then rewrite the location state and notify.
    ///
    /// Commands referencing an unknown product degrade to no-ops, but
    /// every dispatch still ends in a notify; renderers get a change
    /// signal for every command, no-op or not.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Add { id, quantity } => {
                if let Err(err) = self.basket.add(&self.catalog, &id, quantity) {
                    debug!(%err, "add ignored");
                }
            }
            Command::Increment { id } => {
                if let Err(err) = self.basket.add(&self.catalog, &id, 1) {
                    debug!(%err, "increment ignored");
                }
            }
            Command::Decrease { id } => {
                if self.basket.quantity_of(&id) == Some(1) {
                    self.basket.remove(&id);
                } else {
                    self.basket.decrease(&id);
                }
            }
            Command::Remove { id } => {
                self.basket.remove(&id);
            }
            Command::Clear => {
                self.basket.clear();
            }
        }
        self.after_mutation();
    }

    /// Recompute, sync the location state, notify. Always in that order.
    fn after_mutation(&mut self) {
        let totals = Totals::of(&self.basket);
        debug!(
            items = self.basket.item_count(),
            subtotal = totals.subtotal.kurus,
            weight_kg = totals.weight_kg,
            "basket changed"
        );
        self.location.replace_query(&encode_basket(&self.basket));
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber();
        }
    }

    // Panel transitions share the notify channel but skip the location
    // sync: visibility is not basket state and never reaches the query.

    /// Expand the basket panel.
    pub fn show_panel(&mut self) {
        self.panel.show();
        self.notify();
    }

    /// Collapse the basket panel.
    pub fn hide_panel(&mut self) {
        self.panel.hide();
        self.notify();
    }

    /// Flip the basket panel.
    pub fn toggle_panel(&mut self) {
        self.panel.toggle();
        self.notify();
    }

    /// Current panel visibility.
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// The live basket, in insertion order.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// The session catalog.
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Company contact details.
    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    /// Display strings, with defaults filled in.
    pub fn copy(&self) -> &SiteCopy {
        &self.copy
    }

    /// Session platform for deep links.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fresh totals for the current basket.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.basket)
    }

    /// Total item count for the header badge.
    pub fn item_count(&self) -> u32 {
        self.basket.item_count()
    }

    /// Quantity of a product if it is in the basket; drives the
    /// add-button versus stepper swap on catalog and detail views.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.basket.quantity_of(id)
    }

    /// Subtotal line for the panel, e.g. `Ürün Tutarı : 450 TL (KDV Dahil)`.
    pub fn subtotal_line(&self) -> String {
        format!(
            "{} : {} {}",
            self.copy.product_total,
            self.totals().subtotal.display(),
            self.copy.vat_included
        )
    }

    /// Shipping line for the panel: the cost with its tax note, or the
    /// free-shipping message once the weight clears the threshold.
    pub fn shipping_line(&self) -> String {
        let totals = self.totals();
        if totals.free_shipping() {
            self.copy.shipping_free.clone()
        } else {
            format!(
                "{}: {} {}",
                self.copy.shipping_cost,
                totals.shipping.display(),
                self.copy.shipping_tax_note
            )
        }
    }

    /// Grand total line for the panel.
    pub fn grand_total_line(&self) -> String {
        format!(
            "{} : {}",
            self.copy.grand_total,
            self.totals().grand_total.display()
        )
    }

    /// The plain-text order summary for the current basket.
    pub fn order_text(&self) -> String {
        order_message(&self.basket, &self.totals(), &self.copy)
    }

    /// Deep link that sends the order summary to the company's
    /// WhatsApp. `None` while the basket is empty; the order button
    /// only exists alongside a non-empty cart.
    pub fn order_link(&self) -> Option<String> {
        if self.basket.is_empty() {
            return None;
        }
        Some(whatsapp_link(
            self.platform,
            &self.company.phone_digits(),
            &self.order_text(),
        ))
    }

    /// Deep link for the plain contact buttons in the header and footer.
    pub fn contact_link(&self) -> String {
        contact_link(self.platform, &self.company.phone_digits(), &self.copy)
    }
}
