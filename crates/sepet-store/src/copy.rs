//! Site copy: display strings keyed by logical name.
//!
//! Every field has a baked-in Turkish default, so the engine keeps
//! working when the site document is missing keys or missing entirely.
//! Unknown keys in the document are ignored.

use serde::{Deserialize, Serialize};

/// Display strings used by the basket engine.
///
/// The document is a flat map with camelCase keys; any subset may be
/// present. `SiteCopy::default()` is the full fallback set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteCopy {
    /// Unit word next to a line quantity, e.g. "2 Adet".
    pub quantity: String,
    /// Label for the product subtotal line.
    pub product_total: String,
    /// VAT suffix shown after the subtotal.
    pub vat_included: String,
    /// Label for the shipping cost line.
    pub shipping_cost: String,
    /// Tax suffix shown after the shipping amount.
    pub shipping_tax_note: String,
    /// Note about the free-shipping threshold.
    pub free_shipping_note: String,
    /// Line shown instead of a cost once shipping is free.
    pub shipping_free: String,
    /// Label for the grand total line.
    pub grand_total: String,
    /// Caption of the order button.
    pub order_via_whatsapp: String,
    /// First half of the e-mail fallback sentence.
    pub not_using_whatsapp: String,
    /// Middle of the e-mail fallback sentence.
    pub contact_us_with_email: String,
    /// End of the e-mail fallback sentence.
    pub reach_us_via_email: String,
    /// Caption of the panel toggle while hidden.
    pub show_basket: String,
    /// Caption of the panel toggle while shown.
    pub hide_basket: String,
    /// Greeting that opens every message.
    pub order_greeting: String,
    /// Intent statement that closes the order message.
    pub order_closing: String,
    /// Label of the stepper control while the line can still shrink.
    pub decrease_label: String,
    /// Label of the stepper control on a quantity-1 line.
    pub delete_label: String,
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self {
            quantity: "Adet".to_string(),
            product_total: "Ürün Tutarı".to_string(),
            vat_included: "(KDV Dahil)".to_string(),
            shipping_cost: "Kargo Ücreti".to_string(),
            shipping_tax_note: "(Vergiler Dahil)".to_string(),
            free_shipping_note: "15 kg ve üzeri siparişlerde kargo ücretsizdir.".to_string(),
            shipping_free: "Kargonuz ücretsiz.".to_string(),
            grand_total: "Genel Toplam".to_string(),
            order_via_whatsapp: "Whatsapp'dan Siparişini İlet".to_string(),
            not_using_whatsapp: "WhatsApp kullanmıyorsanız".to_string(),
            contact_us_with_email: "sipariş ve sorularınız için bize".to_string(),
            reach_us_via_email: "adresimizden ulaşabilirsiniz".to_string(),
            show_basket: "Sepeti Göster".to_string(),
            hide_basket: "Sepeti Gizle".to_string(),
            order_greeting: "Merhaba".to_string(),
            order_closing: "Satın almak istiyorum.".to_string(),
            decrease_label: "çıkart".to_string(),
            delete_label: "sil".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let copy: SiteCopy = serde_json::from_str("{}").unwrap();
        assert_eq!(copy, SiteCopy::default());
        assert_eq!(copy.grand_total, "Genel Toplam");
    }

    #[test]
    fn test_partial_document_keeps_defaults_for_the_rest() {
        let copy: SiteCopy =
            serde_json::from_str(r#"{"grandTotal": "Total", "showBasket": "Show cart"}"#).unwrap();
        assert_eq!(copy.grand_total, "Total");
        assert_eq!(copy.show_basket, "Show cart");
        assert_eq!(copy.product_total, "Ürün Tutarı");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let copy: SiteCopy =
            serde_json::from_str(r#"{"footSloganBtn": "Tadına bak", "sitemap": "Site Haritası"}"#)
                .unwrap();
        assert_eq!(copy, SiteCopy::default());
    }
}
