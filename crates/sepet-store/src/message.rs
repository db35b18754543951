//! Order message rendering and WhatsApp deep links.
//!
//! Checkout happens out of band: the basket renders to a plain-text
//! summary and travels through a WhatsApp deep link. Building the text
//! and the link is pure; opening the link is the caller's job.

use sepet_commerce::basket::{Basket, Totals};

use crate::copy::SiteCopy;

/// Messaging client flavor, decided once at startup from the browser's
/// user-agent string and fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Native app via the `wa.me` scheme.
    Mobile,
    /// Web client via `web.whatsapp.com`.
    #[default]
    Web,
}

impl Platform {
    /// Classify a user-agent string. Anything that does not look like a
    /// handheld device gets the web client.
    pub fn from_user_agent(user_agent: &str) -> Self {
        const MOBILE_MARKERS: [&str; 8] = [
            "android",
            "webos",
            "iphone",
            "ipad",
            "ipod",
            "blackberry",
            "iemobile",
            "opera mini",
        ];
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            Platform::Mobile
        } else {
            Platform::Web
        }
    }
}

/// Render the plain-text order summary for the current basket.
///
/// One line per item, then the same subtotal, shipping and grand total
/// amounts the on-page display shows. There is no separate rounding
/// path: the formatted amounts come from the same kurus values the
/// totals were computed with.
pub fn order_message(basket: &Basket, totals: &Totals, copy: &SiteCopy) -> String {
    let mut message = format!("{},\n\n", copy.order_greeting);
    for item in basket.items() {
        message.push_str(&format!(
            "{} {} ({} x {})\n",
            item.quantity,
            item.name,
            item.price.display_amount(),
            item.quantity
        ));
    }
    message.push_str(&format!(
        "\n{} : {}",
        copy.product_total,
        totals.subtotal.display()
    ));
    message.push_str(&format!(
        "\n{} : {}",
        copy.shipping_cost,
        totals.shipping.display()
    ));
    message.push_str(&format!(
        "\n{} : {}",
        copy.grand_total,
        totals.grand_total.display()
    ));
    message.push_str(&format!("\n\n{}", copy.order_closing));
    message
}

/// Deep link that opens WhatsApp with a prefilled message.
///
/// `phone_digits` is the bare digit string from
/// [`CompanyInfo::phone_digits`](crate::data::CompanyInfo::phone_digits).
pub fn whatsapp_link(platform: Platform, phone_digits: &str, message: &str) -> String {
    let text = percent_encode(message);
    match platform {
        Platform::Mobile => format!("https://wa.me/{phone_digits}?text={text}"),
        Platform::Web => {
            format!("https://web.whatsapp.com/send?phone={phone_digits}&text={text}")
        }
    }
}

/// Link that opens a bare greeting conversation, used by the header and
/// footer contact buttons.
pub fn contact_link(platform: Platform, phone_digits: &str, copy: &SiteCopy) -> String {
    whatsapp_link(platform, phone_digits, &copy.order_greeting)
}

/// Percent-encode a query value. Spaces become `%20` rather than `+` so
/// the message body survives WhatsApp's query parsing with newlines and
/// spacing intact.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sepet_commerce::catalog::{CatalogIndex, Product};
    use sepet_commerce::ids::ProductId;
    use sepet_commerce::money::Money;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0";

    #[test]
    fn test_platform_detection() {
        assert_eq!(Platform::from_user_agent(IPHONE_UA), Platform::Mobile);
        assert_eq!(Platform::from_user_agent("Android 14; Pixel"), Platform::Mobile);
        assert_eq!(Platform::from_user_agent(DESKTOP_UA), Platform::Web);
        assert_eq!(Platform::from_user_agent(""), Platform::Web);
    }

    fn sample_basket() -> (Basket, Totals) {
        // Ids without digits keep the weight at zero, first tier.
        let catalog = CatalogIndex::from_products(vec![
            Product::new("AAA", "Product A", "product-a", Money::from_lira(100.0)),
            Product::new("BBB", "Product B", "product-b", Money::from_lira(50.0)),
        ]);
        let mut basket = Basket::new();
        basket.add(&catalog, &ProductId::new("AAA"), 1).unwrap();
        basket.add(&catalog, &ProductId::new("BBB"), 2).unwrap();
        let totals = Totals::of(&basket);
        (basket, totals)
    }

    #[test]
    fn test_order_message_content() {
        let (basket, totals) = sample_basket();
        assert_eq!(totals.subtotal, Money::from_lira(200.0));
        assert_eq!(totals.shipping, Money::from_lira(146.0));
        assert_eq!(totals.grand_total, Money::from_lira(346.0));

        let message = order_message(&basket, &totals, &SiteCopy::default());
        assert!(message.starts_with("Merhaba,\n\n"));
        assert!(message.contains("1 Product A (100 x 1)\n"));
        assert!(message.contains("2 Product B (50 x 2)\n"));
        assert!(message.contains("Ürün Tutarı : 200 TL"));
        assert!(message.contains("Kargo Ücreti : 146 TL"));
        assert!(message.contains("Genel Toplam : 346 TL"));
        assert!(message.ends_with("Satın almak istiyorum."));
    }

    #[test]
    fn test_message_amounts_match_display_formatting() {
        let catalog = CatalogIndex::from_products(vec![Product::new(
            "CCC",
            "Product C",
            "product-c",
            Money::from_lira(1234.5),
        )]);
        let mut basket = Basket::new();
        basket.add(&catalog, &ProductId::new("CCC"), 1).unwrap();
        let totals = Totals::of(&basket);

        let message = order_message(&basket, &totals, &SiteCopy::default());
        assert!(message.contains("1 Product C (1.234,5 x 1)"));
        assert!(message.contains(&format!("Ürün Tutarı : {}", totals.subtotal.display())));
    }

    #[test]
    fn test_deep_link_templates() {
        let mobile = whatsapp_link(Platform::Mobile, "905551234567", "Merhaba");
        assert_eq!(mobile, "https://wa.me/905551234567?text=Merhaba");

        let web = whatsapp_link(Platform::Web, "905551234567", "Merhaba");
        assert_eq!(
            web,
            "https://web.whatsapp.com/send?phone=905551234567&text=Merhaba"
        );
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let link = whatsapp_link(Platform::Mobile, "90555", "Merhaba,\n\n1 Ürün");
        assert_eq!(
            link,
            "https://wa.me/90555?text=Merhaba%2C%0A%0A1%20%C3%9Cr%C3%BCn"
        );
    }

    #[test]
    fn test_contact_link_uses_greeting() {
        let link = contact_link(Platform::Web, "90555", &SiteCopy::default());
        assert_eq!(link, "https://web.whatsapp.com/send?phone=90555&text=Merhaba");
    }
}
