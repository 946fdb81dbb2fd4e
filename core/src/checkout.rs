// src/checkout.rs

//! Pure checkout formatting: cart contents in, WhatsApp deep links out.
//!
//! The message text and the number formatting are pinned to the shop's
//! business locale (Indonesian, rupiah). This is a deliberate choice, not a
//! generic i18n layer.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::cart::item::CartLineItem;
use crate::error::{CartError, CartResult};

/// Characters escaped the way `encodeURIComponent` does it: everything
/// except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

/// Both deep-link variants for one checkout message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLinks {
  /// `https://wa.me/...`, for the mobile and desktop app.
  pub mobile: String,
  /// `https://web.whatsapp.com/send?...`, for the web client.
  pub web: String,
}

/// Formats a rupiah amount with Indonesian digit grouping: `10000` becomes
/// `"10.000"`. No decimal places; the shop prices in whole rupiah.
pub fn format_rupiah(amount: u64) -> String {
  let digits = amount.to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (index, ch) in digits.chars().enumerate() {
    if index > 0 && (digits.len() - index) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }
  grouped
}

/// Renders the human-readable order summary.
///
/// Items are listed 1-indexed in cart (insertion) order, each with its
/// category, quantity, unit price and subtotal, followed by the grand total.
pub fn order_message(items: &[CartLineItem], total: u64) -> String {
  let mut message = String::from("Halo, saya ingin memesan:\n\n");

  for (index, item) in items.iter().enumerate() {
    message.push_str(&format!("{}. *{}*\n", index + 1, item.name));
    message.push_str(&format!("• Kategori: {}\n", item.category_name));
    message.push_str(&format!("• Jumlah: {}\n", item.quantity));
    message.push_str(&format!("• Harga: Rp {}\n", format_rupiah(item.unit_price)));
    message.push_str(&format!("• Subtotal: Rp {}\n\n", format_rupiah(item.subtotal())));
  }

  message.push_str(&format!("*Total: Rp {}*\n\n", format_rupiah(total)));
  message.push_str("-------------------\n");

  message
}

/// Percent-encodes `message` and interpolates it into both WhatsApp URL
/// variants for `phone_number`.
///
/// An unset or blank phone number is a configuration error and fails with
/// [`CartError::PhoneMissing`] rather than producing a malformed link.
pub fn checkout_links(phone_number: &str, message: &str) -> CartResult<CheckoutLinks> {
  let phone = phone_number.trim();
  if phone.is_empty() {
    return Err(CartError::PhoneMissing);
  }

  let encoded = utf8_percent_encode(message, MESSAGE_ENCODE_SET).to_string();
  Ok(CheckoutLinks {
    mobile: format!("https://wa.me/{}?text={}", phone, encoded),
    web: format!("https://web.whatsapp.com/send?phone={}&text={}", phone, encoded),
  })
}
