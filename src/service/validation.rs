//! Field constraints for [`Item`] request bodies.

use crate::error::AppError;
use crate::item::Item;
use rust_decimal::Decimal;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const QUANTITY_MAX: i32 = 10_000;
pub const PRICE_INTEGER_DIGITS: u32 = 10;
pub const PRICE_FRACTION_DIGITS: u32 = 2;

pub struct RequestValidator;

impl RequestValidator {
    /// Check every field and report all violations at once, in field order.
    pub fn validate(item: &Item) -> Result<(), AppError> {
        let violations = Self::violations(item);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }

    /// Same as [`validate`](Self::validate) but also requires an id (update, delete).
    pub fn validate_existing(item: &Item) -> Result<(), AppError> {
        let mut violations = Vec::new();
        if item.id.is_none() {
            violations.push("id is required".to_string());
        }
        violations.extend(Self::violations(item));
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }

    pub fn violations(item: &Item) -> Vec<String> {
        let mut out = Vec::new();

        match item.name.as_deref() {
            None => out.push("Name cannot be blank".to_string()),
            Some(name) => {
                if name.trim().is_empty() {
                    out.push("Name cannot be blank".to_string());
                }
                let name_len = name.chars().count();
                if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
                    out.push(format!(
                        "Name must be between {} and {} characters",
                        NAME_MIN_CHARS, NAME_MAX_CHARS
                    ));
                }
            }
        }

        if let Some(d) = &item.description {
            if d.chars().count() > DESCRIPTION_MAX_CHARS {
                out.push(format!("Description cannot exceed {} characters", DESCRIPTION_MAX_CHARS));
            }
        }

        if item.quantity < 0 {
            out.push("Quantity cannot be negative".to_string());
        }
        if item.quantity > QUANTITY_MAX {
            out.push("Quantity cannot exceed 10,000".to_string());
        }

        match &item.price {
            None => out.push("Price cannot be null".to_string()),
            Some(price) => {
                if price.is_sign_negative() && !price.is_zero() {
                    out.push("Price cannot be negative".to_string());
                }
                if !price_fits_digits(price) {
                    out.push(format!(
                        "Price must have up to {} digits and {} decimal places",
                        PRICE_INTEGER_DIGITS, PRICE_FRACTION_DIGITS
                    ));
                }
            }
        }

        out
    }
}

/// Integer part has at most 10 digits and the fraction at most 2, ignoring trailing zeros.
fn price_fits_digits(price: &Decimal) -> bool {
    let normalized = price.normalize();
    if normalized.scale() > PRICE_FRACTION_DIGITS {
        return false;
    }
    let integer_part = normalized.trunc().abs().normalize();
    let digits = integer_part.to_string().trim_start_matches('0').len() as u32;
    digits <= PRICE_INTEGER_DIGITS
}
