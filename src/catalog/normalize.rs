//! Raw-record normalization.
//!
//! Remote rows come in several historical shapes; this module is the one
//! place that knows the fallback order for every canonical field. Each
//! chain is evaluated once per record, first present value wins:
//!
//! | field               | fallbacks                          |
//! |---------------------|------------------------------------|
//! | `name`              | `name`, `title`, `"Untitled"`      |
//! | `short_description` | `short_description`, `""`          |
//! | `full_description`  | `full_description`, `""`           |
//! | `price_minor`       | coerced `price_cents`, `0`         |
//! | `image_url`         | `image_url`, placeholder asset     |

use super::Product;
use crate::backend::{RawPrice, RawProductRecord};

const UNTITLED: &str = "Untitled";

/// Pure normalization of a raw repository row into the canonical entity.
///
/// `placeholder_image` is the asset reference substituted for rows with
/// no image; it comes from configuration so deployments can brand it.
pub fn normalize(raw: &RawProductRecord, placeholder_image: &str) -> Product {
    Product {
        id: raw.id.clone(),
        name: fallback(&[raw.name.as_deref(), raw.title.as_deref()], UNTITLED).to_string(),
        short_description: fallback(&[raw.short_description.as_deref()], "").to_string(),
        full_description: fallback(&[raw.full_description.as_deref()], "").to_string(),
        price_minor: coerce_price(raw.price_cents.as_ref()),
        image_url: fallback(&[raw.image_url.as_deref()], placeholder_image).to_string(),
        created_at: raw.created_at,
    }
}

/// First present value in the chain; absence falls through, an empty
/// string does not.
fn fallback<'a>(chain: &[Option<&'a str>], default: &'a str) -> &'a str {
    chain.iter().flatten().next().copied().unwrap_or(default)
}

/// Coerce whatever shape the price arrived in to a non-negative integer
/// minor unit. Unparseable or negative values collapse to zero.
fn coerce_price(raw: Option<&RawPrice>) -> i64 {
    let value = match raw {
        None => 0,
        Some(RawPrice::Int(n)) => *n,
        Some(RawPrice::Float(f)) => *f as i64,
        Some(RawPrice::Text(s)) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
    };
    value.max(0)
}
