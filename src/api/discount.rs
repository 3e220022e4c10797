//! Handler for `/discount` - the stateless calculator.
//!
//! Nothing here touches the database; the endpoint is a thin wire adapter
//! over [`compute_discount`]. When no positive vendor price was supplied the
//! vendor-comparison fields are omitted from the response entirely, never
//! zeroed, since a zero vendor price is not a meaningful comparison.

use crate::core::discount::compute_discount;
use axum::{Json, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct QuoteResponse {
    after_tax: f64,
    discount_amount: f64,
    final_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    difference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commission_percent: Option<f64>,
    has_vendor_price: bool,
}

fn field(body: &Value, name: &str) -> f64 {
    body.get(name).and_then(Value::as_f64).unwrap_or(0.0)
}

/// `POST /discount` - compute a discount breakdown from a
/// price/tax/discount/vendor-price tuple. All fields are optional and
/// default to 0, mirroring the calculator form.
pub async fn quote(Json(body): Json<Value>) -> impl IntoResponse {
    let breakdown = compute_discount(
        field(&body, "amount"),
        field(&body, "tax_percent"),
        field(&body, "discount_percent"),
        field(&body, "vendor_price"),
    );

    Json(QuoteResponse {
        after_tax: breakdown.after_tax,
        discount_amount: breakdown.discount_amount,
        final_amount: breakdown.final_amount,
        difference: breakdown.has_vendor_price.then_some(breakdown.difference),
        commission_percent: breakdown
            .has_vendor_price
            .then_some(breakdown.commission_percent),
        has_vendor_price: breakdown.has_vendor_price,
    })
}
