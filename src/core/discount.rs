//! Discount and vendor-commission calculator - pure arithmetic, no I/O and
//! no persistence.
//!
//! The computation order is fixed: tax is applied first, then the discount
//! comes off the taxed amount. The vendor comparison is only meaningful when
//! a positive vendor price was supplied; [`DiscountBreakdown::has_vendor_price`]
//! tells consumers whether to show those fields at all (a zero vendor price
//! is "no comparison", not "a free vendor").

use crate::core::week::finite_or_zero;
use serde::Serialize;

/// Result of one discount calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountBreakdown {
    /// `amount * (1 + tax_percent / 100)`.
    pub after_tax: f64,
    /// Savings taken off the taxed amount.
    pub discount_amount: f64,
    /// `after_tax - discount_amount`.
    pub final_amount: f64,
    /// `vendor_price - final_amount`; meaningful only with a vendor price.
    pub difference: f64,
    /// Signed markup of the vendor price over the computed fair price.
    /// Positive means the vendor charges more, negative means below market.
    pub commission_percent: f64,
    /// True iff a positive vendor price was supplied.
    pub has_vendor_price: bool,
}

/// Computes the discount breakdown for a price/tax/discount/vendor tuple.
///
/// Any non-finite input or intermediate result degrades to 0; the function
/// never panics and never returns a non-finite value. The commission is
/// guarded: it is 0 unless both `final_amount` and `vendor_price` are
/// positive, so a zeroed-out price never produces a division blow-up.
#[must_use]
pub fn compute_discount(
    amount: f64,
    tax_percent: f64,
    discount_percent: f64,
    vendor_price: f64,
) -> DiscountBreakdown {
    let amount = finite_or_zero(amount);
    let tax = finite_or_zero(tax_percent);
    let discount = finite_or_zero(discount_percent);
    let vendor = finite_or_zero(vendor_price);

    let after_tax = amount * (1.0 + tax / 100.0);
    let discount_amount = after_tax * (discount / 100.0);
    let final_amount = after_tax - discount_amount;
    let difference = vendor - final_amount;

    let commission_percent = if final_amount > 0.0 && vendor > 0.0 {
        ((vendor - final_amount) / final_amount) * 100.0
    } else {
        0.0
    };

    DiscountBreakdown {
        after_tax: finite_or_zero(after_tax),
        discount_amount: finite_or_zero(discount_amount),
        final_amount: finite_or_zero(final_amount),
        difference: finite_or_zero(difference),
        commission_percent: finite_or_zero(commission_percent),
        has_vendor_price: vendor > 0.0,
    }
}
