//! Orderings for ranking shops against each other.
//!
//! Each comparator is a total order on one key only; shops with equal
//! keys compare equal, so `sort_by` keeps their relative order.

use std::cmp::Ordering;

use crate::paper::PaperType;

use super::PrintingShop;

/// Ascending by accumulated sales.
pub fn by_total_sales(a: &PrintingShop, b: &PrintingShop) -> Ordering {
    a.total_sales().total_cmp(&b.total_sales())
}

/// Ascending by head count.
pub fn by_employee_count(a: &PrintingShop, b: &PrintingShop) -> Ordering {
    a.employees().len().cmp(&b.employees().len())
}

/// Ascending by the configured price of `paper_type`; unpriced counts as 0.
pub fn by_paper_price(
    paper_type: PaperType,
) -> impl Fn(&PrintingShop, &PrintingShop) -> Ordering {
    move |a: &PrintingShop, b: &PrintingShop| {
        a.price_for_paper(paper_type)
            .total_cmp(&b.price_for_paper(paper_type))
    }
}
