use crate::domain::model::{Product, ProductReport};
use crate::utils::error::{ReportError, Result};

/// Builds the report from products in decode order.
///
/// Both selections scan the same unmodified slice, and each resolves ties
/// in favour of the record that was decoded first.
pub fn build_report(products: &[Product]) -> Result<ProductReport> {
    let Some((first, rest)) = products.split_first() else {
        return Err(ReportError::EmptyResult);
    };

    Ok(ProductReport {
        most_expensive: first_max_by(first, rest, |p| p.price).clone(),
        highest_rated: first_max_by(first, rest, |p| p.rating).clone(),
    })
}

pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let (first, rest) = products.split_first()?;
    Some(first_max_by(first, rest, |p| p.price))
}

pub fn highest_rated(products: &[Product]) -> Option<&Product> {
    let (first, rest) = products.split_first()?;
    Some(first_max_by(first, rest, |p| p.rating))
}

/// Element holding the maximum key, starting from `first`. Ties keep the
/// earlier element and NaN never beats a number.
fn first_max_by<'a, F>(first: &'a Product, rest: &'a [Product], key: F) -> &'a Product
where
    F: Fn(&Product) -> f64,
{
    let mut best = first;
    for candidate in rest {
        let (value, current) = (key(candidate), key(best));
        if value > current || (current.is_nan() && !value.is_nan()) {
            best = candidate;
        }
    }
    best
}
