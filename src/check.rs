//! Sortedness verification.

use crate::core::Element;

/// Returns `true` if `elements` is in ascending order.
///
/// A linear scan over adjacent pairs, stopping at the first violation.
/// Adjacent numbers must be non-decreasing; a number directly following
/// an opaque token is a violation, since numbers belong before the
/// opaque tail. Every other adjacent pairing without a total order
/// (number-then-opaque at the boundary, opaque pairs within the tail) is
/// accepted permissively, opaque tokens being mutually unordered. NaN
/// never registers as an inversion.
///
/// This is a verification utility for callers and tests; the sort itself
/// never consults it.
///
/// # Examples
///
/// ```
/// use spansort::{is_sorted, Element};
///
/// let ordered: Vec<Element> = [1, 2, 3].map(Element::from).into();
/// assert!(is_sorted(&ordered));
///
/// let tail = vec![Element::from(2), Element::from("a"), Element::from("b")];
/// assert!(is_sorted(&tail));
///
/// let misplaced = vec![Element::from("a"), Element::from(2)];
/// assert!(!is_sorted(&misplaced));
/// ```
pub fn is_sorted(elements: &[Element]) -> bool {
    elements.windows(2).all(|pair| match (&pair[0], &pair[1]) {
        (Element::Number(prev), Element::Number(next)) => !(next < prev),
        (Element::Opaque(_), Element::Number(_)) => false,
        _ => true,
    })
}
