use std::cmp::Ordering;

use crate::models::Holiday;

/// Total order over the records of a single date, used to keep each per-date
/// set sorted and duplicate-free.
///
/// Tie-break chain: value-equal records compare `Equal`; otherwise an absent
/// id sorts before any assigned id and unequal assigned ids compare
/// numerically; records sharing an id state fall through to `name`, then to
/// the category's textual form.
///
/// This is deliberately a free function rather than an `Ord` impl: the order
/// is only meaningful within one date's set, and `Equal` coincides with
/// record equality only there.
pub fn holiday_order(a: &Holiday, b: &Holiday) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a.id, b.id) {
        (Some(x), Some(y)) if x != y => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // Both absent, or both assigned the same id: order by content.
        _ => a
            .name
            .cmp(&b.name)
            .then_with(|| a.category.as_str().cmp(b.category.as_str())),
    }
}
