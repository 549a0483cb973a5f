use std::collections::BTreeMap;

use crate::models::Clipping;

/// Partition clippings by exact title and order each group by position
///
/// Titles are compared byte for byte, with no case or whitespace folding.
/// Within a group, clippings with equal keys keep their input order.
pub fn group_by_title(clippings: Vec<Clipping>) -> BTreeMap<String, Vec<Clipping>> {
    let mut groups: BTreeMap<String, Vec<Clipping>> = BTreeMap::new();
    for clipping in clippings {
        groups.entry(clipping.title.clone()).or_default().push(clipping);
    }

    for group in groups.values_mut() {
        sort_by_position(group);
    }

    groups
}

/// Stable sort by order key, unranked clippings last
pub fn sort_by_position(group: &mut [Clipping]) {
    group.sort_by_key(|clipping| clipping.order.sort_rank());
}
