//! Magic property lists: decoding and additive merging.

use std::collections::BTreeMap;

use log::warn;

use crate::bits::{BitCursor, BitError};
use crate::catalog::Catalog;
use crate::Result;

/// Property id to its values, in saved order.
pub type PropertyMap = BTreeMap<u16, Vec<i32>>;

/// Id that closes a property list.
pub const LIST_TERMINATOR: u16 = 0x1FF;
const ID_WIDTH: usize = 9;

/// How a property list ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ListEnd {
    Terminator,
    /// The buffer ran out before the terminator; nothing after this list
    /// can be read.
    Truncated,
}

/// Add `other` into `into`, summing values position by position.
pub fn merge_into(into: &mut PropertyMap, other: &PropertyMap) {
    for (id, values) in other {
        let slot = into.entry(*id).or_default();
        for (i, value) in values.iter().enumerate() {
            match slot.get_mut(i) {
                Some(existing) => *existing += value,
                None => slot.push(*value),
            }
        }
    }
}

pub fn merged<'a>(maps: impl IntoIterator<Item = &'a PropertyMap>) -> PropertyMap {
    let mut out = PropertyMap::new();
    for map in maps {
        merge_into(&mut out, map);
    }
    out
}

/// Read one property list from the cursor.
///
/// A read past the end of the buffer stops the list with whatever was read
/// so far; an id the catalog does not know is an error.
pub fn read_list(cursor: &mut BitCursor<'_>, catalog: &dyn Catalog) -> Result<(PropertyMap, ListEnd)> {
    let mut props = PropertyMap::new();

    loop {
        let id = match cursor.read(ID_WIDTH) {
            Ok(id) => id as u16,
            Err(err) => return truncated(props, cursor, err),
        };
        if id == LIST_TERMINATOR {
            return Ok((props, ListEnd::Terminator));
        }

        let stat = catalog.stat(id)?;
        let mut values = Vec::with_capacity(stat.widths.len());
        for width in stat.widths {
            match cursor.read(*width as usize) {
                Ok(raw) => values.push((raw as i64 - stat.bias as i64) as i32),
                Err(err) => return truncated(props, cursor, err),
            }
        }

        let mut entry = PropertyMap::new();
        entry.insert(id, values);
        merge_into(&mut props, &entry);
    }
}

fn truncated(props: PropertyMap, cursor: &BitCursor<'_>, err: BitError) -> Result<(PropertyMap, ListEnd)> {
    match err {
        BitError::OutOfRange { .. } => {
            warn!(
                "property list cut short at bit {} after {} entries",
                cursor.position(),
                props.len()
            );
            Ok((props, ListEnd::Truncated))
        }
        other => Err(other.into()),
    }
}
