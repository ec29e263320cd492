//! Stash container: header, page framing and reassembly.

use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::chunks::{self, FuseError, ITEM_MARKER, PAGE_MARKER};
use crate::item::{self, Item};
use crate::page::Page;
use crate::{Result, SorterError};

const SHARED_TAG: &[u8; 4] = b"SSS\0";
const PERSONAL_TAG: &[u8; 4] = b"CSTM";
const GOLD_VERSION: &[u8; 2] = b"02";

const SHARED_PAGE_FLAGS: [u8; 4] = [1, 0, 0, 0];
const PERSONAL_PAGE_FLAGS: [u8; 4] = [0, 0, 0, 0];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StashKind {
    Shared,
    Personal,
}

#[derive(Clone, Debug)]
pub struct Stash {
    pub kind: StashKind,
    pub version: [u8; 2],
    /// Shared gold, present for shared stashes of version `02`.
    pub gold: Option<[u8; 4]>,
    /// Unused bytes of personal stashes, kept as found.
    pub reserved: Option<[u8; 4]>,
    pub declared_pages: u32,
    /// Page payloads, without their `ST` marker.
    pub pages: Vec<Vec<u8>>,
}

/// One page's header and its item records, socket-fused.
#[derive(Clone, Debug)]
pub struct PageContents {
    pub flags: Option<[u8; 4]>,
    pub name: Vec<u8>,
    pub declared_items: u16,
    pub items: Vec<Vec<u8>>,
}

fn take<'a>(data: &'a [u8], pos: &mut usize, len: usize, what: &str) -> Result<&'a [u8]> {
    let end = *pos + len;
    let bytes = data
        .get(*pos..end)
        .ok_or_else(|| SorterError::Format(format!("file ends inside the {what}")))?;
    *pos = end;
    Ok(bytes)
}

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

impl Stash {
    pub fn parse(data: &[u8]) -> Result<Stash> {
        let mut pos = 0usize;
        let tag = take(data, &mut pos, 4, "stash tag")?;
        let kind = if tag == SHARED_TAG {
            StashKind::Shared
        } else if tag == PERSONAL_TAG {
            StashKind::Personal
        } else {
            return Err(SorterError::Format(format!("unknown stash tag {tag:02X?}")));
        };

        let version: [u8; 2] = array(take(data, &mut pos, 2, "version")?);
        let gold = if kind == StashKind::Shared && &version == GOLD_VERSION {
            Some(array(take(data, &mut pos, 4, "shared gold")?))
        } else {
            None
        };
        let reserved = if kind == StashKind::Personal {
            Some(array(take(data, &mut pos, 4, "header")?))
        } else {
            None
        };
        let declared_pages = u32::from_le_bytes(array(take(data, &mut pos, 4, "page count")?));

        let mut parts = chunks::split(&data[pos..], PAGE_MARKER).into_iter();
        if let Some(preamble) = parts.next() {
            if !preamble.is_empty() {
                return Err(SorterError::Format(format!(
                    "{} stray bytes before the first page",
                    preamble.len()
                )));
            }
        }
        let pages: Vec<Vec<u8>> = parts.map(<[u8]>::to_vec).collect();
        if pages.len() != declared_pages as usize {
            warn!(
                "stash declares {declared_pages} pages but {} were found",
                pages.len()
            );
        }
        info!("read {:?} stash with {} pages", kind, pages.len());

        Ok(Stash {
            kind,
            version,
            gold,
            reserved,
            declared_pages,
            pages,
        })
    }

    /// Build the output file: the original header, the ignored pages as
    /// they were, then the new pages.
    pub fn assemble(&self, ignored: &[Vec<u8>], new_pages: &[Page]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(match self.kind {
            StashKind::Shared => SHARED_TAG,
            StashKind::Personal => PERSONAL_TAG,
        });
        out.extend_from_slice(&self.version);
        if let Some(gold) = &self.gold {
            out.extend_from_slice(gold);
        }
        if let Some(reserved) = &self.reserved {
            out.extend_from_slice(reserved);
        }
        let count = (ignored.len() + new_pages.len()) as u32;
        out.extend_from_slice(&count.to_le_bytes());

        for payload in ignored {
            out.extend_from_slice(PAGE_MARKER);
            out.extend_from_slice(payload);
        }

        let flags = match self.kind {
            StashKind::Shared => SHARED_PAGE_FLAGS,
            StashKind::Personal => PERSONAL_PAGE_FLAGS,
        };
        for page in new_pages {
            out.extend_from_slice(PAGE_MARKER);
            out.extend_from_slice(&flags);
            out.push(0);
            out.extend_from_slice(ITEM_MARKER);
            out.extend_from_slice(&(page.len() as u16).to_le_bytes());
            for item in page.items() {
                out.extend_from_slice(ITEM_MARKER);
                out.extend_from_slice(item.raw());
            }
        }
        out
    }
}

fn find_nul(data: &[u8], from: usize) -> Option<usize> {
    data.get(from..)?.iter().position(|b| *b == 0).map(|i| from + i)
}

/// Split a page payload into its header fields and fused item records.
pub fn parse_page(payload: &[u8]) -> Result<PageContents> {
    let mut pos = 0usize;

    // Flags are only there when the first NUL is not the end of a name
    // directly followed by the item list.
    let flags = match find_nul(payload, 0) {
        Some(nul) if payload.get(nul + 1..nul + 3) != Some(&ITEM_MARKER[..]) => {
            Some(array(take(payload, &mut pos, 4, "page flags")?))
        }
        _ => None,
    };

    let nul = find_nul(payload, pos)
        .ok_or_else(|| SorterError::Format("page name is not terminated".to_string()))?;
    let name = payload[pos..nul].to_vec();
    pos = nul + 1;

    if take(payload, &mut pos, 2, "item list header")? != ITEM_MARKER {
        return Err(SorterError::Format("page item list does not start with JM".to_string()));
    }
    let declared_items = u16::from_le_bytes(array(take(payload, &mut pos, 2, "item count")?));

    let parts = chunks::split(&payload[pos..], ITEM_MARKER);
    let preamble = parts.first().copied().unwrap_or_default();
    let records = parts.get(1..).unwrap_or_default();
    if !preamble.is_empty() {
        return Err(SorterError::Format(format!(
            "{} stray bytes before the first item",
            preamble.len()
        )));
    }

    let items = chunks::fuse_sockets(records, item::filled_sockets).map_err(|err| match err {
        FuseError::Peek(err) => SorterError::Bits(err),
        FuseError::MissingChildren {
            parent,
            expected,
            found,
        } => SorterError::Format(format!(
            "item {parent} expects {expected} socketed items but only {found} follow"
        )),
    })?;

    if items.len() != declared_items as usize {
        warn!(
            "page declares {declared_items} items but {} were found",
            items.len()
        );
    }
    debug!("page {:?}: {} items", String::from_utf8_lossy(&name), items.len());

    Ok(PageContents {
        flags,
        name,
        declared_items,
        items,
    })
}

/// Decode every item of every page, failing on the first bad one.
pub fn decode_pages(pages: &[Vec<u8>], catalog: &dyn Catalog) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (idx, payload) in pages.iter().enumerate() {
        let contents = parse_page(payload)?;
        for raw in contents.items {
            let item = Item::decode(raw, catalog).map_err(|err| {
                warn!("page {idx}: {err}");
                err
            })?;
            items.push(item);
        }
    }
    Ok(items)
}
