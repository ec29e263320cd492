//! Item codec.
//!
//! An item record is read once into an [`Item`]; the raw bytes stay the
//! source of truth. Only the position and the item code are ever written
//! back, by patching the raw buffer in place.
//!
//! Offsets below are in bits from the first byte after the item's `JM`
//! marker.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bits::{read_bits, write_bits, BitCursor, BitError};
use crate::catalog::{BaseItem, Catalog, ItemKind};
use crate::chunks::{self, ITEM_MARKER};
use crate::properties::{self, ListEnd, PropertyMap};
use crate::{Result, SorterError};

const IDENTIFIED: usize = 4;
const SOCKETED: usize = 11;
const EAR: usize = 16;
const SIMPLE: usize = 21;
const ETHEREAL: usize = 22;
const PERSONALIZED: usize = 24;
const RUNEWORD: usize = 26;
const VERSION: usize = 32;
const POS_X: usize = 49;
const POS_Y: usize = 53;
const POS_WIDTH: usize = 4;
const CODE: usize = 60;
const CODE_LEN: usize = 4;
const FILLED_SOCKETS: usize = 92;
const IDENTIFIER: usize = 95;
const LEVEL: usize = 127;
const QUALITY: usize = 134;
const EXTENDED: usize = 138;

const DEFENSE_BIAS: i32 = 10;
const PERSONAL_NAME_MAX: usize = 16;
const TOMES: [&str; 2] = ["tbk", "ibk"];

/// Item format revision, as stamped by the game version that created it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Version {
    Pre108,
    Classic108,
    Expansion108,
    Classic110,
    Expansion110,
    Other(u8),
}

impl From<u8> for Version {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Version::Pre108,
            1 => Version::Classic108,
            2 => Version::Expansion108,
            100 => Version::Classic110,
            101 => Version::Expansion110,
            other => Version::Other(other),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    Low,
    Normal,
    High,
    Magic,
    Set,
    Rare,
    Unique,
    Crafted,
    Other(u8),
}

impl ItemQuality {
    pub fn to_u8(self) -> u8 {
        match self {
            ItemQuality::Low => 1,
            ItemQuality::Normal => 2,
            ItemQuality::High => 3,
            ItemQuality::Magic => 4,
            ItemQuality::Set => 5,
            ItemQuality::Rare => 6,
            ItemQuality::Unique => 7,
            ItemQuality::Crafted => 8,
            ItemQuality::Other(raw) => raw,
        }
    }
}

impl From<u8> for ItemQuality {
    fn from(raw: u8) -> Self {
        match raw {
            1 => ItemQuality::Low,
            2 => ItemQuality::Normal,
            3 => ItemQuality::High,
            4 => ItemQuality::Magic,
            5 => ItemQuality::Set,
            6 => ItemQuality::Rare,
            7 => ItemQuality::Unique,
            8 => ItemQuality::Crafted,
            other => ItemQuality::Other(other),
        }
    }
}

/// Fields that follow the quality and depend on it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum QualityData {
    None,
    /// Low and high quality items carry a 3-bit sub-type.
    Grade { value: u8 },
    Magic { prefix: u16, suffix: u16 },
    Set { id: u16, set_name: String },
    Unique { id: u16 },
    /// Rare and crafted items: two name ids and up to three affixes each side.
    Rare {
        first_name: u8,
        second_name: u8,
        prefixes: Vec<u16>,
        suffixes: Vec<u16>,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Durability {
    pub max: u16,
    pub current: Option<u16>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Item {
    #[serde(skip)]
    raw: Vec<u8>,
    pub code: String,
    pub name: &'static str,
    pub kind: ItemKind,
    pub width: u8,
    pub height: u8,
    pub identified: bool,
    pub socketed: bool,
    pub ear: bool,
    pub simple: bool,
    pub ethereal: bool,
    pub personalized: bool,
    pub runeword: bool,
    pub version: Version,
    pub x: u8,
    pub y: u8,
    pub filled_sockets: u8,
    pub identifier: Option<u32>,
    pub level: Option<u8>,
    pub quality: Option<ItemQuality>,
    pub picture_id: Option<u8>,
    pub class_data: Option<u16>,
    pub quality_data: QualityData,
    pub runeword_id: Option<u16>,
    pub personal_name: Option<String>,
    pub timestamp: bool,
    pub defense: Option<i32>,
    pub durability: Option<Durability>,
    pub quantity: Option<u16>,
    pub total_sockets: Option<u8>,
    pub set_list_flags: Option<u8>,
    pub magic_properties: PropertyMap,
    pub set_properties: PropertyMap,
    pub runeword_properties: PropertyMap,
    pub socketable_properties: PropertyMap,
    pub socketables: Vec<Item>,
}

/// Number of socketed children that follow an item chunk.
pub fn filled_sockets(payload: &[u8]) -> std::result::Result<usize, BitError> {
    if read_bits(payload, EAR, 1)? == 1 {
        return Ok(0);
    }
    Ok(read_bits(payload, FILLED_SOCKETS, 3)? as usize)
}

fn read_code(payload: &[u8]) -> std::result::Result<String, BitError> {
    let mut code = String::with_capacity(CODE_LEN);
    for i in 0..CODE_LEN {
        let ch = read_bits(payload, CODE + i * 8, 8)? as u8;
        if ch != b' ' {
            code.push(ch as char);
        }
    }
    Ok(code)
}

fn flag(payload: &[u8], offset: usize) -> std::result::Result<bool, BitError> {
    Ok(read_bits(payload, offset, 1)? == 1)
}

impl Item {
    /// Decode a socket-fused item buffer: the parent's payload followed by
    /// `JM` + payload for each socketed child.
    pub fn decode(raw: Vec<u8>, catalog: &dyn Catalog) -> Result<Item> {
        let sockets = filled_sockets(&raw)?;
        let parts = chunks::split(&raw, ITEM_MARKER);
        if parts.len() <= sockets {
            return Err(SorterError::Format(format!(
                "item declares {} filled sockets but carries {}",
                sockets,
                parts.len() - 1
            )));
        }

        // Children are the trailing chunks; anything before them is the
        // parent, even if its bits happen to contain the marker.
        let children = &parts[parts.len() - sockets..];
        let children_len: usize = children.iter().map(|c| c.len() + ITEM_MARKER.len()).sum();
        let payload = &raw[..raw.len() - children_len];

        let mut item = Item::decode_payload(payload, catalog)?;

        let slot = item.kind.socket_slot();
        for child in children {
            let child = Item::decode(child.to_vec(), catalog)?;
            let bonus = match catalog.socket_effect(&child.code, slot) {
                Some(effect) => effect,
                None => child.magic_properties.clone(),
            };
            properties::merge_into(&mut item.socketable_properties, &bonus);
            item.socketables.push(child);
        }

        item.raw = raw;
        debug!(
            "decoded {} at ({}, {}) with {} socketed",
            item.code,
            item.x,
            item.y,
            item.socketables.len()
        );
        Ok(item)
    }

    fn decode_payload(payload: &[u8], catalog: &dyn Catalog) -> Result<Item> {
        let ear = flag(payload, EAR)?;
        let code = if ear { "ear".to_string() } else { read_code(payload)? };
        let base = catalog.base(&code)?;

        let mut item = Item {
            raw: Vec::new(),
            name: base.name,
            kind: base.kind,
            width: base.width,
            height: base.height,
            identified: flag(payload, IDENTIFIED)?,
            socketed: flag(payload, SOCKETED)?,
            ear,
            simple: flag(payload, SIMPLE)?,
            ethereal: flag(payload, ETHEREAL)?,
            personalized: flag(payload, PERSONALIZED)?,
            runeword: flag(payload, RUNEWORD)?,
            version: Version::from(read_bits(payload, VERSION, 8)? as u8),
            x: read_bits(payload, POS_X, POS_WIDTH)? as u8,
            y: read_bits(payload, POS_Y, POS_WIDTH)? as u8,
            filled_sockets: 0,
            code,
            identifier: None,
            level: None,
            quality: None,
            picture_id: None,
            class_data: None,
            quality_data: QualityData::None,
            runeword_id: None,
            personal_name: None,
            timestamp: false,
            defense: None,
            durability: None,
            quantity: None,
            total_sockets: None,
            set_list_flags: None,
            magic_properties: PropertyMap::new(),
            set_properties: PropertyMap::new(),
            runeword_properties: PropertyMap::new(),
            socketable_properties: PropertyMap::new(),
            socketables: Vec::new(),
        };

        if ear {
            return Ok(item);
        }
        item.filled_sockets = read_bits(payload, FILLED_SOCKETS, 3)? as u8;
        if item.simple {
            return Ok(item);
        }

        item.identifier = Some(read_bits(payload, IDENTIFIER, 32)?);
        item.level = Some(read_bits(payload, LEVEL, 7)? as u8);
        let quality = ItemQuality::from(read_bits(payload, QUALITY, 4)? as u8);
        item.quality = Some(quality);

        let mut cursor = BitCursor::at(payload, EXTENDED);
        item.read_extended(&mut cursor, quality, base, catalog)?;
        Ok(item)
    }

    /// Everything after the quality nibble, in saved order.
    fn read_extended(
        &mut self,
        cur: &mut BitCursor<'_>,
        quality: ItemQuality,
        base: &BaseItem,
        catalog: &dyn Catalog,
    ) -> Result<()> {
        let multi_picture = cur.read_flag()?;
        self.picture_id = cur.read_if(multi_picture, 3)?.map(|v| v as u8);
        let class_specific = cur.read_flag()?;
        self.class_data = cur.read_if(class_specific, 11)?.map(|v| v as u16);

        self.quality_data = match quality {
            ItemQuality::Low | ItemQuality::High => QualityData::Grade {
                value: cur.read(3)? as u8,
            },
            ItemQuality::Magic => QualityData::Magic {
                prefix: cur.read(11)? as u16,
                suffix: cur.read(11)? as u16,
            },
            ItemQuality::Set => {
                let id = cur.read(12)? as u16;
                QualityData::Set {
                    id,
                    set_name: catalog.set_name(id)?.to_string(),
                }
            }
            ItemQuality::Unique => QualityData::Unique {
                id: cur.read(12)? as u16,
            },
            ItemQuality::Rare | ItemQuality::Crafted => {
                let first_name = cur.read(8)? as u8;
                let second_name = cur.read(8)? as u8;
                let mut prefixes = Vec::new();
                let mut suffixes = Vec::new();
                for slot in 0..6 {
                    let present = cur.read_flag()?;
                    if let Some(affix) = cur.read_if(present, 11)? {
                        if slot % 2 == 0 {
                            prefixes.push(affix as u16);
                        } else {
                            suffixes.push(affix as u16);
                        }
                    }
                }
                QualityData::Rare {
                    first_name,
                    second_name,
                    prefixes,
                    suffixes,
                }
            }
            ItemQuality::Normal | ItemQuality::Other(_) => QualityData::None,
        };

        if self.runeword {
            self.runeword_id = Some(cur.read(12)? as u16);
            cur.skip(4)?;
        }

        // The game pads the name with NULs, not spaces; a space is part of
        // the name.
        if self.personalized {
            let mut name = String::new();
            for _ in 0..PERSONAL_NAME_MAX {
                let ch = cur.read(7)? as u8;
                if ch == 0 {
                    break;
                }
                name.push(ch as char);
            }
            self.personal_name = Some(name);
        }

        if TOMES.contains(&self.code.as_str()) {
            cur.skip(5)?;
        }

        self.timestamp = cur.read_flag()?;

        if self.kind.has_defense() {
            self.defense = Some(cur.read(11)? as i32 - DEFENSE_BIAS);
        }
        if base.durable {
            let max = cur.read(8)? as u16;
            let current = cur.read_if(max > 0, 9)?.map(|v| v as u16);
            self.durability = Some(Durability { max, current });
        }
        if base.stackable {
            self.quantity = Some(cur.read(9)? as u16);
        }
        if self.socketed {
            self.total_sockets = Some(cur.read(4)? as u8);
        }
        if quality == ItemQuality::Set {
            self.set_list_flags = Some(cur.read(5)? as u8);
        }

        let (magic, mut end) = properties::read_list(cur, catalog)?;
        self.magic_properties = magic;

        if let Some(flags) = self.set_list_flags {
            for bit in 0..5 {
                if end == ListEnd::Truncated {
                    break;
                }
                if flags & (1 << bit) != 0 {
                    let (list, list_end) = properties::read_list(cur, catalog)?;
                    properties::merge_into(&mut self.set_properties, &list);
                    end = list_end;
                }
            }
        }

        if self.runeword && end == ListEnd::Terminator {
            let (list, _) = properties::read_list(cur, catalog)?;
            self.runeword_properties = list;
        }

        Ok(())
    }

    /// Raw bytes as they go back into the stash, socketed children included.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// Patch the stash coordinates in the raw buffer.
    pub fn set_position(&mut self, x: u8, y: u8) -> std::result::Result<(), BitError> {
        for value in [x, y] {
            if value as u32 >> POS_WIDTH != 0 {
                return Err(BitError::ValueOverflow {
                    value: value as u32,
                    width: POS_WIDTH,
                });
            }
        }
        write_bits(&mut self.raw, POS_X, POS_WIDTH, x as u32)?;
        write_bits(&mut self.raw, POS_Y, POS_WIDTH, y as u32)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Rewrite the item code in place and refresh what derives from it.
    pub fn set_code(&mut self, code: &str, catalog: &dyn Catalog) -> Result<()> {
        if code.len() > CODE_LEN || !code.is_ascii() {
            return Err(SorterError::Format(format!("invalid item code {code:?}")));
        }
        let base = catalog.base(code)?;

        let mut padded = [b' '; CODE_LEN];
        padded[..code.len()].copy_from_slice(code.as_bytes());
        for (i, ch) in padded.iter().enumerate() {
            write_bits(&mut self.raw, CODE + i * 8, 8, *ch as u32)?;
        }

        self.code = code.to_string();
        self.name = base.name;
        self.kind = base.kind;
        self.width = base.width;
        self.height = base.height;
        Ok(())
    }

    /// Sum of the item's own, set, runeword and socketed properties.
    pub fn all_properties(&self) -> PropertyMap {
        properties::merged([
            &self.magic_properties,
            &self.set_properties,
            &self.runeword_properties,
            &self.socketable_properties,
        ])
    }

    pub fn set_name(&self) -> Option<&str> {
        match &self.quality_data {
            QualityData::Set { set_name, .. } => Some(set_name),
            _ => None,
        }
    }

    pub fn unique_id(&self) -> Option<u16> {
        match self.quality_data {
            QualityData::Unique { id } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::bits::fixtures::BitWriter;

    /// Describes a synthetic item record for tests.
    #[derive(Clone)]
    pub struct ItemSpec {
        pub code: &'static str,
        pub x: u8,
        pub y: u8,
        pub simple: bool,
        pub ethereal: bool,
        pub socketed: bool,
        pub filled_sockets: u8,
        pub identifier: u32,
        pub level: u8,
        pub quality: u8,
        pub extended: Vec<(usize, u32)>,
    }

    impl ItemSpec {
        pub fn simple(code: &'static str) -> Self {
            ItemSpec {
                code,
                x: 0,
                y: 0,
                simple: true,
                ethereal: false,
                socketed: false,
                filled_sockets: 0,
                identifier: 0x0102_0304,
                level: 1,
                quality: 2,
                extended: Vec::new(),
            }
        }

        /// A non-simple record; `extended` holds the fields after the
        /// quality nibble as (width, value) pairs.
        pub fn extended(code: &'static str, quality: u8, extended: Vec<(usize, u32)>) -> Self {
            ItemSpec {
                simple: false,
                quality,
                extended,
                ..ItemSpec::simple(code)
            }
        }

        pub fn at(mut self, x: u8, y: u8) -> Self {
            self.x = x;
            self.y = y;
            self
        }

        pub fn build(&self) -> Vec<u8> {
            let mut w = BitWriter::new();
            w.pad_to(IDENTIFIED).push(1, 1);
            w.pad_to(SOCKETED).push(1, self.socketed as u32);
            w.pad_to(SIMPLE).push(1, self.simple as u32);
            w.push(1, self.ethereal as u32);
            w.pad_to(VERSION).push(8, 101);
            w.pad_to(POS_X).push(4, self.x as u32).push(4, self.y as u32);
            w.pad_to(CODE);
            let mut code = [b' '; CODE_LEN];
            code[..self.code.len()].copy_from_slice(self.code.as_bytes());
            for ch in code {
                w.push(8, ch as u32);
            }
            w.push(3, self.filled_sockets as u32);
            if !self.simple {
                w.push(32, self.identifier)
                    .push(7, self.level as u32)
                    .push(4, self.quality as u32);
                for (width, value) in &self.extended {
                    w.push(*width, *value);
                }
            }
            w.finish()
        }
    }

    /// Parent payload followed by `JM` + payload per child.
    pub fn fused(parent: &ItemSpec, children: &[ItemSpec]) -> Vec<u8> {
        let mut raw = parent.build();
        for child in children {
            raw.extend_from_slice(ITEM_MARKER);
            raw.extend_from_slice(&child.build());
        }
        raw
    }

    pub fn item(spec: &ItemSpec) -> Item {
        Item::decode(spec.build(), &crate::catalog::StaticCatalog).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{fused, item, ItemSpec};
    use super::*;
    use crate::catalog::StaticCatalog;

    const END: (usize, u32) = (9, 0x1FF);

    #[test]
    fn decodes_a_simple_rune() {
        let rune = item(&ItemSpec::simple("r10").at(3, 7));
        assert_eq!(rune.code, "r10");
        assert_eq!(rune.kind, ItemKind::Rune);
        assert_eq!((rune.width, rune.height), (1, 1));
        assert_eq!(rune.position(), (3, 7));
        assert_eq!(rune.version, Version::Expansion110);
        assert!(rune.simple && rune.identified && !rune.ear);
        assert_eq!(rune.quality, None);
        assert_eq!(rune.identifier, None);
    }

    #[test]
    fn raw_bytes_survive_decoding_unchanged() {
        let spec = ItemSpec::simple("gpr").at(9, 9);
        let raw = spec.build();
        let gem = Item::decode(raw.clone(), &StaticCatalog).unwrap();
        assert_eq!(gem.raw(), &raw[..]);
    }

    #[test]
    fn set_position_patches_only_the_coordinates() {
        let raw = ItemSpec::simple("r01").at(1, 2).build();
        let mut rune = Item::decode(raw.clone(), &StaticCatalog).unwrap();
        rune.set_position(15, 9).unwrap();
        assert_eq!(rune.position(), (15, 9));

        let patched = rune.raw();
        assert_eq!(patched.len(), raw.len());
        for bit in 0..raw.len() * 8 {
            if (POS_X..POS_Y + POS_WIDTH).contains(&bit) {
                continue;
            }
            assert_eq!(
                read_bits(patched, bit, 1).unwrap(),
                read_bits(&raw, bit, 1).unwrap(),
                "bit {bit} changed"
            );
        }
        let again = Item::decode(patched.to_vec(), &StaticCatalog).unwrap();
        assert_eq!(again.position(), (15, 9));
        assert!(rune.set_position(16, 0).is_err());
    }

    #[test]
    fn set_code_rewrites_the_code_field() {
        let mut gem = item(&ItemSpec::simple("gcv"));
        gem.set_code("gfv", &StaticCatalog).unwrap();
        assert_eq!(gem.code, "gfv");
        assert_eq!(gem.name, "Flawed Amethyst");
        let again = Item::decode(gem.raw().to_vec(), &StaticCatalog).unwrap();
        assert_eq!(again.code, "gfv");
        assert!(gem.set_code("zzz", &StaticCatalog).is_err());
    }

    #[test]
    fn decodes_a_magic_ring_with_properties() {
        let spec = ItemSpec::extended(
            "rin",
            4,
            vec![
                (1, 1),
                (3, 2),
                (1, 0),
                (11, 300),
                (11, 712),
                (1, 0),
                (9, 80),
                (8, 25 + 100),
                END,
            ],
        );
        let ring = item(&spec);
        assert_eq!(ring.quality, Some(ItemQuality::Magic));
        assert_eq!(ring.level, Some(1));
        assert_eq!(ring.identifier, Some(0x0102_0304));
        assert_eq!(ring.picture_id, Some(2));
        assert_eq!(ring.class_data, None);
        assert_eq!(
            ring.quality_data,
            QualityData::Magic {
                prefix: 300,
                suffix: 712
            }
        );
        assert!(!ring.timestamp);
        assert_eq!(ring.magic_properties.get(&80), Some(&vec![25]));
    }

    #[test]
    fn rare_affix_slots_are_gated_by_presence_bits() {
        let spec = ItemSpec::extended(
            "amu",
            6,
            vec![
                (1, 0),
                (1, 0),
                (8, 12),
                (8, 40),
                (1, 1),
                (11, 0),
                (1, 0),
                (1, 0),
                (1, 1),
                (11, 77),
                (1, 1),
                (11, 5),
                (1, 0),
                (1, 0),
                END,
            ],
        );
        let amulet = item(&spec);
        assert_eq!(
            amulet.quality_data,
            QualityData::Rare {
                first_name: 12,
                second_name: 40,
                prefixes: vec![0, 5],
                suffixes: vec![77],
            }
        );
    }

    #[test]
    fn armor_reads_defense_durability_and_set_lists() {
        let spec = ItemSpec::extended(
            "uar",
            5,
            vec![
                (1, 0),
                (1, 0),
                (12, 47),
                (1, 0),
                (11, 500 + 10),
                (8, 60),
                (9, 55),
                (5, 0b00011),
                (9, 31),
                (11, 100 + 10),
                END,
                (9, 7),
                (9, 20 + 32),
                END,
                (9, 0),
                (8, 10 + 32),
                END,
            ],
        );
        let armor = item(&spec);
        assert_eq!(armor.set_name(), Some("Death's Disguise"));
        assert_eq!(armor.defense, Some(500));
        assert_eq!(
            armor.durability,
            Some(Durability {
                max: 60,
                current: Some(55)
            })
        );
        assert_eq!(armor.set_list_flags, Some(3));
        assert_eq!(armor.magic_properties.get(&31), Some(&vec![100]));
        assert_eq!(armor.set_properties.get(&7), Some(&vec![20]));
        assert_eq!(armor.set_properties.get(&0), Some(&vec![10]));
    }

    #[test]
    fn zero_max_durability_has_no_current_value() {
        let spec = ItemSpec::extended(
            "hax",
            7,
            vec![(1, 0), (1, 0), (12, 3), (1, 0), (8, 0), END],
        );
        let axe = item(&spec);
        assert_eq!(axe.unique_id(), Some(3));
        assert_eq!(
            axe.durability,
            Some(Durability {
                max: 0,
                current: None
            })
        );
        assert_eq!(axe.defense, None);
    }

    #[test]
    fn truncated_property_list_is_tolerated() {
        let spec = ItemSpec::extended("jew", 4, vec![(1, 0), (1, 0), (11, 1), (11, 2), (1, 0), (9, 19)]);
        let jewel = item(&spec);
        assert!(jewel.magic_properties.is_empty());
    }

    #[test]
    fn truncated_fixed_field_is_an_error() {
        let spec = ItemSpec::extended("rin", 4, vec![(1, 0)]);
        let err = Item::decode(spec.build(), &StaticCatalog).unwrap_err();
        assert!(matches!(err, SorterError::Bits(BitError::OutOfRange { .. })));
    }

    #[test]
    fn personalized_runeword_reads_name_and_runeword_list() {
        let mut fields = vec![(1, 0), (1, 0), (12, 27), (4, 0)];
        for ch in b"Kai" {
            fields.push((7, *ch as u32));
        }
        fields.extend([(7, 0), (1, 0), (8, 250), (9, 250), (4, 2), END, (9, 93), (7, 40 + 20), END]);
        let mut spec = ItemSpec::extended("crs", 2, fields);
        spec.socketed = true;
        let mut raw = spec.build();
        // runeword and personalized flags
        crate::bits::write_bits(&mut raw, RUNEWORD, 1, 1).unwrap();
        crate::bits::write_bits(&mut raw, PERSONALIZED, 1, 1).unwrap();

        let sword = Item::decode(raw, &StaticCatalog).unwrap();
        assert_eq!(sword.runeword_id, Some(27));
        assert_eq!(sword.personal_name.as_deref(), Some("Kai"));
        assert_eq!(sword.total_sockets, Some(2));
        assert_eq!(sword.runeword_properties.get(&93), Some(&vec![40]));
    }

    #[test]
    fn ear_skips_everything_after_the_flags() {
        let mut raw = ItemSpec::simple("r01").build();
        crate::bits::write_bits(&mut raw, EAR, 1, 1).unwrap();
        crate::bits::write_bits(&mut raw, FILLED_SOCKETS, 3, 5).unwrap();
        assert_eq!(filled_sockets(&raw).unwrap(), 0);
        let ear = Item::decode(raw, &StaticCatalog).unwrap();
        assert_eq!(ear.code, "ear");
        assert_eq!(ear.filled_sockets, 0);
    }

    #[test]
    fn socketed_children_contribute_slot_specific_bonuses() {
        let mut shield = ItemSpec::extended(
            "kit",
            2,
            vec![(1, 0), (1, 0), (1, 0), (11, 30 + 10), (8, 40), (9, 40), (4, 2), END],
        );
        shield.socketed = true;
        shield.filled_sockets = 2;
        let ruby = ItemSpec::simple("gpr");
        let jewel = ItemSpec::extended("jew", 4, vec![(1, 0), (1, 0), (11, 1), (11, 2), (1, 0), (9, 39), (8, 5 + 50), END]);

        let raw = fused(&shield, &[ruby, jewel]);
        assert_eq!(filled_sockets(&raw).unwrap(), 2);
        let shield = Item::decode(raw.clone(), &StaticCatalog).unwrap();
        assert_eq!(shield.raw(), &raw[..]);
        assert_eq!(shield.socketables.len(), 2);
        assert_eq!(shield.socketables[0].code, "gpr");
        assert_eq!(shield.socketable_properties.get(&39), Some(&vec![45]));
        assert_eq!(shield.all_properties().get(&39), Some(&vec![45]));
    }

    #[test]
    fn socket_count_mismatch_is_rejected() {
        let mut parent = ItemSpec::extended("kit", 2, vec![]);
        parent.filled_sockets = 1;
        let err = Item::decode(parent.build(), &StaticCatalog).unwrap_err();
        assert!(matches!(err, SorterError::Format(_)));
    }

    #[test]
    fn quest_weapons_read_their_durability_pair() {
        let spec = ItemSpec::extended("leg", 2, vec![(1, 0), (1, 0), (1, 0), (8, 250), (9, 250), END]);
        let leg = item(&spec);
        assert_eq!(leg.kind, ItemKind::Quest);
        assert_eq!(
            leg.durability,
            Some(Durability {
                max: 250,
                current: Some(250)
            })
        );
        assert!(leg.magic_properties.is_empty());
    }

    #[test]
    fn per_level_stats_decode() {
        let spec = ItemSpec::extended(
            "kit",
            7,
            vec![
                (1, 0),
                (1, 0),
                (12, 120),
                (1, 0),
                (11, 25 + 10),
                (8, 30),
                (9, 30),
                (9, 238),
                (6, 12),
                (9, 235),
                (6, 4),
                END,
            ],
        );
        let shield = item(&spec);
        assert_eq!(shield.magic_properties.get(&238), Some(&vec![12]));
        assert_eq!(shield.magic_properties.get(&235), Some(&vec![4]));
    }

    #[test]
    fn personalized_name_ends_at_nul_and_keeps_spaces() {
        let mut fields = vec![(1, 0), (1, 0)];
        for ch in b"Al B" {
            fields.push((7, *ch as u32));
        }
        fields.extend([(7, 0), (1, 0), (8, 250), (9, 250), END]);
        let mut raw = ItemSpec::extended("crs", 2, fields).build();
        crate::bits::write_bits(&mut raw, PERSONALIZED, 1, 1).unwrap();

        let sword = Item::decode(raw, &StaticCatalog).unwrap();
        assert_eq!(sword.personal_name.as_deref(), Some("Al B"));
        assert_eq!(sword.durability.map(|d| d.max), Some(250));
    }
}
