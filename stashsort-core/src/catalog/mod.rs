//! Static game tables: base items, saved stat layouts, gems, runes, sets.
//!
//! The codec and the upgrade engines only see the [`Catalog`] trait, so a
//! modded game can supply its own tables.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyMap;
use crate::{Result, SorterError};

mod bases;
mod gems;
mod sets;
mod stats;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Helm,
    BodyArmor,
    Shield,
    Gloves,
    Boots,
    Belt,
    Weapon,
    Amulet,
    Ring,
    Charm,
    Jewel,
    Gem,
    Rune,
    Potion,
    Scroll,
    Tome,
    Key,
    Quest,
    Misc,
}

impl ItemKind {
    /// Kinds whose records carry a defense value.
    pub const fn has_defense(self) -> bool {
        matches!(
            self,
            ItemKind::Helm
                | ItemKind::BodyArmor
                | ItemKind::Shield
                | ItemKind::Gloves
                | ItemKind::Boots
                | ItemKind::Belt
        )
    }

    /// Kinds whose records carry a durability pair.
    pub const fn has_durability(self) -> bool {
        self.has_defense() || matches!(self, ItemKind::Weapon)
    }

    pub fn socket_slot(self) -> SocketSlot {
        match self {
            ItemKind::Weapon => SocketSlot::Weapon,
            ItemKind::Shield => SocketSlot::Shield,
            _ => SocketSlot::Armor,
        }
    }
}

/// Which variant of a gem or rune effect applies to a socketed item.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SocketSlot {
    Weapon,
    Armor,
    Shield,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BaseItem {
    pub code: &'static str,
    pub name: &'static str,
    pub width: u8,
    pub height: u8,
    pub kind: ItemKind,
    pub stackable: bool,
    /// Extended record carries max and current durability.
    pub durable: bool,
}

/// Saved layout of one stat: its values in order and the bias subtracted
/// from each raw value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatDef {
    pub id: u16,
    pub name: &'static str,
    pub widths: &'static [u8],
    pub bias: i32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemFamily {
    Amethyst,
    Topaz,
    Sapphire,
    Emerald,
    Ruby,
    Diamond,
    Skull,
}

impl GemFamily {
    pub const ALL: [GemFamily; 7] = [
        GemFamily::Amethyst,
        GemFamily::Topaz,
        GemFamily::Sapphire,
        GemFamily::Emerald,
        GemFamily::Ruby,
        GemFamily::Diamond,
        GemFamily::Skull,
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemQuality {
    Chipped,
    Flawed,
    Normal,
    Flawless,
    Perfect,
}

impl GemQuality {
    pub const ALL: [GemQuality; 5] = [
        GemQuality::Chipped,
        GemQuality::Flawed,
        GemQuality::Normal,
        GemQuality::Flawless,
        GemQuality::Perfect,
    ];

    pub fn next(self) -> Option<GemQuality> {
        match self {
            GemQuality::Chipped => Some(GemQuality::Flawed),
            GemQuality::Flawed => Some(GemQuality::Normal),
            GemQuality::Normal => Some(GemQuality::Flawless),
            GemQuality::Flawless => Some(GemQuality::Perfect),
            GemQuality::Perfect => None,
        }
    }

    pub fn prev(self) -> Option<GemQuality> {
        match self {
            GemQuality::Chipped => None,
            GemQuality::Flawed => Some(GemQuality::Chipped),
            GemQuality::Normal => Some(GemQuality::Flawed),
            GemQuality::Flawless => Some(GemQuality::Normal),
            GemQuality::Perfect => Some(GemQuality::Flawless),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GemDef {
    pub code: &'static str,
    pub family: GemFamily,
    pub quality: GemQuality,
}

/// Cube recipe turning `amount` runes of `input` (plus an optional catalyst
/// gem) into one rune of `output`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RuneRecipe {
    pub input: &'static str,
    pub amount: usize,
    pub catalyst: Option<&'static str>,
    pub output: &'static str,
}

/// Lookups the codec, the upgrade engines and the sorter depend on.
pub trait Catalog {
    fn base(&self, code: &str) -> Result<&BaseItem>;

    fn stat(&self, id: u16) -> Result<&StatDef>;

    fn gem(&self, code: &str) -> Option<&GemDef>;

    fn gem_of(&self, family: GemFamily, quality: GemQuality) -> Option<&GemDef>;

    /// Rune codes in ascending tier order.
    fn rune_codes(&self) -> Vec<&str>;

    fn rune_recipe(&self, code: &str) -> Result<&RuneRecipe>;

    /// Name of the set a set item id belongs to.
    fn set_name(&self, set_item_id: u16) -> Result<&str>;

    /// Bonus granted by a socketed gem or rune, if the code has one.
    fn socket_effect(&self, code: &str, slot: SocketSlot) -> Option<PropertyMap>;
}

fn unknown(kind: &'static str, key: impl ToString) -> SorterError {
    SorterError::UnknownCatalogEntry {
        kind,
        key: key.to_string(),
    }
}

/// Catalog backed by the tables compiled into this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn base(&self, code: &str) -> Result<&BaseItem> {
        bases::BASE_ITEMS
            .iter()
            .find(|b| b.code == code)
            .ok_or_else(|| unknown("item code", code))
    }

    fn stat(&self, id: u16) -> Result<&StatDef> {
        stats::STATS
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| unknown("stat id", id))
    }

    fn gem(&self, code: &str) -> Option<&GemDef> {
        gems::GEMS.iter().find(|g| g.code == code)
    }

    fn gem_of(&self, family: GemFamily, quality: GemQuality) -> Option<&GemDef> {
        gems::GEMS
            .iter()
            .find(|g| g.family == family && g.quality == quality)
    }

    fn rune_codes(&self) -> Vec<&str> {
        gems::RUNE_CODES.to_vec()
    }

    fn rune_recipe(&self, code: &str) -> Result<&RuneRecipe> {
        gems::RUNE_RECIPES
            .iter()
            .find(|r| r.input == code)
            .ok_or_else(|| unknown("rune recipe", code))
    }

    fn set_name(&self, set_item_id: u16) -> Result<&str> {
        sets::SETS
            .iter()
            .find(|s| (s.first..=s.last).contains(&set_item_id))
            .map(|s| s.name)
            .ok_or_else(|| unknown("set item id", set_item_id))
    }

    fn socket_effect(&self, code: &str, slot: SocketSlot) -> Option<PropertyMap> {
        let effect = gems::SOCKET_EFFECTS.iter().find(|e| e.code == code)?;
        let stats = match slot {
            SocketSlot::Weapon => effect.weapon,
            SocketSlot::Armor => effect.armor,
            SocketSlot::Shield => effect.shield,
        };
        Some(
            stats
                .iter()
                .map(|(id, values)| (*id, values.to_vec()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_base_items() {
        let cat = StaticCatalog;
        let armor = cat.base("uar").unwrap();
        assert_eq!((armor.width, armor.height), (2, 3));
        assert_eq!(armor.kind, ItemKind::BodyArmor);
        assert!(cat.base("r33").unwrap().kind == ItemKind::Rune);
        assert!(matches!(
            cat.base("zzz"),
            Err(SorterError::UnknownCatalogEntry { kind: "item code", .. })
        ));
    }

    #[test]
    fn every_gem_and_rune_has_a_base_entry() {
        let cat = StaticCatalog;
        for family in GemFamily::ALL {
            for quality in GemQuality::ALL {
                let gem = cat.gem_of(family, quality).unwrap();
                assert_eq!(cat.base(gem.code).unwrap().kind, ItemKind::Gem);
                assert_eq!(cat.gem(gem.code), Some(gem));
            }
        }
        for code in cat.rune_codes() {
            assert_eq!(cat.base(code).unwrap().kind, ItemKind::Rune);
        }
    }

    #[test]
    fn rune_recipes_chain_upwards() {
        let cat = StaticCatalog;
        let codes = cat.rune_codes();
        assert_eq!(codes.len(), 33);
        for pair in codes.windows(2) {
            let recipe = cat.rune_recipe(pair[0]).unwrap();
            assert_eq!(recipe.output, pair[1]);
            if let Some(gem) = recipe.catalyst {
                assert!(cat.gem(gem).is_some(), "catalyst {gem} is not a gem");
            }
        }
        assert!(cat.rune_recipe("r33").is_err());
        let thul = cat.rune_recipe("r10").unwrap();
        assert_eq!((thul.amount, thul.catalyst), (3, Some("gcy")));
    }

    #[test]
    fn set_ids_map_onto_whole_sets() {
        let cat = StaticCatalog;
        assert_eq!(cat.set_name(35).unwrap(), "Sigon's Complete Steel");
        assert_eq!(cat.set_name(40).unwrap(), "Sigon's Complete Steel");
        assert_eq!(cat.set_name(47).unwrap(), "Death's Disguise");
        assert!(cat.set_name(4000).is_err());
    }

    #[test]
    fn socket_effects_depend_on_slot() {
        let cat = StaticCatalog;
        let weapon = cat.socket_effect("gpr", SocketSlot::Weapon).unwrap();
        let armor = cat.socket_effect("gpr", SocketSlot::Armor).unwrap();
        let shield = cat.socket_effect("gpr", SocketSlot::Shield).unwrap();
        assert_eq!(weapon.get(&48), Some(&vec![15, 20]));
        assert_eq!(armor.get(&7), Some(&vec![38]));
        assert_eq!(shield.get(&39), Some(&vec![40]));
        assert!(cat.socket_effect("jew", SocketSlot::Armor).is_none());
    }

    #[test]
    fn every_stat_has_at_least_one_field() {
        for stat in stats::STATS {
            assert!(!stat.widths.is_empty(), "stat {} has no fields", stat.id);
            assert!(stat.widths.iter().all(|w| (1..=32).contains(&(*w as usize))));
        }
    }

    #[test]
    fn per_level_stats_are_in_the_schema() {
        let cat = StaticCatalog;
        for id in (214..=250).chain(252..=254) {
            assert!(cat.stat(id).is_ok(), "stat {id} missing");
        }
        assert_eq!(cat.stat(238).unwrap().widths, &[6]);
    }

    #[test]
    fn quest_weapons_are_durable_quest_items() {
        let cat = StaticCatalog;
        for code in ["g33", "qf1", "qf2", "hdm", "hfh", "msf", "hst", "leg"] {
            let base = cat.base(code).unwrap();
            assert_eq!(base.kind, ItemKind::Quest, "{code}");
            assert!(base.durable, "{code}");
        }
        assert!(!cat.base("box").unwrap().durable);
        assert!(cat.base("uar").unwrap().durable);
        assert!(!cat.base("r01").unwrap().durable);
    }
}
