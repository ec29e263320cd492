//! Sorting rules and upgrade switches, read from a JSON file.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, GemQuality, ItemKind};
use crate::item::ItemQuality;
use crate::page::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::{Result, SorterError};

/// Stash positions are 4-bit fields.
pub const MAX_PAGE_SIDE: u8 = 16;
pub const MISC_GROUP: &str = "misc";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Leading pages copied through untouched.
    pub ignore_first_pages: usize,
    pub backup_stash_file: bool,
    pub page_columns: Option<u8>,
    pub page_rows: Option<u8>,
    pub upgrade_gems: GemUpgradeConfig,
    pub upgrade_runes: RuneUpgradeConfig,
    pub groups: Vec<GroupRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemUpgradeConfig {
    pub enabled: bool,
    pub upgrade_only: Vec<GemQuality>,
    pub keep_at_least: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuneUpgradeConfig {
    pub enabled: bool,
    /// Rune codes to upgrade, in the order they are processed.
    pub upgrade_only: Vec<String>,
    pub keep_at_least: usize,
    /// Break a higher gem of the catalyst's family down when the exact
    /// catalyst is missing.
    pub downgrade_gems: bool,
    /// Upgrade without spending catalyst gems.
    pub ignore_gems: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRule {
    pub name: String,
    pub item_types: Vec<ItemKind>,
    pub item_qualities: Vec<ItemQuality>,
    pub attributes: Vec<AttrCondition>,
    pub sub_group_by: Option<ItemAttribute>,
    pub sort_by: Vec<ItemAttribute>,
}

/// Item attributes rules can test, split on, or sort by.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAttribute {
    Code,
    Name,
    Kind,
    Quality,
    Level,
    Identified,
    Socketed,
    Ethereal,
    Personalized,
    Runeword,
    Simple,
    Ear,
    SetName,
    UniqueId,
    RunewordId,
    Width,
    Height,
    FilledSockets,
    TotalSockets,
    Defense,
    Quantity,
}

impl ItemAttribute {
    const FLAGS: [(&'static str, ItemAttribute); 7] = [
        ("identified", ItemAttribute::Identified),
        ("socketed", ItemAttribute::Socketed),
        ("ethereal", ItemAttribute::Ethereal),
        ("personalized", ItemAttribute::Personalized),
        ("runeword", ItemAttribute::Runeword),
        ("simple", ItemAttribute::Simple),
        ("ear", ItemAttribute::Ear),
    ];

    fn flag_name(self) -> Option<&'static str> {
        Self::FLAGS.iter().find(|(_, a)| *a == self).map(|(n, _)| *n)
    }
}

/// A boolean attribute test, written `ethereal` or `!ethereal`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AttrCondition {
    pub attribute: ItemAttribute,
    pub expected: bool,
}

impl FromStr for AttrCondition {
    type Err = SorterError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (expected, name) = match s.strip_prefix('!') {
            Some(rest) => (false, rest.trim()),
            None => (true, s),
        };
        ItemAttribute::FLAGS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, attribute)| AttrCondition {
                attribute: *attribute,
                expected,
            })
            .ok_or_else(|| SorterError::Config(format!("unknown boolean attribute {s:?}")))
    }
}

impl fmt::Display for AttrCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bang = if self.expected { "" } else { "!" };
        write!(f, "{bang}{}", self.attribute.flag_name().unwrap_or("?"))
    }
}

impl Serialize for AttrCondition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AttrCondition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            ignore_first_pages: 0,
            backup_stash_file: true,
            page_columns: None,
            page_rows: None,
            upgrade_gems: GemUpgradeConfig::default(),
            upgrade_runes: RuneUpgradeConfig::default(),
            groups: default_groups(),
        }
    }
}

impl Default for GemUpgradeConfig {
    fn default() -> Self {
        GemUpgradeConfig {
            enabled: false,
            upgrade_only: vec![
                GemQuality::Chipped,
                GemQuality::Flawed,
                GemQuality::Normal,
                GemQuality::Flawless,
            ],
            keep_at_least: 0,
        }
    }
}

impl Default for RuneUpgradeConfig {
    fn default() -> Self {
        RuneUpgradeConfig {
            enabled: false,
            upgrade_only: (1..=9).map(|n| format!("r{n:02}")).collect(),
            keep_at_least: 0,
            downgrade_gems: false,
            ignore_gems: false,
        }
    }
}

impl Default for GroupRule {
    fn default() -> Self {
        GroupRule {
            name: String::new(),
            item_types: Vec::new(),
            item_qualities: Vec::new(),
            attributes: Vec::new(),
            sub_group_by: None,
            sort_by: vec![ItemAttribute::Code],
        }
    }
}

fn rule(name: &str) -> GroupRule {
    GroupRule {
        name: name.to_string(),
        ..GroupRule::default()
    }
}

fn default_groups() -> Vec<GroupRule> {
    use ItemAttribute as A;
    vec![
        GroupRule {
            item_types: vec![ItemKind::Rune],
            ..rule("runes")
        },
        GroupRule {
            item_types: vec![ItemKind::Gem],
            ..rule("gems")
        },
        GroupRule {
            attributes: vec![AttrCondition {
                attribute: A::Runeword,
                expected: true,
            }],
            sort_by: vec![A::RunewordId, A::Code],
            ..rule("runewords")
        },
        GroupRule {
            item_qualities: vec![ItemQuality::Set],
            sub_group_by: Some(A::SetName),
            ..rule("sets")
        },
        GroupRule {
            item_qualities: vec![ItemQuality::Unique],
            sort_by: vec![A::Kind, A::UniqueId],
            ..rule("uniques")
        },
        GroupRule {
            item_types: vec![ItemKind::Charm, ItemKind::Jewel],
            sort_by: vec![A::Kind, A::Code, A::Quality],
            ..rule("charms")
        },
        GroupRule {
            item_types: vec![ItemKind::Ring, ItemKind::Amulet],
            sort_by: vec![A::Kind, A::Quality],
            ..rule("jewellery")
        },
        GroupRule {
            sort_by: vec![A::Kind, A::Code],
            ..rule(MISC_GROUP)
        },
    ]
}

impl SortConfig {
    /// Read the config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>, catalog: &dyn Catalog) -> Result<SortConfig> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                serde_json::from_str(&text)?
            }
            None => SortConfig::default(),
        };
        config.validate(catalog)?;
        Ok(config)
    }

    pub fn validate(&self, catalog: &dyn Catalog) -> Result<()> {
        for (label, side) in [("page_columns", self.page_columns), ("page_rows", self.page_rows)] {
            if let Some(side) = side {
                if side == 0 || side > MAX_PAGE_SIDE {
                    return Err(SorterError::Config(format!(
                        "{label} must be within 1..={MAX_PAGE_SIDE}, got {side}"
                    )));
                }
            }
        }

        for code in &self.upgrade_runes.upgrade_only {
            catalog.rune_recipe(code).map_err(|_| {
                SorterError::Config(format!("no upgrade recipe for rune {code:?}"))
            })?;
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(SorterError::Config("group without a name".to_string()));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(SorterError::Config(format!("duplicate group {:?}", group.name)));
            }
        }
        Ok(())
    }

    /// Grid size for new pages.
    pub fn page_size(&self) -> (u8, u8) {
        (
            self.page_columns.unwrap_or(DEFAULT_COLUMNS),
            self.page_rows.unwrap_or(DEFAULT_ROWS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn defaults_are_valid() {
        let config = SortConfig::default();
        config.validate(&StaticCatalog).unwrap();
        assert_eq!(config.page_size(), (10, 10));
        assert_eq!(config.groups.last().map(|g| g.name.as_str()), Some(MISC_GROUP));
    }

    #[test]
    fn parses_a_partial_file() {
        let json = r#"{
            "ignore_first_pages": 2,
            "upgrade_runes": { "enabled": true, "upgrade_only": ["r10"], "downgrade_gems": true },
            "groups": [
                { "name": "eth", "item_types": ["body_armor", "shield"], "attributes": ["ethereal", "!socketed"] },
                { "name": "sets", "item_qualities": ["set"], "sub_group_by": "set_name", "sort_by": ["code"] }
            ]
        }"#;
        let config: SortConfig = serde_json::from_str(json).unwrap();
        config.validate(&StaticCatalog).unwrap();

        assert_eq!(config.ignore_first_pages, 2);
        assert!(config.backup_stash_file);
        assert!(config.upgrade_runes.enabled && config.upgrade_runes.downgrade_gems);
        assert!(!config.upgrade_gems.enabled);
        let eth = &config.groups[0];
        assert_eq!(eth.item_types, vec![ItemKind::BodyArmor, ItemKind::Shield]);
        assert_eq!(
            eth.attributes,
            vec![
                AttrCondition {
                    attribute: ItemAttribute::Ethereal,
                    expected: true
                },
                AttrCondition {
                    attribute: ItemAttribute::Socketed,
                    expected: false
                },
            ]
        );
        assert_eq!(eth.sort_by, vec![ItemAttribute::Code]);
        assert_eq!(config.groups[1].sub_group_by, Some(ItemAttribute::SetName));
    }

    #[test]
    fn attribute_conditions_round_trip_as_strings() {
        let cond: AttrCondition = "!ethereal".parse().unwrap();
        assert_eq!(cond.to_string(), "!ethereal");
        assert_eq!(serde_json::to_string(&cond).unwrap(), "\"!ethereal\"");
        assert!("level".parse::<AttrCondition>().is_err());
        assert!(serde_json::from_str::<GroupRule>(r#"{"attributes": ["shiny"]}"#).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = SortConfig {
            page_columns: Some(17),
            ..SortConfig::default()
        };
        assert!(matches!(config.validate(&StaticCatalog), Err(SorterError::Config(_))));

        config.page_columns = Some(8);
        config.upgrade_runes.upgrade_only = vec!["r33".to_string()];
        assert!(matches!(config.validate(&StaticCatalog), Err(SorterError::Config(_))));

        config.upgrade_runes.upgrade_only.clear();
        config.groups.push(rule("runes"));
        assert!(matches!(config.validate(&StaticCatalog), Err(SorterError::Config(_))));
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sort.json");
        fs::write(&path, r#"{ "page_rows": 8, "backup_stash_file": false }"#).unwrap();
        let config = SortConfig::load(Some(&path), &StaticCatalog).unwrap();
        assert_eq!(config.page_size(), (10, 8));
        assert!(!config.backup_stash_file);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SortConfig::load(Some(&path), &StaticCatalog),
            Err(SorterError::Json(_))
        ));
    }
}
