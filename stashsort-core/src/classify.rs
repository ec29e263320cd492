//! Rule-driven grouping and ordering of items ahead of layout.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::config::{GroupRule, ItemAttribute, MISC_GROUP};
use crate::item::Item;

/// Value of one attribute on one item. Ordered so that items missing the
/// attribute sort first.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum AttrValue {
    Missing,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Missing => f.write_str("none"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

fn int<T: Into<i64>>(value: Option<T>) -> AttrValue {
    value.map_or(AttrValue::Missing, |v| AttrValue::Int(v.into()))
}

pub fn attribute(item: &Item, attr: ItemAttribute) -> AttrValue {
    use ItemAttribute as A;
    match attr {
        A::Code => AttrValue::Text(item.code.clone()),
        A::Name => AttrValue::Text(item.name.to_string()),
        A::Kind => AttrValue::Int(item.kind as i64),
        A::Quality => int(item.quality.map(|q| q.to_u8())),
        A::Level => int(item.level),
        A::Identified => AttrValue::Bool(item.identified),
        A::Socketed => AttrValue::Bool(item.socketed),
        A::Ethereal => AttrValue::Bool(item.ethereal),
        A::Personalized => AttrValue::Bool(item.personalized),
        A::Runeword => AttrValue::Bool(item.runeword),
        A::Simple => AttrValue::Bool(item.simple),
        A::Ear => AttrValue::Bool(item.ear),
        A::SetName => item
            .set_name()
            .map_or(AttrValue::Missing, |s| AttrValue::Text(s.to_string())),
        A::UniqueId => int(item.unique_id()),
        A::RunewordId => int(item.runeword_id),
        A::Width => AttrValue::Int(item.width.into()),
        A::Height => AttrValue::Int(item.height.into()),
        A::FilledSockets => AttrValue::Int(item.filled_sockets.into()),
        A::TotalSockets => int(item.total_sockets),
        A::Defense => int(item.defense),
        A::Quantity => int(item.quantity),
    }
}

/// A run of items that shares pages with nothing else.
#[derive(Debug)]
pub struct Group {
    pub name: String,
    pub items: Vec<Item>,
}

impl GroupRule {
    pub fn matches(&self, item: &Item) -> bool {
        if !self.item_types.is_empty() && !self.item_types.contains(&item.kind) {
            return false;
        }
        if !self.item_qualities.is_empty() {
            match item.quality {
                Some(q) if self.item_qualities.contains(&q) => {}
                _ => return false,
            }
        }
        self.attributes.is_empty()
            || self
                .attributes
                .iter()
                .any(|cond| attribute(item, cond.attribute) == AttrValue::Bool(cond.expected))
    }

    fn sort(&self, items: &mut [Item]) {
        if self.sort_by.is_empty() {
            return;
        }
        items.sort_by_cached_key(|item| {
            self.sort_by
                .iter()
                .map(|attr| attribute(item, *attr))
                .collect::<Vec<_>>()
        });
    }
}

/// Assign every item to the first rule it matches (or `misc`), sort each
/// group, split groups that ask for it, and drop the empty ones.
pub fn classify(items: Vec<Item>, rules: &[GroupRule]) -> Vec<Group> {
    let mut rules = rules.to_vec();
    if !rules.iter().any(|r| r.name == MISC_GROUP) {
        rules.push(GroupRule {
            name: MISC_GROUP.to_string(),
            ..GroupRule::default()
        });
    }
    let misc = rules.iter().position(|r| r.name == MISC_GROUP).unwrap_or(rules.len() - 1);

    let mut buckets: Vec<Vec<Item>> = rules.iter().map(|_| Vec::new()).collect();
    for item in items {
        let idx = rules.iter().position(|r| r.matches(&item)).unwrap_or(misc);
        buckets[idx].push(item);
    }

    let mut groups = Vec::new();
    for (rule, mut bucket) in rules.iter().zip(buckets) {
        match rule.sub_group_by {
            Some(attr) => {
                let mut subgroups: BTreeMap<AttrValue, Vec<Item>> = BTreeMap::new();
                for item in bucket {
                    subgroups.entry(attribute(&item, attr)).or_default().push(item);
                }
                for (key, mut items) in subgroups {
                    rule.sort(&mut items);
                    groups.push(Group {
                        name: format!("{}/{}", rule.name, key),
                        items,
                    });
                }
            }
            None => {
                rule.sort(&mut bucket);
                groups.push(Group {
                    name: rule.name.clone(),
                    items: bucket,
                });
            }
        }
    }

    groups.retain(|g| !g.items.is_empty());
    for group in &groups {
        debug!("group {} holds {} items", group.name, group.items.len());
    }
    groups
}
