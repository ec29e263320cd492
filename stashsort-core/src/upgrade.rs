//! Cube upgrades applied before sorting: three gems into one of the next
//! tier, and runes into the next rune by recipe.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::catalog::{Catalog, GemDef, GemFamily, GemQuality, ItemKind};
use crate::config::{GemUpgradeConfig, RuneUpgradeConfig};
use crate::item::Item;
use crate::Result;

const GEMS_PER_UPGRADE: usize = 3;

/// Upgrade gems tier by tier. Non-gems keep their order and come first,
/// followed by every gem grouped by family, then tier.
pub fn upgrade_gems(items: Vec<Item>, opts: &GemUpgradeConfig, catalog: &dyn Catalog) -> Result<Vec<Item>> {
    let mut tiers = opts.upgrade_only.clone();
    tiers.sort();
    tiers.dedup();

    let mut out = Vec::with_capacity(items.len());
    let mut gems: BTreeMap<(GemFamily, GemQuality), Vec<Item>> = BTreeMap::new();
    for item in items {
        match catalog.gem(&item.code) {
            Some(gem) => gems.entry((gem.family, gem.quality)).or_default().push(item),
            None => out.push(item),
        }
    }

    let mut upgraded = 0usize;
    for family in GemFamily::ALL {
        for &quality in &tiers {
            let Some(next) = quality.next().and_then(|q| catalog.gem_of(family, q)) else {
                continue;
            };
            loop {
                let bucket = gems.entry((family, quality)).or_default();
                if bucket.len() < GEMS_PER_UPGRADE + opts.keep_at_least {
                    break;
                }
                bucket.truncate(bucket.len() - (GEMS_PER_UPGRADE - 1));
                let mut gem = match bucket.pop() {
                    Some(gem) => gem,
                    None => break,
                };
                gem.set_code(next.code, catalog)?;
                gems.entry((family, next.quality)).or_default().push(gem);
                upgraded += 1;
            }
        }
    }
    if upgraded > 0 {
        info!("upgraded {upgraded} gems");
    }

    for family in GemFamily::ALL {
        for quality in GemQuality::ALL {
            if let Some(bucket) = gems.remove(&(family, quality)) {
                out.extend(bucket);
            }
        }
    }
    Ok(out)
}

/// Upgrade runes by recipe, spending catalyst gems from the rest of the
/// stash. Non-runes keep their order and come first, then runes by tier.
pub fn upgrade_runes(items: Vec<Item>, opts: &RuneUpgradeConfig, catalog: &dyn Catalog) -> Result<Vec<Item>> {
    let codes = catalog.rune_codes();
    let mut runes: BTreeMap<String, Vec<Item>> = BTreeMap::new();
    let mut others = Vec::with_capacity(items.len());
    for item in items {
        if item.kind == ItemKind::Rune {
            runes.entry(item.code.clone()).or_default().push(item);
        } else {
            others.push(item);
        }
    }

    let mut upgraded = 0usize;
    for code in &opts.upgrade_only {
        let recipe = catalog.rune_recipe(code)?;
        let amount = recipe.amount.max(1);
        loop {
            let available = runes.get(code).map_or(0, Vec::len);
            if available < amount + opts.keep_at_least {
                break;
            }
            let catalyst = match recipe.catalyst {
                Some(gem) if !opts.ignore_gems => Some(gem),
                _ => None,
            };
            if let Some(gem) = catalyst {
                if !take_catalyst(&mut others, gem, opts.downgrade_gems, catalog)? {
                    debug!("no {gem} left to upgrade {code}");
                    break;
                }
            }

            let bucket = runes.entry(code.clone()).or_default();
            bucket.truncate(bucket.len() - (amount - 1));
            let mut rune = match bucket.pop() {
                Some(rune) => rune,
                None => break,
            };
            rune.set_code(recipe.output, catalog)?;
            runes.entry(recipe.output.to_string()).or_default().push(rune);
            upgraded += 1;
        }
    }
    if upgraded > 0 {
        info!("upgraded {upgraded} runes");
    }

    for code in codes {
        if let Some(bucket) = runes.remove(code) {
            others.extend(bucket);
        }
    }
    // Codes the catalog does not rank keep their place at the end.
    for (_, bucket) in runes {
        others.extend(bucket);
    }
    Ok(others)
}

/// Codes that can stand in for `gem`: itself, then each higher tier of its
/// family when downgrading is allowed.
fn catalyst_candidates<'c>(gem: &str, downgrade: bool, catalog: &'c dyn Catalog) -> Vec<&'c GemDef> {
    let mut out = Vec::new();
    let Some(mut def) = catalog.gem(gem) else {
        return out;
    };
    out.push(def);
    if downgrade {
        while let Some(higher) = def.quality.next().and_then(|q| catalog.gem_of(def.family, q)) {
            out.push(higher);
            def = higher;
        }
    }
    out
}

/// Remove one catalyst from `items`. A higher-tier gem is broken down one
/// tier at a time into three copies; one copy of the target tier is spent
/// and the spare copies of every tier on the way are kept.
fn take_catalyst(items: &mut Vec<Item>, gem: &str, downgrade: bool, catalog: &dyn Catalog) -> Result<bool> {
    for candidate in catalyst_candidates(gem, downgrade, catalog) {
        let Some(idx) = items.iter().position(|i| i.code == candidate.code) else {
            continue;
        };
        let mut held = items.remove(idx);
        let mut quality = candidate.quality;
        while held.code != gem {
            let Some(lower) = quality.prev().and_then(|q| catalog.gem_of(candidate.family, q)) else {
                break;
            };
            held.set_code(lower.code, catalog)?;
            quality = lower.quality;
            items.push(held.clone());
            items.push(held.clone());
            debug!("broke {} down to {}", candidate.code, lower.code);
        }
        return Ok(true);
    }
    Ok(false)
}
