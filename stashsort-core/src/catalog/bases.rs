use super::BaseItem;
use super::ItemKind::{self, *};

const fn b(code: &'static str, name: &'static str, width: u8, height: u8, kind: ItemKind) -> BaseItem {
    BaseItem {
        code,
        name,
        width,
        height,
        kind,
        stackable: false,
        durable: kind.has_durability(),
    }
}

// Items whose extended record carries a quantity.
const fn q(code: &'static str, name: &'static str, width: u8, height: u8, kind: ItemKind) -> BaseItem {
    BaseItem {
        code,
        name,
        width,
        height,
        kind,
        stackable: true,
        durable: kind.has_durability(),
    }
}

// Quest weapons: grouped as quest items, saved with a durability pair.
const fn qw(code: &'static str, name: &'static str, width: u8, height: u8) -> BaseItem {
    BaseItem {
        durable: true,
        ..b(code, name, width, height, Quest)
    }
}

pub(super) const BASE_ITEMS: &[BaseItem] = &[
    // Helms
    b("cap", "Cap", 2, 2, Helm),
    b("skp", "Skull Cap", 2, 2, Helm),
    b("hlm", "Helm", 2, 2, Helm),
    b("fhl", "Full Helm", 2, 2, Helm),
    b("ghm", "Great Helm", 2, 2, Helm),
    b("crn", "Crown", 2, 2, Helm),
    b("msk", "Mask", 2, 2, Helm),
    b("bhm", "Bone Helm", 2, 2, Helm),
    b("xap", "War Hat", 2, 2, Helm),
    b("xkp", "Sallet", 2, 2, Helm),
    b("xlm", "Casque", 2, 2, Helm),
    b("xhl", "Basinet", 2, 2, Helm),
    b("xhm", "Winged Helm", 2, 2, Helm),
    b("xrn", "Grand Crown", 2, 2, Helm),
    b("xsk", "Death Mask", 2, 2, Helm),
    b("xh9", "Grim Helm", 2, 2, Helm),
    b("uap", "Shako", 2, 2, Helm),
    b("ukp", "Hydraskull", 2, 2, Helm),
    b("ulm", "Armet", 2, 2, Helm),
    b("uhl", "Giant Conch", 2, 2, Helm),
    b("uhm", "Spired Helm", 2, 2, Helm),
    b("urn", "Corona", 2, 2, Helm),
    b("usk", "Demonhead", 2, 2, Helm),
    b("uh9", "Bone Visage", 2, 2, Helm),
    b("ci0", "Circlet", 2, 2, Helm),
    b("ci1", "Coronet", 2, 2, Helm),
    b("ci2", "Tiara", 2, 2, Helm),
    b("ci3", "Diadem", 2, 2, Helm),
    b("ba1", "Jawbone Cap", 2, 2, Helm),
    b("ba2", "Fanged Helm", 2, 2, Helm),
    b("ba3", "Horned Helm", 2, 2, Helm),
    b("ba4", "Assault Helmet", 2, 2, Helm),
    b("ba5", "Avenger Guard", 2, 2, Helm),
    b("ba6", "Jawbone Visor", 2, 2, Helm),
    b("ba7", "Lion Helm", 2, 2, Helm),
    b("ba8", "Rage Mask", 2, 2, Helm),
    b("ba9", "Savage Helmet", 2, 2, Helm),
    b("baa", "Slayer Guard", 2, 2, Helm),
    b("bab", "Carnage Helm", 2, 2, Helm),
    b("bac", "Fury Visor", 2, 2, Helm),
    b("bad", "Destroyer Helm", 2, 2, Helm),
    b("bae", "Conqueror Crown", 2, 2, Helm),
    b("baf", "Guardian Crown", 2, 2, Helm),
    b("dr1", "Wolf Head", 2, 2, Helm),
    b("dr2", "Hawk Helm", 2, 2, Helm),
    b("dr3", "Antlers", 2, 2, Helm),
    b("dr4", "Falcon Mask", 2, 2, Helm),
    b("dr5", "Spirit Mask", 2, 2, Helm),
    b("dr6", "Alpha Helm", 2, 2, Helm),
    b("dr7", "Griffon Headdress", 2, 2, Helm),
    b("dr8", "Hunter's Guise", 2, 2, Helm),
    b("dr9", "Sacred Feathers", 2, 2, Helm),
    b("dra", "Totemic Mask", 2, 2, Helm),
    b("drb", "Blood Spirit", 2, 2, Helm),
    b("drc", "Sun Spirit", 2, 2, Helm),
    b("drd", "Earth Spirit", 2, 2, Helm),
    b("dre", "Sky Spirit", 2, 2, Helm),
    b("drf", "Dream Spirit", 2, 2, Helm),
    // Body armor
    b("qui", "Quilted Armor", 2, 3, BodyArmor),
    b("lea", "Leather Armor", 2, 3, BodyArmor),
    b("hla", "Hard Leather Armor", 2, 3, BodyArmor),
    b("stu", "Studded Leather", 2, 3, BodyArmor),
    b("rng", "Ring Mail", 2, 3, BodyArmor),
    b("scl", "Scale Mail", 2, 3, BodyArmor),
    b("chn", "Chain Mail", 2, 3, BodyArmor),
    b("brs", "Breast Plate", 2, 3, BodyArmor),
    b("spl", "Splint Mail", 2, 3, BodyArmor),
    b("plt", "Plate Mail", 2, 3, BodyArmor),
    b("fld", "Field Plate", 2, 3, BodyArmor),
    b("gth", "Gothic Plate", 2, 3, BodyArmor),
    b("ful", "Full Plate Mail", 2, 3, BodyArmor),
    b("aar", "Ancient Armor", 2, 3, BodyArmor),
    b("ltp", "Light Plate", 2, 3, BodyArmor),
    b("xui", "Ghost Armor", 2, 3, BodyArmor),
    b("xea", "Serpentskin Armor", 2, 3, BodyArmor),
    b("xla", "Demonhide Armor", 2, 3, BodyArmor),
    b("xtu", "Trellised Armor", 2, 3, BodyArmor),
    b("xng", "Linked Mail", 2, 3, BodyArmor),
    b("xcl", "Tigulated Mail", 2, 3, BodyArmor),
    b("xhn", "Mesh Armor", 2, 3, BodyArmor),
    b("xrs", "Cuirass", 2, 3, BodyArmor),
    b("xpl", "Russet Armor", 2, 3, BodyArmor),
    b("xlt", "Templar Coat", 2, 3, BodyArmor),
    b("xld", "Sharktooth Armor", 2, 3, BodyArmor),
    b("xth", "Embossed Plate", 2, 3, BodyArmor),
    b("xul", "Chaos Armor", 2, 3, BodyArmor),
    b("xar", "Ornate Plate", 2, 3, BodyArmor),
    b("xtp", "Mage Plate", 2, 3, BodyArmor),
    b("uui", "Dusk Shroud", 2, 3, BodyArmor),
    b("uea", "Wyrmhide", 2, 3, BodyArmor),
    b("ula", "Scarab Husk", 2, 3, BodyArmor),
    b("utu", "Wire Fleece", 2, 3, BodyArmor),
    b("ung", "Diamond Mail", 2, 3, BodyArmor),
    b("ucl", "Loricated Mail", 2, 3, BodyArmor),
    b("uhn", "Boneweave", 2, 3, BodyArmor),
    b("urs", "Great Hauberk", 2, 3, BodyArmor),
    b("upl", "Balrog Skin", 2, 3, BodyArmor),
    b("ult", "Hellforge Plate", 2, 3, BodyArmor),
    b("uld", "Kraken Shell", 2, 3, BodyArmor),
    b("uth", "Lacquered Plate", 2, 3, BodyArmor),
    b("uul", "Shadow Plate", 2, 3, BodyArmor),
    b("uar", "Sacred Armor", 2, 3, BodyArmor),
    b("utp", "Archon Plate", 2, 3, BodyArmor),
    // Shields
    b("buc", "Buckler", 2, 2, Shield),
    b("sml", "Small Shield", 2, 2, Shield),
    b("lrg", "Large Shield", 2, 3, Shield),
    b("kit", "Kite Shield", 2, 3, Shield),
    b("tow", "Tower Shield", 2, 3, Shield),
    b("gts", "Gothic Shield", 2, 4, Shield),
    b("bsh", "Bone Shield", 2, 3, Shield),
    b("spk", "Spiked Shield", 2, 3, Shield),
    b("xuc", "Defender", 2, 2, Shield),
    b("xml", "Round Shield", 2, 2, Shield),
    b("xrg", "Scutum", 2, 3, Shield),
    b("xit", "Dragon Shield", 2, 3, Shield),
    b("xow", "Pavise", 2, 3, Shield),
    b("xts", "Ancient Shield", 2, 4, Shield),
    b("xsh", "Grim Shield", 2, 3, Shield),
    b("xpk", "Barbed Shield", 2, 3, Shield),
    b("uuc", "Heater", 2, 2, Shield),
    b("uml", "Luna", 2, 2, Shield),
    b("urg", "Hyperion", 2, 3, Shield),
    b("uit", "Monarch", 2, 3, Shield),
    b("uow", "Aegis", 2, 3, Shield),
    b("uts", "Ward", 2, 4, Shield),
    b("ush", "Troll Nest", 2, 3, Shield),
    b("upk", "Blade Barrier", 2, 3, Shield),
    b("pa1", "Targe", 2, 2, Shield),
    b("pa2", "Rondache", 2, 2, Shield),
    b("pa3", "Heraldic Shield", 2, 4, Shield),
    b("pa4", "Aerin Shield", 2, 4, Shield),
    b("pa5", "Crown Shield", 2, 2, Shield),
    b("pa6", "Akaran Targe", 2, 2, Shield),
    b("pa7", "Akaran Rondache", 2, 2, Shield),
    b("pa8", "Protector Shield", 2, 4, Shield),
    b("pa9", "Gilded Shield", 2, 4, Shield),
    b("paa", "Royal Shield", 2, 2, Shield),
    b("pab", "Sacred Targe", 2, 2, Shield),
    b("pac", "Sacred Rondache", 2, 2, Shield),
    b("pad", "Kurast Shield", 2, 4, Shield),
    b("pae", "Zakarum Shield", 2, 4, Shield),
    b("paf", "Vortex Shield", 2, 2, Shield),
    b("ne1", "Preserved Head", 2, 2, Shield),
    b("ne2", "Zombie Head", 2, 2, Shield),
    b("ne3", "Unraveller Head", 2, 2, Shield),
    b("ne4", "Gargoyle Head", 2, 2, Shield),
    b("ne5", "Demon Head", 2, 2, Shield),
    b("ne6", "Mummified Trophy", 2, 2, Shield),
    b("ne7", "Fetish Trophy", 2, 2, Shield),
    b("ne8", "Sexton Trophy", 2, 2, Shield),
    b("ne9", "Cantor Trophy", 2, 2, Shield),
    b("nea", "Hierophant Trophy", 2, 2, Shield),
    b("neb", "Minion Skull", 2, 2, Shield),
    b("nec", "Hellspawn Skull", 2, 2, Shield),
    b("ned", "Overseer Skull", 2, 2, Shield),
    b("nee", "Succubus Skull", 2, 2, Shield),
    b("nef", "Bloodlord Skull", 2, 2, Shield),
    // Gloves
    b("lgl", "Leather Gloves", 2, 2, Gloves),
    b("vgl", "Heavy Gloves", 2, 2, Gloves),
    b("mgl", "Chain Gloves", 2, 2, Gloves),
    b("tgl", "Light Gauntlets", 2, 2, Gloves),
    b("hgl", "Gauntlets", 2, 2, Gloves),
    b("xlg", "Demonhide Gloves", 2, 2, Gloves),
    b("xvg", "Sharkskin Gloves", 2, 2, Gloves),
    b("xmg", "Heavy Bracers", 2, 2, Gloves),
    b("xtg", "Battle Gauntlets", 2, 2, Gloves),
    b("xhg", "War Gauntlets", 2, 2, Gloves),
    b("ulg", "Bramble Mitts", 2, 2, Gloves),
    b("uvg", "Vampirebone Gloves", 2, 2, Gloves),
    b("umg", "Vambraces", 2, 2, Gloves),
    b("utg", "Crusader Gauntlets", 2, 2, Gloves),
    b("uhg", "Ogre Gauntlets", 2, 2, Gloves),
    // Boots
    b("lbt", "Boots", 2, 2, Boots),
    b("vbt", "Heavy Boots", 2, 2, Boots),
    b("mbt", "Chain Boots", 2, 2, Boots),
    b("tbt", "Light Plated Boots", 2, 2, Boots),
    b("hbt", "Greaves", 2, 2, Boots),
    b("xlb", "Demonhide Boots", 2, 2, Boots),
    b("xvb", "Sharkskin Boots", 2, 2, Boots),
    b("xmb", "Mesh Boots", 2, 2, Boots),
    b("xtb", "Battle Boots", 2, 2, Boots),
    b("xhb", "War Boots", 2, 2, Boots),
    b("ulb", "Wyrmhide Boots", 2, 2, Boots),
    b("uvb", "Scarabshell Boots", 2, 2, Boots),
    b("umb", "Boneweave Boots", 2, 2, Boots),
    b("utb", "Mirrored Boots", 2, 2, Boots),
    b("uhb", "Myrmidon Greaves", 2, 2, Boots),
    // Belts
    b("lbl", "Sash", 2, 1, Belt),
    b("vbl", "Light Belt", 2, 1, Belt),
    b("mbl", "Belt", 2, 1, Belt),
    b("tbl", "Heavy Belt", 2, 1, Belt),
    b("hbl", "Plated Belt", 2, 1, Belt),
    b("zlb", "Demonhide Sash", 2, 1, Belt),
    b("zvb", "Sharkskin Belt", 2, 1, Belt),
    b("zmb", "Mesh Belt", 2, 1, Belt),
    b("ztb", "Battle Belt", 2, 1, Belt),
    b("zhb", "War Belt", 2, 1, Belt),
    b("ulc", "Spiderweb Sash", 2, 1, Belt),
    b("uvc", "Vampirefang Belt", 2, 1, Belt),
    b("umc", "Mithril Coil", 2, 1, Belt),
    b("utc", "Troll Belt", 2, 1, Belt),
    b("uhc", "Colossus Girdle", 2, 1, Belt),
    // Axes
    b("hax", "Hand Axe", 1, 3, Weapon),
    b("axe", "Axe", 2, 3, Weapon),
    b("2ax", "Double Axe", 2, 3, Weapon),
    b("mpi", "Military Pick", 2, 3, Weapon),
    b("wax", "War Axe", 2, 3, Weapon),
    b("lax", "Large Axe", 2, 3, Weapon),
    b("bax", "Broad Axe", 2, 3, Weapon),
    b("btx", "Battle Axe", 2, 3, Weapon),
    b("gax", "Great Axe", 2, 4, Weapon),
    b("gix", "Giant Axe", 2, 3, Weapon),
    b("9ha", "Hatchet", 1, 3, Weapon),
    b("9ax", "Cleaver", 2, 3, Weapon),
    b("92a", "Twin Axe", 2, 3, Weapon),
    b("9mp", "Crowbill", 2, 3, Weapon),
    b("9wa", "Naga", 2, 3, Weapon),
    b("9la", "Military Axe", 2, 3, Weapon),
    b("9ba", "Bearded Axe", 2, 3, Weapon),
    b("9bt", "Tabar", 2, 3, Weapon),
    b("9ga", "Gothic Axe", 2, 4, Weapon),
    b("9gi", "Ancient Axe", 2, 3, Weapon),
    b("7ha", "Tomahawk", 1, 3, Weapon),
    b("7ax", "Small Crescent", 2, 3, Weapon),
    b("72a", "Ettin Axe", 2, 3, Weapon),
    b("7mp", "War Spike", 2, 3, Weapon),
    b("7wa", "Berserker Axe", 2, 3, Weapon),
    b("7la", "Feral Axe", 2, 3, Weapon),
    b("7ba", "Silver-edged Axe", 2, 3, Weapon),
    b("7bt", "Decapitator", 2, 3, Weapon),
    b("7ga", "Champion Axe", 2, 4, Weapon),
    b("7gi", "Glorious Axe", 2, 3, Weapon),
    // Wands
    b("wnd", "Wand", 1, 2, Weapon),
    b("ywn", "Yew Wand", 1, 2, Weapon),
    b("bwn", "Bone Wand", 1, 2, Weapon),
    b("gwn", "Grim Wand", 1, 2, Weapon),
    b("9wn", "Burnt Wand", 1, 2, Weapon),
    b("9yw", "Petrified Wand", 1, 2, Weapon),
    b("9bw", "Tomb Wand", 1, 2, Weapon),
    b("9gw", "Grave Wand", 1, 2, Weapon),
    b("7wn", "Polished Wand", 1, 2, Weapon),
    b("7yw", "Ghost Wand", 1, 2, Weapon),
    b("7bw", "Lich Wand", 1, 2, Weapon),
    b("7gw", "Unearthed Wand", 1, 2, Weapon),
    // Clubs, maces, hammers, sceptres
    b("clb", "Club", 1, 3, Weapon),
    b("scp", "Sceptre", 1, 3, Weapon),
    b("gsc", "Grand Sceptre", 1, 3, Weapon),
    b("wsp", "War Sceptre", 2, 3, Weapon),
    b("spc", "Spiked Club", 1, 3, Weapon),
    b("mac", "Mace", 2, 3, Weapon),
    b("mst", "Morning Star", 2, 3, Weapon),
    b("fla", "Flail", 2, 3, Weapon),
    b("whm", "War Hammer", 2, 3, Weapon),
    b("mau", "Maul", 2, 4, Weapon),
    b("gma", "Great Maul", 2, 3, Weapon),
    b("9cl", "Cudgel", 1, 3, Weapon),
    b("9sc", "Rune Sceptre", 1, 3, Weapon),
    b("9qs", "Holy Water Sprinkler", 1, 3, Weapon),
    b("9ws", "Divine Sceptre", 2, 3, Weapon),
    b("9sp", "Barbed Club", 1, 3, Weapon),
    b("9ma", "Flanged Mace", 2, 3, Weapon),
    b("9mt", "Jagged Star", 2, 3, Weapon),
    b("9fl", "Knout", 2, 3, Weapon),
    b("9wh", "Battle Hammer", 2, 3, Weapon),
    b("9m9", "War Club", 2, 4, Weapon),
    b("9gm", "Martel de Fer", 2, 3, Weapon),
    b("7cl", "Truncheon", 1, 3, Weapon),
    b("7sc", "Mighty Sceptre", 1, 3, Weapon),
    b("7qs", "Seraph Rod", 1, 3, Weapon),
    b("7ws", "Caduceus", 2, 3, Weapon),
    b("7sp", "Tyrant Club", 1, 3, Weapon),
    b("7ma", "Reinforced Mace", 2, 3, Weapon),
    b("7mt", "Devil Star", 2, 3, Weapon),
    b("7fl", "Scourge", 2, 3, Weapon),
    b("7wh", "Legendary Mallet", 2, 3, Weapon),
    b("7m7", "Ogre Maul", 2, 4, Weapon),
    b("7gm", "Thunder Maul", 2, 3, Weapon),
    // Swords
    b("ssd", "Short Sword", 1, 3, Weapon),
    b("scm", "Scimitar", 1, 3, Weapon),
    b("sbr", "Sabre", 1, 3, Weapon),
    b("flc", "Falchion", 1, 3, Weapon),
    b("crs", "Crystal Sword", 2, 3, Weapon),
    b("bsd", "Broad Sword", 2, 3, Weapon),
    b("lsd", "Long Sword", 2, 3, Weapon),
    b("wsd", "War Sword", 1, 3, Weapon),
    b("2hs", "Two-Handed Sword", 1, 4, Weapon),
    b("clm", "Claymore", 1, 4, Weapon),
    b("gis", "Giant Sword", 1, 4, Weapon),
    b("bsw", "Bastard Sword", 1, 4, Weapon),
    b("flb", "Flamberge", 2, 4, Weapon),
    b("gsd", "Great Sword", 2, 4, Weapon),
    b("9ss", "Gladius", 1, 3, Weapon),
    b("9sm", "Cutlass", 1, 3, Weapon),
    b("9sb", "Shamshir", 1, 3, Weapon),
    b("9fc", "Tulwar", 1, 3, Weapon),
    b("9cr", "Dimensional Blade", 2, 3, Weapon),
    b("9bs", "Battle Sword", 2, 3, Weapon),
    b("9ls", "Rune Sword", 2, 3, Weapon),
    b("9wd", "Ancient Sword", 1, 3, Weapon),
    b("92h", "Espandon", 1, 4, Weapon),
    b("9cm", "Dacian Falx", 1, 4, Weapon),
    b("9gs", "Tusk Sword", 1, 4, Weapon),
    b("9b9", "Gothic Sword", 1, 4, Weapon),
    b("9fb", "Zweihander", 2, 4, Weapon),
    b("9gd", "Executioner Sword", 2, 4, Weapon),
    b("7ss", "Falcata", 1, 3, Weapon),
    b("7sm", "Ataghan", 1, 3, Weapon),
    b("7sb", "Elegant Blade", 1, 3, Weapon),
    b("7fc", "Hydra Edge", 1, 3, Weapon),
    b("7cr", "Phase Blade", 2, 3, Weapon),
    b("7bs", "Conquest Sword", 2, 3, Weapon),
    b("7ls", "Cryptic Sword", 2, 3, Weapon),
    b("7wd", "Mythical Sword", 1, 3, Weapon),
    b("72h", "Legend Sword", 1, 4, Weapon),
    b("7cm", "Highland Blade", 1, 4, Weapon),
    b("7gs", "Balrog Blade", 1, 4, Weapon),
    b("7b7", "Champion Sword", 1, 4, Weapon),
    b("7fb", "Colossus Sword", 2, 4, Weapon),
    b("7gd", "Colossus Blade", 2, 4, Weapon),
    // Daggers
    b("dgr", "Dagger", 1, 2, Weapon),
    b("dir", "Dirk", 1, 2, Weapon),
    b("kri", "Kris", 1, 3, Weapon),
    b("bld", "Blade", 1, 3, Weapon),
    b("9dg", "Poignard", 1, 2, Weapon),
    b("9di", "Rondel", 1, 2, Weapon),
    b("9kr", "Cinquedeas", 1, 3, Weapon),
    b("9bl", "Stiletto", 1, 3, Weapon),
    b("7dg", "Bone Knife", 1, 2, Weapon),
    b("7di", "Mithril Point", 1, 2, Weapon),
    b("7kr", "Fanged Knife", 1, 3, Weapon),
    b("7bl", "Legend Spike", 1, 3, Weapon),
    // Throwing weapons
    q("tkf", "Throwing Knife", 1, 2, Weapon),
    q("tax", "Throwing Axe", 1, 2, Weapon),
    q("bkf", "Balanced Knife", 1, 2, Weapon),
    q("bal", "Balanced Axe", 2, 3, Weapon),
    q("9tk", "Battle Dart", 1, 2, Weapon),
    q("9ta", "Francisca", 1, 2, Weapon),
    q("9bk", "War Dart", 1, 2, Weapon),
    q("9b8", "Hurlbat", 2, 3, Weapon),
    q("7tk", "Flying Knife", 1, 2, Weapon),
    q("7ta", "Flying Axe", 1, 2, Weapon),
    q("7bk", "Winged Knife", 1, 2, Weapon),
    q("7b8", "Winged Axe", 2, 3, Weapon),
    // Javelins
    q("jav", "Javelin", 1, 3, Weapon),
    q("pil", "Pilum", 1, 3, Weapon),
    q("ssp", "Short Spear", 1, 3, Weapon),
    q("glv", "Glaive", 1, 4, Weapon),
    q("tsp", "Throwing Spear", 1, 4, Weapon),
    q("9ja", "War Javelin", 1, 3, Weapon),
    q("9pi", "Great Pilum", 1, 3, Weapon),
    q("9s9", "Simbilan", 1, 3, Weapon),
    q("9gl", "Spiculum", 1, 4, Weapon),
    q("9ts", "Harpoon", 1, 4, Weapon),
    q("7ja", "Hyperion Javelin", 1, 3, Weapon),
    q("7pi", "Stygian Pilum", 1, 3, Weapon),
    q("7s7", "Balrog Spear", 1, 3, Weapon),
    q("7gl", "Ghost Glaive", 1, 4, Weapon),
    q("7ts", "Winged Harpoon", 1, 4, Weapon),
    // Spears and polearms
    b("spr", "Spear", 2, 4, Weapon),
    b("tri", "Trident", 2, 4, Weapon),
    b("brn", "Brandistock", 2, 4, Weapon),
    b("spt", "Spetum", 2, 4, Weapon),
    b("pik", "Pike", 2, 4, Weapon),
    b("9sr", "War Spear", 2, 4, Weapon),
    b("9tr", "Fuscina", 2, 4, Weapon),
    b("9br", "War Fork", 2, 4, Weapon),
    b("9st", "Yari", 2, 4, Weapon),
    b("9p9", "Lance", 2, 4, Weapon),
    b("7sr", "Hyperion Spear", 2, 4, Weapon),
    b("7tr", "Stygian Pike", 2, 4, Weapon),
    b("7br", "Mancatcher", 2, 4, Weapon),
    b("7st", "Ghost Spear", 2, 4, Weapon),
    b("7p7", "War Pike", 2, 4, Weapon),
    b("bar", "Bardiche", 2, 4, Weapon),
    b("vou", "Voulge", 2, 4, Weapon),
    b("scy", "Scythe", 2, 4, Weapon),
    b("pax", "Poleaxe", 2, 4, Weapon),
    b("hal", "Halberd", 2, 4, Weapon),
    b("wsc", "War Scythe", 2, 4, Weapon),
    b("9b7", "Lochaber Axe", 2, 4, Weapon),
    b("9vo", "Bill", 2, 4, Weapon),
    b("9s8", "Battle Scythe", 2, 4, Weapon),
    b("9pa", "Partizan", 2, 4, Weapon),
    b("9h9", "Bec-de-Corbin", 2, 4, Weapon),
    b("9wc", "Grim Scythe", 2, 4, Weapon),
    b("7o7", "Ogre Axe", 2, 4, Weapon),
    b("7vo", "Colossus Voulge", 2, 4, Weapon),
    b("7s8", "Thresher", 2, 4, Weapon),
    b("7pa", "Cryptic Axe", 2, 4, Weapon),
    b("7h7", "Great Poleaxe", 2, 4, Weapon),
    b("7wc", "Giant Thresher", 2, 4, Weapon),
    // Staves
    b("sst", "Short Staff", 1, 3, Weapon),
    b("lst", "Long Staff", 1, 4, Weapon),
    b("cst", "Gnarled Staff", 1, 4, Weapon),
    b("bst", "Battle Staff", 1, 4, Weapon),
    b("wst", "War Staff", 2, 4, Weapon),
    b("8ss", "Jo Staff", 1, 3, Weapon),
    b("8ls", "Quarterstaff", 1, 4, Weapon),
    b("8cs", "Cedar Staff", 1, 4, Weapon),
    b("8bs", "Gothic Staff", 1, 4, Weapon),
    b("8ws", "Rune Staff", 2, 4, Weapon),
    b("6ss", "Walking Stick", 1, 3, Weapon),
    b("6ls", "Stalagmite", 1, 4, Weapon),
    b("6cs", "Elder Staff", 1, 4, Weapon),
    b("6bs", "Shillelagh", 1, 4, Weapon),
    b("6ws", "Archon Staff", 2, 4, Weapon),
    // Bows and crossbows
    b("sbw", "Short Bow", 2, 3, Weapon),
    b("hbw", "Hunter's Bow", 2, 3, Weapon),
    b("lbw", "Long Bow", 2, 4, Weapon),
    b("cbw", "Composite Bow", 2, 3, Weapon),
    b("sbb", "Short Battle Bow", 2, 3, Weapon),
    b("lbb", "Long Battle Bow", 2, 4, Weapon),
    b("swb", "Short War Bow", 2, 3, Weapon),
    b("lwb", "Long War Bow", 2, 4, Weapon),
    b("8sb", "Edge Bow", 2, 3, Weapon),
    b("8hb", "Razor Bow", 2, 3, Weapon),
    b("8lb", "Cedar Bow", 2, 4, Weapon),
    b("8cb", "Double Bow", 2, 3, Weapon),
    b("8s8", "Short Siege Bow", 2, 3, Weapon),
    b("8l8", "Large Siege Bow", 2, 4, Weapon),
    b("8sw", "Rune Bow", 2, 3, Weapon),
    b("8lw", "Gothic Bow", 2, 4, Weapon),
    b("6sb", "Spider Bow", 2, 3, Weapon),
    b("6hb", "Blade Bow", 2, 3, Weapon),
    b("6lb", "Shadow Bow", 2, 4, Weapon),
    b("6cb", "Great Bow", 2, 3, Weapon),
    b("6s7", "Diamond Bow", 2, 3, Weapon),
    b("6l7", "Crusader Bow", 2, 4, Weapon),
    b("6sw", "Ward Bow", 2, 3, Weapon),
    b("6lw", "Hydra Bow", 2, 4, Weapon),
    b("lxb", "Light Crossbow", 2, 3, Weapon),
    b("mxb", "Crossbow", 2, 3, Weapon),
    b("hxb", "Heavy Crossbow", 2, 4, Weapon),
    b("rxb", "Repeating Crossbow", 2, 3, Weapon),
    b("8lx", "Arbalest", 2, 3, Weapon),
    b("8mx", "Siege Crossbow", 2, 3, Weapon),
    b("8hx", "Ballista", 2, 4, Weapon),
    b("8rx", "Chu-Ko-Nu", 2, 3, Weapon),
    b("6lx", "Pellet Bow", 2, 3, Weapon),
    b("6mx", "Gorgon Crossbow", 2, 3, Weapon),
    b("6hx", "Colossus Crossbow", 2, 4, Weapon),
    b("6rx", "Demon Crossbow", 2, 3, Weapon),
    q("aqv", "Arrows", 1, 3, Weapon),
    q("cqv", "Bolts", 1, 3, Weapon),
    // Class weapons
    b("ktr", "Katar", 1, 3, Weapon),
    b("wrb", "Wrist Blade", 1, 3, Weapon),
    b("axf", "Hatchet Hands", 1, 3, Weapon),
    b("ces", "Cestus", 1, 3, Weapon),
    b("clw", "Claws", 1, 3, Weapon),
    b("btl", "Blade Talons", 1, 3, Weapon),
    b("skr", "Scissors Katar", 1, 3, Weapon),
    b("9ar", "Quhab", 1, 3, Weapon),
    b("9wb", "Wrist Spike", 1, 3, Weapon),
    b("9xf", "Fascia", 1, 3, Weapon),
    b("9cs", "Hand Scythe", 1, 3, Weapon),
    b("9lw", "Greater Claws", 1, 3, Weapon),
    b("9tw", "Greater Talons", 1, 3, Weapon),
    b("9qr", "Scissors Quhab", 1, 3, Weapon),
    b("7ar", "Suwayyah", 1, 3, Weapon),
    b("7wb", "Wrist Sword", 1, 3, Weapon),
    b("7xf", "War Fist", 1, 3, Weapon),
    b("7cs", "Battle Cestus", 1, 3, Weapon),
    b("7lw", "Feral Claws", 1, 3, Weapon),
    b("7tw", "Runic Talons", 1, 3, Weapon),
    b("7qr", "Scissors Suwayyah", 1, 3, Weapon),
    b("ob1", "Eagle Orb", 1, 2, Weapon),
    b("ob2", "Sacred Globe", 1, 2, Weapon),
    b("ob3", "Smoked Sphere", 1, 2, Weapon),
    b("ob4", "Clasped Orb", 1, 2, Weapon),
    b("ob5", "Jared's Stone", 1, 2, Weapon),
    b("ob6", "Glowing Orb", 1, 2, Weapon),
    b("ob7", "Crystalline Globe", 1, 2, Weapon),
    b("ob8", "Cloudy Sphere", 1, 2, Weapon),
    b("ob9", "Sparkling Ball", 1, 2, Weapon),
    b("oba", "Swirling Crystal", 1, 2, Weapon),
    b("obb", "Heavenly Stone", 1, 2, Weapon),
    b("obc", "Eldritch Orb", 1, 2, Weapon),
    b("obd", "Demon Heart", 1, 2, Weapon),
    b("obe", "Vortex Orb", 1, 2, Weapon),
    b("obf", "Dimensional Shard", 1, 2, Weapon),
    b("am1", "Stag Bow", 2, 4, Weapon),
    b("am2", "Reflex Bow", 2, 4, Weapon),
    b("am3", "Maiden Spear", 2, 4, Weapon),
    b("am4", "Maiden Pike", 2, 4, Weapon),
    q("am5", "Maiden Javelin", 1, 3, Weapon),
    b("am6", "Ashwood Bow", 2, 4, Weapon),
    b("am7", "Ceremonial Bow", 2, 4, Weapon),
    b("am8", "Ceremonial Spear", 2, 4, Weapon),
    b("am9", "Ceremonial Pike", 2, 4, Weapon),
    q("ama", "Ceremonial Javelin", 1, 3, Weapon),
    b("amb", "Matriarchal Bow", 2, 4, Weapon),
    b("amc", "Grand Matron Bow", 2, 4, Weapon),
    b("amd", "Matriarchal Spear", 2, 4, Weapon),
    b("ame", "Matriarchal Pike", 2, 4, Weapon),
    q("amf", "Matriarchal Javelin", 1, 3, Weapon),
    // Jewellery, charms, jewels
    b("rin", "Ring", 1, 1, Ring),
    b("amu", "Amulet", 1, 1, Amulet),
    b("jew", "Jewel", 1, 1, Jewel),
    b("cm1", "Small Charm", 1, 1, Charm),
    b("cm2", "Large Charm", 1, 2, Charm),
    b("cm3", "Grand Charm", 1, 3, Charm),
    // Gems
    b("gcv", "Chipped Amethyst", 1, 1, Gem),
    b("gfv", "Flawed Amethyst", 1, 1, Gem),
    b("gsv", "Amethyst", 1, 1, Gem),
    b("gzv", "Flawless Amethyst", 1, 1, Gem),
    b("gpv", "Perfect Amethyst", 1, 1, Gem),
    b("gcy", "Chipped Topaz", 1, 1, Gem),
    b("gfy", "Flawed Topaz", 1, 1, Gem),
    b("gsy", "Topaz", 1, 1, Gem),
    b("gly", "Flawless Topaz", 1, 1, Gem),
    b("gpy", "Perfect Topaz", 1, 1, Gem),
    b("gcb", "Chipped Sapphire", 1, 1, Gem),
    b("gfb", "Flawed Sapphire", 1, 1, Gem),
    b("gsb", "Sapphire", 1, 1, Gem),
    b("glb", "Flawless Sapphire", 1, 1, Gem),
    b("gpb", "Perfect Sapphire", 1, 1, Gem),
    b("gcg", "Chipped Emerald", 1, 1, Gem),
    b("gfg", "Flawed Emerald", 1, 1, Gem),
    b("gsg", "Emerald", 1, 1, Gem),
    b("glg", "Flawless Emerald", 1, 1, Gem),
    b("gpg", "Perfect Emerald", 1, 1, Gem),
    b("gcr", "Chipped Ruby", 1, 1, Gem),
    b("gfr", "Flawed Ruby", 1, 1, Gem),
    b("gsr", "Ruby", 1, 1, Gem),
    b("glr", "Flawless Ruby", 1, 1, Gem),
    b("gpr", "Perfect Ruby", 1, 1, Gem),
    b("gcw", "Chipped Diamond", 1, 1, Gem),
    b("gfw", "Flawed Diamond", 1, 1, Gem),
    b("gsw", "Diamond", 1, 1, Gem),
    b("glw", "Flawless Diamond", 1, 1, Gem),
    b("gpw", "Perfect Diamond", 1, 1, Gem),
    b("skc", "Chipped Skull", 1, 1, Gem),
    b("skf", "Flawed Skull", 1, 1, Gem),
    b("sku", "Skull", 1, 1, Gem),
    b("skl", "Flawless Skull", 1, 1, Gem),
    b("skz", "Perfect Skull", 1, 1, Gem),
    // Runes
    b("r01", "El Rune", 1, 1, Rune),
    b("r02", "Eld Rune", 1, 1, Rune),
    b("r03", "Tir Rune", 1, 1, Rune),
    b("r04", "Nef Rune", 1, 1, Rune),
    b("r05", "Eth Rune", 1, 1, Rune),
    b("r06", "Ith Rune", 1, 1, Rune),
    b("r07", "Tal Rune", 1, 1, Rune),
    b("r08", "Ral Rune", 1, 1, Rune),
    b("r09", "Ort Rune", 1, 1, Rune),
    b("r10", "Thul Rune", 1, 1, Rune),
    b("r11", "Amn Rune", 1, 1, Rune),
    b("r12", "Sol Rune", 1, 1, Rune),
    b("r13", "Shael Rune", 1, 1, Rune),
    b("r14", "Dol Rune", 1, 1, Rune),
    b("r15", "Hel Rune", 1, 1, Rune),
    b("r16", "Io Rune", 1, 1, Rune),
    b("r17", "Lum Rune", 1, 1, Rune),
    b("r18", "Ko Rune", 1, 1, Rune),
    b("r19", "Fal Rune", 1, 1, Rune),
    b("r20", "Lem Rune", 1, 1, Rune),
    b("r21", "Pul Rune", 1, 1, Rune),
    b("r22", "Um Rune", 1, 1, Rune),
    b("r23", "Mal Rune", 1, 1, Rune),
    b("r24", "Ist Rune", 1, 1, Rune),
    b("r25", "Gul Rune", 1, 1, Rune),
    b("r26", "Vex Rune", 1, 1, Rune),
    b("r27", "Ohm Rune", 1, 1, Rune),
    b("r28", "Lo Rune", 1, 1, Rune),
    b("r29", "Sur Rune", 1, 1, Rune),
    b("r30", "Ber Rune", 1, 1, Rune),
    b("r31", "Jah Rune", 1, 1, Rune),
    b("r32", "Cham Rune", 1, 1, Rune),
    b("r33", "Zod Rune", 1, 1, Rune),
    // Potions and consumables
    b("hp1", "Minor Healing Potion", 1, 1, Potion),
    b("hp2", "Light Healing Potion", 1, 1, Potion),
    b("hp3", "Healing Potion", 1, 1, Potion),
    b("hp4", "Greater Healing Potion", 1, 1, Potion),
    b("hp5", "Super Healing Potion", 1, 1, Potion),
    b("mp1", "Minor Mana Potion", 1, 1, Potion),
    b("mp2", "Light Mana Potion", 1, 1, Potion),
    b("mp3", "Mana Potion", 1, 1, Potion),
    b("mp4", "Greater Mana Potion", 1, 1, Potion),
    b("mp5", "Super Mana Potion", 1, 1, Potion),
    b("rvs", "Rejuvenation Potion", 1, 1, Potion),
    b("rvl", "Full Rejuvenation Potion", 1, 1, Potion),
    b("yps", "Antidote Potion", 1, 1, Potion),
    b("vps", "Stamina Potion", 1, 1, Potion),
    b("wms", "Thawing Potion", 1, 1, Potion),
    b("gpl", "Strangling Gas Potion", 1, 1, Potion),
    b("gpm", "Choking Gas Potion", 1, 1, Potion),
    b("gps", "Rancid Gas Potion", 1, 1, Potion),
    b("opl", "Fulminating Potion", 1, 1, Potion),
    b("opm", "Exploding Potion", 1, 1, Potion),
    b("ops", "Oil Potion", 1, 1, Potion),
    b("isc", "Scroll of Identify", 1, 1, Scroll),
    b("tsc", "Scroll of Town Portal", 1, 1, Scroll),
    q("ibk", "Tome of Identify", 1, 2, Tome),
    q("tbk", "Tome of Town Portal", 1, 2, Tome),
    q("key", "Key", 1, 1, Key),
    b("ear", "Ear", 1, 1, Misc),
    // Uber keys, organs, essences, tokens
    b("pk1", "Key of Terror", 1, 2, Key),
    b("pk2", "Key of Hate", 1, 2, Key),
    b("pk3", "Key of Destruction", 1, 2, Key),
    b("mbr", "Mephisto's Brain", 1, 1, Quest),
    b("dhn", "Diablo's Horn", 1, 1, Quest),
    b("bey", "Baal's Eye", 1, 1, Quest),
    b("std", "Standard of Heroes", 1, 2, Quest),
    b("tes", "Twisted Essence of Suffering", 1, 1, Misc),
    b("ceh", "Charged Essence of Hatred", 1, 1, Misc),
    b("bet", "Burning Essence of Terror", 1, 1, Misc),
    b("fed", "Festering Essence of Destruction", 1, 1, Misc),
    b("toa", "Token of Absolution", 1, 1, Misc),
    // Quest items
    b("box", "Horadric Cube", 2, 2, Quest),
    b("bks", "Scroll of Inifuss", 2, 2, Quest),
    b("bkd", "Scroll of Inifuss", 2, 2, Quest),
    b("ass", "Book of Skill", 2, 2, Quest),
    b("xyz", "Potion of Life", 1, 1, Quest),
    b("j34", "Jade Figurine", 1, 2, Quest),
    b("g34", "Golden Bird", 1, 2, Quest),
    b("bbb", "Lam Esen's Tome", 2, 2, Quest),
    qw("g33", "The Gidbinn", 1, 2),
    qw("qf1", "Khalim's Flail", 2, 3),
    qw("qf2", "Khalim's Will", 2, 3),
    b("qey", "Khalim's Eye", 1, 1, Quest),
    b("qhr", "Khalim's Heart", 1, 2, Quest),
    b("qbr", "Khalim's Brain", 1, 2, Quest),
    qw("hdm", "Horadric Malus", 2, 3),
    qw("hfh", "Hell Forge Hammer", 2, 3),
    qw("msf", "Staff of Kings", 1, 3),
    b("vip", "Amulet of the Viper", 1, 1, Quest),
    qw("hst", "Horadric Staff", 1, 4),
    b("ice", "Malah's Potion", 1, 1, Quest),
    b("tr1", "Horadric Scroll", 2, 2, Quest),
    b("tr2", "Scroll of Resistance", 2, 2, Quest),
    qw("leg", "Wirt's Leg", 1, 3),
];
