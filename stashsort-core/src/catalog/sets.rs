pub(super) struct SetRange {
    pub name: &'static str,
    pub first: u16,
    pub last: u16,
}

const fn set(name: &'static str, first: u16, last: u16) -> SetRange {
    SetRange { name, first, last }
}

/// Set item ids are allocated contiguously per set, in this order.
pub(super) const SETS: &[SetRange] = &[
    set("Civerb's Vestments", 0, 2),
    set("Hsarus' Defense", 3, 5),
    set("Cleglaw's Brace", 6, 8),
    set("Iratha's Finery", 9, 12),
    set("Isenhart's Armory", 13, 16),
    set("Vidala's Rig", 17, 20),
    set("Milabrega's Regalia", 21, 24),
    set("Cathan's Traps", 25, 29),
    set("Tancred's Battlegear", 30, 34),
    set("Sigon's Complete Steel", 35, 40),
    set("Infernal Tools", 41, 43),
    set("Berserker's Garb", 44, 46),
    set("Death's Disguise", 47, 49),
    set("Angelic Raiment", 50, 53),
    set("Arctic Gear", 54, 57),
    set("Arcanna's Tricks", 58, 61),
    set("Natalya's Odium", 62, 65),
    set("Aldur's Watchtower", 66, 69),
    set("Immortal King", 70, 75),
    set("Tal Rasha's Wrappings", 76, 80),
    set("Griswold's Legacy", 81, 84),
    set("Trang-Oul's Avatar", 85, 89),
    set("M'avina's Battle Hymn", 90, 94),
    set("The Disciple", 95, 99),
    set("Heaven's Brethren", 100, 103),
    set("Orphan's Call", 104, 107),
    set("Hwanin's Majesty", 108, 111),
    set("Sazabi's Grand Tribute", 112, 114),
    set("Bul-Kathos' Children", 115, 116),
    set("Cow King's Leathers", 117, 119),
    set("Naj's Ancient Vestige", 120, 122),
    set("McAuley's Folly", 123, 126),
];
