use super::GemFamily::{self, *};
use super::GemQuality::{self, *};
use super::{GemDef, RuneRecipe};

type Stats = &'static [(u16, &'static [i32])];

/// Bonus a socketed gem or rune grants, per slot of the host item.
pub(super) struct SocketEffect {
    pub code: &'static str,
    pub weapon: Stats,
    pub armor: Stats,
    pub shield: Stats,
}

const fn gem(code: &'static str, family: GemFamily, quality: GemQuality) -> GemDef {
    GemDef {
        code,
        family,
        quality,
    }
}

pub(super) const GEMS: &[GemDef] = &[
    gem("gcv", Amethyst, Chipped),
    gem("gfv", Amethyst, Flawed),
    gem("gsv", Amethyst, Normal),
    gem("gzv", Amethyst, Flawless),
    gem("gpv", Amethyst, Perfect),
    gem("gcy", Topaz, Chipped),
    gem("gfy", Topaz, Flawed),
    gem("gsy", Topaz, Normal),
    gem("gly", Topaz, Flawless),
    gem("gpy", Topaz, Perfect),
    gem("gcb", Sapphire, Chipped),
    gem("gfb", Sapphire, Flawed),
    gem("gsb", Sapphire, Normal),
    gem("glb", Sapphire, Flawless),
    gem("gpb", Sapphire, Perfect),
    gem("gcg", Emerald, Chipped),
    gem("gfg", Emerald, Flawed),
    gem("gsg", Emerald, Normal),
    gem("glg", Emerald, Flawless),
    gem("gpg", Emerald, Perfect),
    gem("gcr", Ruby, Chipped),
    gem("gfr", Ruby, Flawed),
    gem("gsr", Ruby, Normal),
    gem("glr", Ruby, Flawless),
    gem("gpr", Ruby, Perfect),
    gem("gcw", Diamond, Chipped),
    gem("gfw", Diamond, Flawed),
    gem("gsw", Diamond, Normal),
    gem("glw", Diamond, Flawless),
    gem("gpw", Diamond, Perfect),
    gem("skc", Skull, Chipped),
    gem("skf", Skull, Flawed),
    gem("sku", Skull, Normal),
    gem("skl", Skull, Flawless),
    gem("skz", Skull, Perfect),
];

pub(super) const RUNE_CODES: &[&str] = &[
    "r01", "r02", "r03", "r04", "r05", "r06", "r07", "r08", "r09", "r10", "r11", "r12", "r13",
    "r14", "r15", "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", "r24", "r25", "r26",
    "r27", "r28", "r29", "r30", "r31", "r32", "r33",
];

const fn recipe(
    input: &'static str,
    amount: usize,
    catalyst: Option<&'static str>,
    output: &'static str,
) -> RuneRecipe {
    RuneRecipe {
        input,
        amount,
        catalyst,
        output,
    }
}

// Cube recipes: three of the low runes, three plus a chipped or flawed gem
// from Thul up, two plus a higher gem from Pul up.
pub(super) const RUNE_RECIPES: &[RuneRecipe] = &[
    recipe("r01", 3, None, "r02"),
    recipe("r02", 3, None, "r03"),
    recipe("r03", 3, None, "r04"),
    recipe("r04", 3, None, "r05"),
    recipe("r05", 3, None, "r06"),
    recipe("r06", 3, None, "r07"),
    recipe("r07", 3, None, "r08"),
    recipe("r08", 3, None, "r09"),
    recipe("r09", 3, None, "r10"),
    recipe("r10", 3, Some("gcy"), "r11"),
    recipe("r11", 3, Some("gcv"), "r12"),
    recipe("r12", 3, Some("gcb"), "r13"),
    recipe("r13", 3, Some("gcr"), "r14"),
    recipe("r14", 3, Some("gcg"), "r15"),
    recipe("r15", 3, Some("gcw"), "r16"),
    recipe("r16", 3, Some("gfy"), "r17"),
    recipe("r17", 3, Some("gfv"), "r18"),
    recipe("r18", 3, Some("gfb"), "r19"),
    recipe("r19", 3, Some("gfr"), "r20"),
    recipe("r20", 3, Some("gfg"), "r21"),
    recipe("r21", 2, Some("gfw"), "r22"),
    recipe("r22", 2, Some("gsy"), "r23"),
    recipe("r23", 2, Some("gsv"), "r24"),
    recipe("r24", 2, Some("gsb"), "r25"),
    recipe("r25", 2, Some("gsr"), "r26"),
    recipe("r26", 2, Some("gsg"), "r27"),
    recipe("r27", 2, Some("gsw"), "r28"),
    recipe("r28", 2, Some("gly"), "r29"),
    recipe("r29", 2, Some("gzv"), "r30"),
    recipe("r30", 2, Some("glb"), "r31"),
    recipe("r31", 2, Some("glr"), "r32"),
    recipe("r32", 2, Some("glg"), "r33"),
];

const fn fx(code: &'static str, weapon: Stats, armor: Stats, shield: Stats) -> SocketEffect {
    SocketEffect {
        code,
        weapon,
        armor,
        shield,
    }
}

const ALL_RES_6: Stats = &[(39, &[6]), (41, &[6]), (43, &[6]), (45, &[6])];
const ALL_RES_8: Stats = &[(39, &[8]), (41, &[8]), (43, &[8]), (45, &[8])];
const ALL_RES_11: Stats = &[(39, &[11]), (41, &[11]), (43, &[11]), (45, &[11])];
const ALL_RES_14: Stats = &[(39, &[14]), (41, &[14]), (43, &[14]), (45, &[14])];
const ALL_RES_15: Stats = &[(39, &[15]), (41, &[15]), (43, &[15]), (45, &[15])];
const ALL_RES_19: Stats = &[(39, &[19]), (41, &[19]), (43, &[19]), (45, &[19])];
const ALL_RES_22: Stats = &[(39, &[22]), (41, &[22]), (43, &[22]), (45, &[22])];

pub(super) const SOCKET_EFFECTS: &[SocketEffect] = &[
    // Amethyst
    fx("gcv", &[(19, &[40])], &[(0, &[3])], &[(31, &[8])]),
    fx("gfv", &[(19, &[60])], &[(0, &[4])], &[(31, &[12])]),
    fx("gsv", &[(19, &[80])], &[(0, &[6])], &[(31, &[18])]),
    fx("gzv", &[(19, &[100])], &[(0, &[8])], &[(31, &[24])]),
    fx("gpv", &[(19, &[150])], &[(0, &[10])], &[(31, &[30])]),
    // Topaz
    fx("gcy", &[(50, &[1, 8])], &[(80, &[9])], &[(41, &[12])]),
    fx("gfy", &[(50, &[1, 14])], &[(80, &[13])], &[(41, &[16])]),
    fx("gsy", &[(50, &[1, 22])], &[(80, &[16])], &[(41, &[22])]),
    fx("gly", &[(50, &[1, 30])], &[(80, &[20])], &[(41, &[28])]),
    fx("gpy", &[(50, &[1, 40])], &[(80, &[24])], &[(41, &[40])]),
    // Sapphire
    fx("gcb", &[(54, &[1, 3, 25])], &[(9, &[10])], &[(43, &[12])]),
    fx("gfb", &[(54, &[3, 5, 35])], &[(9, &[17])], &[(43, &[16])]),
    fx("gsb", &[(54, &[4, 7, 50])], &[(9, &[24])], &[(43, &[22])]),
    fx("glb", &[(54, &[6, 10, 60])], &[(9, &[31])], &[(43, &[28])]),
    fx("gpb", &[(54, &[10, 14, 75])], &[(9, &[38])], &[(43, &[40])]),
    // Emerald
    fx("gcg", &[(57, &[34, 34, 75])], &[(2, &[3])], &[(45, &[12])]),
    fx("gfg", &[(57, &[51, 51, 100])], &[(2, &[4])], &[(45, &[16])]),
    fx("gsg", &[(57, &[82, 82, 125])], &[(2, &[6])], &[(45, &[22])]),
    fx("glg", &[(57, &[101, 101, 150])], &[(2, &[8])], &[(45, &[28])]),
    fx("gpg", &[(57, &[143, 143, 175])], &[(2, &[10])], &[(45, &[40])]),
    // Ruby
    fx("gcr", &[(48, &[3, 4])], &[(7, &[10])], &[(39, &[12])]),
    fx("gfr", &[(48, &[5, 8])], &[(7, &[17])], &[(39, &[16])]),
    fx("gsr", &[(48, &[8, 12])], &[(7, &[24])], &[(39, &[22])]),
    fx("glr", &[(48, &[10, 16])], &[(7, &[31])], &[(39, &[28])]),
    fx("gpr", &[(48, &[15, 20])], &[(7, &[38])], &[(39, &[40])]),
    // Diamond
    fx("gcw", &[(122, &[28])], &[(19, &[20])], ALL_RES_6),
    fx("gfw", &[(122, &[34])], &[(19, &[40])], ALL_RES_8),
    fx("gsw", &[(122, &[44])], &[(19, &[60])], ALL_RES_11),
    fx("glw", &[(122, &[54])], &[(19, &[80])], ALL_RES_14),
    fx("gpw", &[(122, &[68])], &[(19, &[100])], ALL_RES_19),
    // Skull
    fx("skc", &[(60, &[2]), (62, &[1])], &[(74, &[2]), (27, &[8])], &[(78, &[4])]),
    fx("skf", &[(60, &[2]), (62, &[2])], &[(74, &[2]), (27, &[8])], &[(78, &[8])]),
    fx("sku", &[(60, &[3]), (62, &[2])], &[(74, &[3]), (27, &[12])], &[(78, &[12])]),
    fx("skl", &[(60, &[3]), (62, &[3])], &[(74, &[3]), (27, &[12])], &[(78, &[16])]),
    fx("skz", &[(60, &[4]), (62, &[3])], &[(74, &[4]), (27, &[19])], &[(78, &[20])]),
    // Runes
    fx("r01", &[(19, &[50]), (89, &[1])], &[(31, &[15]), (89, &[1])], &[(31, &[15]), (89, &[1])]),
    fx("r02", &[(122, &[75]), (124, &[50])], &[(154, &[15])], &[(20, &[7])]),
    fx("r03", &[(138, &[2])], &[(138, &[2])], &[(138, &[2])]),
    fx("r04", &[(81, &[1])], &[(32, &[30])], &[(32, &[30])]),
    fx("r05", &[(116, &[-25])], &[(27, &[15])], &[(27, &[15])]),
    fx("r06", &[(22, &[9])], &[(114, &[15])], &[(114, &[15])]),
    fx("r07", &[(57, &[154, 154, 125])], &[(45, &[30])], &[(45, &[35])]),
    fx("r08", &[(48, &[5, 30])], &[(39, &[30])], &[(39, &[35])]),
    fx("r09", &[(50, &[1, 50])], &[(41, &[30])], &[(41, &[35])]),
    fx("r10", &[(54, &[3, 14, 75])], &[(43, &[30])], &[(43, &[35])]),
    fx("r11", &[(60, &[7])], &[(78, &[14])], &[(78, &[14])]),
    fx("r12", &[(21, &[9])], &[(34, &[7])], &[(34, &[7])]),
    fx("r13", &[(93, &[20])], &[(99, &[20])], &[(102, &[20])]),
    fx("r14", &[(112, &[25])], &[(74, &[7])], &[(74, &[7])]),
    fx("r15", &[(91, &[-20])], &[(91, &[-15])], &[(91, &[-15])]),
    fx("r16", &[(3, &[10])], &[(3, &[10])], &[(3, &[10])]),
    fx("r17", &[(1, &[10])], &[(1, &[10])], &[(1, &[10])]),
    fx("r18", &[(2, &[10])], &[(2, &[10])], &[(2, &[10])]),
    fx("r19", &[(0, &[10])], &[(0, &[10])], &[(0, &[10])]),
    fx("r20", &[(79, &[75])], &[(79, &[50])], &[(79, &[50])]),
    fx("r21", &[(121, &[75]), (123, &[100])], &[(16, &[30])], &[(16, &[30])]),
    fx("r22", &[(135, &[25])], ALL_RES_15, ALL_RES_22),
    fx("r23", &[(117, &[1])], &[(35, &[7])], &[(35, &[7])]),
    fx("r24", &[(80, &[30])], &[(80, &[25])], &[(80, &[25])]),
    fx("r25", &[(119, &[20])], &[(46, &[5])], &[(46, &[5])]),
    fx("r26", &[(62, &[7])], &[(40, &[5])], &[(40, &[5])]),
    fx("r27", &[(17, &[50, 50])], &[(42, &[5])], &[(42, &[5])]),
    fx("r28", &[(141, &[20])], &[(44, &[5])], &[(44, &[5])]),
    fx("r29", &[(113, &[1])], &[(77, &[5])], &[(9, &[50])]),
    fx("r30", &[(136, &[20])], &[(36, &[8])], &[(36, &[8])]),
    fx("r31", &[(115, &[1])], &[(76, &[5])], &[(7, &[50])]),
    fx("r32", &[(134, &[3])], &[(153, &[1])], &[(153, &[1])]),
    fx("r33", &[(152, &[1])], &[(152, &[1])], &[(152, &[1])]),
];
