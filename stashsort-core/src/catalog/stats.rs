use super::StatDef;

const fn s(id: u16, name: &'static str, widths: &'static [u8], bias: i32) -> StatDef {
    StatDef {
        id,
        name,
        widths,
        bias,
    }
}

// Saved stat layout. Paired stats (min/max damage, elemental length, skill
// parameters) are stored under the first id and read as one entry.
pub(super) const STATS: &[StatDef] = &[
    s(0, "strength", &[8], 32),
    s(1, "energy", &[7], 32),
    s(2, "dexterity", &[7], 32),
    s(3, "vitality", &[7], 32),
    s(7, "maxhp", &[9], 32),
    s(9, "maxmana", &[8], 32),
    s(11, "maxstamina", &[8], 32),
    s(16, "item_armor_percent", &[9], 0),
    s(17, "item_maxdamage_percent", &[9, 9], 0),
    s(19, "tohit", &[10], 0),
    s(20, "toblock", &[6], 0),
    s(21, "mindamage", &[6], 0),
    s(22, "maxdamage", &[7], 0),
    s(23, "secondary_mindamage", &[6], 0),
    s(24, "secondary_maxdamage", &[7], 0),
    s(27, "manarecoverybonus", &[8], 0),
    s(28, "staminarecoverybonus", &[8], 0),
    s(31, "armorclass", &[11], 10),
    s(32, "armorclass_vs_missile", &[9], 0),
    s(33, "armorclass_vs_hth", &[8], 0),
    s(34, "normal_damage_reduction", &[6], 0),
    s(35, "magic_damage_reduction", &[6], 0),
    s(36, "damageresist", &[8], 0),
    s(37, "magicresist", &[8], 0),
    s(38, "maxmagicresist", &[5], 0),
    s(39, "fireresist", &[8], 50),
    s(40, "maxfireresist", &[5], 0),
    s(41, "lightresist", &[8], 50),
    s(42, "maxlightresist", &[5], 0),
    s(43, "coldresist", &[8], 50),
    s(44, "maxcoldresist", &[5], 0),
    s(45, "poisonresist", &[8], 50),
    s(46, "maxpoisonresist", &[5], 0),
    s(48, "firemindam", &[8, 9], 0),
    s(50, "lightmindam", &[6, 10], 0),
    s(52, "magicmindam", &[8, 9], 0),
    s(54, "coldmindam", &[8, 9, 8], 0),
    s(57, "poisonmindam", &[10, 10, 9], 0),
    s(60, "lifedrainmindam", &[7], 0),
    s(62, "manadrainmindam", &[7], 0),
    s(74, "hpregen", &[6], 30),
    s(75, "item_maxdurability_percent", &[7], 20),
    s(76, "item_maxhp_percent", &[6], 10),
    s(77, "item_maxmana_percent", &[6], 10),
    s(78, "item_attackertakesdamage", &[7], 0),
    s(79, "item_goldbonus", &[9], 100),
    s(80, "item_magicbonus", &[8], 100),
    s(81, "item_knockback", &[7], 0),
    s(83, "item_addclassskills", &[3, 3], 0),
    s(85, "item_addexperience", &[9], 50),
    s(86, "item_healafterkill", &[7], 0),
    s(87, "item_reducedprices", &[7], 0),
    s(89, "item_lightradius", &[4], 4),
    s(91, "item_req_percent", &[8], 100),
    s(93, "item_fasterattackrate", &[7], 20),
    s(96, "item_fastermovevelocity", &[7], 20),
    s(97, "item_nonclassskill", &[9, 6], 0),
    s(99, "item_fastergethitrate", &[7], 20),
    s(102, "item_fasterblockrate", &[7], 20),
    s(105, "item_fastercastrate", &[7], 20),
    s(107, "item_singleskill", &[9, 3], 0),
    s(108, "item_restinpeace", &[1], 0),
    s(110, "item_poisonlengthresist", &[8], 20),
    s(111, "item_normaldamage", &[9], 20),
    s(112, "item_howl", &[7], 0),
    s(113, "item_stupidity", &[7], 0),
    s(114, "item_damagetomana", &[6], 0),
    s(115, "item_ignoretargetac", &[1], 0),
    s(116, "item_fractionaltargetac", &[7], 0),
    s(117, "item_preventheal", &[7], 0),
    s(118, "item_halffreezeduration", &[1], 0),
    s(119, "item_tohit_percent", &[9], 20),
    s(120, "item_damagetargetac", &[7], 128),
    s(121, "item_demondamage_percent", &[9], 20),
    s(122, "item_undeaddamage_percent", &[9], 20),
    s(123, "item_demon_tohit", &[10], 128),
    s(124, "item_undead_tohit", &[10], 128),
    s(126, "item_elemskill", &[3], 0),
    s(127, "item_allskills", &[3], 0),
    s(128, "item_attackertakeslightdamage", &[5], 0),
    s(134, "item_freeze", &[5], 0),
    s(135, "item_openwounds", &[7], 0),
    s(136, "item_crushingblow", &[7], 0),
    s(137, "item_kickdamage", &[7], 0),
    s(138, "item_manaafterkill", &[7], 0),
    s(139, "item_healafterdemonkill", &[7], 0),
    s(141, "item_deadlystrike", &[7], 0),
    s(142, "item_absorbfire_percent", &[7], 0),
    s(143, "item_absorbfire", &[7], 0),
    s(144, "item_absorblight_percent", &[7], 0),
    s(145, "item_absorblight", &[7], 0),
    s(146, "item_absorbmagic_percent", &[7], 0),
    s(147, "item_absorbmagic", &[7], 0),
    s(148, "item_absorbcold_percent", &[7], 0),
    s(149, "item_absorbcold", &[7], 0),
    s(150, "item_slow", &[7], 0),
    s(151, "item_aura", &[9, 5], 0),
    s(152, "item_indesctructible", &[1], 0),
    s(153, "item_cannotbefrozen", &[1], 0),
    s(154, "item_staminadrainpct", &[7], 20),
    s(155, "item_reanimate", &[10, 7], 0),
    s(156, "item_pierce", &[7], 0),
    s(157, "item_magicarrow", &[7], 0),
    s(158, "item_explosivearrow", &[7], 0),
    s(159, "item_throw_mindamage", &[6], 0),
    s(160, "item_throw_maxdamage", &[7], 0),
    s(188, "item_addskill_tab", &[3, 13, 3], 0),
    s(194, "item_numsockets", &[4], 0),
    s(195, "item_skillonattack", &[6, 10, 7], 0),
    s(196, "item_skillonkill", &[6, 10, 7], 0),
    s(197, "item_skillondeath", &[6, 10, 7], 0),
    s(198, "item_skillonhit", &[6, 10, 7], 0),
    s(199, "item_skillonlevelup", &[6, 10, 7], 0),
    s(201, "item_skillongethit", &[6, 10, 7], 0),
    s(204, "item_charged_skill", &[6, 10, 8, 8], 0),
    s(214, "item_armor_perlevel", &[6], 0),
    s(215, "item_armorpercent_perlevel", &[6], 0),
    s(216, "item_hp_perlevel", &[6], 0),
    s(217, "item_mana_perlevel", &[6], 0),
    s(218, "item_maxdamage_perlevel", &[6], 0),
    s(219, "item_maxdamage_percent_perlevel", &[6], 0),
    s(220, "item_strength_perlevel", &[6], 0),
    s(221, "item_dexterity_perlevel", &[6], 0),
    s(222, "item_energy_perlevel", &[6], 0),
    s(223, "item_vitality_perlevel", &[6], 0),
    s(224, "item_tohit_perlevel", &[6], 0),
    s(225, "item_tohitpercent_perlevel", &[6], 0),
    s(226, "item_cold_damagemax_perlevel", &[6], 0),
    s(227, "item_fire_damagemax_perlevel", &[6], 0),
    s(228, "item_ltng_damagemax_perlevel", &[6], 0),
    s(229, "item_pois_damagemax_perlevel", &[6], 0),
    s(230, "item_resist_cold_perlevel", &[6], 0),
    s(231, "item_resist_fire_perlevel", &[6], 0),
    s(232, "item_resist_ltng_perlevel", &[6], 0),
    s(233, "item_resist_pois_perlevel", &[6], 0),
    s(234, "item_absorb_cold_perlevel", &[6], 0),
    s(235, "item_absorb_fire_perlevel", &[6], 0),
    s(236, "item_absorb_ltng_perlevel", &[6], 0),
    s(237, "item_absorb_pois_perlevel", &[6], 0),
    s(238, "item_thorns_perlevel", &[6], 0),
    s(239, "item_find_gold_perlevel", &[6], 0),
    s(240, "item_find_magic_perlevel", &[6], 0),
    s(241, "item_regenstamina_perlevel", &[6], 0),
    s(242, "item_stamina_perlevel", &[6], 0),
    s(243, "item_damage_demon_perlevel", &[6], 0),
    s(244, "item_damage_undead_perlevel", &[6], 0),
    s(245, "item_tohit_demon_perlevel", &[6], 0),
    s(246, "item_tohit_undead_perlevel", &[6], 0),
    s(247, "item_crushingblow_perlevel", &[6], 0),
    s(248, "item_openwounds_perlevel", &[6], 0),
    s(249, "item_kick_damage_perlevel", &[6], 0),
    s(250, "item_deadlystrike_perlevel", &[6], 0),
    s(252, "item_replenish_durability", &[6], 0),
    s(253, "item_replenish_quantity", &[6], 0),
    s(254, "item_extra_stack", &[8], 0),
    s(329, "passive_fire_mastery", &[9], 50),
    s(330, "passive_ltng_mastery", &[9], 50),
    s(331, "passive_cold_mastery", &[9], 50),
    s(332, "passive_pois_mastery", &[9], 50),
    s(333, "passive_fire_pierce", &[8], 0),
    s(334, "passive_ltng_pierce", &[8], 0),
    s(335, "passive_cold_pierce", &[8], 0),
    s(336, "passive_pois_pierce", &[8], 0),
    s(356, "quest_item_difficulty", &[2], 0),
];
