//! 在线角色名册：按阵营、种族、职业分组统计。

use std::collections::BTreeMap;

use wp_shared_protocol::OnlineCharacter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Faction {
    Alliance,
    Horde,
    /// 熊猫人未选阵营前，以及未知种族。
    Neutral,
}

impl Faction {
    /// 由种族 ID 推导阵营。
    pub fn from_race(race_id: i64) -> Self {
        match race_id {
            1 | 3 | 4 | 7 | 11 | 22 | 25 => Self::Alliance,
            2 | 5 | 6 | 8 | 9 | 10 | 26 => Self::Horde,
            _ => Self::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alliance => "Alliance",
            Self::Horde => "Horde",
            Self::Neutral => "Neutral",
        }
    }
}

pub fn race_name(race_id: i64) -> &'static str {
    match race_id {
        1 => "Human",
        2 => "Orc",
        3 => "Dwarf",
        4 => "Night Elf",
        5 => "Undead",
        6 => "Tauren",
        7 => "Gnome",
        8 => "Troll",
        9 => "Goblin",
        10 => "Blood Elf",
        11 => "Draenei",
        22 => "Worgen",
        24 | 25 | 26 => "Pandaren",
        _ => "Unknown",
    }
}

pub fn class_name(class_id: i64) -> &'static str {
    match class_id {
        1 => "Warrior",
        2 => "Paladin",
        3 => "Hunter",
        4 => "Rogue",
        5 => "Priest",
        6 => "Death Knight",
        7 => "Shaman",
        8 => "Mage",
        9 => "Warlock",
        10 => "Monk",
        11 => "Druid",
        12 => "Demon Hunter",
        _ => "Unknown",
    }
}

/// 分组结果；组内保持接口返回顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub by_faction: BTreeMap<Faction, Vec<OnlineCharacter>>,
    pub by_race: BTreeMap<i64, Vec<OnlineCharacter>>,
    pub by_class: BTreeMap<i64, Vec<OnlineCharacter>>,
}

impl Roster {
    pub fn build(characters: &[OnlineCharacter]) -> Self {
        let mut roster = Self::default();
        for character in characters {
            roster
                .by_faction
                .entry(Faction::from_race(character.race_id))
                .or_default()
                .push(character.clone());
            roster
                .by_race
                .entry(character.race_id)
                .or_default()
                .push(character.clone());
            roster
                .by_class
                .entry(character.class_id)
                .or_default()
                .push(character.clone());
        }
        roster
    }

    pub fn total(&self) -> usize {
        self.by_faction.values().map(Vec::len).sum()
    }

    pub fn faction_count(&self, faction: Faction) -> usize {
        self.by_faction.get(&faction).map_or(0, Vec::len)
    }

    /// 每行一个分组的计数摘要，供终端展示。
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (faction, members) in &self.by_faction {
            lines.push(format!("{}: {}", faction.label(), members.len()));
        }
        for (race, members) in &self.by_race {
            lines.push(format!("  {}: {}", race_name(*race), members.len()));
        }
        for (class, members) in &self.by_class {
            lines.push(format!("  {}: {}", class_name(*class), members.len()));
        }
        lines
    }
}
