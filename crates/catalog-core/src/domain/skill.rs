//! Profession Skills
//!
//! Skill ids referenced by recipe level requirements and extraction data.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// Skill identifier as used by the game data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub u32);

/// The game's generic "any skill" requirement
pub const ANY_SKILL: SkillId = SkillId(1);

/// Named skills offered as filter options
pub const SKILLS: &[(SkillId, &str)] = &[
    (SkillId(2), "Forestry"),
    (SkillId(3), "Carpentry"),
    (SkillId(4), "Masonry"),
    (SkillId(5), "Mining"),
    (SkillId(6), "Smithing"),
    (SkillId(7), "Scholar"),
    (SkillId(8), "Leatherworking"),
    (SkillId(9), "Hunting"),
    (SkillId(10), "Tailoring"),
    (SkillId(11), "Farming"),
    (SkillId(12), "Fishing"),
    (SkillId(13), "Cooking"),
    (SkillId(14), "Foraging"),
];

impl SkillId {
    /// Display name; unknown ids render as `Skill #<id>`
    pub fn name(self) -> Cow<'static, str> {
        if self == ANY_SKILL {
            return Cow::Borrowed("Any Skill");
        }
        SKILLS
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| Cow::Borrowed(*name))
            .unwrap_or_else(|| Cow::Owned(format!("Skill #{}", self.0)))
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_names() {
        assert_eq!(SkillId(5).name(), "Mining");
        assert_eq!(SkillId(14).name(), "Foraging");
        assert_eq!(ANY_SKILL.name(), "Any Skill");
        assert_eq!(SkillId(99).to_string(), "Skill #99");
    }

    #[test]
    fn test_any_skill_is_not_a_filter_option() {
        assert!(SKILLS.iter().all(|(id, _)| *id != ANY_SKILL));
    }
}
