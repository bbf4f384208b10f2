//! Rarity Classes
//!
//! Integer-coded scarcity classes, 1 (Common) through 5 (Legendary).

use std::fmt;

use super::entity::RecordError;

/// Item scarcity/quality class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
}

impl Rarity {
    /// All rarities in ascending order
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Numeric code used by the dataset
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// CSS custom property holding this rarity's display colour
    pub fn color_var(self) -> &'static str {
        match self {
            Rarity::Common => "var(--common-item-color)",
            Rarity::Uncommon => "var(--uncommon-item-color)",
            Rarity::Rare => "var(--rare-item-color)",
            Rarity::Epic => "var(--epic-item-color)",
            Rarity::Legendary => "var(--legendary-item-color)",
        }
    }
}

impl TryFrom<i64> for Rarity {
    type Error = RecordError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Rarity::Common),
            2 => Ok(Rarity::Uncommon),
            3 => Ok(Rarity::Rare),
            4 => Ok(Rarity::Epic),
            5 => Ok(Rarity::Legendary),
            other => Err(RecordError::RarityOutOfRange(other)),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_codes_round_trip() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::try_from(i64::from(rarity.code())), Ok(rarity));
        }
    }

    #[test]
    fn test_rarity_out_of_range() {
        assert_eq!(Rarity::try_from(0), Err(RecordError::RarityOutOfRange(0)));
        assert_eq!(Rarity::try_from(6), Err(RecordError::RarityOutOfRange(6)));
    }

    #[test]
    fn test_rarity_labels() {
        assert_eq!(Rarity::Epic.to_string(), "Epic");
        assert_eq!(Rarity::Legendary.color_var(), "var(--legendary-item-color)");
    }
}
