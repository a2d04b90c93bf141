use crate::utils::error::MilanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve rashis in their fixed circular order, Mesha first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Mesha = 0,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Mesha,
        ZodiacSign::Vrishabha,
        ZodiacSign::Mithuna,
        ZodiacSign::Karka,
        ZodiacSign::Simha,
        ZodiacSign::Kanya,
        ZodiacSign::Tula,
        ZodiacSign::Vrischika,
        ZodiacSign::Dhanu,
        ZodiacSign::Makara,
        ZodiacSign::Kumbha,
        ZodiacSign::Meena,
    ];

    /// Zero-based position in the circular order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ZodiacSign> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Mesha => "Mesha",
            ZodiacSign::Vrishabha => "Vrishabha",
            ZodiacSign::Mithuna => "Mithuna",
            ZodiacSign::Karka => "Karka",
            ZodiacSign::Simha => "Simha",
            ZodiacSign::Kanya => "Kanya",
            ZodiacSign::Tula => "Tula",
            ZodiacSign::Vrischika => "Vrischika",
            ZodiacSign::Dhanu => "Dhanu",
            ZodiacSign::Makara => "Makara",
            ZodiacSign::Kumbha => "Kumbha",
            ZodiacSign::Meena => "Meena",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ZodiacSign::Mesha => "Aries",
            ZodiacSign::Vrishabha => "Taurus",
            ZodiacSign::Mithuna => "Gemini",
            ZodiacSign::Karka => "Cancer",
            ZodiacSign::Simha => "Leo",
            ZodiacSign::Kanya => "Virgo",
            ZodiacSign::Tula => "Libra",
            ZodiacSign::Vrischika => "Scorpio",
            ZodiacSign::Dhanu => "Sagittarius",
            ZodiacSign::Makara => "Capricorn",
            ZodiacSign::Kumbha => "Aquarius",
            ZodiacSign::Meena => "Pisces",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Mesha => '♈',
            ZodiacSign::Vrishabha => '♉',
            ZodiacSign::Mithuna => '♊',
            ZodiacSign::Karka => '♋',
            ZodiacSign::Simha => '♌',
            ZodiacSign::Kanya => '♍',
            ZodiacSign::Tula => '♎',
            ZodiacSign::Vrischika => '♏',
            ZodiacSign::Dhanu => '♐',
            ZodiacSign::Makara => '♑',
            ZodiacSign::Kumbha => '♒',
            ZodiacSign::Meena => '♓',
        }
    }

    /// Ruling graha, by its English name.
    pub fn ruler(self) -> &'static str {
        match self {
            ZodiacSign::Mesha | ZodiacSign::Vrischika => "Mars",
            ZodiacSign::Vrishabha | ZodiacSign::Tula => "Venus",
            ZodiacSign::Mithuna | ZodiacSign::Kanya => "Mercury",
            ZodiacSign::Karka => "Moon",
            ZodiacSign::Simha => "Sun",
            ZodiacSign::Dhanu | ZodiacSign::Meena => "Jupiter",
            ZodiacSign::Makara | ZodiacSign::Kumbha => "Saturn",
        }
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Cardinal,
            1 => Quality::Fixed,
            _ => Quality::Mutable,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = MilanError;

    /// Accepts the Sanskrit or English name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| {
                sign.name().eq_ignore_ascii_case(wanted) || sign.english().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| MilanError::InvalidSign {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{:?}", self))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{:?}", self))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

impl Nakshatra {
    pub const ALL: [Nakshatra; 27] = [
        Nakshatra::Ashwini,
        Nakshatra::Bharani,
        Nakshatra::Krittika,
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Ardra,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Ashlesha,
        Nakshatra::Magha,
        Nakshatra::PurvaPhalguni,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Vishakha,
        Nakshatra::Anuradha,
        Nakshatra::Jyeshtha,
        Nakshatra::Mula,
        Nakshatra::PurvaAshadha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishta,
        Nakshatra::Shatabhisha,
        Nakshatra::PurvaBhadrapada,
        Nakshatra::UttaraBhadrapada,
        Nakshatra::Revati,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = MilanError;

    /// Matches display names case-insensitively; the space in compound names is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |v: &str| -> String {
            v.chars()
                .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = squash(s);
        Nakshatra::ALL
            .iter()
            .copied()
            .find(|n| squash(n.name()) == wanted)
            .ok_or_else(|| MilanError::InvalidNakshatra {
                value: s.to_string(),
            })
    }
}
