use serde::Serialize;

pub const HEAVY_DOWN: u8 = 1;
pub const THICK_BLOUSON: u8 = 2;
pub const WINDBREAKER: u8 = 3;
pub const LIGHT_BLOUSON: u8 = 4;
pub const TAILORED_JACKET: u8 = 5;
pub const WOOL_COAT: u8 = 6;
pub const TRENCH_COAT: u8 = 7;
pub const CARDIGAN: u8 = 8;

/// Comfort band used for category ids missing from the table
pub const DEFAULT_COMFORT_MIN: f64 = 15.0;
pub const DEFAULT_COMFORT_MAX: f64 = 20.0;

/// Static comfort profile for one kind of outer garment.
///
/// The band is the range of temperatures (°C) in which the category alone
/// keeps a person comfortable during urban daily wear. Neighbouring bands
/// overlap at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GarmentCategory {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub comfort_min: f64,
    pub comfort_max: f64,
    pub rain_resistant: bool,
}

pub const CATEGORIES: [GarmentCategory; 8] = [
    GarmentCategory {
        id: HEAVY_DOWN,
        name: "Heavy Down",
        description: "Warmest layer for midwinter",
        comfort_min: -30.0,
        comfort_max: 5.0,
        rain_resistant: false,
    },
    GarmentCategory {
        id: THICK_BLOUSON,
        name: "Thick Blouson",
        description: "MA-1, boa fleece",
        comfort_min: 3.0,
        comfort_max: 11.0,
        rain_resistant: true,
    },
    GarmentCategory {
        id: WINDBREAKER,
        name: "Windbreaker / Leather",
        description: "Leather or mountain shell",
        comfort_min: 8.0,
        comfort_max: 16.0,
        rain_resistant: true,
    },
    GarmentCategory {
        id: LIGHT_BLOUSON,
        name: "Light Blouson",
        description: "Mountain parka, spring and autumn",
        comfort_min: 14.0,
        comfort_max: 22.0,
        rain_resistant: true,
    },
    GarmentCategory {
        id: TAILORED_JACKET,
        name: "Tailored Jacket",
        description: "Office and smart casual",
        comfort_min: 16.0,
        comfort_max: 24.0,
        rain_resistant: false,
    },
    GarmentCategory {
        id: WOOL_COAT,
        name: "Wool Coat",
        description: "Chester or heavy wool",
        comfort_min: 4.0,
        comfort_max: 12.0,
        rain_resistant: false,
    },
    GarmentCategory {
        id: TRENCH_COAT,
        name: "Trench / Spring Coat",
        description: "Trench and other mid-season coats",
        comfort_min: 11.0,
        comfort_max: 19.0,
        rain_resistant: true,
    },
    GarmentCategory {
        id: CARDIGAN,
        name: "Cardigan",
        description: "Indoor and layering piece",
        comfort_min: 18.0,
        comfort_max: 32.0,
        rain_resistant: false,
    },
];

impl GarmentCategory {
    pub fn lookup(id: u8) -> Option<&'static GarmentCategory> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    pub fn all() -> &'static [GarmentCategory] {
        &CATEGORIES
    }

    pub fn midpoint(&self) -> f64 {
        (self.comfort_min + self.comfort_max) / 2.0
    }

    pub fn contains(&self, temp: f64) -> bool {
        (self.comfort_min..=self.comfort_max).contains(&temp)
    }

    /// Categories that overheat badly once the air passes 30°C
    pub fn is_heavy(id: u8) -> bool {
        matches!(id, HEAVY_DOWN | THICK_BLOUSON | WOOL_COAT)
    }

    /// Categories too bulky to sit comfortably in a heated car
    pub fn is_bulky(id: u8) -> bool {
        matches!(id, HEAVY_DOWN | THICK_BLOUSON | WOOL_COAT | TRENCH_COAT)
    }
}

impl std::fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Comfort band and rain flag for a category id.
///
/// Ids outside the table degrade to the default 15-20°C band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortProfile {
    pub comfort_min: f64,
    pub comfort_max: f64,
    pub rain_resistant: bool,
}

impl ComfortProfile {
    pub fn for_category(id: u8) -> Self {
        match GarmentCategory::lookup(id) {
            Some(category) => Self {
                comfort_min: category.comfort_min,
                comfort_max: category.comfort_max,
                rain_resistant: category.rain_resistant,
            },
            None => {
                tracing::warn!(category_id = id, "Unknown garment category, using default band");
                Self {
                    comfort_min: DEFAULT_COMFORT_MIN,
                    comfort_max: DEFAULT_COMFORT_MAX,
                    rain_resistant: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_are_stable() {
        for (index, category) in CATEGORIES.iter().enumerate() {
            assert_eq!(category.id as usize, index + 1);
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(GarmentCategory::lookup(1).map(|c| c.comfort_max), Some(5.0));
        assert_eq!(GarmentCategory::lookup(8).map(|c| c.comfort_max), Some(32.0));
        assert!(GarmentCategory::lookup(0).is_none());
        assert!(GarmentCategory::lookup(9).is_none());
    }

    #[test]
    fn unknown_category_uses_default_band() {
        let profile = ComfortProfile::for_category(42);
        assert_eq!(profile.comfort_min, 15.0);
        assert_eq!(profile.comfort_max, 20.0);
        assert!(!profile.rain_resistant);
    }

    #[test]
    fn rain_resistance_flags() {
        let rain_strong: Vec<u8> = CATEGORIES
            .iter()
            .filter(|c| c.rain_resistant)
            .map(|c| c.id)
            .collect();
        assert_eq!(rain_strong, vec![2, 3, 4, 7]);
    }

    #[test]
    fn heavy_and_bulky_sets() {
        assert!(GarmentCategory::is_heavy(HEAVY_DOWN));
        assert!(GarmentCategory::is_heavy(WOOL_COAT));
        assert!(!GarmentCategory::is_heavy(TRENCH_COAT));
        assert!(!GarmentCategory::is_heavy(CARDIGAN));

        assert!(GarmentCategory::is_bulky(TRENCH_COAT));
        assert!(!GarmentCategory::is_bulky(LIGHT_BLOUSON));
    }

    #[test]
    fn midpoint_and_contains() {
        let coat = GarmentCategory::lookup(WOOL_COAT).unwrap();
        assert_eq!(coat.midpoint(), 8.0);
        assert!(coat.contains(4.0));
        assert!(coat.contains(12.0));
        assert!(!coat.contains(12.5));
    }
}
