use super::category::GarmentCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Warmth level assumed when an item carries none
pub const NEUTRAL_WARMTH: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Thick,
    #[default]
    Normal,
    Thin,
}

impl Thickness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Thickness::Thick => "thick",
            Thickness::Normal => "normal",
            Thickness::Thin => "thin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "thick" => Some(Thickness::Thick),
            "normal" => Some(Thickness::Normal),
            "thin" => Some(Thickness::Thin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Thickness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Heavy,
    #[default]
    Normal,
    Light,
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Heavy => "heavy",
            Weight::Normal => "normal",
            Weight::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "heavy" => Some(Weight::Heavy),
            "normal" => Some(Weight::Normal),
            "light" => Some(Weight::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the garment behaves in wind.
///
/// The labels are historical and read backwards: `Bad` means the fabric lets
/// no wind through (good on a gusty day), `Good` means it breathes freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindResistance {
    Bad,
    #[default]
    Normal,
    Good,
}

impl WindResistance {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindResistance::Bad => "bad",
            WindResistance::Normal => "normal",
            WindResistance::Good => "good",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bad" | "windproof" => Some(WindResistance::Bad),
            "normal" => Some(WindResistance::Normal),
            "good" | "breathable" => Some(WindResistance::Good),
            _ => None,
        }
    }
}

impl std::fmt::Display for WindResistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: String,
    pub category_id: u8,
    pub name: String,
    #[serde(default)]
    pub thickness: Thickness,
    #[serde(default)]
    pub weight: Weight,
    #[serde(default)]
    pub wind_resistance: WindResistance,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 1 (barely warm) to 5 (very warm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmth: Option<u8>,
    #[serde(default)]
    pub has_hood: bool,
    pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// New item with neutral attributes. An empty name falls back to the
    /// category's display name.
    pub fn new(id: impl Into<String>, category_id: u8, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            GarmentCategory::lookup(category_id)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| "Outer".to_string())
        } else {
            name
        };

        Self {
            id: id.into(),
            category_id,
            name,
            thickness: Thickness::Normal,
            weight: Weight::Normal,
            wind_resistance: WindResistance::Normal,
            color: "#000000".to_string(),
            image: None,
            warmth: None,
            has_hood: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_wind_resistance(mut self, wind_resistance: WindResistance) -> Self {
        self.wind_resistance = wind_resistance;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_warmth(mut self, warmth: u8) -> Self {
        self.warmth = Some(warmth.clamp(1, 5));
        self
    }

    pub fn with_hood(mut self, has_hood: bool) -> Self {
        self.has_hood = has_hood;
        self
    }

    pub fn category(&self) -> Option<&'static GarmentCategory> {
        GarmentCategory::lookup(self.category_id)
    }

    pub fn category_name(&self) -> &'static str {
        self.category().map(|c| c.name).unwrap_or("Unknown")
    }
}
