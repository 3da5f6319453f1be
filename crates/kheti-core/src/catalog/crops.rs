//! Crops a farmer can pick, grouped by category.

use serde::Serialize;

use crate::{
    i18n::Locale,
    models::CropCategory::{self, *},
};

/// One selectable crop.
///
/// `name` is the canonical English name: it is what gets stored in the crop
/// log and what crop overrides are keyed by.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropInfo {
    pub name: &'static str,
    pub category: CropCategory,
    pub mr: &'static str,
    pub hi: &'static str,
}

impl CropInfo {
    const fn new(
        category: CropCategory,
        name: &'static str,
        mr: &'static str,
        hi: &'static str,
    ) -> Self {
        Self {
            name,
            category,
            mr,
            hi,
        }
    }

    /// Name to show a farmer using `locale`.
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name,
            Locale::Mr => self.mr,
            Locale::Hi => self.hi,
        }
    }
}

const CROPS: &[CropInfo] = &[
    CropInfo::new(Cereal, "Rice", "तांदूळ", "धान"),
    CropInfo::new(Cereal, "Jowar (Sorghum)", "ज्वारी", "ज्वार"),
    CropInfo::new(Cereal, "Bajra (Pearl Millet)", "बाजरी", "बाजरा"),
    CropInfo::new(Cereal, "Wheat", "गहू", "गेहूं"),
    CropInfo::new(Cereal, "Maize", "मका", "मकई"),
    CropInfo::new(Pulses, "Tur (Pigeon Pea)", "तूर", "अरहर/तूर"),
    CropInfo::new(Pulses, "Chana (Gram)", "हरभरा", "चना"),
    CropInfo::new(Pulses, "Moong (Green Gram)", "मुग", "मूँग"),
    CropInfo::new(Pulses, "Urad (Black Gram)", "उडीद", "उड़द"),
    CropInfo::new(Oilseed, "Soybean", "सोयाबीन", "सोयाबीन"),
    CropInfo::new(Oilseed, "Groundnut", "भुईमूग", "मूंगफली"),
    CropInfo::new(Oilseed, "Sunflower", "सूर्यमुखी", "सूरजमुखी"),
    CropInfo::new(Oilseed, "Sesame (Til)", "तिळ", "तिल"),
    CropInfo::new(Fruit, "Mango", "आंबा", "आम"),
    CropInfo::new(Fruit, "Banana", "केळी", "केला"),
    CropInfo::new(Fruit, "Pomegranate", "डाळिंब", "अनार"),
    CropInfo::new(Fruit, "Grapes", "द्राक्ष", "अंगूर"),
    CropInfo::new(Fruit, "Orange", "संत्रे", "संतरा"),
    CropInfo::new(Vegetable, "Onion", "कांदा", "प्याज़"),
    CropInfo::new(Vegetable, "Tomato", "टोमॅटो", "टमाटर"),
    CropInfo::new(Vegetable, "Brinjal (Eggplant)", "वांगी", "बैंगन"),
    CropInfo::new(Vegetable, "Okra (Bhendi)", "भेंडी", "भिंडी"),
    CropInfo::new(Vegetable, "Cauliflower", "फुलकोबी", "फूलगोभी"),
];

/// Every catalog crop, grouped by category in catalog order.
pub fn crops() -> &'static [CropInfo] {
    CROPS
}

/// Crops of one category.
pub fn crops_in(category: CropCategory) -> impl Iterator<Item = &'static CropInfo> {
    CROPS.iter().filter(move |crop| crop.category == category)
}

/// Look up a crop by its canonical name (exact match).
pub fn find_crop(name: &str) -> Option<&'static CropInfo> {
    CROPS.iter().find(|crop| crop.name == name)
}
