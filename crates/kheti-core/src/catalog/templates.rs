//! Agronomic template data.

use super::{CategoryTemplate, CropOverride};
use crate::models::{
    CropCategory::{self, *},
    PlanStage as S,
    PlanTask as T,
    TaskKind::*,
};

pub(super) const CATEGORY_TEMPLATES: &[CategoryTemplate] = &[
    CategoryTemplate {
        category: Cereal,
        duration_days: 120,
        stages: &[
            S::new("Land preparation", -14, -1),
            S::new("Sowing & germination", 0, 14),
            S::new("Tillering/Vegetative", 15, 50),
            S::new("Flowering", 51, 80),
            S::new("Grain filling", 81, 110),
            S::new("Harvest", 111, 120),
        ],
        base_tasks: &[
            T::new(-10, "Field prep", Activity, "Primary tillage, remove residues, level field"),
            T::new(
                -3,
                "Basal fertilizer",
                Fertilizer,
                "Apply NPK 10:26:26 @ 50 kg/acre and FYM 1–2 tons/acre during final harrow",
            ),
            T::new(
                0,
                "Sowing",
                Activity,
                "Sow with recommended spacing; treat seed with fungicide/insecticide as per label",
            ),
            T::new(
                15,
                "1st urea top dress",
                Fertilizer,
                "Urea @ 30 kg/acre along rows after first irrigation or rain",
            ),
            T::new(
                30,
                "Weed control",
                Activity,
                "Interculture/hoe; apply pre/post-emergence herbicide if needed",
            ),
            T::new(
                35,
                "2nd urea top dress",
                Fertilizer,
                "Urea @ 20 kg/acre at late vegetative stage",
            ),
            T::new(
                45,
                "Pest & disease scout",
                Pest,
                "Scout for stem borer/leaf blight; spray recommended pesticide only if ETL crossed",
            ),
            T::new(
                90,
                "Pre-harvest check",
                Activity,
                "Drain excess water, stop irrigation; check grain maturity",
            ),
            T::new(
                115,
                "Harvest & drying",
                Activity,
                "Harvest at physiological maturity and dry grains to safe moisture",
            ),
        ],
    },
    CategoryTemplate {
        category: Pulses,
        duration_days: 110,
        stages: &[
            S::new("Land preparation", -10, -1),
            S::new("Sowing & germination", 0, 12),
            S::new("Vegetative", 13, 35),
            S::new("Flowering & pod formation", 36, 80),
            S::new("Pod filling", 81, 100),
            S::new("Harvest", 101, 110),
        ],
        base_tasks: &[
            T::new(
                -7,
                "Basal fertilizer",
                Fertilizer,
                "DAP 18:46:0 @ 40 kg/acre; Rhizobium inoculation for seed",
            ),
            T::new(
                0,
                "Sowing",
                Activity,
                "Line sowing; seed treatment with Trichoderma/Thiram as per label",
            ),
            T::new(20, "Weeding", Activity, "Interculture/hand weeding"),
            T::new(
                30,
                "Micronutrients",
                Fertilizer,
                "Foliar spray 1% KNO3 or 0.5% ZnSO4 if deficiency observed",
            ),
            T::new(
                40,
                "Pest management",
                Pest,
                "Helicoverpa/scuttle pest monitoring; spray only if ETL",
            ),
            T::new(
                90,
                "Irrigation stop",
                Irrigation,
                "Stop irrigation before harvest to ease drying",
            ),
            T::new(105, "Harvest", Activity, "Harvest when pods turn brown and seeds harden"),
        ],
    },
    CategoryTemplate {
        category: Oilseed,
        duration_days: 115,
        stages: &[
            S::new("Land preparation", -10, -1),
            S::new("Sowing & germination", 0, 10),
            S::new("Vegetative", 11, 35),
            S::new("Flowering", 36, 70),
            S::new("Pod/seed filling", 71, 105),
            S::new("Harvest", 106, 115),
        ],
        base_tasks: &[
            T::new(
                -5,
                "Basal fertilizer",
                Fertilizer,
                "NPK 12:32:16 @ 50 kg/acre + FYM 1 ton/acre",
            ),
            T::new(0, "Sowing", Activity, "Line sowing, proper seed rate and spacing"),
            T::new(20, "Thinning & weeding", Activity, "Maintain plant stand, remove weeds"),
            T::new(25, "Top dress N", Fertilizer, "Urea @ 20 kg/acre before flowering"),
            T::new(
                45,
                "Pest management",
                Pest,
                "Aphids/leaf miner monitoring; spray if ETL",
            ),
            T::new(
                95,
                "Irrigation stop",
                Irrigation,
                "Stop irrigation before maturity",
            ),
            T::new(110, "Harvest", Activity, "Harvest when seeds are firm and pods dry"),
        ],
    },
    CategoryTemplate {
        category: Fruit,
        duration_days: 180,
        stages: &[
            S::new("Pit preparation", -20, -1),
            S::new("Planting establishment", 0, 30),
            S::new("Vegetative growth", 31, 120),
            S::new("Flowering/fruit set", 121, 160),
            S::new("Early harvest", 161, 180),
        ],
        base_tasks: &[
            T::new(
                -10,
                "FYM & basal",
                Fertilizer,
                "Apply 10–20 kg FYM/plant with SSP as per crop",
            ),
            T::new(0, "Transplant", Activity, "Plant healthy saplings; stake if required"),
            T::new(
                15,
                "Irrigation",
                Irrigation,
                "Regular irrigation to establish plants",
            ),
            T::new(45, "Training & pruning", Activity, "Train/prune as per crop habit"),
            T::new(
                60,
                "Pest management",
                Pest,
                "Monitor fruit fly, sucking pests; spray if ETL",
            ),
            T::new(
                150,
                "Pre-harvest sanitation",
                Activity,
                "Remove infected fruits, maintain hygiene",
            ),
        ],
    },
    CategoryTemplate {
        category: Vegetable,
        duration_days: 100,
        stages: &[
            S::new("Nursery/land prep", -20, -1),
            S::new("Transplant/sowing & takeoff", 0, 15),
            S::new("Vegetative", 16, 45),
            S::new("Flowering/fruiting", 46, 85),
            S::new("Harvest", 86, 100),
        ],
        base_tasks: &[
            T::new(
                -7,
                "Basal fertilizer",
                Fertilizer,
                "NPK 10:26:26 @ 40 kg/acre + FYM 1–2 tons/acre",
            ),
            T::new(0, "Transplant/Sow", Activity, "Transplant healthy seedlings or sow seeds"),
            T::new(
                10,
                "Weeding & staking",
                Activity,
                "Weed control and provide staking for creepers",
            ),
            T::new(20, "Top dress N", Fertilizer, "Urea @ 20 kg/acre"),
            T::new(35, "Pest & disease", Pest, "Scout for fruit borer/mildew; spray if ETL"),
            T::new(60, "Micronutrients", Fertilizer, "1% KNO3 foliar spray for fruiting"),
            T::new(90, "Harvest window begins", Activity, "Start periodic harvests"),
        ],
    },
];

/// Known crop durations. Keys must match catalog crop names exactly.
pub(super) const CROP_OVERRIDES: &[CropOverride] = &[
    CropOverride::duration("Rice", 120),
    CropOverride::duration("Wheat", 135),
    CropOverride::duration("Maize", 110),
    CropOverride::duration("Soybean", 105),
    CropOverride::duration("Groundnut", 115),
    CropOverride::duration("Onion", 110),
    CropOverride::duration("Tomato", 95),
    CropOverride::duration("Tur (Pigeon Pea)", 150),
    CropOverride::duration("Chana (Gram)", 120),
    CropOverride::duration("Moong (Green Gram)", 70),
    CropOverride::duration("Urad (Black Gram)", 80),
];

pub(super) fn category_template(category: CropCategory) -> Option<&'static CategoryTemplate> {
    CATEGORY_TEMPLATES.iter().find(|t| t.category == category)
}

pub(super) fn crop_override(crop: &str) -> Option<&'static CropOverride> {
    CROP_OVERRIDES.iter().find(|o| o.crop == crop)
}
