//! Localization lookup for plan text.
//!
//! Stage names, task titles and task descriptions are written in English in
//! the template catalog. [`translate`] maps such a canonical string to its
//! Marathi or Hindi form. Lookup is by exact string; anything missing from
//! the table comes back unchanged, so unknown text degrades to English
//! instead of failing.

use std::{collections::HashMap, str::FromStr, sync::LazyLock};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Languages plan text can be rendered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Mr,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Mr, Locale::Hi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Mr => "mr",
            Locale::Hi => "hi",
        }
    }

    /// BCP-47 tag used when rendering dates for display.
    pub fn display_tag(&self) -> &'static str {
        match self {
            Locale::En => "en-IN",
            Locale::Mr => "mr-IN",
            Locale::Hi => "hi-IN",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "mr" => Ok(Locale::Mr),
            "hi" => Ok(Locale::Hi),
            _ => Err(format!("Unsupported locale: {s} (expected en, mr or hi)")),
        }
    }
}

/// One row of the translation table.
#[derive(Debug, Clone, Copy)]
pub struct Translation {
    pub en: &'static str,
    pub mr: &'static str,
    pub hi: &'static str,
}

impl Translation {
    const fn new(en: &'static str, mr: &'static str, hi: &'static str) -> Self {
        Self { en, mr, hi }
    }

    fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Mr => self.mr,
            Locale::Hi => self.hi,
        }
    }

    /// The `locale` variant, or `source` when that variant is empty.
    fn text_or<'a>(&self, locale: Locale, source: &'a str) -> &'a str {
        let text = self.get(locale);
        if text.is_empty() { source } else { text }
    }
}

/// Translate a canonical English string.
///
/// Returns `source` itself when it is not in the table or when the
/// requested variant is empty.
///
/// ```rust
/// use kheti_core::i18n::{Locale, translate};
///
/// assert_eq!(translate("Land preparation", Locale::Mr), "जमीन तयार");
/// assert_eq!(translate("Land preparation", Locale::En), "Land preparation");
/// assert_eq!(translate("Unlisted text", Locale::Hi), "Unlisted text");
/// ```
pub fn translate(source: &str, locale: Locale) -> &str {
    match TABLE.get(source) {
        Some(row) => row.text_or(locale, source),
        None => source,
    }
}

/// Whether the table has a row for `source`.
pub fn is_known(source: &str) -> bool {
    TABLE.contains_key(source)
}

static TABLE: LazyLock<HashMap<&'static str, Translation>> =
    LazyLock::new(|| TRANSLATIONS.iter().map(|row| (row.en, *row)).collect());

const TRANSLATIONS: &[Translation] = &[
    // Stages
    Translation::new("Land preparation", "जमीन तयार", "भूमि तैयारी"),
    Translation::new("Sowing & germination", "पेरणी व अंकुरण", "बुवाई व अंकुरण"),
    Translation::new("Tillering/Vegetative", "वाढ/टिलरिंग", "वनस्पतिक/टिलरिंग"),
    Translation::new("Flowering", "फुलोरा", "फूल आना"),
    Translation::new("Grain filling", "दाणा भरणे", "दाना भरना"),
    Translation::new("Harvest", "कापणी", "कटाई"),
    Translation::new("Vegetative", "वाढ", "वनस्पतिक"),
    Translation::new("Flowering & pod formation", "फुलोरा व शेंगा", "फूल व फली विकास"),
    Translation::new("Pod filling", "शेंगा भरणे", "फली भरना"),
    Translation::new("Pod/seed filling", "शेंगा/दाणे भरणे", "फली/दाना भरना"),
    Translation::new("Pit preparation", "खड्डे तयार", "गड्ढा तैयारी"),
    Translation::new("Planting establishment", "लागवड स्थापन", "रोपण स्थापन"),
    Translation::new("Vegetative growth", "वनस्पती वाढ", "वनस्पतिक वृद्धि"),
    Translation::new("Flowering/fruit set", "फुलोरा/फलधारणा", "फूल/फल सेट"),
    Translation::new("Early harvest", "लवकर कापणी", "शीघ्र कटाई"),
    Translation::new("Nursery/land prep", "रोपवाटिका/जमीन", "नर्सरी/भूमि"),
    Translation::new("Transplant/sowing & takeoff", "लागवड/पेरणी", "रोपाई/बुवाई"),
    Translation::new("Flowering/fruiting", "फुलोरा/फलधारणा", "फूल/फलन"),
    // Task titles
    Translation::new("Field prep", "शेतीची तयारी", "खेत की तैयारी"),
    Translation::new("Basal fertilizer", "तळ खत", "आधार उर्वरक"),
    Translation::new("Sowing", "पेरणी", "बुवाई"),
    Translation::new("1st urea top dress", "पहिली यूरिया टॉप ड्रेस", "पहला यूरिया टॉप ड्रेस"),
    Translation::new("Weed control", "तण नियंत्रण", "खरपतवार नियंत्रण"),
    Translation::new("2nd urea top dress", "दुसरी यूरिया टॉप ड्रेस", "दूसरा यूरिया टॉप ड्रेस"),
    Translation::new("Pest & disease scout", "कीड व रोग पाहणी", "कीट/रोग निगरानी"),
    Translation::new("Pre-harvest check", "कापणीपूर्व तपास", "कटाई पूर्व जांच"),
    Translation::new("Harvest & drying", "कापणी व वाळवणी", "कटाई व सुखाना"),
    Translation::new("Weeding", "तण काढणी", "निराई"),
    Translation::new("Micronutrients", "सूक्ष्म पोषक", "सूक्ष्म पोषक"),
    Translation::new("Pest management", "किड नियंत्रण", "कीट प्रबंधन"),
    Translation::new("Irrigation stop", "सिंचन थांबवा", "सिंचाई बंद करें"),
    Translation::new("Thinning & weeding", "विरळणी व तण काढणी", "छंटाई व निराई"),
    Translation::new("Top dress N", "वर खत N", "टॉप ड्रेस N"),
    Translation::new("FYM & basal", "शेणखत व तळ खत", "FYM व आधार खाद"),
    Translation::new("Transplant", "लागवड", "रोपाई"),
    Translation::new("Training & pruning", "प्रशिक्षण व छाटणी", "ट्रेनिंग व प्रूनिंग"),
    Translation::new("Pre-harvest sanitation", "कापणीपूर्व स्वच्छता", "कटाई पूर्व स्वच्छता"),
    Translation::new("Transplant/Sow", "लागवड/पेरणी", "रोपाई/बुवाई"),
    Translation::new("Weeding & staking", "तण काढणी व आधार", "निराई व सहारा"),
    Translation::new("Pest & disease", "कीड व रोग", "कीट व रोग"),
    Translation::new("Harvest window begins", "कापणीची सुरुवात", "कटाई शुरू"),
    Translation::new("Irrigation (if dry)", "सिंचन (कोरडे असल्यास)", "सिंचाई (यदि सूखा)"),
    Translation::new("Irrigation", "सिंचन", "सिंचाई"),
    // Descriptions
    Translation::new(
        "Primary tillage, remove residues, level field",
        "प्राथमिक नांगरटी, अवशेष काढा, समतलीकरण करा",
        "प्राथमिक जुताई, अवशेष हटाएँ, खेत समतल करें",
    ),
    Translation::new(
        "Apply NPK 10:26:26 @ 50 kg/acre and FYM 1–2 tons/acre during final harrow",
        "अंतिम हर्रो दरम्यान NPK 10:26:26 @ 50 किग्रा/एकर व शेणखत 1–2 टन/एकर द्या",
        "अंतिम हैरो में NPK 10:26:26 @ 50 किग्रा/एकड़ और FYM 1–2 टन/एकड़ दें",
    ),
    Translation::new(
        "Sow with recommended spacing; treat seed with fungicide/insecticide as per label",
        "शिफारसीय अंतराने पेरणी; बियाण्यावर लेबलप्रमाणे औषध प्रक्रिया करा",
        "सिफारिशित दूरी पर बुवाई; लेबल अनुसार बीज उपचार करें",
    ),
    Translation::new(
        "Urea @ 30 kg/acre along rows after first irrigation or rain",
        "पहिल्या सिंचन/पावसानंतर ओळीमध्ये युरिया @ 30 किलो/एकर द्या",
        "पहली सिंचाई/बारिश के बाद कतारों में यूरिया @ 30 किग्रा/एकड़ दें",
    ),
    Translation::new(
        "Interculture/hoe; apply pre/post-emergence herbicide if needed",
        "आंतरमशागत/खुरपणी; आवश्यक असल्यास तणनाशके वापरा",
        "अंतरखेती/कुदाई; आवश्यकता पर प्री/पोस्ट हरबिसाइड दें",
    ),
    Translation::new(
        "Urea @ 20 kg/acre at late vegetative stage",
        "उशीरा वाढीच्या टप्प्यावर युरिया @ 20 किलो/एकर",
        "देर वनस्पतिक चरण पर यूरिया @ 20 किग्रा/एकड़",
    ),
    Translation::new(
        "Scout for stem borer/leaf blight; spray recommended pesticide only if ETL crossed",
        "काडी भेदक/पान करपा तपासा; ETL ओलांडल्यासच फवारणी",
        "तना छेदक/लीफ ब्लाइट की निगरानी; ETL पार होने पर ही स्प्रे",
    ),
    Translation::new(
        "Drain excess water, stop irrigation; check grain maturity",
        "जादा पाणी काढा, सिंचन थांबवा; दाण्याची परिपक्वता तपासा",
        "अतिरिक्त पानी निकालें, सिंचाई रोकें; दाने की परिपक्वता जाँचे",
    ),
    Translation::new(
        "Harvest at physiological maturity and dry grains to safe moisture",
        "शारीरिक परिपक्वतेला कापणी करा व धान्य सुरक्षित आर्द्रतेपर्यंत वाळवा",
        "फिजियोलॉजिकल परिपक्वता पर कटाई करें और अनाज को सुरक्षित नमी तक सुखाएँ",
    ),
    Translation::new(
        "DAP 18:46:0 @ 40 kg/acre; Rhizobium inoculation for seed",
        "DAP 18:46:0 @ 40 किग्रा/एकर; बियाण्यास रायझोबियम लसीकरण",
        "DAP 18:46:0 @ 40 किग्रा/एकड़; बीज हेतु राइजोबियम टीकाकरण",
    ),
    Translation::new(
        "Line sowing; seed treatment with Trichoderma/Thiram as per label",
        "ओळीत पेरणी; ट्रायकोडर्मा/थिरमने बीज प्रक्रिया",
        "लाइन बुवाई; ट्राइकोडर्मा/थिरम से बीज उपचार",
    ),
    Translation::new(
        "Interculture/hand weeding",
        "आंतरमशागत/हाताने तण काढणी",
        "अंतरखेती/हाथ से निराई",
    ),
    Translation::new(
        "Foliar spray 1% KNO3 or 0.5% ZnSO4 if deficiency observed",
        "कमतरता दिसल्यास 1% KNO3 किंवा 0.5% ZnSO4 फवारणी",
        "कमी दिखे तो 1% KNO3 या 0.5% ZnSO4 फोलियर स्प्रे",
    ),
    Translation::new(
        "Helicoverpa/scuttle pest monitoring; spray only if ETL",
        "हेलिकव्हर्पा/कीड निरीक्षण; ETL असल्यासच फवारणी",
        "हेलिकोवर्पा/कीट निगरानी; ETL होने पर ही स्प्रे",
    ),
    Translation::new(
        "Stop irrigation before harvest to ease drying",
        "कापणीपूर्वी सिंचन बंद करा",
        "कटाई से पहले सिंचाई बंद करें",
    ),
    Translation::new(
        "Harvest when pods turn brown and seeds harden",
        "शेंगा तपकिरी झाल्यावर व दाणे कडक झाल्यावर कापा",
        "फलियाँ भूरे होने व दाने सख्त होने पर कटाई करें",
    ),
    Translation::new(
        "NPK 12:32:16 @ 50 kg/acre + FYM 1 ton/acre",
        "NPK 12:32:16 @ 50 किग्रा/एकर + शेणखत 1 टन/एकर",
        "NPK 12:32:16 @ 50 किग्रा/एकड़ + FYM 1 टन/एकड़",
    ),
    Translation::new(
        "Line sowing, proper seed rate and spacing",
        "ओळीत पेरणी, शिफारस केलेले बीजदर व अंतर",
        "लाइन बुवाई, बीज दर व दूरी अनुशंसित",
    ),
    Translation::new(
        "Maintain plant stand, remove weeds",
        "वनस्पती घनता राखा, तण काढा",
        "पौध संख्या रखें, खरपतवार हटाएँ",
    ),
    Translation::new(
        "Urea @ 20 kg/acre before flowering",
        "फुलोऱ्यापूर्वी युरिया @ 20 किलो/एकर",
        "फूल से पहले यूरिया @ 20 किग्रा/एकड़",
    ),
    Translation::new(
        "Aphids/leaf miner monitoring; spray if ETL",
        "अॅफिड्स/लीफ माइनर निरीक्षण; ETL असल्यास फवारणी",
        "एफिड/लीफ माइनर निगरानी; ETL पर स्प्रे",
    ),
    Translation::new(
        "Stop irrigation before maturity",
        "परिपक्वतेपूर्वी सिंचन थांबवा",
        "परिपक्वता से पहले सिंचाई रोकें",
    ),
    Translation::new(
        "Harvest when seeds are firm and pods dry",
        "बिया घट्ट व शेंगा सुकल्यावर कापा",
        "बीज सख्त हों व फलियाँ सूखें तो कटाई करें",
    ),
    Translation::new(
        "Apply 10–20 kg FYM/plant with SSP as per crop",
        "प्रति रोप 10–20 कि.ग्रा. शेणखत + SSP आवश्यकतेनुसार",
        "प्रति पौधा 10–20 किग्रा FYM और SSP फसल अनुसार",
    ),
    Translation::new(
        "Plant healthy saplings; stake if required",
        "तंदुरुस्त रोपे लावा; आवश्यक असल्यास आधार द्या",
        "स्वस्थ पौधे लगाएँ; जरूरत हो तो सहारा दें",
    ),
    Translation::new(
        "Regular irrigation to establish plants",
        "प्रस्थापनेसाठी नियमित सिंचन",
        "स्थापना हेतु नियमित सिंचाई",
    ),
    Translation::new(
        "Train/prune as per crop habit",
        "पीक पद्धतीनुसार प्रशिक्षण/छाटणी",
        "फसल के अनुरूप ट्रेनिंग/प्रूनिंग",
    ),
    Translation::new(
        "Monitor fruit fly, sucking pests; spray if ETL",
        "फळमाशी/शोषक किड निरीक्षण; ETL असल्यास फवारणी",
        "फ्रूट फ्लाई/सकिंग पेस्ट निगरानी; ETL पर स्प्रे",
    ),
    Translation::new(
        "Remove infected fruits, maintain hygiene",
        "संक्रमित फळे काढा, स्वच्छता ठेवा",
        "संक्रमित फल हटाएँ, स्वच्छता रखें",
    ),
    Translation::new(
        "NPK 10:26:26 @ 40 kg/acre + FYM 1–2 tons/acre",
        "NPK 10:26:26 @ 40 किग्रा/एकर + शेणखत 1–2 टन/एकर",
        "NPK 10:26:26 @ 40 किग्रा/एकड़ + FYM 1–2 टन/एकड़",
    ),
    Translation::new(
        "Transplant healthy seedlings or sow seeds",
        "निरोगी रोपांची लागवड करा किंवा बियाणे पेरा",
        "स्वस्थ पौध की रोपाई करें या बीज बोएँ",
    ),
    Translation::new(
        "Weed control and provide staking for creepers",
        "तण नियंत्रण व वेलींना आधार द्या",
        "खरपतवार नियंत्रण व बेलों को सहारा दें",
    ),
    Translation::new(
        "Urea @ 20 kg/acre",
        "युरिया @ 20 किलो/एकर",
        "यूरिया @ 20 किग्रा/एकड़",
    ),
    Translation::new(
        "Scout for fruit borer/mildew; spray if ETL",
        "फळ पोखरणारी अळी/भुरी तपासा; ETL असल्यास फवारणी",
        "फल छेदक/फफूंदी की निगरानी; ETL पर स्प्रे",
    ),
    Translation::new(
        "1% KNO3 foliar spray for fruiting",
        "फळधारणेसाठी 1% KNO3 फवारणी",
        "फलन हेतु 1% KNO3 स्प्रे",
    ),
    Translation::new(
        "Start periodic harvests",
        "नियमित तोडणी सुरू करा",
        "नियमित तुड़ाई शुरू करें",
    ),
    // Irrigation reminders
    Translation::new(
        "Ensure adequate moisture during vegetative stage",
        "वाढीच्या अवस्थेत पुरेसा ओलावा ठेवा",
        "वनस्पतिक अवस्था में पर्याप्त नमी बनाए रखें",
    ),
    Translation::new(
        "Provide life-saving irrigation at flowering if rainfall deficit",
        "पावसाची तूट असल्यास फुलोऱ्यावेळी संरक्षित सिंचन द्या",
        "वर्षा की कमी हो तो फूल आने पर जीवनरक्षक सिंचाई दें",
    ),
    Translation::new(
        "Irrigate based on soil moisture (interval ~3 days)",
        "जमिनीतील ओलाव्यानुसार सिंचन करा (अंतर ~3 दिवस)",
        "मिट्टी की नमी के अनुसार सिंचाई करें (अंतराल ~3 दिन)",
    ),
    Translation::new(
        "Irrigate based on soil moisture (interval ~5 days)",
        "जमिनीतील ओलाव्यानुसार सिंचन करा (अंतर ~5 दिवस)",
        "मिट्टी की नमी के अनुसार सिंचाई करें (अंतराल ~5 दिन)",
    ),
    Translation::new(
        "Irrigate based on soil moisture (interval ~10 days)",
        "जमिनीतील ओलाव्यानुसार सिंचन करा (अंतर ~10 दिवस)",
        "मिट्टी की नमी के अनुसार सिंचाई करें (अंतराल ~10 दिन)",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_translate() {
        assert_eq!(translate("Land preparation", Locale::Mr), "जमीन तयार");
        assert_eq!(translate("Land preparation", Locale::Hi), "भूमि तैयारी");
        assert_eq!(translate("Harvest", Locale::Mr), "कापणी");
    }

    #[test]
    fn test_english_returns_canonical_text() {
        for row in TRANSLATIONS {
            assert_eq!(translate(row.en, Locale::En), row.en);
        }
    }

    #[test]
    fn test_unknown_text_falls_back_for_every_locale() {
        for locale in Locale::ALL {
            assert_eq!(translate("Mulch the beds", locale), "Mulch the beds");
            assert_eq!(translate("", locale), "");
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(translate("land preparation", Locale::Mr), "land preparation");
        assert_eq!(translate("Land preparation ", Locale::Mr), "Land preparation ");
    }

    #[test]
    fn test_empty_variant_falls_back_to_source() {
        let row = Translation::new("Prune the suckers", "", "चूसक शाखाएँ छाँटें");
        assert_eq!(row.text_or(Locale::Mr, "Prune the suckers"), "Prune the suckers");
        assert_eq!(row.text_or(Locale::Hi, "Prune the suckers"), "चूसक शाखाएँ छाँटें");
        assert_eq!(row.text_or(Locale::En, "Prune the suckers"), "Prune the suckers");
    }

    #[test]
    fn test_table_rows_are_complete() {
        for row in TRANSLATIONS {
            assert!(!row.mr.is_empty(), "missing Marathi for {}", row.en);
            assert!(!row.hi.is_empty(), "missing Hindi for {}", row.en);
        }
        assert_eq!(TABLE.len(), TRANSLATIONS.len(), "duplicate table keys");
    }

    #[test]
    fn test_locale_parse_and_tags() {
        assert_eq!("MR".parse::<Locale>(), Ok(Locale::Mr));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::Hi.display_tag(), "hi-IN");
        assert_eq!(serde_json::to_string(&Locale::Mr).unwrap(), "\"mr\"");
    }
}
