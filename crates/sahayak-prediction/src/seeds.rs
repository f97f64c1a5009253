//! Bundled knowledge seeds: short classroom summaries per topic.

use chrono::{DateTime, Utc};

use sahayak_core::models::{Language, SeedRecord};

/// A bundled seed. Every entry carries all three languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeSeed {
    /// Lowercase topic key.
    pub topic: &'static str,
    pub hi: &'static str,
    pub en: &'static str,
    pub kn: &'static str,
}

impl KnowledgeSeed {
    /// Text in `language`; falls back to English if that text is empty.
    pub fn text(&self, language: Language) -> &'static str {
        let text = match language {
            Language::Hi => self.hi,
            Language::En => self.en,
            Language::Kn => self.kn,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }

    /// Persistable record for the local store, stamped with `fetched_at`.
    pub fn to_record(&self, topic: &str, fetched_at: DateTime<Utc>) -> SeedRecord {
        let mut record = SeedRecord::new(topic, fetched_at);
        for language in Language::ALL {
            record.set_text(language, self.text(language));
        }
        record
    }
}

const SEEDS: &[KnowledgeSeed] = &[
    KnowledgeSeed {
        topic: "fractions",
        hi: "भिन्न: पूरे का भाग। पिज़्ज़ा के 8 में से 3 टुकड़े = 3/8। ऊपर अंश, नीचे हर। समान हर वाली भिन्नों को जोड़ें। असमान के लिए पहले समान करें।",
        en: "Fractions: Parts of whole. 3 slices of 8-slice pizza = 3/8. Top is numerator, bottom is denominator. Add same denominators directly. For different, find LCM first.",
        kn: "ಭಿನ್ನರಾಶಿ: ಪೂರ್ಣದ ಭಾಗ. 8 ಹೋಳುಗಳ ಪಿಜ್ಜಾದ 3 = 3/8. ಮೇಲೆ ಅಂಶ, ಕೆಳಗೆ ಛೇದ. ಸಮಾನ ಛೇದಗಳನ್ನು ನೇರವಾಗಿ ಕೂಡಿಸಿ.",
    },
    KnowledgeSeed {
        topic: "photosynthesis",
        hi: "प्रकाश संश्लेषण: पौधे सूर्य की रोशनी से भोजन बनाते हैं। CO₂ + H₂O + सूर्य = ग्लूकोज + O₂। हरे पत्ते में क्लोरोफिल। दिन में होता है।",
        en: "Photosynthesis: Plants make food from sunlight. CO₂ + H₂O + Sun = Glucose + O₂. Chlorophyll in green leaves. Happens during daytime only.",
        kn: "ದ್ಯುತಿಸಂಶ್ಲೇಷಣೆ: ಸಸ್ಯಗಳು ಸೂರ್ಯನ ಬೆಳಕಿನಿಂದ ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ. CO₂ + H₂O + ಸೂರ್ಯ = ಗ್ಲೂಕೋಸ್ + O₂.",
    },
    KnowledgeSeed {
        topic: "decimals",
        hi: "दशमलव: भिन्न का दूसरा रूप। 0.5 = 1/2, 0.25 = 1/4। दशमलव बिंदु के बाद दसवाँ, सौवाँ। जोड़ते समय बिंदु नीचे बिंदु रखें।",
        en: "Decimals: Another form of fractions. 0.5 = 1/2, 0.25 = 1/4. After decimal: tenths, hundredths. When adding, align decimal points vertically.",
        kn: "ದಶಮಾಂಶ: ಭಿನ್ನರಾಶಿಯ ಇನ್ನೊಂದು ರೂಪ. 0.5 = 1/2, 0.25 = 1/4. ದಶಮಾಂಶ ಚುಕ್ಕೆ ನಂತರ ದಶಾಂಶ, ಶತಾಂಶ.",
    },
    KnowledgeSeed {
        topic: "integers",
        hi: "पूर्णांक: धनात्मक और ऋणात्मक संख्याएं। ...−3, −2, −1, 0, 1, 2, 3... थर्मामीटर, ऊंचाई, बैंक बैलेंस में उपयोग। शून्य न धन न ऋण।",
        en: "Integers: Positive and negative numbers. ...−3, −2, −1, 0, 1, 2, 3... Used in thermometer, altitude, bank balance. Zero is neither positive nor negative.",
        kn: "ಪೂರ್ಣಾಂಕಗಳು: ಧನಾತ್ಮಕ ಮತ್ತು ಋಣಾತ್ಮಕ ಸಂಖ್ಯೆಗಳು. ಥರ್ಮಾಮೀಟರ್, ಎತ್ತರ, ಬ್ಯಾಂಕ್ ಬ್ಯಾಲೆನ್ಸ್‌ನಲ್ಲಿ ಬಳಕೆ.",
    },
    KnowledgeSeed {
        topic: "body movements",
        hi: "शरीर की गति: हड्डियाँ + जोड़ + मांसपेशियाँ। 206 हड्डियाँ शरीर में। जोड़ों के प्रकार: कब्जा, गेंद-सॉकेट, धुरी। कंकाल शरीर को आकार देता है।",
        en: "Body Movements: Bones + Joints + Muscles. 206 bones in body. Joint types: hinge, ball-socket, pivot. Skeleton gives body shape and protects organs.",
        kn: "ದೇಹದ ಚಲನೆ: ಮೂಳೆಗಳು + ಕೀಲುಗಳು + ಸ್ನಾಯುಗಳು. ದೇಹದಲ್ಲಿ 206 ಮೂಳೆಗಳು. ಅಸ್ಥಿಪಂಜರ ದೇಹಕ್ಕೆ ಆಕಾರ ನೀಡುತ್ತದೆ.",
    },
    KnowledgeSeed {
        topic: "separation of substances",
        hi: "पदार्थों का पृथक्करण: मिश्रण अलग करने की विधियाँ। छानना (फ़िल्टर), वाष्पीकरण, अवसादन। चाय छानना, नमक बनाना, पानी साफ़ करना।",
        en: "Separation: Methods to separate mixtures. Filtration, evaporation, sedimentation, decantation. Examples: making tea, salt from seawater, cleaning water.",
        kn: "ಪ್ರತ್ಯೇಕಿಸುವಿಕೆ: ಮಿಶ್ರಣಗಳನ್ನು ಬೇರ್ಪಡಿಸುವ ವಿಧಾನಗಳು. ಶೋಧನೆ, ಆವಿಯಾಗುವಿಕೆ, ಅವಕ್ಷೇಪಣ.",
    },
    KnowledgeSeed {
        topic: "algebra",
        hi: "बीजगणित: अक्षरों से संख्याएं। x, y चर हैं। 2x + 3 = व्यंजक। x = 5 तो 2(5) + 3 = 13। समीकरण हल करना = x का मान निकालना।",
        en: "Algebra: Letters represent numbers. x, y are variables. 2x + 3 is expression. If x = 5, then 2(5) + 3 = 13. Solving equation = finding value of x.",
        kn: "ಬೀಜಗಣಿತ: ಅಕ್ಷರಗಳು ಸಂಖ್ಯೆಗಳನ್ನು ಪ್ರತಿನಿಧಿಸುತ್ತವೆ. x, y ಚರಾಂಶಗಳು. 2x + 3 ವ್ಯಕ್ತಿ. x = 5 ಆದರೆ 2(5) + 3 = 13.",
    },
    KnowledgeSeed {
        topic: "ratio proportion",
        hi: "अनुपात: दो संख्याओं की तुलना। 2:3 या 2/3। समानुपात: दो समान अनुपात। 2:3 = 4:6। एकिक विधि: एक का मान निकालो, फिर गुणा करो।",
        en: "Ratio: Comparing two numbers. 2:3 or 2/3. Proportion: Two equal ratios. 2:3 = 4:6. Unitary method: Find value of one unit, then multiply.",
        kn: "ಅನುಪಾತ: ಎರಡು ಸಂಖ್ಯೆಗಳ ಹೋಲಿಕೆ. 2:3 ಅಥವಾ 2/3. ಸಮಾನುಪಾತ: ಎರಡು ಸಮಾನ ಅನುಪಾತಗಳು.",
    },
];

/// Exact, case-insensitive lookup by topic.
pub fn lookup(topic: &str) -> Option<&'static KnowledgeSeed> {
    let key = topic.trim().to_lowercase();
    SEEDS.iter().find(|s| s.topic == key)
}

/// Every bundled seed.
pub fn all() -> &'static [KnowledgeSeed] {
    SEEDS
}
