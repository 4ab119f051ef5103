//! Complaint sentence templates and slot filling.
//!
//! Each (category, language) pair has a handful of hand-written sentences
//! with `{{ slot }}` placeholders, rendered through minijinja. Slots are
//! filled independently from small fixed vocabularies, so the same template
//! yields many distinct complaints.

use std::sync::OnceLock;

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior};
use nyaya_core::Language;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::SynthError;
use crate::category::ComplaintType;

pub const LOCATIONS: &[&str] = &[
    "home",
    "office",
    "market",
    "street",
    "park",
    "shop",
    "restaurant",
    "bus stop",
];
pub const ITEMS: &[&str] = &[
    "mobile phone",
    "wallet",
    "laptop",
    "jewelry",
    "bike",
    "car",
    "money",
    "documents",
];
pub const PERSONS: &[&str] = &[
    "unknown person",
    "neighbor",
    "colleague",
    "stranger",
    "acquaintance",
];
pub const WEAPONS: &[&str] = &["stick", "knife", "stone", "fist", "rod"];

/// Inclusive bounds of the rupee amount slot.
pub const AMOUNT_RANGE: (u32, u32) = (1000, 50_000);

/// Sentence templates for a category in a language. Empty when none exist.
pub fn templates(kind: ComplaintType, language: Language) -> &'static [&'static str] {
    use ComplaintType as C;
    use Language as L;

    match (kind, language) {
        (C::Theft, L::En) => &[
            "My {{ item }} was stolen from {{ location }} on {{ date }}. The thief broke into my {{ place }} and took my belongings.",
            "Someone stole my {{ item }} from {{ location }}. I noticed it missing when I returned home.",
            "Theft occurred at {{ location }}. My {{ item }} worth Rs. {{ amount }} was taken without permission.",
        ],
        (C::Theft, L::Hi) => &[
            "मेरा {{ item }} {{ location }} से {{ date }} को चोरी हो गया। चोर ने मेरे {{ place }} में घुसकर सामान चुराया।",
            "किसी ने मेरा {{ item }} {{ location }} से चुराया है। जब मैं घर वापस आया तो पता चला।",
        ],
        (C::Theft, L::Mr) => &[
            "माझा {{ item }} {{ location }} मधून {{ date }} रोजी चोरी झाला. चोराने माझ्या {{ place }} मध्ये घुसून सामान चोरले.",
            "कोणीतरी माझा {{ item }} {{ location }} मधून चोरला आहे. मी घरी परतल्यावर लक्षात आले.",
            "{{ location }} येथे चोरी झाली. माझा {{ item }} किंमत रु. {{ amount }} परवानगीशिवाय नेला गेला.",
        ],
        (C::Assault, L::En) => &[
            "I was physically assaulted by {{ person }} at {{ location }} on {{ date }}. They hit me with {{ weapon }}.",
            "Someone attacked me near {{ location }}. I sustained injuries and need medical attention.",
            "Physical violence occurred when {{ person }} assaulted me during an argument.",
        ],
        (C::Assault, L::Hi) => &[
            "{{ person }} ने मुझे {{ location }} पर {{ date }} को मारा। उन्होंने मुझे {{ weapon }} से हमला किया।",
            "किसी ने {{ location }} के पास मुझ पर हमला किया। मुझे चोटें आई हैं।",
        ],
        (C::Assault, L::Mr) => &[
            "{{ person }} ने माझ्यावर {{ date }} रोजी {{ location }} येथे हल्ला केला. त्याने {{ weapon }} ने मारले.",
            "{{ location }} जवळ कोणीतरी माझ्यावर हल्ला केला. मला इजा झाली आहे.",
            "वादाच्या वेळी {{ person }} ने माझ्यावर शारीरिक हल्ला केला.",
        ],
        (C::Fraud, L::En) => &[
            "I was cheated by {{ person }} who took Rs. {{ amount }} promising {{ service }} but never delivered.",
            "Online fraud occurred when someone used my card details to make unauthorized purchases.",
            "Investment fraud - {{ person }} promised high returns but disappeared with my money.",
        ],
        (C::Fraud, L::Hi) => &[
            "{{ person }} ने मुझे {{ amount }} रुपये लेकर {{ service }} का वादा किया लेकिन धोखा दिया।",
            "ऑनलाइन धोखाधड़ी हुई जब किसी ने मेरे कार्ड की जानकारी का गलत इस्तेमाल किया।",
        ],
        (C::Fraud, L::Mr) => &[
            "{{ person }} ने मला {{ amount }} रुपये घेऊन {{ service }} चे आश्वासन दिले पण फसवणूक केली.",
            "ऑनलाइन फसवणूक झाली जेव्हा कोणीतरी माझ्या कार्डाची माहिती चुकीच्या पद्धतीने वापरली.",
            "गुंतवणूक फसवणूक - {{ person }} ने जास्त परतावा देण्याचे सांगितले पण पैसे घेऊन गायब झाला.",
        ],
        (C::Murder, L::En) => &[
            "{{ person }} killed my relative with {{ weapon }} at {{ location }} on {{ date }}.",
            "A murder occurred at {{ location }}. {{ person }} attacked my family member with {{ weapon }}.",
        ],
        (C::Murder, L::Hi) => &[
            "{{ person }} ने मेरे रिश्तेदार को {{ date }} को {{ location }} पर {{ weapon }} से मार डाला।",
            "{{ location }} पर हत्या हुई। {{ person }} ने मेरे परिवार के सदस्य पर {{ weapon }} से हमला किया।",
        ],
        (C::Murder, L::Mr) => &[
            "{{ person }} ने माझ्या नातेवाईकाला {{ date }} रोजी {{ location }} येथे {{ weapon }} ने ठार मारले.",
            "{{ location }} येथे खून झाला. {{ person }} ने माझ्या कुटुंबाच्या सदस्यावर {{ weapon }} ने हल्ला केला.",
        ],
        (C::Kidnapping, L::En) => &[
            "My child was kidnapped by {{ person }} from {{ location }} on {{ date }}.",
            "{{ person }} abducted my relative from {{ location }} yesterday.",
        ],
        (C::Kidnapping, L::Hi) => &[
            "मेरा बच्चा {{ date }} को {{ location }} से {{ person }} द्वारा अगवा कर लिया गया।",
            "{{ person }} ने {{ location }} से मेरे रिश्तेदार का अपहरण कर लिया।",
        ],
        (C::Kidnapping, L::Mr) => &[
            "माझे मूल {{ date }} रोजी {{ location }} मधून {{ person }} ने पळवून नेले.",
            "{{ person }} ने {{ location }} मधून माझ्या नातेवाईकाचे अपहरण केले.",
        ],
        (C::Rape, L::En) => &[
            "{{ person }} forcibly assaulted me at {{ location }} on {{ date }}.",
            "A sexual offense occurred when {{ person }} attacked me at {{ location }}.",
        ],
        (C::Rape, L::Hi) => &[
            "{{ person }} ने {{ date }} को {{ location }} पर मेरे साथ जबरदस्ती की।",
            "{{ location }} पर {{ person }} ने मेरे साथ यौन हमला किया।",
        ],
        (C::Rape, L::Mr) => &[
            "{{ person }} ने {{ date }} रोजी {{ location }} येथे माझ्यावर जबरदस्ती केली.",
            "{{ location }} येथे {{ person }} ने माझ्यावर लैंगिक हल्ला केला.",
        ],
        (C::Dowry, L::En) => &[
            "My in-laws are demanding Rs. {{ amount }} as dowry and harassing me.",
            "Dowry harassment is happening - my husband’s family is forcing me for {{ amount }}.",
        ],
        (C::Dowry, L::Hi) => &[
            "मेरे ससुराल वाले {{ amount }} रुपये दहेज की मांग कर रहे हैं और मुझे परेशान कर रहे हैं।",
            "दहेज उत्पीड़न हो रहा है - मेरे पति का परिवार मुझसे {{ amount }} की मांग कर रहा है।",
        ],
        (C::Dowry, L::Mr) => &[
            "माझे सासरचे लोक {{ amount }} रुपये हुंडा मागत आहेत आणि मला त्रास देत आहेत.",
            "हुंडा छळ होत आहे - माझ्या नवऱ्याचे कुटुंब माझ्याकडून {{ amount }} ची मागणी करत आहे.",
        ],
        (C::Trespass, L::En) => &[
            "{{ person }} entered my {{ place }} without permission and caused damage.",
            "Unauthorized entry by {{ person }} at my {{ place }}, they damaged property.",
        ],
        (C::Trespass, L::Hi) => &[
            "{{ person }} बिना अनुमति के मेरे {{ place }} में घुस आया और नुकसान किया।",
            "मेरे {{ place }} में {{ person }} ने अवैध प्रवेश कर संपत्ति को नुकसान पहुंचाया।",
        ],
        (C::Trespass, L::Mr) => &[
            "{{ person }} माझ्या {{ place }} मध्ये परवानगीशिवाय शिरला आणि नुकसान केले.",
            "{{ person }} ने माझ्या {{ place }} मध्ये बेकायदेशीर प्रवेश करून मालमत्तेचे नुकसान केले.",
        ],
        (C::Corruption, L::En) => &[
            "{{ person }} demanded Rs. {{ amount }} bribe for providing {{ service }}.",
            "Corruption case: {{ person }} asked me to pay bribe of Rs. {{ amount }}.",
        ],
        (C::Corruption, L::Hi) => &[
            "{{ person }} ने {{ service }} देने के लिए {{ amount }} रुपये रिश्वत की मांग की।",
            "भ्रष्टाचार का मामला: {{ person }} ने मुझसे {{ amount }} रुपये रिश्वत मांगी।",
        ],
        (C::Corruption, L::Mr) => &[
            "{{ person }} ने {{ service }} साठी {{ amount }} रुपये लाच मागितली.",
            "भ्रष्टाचाराचा प्रकार: {{ person }} ने माझ्याकडून {{ amount }} रुपये लाच मागितली.",
        ],
        (C::Other, L::En) => &[
            "A complaint regarding {{ title }} occurred at {{ location }}.",
            "Incident related to {{ title }} happened at {{ location }}.",
        ],
        (C::Other, L::Hi) => &[
            "{{ title }} से संबंधित शिकायत {{ location }} पर हुई।",
            "{{ location }} पर {{ title }} से जुड़ी घटना हुई।",
        ],
        (C::Other, L::Mr) => &[
            "{{ title }} संदर्भात तक्रार {{ location }} येथे झाली.",
            "{{ location }} येथे {{ title }} संबंधी घटना घडली.",
        ],
    }
}

/// Values substituted into a template's `{{ slot }}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slots {
    pub item: &'static str,
    pub location: &'static str,
    pub date: String,
    pub place: &'static str,
    pub amount: u32,
    pub person: &'static str,
    pub weapon: &'static str,
    pub service: &'static str,
    pub title: String,
}

impl Slots {
    /// Draw every slot independently. `date` is the complaint date as given.
    pub fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        language: Language,
        title: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            item: pick(rng, ITEMS),
            location: pick(rng, LOCATIONS),
            date: date.format("%Y-%m-%d").to_string(),
            place: place_word(language),
            amount: rng.gen_range(AMOUNT_RANGE.0..=AMOUNT_RANGE.1),
            person: pick(rng, PERSONS),
            weapon: pick(rng, WEAPONS),
            service: service_word(language),
            title: title.to_string(),
        }
    }
}

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        // A misspelt slot must fail loudly instead of rendering as blank.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Render a template against drawn slot values.
pub fn render(template: &str, slots: &Slots) -> Result<String, minijinja::Error> {
    environment().render_str(template, slots)
}

/// Sentence used when a category has no template in the requested language.
pub fn fallback_text<R: Rng + ?Sized>(rng: &mut R, title: &str) -> String {
    format!(
        "Complaint related to {} occurred at {}.",
        title.to_lowercase(),
        pick(rng, LOCATIONS)
    )
}

/// Swap common substrings to imitate hurried typing.
pub fn inject_typos(text: &str) -> String {
    text.replace("the", "teh").replace("and", "nd")
}

/// Generate one complaint for a section title in the given language.
///
/// With probability `typo_rate` the result passes through [`inject_typos`].
pub fn generate_complaint_text<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ComplaintType,
    title: &str,
    language: Language,
    date: NaiveDate,
    typo_rate: f64,
) -> Result<String, SynthError> {
    let Some(template) = templates(kind, language).choose(rng) else {
        return Ok(fallback_text(rng, title));
    };

    let slots = Slots::draw(rng, language, title, date);
    let complaint = render(template, &slots)?;

    Ok(if rng.gen_bool(typo_rate) {
        inject_typos(&complaint)
    } else {
        complaint
    })
}

fn place_word(language: Language) -> &'static str {
    match language {
        Language::En => "house",
        Language::Hi | Language::Mr => "घर",
    }
}

fn service_word(language: Language) -> &'static str {
    match language {
        Language::En => "investment advice",
        Language::Hi => "निवेश सलाह",
        Language::Mr => "गुंतवणूक सल्ला",
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}
