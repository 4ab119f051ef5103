//! Coarse complaint categories derived from section titles.
//!
//! Titles are matched against an ordered rule list; the first category with
//! a keyword occurring in the lower-cased title wins. "Theft by servant
//! causing hurt" is therefore `theft`, not `assault`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintType {
    Theft,
    Assault,
    Fraud,
    Murder,
    Kidnapping,
    Rape,
    Dowry,
    Trespass,
    Corruption,
    Other,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 10] = [
        Self::Theft,
        Self::Assault,
        Self::Fraud,
        Self::Murder,
        Self::Kidnapping,
        Self::Rape,
        Self::Dowry,
        Self::Trespass,
        Self::Corruption,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theft => "theft",
            Self::Assault => "assault",
            Self::Fraud => "fraud",
            Self::Murder => "murder",
            Self::Kidnapping => "kidnapping",
            Self::Rape => "rape",
            Self::Dowry => "dowry",
            Self::Trespass => "trespass",
            Self::Corruption => "corruption",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority-ordered title keyword rules. Order is significant.
pub const RULES: &[(ComplaintType, &[&str])] = &[
    (ComplaintType::Theft, &["theft", "stealing"]),
    (
        ComplaintType::Assault,
        &["assault", "hurt", "violence", "grievous"],
    ),
    (ComplaintType::Fraud, &["cheating", "fraud"]),
    (ComplaintType::Murder, &["murder", "homicide", "kill"]),
    (ComplaintType::Kidnapping, &["kidnap", "abduct"]),
    (ComplaintType::Rape, &["rape", "sexual", "outraging"]),
    (ComplaintType::Dowry, &["dowry", "cruelty"]),
    (ComplaintType::Trespass, &["trespass", "housebreaking"]),
    (ComplaintType::Corruption, &["bribery", "corruption"]),
];

/// Map a section title to its complaint category. Never fails.
pub fn classify_title(title: &str) -> ComplaintType {
    let title = title.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(*k)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ComplaintType::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theft_of_movable_property() {
        assert_eq!(classify_title("Theft of movable property"), ComplaintType::Theft);
    }

    #[test]
    fn each_rule_reachable() {
        let cases = [
            ("Voluntarily causing grievous hurt", ComplaintType::Assault),
            ("Cheating and dishonestly inducing delivery", ComplaintType::Fraud),
            ("Culpable homicide not amounting to murder", ComplaintType::Murder),
            ("Kidnapping from lawful guardianship", ComplaintType::Kidnapping),
            ("Assault on woman with intent to outrage modesty", ComplaintType::Assault),
            ("Sexual harassment", ComplaintType::Rape),
            ("Dowry death", ComplaintType::Dowry),
            ("House-trespass", ComplaintType::Trespass),
            ("Bribery", ComplaintType::Corruption),
            ("Defamation", ComplaintType::Other),
        ];
        for (title, expected) in cases {
            assert_eq!(classify_title(title), expected, "title {title:?}");
        }
    }

    #[test]
    fn earlier_rule_wins() {
        // Contains both "theft" and "hurt".
        assert_eq!(
            classify_title("Theft after preparation made for causing death, hurt or restraint"),
            ComplaintType::Theft
        );
        // The murder rule is checked before the kidnapping rule.
        assert_eq!(
            classify_title("Kidnapping or abducting in order to murder"),
            ComplaintType::Murder
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify_title("ROBBERY WITH THEFT"), ComplaintType::Theft);
    }

    #[test]
    fn empty_title_is_other() {
        assert_eq!(classify_title(""), ComplaintType::Other);
    }

    #[test]
    fn deterministic() {
        let title = "Punishment for cheating by personation";
        let first = classify_title(title);
        for _ in 0..10 {
            assert_eq!(classify_title(title), first);
        }
    }

    #[test]
    fn result_in_closed_set() {
        for title in ["", "x", "Criminal intimidation", "Mischief by fire", "Extortion"] {
            assert!(ComplaintType::ALL.contains(&classify_title(title)));
        }
    }
}
