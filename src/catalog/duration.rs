/// A keyword rule: every `all_of` needle present and, when `any_of` is
/// non-empty, at least one of those too.
#[derive(Debug)]
pub struct DurationRule {
    pub all_of: &'static [&'static str],
    pub any_of: &'static [&'static str],
    pub minutes: u32,
}

impl DurationRule {
    fn matches(&self, lower: &str) -> bool {
        self.all_of.iter().all(|k| lower.contains(k))
            && (self.any_of.is_empty() || self.any_of.iter().any(|k| lower.contains(k)))
    }
}

const fn any(any_of: &'static [&'static str], minutes: u32) -> DurationRule {
    DurationRule {
        all_of: &[],
        any_of,
        minutes,
    }
}

pub const DEFAULT_MINUTES: u32 = 60;

/// Evaluated top to bottom, first match wins. Titles routinely hit several
/// rules ("Brow Color", "Balayage and Trim"), so order is part of the contract.
pub const DURATION_RULES: &[DurationRule] = &[
    any(&["peach fuzz", "nostrils", "chin", "brow", "lash", "toe"], 15),
    any(&["bikini", "half", "underarm", "stomach", "back", "buttocks"], 30),
    any(&["manicure", "pedicure", "polish", "gel", "nail"], 60),
    any(&["massage"], 60),
    DurationRule {
        all_of: &["makeup"],
        any_of: &["wedding", "bridal"],
        minutes: 120,
    },
    any(&["makeup"], 60),
    any(&["facial", "treatment"], 75),
    any(&["extensions"], 120),
    any(&["blowout", "trim", "haircut", "styling"], 45),
    any(&["color", "highlight", "balayage", "bleach"], 120),
];

pub fn estimate_duration(title: &str) -> u32 {
    let lower = title.to_lowercase();
    DURATION_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map_or(DEFAULT_MINUTES, |rule| rule.minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brow_is_short() {
        assert_eq!(estimate_duration("Eyebrow Tint"), 15);
        assert_eq!(estimate_duration("Brow Color"), 15);
    }

    #[test]
    fn bridal_makeup_beats_plain_makeup() {
        assert_eq!(estimate_duration("Bridal Makeup Trial"), 120);
        assert_eq!(estimate_duration("Wedding Makeup"), 120);
        assert_eq!(estimate_duration("Evening Makeup"), 60);
    }

    #[test]
    fn styling_rule_precedes_color_rule() {
        assert_eq!(estimate_duration("Balayage and Trim"), 45);
        assert_eq!(estimate_duration("Balayage"), 120);
    }

    #[test]
    fn substring_matches_are_intentional() {
        // "toe" inside "tiptoe" still lands on the 15 minute rule
        assert_eq!(estimate_duration("Tiptoe Massage"), 15);
        assert_eq!(estimate_duration("Waxing - Back"), 30);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(estimate_duration("GEL MANICURE"), 60);
        assert_eq!(estimate_duration("Hydrating FACIAL"), 75);
    }

    #[test]
    fn remaining_rules() {
        assert_eq!(estimate_duration("Hot Stone Massage"), 60);
        assert_eq!(estimate_duration("Hair Extensions - Keratin"), 120);
        assert_eq!(estimate_duration("Men's Haircut"), 45);
        assert_eq!(estimate_duration("Full Highlights"), 120);
    }

    #[test]
    fn unmatched_falls_to_default() {
        assert_eq!(estimate_duration("Waxing - Epilation Jambes"), DEFAULT_MINUTES);
        assert_eq!(estimate_duration(""), DEFAULT_MINUTES);
    }

    #[test]
    fn every_rule_is_reachable() {
        // each rule's first needle, alone, resolves to that rule's minutes
        for (i, rule) in DURATION_RULES.iter().enumerate() {
            let needle = rule.all_of.first().or(rule.any_of.first()).copied().unwrap_or("");
            let title = if rule.all_of.is_empty() {
                needle.to_string()
            } else {
                format!("{} {}", needle, rule.any_of[0])
            };
            assert_eq!(estimate_duration(&title), rule.minutes, "rule {} ({})", i, title);
        }
    }
}
