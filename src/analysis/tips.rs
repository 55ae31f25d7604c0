//! Improvement tip generation

use crate::config::TipRule;

/// Maps weakness phrases to canned advice through an ordered trigger table.
/// Triggers match case-insensitively as substrings of the weakness string,
/// never against the resume text itself.
pub struct TipGenerator {
    rules: Vec<TipRule>,
}

impl TipGenerator {
    pub fn new(rules: Vec<TipRule>) -> Self {
        Self { rules }
    }

    /// One pass per weakness, rules applied in table order. A weakness can
    /// fire several rules and a rule can fire for several weaknesses; a
    /// weakness matching no trigger contributes nothing.
    pub fn generate(&self, weaknesses: &[String]) -> Vec<String> {
        let mut tips = Vec::new();

        for weakness in weaknesses {
            let lowered = weakness.to_lowercase();
            for rule in &self.rules {
                if lowered.contains(rule.trigger.to_lowercase().as_str()) {
                    tips.push(rule.advice.clone());
                }
            }
        }

        tips
    }
}
