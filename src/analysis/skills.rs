//! Skill presence chart data

use serde::{Deserialize, Serialize};

/// One row of the skill coverage chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPresence {
    pub skill: String,
    pub present: bool,
}

/// Substring presence of each chart skill in the normalized resume text.
/// Display only; carries no score weight.
pub fn skill_presence(skills: &[String], text: &str) -> Vec<SkillPresence> {
    skills
        .iter()
        .map(|skill| SkillPresence {
            present: !text.is_empty() && text.contains(skill.to_lowercase().as_str()),
            skill: skill.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_skills() -> Vec<String> {
        vec!["python".to_string(), "git".to_string(), "leadership".to_string()]
    }

    #[test]
    fn reports_presence_per_skill_in_order() {
        let chart = skill_presence(&chart_skills(), "python scripts tracked in git");
        assert_eq!(chart.len(), 3);
        assert!(chart[0].present);
        assert!(chart[1].present);
        assert!(!chart[2].present);
        assert_eq!(chart[2].skill, "leadership");
    }

    #[test]
    fn empty_text_marks_everything_absent() {
        let chart = skill_presence(&chart_skills(), "");
        assert!(chart.iter().all(|row| !row.present));
    }
}
