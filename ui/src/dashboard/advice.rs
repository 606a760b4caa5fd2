//! Actionable-advice classification for the stepper panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvicePriority {
    High,
    Medium,
    Low,
}

impl AdvicePriority {
    pub fn label(&self) -> &'static str {
        match self {
            AdvicePriority::High => "High",
            AdvicePriority::Medium => "Medium",
            AdvicePriority::Low => "Low",
        }
    }

    /// Visual status class; priority has no other behavioral effect.
    pub fn status_class(&self) -> &'static str {
        match self {
            AdvicePriority::High => "stepper-completed",
            AdvicePriority::Medium => "stepper-active",
            AdvicePriority::Low => "stepper-pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdviceItem {
    pub title: String,
    pub description: Option<String>,
    pub priority: AdvicePriority,
}

impl AdviceItem {
    /// Split on the first `" - "` into title and optional description, then
    /// infer priority from a case-insensitive keyword in the title.
    pub fn parse(raw: &str) -> Self {
        let (title, description) = match raw.split_once(" - ") {
            Some((title, rest)) => (title.to_string(), Some(rest.to_string())),
            None => (raw.to_string(), None),
        };

        let lowered = title.to_lowercase();
        let priority = if lowered.contains("high") {
            AdvicePriority::High
        } else if lowered.contains("medium") {
            AdvicePriority::Medium
        } else {
            AdvicePriority::Low
        };

        Self {
            title,
            description,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_splits_title_and_description() {
        let item = AdviceItem::parse("High priority - do X");
        assert_eq!(item.title, "High priority");
        assert_eq!(item.description.as_deref(), Some("do X"));
        assert_eq!(item.priority, AdvicePriority::High);
    }

    #[test]
    fn keywordless_advice_defaults_to_low_without_description() {
        let item = AdviceItem::parse("Review your resume");
        assert_eq!(item.title, "Review your resume");
        assert_eq!(item.description, None);
        assert_eq!(item.priority, AdvicePriority::Low);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(
            AdviceItem::parse("MEDIUM urgency - schedule mock interviews").priority,
            AdvicePriority::Medium
        );
        assert_eq!(
            AdviceItem::parse("highly recommended - join a study group").priority,
            AdvicePriority::High
        );
    }

    #[test]
    fn only_the_first_separator_splits() {
        let item = AdviceItem::parse("Medium priority - learn Rust - then async");
        assert_eq!(item.title, "Medium priority");
        assert_eq!(item.description.as_deref(), Some("learn Rust - then async"));
    }

    #[test]
    fn status_classes_track_priority() {
        assert_eq!(AdvicePriority::High.status_class(), "stepper-completed");
        assert_eq!(AdvicePriority::Medium.status_class(), "stepper-active");
        assert_eq!(AdvicePriority::Low.status_class(), "stepper-pending");
    }
}
