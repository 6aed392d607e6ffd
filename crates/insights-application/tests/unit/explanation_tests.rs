//! Tests for match explanation rules

#[cfg(test)]
mod tests {
    use insights_application::{explain_participant_match, explain_query_match};
    use insights_domain::value_objects::Metadata;

    fn metadata(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).into()))
            .collect()
    }

    #[test]
    fn test_goal_and_business_match() {
        let m = metadata(&[
            ("primary_goal", "Scale my Coaching practice"),
            ("business_focus", "coaching"),
        ]);
        assert_eq!(
            explain_query_match("coaching growth", &m),
            "Similar goal + Same business type"
        );
    }

    #[test]
    fn test_challenge_matches_secondary_blockers() {
        let mut m = metadata(&[("main_blocker", "Time management")]);
        m.insert(
            "secondary_blockers".into(),
            vec!["Pricing confidence".to_string()].into(),
        );
        assert_eq!(explain_query_match("pricing", &m), "Similar challenge");
        assert_eq!(explain_query_match("TIME", &m), "Similar challenge");
    }

    #[test]
    fn test_mindset_match() {
        let m = metadata(&[("mindset_pattern", "Perfectionist tendencies")]);
        assert_eq!(explain_query_match("perfectionist", &m), "Similar mindset");
    }

    #[test]
    fn test_short_words_are_ignored() {
        let m = metadata(&[("primary_goal", "go to market")]);
        assert_eq!(explain_query_match("go to", &m), "Semantic similarity");
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let m = metadata(&[("primary_goal", "Launch a podcast")]);
        assert_eq!(
            explain_query_match("inventory logistics", &m),
            "Semantic similarity"
        );
        assert_eq!(explain_query_match("anything", &Metadata::new()), "Semantic similarity");
    }

    #[test]
    fn test_participant_comparison() {
        let mut source = metadata(&[
            ("business_focus", "Coaching"),
            ("primary_goal", "Grow coaching revenue"),
            ("main_blocker", "Fear of selling"),
        ]);
        source.insert("urgency_level".into(), 4_i64.into());
        source.insert("key_emotions".into(), vec!["Anxious".to_string()].into());

        let mut candidate = metadata(&[
            ("business_focus", "coaching"),
            ("primary_goal", "Double revenue this year"),
            ("main_blocker", "Selling feels pushy"),
        ]);
        candidate.insert("urgency_level".into(), 5_i64.into());
        candidate.insert(
            "key_emotions".into(),
            vec!["anxious".to_string(), "hopeful".to_string()].into(),
        );

        assert_eq!(
            explain_participant_match(&source, &candidate),
            "Same business type + Similar goal + Similar challenge + Similar urgency + Shared emotions"
        );
    }

    #[test]
    fn test_participant_comparison_ignores_filler_words() {
        let source = metadata(&[("primary_goal", "Find the right niche")]);
        let candidate = metadata(&[("primary_goal", "Hire the first employee")]);
        assert_eq!(
            explain_participant_match(&source, &candidate),
            "Semantic similarity"
        );
    }

    #[test]
    fn test_distant_urgency_is_not_similar() {
        let mut source = Metadata::new();
        source.insert("urgency_level".into(), 1_i64.into());
        let mut candidate = Metadata::new();
        candidate.insert("urgency_level".into(), 5_i64.into());
        assert_eq!(
            explain_participant_match(&source, &candidate),
            "Semantic similarity"
        );
    }
}
