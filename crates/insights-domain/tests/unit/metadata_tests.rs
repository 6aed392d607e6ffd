//! Unit tests for record metadata and embedding records

#[cfg(test)]
mod tests {
    use insights_domain::{EmbeddingRecord, Metadata, MetadataExt, MetadataValue};

    #[test]
    fn test_metadata_json_shape_is_preserved() {
        let record = EmbeddingRecord::new("r1", vec![0.5, -0.5], Metadata::new())
            .with_metadata("participant", "Sarah")
            .with_metadata("urgency_level", 3_i64)
            .with_metadata("weight", 0.25_f64)
            .with_metadata("key_emotions", vec!["calm".to_string()]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["metadata"]["urgency_level"], 3);
        assert_eq!(json["metadata"]["weight"], 0.25);
        assert_eq!(json["metadata"]["key_emotions"][0], "calm");

        let back: EmbeddingRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
        assert!(matches!(
            back.metadata.get("urgency_level"),
            Some(MetadataValue::Integer(3))
        ));
    }

    #[test]
    fn test_metadata_accessors() {
        let record = EmbeddingRecord::new("r2", vec![1.0], Metadata::new())
            .with_metadata("participant", "Marcus")
            .with_metadata("urgency_level", 5_u8);

        assert_eq!(record.dimension(), 1);
        assert_eq!(record.metadata.text("participant"), Some("Marcus"));
        assert_eq!(record.metadata.text("urgency_level"), None);
        assert_eq!(record.metadata.number("urgency_level"), Some(5.0));
        assert_eq!(record.metadata.text_or_empty("missing"), "");
        assert!(record.metadata.list("missing").is_empty());
    }

    #[test]
    fn test_display_joins_lists() {
        let value = MetadataValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.to_string(), "a, b");
        assert!(!value.is_scalar());
    }
}
