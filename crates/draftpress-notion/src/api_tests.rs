    use super::*;
    use draftpress_core::FrontMatter;

    fn sample_draft(body: &str) -> Draft {
        Draft {
            front_matter: FrontMatter {
                title: "Rental Agreement".to_string(),
                category: "Contracts".to_string(),
                tags: vec!["legal".to_string(), "scanned".to_string()],
                summary: "Two-year lease".to_string(),
                source: "scanner".to_string(),
                publish: true,
            },
            body: body.to_string(),
        }
    }

    #[test]
    fn test_request_shape() {
        let request = CreatePageRequest::from_draft("db-123", &sample_draft("Hello world"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["parent"]["database_id"], "db-123");
        assert_eq!(
            json["properties"]["Title"]["title"][0]["text"]["content"],
            "Rental Agreement"
        );
        assert_eq!(json["properties"]["Category"]["select"]["name"], "Contracts");
        assert_eq!(
            json["properties"]["Tags"]["multi_select"][1]["name"],
            "scanned"
        );
        assert_eq!(
            json["properties"]["Summary"]["rich_text"][0]["text"]["content"],
            "Two-year lease"
        );
        assert_eq!(
            json["properties"]["Source"]["rich_text"][0]["text"]["content"],
            "scanner"
        );
    }

    #[test]
    fn test_body_in_property_and_block() {
        let request = CreatePageRequest::from_draft("db", &sample_draft("Hello world"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["properties"]["Full Text OCR"]["rich_text"][0]["text"]["content"],
            "Hello world"
        );
        assert_eq!(json["children"][0]["object"], "block");
        assert_eq!(json["children"][0]["type"], "paragraph");
        assert_eq!(
            json["children"][0]["paragraph"]["rich_text"][0]["text"]["content"],
            "Hello world"
        );
    }

    #[test]
    fn test_long_body_truncated_identically() {
        let body = "x".repeat(5000);
        let request = CreatePageRequest::from_draft("db", &sample_draft(&body));
        let json = serde_json::to_value(&request).unwrap();

        let property = json["properties"]["Full Text OCR"]["rich_text"][0]["text"]["content"]
            .as_str()
            .unwrap();
        let block = json["children"][0]["paragraph"]["rich_text"][0]["text"]["content"]
            .as_str()
            .unwrap();
        assert_eq!(property.chars().count(), 2000);
        assert_eq!(property, block);
    }

    #[test]
    fn test_truncate_chars_short_input() {
        assert_eq!(truncate_chars("hello", 2000), "hello");
    }

    #[test]
    fn test_truncate_chars_exact_limit() {
        let s = "a".repeat(2000);
        assert_eq!(truncate_chars(&s, 2000), s);
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let s = "é".repeat(3000);
        let truncated = truncate_chars(&s, 2000);
        assert_eq!(truncated.chars().count(), 2000);
        assert!(s.starts_with(truncated));
    }

    #[test]
    fn test_rich_text_tagged_as_text() {
        let json = serde_json::to_value(RichText::new("x")).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"]["content"], "x");
    }

    #[test]
    fn test_empty_tags_serialize_as_empty_array() {
        let mut draft = sample_draft("body");
        draft.front_matter.tags.clear();
        let request = CreatePageRequest::from_draft("db", &draft);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["properties"]["Tags"]["multi_select"]
            .as_array()
            .unwrap()
            .is_empty());
    }
