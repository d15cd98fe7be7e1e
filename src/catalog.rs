//! # Template Catalog
//!
//! Pre-built [Template]s for common LLM task shapes. Every factory returns a
//! fresh template with no default values, so callers can hold and render
//! their own instance without affecting anyone else's.

use crate::template::Template;

/// Template for question-answering tasks. Requires `question`.
pub fn question_answer() -> Template {
    Template::new("Please answer the following question:\n\nQuestion: {question}\n\nAnswer:")
}

/// Template for text summarization tasks. Requires `text`.
pub fn summarization() -> Template {
    Template::new("Please summarize the following text:\n\n{text}\n\nSummary:")
}

/// Template for translation tasks. Requires `source_lang`, `target_lang` and
/// `text`.
pub fn translation() -> Template {
    Template::new(
        "Translate the following text from {source_lang} to {target_lang}:\n\n{text}\n\nTranslation:",
    )
}

/// Template for code generation tasks. Requires `language` and `task`.
pub fn code_generation() -> Template {
    Template::new("Generate {language} code for the following task:\n\n{task}\n\nCode:")
}

/// Template for classification tasks. Requires `categories` and `text`.
pub fn classification() -> Template {
    Template::new(
        "Classify the following text into one of these categories: {categories}\n\nText: {text}\n\nCategory:",
    )
}

#[cfg(test)]
mod test_catalog {
    use serde_json::json;

    use super::*;
    use crate::utils::JsonMap;

    fn vars(entries: &[(&str, &str)]) -> JsonMap {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), json!(value)))
            .collect()
    }

    #[test]
    fn test_question_answer() {
        let template = question_answer();
        assert_eq!(&["question".to_string()], template.get_variables());
        let prompt = template
            .format(&vars(&[("question", "What is Rust?")]))
            .unwrap();
        assert!(prompt.contains("Question: What is Rust?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_summarization() {
        let template = summarization();
        assert_eq!(&["text".to_string()], template.get_variables());
        let prompt = template.format(&vars(&[("text", "A long article.")])).unwrap();
        assert!(prompt.contains("A long article."));
        assert!(prompt.contains("summarize"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn test_translation() {
        let template = translation();
        assert_eq!(
            &[
                "source_lang".to_string(),
                "target_lang".to_string(),
                "text".to_string()
            ],
            template.get_variables()
        );
        let prompt = template
            .format(&vars(&[
                ("source_lang", "English"),
                ("target_lang", "French"),
                ("text", "Hello, world!"),
            ]))
            .unwrap();
        assert!(prompt.contains("from English to French"));
        assert!(prompt.contains("Hello, world!"));
        assert!(prompt.ends_with("Translation:"));
    }

    #[test]
    fn test_code_generation() {
        let prompt = code_generation()
            .format(&vars(&[("language", "Rust"), ("task", "parse a CSV file")]))
            .unwrap();
        assert_eq!(
            "Generate Rust code for the following task:\n\nparse a CSV file\n\nCode:",
            prompt
        );
    }

    #[test]
    fn test_classification() {
        let template = classification();
        assert_eq!(
            &["categories".to_string(), "text".to_string()],
            template.get_variables()
        );
        let prompt = template
            .format(&vars(&[
                ("categories", "spam, ham"),
                ("text", "Buy now!!!"),
            ]))
            .unwrap();
        assert!(prompt.contains("categories: spam, ham"));
        assert!(prompt.contains("Text: Buy now!!!"));
        assert!(prompt.ends_with("Category:"));
    }

    #[test]
    fn test_factories_yield_independent_instances() {
        let first = question_answer();
        let second = question_answer();
        assert_eq!(first.str(), second.str());
        let overrides = vars(&[("question", "same input")]);
        assert_eq!(
            first.format(&overrides).unwrap(),
            second.format(&overrides).unwrap()
        );
    }

    #[test]
    fn test_catalog_templates_have_no_defaults() {
        for template in [
            question_answer(),
            summarization(),
            translation(),
            code_generation(),
            classification(),
        ] {
            assert!(template.defaults.is_empty());
            assert!(!template.validate(&JsonMap::new()));
        }
    }
}
