use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::template::PromptTemplate;

const QUESTION_ANSWER: &str =
    "Please answer the following question:\n\nQuestion: {question}\n\nAnswer:";

const SUMMARIZATION: &str = "Please summarize the following text:\n\n{text}\n\nSummary:";

const TRANSLATION: &str =
    "Translate the following text from {source_lang} to {target_lang}:\n\n{text}\n\nTranslation:";

const CODE_GENERATION: &str = "Generate {language} code for the following task:\n\n{task}\n\nCode:";

const CLASSIFICATION: &str = "Classify the following text into one of these categories: \
{categories}\n\nText: {text}\n\nCategory:";

lazy_static! {
    static ref BUILTIN_TEMPLATES: HashMap<&'static str, &'static str> = HashMap::from([
        ("question_answer", QUESTION_ANSWER),
        ("summarization", SUMMARIZATION),
        ("translation", TRANSLATION),
        ("code_generation", CODE_GENERATION),
        ("classification", CLASSIFICATION),
    ]);
}

/// A collection of commonly used prompt templates.
///
/// Every call returns a fresh, independent [`PromptTemplate`].
pub struct PromptLibrary;

impl PromptLibrary {
    /// Template for question-answering tasks; expects `{question}`
    pub fn question_answer() -> PromptTemplate {
        PromptTemplate::new(QUESTION_ANSWER)
    }

    /// Template for text summarization tasks; expects `{text}`
    pub fn summarization() -> PromptTemplate {
        PromptTemplate::new(SUMMARIZATION)
    }

    /// Template for translation tasks; expects `{source_lang}`,
    /// `{target_lang}` and `{text}`
    pub fn translation() -> PromptTemplate {
        PromptTemplate::new(TRANSLATION)
    }

    /// Template for code generation tasks; expects `{language}` and `{task}`
    pub fn code_generation() -> PromptTemplate {
        PromptTemplate::new(CODE_GENERATION)
    }

    /// Template for classification tasks; expects `{categories}` and `{text}`
    pub fn classification() -> PromptTemplate {
        PromptTemplate::new(CLASSIFICATION)
    }

    /// Look up a builtin template by name
    pub fn get(name: &str) -> Option<PromptTemplate> {
        BUILTIN_TEMPLATES
            .get(name)
            .map(|text| PromptTemplate::new(*text))
    }

    /// Names of all builtin templates, sorted
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = BUILTIN_TEMPLATES.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
