//! Classifier validation.
//!
//! A classifier is a user-supplied name of a schema node (catalog, entity
//! collection, attribute, associated data, reference). The validator decides
//! whether a proposed name is acceptable and, if not, which single
//! [`ClassifierValidationErrorType`] explains the rejection.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{ClassifierValidationErrorType, SchemaType};

/// Maximum classifier length accepted by the server.
pub const MAX_CLASSIFIER_LENGTH: usize = 255;

// Leading ASCII letter, then ASCII alphanumerics or `_ . - ~`.
static FORMAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_.\-~]{0,254}$").expect("classifier format pattern is valid")
});

///
/// SHARED_KEYWORDS
/// reserved in every schema context (query constraint and API field names)
///

static SHARED_KEYWORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "catalog",
        "entity",
        "attribute",
        "associatedData",
        "reference",
        "references",
        "price",
        "prices",
        "hierarchy",
        "facet",
        "primaryKey",
        "locale",
        "locales",
        "scope",
        "self",
        "parent",
        "children",
        "query",
        "filterBy",
        "orderBy",
        "require",
        "head",
    ]
    .into_iter()
    .map(str::to_ascii_lowercase)
    .collect()
});

// Keywords reserved only within one schema context.
fn context_keywords(schema_type: SchemaType) -> &'static [&'static str] {
    match schema_type {
        SchemaType::Catalog => &["system", "schema"],
        SchemaType::Entity => &["allLocales", "priceValidIn"],
        SchemaType::Reference => &["referencedEntity", "groupEntity"],
        SchemaType::Attribute | SchemaType::AssociatedData => &[],
    }
}

/// Returns `true` if `candidate` case-insensitively equals a keyword reserved
/// for `schema_type`.
pub fn is_reserved_keyword(schema_type: SchemaType, candidate: &str) -> bool {
    SHARED_KEYWORDS.contains(&candidate.to_ascii_lowercase())
        || context_keywords(schema_type)
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(candidate))
}

/// Classifies why `candidate` is not a valid classifier for `schema_type`.
///
/// Returns `None` when the candidate is valid. Rules are checked in order and
/// the first match wins:
///
/// 1. empty or whitespace-only → [`ClassifierValidationErrorType::Empty`]
/// 2. surrounding whitespace → [`ClassifierValidationErrorType::LeadingTrailingWhiteSpace`]
/// 3. reserved keyword (any casing) → [`ClassifierValidationErrorType::Keyword`]
/// 4. outside the allowed format → [`ClassifierValidationErrorType::Format`]
pub fn validate_classifier(
    schema_type: SchemaType,
    candidate: &str,
) -> Option<ClassifierValidationErrorType> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Some(ClassifierValidationErrorType::Empty);
    }
    if trimmed.len() != candidate.len() {
        return Some(ClassifierValidationErrorType::LeadingTrailingWhiteSpace);
    }
    if is_reserved_keyword(schema_type, candidate) {
        return Some(ClassifierValidationErrorType::Keyword);
    }
    if !FORMAT_PATTERN.is_match(candidate) {
        return Some(ClassifierValidationErrorType::Format);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn validate(candidate: &str) -> Option<ClassifierValidationErrorType> {
        validate_classifier(SchemaType::Entity, candidate)
    }

    #[test]
    fn documented_examples() {
        assert_eq!(
            validate("  name"),
            Some(ClassifierValidationErrorType::LeadingTrailingWhiteSpace)
        );
        assert_eq!(validate(""), Some(ClassifierValidationErrorType::Empty));
        assert_eq!(
            validate("reference"),
            Some(ClassifierValidationErrorType::Keyword)
        );
        assert_eq!(validate("validName1"), None);
    }

    #[test]
    fn whitespace_only_is_empty_not_surrounding_whitespace() {
        assert_eq!(validate(" \t\n"), Some(ClassifierValidationErrorType::Empty));
    }

    #[test]
    fn padded_keyword_reports_whitespace_first() {
        assert_eq!(
            validate(" reference "),
            Some(ClassifierValidationErrorType::LeadingTrailingWhiteSpace)
        );
    }

    #[test]
    fn format_violations() {
        for candidate in ["1product", "product name", "_code", "price$", "čeština"] {
            assert_eq!(
                validate(candidate),
                Some(ClassifierValidationErrorType::Format),
                "candidate {candidate:?}"
            );
        }
        assert_eq!(validate(&"a".repeat(MAX_CLASSIFIER_LENGTH)), None);
        assert_eq!(
            validate(&"a".repeat(MAX_CLASSIFIER_LENGTH + 1)),
            Some(ClassifierValidationErrorType::Format)
        );
        assert_eq!(validate("product-code_v2.alt~1"), None);
    }

    #[test]
    fn context_keywords_only_apply_in_their_context() {
        assert_eq!(
            validate_classifier(SchemaType::Catalog, "system"),
            Some(ClassifierValidationErrorType::Keyword)
        );
        assert_eq!(validate_classifier(SchemaType::Attribute, "system"), None);
        assert_eq!(
            validate_classifier(SchemaType::Reference, "REFERENCEDENTITY"),
            Some(ClassifierValidationErrorType::Keyword)
        );
    }

    fn shared_keyword() -> impl Strategy<Value = String> {
        let keywords: Vec<String> = SHARED_KEYWORDS.iter().cloned().collect();
        prop::sample::select(keywords)
    }

    fn casing_variant(word: String) -> impl Strategy<Value = String> {
        let len = word.len();
        prop::collection::vec(any::<bool>(), len).prop_map(move |upper| {
            word.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn empty_iff_blank(candidate in "\\PC{0,12}") {
            let is_blank = candidate.trim().is_empty();
            let result = validate(&candidate);
            prop_assert_eq!(result == Some(ClassifierValidationErrorType::Empty), is_blank);
        }

        #[test]
        fn surrounding_whitespace_is_reported(
            core in "[a-z][a-zA-Z0-9]{3,10}",
            lead in "[ \t]{0,2}",
            trail in "[ \t]{0,2}",
        ) {
            prop_assume!(!lead.is_empty() || !trail.is_empty());
            let candidate = format!("{lead}{core}{trail}");
            prop_assert_eq!(
                validate(&candidate),
                Some(ClassifierValidationErrorType::LeadingTrailingWhiteSpace)
            );
        }

        #[test]
        fn keywords_match_in_any_casing(
            schema_type in prop::sample::select(SchemaType::ALL.to_vec()),
            keyword in shared_keyword().prop_flat_map(casing_variant),
        ) {
            prop_assert_eq!(
                validate_classifier(schema_type, &keyword),
                Some(ClassifierValidationErrorType::Keyword)
            );
        }

        #[test]
        fn well_formed_identifiers_are_valid(candidate in "[a-zA-Z][a-zA-Z0-9_.~-]{0,40}") {
            prop_assume!(!is_reserved_keyword(SchemaType::Entity, &candidate));
            prop_assert_eq!(validate(&candidate), None);
        }
    }
}
