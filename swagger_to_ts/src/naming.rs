//! Identifier and file-name derivation.
//!
//! Case conversion is delegated to `heck`, English number inflection to
//! `pluralizer`. None of these functions fail; unusual plurals degrade to the
//! library's best guess, which only ever affects inferred names.

use heck::{ToKebabCase, ToUpperCamelCase};

/// Trailing words that read as plurals to the inflection rules but are
/// singular (or invariant) as property names. Matched case-insensitively.
const INVARIANT_SUFFIXES: &[&str] = &["canvas", "data", "news", "series", "species"];

fn is_invariant(name: &str) -> bool {
    let lower: String = name.to_lowercase();
    INVARIANT_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

/// Convert a schema or property key to a `PascalCase` type identifier.
/// Splits on case changes and on any non-alphanumeric character.
/// Examples: `"order_item"` -> `"OrderItem"`, `"pet-category"` -> `"PetCategory"`
#[must_use]
pub fn to_type_identifier(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Convert a schema or property key to a lowercase kebab-case file stem.
/// Examples: `"OrderItem"` -> `"order-item"`, `"HTTPStatus"` -> `"http-status"`
#[must_use]
pub fn to_file_stem(name: &str) -> String {
    name.to_kebab_case().to_lowercase()
}

/// Reduce a plural English noun to its singular form.
///
/// Idempotent: already-singular input is returned as the singular of itself.
#[must_use]
pub fn singularize(name: &str) -> String {
    if name.is_empty() || is_invariant(name) {
        return name.to_string();
    }
    pluralizer::pluralize(name, 1, false)
}

/// Inverse of [`singularize`].
#[must_use]
pub fn pluralize(name: &str) -> String {
    if name.is_empty() || is_invariant(name) {
        return name.to_string();
    }
    pluralizer::pluralize(name, 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_type_identifier_snake_case() {
        let actual: String = to_type_identifier("order_item");
        let expected: &str = "OrderItem";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_type_identifier_kebab_case() {
        let actual: String = to_type_identifier("pet-category");
        let expected: &str = "PetCategory";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_type_identifier_camel_case() {
        let actual: String = to_type_identifier("shippingAddress");
        let expected: &str = "ShippingAddress";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_type_identifier_already_pascal() {
        let actual: String = to_type_identifier("ApiResponse");
        let expected: &str = "ApiResponse";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_file_stem_pascal_case() {
        let actual: String = to_file_stem("OrderItem");
        let expected: &str = "order-item";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_file_stem_single_word() {
        assert_eq!("pet", to_file_stem("Pet"));
        assert_eq!("pet", to_file_stem("pet"));
    }

    #[test]
    fn to_file_stem_camel_and_snake() {
        assert_eq!("shipping-address", to_file_stem("shippingAddress"));
        assert_eq!("shipping-address", to_file_stem("shipping_address"));
    }

    #[test]
    fn singularize_regular_plurals() {
        assert_eq!("pet", singularize("pets"));
        assert_eq!("item", singularize("items"));
        assert_eq!("tag", singularize("tags"));
        assert_eq!("category", singularize("categories"));
        assert_eq!("orderItem", singularize("orderItems"));
    }

    #[test]
    fn singularize_irregular_plurals() {
        assert_eq!("hero", singularize("heroes"));
        assert_eq!("wife", singularize("wives"));
        assert_eq!("address", singularize("addresses"));
        assert_eq!("status", singularize("statuses"));
        assert_eq!("box", singularize("boxes"));
    }

    #[test]
    fn singularize_keeps_singular_input() {
        let words: [&str; 13] = [
            "pet",
            "item",
            "category",
            "order",
            "user",
            "status",
            "orderStatus",
            "bonus",
            "campus",
            "canvas",
            "address",
            "data",
            "metadata",
        ];
        for word in words {
            assert_eq!(word, singularize(word), "{word} is already singular");
        }
    }

    #[test]
    fn singularize_is_idempotent() {
        let words: [&str; 13] = [
            "pets",
            "pet",
            "categories",
            "addresses",
            "statuses",
            "boxes",
            "orderItems",
            "data",
            "species",
            "heroes",
            "wives",
            "orderStatus",
            "",
        ];
        for word in words {
            let once: String = singularize(word);
            let twice: String = singularize(&once);
            assert_eq!(once, twice, "singularize must be idempotent for {word:?}");
        }
    }

    #[test]
    fn pluralize_inverts_singularize_for_regular_nouns() {
        for word in ["pet", "tag", "category"] {
            assert_eq!(word, singularize(&pluralize(word)));
        }
        assert_eq!("pets", pluralize("pet"));
        assert_eq!("orderItems", pluralize("orderItem"));
    }

    #[test]
    fn invariant_words_are_left_alone() {
        assert_eq!("petData", pluralize("petData"));
        assert_eq!("petData", singularize("petData"));
        assert_eq!("Canvas", singularize("Canvas"));
    }
}
