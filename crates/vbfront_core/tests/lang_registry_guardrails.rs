use std::collections::HashMap;

use vbfront_core::lang::keywords;
use vbfront_core::lang::operators;
use vbfront_core::lang::punctuation;
use vbfront_core::lang::reserved::{self, ReservedWord};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_spellings_are_identifier_shaped() {
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(
            first.is_ascii_alphabetic() || first == '_',
            "keyword {:?} cannot start an identifier",
            info.canonical
        );
        assert!(
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "keyword {:?} is not lexable as a single word",
            info.canonical
        );
    }
}

#[test]
fn attribute_names_do_not_collide_with_keywords() {
    for &name in reserved::ATTRIBUTE_NAMES {
        assert_eq!(
            reserved::lookup(name),
            Some(ReservedWord::Attribute),
            "attribute name {:?} resolves to something else",
            name
        );
        assert!(keywords::from_str(name).is_none());
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.canonical), Some(info.id));
        assert!(
            (1..=2).contains(&info.canonical.len()),
            "operator {:?} is longer than two characters",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_disjoint_from_operators() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert!(
            operators::from_str(info.canonical).is_none(),
            "punctuation {:?} is also an operator",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}
