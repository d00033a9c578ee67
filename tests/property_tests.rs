//! Property-based tests for normalization and turn processing.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Normalization is deterministic and leaves plain lowercase text alone
//! - Every turn leaves the corpus inputs and responses the same length
//! - An unmatched turn appends exactly one entry and shows the fallback
//! - A matched turn shows one of the matched responses, unsuffixed

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use repartee::models::FALLBACK_RESPONSE;
use repartee::{
    Corpus, RawPair, Responder, RustSyntaxCheck, SubstitutionTable, build_corpus, normalize,
};

fn responder(seed: u64) -> Responder<RustSyntaxCheck, StdRng> {
    Responder::new(
        SubstitutionTable::default(),
        RustSyntaxCheck,
        StdRng::seed_from_u64(seed),
    )
}

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "hola", "comida", "favorita", "color", "azul", "gato", "¿cómo estás?", "42", "3 +",
    ])
    .prop_map(String::from)
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..4).prop_map(|words| words.join(" "))
}

proptest! {
    /// Property: normalization is deterministic.
    #[test]
    fn prop_normalize_deterministic(s in ".{0,40}") {
        prop_assert_eq!(normalize(&s), normalize(&s));
    }

    /// Property: text without uppercase letters or rule patterns only passes through.
    #[test]
    fn prop_normalize_identity_on_plain_text(s in "[abdegi-z ]{0,30}") {
        prop_assert_eq!(normalize(&s), s);
    }

    /// Property: the corpus views stay aligned after any sequence of turns.
    #[test]
    fn prop_corpus_views_equal_length(
        seed_rows in prop::collection::vec((phrase(), phrase()), 0..5),
        turns in prop::collection::vec(phrase(), 0..8),
        seed in any::<u64>(),
    ) {
        let table = SubstitutionTable::default();
        let mut corpus = build_corpus(
            seed_rows.into_iter().map(|(i, r)| RawPair::new(i, r)),
            &table,
        );
        let mut responder = responder(seed);

        for line in turns {
            let _ = responder.respond(&mut corpus, &line);
            prop_assert_eq!(corpus.inputs().count(), corpus.responses().count());
        }
    }

    /// Property: an unmatched turn learns exactly one entry and shows the fallback.
    #[test]
    fn prop_unmatched_turn_appends_one_entry(line in phrase(), seed in any::<u64>()) {
        let mut corpus = Corpus::new();
        let reply = responder(seed).respond(&mut corpus, &line);

        prop_assert!(reply.text.starts_with(FALLBACK_RESPONSE));
        prop_assert_eq!(corpus.len(), 1);
        prop_assert_eq!(&corpus.entries()[0].input, &normalize(&line));
        prop_assert_eq!(corpus.entries()[0].response.as_str(), FALLBACK_RESPONSE);
    }

    /// Property: a matched turn shows one matched response exactly.
    #[test]
    fn prop_matched_turn_returns_stored_response(
        rows in prop::collection::vec((word(), "[a-z]{1,8}"), 1..5),
        extra in phrase(),
        seed in any::<u64>(),
    ) {
        let table = SubstitutionTable::default();
        let mut corpus = build_corpus(
            rows.iter().map(|(i, r)| RawPair::new(i.as_str(), r.as_str())),
            &table,
        );
        let before = corpus.len();
        let line = format!("{} {extra}", rows[0].0);
        let expected = corpus.matching_responses(&normalize(&line))
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let reply = responder(seed).respond(&mut corpus, &line);

        prop_assert!(!expected.is_empty());
        prop_assert!(expected.contains(&reply.text));
        prop_assert_eq!(corpus.len(), before);
    }
}
