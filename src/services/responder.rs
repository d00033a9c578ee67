//! Turn processing.
//!
//! [`Responder::respond`] answers one raw input line against a [`Corpus`]:
//!
//! 1. Normalize the line.
//! 2. Collect the responses of every entry whose input is a substring of the
//!    normalized line, in index order.
//! 3. If any matched, return one of them chosen uniformly at random, unchanged.
//! 4. Otherwise learn `(normalized line, fallback)` and return the fallback
//!    followed by a suffix chosen by the syntax check on the normalized line.
//!    The learned entry never carries the suffix.

use crate::models::{Corpus, CorpusEntry, FALLBACK_RESPONSE, Reply};
use crate::quality::SyntaxCheck;
use crate::services::SubstitutionTable;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Answers input lines against a corpus.
///
/// The responder holds no corpus of its own; the caller owns the [`Corpus`]
/// and passes it to every turn.
pub struct Responder<C, R> {
    table: SubstitutionTable,
    checker: C,
    rng: R,
}

impl<C, R> Responder<C, R>
where
    C: SyntaxCheck,
    R: Rng,
{
    /// Creates a responder.
    #[must_use]
    pub const fn new(table: SubstitutionTable, checker: C, rng: R) -> Self {
        Self {
            table,
            checker,
            rng,
        }
    }

    /// Processes one raw input line and returns the text to display.
    ///
    /// Appends exactly one entry to `corpus` when nothing matches, and leaves it
    /// untouched otherwise.
    #[instrument(skip(self, corpus), fields(corpus_len = corpus.len()))]
    pub fn respond(&mut self, corpus: &mut Corpus, line: &str) -> Reply {
        let normalized = self.table.normalize(line);
        metrics::counter!("repartee_turns_total").increment(1);

        let candidates = corpus.matching_responses(&normalized);
        if let Some(response) = candidates.choose(&mut self.rng) {
            let reply = Reply::matched(*response, candidates.len());
            metrics::counter!("repartee_matches_total").increment(1);
            tracing::debug!(candidates = candidates.len(), "matched corpus entry");
            return reply;
        }

        let well_formed = self.checker.is_syntactically_valid(&normalized);
        corpus.push(CorpusEntry::new(normalized, FALLBACK_RESPONSE));
        metrics::counter!("repartee_fallbacks_total").increment(1);
        tracing::debug!(
            well_formed,
            corpus_len = corpus.len(),
            "no match, learned input"
        );

        Reply::fallback(well_formed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawPair, ReplyOutcome, SUFFIX_ILL_FORMED, SUFFIX_WELL_FORMED};
    use crate::quality::RustSyntaxCheck;
    use crate::services::build_corpus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::collections::HashSet;

    fn responder() -> Responder<RustSyntaxCheck, StdRng> {
        Responder::new(
            SubstitutionTable::default(),
            RustSyntaxCheck,
            StdRng::seed_from_u64(42),
        )
    }

    fn seeded_corpus() -> Corpus {
        build_corpus(
            vec![
                RawPair::new("hola", "bienvenido"),
                RawPair::new("comida", "me gusta la pasta"),
                RawPair::new("comida", "prefiero el arroz"),
            ],
            &SubstitutionTable::default(),
        )
    }

    #[test]
    fn test_match_uses_normalized_forms_on_both_sides() {
        let mut corpus = seeded_corpus();
        assert_eq!(corpus.entries()[0].input, "Saludos");

        let reply = responder().respond(&mut corpus, "Hola");
        assert_eq!(reply.text, "bienvenido");
        assert_eq!(reply.outcome, ReplyOutcome::Matched { candidates: 1 });
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_match_picks_among_all_candidates() {
        let mut corpus = seeded_corpus();
        let mut responder = responder();
        let mut seen = HashSet::new();

        for _ in 0..64 {
            let reply = responder.respond(&mut corpus, "¿Qué comida te gusta?");
            assert_eq!(reply.outcome, ReplyOutcome::Matched { candidates: 2 });
            seen.insert(reply.text);
        }

        let expected: HashSet<String> = ["me gusta la pasta", "prefiero el arroz"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(seen, expected);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_fallback_learns_normalized_input_without_suffix() {
        let mut corpus = seeded_corpus();
        let reply = responder().respond(&mut corpus, "Mi COLOR favorito");

        assert!(reply.text.starts_with(FALLBACK_RESPONSE));
        assert_eq!(corpus.len(), 4);
        let learned = &corpus.entries()[3];
        assert_eq!(learned.input, "mi tonalidad favorito");
        assert_eq!(learned.response, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_fallback_suffix_follows_syntax_check() {
        let mut corpus = Corpus::new();
        let mut responder = responder();

        let valid = responder.respond(&mut corpus, "42");
        assert_eq!(valid.outcome, ReplyOutcome::Fallback { well_formed: true });
        assert!(valid.text.ends_with(SUFFIX_WELL_FORMED));

        let invalid = responder.respond(&mut corpus, "3 +");
        assert_eq!(invalid.outcome, ReplyOutcome::Fallback { well_formed: false });
        assert!(invalid.text.ends_with(SUFFIX_ILL_FORMED));
    }

    #[test]
    fn test_learned_entry_answers_later_turns() {
        let mut corpus = Corpus::new();
        let mut responder = responder();

        let first = responder.respond(&mut corpus, "qué tal");
        assert!(first.is_fallback());

        let second = responder.respond(&mut corpus, "Y QUÉ TAL hoy");
        assert_eq!(second.text, FALLBACK_RESPONSE);
        assert_eq!(second.outcome, ReplyOutcome::Matched { candidates: 1 });
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_syntax_check_sees_normalized_text() {
        let recorded = RefCell::new(Vec::new());
        let checker = |text: &str| {
            recorded.borrow_mut().push(text.to_string());
            false
        };
        let mut responder = Responder::new(
            SubstitutionTable::default(),
            checker,
            StdRng::seed_from_u64(1),
        );
        let mut corpus = Corpus::new();
        let _ = responder.respond(&mut corpus, "HOLA mundo");

        assert_eq!(recorded.borrow().as_slice(), ["Saludos mundo".to_string()]);
    }
}
