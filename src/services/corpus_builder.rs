//! Reformulated corpus construction.

use crate::Result;
use crate::models::{Corpus, CorpusEntry, RawPair};
use crate::services::SubstitutionTable;
use crate::storage::CorpusSource;
use tracing::instrument;

/// Loads every row from `source` and builds the normalized corpus.
///
/// # Errors
///
/// Returns the source's error unchanged; a failed load is not retried.
#[instrument(skip_all, fields(source = %source.describe()))]
pub fn load_corpus<S>(source: &S, table: &SubstitutionTable) -> Result<Corpus>
where
    S: CorpusSource + ?Sized,
{
    let pairs = source.load_pairs()?;
    let corpus = build_corpus(pairs, table);
    tracing::debug!(entries = corpus.len(), "built corpus");
    Ok(corpus)
}

/// Normalizes both sides of every raw pair and collects them into a corpus.
///
/// Entries keep the order of `pairs`. Rows loaded from the store come back in
/// whatever order the store chooses, since the load query has no `ORDER BY`.
pub fn build_corpus<I>(pairs: I, table: &SubstitutionTable) -> Corpus
where
    I: IntoIterator<Item = RawPair>,
{
    pairs
        .into_iter()
        .map(|pair| {
            CorpusEntry::new(
                table.normalize(&pair.input_text),
                table.normalize(&pair.response_text),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryCorpusSource;

    #[test]
    fn test_normalizes_both_sides_in_order() {
        let corpus = build_corpus(
            vec![
                RawPair::new("Hola", "Bienvenido"),
                RawPair::new("¿Cuál es tu comida favorita?", "Mi COLOR es el azul"),
            ],
            &SubstitutionTable::default(),
        );

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0], CorpusEntry::new("Saludos", "bienvenido"));
        assert_eq!(
            corpus.entries()[1],
            CorpusEntry::new("¿cuál es tu alimento preferida?", "mi tonalidad es el azul")
        );
    }

    #[test]
    fn test_keeps_duplicates() {
        let corpus = build_corpus(
            vec![RawPair::new("hola", "uno"), RawPair::new("HOLA", "dos")],
            &SubstitutionTable::default(),
        );
        let inputs: Vec<_> = corpus.inputs().collect();
        assert_eq!(inputs, vec!["Saludos", "Saludos"]);
    }

    #[test]
    fn test_load_corpus_from_source() {
        let source = InMemoryCorpusSource::from_pairs([("Color", "Azul"), ("hola", "hola")]);
        let corpus = load_corpus(&source, &SubstitutionTable::default()).unwrap();
        assert_eq!(
            corpus.entries(),
            &[
                CorpusEntry::new("tonalidad", "azul"),
                CorpusEntry::new("Saludos", "Saludos"),
            ]
        );
    }

    #[test]
    fn test_load_corpus_propagates_errors() {
        struct Broken;
        impl CorpusSource for Broken {
            fn load_pairs(&self) -> Result<Vec<RawPair>> {
                Err(crate::Error::OperationFailed {
                    operation: "load_corpus".to_string(),
                    cause: "connection refused".to_string(),
                })
            }
            fn describe(&self) -> String {
                "broken".to_string()
            }
        }

        let result = load_corpus(&Broken, &SubstitutionTable::default());
        assert!(matches!(result, Err(crate::Error::OperationFailed { .. })));
    }

    #[test]
    fn test_empty_rows() {
        let corpus = build_corpus(Vec::new(), &SubstitutionTable::default());
        assert!(corpus.is_empty());
    }
}
