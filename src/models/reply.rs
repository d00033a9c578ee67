//! Reply types.

/// Text returned when no corpus entry matches the user's input.
pub const FALLBACK_RESPONSE: &str =
    "Lo siento, no puedo entenderlo. ¿Podrías reformular tu pregunta o comentario?";

/// Suffix shown after the fallback when the input parses as source code.
pub const SUFFIX_WELL_FORMED: &str =
    " Además, he mejorado mi propio código para comprender mejor tus consultas.";

/// Suffix shown after the fallback when the input does not parse.
pub const SUFFIX_ILL_FORMED: &str =
    " Lamentablemente, no he podido mejorar mi propio código debido a una posible ofuscación.";

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// One of the matching entries was chosen.
    Matched {
        /// Number of entries that matched the input.
        candidates: usize,
    },
    /// Nothing matched; the input was learned with the fallback response.
    Fallback {
        /// Result of the syntax check on the normalized input.
        well_formed: bool,
    },
}

impl ReplyOutcome {
    /// Returns the outcome as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Matched { .. } => "matched",
            Self::Fallback { .. } => "fallback",
        }
    }
}

/// The text displayed to the user for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Displayed text, including any fallback suffix.
    pub text: String,
    /// How the reply was produced.
    pub outcome: ReplyOutcome,
}

impl Reply {
    /// Creates a reply for a matched response.
    #[must_use]
    pub fn matched(response: impl Into<String>, candidates: usize) -> Self {
        Self {
            text: response.into(),
            outcome: ReplyOutcome::Matched { candidates },
        }
    }

    /// Creates the fallback reply with the suffix selected by `well_formed`.
    #[must_use]
    pub fn fallback(well_formed: bool) -> Self {
        let suffix = if well_formed {
            SUFFIX_WELL_FORMED
        } else {
            SUFFIX_ILL_FORMED
        };
        Self {
            text: format!("{FALLBACK_RESPONSE}{suffix}"),
            outcome: ReplyOutcome::Fallback { well_formed },
        }
    }

    /// Returns true if the reply is the fallback.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.outcome, ReplyOutcome::Fallback { .. })
    }
}
