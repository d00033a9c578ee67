//! Syntax check applied to normalized user input.
//!
//! The responder only uses the boolean result to pick which suffix follows the
//! fallback reply. Nothing here looks at code the program produces.

/// Predicate deciding whether a piece of text is syntactically valid source.
pub trait SyntaxCheck {
    /// Returns true if `text` parses without a syntax error.
    fn is_syntactically_valid(&self, text: &str) -> bool;
}

impl<F> SyntaxCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_syntactically_valid(&self, text: &str) -> bool {
        self(text)
    }
}

/// Checks text against the Rust grammar using `syn`.
///
/// The text is parsed as the body of a block, so a bare expression (`42`),
/// a sequence of statements (`let x = 1; x + 1`), or item definitions are all
/// accepted, as is the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSyntaxCheck;

impl SyntaxCheck for RustSyntaxCheck {
    fn is_syntactically_valid(&self, text: &str) -> bool {
        match syn::parse_str::<syn::Block>(&format!("{{{text}\n}}")) {
            Ok(_) => true,
            Err(e) => {
                tracing::trace!(error = %e, "input is not valid Rust");
                false
            },
        }
    }
}
