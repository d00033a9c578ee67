//! Text normalization.
//!
//! Normalization lowercases the whole text and then applies a fixed, ordered
//! table of literal substitutions. Each rule rewrites every occurrence of its
//! pattern in the output of the previous rule, so a later rule can act on text
//! an earlier rule produced. Replacements are not lowercased again, which makes
//! normalization non-idempotent: `normalize(normalize("hola"))` is `"saludos"`,
//! not `"Saludos"`.

/// A single literal `pattern -> replacement` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    /// Literal text to search for.
    pub pattern: String,
    /// Text substituted for every occurrence of `pattern`.
    pub replacement: String,
}

impl SubstitutionRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Replaces every occurrence of the pattern in `text`.
    ///
    /// An empty pattern leaves the text unchanged.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if self.pattern.is_empty() {
            return text.to_string();
        }
        text.replace(self.pattern.as_str(), &self.replacement)
    }
}

/// Built-in rules, in application order.
const DEFAULT_RULES: [(&str, &str); 5] = [
    ("hola", "Saludos"),
    ("¿cómo estás?", "¿Cómo te encuentras?"),
    ("comida", "alimento"),
    ("favorita", "preferida"),
    ("color", "tonalidad"),
];

/// Ordered list of substitution rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    rules: Vec<SubstitutionRule>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        DEFAULT_RULES
            .iter()
            .map(|(pattern, replacement)| SubstitutionRule::new(*pattern, *replacement))
            .collect()
    }
}

impl FromIterator<SubstitutionRule> for SubstitutionTable {
    fn from_iter<T: IntoIterator<Item = SubstitutionRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl SubstitutionTable {
    /// Creates a table with no rules; normalization then only lowercases.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns the rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Lowercases `text` and applies every rule in order.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_lowercase(), |acc, rule| rule.apply(&acc))
    }
}

/// Normalizes `text` with the built-in substitution table.
///
/// # Examples
///
/// ```
/// use repartee::normalize;
///
/// assert_eq!(normalize("HOLA"), "Saludos");
/// assert_eq!(normalize("Mi Comida Favorita"), "mi alimento preferida");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    SubstitutionTable::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hola", "Saludos" ; "greeting")]
    #[test_case("¿Cómo estás?", "¿Cómo te encuentras?" ; "question after lowercasing")]
    #[test_case("COMIDA", "alimento" ; "food")]
    #[test_case("favorita", "preferida" ; "favourite")]
    #[test_case("Color", "tonalidad" ; "colour")]
    #[test_case("nada que cambiar", "nada que cambiar" ; "untouched")]
    #[test_case("", "" ; "empty")]
    fn test_single_rules(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_all_rules_in_one_pass() {
        assert_eq!(
            normalize("Hola, ¿cómo estás? me gusta la comida favorita de color azul"),
            "Saludos, ¿Cómo te encuentras? me gusta la alimento preferida de tonalidad azul"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(normalize("hola hola HOLA"), "Saludos Saludos Saludos");
        assert_eq!(normalize("colores y color"), "tonalidades y tonalidad");
    }

    #[test]
    fn test_not_idempotent() {
        let once = normalize("hola");
        assert_eq!(once, "Saludos");
        assert_eq!(normalize(&once), "saludos");
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let table: SubstitutionTable = [
            SubstitutionRule::new("a", "bc"),
            SubstitutionRule::new("bc", "d"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.normalize("A"), "d");

        let reversed: SubstitutionTable = [
            SubstitutionRule::new("bc", "d"),
            SubstitutionRule::new("a", "bc"),
        ]
        .into_iter()
        .collect();
        assert_eq!(reversed.normalize("A"), "bc");
    }

    #[test]
    fn test_empty_pattern_is_ignored() {
        let table: SubstitutionTable = std::iter::once(SubstitutionRule::new("", "x")).collect();
        assert_eq!(table.normalize("Abc"), "abc");
    }

    #[test]
    fn test_empty_table_only_lowercases() {
        assert_eq!(SubstitutionTable::empty().normalize("HOLA Ñandú"), "hola ñandú");
    }

    #[test]
    fn test_default_rule_order() {
        let table = SubstitutionTable::default();
        let patterns: Vec<_> = table.rules().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec!["hola", "¿cómo estás?", "comida", "favorita", "color"]
        );
    }
}
