//! Structured records produced by the extraction and parsing stages.
//!
//! Keeping the pattern-matching output behind these types localizes the
//! known grammar limitations (no nested-bracket-aware comma splitting, no
//! multi-line signatures) instead of spreading raw capture groups through
//! the reconciliation logic.

/// One function definition captured from source text, together with the
/// docstring that immediately follows its signature.
///
/// Produced once per match during a file check and consumed immediately by
/// the annotation and docstring parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Function name.
    pub name: String,
    /// Raw text between the signature's parentheses, untrimmed.
    pub raw_params: String,
    /// Docstring body without the triple-quote delimiters.
    pub raw_docstring: String,
}

/// Insertion-ordered mapping from parameter name to type string.
///
/// Both the declared annotations and the documented arguments are collected
/// into this type so the reconciler compares like with like. Duplicate names
/// follow last-write-wins semantics: the value is replaced in place and the
/// original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: Vec<(String, String)>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name→type pair, overwriting any existing entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        let name = name.into();
        let ty = ty.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = ty,
            None => self.entries.push((name, ty)),
        }
    }

    /// Looks up the type recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }
}

impl FromIterator<(String, String)> for TypeMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, ty) in iter {
            map.insert(name, ty);
        }
        map
    }
}
