use indexmap::IndexMap;

/// Table rows keyed by cleaned, original-cased oil name.
///
/// Iteration follows first-insertion order. Inserting a name that is already
/// present replaces its value in place, so a later duplicate row wins on
/// content while the name keeps the position of its first appearance.
#[derive(Debug, Clone)]
pub struct NameIndex<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for NameIndex<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> NameIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value when `name` was already indexed.
    pub fn insert(&mut self, name: String, value: T) -> Option<T> {
        self.entries.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> FromIterator<(String, T)> for NameIndex<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Case-insensitive substring containment in either direction.
///
/// An empty name is contained in every other name.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    b.contains(&a) || a.contains(&b)
}

/// Resolves a free-form oil name against the keys of a [`NameIndex`].
pub struct FuzzyMatcher<'a, T> {
    index: &'a NameIndex<T>,
}

impl<'a, T: 'a> FuzzyMatcher<'a, T> {
    pub fn new(index: &'a NameIndex<T>) -> Self {
        Self { index }
    }

    /// Every matching entry, in index order.
    ///
    /// There is no scoring: callers that apply each match in turn end up with
    /// whichever key was indexed last.
    pub fn matches(&self, name: &str) -> impl Iterator<Item = (&'a str, &'a T)> + 'a {
        let name = name.to_string();
        self.index.iter().filter(move |(key, _)| names_match(&name, key))
    }
}
