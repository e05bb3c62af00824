use std::collections::HashMap;

/// Token to occurrence count. Built once by [`count_tokens`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

pub fn count_tokens<'a, I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = &'a str>,
{
    let counts = tokens
        .into_iter()
        .fold(HashMap::new(), |mut acc: HashMap<String, usize>, token| {
            match acc.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    acc.insert(token.to_owned(), 1);
                }
            }
            acc
        });

    FrequencyMap { counts }
}
