use std::collections::HashSet;

/// Ordered list where the first occurrence of a string wins.
#[derive(Debug, Default)]
pub struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn push(&mut self, item: &str) {
        if self.seen.insert(item.to_string()) {
            self.items.push(item.to_string());
        }
    }

    pub fn extend<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        for item in items {
            self.push(item);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Case-insensitive membership test for free-form symptom labels.
pub fn mentions<S: AsRef<str>>(labels: &[S], name: &str) -> bool {
    labels
        .iter()
        .any(|label| label.as_ref().trim().eq_ignore_ascii_case(name))
}
