//src/registry.rs
//
// Order-preserving, case-insensitively de-duplicated store of exercise
// names. Names arrive either typed into a sheet row (committed on blur)
// or through bulk import; the latter are additionally tracked in the
// imported set so they can be listed and deleted from the import surface.

/// Exercise-name store backing autocomplete.
///
/// Invariant: `imported` is a case-insensitive subset of `all`. The
/// first-inserted casing of a name is the one retained.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    all: Vec<String>,
    imported: Vec<String>,
}

fn contains_ci(names: &[String], lower: &str) -> bool {
    names.iter().any(|n| n.to_lowercase() == lower)
}

impl NameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All known names, in insertion order.
    #[must_use]
    pub fn all_names(&self) -> &[String] {
        &self.all
    }

    /// Names that arrived via bulk import, in insertion order.
    #[must_use]
    pub fn imported_names(&self) -> &[String] {
        &self.imported
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Records a typed name. Trims the input; empty and case-insensitive
    /// duplicates are ignored. Typed names never enter the imported set.
    pub fn add_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return;
        }
        if !contains_ci(&self.all, &trimmed.to_lowercase()) {
            self.all.push(trimmed.to_string());
        }
    }

    /// Records a batch of imported names, first occurrence of a case
    /// variant winning, and returns how many were new to the registry.
    pub fn add_names_bulk<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let lower = trimmed.to_lowercase();
            if contains_ci(&self.all, &lower) {
                continue;
            }
            self.all.push(trimmed.to_string());
            if !contains_ci(&self.imported, &lower) {
                self.imported.push(trimmed.to_string());
            }
            added += 1;
        }
        added
    }

    /// Removes an imported name, case-insensitively, from both the
    /// imported set and the autocomplete pool. Provenance is not
    /// retained once merged, so the name disappears entirely.
    pub fn remove_imported_name(&mut self, name: &str) {
        let lower = name.trim().to_lowercase();
        self.all.retain(|n| n.to_lowercase() != lower);
        self.imported.retain(|n| n.to_lowercase() != lower);
    }

    /// Batch removal; the removal set is de-duplicated case-insensitively
    /// before being applied.
    pub fn remove_imported_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets: Vec<String> = Vec::new();
        for name in names {
            let lower = name.as_ref().trim().to_lowercase();
            if !lower.is_empty() && !targets.contains(&lower) {
                targets.push(lower);
            }
        }
        self.all.retain(|n| !targets.contains(&n.to_lowercase()));
        self.imported.retain(|n| !targets.contains(&n.to_lowercase()));
    }

    /// Removes every imported name in one call, typed names surviving.
    pub fn remove_all_imported(&mut self) {
        let targets: Vec<String> = self.imported.iter().map(|n| n.to_lowercase()).collect();
        self.all.retain(|n| !targets.contains(&n.to_lowercase()));
        self.imported.clear();
    }

    /// Case-insensitive substring match over the autocomplete pool, in
    /// registry order. An empty (or all-whitespace) query matches
    /// everything.
    pub fn similarity_search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> {
        let q = query.trim().to_lowercase();
        self.all
            .iter()
            .map(String::as_str)
            .filter(move |n| q.is_empty() || n.to_lowercase().contains(&q))
    }
}
