//src/sheet.rs
//
// In-memory store for the load sheet: the list of dated workout tabs,
// the global exercise list shared by every tab, and one lazily
// materialized load map per tab.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Local;

use crate::loads::{compute_loads, LoadUpdate, SeriesLoad};

/// One dated workout session. `label` is the editable tab title and
/// `date` mirrors it on rename; neither is a validated calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTab {
    pub id: i64,
    pub label: String,
    pub date: String,
}

/// An exercise slot. Identity is the id, not the name; renaming keeps
/// the same id and the name may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
}

/// View row joining an exercise's current name with its load on one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRow {
    pub exercise_id: i64,
    pub exercise_name: String,
    pub load: SeriesLoad,
}

fn today_label() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Case- and accent-insensitive fold approximating pt-BR primary-strength
/// collation for the Latin-1 accents Portuguese uses.
fn collation_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

/// Blank names sort last; otherwise compare collation keys. Equal keys
/// compare `Equal` so a stable sort preserves relative order.
fn compare_rows(a: &ExerciseRow, b: &ExerciseRow) -> Ordering {
    let ka = collation_key(&a.exercise_name);
    let kb = collation_key(&b.exercise_name);
    match (ka.is_empty(), kb.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => ka.cmp(&kb),
    }
}

/// The sheet proper. All mutation goes through `&mut self`, so user
/// actions never interleave mid-update.
#[derive(Debug, Clone)]
pub struct WorkoutSheet {
    tabs: Vec<WorkoutTab>,
    exercises: Vec<Exercise>,
    // tab id -> exercise id -> load; entries materialize on first edit
    loads: HashMap<i64, HashMap<i64, SeriesLoad>>,
    selected_tab: i64,
    next_id: i64,
}

impl WorkoutSheet {
    /// Starts with a single tab labelled with today's date. The sheet is
    /// never tab-less.
    #[must_use]
    pub fn new() -> Self {
        let mut sheet = Self {
            tabs: Vec::new(),
            exercises: Vec::new(),
            loads: HashMap::new(),
            selected_tab: 0,
            next_id: 1,
        };
        sheet.add_tab();
        sheet
    }

    fn fresh_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[must_use]
    pub fn tabs(&self) -> &[WorkoutTab] {
        &self.tabs
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn selected_tab(&self) -> i64 {
        self.selected_tab
    }

    #[must_use]
    pub fn exercise_name(&self, exercise_id: i64) -> Option<&str> {
        self.exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .map(|e| e.name.as_str())
    }

    /// Changes the active tab. Unknown ids are ignored.
    pub fn select_tab(&mut self, tab_id: i64) {
        if self.tabs.iter().any(|t| t.id == tab_id) {
            self.selected_tab = tab_id;
        }
    }

    /// Appends a tab labelled with today's date and selects it.
    pub fn add_tab(&mut self) -> i64 {
        let id = self.fresh_id();
        let label = today_label();
        self.tabs.push(WorkoutTab {
            id,
            label: label.clone(),
            date: label,
        });
        self.selected_tab = id;
        id
    }

    /// Appends a tab labelled "Clone" holding a by-value copy of the
    /// source tab's load map, and selects it. A source without loads
    /// (or an unknown source) clones empty.
    pub fn clone_tab(&mut self, source_id: i64) -> i64 {
        let copied = self.loads.get(&source_id).cloned();
        let id = self.fresh_id();
        self.tabs.push(WorkoutTab {
            id,
            label: "Clone".to_string(),
            date: "Clone".to_string(),
        });
        self.selected_tab = id;
        if let Some(rows) = copied.filter(|r| !r.is_empty()) {
            self.loads.insert(id, rows);
        }
        id
    }

    /// Deletes a tab and its loads. Removing the selected tab moves the
    /// selection to the previous tab in list order (the next one when
    /// removing the first); removing the last tab recreates a default.
    pub fn remove_tab(&mut self, tab_id: i64) {
        let Some(index) = self.tabs.iter().position(|t| t.id == tab_id) else {
            return;
        };
        self.tabs.remove(index);
        self.loads.remove(&tab_id);
        if self.tabs.is_empty() {
            self.add_tab();
            return;
        }
        if self.selected_tab == tab_id {
            let fallback = if index == 0 { 0 } else { index - 1 };
            self.selected_tab = self.tabs[fallback].id;
        }
    }

    /// Sets both the label and the date of a tab.
    pub fn rename_tab(&mut self, tab_id: i64, text: &str) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) {
            tab.label = text.to_string();
            tab.date = text.to_string();
        }
    }

    /// Appends an exercise with an empty name. No tab's load map is
    /// touched; rows materialize on first load edit.
    pub fn add_exercise(&mut self) -> i64 {
        let id = self.fresh_id();
        self.exercises.push(Exercise {
            id,
            name: String::new(),
        });
        id
    }

    /// Updates the exercise's display name. The name registry is not
    /// involved here; committing a name is a separate, explicit step.
    pub fn rename_exercise(&mut self, exercise_id: i64, name: &str) {
        if let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == exercise_id) {
            exercise.name = name.to_string();
        }
    }

    /// Deletes the exercise and purges its row from every tab's map.
    pub fn remove_exercise(&mut self, exercise_id: i64) {
        self.exercises.retain(|e| e.id != exercise_id);
        for rows in self.loads.values_mut() {
            rows.remove(&exercise_id);
        }
    }

    /// Merges a partial load edit into the active tab's row for the
    /// exercise, materializing a default row first if absent. A new
    /// valid weight routes the merged result through [`compute_loads`]
    /// so warm-up and preparation stay derived; set-count-only edits do
    /// not re-trigger that derivation.
    pub fn update_load(&mut self, exercise_id: i64, update: LoadUpdate) {
        if !self.exercises.iter().any(|e| e.id == exercise_id) {
            return;
        }
        let row = self
            .loads
            .entry(self.selected_tab)
            .or_default()
            .entry(exercise_id)
            .or_default();
        if let Some(sets) = update.warmup_sets {
            row.warmup_sets = sets;
        }
        if let Some(sets) = update.preparation_sets {
            row.preparation_sets = sets;
        }
        if let Some(sets) = update.valid_sets {
            row.valid_sets = sets;
        }
        if let Some(valid) = update.valid {
            *row = compute_loads(valid, Some(row));
        }
    }

    #[must_use]
    pub fn load_for(&self, tab_id: i64, exercise_id: i64) -> SeriesLoad {
        self.loads
            .get(&tab_id)
            .and_then(|rows| rows.get(&exercise_id))
            .copied()
            .unwrap_or_default()
    }

    /// Rows for a tab, sorted by trimmed name (pt-BR collation, blank
    /// names last, stable among equals). A focused exercise is excluded
    /// from the sort and reinserted at its recorded index, clamped, so
    /// the row being typed into does not jump position per keystroke.
    #[must_use]
    pub fn visible_rows(
        &self,
        tab_id: i64,
        focused_exercise: Option<i64>,
        focus_index_hint: usize,
    ) -> Vec<ExerciseRow> {
        let mut rows: Vec<ExerciseRow> = self
            .exercises
            .iter()
            .map(|ex| ExerciseRow {
                exercise_id: ex.id,
                exercise_name: ex.name.clone(),
                load: self.load_for(tab_id, ex.id),
            })
            .collect();
        rows.sort_by(compare_rows);

        if let Some(focused_id) = focused_exercise {
            if let Some(position) = rows.iter().position(|r| r.exercise_id == focused_id) {
                let focused = rows.remove(position);
                let index = focus_index_hint.min(rows.len());
                rows.insert(index, focused);
            }
        }
        rows
    }
}

impl Default for WorkoutSheet {
    fn default() -> Self {
        Self::new()
    }
}
