use crate::models::{Dataset, VocabEntry};

/// Case-insensitive substring match on term or translation. An empty filter
/// matches everything.
pub fn matches_filter(entry: &VocabEntry, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    entry.term.to_lowercase().contains(&needle)
        || entry.translation.to_lowercase().contains(&needle)
}

/// Dataset positions of the entries shown for `filter`, in dataset order.
pub fn filter_indices(dataset: &Dataset, filter: &str) -> Vec<usize> {
    dataset
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches_filter(entry, filter))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub filter: String,
    /// Position within the filtered cards, not the dataset
    pub selected: usize,
    /// Cards per grid row as of the last draw
    pub columns: usize,
    /// First grid row drawn
    pub scroll_row: usize,
}

impl ListState {
    pub fn visible(&self, dataset: &Dataset) -> Vec<usize> {
        filter_indices(dataset, &self.filter)
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.reset_selection();
    }

    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.filter.pop().is_some() {
            self.reset_selection();
            true
        } else {
            false
        }
    }

    /// Returns false when the filter was already empty.
    pub fn clear_filter(&mut self) -> bool {
        if self.filter.is_empty() {
            return false;
        }
        self.filter.clear();
        self.reset_selection();
        true
    }

    pub fn move_selection(&mut self, delta: isize, visible_len: usize) {
        if visible_len == 0 {
            self.selected = 0;
            return;
        }
        let max = visible_len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    /// Moves one grid row up (`down == false`) or down.
    pub fn move_row(&mut self, down: bool, visible_len: usize) {
        let step = self.columns.max(1) as isize;
        self.move_selection(if down { step } else { -step }, visible_len);
    }

    pub fn selected_entry<'a>(&self, dataset: &'a Dataset) -> Option<&'a VocabEntry> {
        self.visible(dataset)
            .get(self.selected)
            .and_then(|&i| dataset.get(i))
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            VocabEntry::new("Cat Crossing", "/kæt/", "猫出没", "img/cat.png"),
            VocabEntry::new("Stop", "/stɒp/", "停车", "img/stop.png"),
            VocabEntry::new("Education", "/ˌedʒuˈkeɪʃn/", "教育", "img/school.png"),
            VocabEntry::new("Deer", "/dɪə/", "Wildcat zone", "img/deer.png"),
            VocabEntry::new("Yield", "/jiːld/", "让行", "img/yield.png"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let dataset = sample();
        assert_eq!(filter_indices(&dataset, ""), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_cat_matches_term_and_translation() {
        let dataset = sample();
        // "Education" contains "cat", "Wildcat zone" matches through the translation
        assert_eq!(filter_indices(&dataset, "cat"), vec![0, 2, 3]);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_fields() {
        let dataset = sample();
        assert_eq!(filter_indices(&dataset, "CAT"), vec![0, 2, 3]);
        assert_eq!(filter_indices(&dataset, "WILD"), vec![3]);
    }

    #[test]
    fn test_filter_matches_translation_script() {
        let dataset = sample();
        assert_eq!(filter_indices(&dataset, "停"), vec![1]);
        assert!(filter_indices(&dataset, "zebra").is_empty());
    }

    #[test]
    fn test_visible_set_equals_matching_subset() {
        let dataset = sample();
        for filter in ["", "a", "st", "e", "让", "xyz", "D"] {
            let expected: Vec<usize> = (0..dataset.len())
                .filter(|&i| {
                    let e = &dataset[i];
                    filter.is_empty()
                        || e.term.to_lowercase().contains(&filter.to_lowercase())
                        || e.translation.to_lowercase().contains(&filter.to_lowercase())
                })
                .collect();
            assert_eq!(filter_indices(&dataset, filter), expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_typing_resets_selection() {
        let dataset = sample();
        let mut state = ListState {
            selected: 3,
            scroll_row: 1,
            ..Default::default()
        };
        for c in "sto".chars() {
            state.push_char(c);
        }
        assert_eq!(state.selected, 0);
        assert_eq!(state.scroll_row, 0);
        assert_eq!(state.selected_entry(&dataset).unwrap().term, "Stop");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut state = ListState::default();
        assert!(!state.backspace());
        state.push_char('c');
        state.push_char('a');
        assert!(state.backspace());
        assert_eq!(state.filter, "c");
        assert!(state.clear_filter());
        assert!(!state.clear_filter());
    }

    #[test]
    fn test_move_selection_is_clamped() {
        let mut state = ListState {
            columns: 2,
            ..Default::default()
        };
        state.move_selection(-1, 5);
        assert_eq!(state.selected, 0);
        state.move_row(true, 5);
        assert_eq!(state.selected, 2);
        state.move_row(true, 5);
        state.move_row(true, 5);
        assert_eq!(state.selected, 4);
        state.move_selection(1, 0);
        assert_eq!(state.selected, 0);
    }
}
