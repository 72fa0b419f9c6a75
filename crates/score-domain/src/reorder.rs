//! Pure reordering helpers.
//!
//! A drag gesture in any front end boils down to "take the row at one index,
//! drop it at another". These functions turn that gesture, or an explicit id
//! order, into a new ordered list without touching controller state.

use crate::row::{Row, RowId};
use score_core::{ScoreError, ScoreResult};
use std::collections::HashSet;

/// True when `candidate` holds exactly the rows of `current` (by id), each once.
pub fn is_permutation(current: &[Row], candidate: &[Row]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let known: HashSet<RowId> = current.iter().map(Row::id).collect();
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate
        .iter()
        .all(|row| known.contains(&row.id()) && seen.insert(row.id()))
}

/// Moves the row at `from` so it ends up at `to`; `to` past the end means last.
pub fn move_row(current: &[Row], from: usize, to: usize) -> Option<Vec<Row>> {
    if from >= current.len() {
        return None;
    }
    let mut rows = current.to_vec();
    let row = rows.remove(from);
    let to = to.min(rows.len());
    rows.insert(to, row);
    Some(rows)
}

/// Builds the permutation of `current` named by `ids`.
pub fn order_by_ids(current: &[Row], ids: &[RowId]) -> ScoreResult<Vec<Row>> {
    if ids.len() != current.len() {
        return Err(ScoreError::InvalidReorder(format!(
            "expected {} ids, got {}",
            current.len(),
            ids.len()
        )));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .map(|id| {
            if !seen.insert(*id) {
                return Err(ScoreError::InvalidReorder(format!("duplicate row id {}", id)));
            }
            current
                .iter()
                .find(|row| row.id() == *id)
                .cloned()
                .ok_or_else(|| ScoreError::InvalidReorder(format!("unknown row id {}", id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(names: &[&str]) -> Vec<Row> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Row::new(i as RowId + 1, name.to_string()))
            .collect()
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(Row::text).collect()
    }

    #[test]
    fn test_move_down() {
        let current = rows(&["a", "b", "c", "d"]);
        let moved = move_row(&current, 0, 2).unwrap();
        assert_eq!(names(&moved), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up() {
        let current = rows(&["a", "b", "c", "d"]);
        let moved = move_row(&current, 3, 1).unwrap();
        assert_eq!(names(&moved), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_past_end_clamps() {
        let current = rows(&["a", "b", "c"]);
        let moved = move_row(&current, 0, 99).unwrap();
        assert_eq!(names(&moved), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let current = rows(&["a"]);
        assert!(move_row(&current, 1, 0).is_none());
        assert!(move_row(&[], 0, 0).is_none());
    }

    #[test]
    fn test_moved_list_is_permutation() {
        let current = rows(&["a", "b", "c"]);
        let moved = move_row(&current, 2, 0).unwrap();
        assert!(is_permutation(&current, &moved));
    }

    #[test]
    fn test_is_permutation_rejects() {
        let current = rows(&["a", "b"]);
        let shorter = vec![current[0].clone()];
        let duplicated = vec![current[0].clone(), current[0].clone()];
        let foreign = vec![current[0].clone(), Row::new(99, "z".to_string())];
        assert!(!is_permutation(&current, &shorter));
        assert!(!is_permutation(&current, &duplicated));
        assert!(!is_permutation(&current, &foreign));
    }

    #[test]
    fn test_order_by_ids() {
        let current = rows(&["a", "b", "c"]);
        let ordered = order_by_ids(&current, &[3, 1, 2]).unwrap();
        assert_eq!(names(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_order_by_ids_errors() {
        let current = rows(&["a", "b"]);
        assert!(matches!(
            order_by_ids(&current, &[1]),
            Err(ScoreError::InvalidReorder(_))
        ));
        assert!(matches!(
            order_by_ids(&current, &[1, 1]),
            Err(ScoreError::InvalidReorder(_))
        ));
        assert!(matches!(
            order_by_ids(&current, &[1, 7]),
            Err(ScoreError::InvalidReorder(_))
        ));
    }
}
