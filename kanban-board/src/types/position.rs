//! Drop positions for ordered id lists.

use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where a moved item lands in its destination list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropHint<Id> {
    /// Immediately before the given item
    Before(Id),
    /// At the end of the list
    Append,
}

impl<Id> Default for DropHint<Id> {
    fn default() -> Self {
        Self::Append
    }
}

impl<Id> DropHint<Id> {
    /// The "before" target, if any
    pub fn target(&self) -> Option<&Id> {
        match self {
            Self::Before(id) => Some(id),
            Self::Append => None,
        }
    }
}

impl<Id: PartialEq + Display> DropHint<Id> {
    /// Resolve the insertion index in `list`.
    ///
    /// `list` must already have the moved item removed.
    pub fn insert_index(&self, list: &[Id], list_name: &str) -> Result<usize> {
        match self {
            Self::Append => Ok(list.len()),
            Self::Before(target) => list.iter().position(|id| id == target).ok_or_else(|| {
                KanbanError::DropTargetNotFound {
                    target: target.to_string(),
                    list: list_name.to_string(),
                }
            }),
        }
    }
}

/// Move `item` within `list` according to `hint`.
///
/// Either the whole move applies or `list` is left untouched.
pub(crate) fn relocate<Id>(
    list: &mut Vec<Id>,
    item: &Id,
    hint: &DropHint<Id>,
    list_name: &str,
) -> Result<()>
where
    Id: PartialEq + Clone + Display,
{
    if hint.target() == Some(item) {
        return Err(KanbanError::self_reference(item));
    }
    let from = list
        .iter()
        .position(|id| id == item)
        .ok_or_else(|| KanbanError::DropTargetNotFound {
            target: item.to_string(),
            list: list_name.to_string(),
        })?;

    let mut reordered = list.clone();
    let moved = reordered.remove(from);
    let to = hint.insert_index(&reordered, list_name)?;
    reordered.insert(to, moved);
    *list = reordered;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_index() {
        let list = ids(&["a", "b", "c"]);
        assert_eq!(DropHint::Append.insert_index(&list, "l").unwrap(), 3);
        assert_eq!(
            DropHint::Before("b".to_string())
                .insert_index(&list, "l")
                .unwrap(),
            1
        );
        assert!(matches!(
            DropHint::Before("z".to_string()).insert_index(&list, "l"),
            Err(KanbanError::DropTargetNotFound { .. })
        ));
    }

    #[test]
    fn test_relocate_backwards_and_forwards() {
        let mut list = ids(&["a", "b", "c", "d"]);
        relocate(&mut list, &"d".to_string(), &DropHint::Before("b".into()), "l").unwrap();
        assert_eq!(list, ids(&["a", "d", "b", "c"]));

        // Index is computed after removal, so "before c" from position 0 lands after b
        let mut list = ids(&["a", "b", "c"]);
        relocate(&mut list, &"a".to_string(), &DropHint::Before("c".into()), "l").unwrap();
        assert_eq!(list, ids(&["b", "a", "c"]));

        let mut list = ids(&["a", "b", "c"]);
        relocate(&mut list, &"a".to_string(), &DropHint::Append, "l").unwrap();
        assert_eq!(list, ids(&["b", "c", "a"]));
    }

    #[test]
    fn test_relocate_failures_leave_list_untouched() {
        let mut list = ids(&["a", "b"]);
        let err = relocate(&mut list, &"a".to_string(), &DropHint::Before("a".into()), "l");
        assert!(matches!(err, Err(KanbanError::SelfReference { .. })));

        let err = relocate(&mut list, &"a".to_string(), &DropHint::Before("x".into()), "l");
        assert!(matches!(err, Err(KanbanError::DropTargetNotFound { .. })));

        let err = relocate(&mut list, &"x".to_string(), &DropHint::Append, "l");
        assert!(err.is_err());
        assert_eq!(list, ids(&["a", "b"]));
    }

    #[test]
    fn test_hint_serialization() {
        let hint: DropHint<String> = DropHint::Before("task-3".into());
        assert_eq!(
            serde_json::to_value(&hint).unwrap(),
            serde_json::json!({"before": "task-3"})
        );
        let append: DropHint<String> = serde_json::from_str("\"append\"").unwrap();
        assert_eq!(append, DropHint::Append);
    }
}
