//! Word list administration commands
//!
//! Applies one change through the service, then writes the whole list back
//! to the backing file so the next run sees it.

use crate::core::Word;
use crate::error::Result;
use crate::service::{WordService, lookup_word};
use crate::store::WordStore;
use crate::store::loader::save_to_file;
use std::path::Path;

/// A single change to the stored word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Add(String),
    Rename { old: String, new: String },
    Remove(String),
}

/// Outcome of an applied edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Added(Word),
    Renamed { old: Word, new: Word },
    Removed(Word),
}

/// Result of applying an edit
pub struct EditResult {
    pub outcome: EditOutcome,
    pub total_words: usize,
}

/// Apply `edit` and persist the updated list to `store_path`
///
/// Nothing is written when the edit itself fails.
///
/// # Errors
///
/// Returns the service error for a rejected edit (`InvalidLength`,
/// `InvalidCharacters`, `DuplicateWord`, `NotFound`) or `Io` if the list
/// cannot be written.
pub fn run_edit<S: WordStore>(
    service: &WordService<S>,
    edit: &Edit,
    store_path: &Path,
) -> Result<EditResult> {
    let outcome = apply_edit(service, edit)?;

    let words = service.list();
    save_to_file(store_path, &words)?;

    Ok(EditResult {
        outcome,
        total_words: words.len(),
    })
}

/// Apply `edit` without persisting
///
/// # Errors
///
/// Returns the service error for a rejected edit.
pub fn apply_edit<S: WordStore>(service: &WordService<S>, edit: &Edit) -> Result<EditOutcome> {
    match edit {
        Edit::Add(word) => service.create(word).map(EditOutcome::Added),
        Edit::Rename { old, new } => {
            let old_word = lookup_word(old)?;
            let new_word = service.update(old, new)?;
            Ok(EditOutcome::Renamed {
                old: old_word,
                new: new_word,
            })
        }
        Edit::Remove(word) => service.delete(word).map(EditOutcome::Removed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use crate::store::loader::{load_from_file, words_from_slice};
    use tempfile::tempdir;

    fn service(words: &[&str]) -> WordService<MemoryStore> {
        WordService::new(MemoryStore::from_words(words_from_slice(words)))
    }

    #[test]
    fn add_persists_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let service = service(&["arbol"]);

        let result = run_edit(&service, &Edit::Add("roble".into()), &path).unwrap();

        assert_eq!(
            result.outcome,
            EditOutcome::Added(Word::new("ROBLE").unwrap())
        );
        assert_eq!(result.total_words, 2);
        assert_eq!(load_from_file(&path).unwrap(), service.list());
    }

    #[test]
    fn rename_reports_both_words() {
        let service = service(&["gato"]);
        let outcome = apply_edit(
            &service,
            &Edit::Rename {
                old: "gato".into(),
                new: "perro".into(),
            },
        )
        .unwrap();

        assert_eq!(
            outcome,
            EditOutcome::Renamed {
                old: Word::new("GATO").unwrap(),
                new: Word::new("PERRO").unwrap(),
            }
        );
    }

    #[test]
    fn failed_edit_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let service = service(&["arbol"]);

        let result = run_edit(&service, &Edit::Remove("ghost".into()), &path);

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn edits_on_unstorable_words_are_not_found() {
        let service = service(&["arbol"]);

        assert!(matches!(
            apply_edit(&service, &Edit::Remove("go".into())),
            Err(Error::NotFound(w)) if w == "GO"
        ));
        assert!(matches!(
            apply_edit(
                &service,
                &Edit::Rename {
                    old: "arbolitos".into(),
                    new: "roble".into(),
                }
            ),
            Err(Error::NotFound(w)) if w == "ARBOLITOS"
        ));
    }

    #[test]
    fn duplicate_add_rejected() {
        let service = service(&["test"]);
        assert!(matches!(
            apply_edit(&service, &Edit::Add("Test".into())),
            Err(Error::DuplicateWord(_))
        ));
    }
}
