//! Outline editing reducer and per-field edit-mode flags (PRD-32).
//!
//! All outline mutations are expressed as [`OutlineAction`] values applied
//! by the pure [`apply`] function, `(state, action) -> new state`. Handlers
//! never mutate a draft in place; they replace the owning record with the
//! reducer's output so edits are visible to sibling views immediately and
//! the edit model stays trivially unit-testable.
//!
//! Ordering invariant: an edit replaces a value at its index, an add
//! appends, and a remove shifts later siblings down by one. No operation
//! reorders siblings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::content::{BlogPostContent, Section};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Which keyword list an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordList {
    Primary,
    Secondary,
}

/// A single edit to one field of a draft content piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OutlineAction {
    SetTitle { value: String },
    SetSummary { value: String },
    /// Replace the keyword at `index` in the given list.
    SetKeyword {
        list: KeywordList,
        index: usize,
        value: String,
    },
    /// Append an empty keyword to the given list.
    AddKeyword { list: KeywordList },
    /// Remove the keyword at `index`; later keywords shift down by one.
    RemoveKeyword { list: KeywordList, index: usize },
    /// Replace the outline's top-level H1 heading.
    SetHeading { value: String },
    /// Replace the H2 heading of the section at `section`.
    SetSectionHeading { section: usize, value: String },
    /// Append an empty subsection to the section at `section`.
    AddSubsection { section: usize },
    /// Replace subsection `index` within section `section`.
    SetSubsection {
        section: usize,
        index: usize,
        value: String,
    },
    /// Remove subsection `index` within section `section` only.
    RemoveSubsection { section: usize, index: usize },
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Apply one [`OutlineAction`] to a draft, returning the new draft.
///
/// Out-of-range indices are a [`CoreError::Validation`]; the input is never
/// partially modified (the function operates on a clone).
pub fn apply(piece: &BlogPostContent, action: &OutlineAction) -> Result<BlogPostContent, CoreError> {
    let mut next = piece.clone();

    match action {
        OutlineAction::SetTitle { value } => next.title = value.clone(),
        OutlineAction::SetSummary { value } => next.summary = value.clone(),

        OutlineAction::SetKeyword { list, index, value } => {
            let keywords = keyword_list_mut(&mut next, *list);
            let slot = keywords.get_mut(*index).ok_or_else(|| {
                keyword_index_error(*list, *index)
            })?;
            *slot = value.clone();
        }
        OutlineAction::AddKeyword { list } => {
            keyword_list_mut(&mut next, *list).push(String::new());
        }
        OutlineAction::RemoveKeyword { list, index } => {
            let keywords = keyword_list_mut(&mut next, *list);
            if *index >= keywords.len() {
                return Err(keyword_index_error(*list, *index));
            }
            keywords.remove(*index);
        }

        OutlineAction::SetHeading { value } => {
            next.outline_tree_mut()?.h1 = value.clone();
        }
        OutlineAction::SetSectionHeading { section, value } => {
            section_mut(&mut next, *section)?.h2 = value.clone();
        }
        OutlineAction::AddSubsection { section } => {
            section_mut(&mut next, *section)?.h3.push(String::new());
        }
        OutlineAction::SetSubsection {
            section,
            index,
            value,
        } => {
            let sec = section_mut(&mut next, *section)?;
            let slot = sec.h3.get_mut(*index).ok_or_else(|| {
                subsection_index_error(*section, *index)
            })?;
            *slot = value.clone();
        }
        OutlineAction::RemoveSubsection { section, index } => {
            let sec = section_mut(&mut next, *section)?;
            if *index >= sec.h3.len() {
                return Err(subsection_index_error(*section, *index));
            }
            sec.h3.remove(*index);
        }
    }

    Ok(next)
}

fn keyword_list_mut(piece: &mut BlogPostContent, list: KeywordList) -> &mut Vec<String> {
    match list {
        KeywordList::Primary => &mut piece.keywords.primary,
        KeywordList::Secondary => &mut piece.keywords.secondary,
    }
}

fn keyword_index_error(list: KeywordList, index: usize) -> CoreError {
    CoreError::Validation(format!("No {list:?} keyword at index {index}"))
}

fn subsection_index_error(section: usize, index: usize) -> CoreError {
    CoreError::Validation(format!(
        "No subsection at index {index} in section {section}"
    ))
}

fn section_mut(piece: &mut BlogPostContent, section: usize) -> Result<&mut Section, CoreError> {
    let tree = piece.outline_tree_mut()?;
    let len = tree.sections.len();
    tree.sections.get_mut(section).ok_or_else(|| {
        CoreError::Validation(format!("No section at index {section} (outline has {len})"))
    })
}

// ---------------------------------------------------------------------------
// Edit-mode flags
// ---------------------------------------------------------------------------

/// An editable field of a draft, used as the key for edit-mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum Field {
    Title,
    Summary,
    Keyword { list: KeywordList, index: usize },
    Heading,
    SectionHeading { section: usize },
    Subsection { section: usize, index: usize },
}

/// Per-piece edit-mode state: the set of fields currently open for editing.
///
/// Every field toggles independently; entering edit mode for one field never
/// affects another. [`EditFlags::after_action`] keeps the set consistent
/// with list mutations: an add opens the new entry, a remove closes the
/// removed entry's flag and re-indexes flags for later siblings so each flag
/// keeps tracking the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditFlags {
    editing: HashSet<Field>,
}

impl EditFlags {
    pub fn enter(&mut self, field: Field) {
        self.editing.insert(field);
    }

    pub fn exit(&mut self, field: Field) {
        self.editing.remove(&field);
    }

    pub fn toggle(&mut self, field: Field) {
        if !self.editing.remove(&field) {
            self.editing.insert(field);
        }
    }

    pub fn is_editing(&self, field: Field) -> bool {
        self.editing.contains(&field)
    }

    /// Number of fields currently open for editing.
    pub fn open_count(&self) -> usize {
        self.editing.len()
    }

    /// Update flags after the reducer applied `action` to `before`.
    ///
    /// `before` is the draft as it was when the action was dispatched (the
    /// reducer input); its list lengths determine the index appended by an
    /// add action.
    pub fn after_action(&mut self, before: &BlogPostContent, action: &OutlineAction) {
        match action {
            OutlineAction::AddKeyword { list } => {
                let index = match list {
                    KeywordList::Primary => before.keywords.primary.len(),
                    KeywordList::Secondary => before.keywords.secondary.len(),
                };
                self.enter(Field::Keyword { list: *list, index });
            }
            OutlineAction::RemoveKeyword { list, index } => {
                self.reindex_after_removal(|field| match field {
                    Field::Keyword { list: l, index: i } if l == *list => Some(i),
                    _ => None,
                }, *index, |i| Field::Keyword { list: *list, index: i });
            }
            OutlineAction::AddSubsection { section } => {
                if let Some(sec) = before
                    .outline_tree()
                    .ok()
                    .and_then(|t| t.sections.get(*section))
                {
                    self.enter(Field::Subsection {
                        section: *section,
                        index: sec.h3.len(),
                    });
                }
            }
            OutlineAction::RemoveSubsection { section, index } => {
                let section = *section;
                self.reindex_after_removal(|field| match field {
                    Field::Subsection { section: s, index: i } if s == section => Some(i),
                    _ => None,
                }, *index, move |i| Field::Subsection { section, index: i });
            }
            // Value edits do not change which fields exist.
            _ => {}
        }
    }

    /// Drop the flag at `removed` and shift flags above it down by one.
    /// Flags that `select` maps to `None` belong to other lists and are
    /// left untouched.
    fn reindex_after_removal(
        &mut self,
        select: impl Fn(Field) -> Option<usize>,
        removed: usize,
        rebuild: impl Fn(usize) -> Field,
    ) {
        let mut next = HashSet::with_capacity(self.editing.len());
        for field in self.editing.drain() {
            match select(field) {
                Some(i) if i == removed => {} // removed entry: flag is dropped
                Some(i) if i > removed => {
                    next.insert(rebuild(i - 1));
                }
                _ => {
                    next.insert(field);
                }
            }
        }
        self.editing = next;
    }
}

/// Apply an action and keep the piece's edit flags consistent with it.
///
/// Convenience wrapper used by the wizard session: reducer first, then the
/// flag adjustment keyed off the pre-action state.
pub fn apply_with_flags(
    piece: &BlogPostContent,
    flags: &mut EditFlags,
    action: &OutlineAction,
) -> Result<BlogPostContent, CoreError> {
    let next = apply(piece, action)?;
    flags.after_action(piece, action);
    Ok(next)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
