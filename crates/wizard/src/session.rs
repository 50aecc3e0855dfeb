//! Wizard session state (PRD-31).
//!
//! One [`WizardSession`] exists per wizard mount and owns everything the
//! four steps read and write: the idea config, the draft working set with
//! per-piece edit flags, the project/profile selection, the finalized
//! items, and the batch phase. The session is created on mount and
//! discarded when the user leaves the wizard; dropping it drops all
//! content.
//!
//! Working-set updates from network responses are atomic: the whole list
//! is replaced in one assignment, never mutated incrementally, so an
//! in-flight edit can never interleave with a response being applied.

use uuid::Uuid;

use copyforge_core::batch::{self, BatchPhase};
use copyforge_core::content::{BlogPostContent, OutlineTree};
use copyforge_core::editor::EditorState;
use copyforge_core::error::CoreError;
use copyforge_core::idea::{ContentIdeaConfig, DateRange};
use copyforge_core::outline::{self, EditFlags, Field, OutlineAction};
use copyforge_core::steps::WizardStep;

use crate::resolve::ProjectSelection;

/// One draft piece together with its edit-mode flags.
#[derive(Debug, Clone, Default)]
pub struct PieceEditor {
    pub piece: BlogPostContent,
    pub flags: EditFlags,
}

/// All state owned by one wizard session.
#[derive(Debug)]
pub struct WizardSession {
    /// Session key, generated at mount.
    pub id: Uuid,
    /// The authenticated user driving the wizard.
    pub user_id: String,
    step: WizardStep,
    /// First-step configuration.
    pub config: ContentIdeaConfig,
    /// Optional publication window for idea generation.
    pub date_range: DateRange,
    pieces: Vec<PieceEditor>,
    /// Selected project, if any. Resolved lazily at final generation.
    pub project: Option<ProjectSelection>,
    /// Selected writing-profile id, if any.
    pub profile_id: Option<String>,
    items: Vec<EditorState>,
    phase: BatchPhase,
}

impl WizardSession {
    /// Create a fresh session on wizard mount.
    pub fn new(user_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            step: WizardStep::IdeaEntry,
            config: ContentIdeaConfig::default(),
            date_range: DateRange::default(),
            pieces: Vec::new(),
            project: None,
            profile_id: None,
            items: Vec::new(),
            phase: BatchPhase::Idle,
        }
    }

    // -- step navigation --

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advance one step (clamped at the last).
    pub fn advance_step(&mut self) {
        self.step = self.step.advance();
    }

    /// Go back one step (floored at the first). Earlier state is preserved
    /// as-is; nothing captured by later steps is migrated or cleared.
    pub fn back_step(&mut self) {
        self.step = self.step.back();
    }

    /// Jump directly to a 1-based step number, rejecting out-of-range
    /// targets.
    pub fn jump_step(&mut self, n: u8) -> Result<(), CoreError> {
        self.step = WizardStep::from_number(n)?;
        Ok(())
    }

    // -- draft working set --

    pub fn pieces(&self) -> &[PieceEditor] {
        &self.pieces
    }

    /// Replace the whole draft working set in one assignment.
    ///
    /// Any prior drafts and their edit flags are dropped; this is the only
    /// way a network response enters the session.
    pub fn replace_pieces(&mut self, pieces: Vec<BlogPostContent>) {
        self.pieces = pieces
            .into_iter()
            .map(|piece| PieceEditor {
                piece,
                flags: EditFlags::default(),
            })
            .collect();
    }

    /// Apply one outline action to the draft at `index`, propagating the
    /// result to the owning record immediately.
    pub fn apply_outline(&mut self, index: usize, action: &OutlineAction) -> Result<(), CoreError> {
        let editor = self.piece_editor_mut(index)?;
        editor.piece = outline::apply_with_flags(&editor.piece, &mut editor.flags, action)?;
        Ok(())
    }

    /// Replace the outline tree of the draft at `index` wholesale.
    ///
    /// Used by the plain-text outline editor. Structural indices may have
    /// shifted arbitrarily, so all open edit flags on the piece are cleared.
    pub fn replace_outline(&mut self, index: usize, tree: OutlineTree) -> Result<(), CoreError> {
        let editor = self.piece_editor_mut(index)?;
        editor.piece.outline = vec![tree];
        editor.flags = EditFlags::default();
        Ok(())
    }

    /// Toggle edit mode for one field of the draft at `index`.
    pub fn toggle_edit(&mut self, index: usize, field: Field) -> Result<(), CoreError> {
        self.piece_editor_mut(index)?.flags.toggle(field);
        Ok(())
    }

    fn piece_editor_mut(&mut self, index: usize) -> Result<&mut PieceEditor, CoreError> {
        let len = self.pieces.len();
        self.pieces.get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!(
                "No content piece at index {index} (session has {len})"
            ))
        })
    }

    // -- finalized items --

    pub fn items(&self) -> &[EditorState] {
        &self.items
    }

    /// Replace the finalized-item list in one assignment.
    pub fn replace_items(&mut self, items: Vec<EditorState>) {
        self.items = items;
    }

    /// Mutable access to a finalized item by its client id.
    pub fn item_mut(&mut self, id: Uuid) -> Result<&mut EditorState, CoreError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "EditorState",
                id: id.to_string(),
            })
    }

    // -- batch phase --

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    /// Move the batch phase through the state machine, rejecting invalid
    /// transitions (e.g. starting a second batch while one is saving).
    pub fn set_phase(&mut self, next: BatchPhase) -> Result<(), CoreError> {
        if !batch::can_transition(self.phase, next) {
            return Err(CoreError::Conflict(format!(
                "Invalid batch phase transition: {:?} -> {next:?}",
                self.phase
            )));
        }
        self.phase = next;
        Ok(())
    }
}
