//! Final content generation step (PRD-34).

use copyforge_core::editor::EditorState;
use copyforge_core::error::CoreError;
use copyforge_core::medium;
use copyforge_services::contents::{ContentItem, CreateContentsRequest};
use copyforge_services::{ContentService, ProjectService};

use crate::error::WizardError;
use crate::resolve::{self, ProjectSelection};
use crate::session::WizardSession;

/// Generation model requested from the contents service.
const DEFAULT_MODEL: &str = "default";

/// Generate final rendered content for every draft piece.
///
/// Requires a profile and a project selection; the project is resolved
/// first (creating it on demand for a `New` selection), and a creation
/// failure aborts the whole operation before any content is generated. On
/// success the results become the finalized-item list (one [`EditorState`]
/// per input piece, keyed by a fresh client id, medium normalized to Title
/// Case) and the wizard advances. On failure no step transition occurs.
pub async fn generate_contents(
    session: &mut WizardSession,
    projects: &dyn ProjectService,
    contents: &dyn ContentService,
) -> Result<(), WizardError> {
    if session.pieces().is_empty() {
        return Err(CoreError::Validation("No content pieces to generate".to_string()).into());
    }
    let profile_id = session
        .profile_id
        .clone()
        .ok_or_else(|| CoreError::Validation("No writing profile selected".to_string()))?;
    let selection = session
        .project
        .clone()
        .ok_or_else(|| CoreError::Validation("No project selected".to_string()))?;

    // Build the request items before resolving the project, so an unknown
    // content type fails before a project gets created for nothing.
    let mut content_items = Vec::with_capacity(session.pieces().len());
    for editor in session.pieces() {
        let piece = &editor.piece;
        content_items.push(ContentItem {
            piece: piece.clone(),
            medium: piece.content_type.clone(),
            topic: piece.title.clone(),
            content_type_id: medium::content_type_id(&piece.content_type)?,
            model: DEFAULT_MODEL.to_string(),
        });
    }

    let project_id = resolve::resolve_project(&selection, projects, &session.user_id).await?;

    let request = CreateContentsRequest {
        user_id: session.user_id.clone(),
        project_id: project_id.clone(),
        profile_id,
        content_items,
    };

    tracing::info!(
        session_id = %session.id,
        project_id = %project_id,
        items = request.content_items.len(),
        "Requesting final content generation"
    );

    let results = match contents.create_contents(&request).await {
        Ok(results) => results,
        Err(e) => {
            // Known gap: a project created above is not rolled back here
            // and may end up unused.
            if matches!(selection, ProjectSelection::New { .. }) {
                tracing::warn!(
                    project_id = %project_id,
                    "Content generation failed after project creation; project may be orphaned"
                );
            }
            tracing::error!(session_id = %session.id, error = %e, "Content generation failed");
            return Err(e.into());
        }
    };

    let items: Vec<EditorState> = results
        .into_iter()
        .map(|result| {
            EditorState::new(
                result.content,
                result.content_id,
                result.topic,
                medium::title_case(&result.medium),
                project_id.clone(),
            )
        })
        .collect();

    session.replace_items(items);
    // A freshly created project is now a real one; keep the resolved id so
    // a retry of a later step never re-creates it.
    session.project = Some(ProjectSelection::Existing { id: project_id });
    session.advance_step();
    Ok(())
}
