//! Project selection and deferred creation (PRD-33).
//!
//! The user either picks an existing project or types a new name. A new
//! project is **not** created when selected; creation is deferred to the
//! moment final generation is invoked, so abandoning the wizard never
//! leaves an orphaned project behind. If creation fails at that point the
//! whole generation aborts before any content is generated.

use serde::{Deserialize, Serialize};

use copyforge_services::projects::CreateProjectRequest;
use copyforge_services::ProjectService;

use crate::error::WizardError;

/// Description attached to projects created from the wizard.
const WIZARD_PROJECT_DESCRIPTION: &str = "Created from the content wizard";

/// The user's project choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectSelection {
    /// An existing project, referenced by its backend id.
    Existing { id: String },
    /// A project that does not exist yet; created at final generation.
    New { name: String },
}

/// Resolve a selection into a real backend project id.
///
/// `Existing` resolves without any network call. `New` issues exactly one
/// creation call; the error from a failed creation propagates so the
/// caller aborts before generating content.
pub async fn resolve_project(
    selection: &ProjectSelection,
    projects: &dyn ProjectService,
    user_id: &str,
) -> Result<String, WizardError> {
    match selection {
        ProjectSelection::Existing { id } => Ok(id.clone()),
        ProjectSelection::New { name } => {
            tracing::info!(name = %name, "Creating project on demand");
            let request = CreateProjectRequest {
                name: name.clone(),
                description: WIZARD_PROJECT_DESCRIPTION.to_string(),
                user_id: user_id.to_string(),
            };
            let id = projects.create_project(&request).await?;
            Ok(id)
        }
    }
}
