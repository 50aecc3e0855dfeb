//! Content-idea generation step (PRD-31).

use copyforge_services::strategy::StrategyRequest;
use copyforge_services::StrategyService;

use crate::error::WizardError;
use crate::session::WizardSession;

/// Submit the idea config to the strategy service and load the results.
///
/// Validation runs before any network call; a blank idea or empty medium
/// selection aborts with a validation error and no request is issued. On
/// success the response's content pieces become the new working set
/// (replacing any prior set) and the wizard advances one step. On failure
/// the session is untouched: the step stays put and no partial data from
/// the failed attempt is retained.
pub async fn generate_ideas(
    session: &mut WizardSession,
    strategy: &dyn StrategyService,
) -> Result<(), WizardError> {
    session.config.validate()?;
    session.date_range.validate()?;

    let request = StrategyRequest::from_config(&session.config, &session.date_range, &session.user_id);
    tracing::info!(
        session_id = %session.id,
        content_types = %request.content_types,
        pieces = request.num_content_types,
        "Requesting content ideas"
    );

    let pieces = strategy.generate_ideas(&request).await.map_err(|e| {
        tracing::error!(session_id = %session.id, error = %e, "Idea generation failed");
        e
    })?;

    tracing::info!(session_id = %session.id, count = pieces.len(), "Content ideas generated");
    session.replace_pieces(pieces);
    session.advance_step();
    Ok(())
}
