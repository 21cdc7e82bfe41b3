// Submission lifecycle: form -> remote function -> app state

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::RephraseService;
use crate::app::App;
use crate::events::AppEvent;

/// Run one full submission cycle in place.
///
/// Returns `false` without calling the service when another submission is
/// still pending.
pub async fn submit_title(app: &mut App, service: &dyn RephraseService, title: &str) -> bool {
    let Some(id) = app.begin_submission() else {
        return false;
    };

    let outcome = service.rephrase(title).await;
    app.settle(id, title.to_string(), outcome)
}

/// Start a submission for the current input on a background task.
///
/// The outcome comes back as [`AppEvent::RephraseSettled`] on `event_tx`.
pub fn spawn_submission(
    app: &mut App,
    service: Arc<dyn RephraseService>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Option<JoinHandle<()>> {
    let title = app.submittable_title()?;
    let id = app.begin_submission()?;
    let tx = event_tx.clone();

    Some(tokio::spawn(async move {
        let outcome = service.rephrase(&title).await;
        // Receiver is gone only when the UI has already shut down
        let _ = tx.send(AppEvent::RephraseSettled {
            id,
            original: title,
            outcome,
        });
    }))
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::RephraseSettled {
            id,
            original,
            outcome,
        } => {
            app.settle(id, original, outcome);
        }
    }
}
