// Event types for async communication

use crate::api::{ApiError, RephraseReply};
use crate::models::SubmissionId;

#[derive(Debug)]
pub enum AppEvent {
    /// A rephrase call finished, one way or another
    RephraseSettled {
        id: SubmissionId,
        original: String,
        outcome: Result<RephraseReply, ApiError>,
    },
}
