use dioxus::prelude::*;

use mathbook_core::interaction::InteractionError;
use services::SessionError;

use crate::strings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SelectAnswer,
    AttemptFirst,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_session(err: &SessionError) -> Self {
        match err {
            SessionError::NoSelection
            | SessionError::Interaction(
                InteractionError::NoSelection | InteractionError::Evaluation(_),
            ) => Self::SelectAnswer,
            SessionError::NotAttempted => Self::AttemptFirst,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SelectAnswer => strings::SELECT_ANSWER,
            Self::AttemptFirst => strings::ATTEMPT_FIRST,
            Self::Unknown => strings::GENERIC_ERROR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
