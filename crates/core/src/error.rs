use thiserror::Error;

use crate::model::QuestionError;
use crate::model::SummaryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
