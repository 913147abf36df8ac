use thiserror::Error;

use crate::content::ContentError;
use crate::model::ParseIdError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
