use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    #[error("unknown principle id `{0}`")]
    UnknownPrinciple(String),
    #[error("principle `{principle}` has no parameter `{param}`")]
    UnknownParameter {
        principle: &'static str,
        param: String,
    },
    #[error("principle `{requested}` is not active (active: `{active}`)")]
    InactivePrinciple {
        requested: &'static str,
        active: &'static str,
    },
    #[error("value for `{param}` is not a number")]
    InvalidValue { param: String },
}

pub type LabResult<T> = Result<T, LabError>;
