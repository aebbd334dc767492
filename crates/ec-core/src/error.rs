use thiserror::Error;

pub type EcResult<T> = Result<T, EcError>;

#[derive(Error, Debug)]
pub enum EcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
