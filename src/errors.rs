use crate::models::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no header matches any alias for the {field} column")]
pub struct HeaderNotFoundError {
    pub field: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing value for the {0} column")]
    MissingField(Field),

    #[error("{field} value '{raw}' is not a number")]
    InvalidNumber { field: Field, raw: String },

    #[error("weight is zero, price per unit is undefined")]
    DivisionByZero,

    #[error("{field} must be greater than zero")]
    NonPositive { field: Field },
}
