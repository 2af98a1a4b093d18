//! Shared utilities: parameter validation.

pub mod validation;

pub use validation::{
    int_param, int_param_or, reject_unexpected_params, require_at_least, require_buildable, require_in_range,
    MAX_GRAPH_SIZE,
};
