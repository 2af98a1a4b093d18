//! Generator parameter validation.
//!
//! This module provides the range checks shared by every generator and the
//! extraction of integer parameters from loosely-typed parameter maps.

use std::collections::BTreeMap;

use crate::error::TopologyError;
use crate::topology::types::ParamValue;

/// Validate that `value >= min` and convert it to a node count or index
///
/// # Arguments
/// * `param` - Name of the parameter, used in the error
/// * `value` - The value supplied by the caller
/// * `min` - Smallest accepted value
/// * `reason` - Message attached to the error when the check fails
///
/// # Returns
/// * `Ok(usize)` if the value is accepted
/// * `Err(TopologyError::InvalidParameter)` otherwise
///
/// # Examples
/// ```
/// use simtopo::utils::validation::require_at_least;
///
/// assert_eq!(require_at_least("n", 4, 1, "n must be positive").unwrap(), 4);
/// assert!(require_at_least("n", 0, 1, "n must be positive").is_err());
/// ```
pub fn require_at_least(
    param: &'static str,
    value: i64,
    min: i64,
    reason: &str,
) -> Result<usize, TopologyError> {
    if value < min {
        return Err(TopologyError::invalid(param, value, reason));
    }
    to_usize(param, value)
}

/// Validate that `min <= value <= max` and convert it to `usize`
///
/// # Examples
/// ```
/// use simtopo::utils::validation::require_in_range;
///
/// assert_eq!(require_in_range("r", 3, 1, 15, "out of range").unwrap(), 3);
/// assert!(require_in_range("r", 16, 1, 15, "out of range").is_err());
/// ```
pub fn require_in_range(
    param: &'static str,
    value: i64,
    min: i64,
    max: i64,
    reason: &str,
) -> Result<usize, TopologyError> {
    if value < min || value > max {
        return Err(TopologyError::invalid(param, value, reason));
    }
    to_usize(param, value)
}

/// Largest node or edge count a generator will build
pub const MAX_GRAPH_SIZE: usize = u32::MAX as usize;

/// Validate that a topology of `nodes` nodes and `edges` edges can be built
///
/// `None` stands for a count that overflowed while it was computed. Both are
/// reported as an `InvalidParameter` on `param`, the parameter driving the
/// size.
///
/// # Examples
/// ```
/// use simtopo::utils::validation::{require_buildable, MAX_GRAPH_SIZE};
///
/// assert_eq!(require_buildable("n", 8, Some(9), Some(8)).unwrap(), 9);
/// assert!(require_buildable("m", 62, Some(MAX_GRAPH_SIZE + 1), Some(0)).is_err());
/// assert!(require_buildable("n", 8, Some(9), None).is_err());
/// ```
pub fn require_buildable(
    param: &'static str,
    value: i64,
    nodes: Option<usize>,
    edges: Option<usize>,
) -> Result<usize, TopologyError> {
    match (nodes, edges) {
        (Some(nodes), Some(edges)) if nodes <= MAX_GRAPH_SIZE && edges <= MAX_GRAPH_SIZE => Ok(nodes),
        _ => Err(TopologyError::invalid(
            param,
            value,
            format!("topology would exceed {} nodes or edges", MAX_GRAPH_SIZE),
        )),
    }
}

fn to_usize(param: &'static str, value: i64) -> Result<usize, TopologyError> {
    usize::try_from(value)
        .map_err(|_| TopologyError::invalid(param, value, "value does not fit the platform word size"))
}

/// Fetch a required integer parameter from a parameter map
///
/// A missing value or a value of any other type is a type mismatch.
pub fn int_param(params: &BTreeMap<String, ParamValue>, name: &str) -> Result<i64, TopologyError> {
    match params.get(name) {
        Some(value) => value_as_int(name, value),
        None => Err(TopologyError::type_mismatch(name, "missing required argument")),
    }
}

/// Fetch an optional integer parameter, falling back to `default`
pub fn int_param_or(
    params: &BTreeMap<String, ParamValue>,
    name: &str,
    default: i64,
) -> Result<i64, TopologyError> {
    match params.get(name) {
        Some(value) => value_as_int(name, value),
        None => Ok(default),
    }
}

fn value_as_int(name: &str, value: &ParamValue) -> Result<i64, TopologyError> {
    match value {
        ParamValue::Int(v) => Ok(*v),
        other => Err(TopologyError::type_mismatch(name, format!("found {}", other))),
    }
}

/// Reject parameters the generator does not take
pub fn reject_unexpected_params(
    params: &BTreeMap<String, ParamValue>,
    accepted: &[&str],
) -> Result<(), TopologyError> {
    match params.keys().find(|key| !accepted.contains(&key.as_str())) {
        Some(key) => Err(TopologyError::type_mismatch(
            key.as_str(),
            format!("unexpected argument, accepted arguments are {:?}", accepted),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Helper to build a parameter map
    fn params(entries: &[(&str, ParamValue)]) -> BTreeMap<String, ParamValue> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_require_at_least() {
        assert_eq!(require_at_least("n", 1, 1, "positive").unwrap(), 1);
        assert_eq!(require_at_least("k", 7, 2, "> 1").unwrap(), 7);

        let err = require_at_least("n", -3, 1, "n argument must be a positive integer").unwrap_err();
        assert_eq!(
            err,
            TopologyError::InvalidParameter {
                param: "n".to_string(),
                value: -3,
                reason: "n argument must be a positive integer".to_string(),
            }
        );
    }

    #[test]
    fn test_require_in_range_bounds_are_inclusive() {
        assert!(require_in_range("r", 1, 1, 3, "range").is_ok());
        assert!(require_in_range("r", 3, 1, 3, "range").is_ok());
        assert!(require_in_range("r", 0, 1, 3, "range").is_err());
        assert!(require_in_range("r", 4, 1, 3, "range").is_err());
    }

    #[test]
    fn test_require_buildable_limits() {
        assert_eq!(require_buildable("n", 1, Some(1), Some(0)).unwrap(), 1);
        assert!(require_buildable("n", 1, Some(MAX_GRAPH_SIZE), Some(MAX_GRAPH_SIZE)).is_ok());

        let err = require_buildable("m", 40, Some(MAX_GRAPH_SIZE + 1), Some(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.param(), "m");

        let err = require_buildable("r", 9, Some(512), None).unwrap_err();
        assert_eq!(err.param(), "r");
        assert!(require_buildable("n", 3, None, Some(2)).is_err());
    }

    #[test]
    fn test_int_param() {
        let map = params(&[("n", ParamValue::Int(5)), ("x", ParamValue::Float(2.5))]);
        assert_eq!(int_param(&map, "n").unwrap(), 5);

        let err = int_param(&map, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.param(), "x");

        let err = int_param(&map, "k").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_int_param_or_default() {
        let map = params(&[("m", ParamValue::Int(3))]);
        assert_eq!(int_param_or(&map, "r", 1).unwrap(), 1);

        let map = params(&[("r", ParamValue::Text("two".to_string()))]);
        assert_eq!(int_param_or(&map, "r", 1).unwrap_err().kind(), ErrorKind::TypeMismatch);

        let map = params(&[("r", ParamValue::Bool(true))]);
        assert!(int_param_or(&map, "r", 1).is_err());
    }

    #[test]
    fn test_reject_unexpected_params() {
        let map = params(&[("n", ParamValue::Int(5))]);
        assert!(reject_unexpected_params(&map, &["n"]).is_ok());

        let map = params(&[("n", ParamValue::Int(5)), ("depth", ParamValue::Int(2))]);
        let err = reject_unexpected_params(&map, &["n"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.param(), "depth");
    }
}
