//! Dynamic generator entry point.
//!
//! Configuration documents name a topology family and supply its parameters
//! as loosely-typed values. This module checks that every parameter is an
//! integer accepted by the family and forwards the call to the typed
//! generator.

use std::collections::BTreeMap;

use crate::error::TopologyError;
use crate::topology::chord::{chord_topology, DEFAULT_SUCCESSORS};
use crate::topology::dumbbell::dumbbell_topology;
use crate::topology::simple::{full_mesh_topology, line_topology, ring_topology, star_topology};
use crate::topology::tree::k_ary_tree_topology;
use crate::topology::types::{GeneratedTopology, ParamValue, TopologyKind};
use crate::utils::validation::{int_param, int_param_or, reject_unexpected_params};

/// Generate a topology of the given family from a parameter map
///
/// # Arguments
/// * `kind` - The topology family
/// * `params` - Parameter values keyed by name (`n`, `k`/`h`, `m1`/`m2`, `m`/`r`)
///
/// # Returns
/// * `Ok(GeneratedTopology)` holding an undirected graph, or a directed one for Chord
/// * `Err(TopologyError::TypeMismatch)` if a parameter is missing, unexpected or not an integer
/// * `Err(TopologyError::InvalidParameter)` if an integer is out of range
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use simtopo::topology::{generate, ParamValue, TopologyKind};
///
/// let mut params = BTreeMap::new();
/// params.insert("m".to_string(), ParamValue::Int(3));
/// let chord = generate(TopologyKind::Chord, &params).unwrap();
/// assert!(chord.is_directed());
/// assert_eq!(chord.node_count(), 8);
/// ```
pub fn generate(
    kind: TopologyKind,
    params: &BTreeMap<String, ParamValue>,
) -> Result<GeneratedTopology, TopologyError> {
    reject_unexpected_params(params, kind.parameter_names())?;

    let topology: GeneratedTopology = match kind {
        TopologyKind::Ring => ring_topology(int_param(params, "n")?)?.into(),
        TopologyKind::Line => line_topology(int_param(params, "n")?)?.into(),
        TopologyKind::Star => star_topology(int_param(params, "n")?)?.into(),
        TopologyKind::FullMesh => full_mesh_topology(int_param(params, "n")?)?.into(),
        TopologyKind::KAryTree => {
            let k = int_param(params, "k")?;
            let h = int_param(params, "h")?;
            k_ary_tree_topology(k, h)?.into()
        }
        TopologyKind::Dumbbell => {
            let m1 = int_param(params, "m1")?;
            let m2 = int_param(params, "m2")?;
            dumbbell_topology(m1, m2)?.into()
        }
        TopologyKind::Chord => {
            let m = int_param(params, "m")?;
            let r = int_param_or(params, "r", DEFAULT_SUCCESSORS)?;
            chord_topology(m, r)?.into()
        }
    };
    Ok(topology)
}
