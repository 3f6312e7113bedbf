//! Strict JSON decoding of API response bodies.
//!
//! A decode error is fatal to the operation; callers surface it instead of
//! rendering partial output. Empty bodies never reach these functions —
//! handlers branch on 204 before decoding.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::volume::{Volume, VolumePlan};

pub fn decode_list(body: &[u8]) -> Result<Vec<Volume>> {
    Ok(serde_json::from_slice(body)?)
}

pub fn decode_volume(body: &[u8]) -> Result<Volume> {
    Ok(serde_json::from_slice(body)?)
}

/// Plans come grouped by provisioner name; one plan name may exist under
/// multiple provisioners.
pub fn decode_plans(body: &[u8]) -> Result<BTreeMap<String, Vec<VolumePlan>>> {
    Ok(serde_json::from_slice(body)?)
}
