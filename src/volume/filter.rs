//! Listing filter: server-side query parameters plus the client-side
//! predicate applied again to results.
//!
//! The server filter is best-effort (its name matching semantics are not
//! guaranteed), so the predicate here is the authoritative contract and
//! always runs over the decoded result set.

use super::Volume;

/// User-supplied filter criteria. An empty field means "no constraint";
/// active fields are ANDed.
#[derive(Debug, Clone, Default)]
pub struct VolumeFilter {
    pub name: String,
    pub pool: String,
    pub plan: String,
    pub team_owner: String,
}

impl VolumeFilter {
    /// Query-string pairs for the server-side stage. Only non-empty fields
    /// are emitted.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.name.is_empty() {
            pairs.push(("name".to_string(), self.name.clone()));
        }
        if !self.pool.is_empty() {
            pairs.push(("pool".to_string(), self.pool.clone()));
        }
        if !self.plan.is_empty() {
            pairs.push(("plan".to_string(), self.plan.clone()));
        }
        if !self.team_owner.is_empty() {
            pairs.push(("teamOwner".to_string(), self.team_owner.clone()));
        }
        pairs
    }

    /// Name is case-sensitive substring containment; pool, plan and team
    /// are exact equality.
    pub fn matches(&self, volume: &Volume) -> bool {
        if !self.name.is_empty() && !volume.name.contains(&self.name) {
            return false;
        }
        if !self.pool.is_empty() && volume.pool != self.pool {
            return false;
        }
        if !self.plan.is_empty() && volume.plan.name != self.plan {
            return false;
        }
        if !self.team_owner.is_empty() && volume.team_owner != self.team_owner {
            return false;
        }
        true
    }

    /// Applies `matches` in a single pass, preserving input order.
    pub fn filter_all(&self, volumes: Vec<Volume>) -> Vec<Volume> {
        volumes.into_iter().filter(|v| self.matches(v)).collect()
    }
}
