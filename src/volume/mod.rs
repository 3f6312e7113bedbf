//! Volume domain types and their wire encodings.
//!
//! The API speaks PascalCase JSON for reads and flat form-encoded pairs for
//! writes. Option maps use `BTreeMap` so encoding and rendering order is
//! deterministic.

pub mod filter;

pub use filter::VolumeFilter;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persistent volume as owned by the remote server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Volume {
    pub name: String,
    pub plan: VolumePlan,
    pub pool: String,
    pub team_owner: String,
    pub opts: BTreeMap<String, String>,
    pub binds: Vec<Bind>,
}

/// Named plan template. Plan option values may be strings or numbers,
/// depending on the provisioner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VolumePlan {
    pub name: String,
    pub opts: BTreeMap<String, serde_json::Value>,
}

/// Attachment of a volume to an application at a mount point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bind {
    #[serde(rename = "ID")]
    pub id: BindId,
    pub read_only: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BindId {
    pub app: String,
    pub mount_point: String,
    pub volume: String,
}

impl Volume {
    /// Flat form encoding for create/update.
    ///
    /// Each option is addressable by key (`Opts.<key>`) so the server can
    /// merge option maps. Empty pool/team are omitted entirely: the server
    /// reads an empty string as "unset", which is not the same request.
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("Name".to_string(), self.name.clone()),
            ("Plan.Name".to_string(), self.plan.name.clone()),
        ];
        if !self.pool.is_empty() {
            pairs.push(("Pool".to_string(), self.pool.clone()));
        }
        if !self.team_owner.is_empty() {
            pairs.push(("TeamOwner".to_string(), self.team_owner.clone()));
        }
        for (key, value) in &self.opts {
            pairs.push((format!("Opts.{}", key), value.clone()));
        }
        pairs
    }
}

/// Form body for binding a volume to an application.
#[derive(Debug, Clone)]
pub struct BindRequest {
    pub app: String,
    pub mount_point: String,
    pub read_only: bool,
    pub no_restart: bool,
}

impl BindRequest {
    pub fn to_form(&self) -> Vec<(String, String)> {
        vec![
            ("App".to_string(), self.app.clone()),
            ("MountPoint".to_string(), self.mount_point.clone()),
            ("ReadOnly".to_string(), self.read_only.to_string()),
            ("NoRestart".to_string(), self.no_restart.to_string()),
        ]
    }
}

/// Query parameters for unbinding; the API takes these on the URL, not in a
/// body, since the request is a DELETE.
#[derive(Debug, Clone)]
pub struct UnbindRequest {
    pub app: String,
    pub mount_point: String,
    pub no_restart: bool,
}

impl UnbindRequest {
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("App".to_string(), self.app.clone()),
            ("MountPoint".to_string(), self.mount_point.clone()),
            ("NoRestart".to_string(), self.no_restart.to_string()),
        ]
    }
}
