//! Volume creation.

use console::style;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::volume::{Volume, VolumePlan};

pub async fn execute(
    config: &AppConfig,
    name: String,
    plan: String,
    pool: Option<String>,
    team: Option<String>,
    opt: Vec<(String, String)>,
) -> Result<()> {
    let client = ApiClient::new(config)?;
    let volume = build_volume(name, plan, pool, team, opt);

    let response = client.post_form("/volumes", &volume.to_form()).await?;
    api::stream_to(response, &mut std::io::stdout()).await?;

    println!("{}", style("Volume successfully created.").green());
    Ok(())
}

pub(super) fn build_volume(
    name: String,
    plan: String,
    pool: Option<String>,
    team: Option<String>,
    opt: Vec<(String, String)>,
) -> Volume {
    Volume {
        name,
        plan: VolumePlan {
            name: plan,
            ..Default::default()
        },
        pool: pool.unwrap_or_default(),
        team_owner: team.unwrap_or_default(),
        opts: opt.into_iter().collect(),
        binds: Vec::new(),
    }
}
