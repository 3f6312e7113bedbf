//! Volume listing: server-side query, client-side re-filter, then one of
//! three output shapes (name-only, JSON, table) in that precedence order.

use reqwest::StatusCode;

use crate::api::{codec, ApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{json_pretty, TableView};
use crate::volume::{Volume, VolumeFilter};

pub async fn execute(config: &AppConfig, filter: VolumeFilter, quiet: bool, json: bool) -> Result<()> {
    let client = ApiClient::new(config)?;
    let out = run(&client, &filter, quiet, json).await?;
    print!("{}", out);
    Ok(())
}

pub(crate) async fn run(
    client: &ApiClient,
    filter: &VolumeFilter,
    quiet: bool,
    json: bool,
) -> Result<String> {
    let response = client.get("/volumes", &filter.query_pairs()).await?;
    if response.status() == StatusCode::NO_CONTENT {
        return Ok("No volumes available.\n".to_string());
    }

    let body = response.bytes().await?;
    let volumes = codec::decode_list(&body)?;
    let volumes = filter.filter_all(volumes);
    render(&volumes, quiet, json)
}

fn render(volumes: &[Volume], quiet: bool, json: bool) -> Result<String> {
    if quiet {
        let mut out = String::new();
        for volume in volumes {
            out.push_str(&volume.name);
            out.push('\n');
        }
        return Ok(out);
    }

    if json {
        return json_pretty(&volumes);
    }

    let mut table = TableView::new(["Name", "Plan", "Pool", "Team"]);
    for volume in volumes {
        table.add_row(vec![
            volume.name.clone(),
            volume.plan.name.clone(),
            volume.pool.clone(),
            volume.team_owner.clone(),
        ]);
    }
    table.sort();
    Ok(table.render())
}
