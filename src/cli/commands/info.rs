//! Single-volume details: fixed-field summary followed by the binds, plan
//! option and volume option tables.

use reqwest::StatusCode;

use crate::api::{codec, ApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{json_pretty, opt_display, TableView};
use crate::volume::Volume;

pub async fn execute(config: &AppConfig, name: String, json: bool) -> Result<()> {
    let client = ApiClient::new(config)?;
    let out = run(&client, &name, json).await?;
    print!("{}", out);
    Ok(())
}

pub(crate) async fn run(client: &ApiClient, name: &str, json: bool) -> Result<String> {
    let response = client.get(&format!("/volumes/{}", name), &[]).await?;
    if response.status() == StatusCode::NO_CONTENT {
        return Ok("No volumes available.\n".to_string());
    }

    let body = response.bytes().await?;
    let volume = codec::decode_volume(&body)?;

    if json {
        return json_pretty(&volume);
    }
    render(&volume)
}

fn render(volume: &Volume) -> Result<String> {
    let mut out = format!(
        "Name: {}\nPlan: {}\nPool: {}\nTeam: {}\n",
        volume.name, volume.plan.name, volume.pool, volume.team_owner
    );

    let mut binds = TableView::new(["App", "MountPoint", "Mode"]);
    for bind in &volume.binds {
        let mode = if bind.read_only { "ro" } else { "rw" };
        binds.add_row(vec![
            bind.id.app.clone(),
            bind.id.mount_point.clone(),
            mode.to_string(),
        ]);
    }
    out.push_str("\nBinds:\n");
    out.push_str(&binds.render());

    // BTreeMap iteration is already key-sorted.
    let mut plan_opts = TableView::new(["Key", "Value"]);
    for (key, value) in &volume.plan.opts {
        plan_opts.add_row(vec![key.clone(), opt_display(value)]);
    }
    out.push_str("\nPlan Opts:\n");
    out.push_str(&plan_opts.render());

    let mut opts = TableView::new(["Key", "Value"]);
    for (key, value) in &volume.opts {
        opts.add_row(vec![key.clone(), value.clone()]);
    }
    out.push_str("\nOpts:\n");
    out.push_str(&opts.render());

    Ok(out)
}
