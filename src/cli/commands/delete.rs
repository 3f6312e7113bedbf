//! Volume deletion. The server rejects deletion while binds exist; the
//! handler does not pre-check, it surfaces the server's answer.

use console::style;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::Result;

pub async fn execute(config: &AppConfig, name: String) -> Result<()> {
    let client = ApiClient::new(config)?;
    client.delete(&format!("/volumes/{}", name), &[]).await?;

    println!("{}", style("Volume successfully deleted.").green());
    Ok(())
}
