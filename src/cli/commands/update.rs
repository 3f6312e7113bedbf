//! Volume update. Same form contract as create, addressed to the existing
//! volume.

use console::style;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::Result;

use super::create::build_volume;

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

    let path = format!("/volumes/{}", volume.name);
    client.post_form(&path, &volume.to_form()).await?;

    println!("{}", style("Volume successfully updated.").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_posts_to_the_named_volume() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.4/volumes/data1"))
            .and(body_string_contains("Plan.Name=nfs-ha"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_target(&server.uri(), None).unwrap();
        let volume = build_volume(
            "data1".to_string(),
            "nfs-ha".to_string(),
            None,
            None,
            Vec::new(),
        );
        client
            .post_form(&format!("/volumes/{}", volume.name), &volume.to_form())
            .await
            .unwrap();
    }
}
