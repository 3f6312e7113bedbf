//! Binding volumes to applications and back out.
//!
//! Both endpoints may answer with a progress stream (the platform restarts
//! the application unless told not to), so the body is relayed to stdout
//! before the confirmation line.

use console::style;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::volume::{BindRequest, UnbindRequest};

use super::resolve_app_name;

pub async fn bind(
    config: &AppConfig,
    volume: String,
    mount_point: String,
    app: Option<String>,
    readonly: bool,
    no_restart: bool,
) -> Result<()> {
    let client = ApiClient::new(config)?;
    let request = BindRequest {
        app: resolve_app_name(app)?,
        mount_point,
        read_only: readonly,
        no_restart,
    };

    let response = client
        .post_form(&format!("/volumes/{}/bind", volume), &request.to_form())
        .await?;
    api::stream_to(response, &mut std::io::stdout()).await?;

    println!("{}", style("Volume successfully bound.").green());
    Ok(())
}

pub async fn unbind(
    config: &AppConfig,
    volume: String,
    mount_point: String,
    app: Option<String>,
    no_restart: bool,
) -> Result<()> {
    let client = ApiClient::new(config)?;
    let request = UnbindRequest {
        app: resolve_app_name(app)?,
        mount_point,
        no_restart,
    };

    let response = client
        .delete(&format!("/volumes/{}/bind", volume), &request.to_query())
        .await?;
    api::stream_to(response, &mut std::io::stdout()).await?;

    println!("{}", style("Volume successfully unbound.").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_bind_posts_form_with_flags() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.4/volumes/data1/bind"))
            .and(body_string(
                "App=api&MountPoint=%2Fdata&ReadOnly=true&NoRestart=false",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("restarting app...\n"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_target(&server.uri(), None).unwrap();
        let request = BindRequest {
            app: "api".to_string(),
            mount_point: "/data".to_string(),
            read_only: true,
            no_restart: false,
        };
        let response = client
            .post_form("/volumes/data1/bind", &request.to_form())
            .await
            .unwrap();

        let mut out = Vec::new();
        api::stream_to(response, &mut out).await.unwrap();
        assert_eq!(out, b"restarting app...\n");
    }

    #[tokio::test]
    async fn test_unbind_sends_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/1.4/volumes/data1/bind"))
            .and(query_param("App", "api"))
            .and(query_param("MountPoint", "/data"))
            .and(query_param("NoRestart", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_target(&server.uri(), None).unwrap();
        let request = UnbindRequest {
            app: "api".to_string(),
            mount_point: "/data".to_string(),
            no_restart: true,
        };
        client
            .delete("/volumes/data1/bind", &request.to_query())
            .await
            .unwrap();
    }
}
