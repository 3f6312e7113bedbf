//! Volume plan listing, grouped by provisioner.

use std::collections::BTreeMap;

use reqwest::StatusCode;

use crate::api::{codec, ApiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{opt_display, TableView};
use crate::volume::VolumePlan;

pub async fn list(config: &AppConfig) -> Result<()> {
    let client = ApiClient::new(config)?;
    let out = run(&client).await?;
    print!("{}", out);
    Ok(())
}

pub(crate) async fn run(client: &ApiClient) -> Result<String> {
    let response = client.get("/volumeplans", &[]).await?;

    let plans = if response.status() == StatusCode::NO_CONTENT {
        BTreeMap::new()
    } else {
        let body = response.bytes().await?;
        codec::decode_plans(&body)?
    };

    Ok(render(&plans))
}

fn render(plans: &BTreeMap<String, Vec<VolumePlan>>) -> String {
    let mut table = TableView::new(["Plan", "Provisioner", "Opts"]);
    for (provisioner, provisioner_plans) in plans {
        for plan in provisioner_plans {
            let opts: Vec<String> = plan
                .opts
                .iter()
                .map(|(key, value)| format!("{}: {}", key, opt_display(value)))
                .collect();
            table.add_row(vec![
                plan.name.clone(),
                provisioner.clone(),
                opts.join("\n"),
            ]);
        }
    }
    table.sort();
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_render_plan_row_with_opts() {
        let plans: BTreeMap<String, Vec<VolumePlan>> = [(
            "docker".to_string(),
            vec![VolumePlan {
                name: "nfs".to_string(),
                opts: [("size".to_string(), serde_json::json!("10"))].into(),
            }],
        )]
        .into();

        let out = render(&plans);
        assert!(out.contains("nfs"));
        assert!(out.contains("docker"));
        assert!(out.contains("size: 10"));
    }

    #[test]
    fn test_render_sorts_by_plan_then_provisioner() {
        let plans: BTreeMap<String, Vec<VolumePlan>> = [
            (
                "kubernetes".to_string(),
                vec![
                    VolumePlan {
                        name: "nfs".to_string(),
                        ..Default::default()
                    },
                    VolumePlan {
                        name: "ebs".to_string(),
                        ..Default::default()
                    },
                ],
            ),
            (
                "docker".to_string(),
                vec![VolumePlan {
                    name: "nfs".to_string(),
                    ..Default::default()
                }],
            ),
        ]
        .into();

        let out = render(&plans);
        // Sorted rows: (ebs, kubernetes), (nfs, docker), (nfs, kubernetes).
        let ebs = out.find("ebs").unwrap();
        let docker = out.find("docker").unwrap();
        let last_kubernetes = out.rfind("kubernetes").unwrap();
        assert!(ebs < docker && docker < last_kubernetes);
    }

    #[test]
    fn test_render_joins_multiple_opts_sorted_by_key() {
        let plans: BTreeMap<String, Vec<VolumePlan>> = [(
            "docker".to_string(),
            vec![VolumePlan {
                name: "nfs".to_string(),
                opts: [
                    ("size".to_string(), serde_json::json!(10)),
                    ("class".to_string(), serde_json::json!("fast")),
                ]
                .into(),
            }],
        )]
        .into();

        let out = render(&plans);
        // BTreeMap ordering puts "class" before "size" inside the cell.
        assert!(out.find("class: fast").unwrap() < out.find("size: 10").unwrap());
    }

    #[tokio::test]
    async fn test_no_content_renders_empty_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.4/volumeplans"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = ApiClient::with_target(&server.uri(), None).unwrap();
        let out = run(&client).await.unwrap();
        assert!(out.contains("Plan"));
        assert!(out.contains("Provisioner"));
        assert!(out.contains("Opts"));
    }

    #[tokio::test]
    async fn test_plans_decode_and_render() {
        let body = r#"{"docker": [{"Name": "nfs", "Opts": {"size": "10"}}]}"#;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.4/volumeplans"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = ApiClient::with_target(&server.uri(), None).unwrap();
        let out = run(&client).await.unwrap();
        assert!(out.contains("nfs"));
        assert!(out.contains("docker"));
        assert!(out.contains("size: 10"));
    }
}
