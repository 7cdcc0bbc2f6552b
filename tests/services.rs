//! Resource service tests against a local mock API

use lacework_sdk::Client;
use lacework_sdk::client::models::{
    BulkUpdatePolicy, CloudProvider, Filter, PolicyException, PolicyExceptionConstraint,
    RecommendationState, ReportConfig, ReportRule, ReportRuleConfig, ReportRuleSeverities,
    SearchFilter, TeamMember, TeamMemberProps, TimeFilter, parse_new_policy,
};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

async fn authed_client(server: &mut ServerGuard) -> (Client, Mock) {
    let token = server
        .mock("POST", "/api/v2/access/tokens")
        .with_status(201)
        .with_body(r#"{"data":[{"expiresAt":"2030-01-01T00:00:00Z","token":"TOKEN"}],"ok":true}"#)
        .create_async()
        .await;

    let client = Client::builder("acme")
        .api_keys("KEY", "_secret")
        .url(server.url())
        .build()
        .unwrap();
    (client, token)
}

// ============================================================================
// Agent Access Tokens
// ============================================================================

#[tokio::test]
async fn test_access_token_search_and_state() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let search = server
        .mock("POST", "/api/v2/AgentAccessTokens/search")
        .match_body(Matcher::Json(json!({
            "filters": [{"expression": "eq", "field": "tokenAlias", "value": "prod"}]
        })))
        .with_status(200)
        .with_body(r#"{"data":[{"accessToken":"T1","tokenAlias":"prod","tokenEnabled":1}]}"#)
        .create_async()
        .await;
    let disable = server
        .mock("PATCH", "/api/v2/AgentAccessTokens/T1")
        .match_body(Matcher::Json(json!({"tokenEnabled": 0})))
        .with_status(200)
        .with_body(r#"{"data":{"accessToken":"T1","tokenAlias":"prod","tokenEnabled":0}}"#)
        .create_async()
        .await;

    let tokens = client.agent_access_tokens().search_alias("prod").await.unwrap();
    let token = client
        .agent_access_tokens()
        .update_state(&tokens[0].access_token, false)
        .await
        .unwrap();

    search.assert_async().await;
    disable.assert_async().await;
    assert_eq!(token.pretty_state(), "Disabled");
}

#[tokio::test]
async fn test_access_token_alias_required() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let err = client.agent_access_tokens().create("", "desc").await.unwrap_err();
    assert_eq!(err.to_string(), "token alias is required");

    let err = client.agent_access_tokens().search_alias("").await.unwrap_err();
    assert_eq!(err.to_string(), "specify a token alias to search");
}

// ============================================================================
// Team Members
// ============================================================================

#[tokio::test]
async fn test_team_member_create_and_update() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let created_body = json!({
        "data": {
            "custGuid": "TECHALLY_000",
            "props": {
                "firstName": "Jane",
                "lastName": "Doe",
                "company": "Acme",
                "createdTime": 1643240000000u64,
                "accountAdmin": true
            },
            "userEnabled": 1,
            "userGuid": "TECHALLY_ABC",
            "userName": "jane@example.com"
        }
    });

    let create = server
        .mock("POST", "/api/v2/TeamMembers")
        .match_body(Matcher::PartialJson(json!({
            "userName": "jane@example.com",
            "userEnabled": 1
        })))
        .with_status(201)
        .with_body(created_body.to_string())
        .create_async()
        .await;
    let update = server
        .mock("PATCH", "/api/v2/TeamMembers/TECHALLY_ABC")
        .match_body(Matcher::Json(json!({
            "props": {"firstName": "Janet", "lastName": "Doe", "company": "Acme", "accountAdmin": true},
            "userEnabled": 1,
            "userName": "jane@example.com"
        })))
        .with_status(200)
        .with_body(created_body.to_string())
        .create_async()
        .await;

    let member = TeamMember::new(
        "jane@example.com",
        TeamMemberProps {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            company: "Acme".into(),
            account_admin: true,
            ..Default::default()
        },
    );
    let mut created = client.team_members().create(&member).await.unwrap();
    assert_eq!(created.props.created_time, "1643240000000");

    created.props.first_name = "Janet".into();
    client.team_members().update(&created).await.unwrap();

    create.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_team_member_guid_required() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let err = client.team_members().get("").await.unwrap_err();
    assert_eq!(err.to_string(), "please specify a guid");
    assert!(client.team_members().delete("").await.is_err());
}

#[tokio::test]
async fn test_identifiers_stay_in_their_path_segment() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let member = server
        .mock("GET", "/api/v2/TeamMembers/TEAM%2F1%3Fx%23y")
        .with_status(200)
        .with_body(r#"{"data":{"userGuid":"TEAM/1?x#y","userName":"jane@example.com"}}"#)
        .create_async()
        .await;
    let exception = server
        .mock("DELETE", "/api/v2/Exceptions/ex%201")
        .match_query(Matcher::UrlEncoded(
            "policyId".into(),
            "lacework-global-1&x=1".into(),
        ))
        .with_status(204)
        .create_async()
        .await;

    let found = client.team_members().get("TEAM/1?x#y").await.unwrap();
    assert_eq!(found.user_name, "jane@example.com");
    client
        .policy_exceptions()
        .delete("lacework-global-1&x=1", "ex 1")
        .await
        .unwrap();

    member.assert_async().await;
    exception.assert_async().await;
}

#[tokio::test]
async fn test_team_member_search() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let search = server
        .mock("POST", "/api/v2/TeamMembers/search")
        .match_body(Matcher::PartialJson(json!({
            "filters": [{"field": "userName", "value": "jane@example.com"}]
        })))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let found = client
        .team_members()
        .search_username("jane@example.com")
        .await
        .unwrap();
    assert!(found.is_empty());
    search.assert_async().await;
}

// ============================================================================
// Alerts
// ============================================================================

#[tokio::test]
async fn test_alert_details_and_comment() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let details = server
        .mock("GET", "/api/v2/Alerts/967272")
        .match_query(Matcher::UrlEncoded("scope".into(), "Details".into()))
        .with_status(200)
        .with_body(
            json!({"data": {
                "alertId": 967272,
                "alertName": "Changed file",
                "severity": "Medium",
                "status": "Open",
                "alertInfo": {"subject": "s", "description": "file changed"},
                "entityMap": {"Machine": [{"hostname": "web-1"}]}
            }})
            .to_string(),
        )
        .create_async()
        .await;
    let comment = server
        .mock("POST", "/api/v2/Alerts/967272/comment")
        .match_body(Matcher::Json(json!({"comment": "looking into it"})))
        .with_status(200)
        .with_body(
            json!({"data": {
                "id": 1,
                "alertId": 967272,
                "entryType": "Comment",
                "entryAuthorType": "User",
                "message": {"value": "looking into it"},
                "user": {"userGuid": "TECHALLY_ABC", "username": "jane@example.com"}
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let alerts = client.alerts();
    let detail = alerts
        .get_details(967272, Default::default())
        .await
        .unwrap();
    assert_eq!(detail.alert.info.description, "file changed");
    assert_eq!(detail.entity_map["Machine"][0]["hostname"], "web-1");

    let entry = alerts.comment(967272, "looking into it").await.unwrap();
    assert_eq!(entry.message.value, "looking into it");

    let err = alerts.comment(967272, "  ").await.unwrap_err();
    assert_eq!(err.to_string(), "alert comment must be provided");

    details.assert_async().await;
    comment.assert_async().await;
}

// ============================================================================
// Policies
// ============================================================================

#[tokio::test]
async fn test_policy_create_from_yaml_and_bulk_update() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let create = server
        .mock("POST", "/api/v2/Policies")
        .match_body(Matcher::PartialJson(json!({
            "policyType": "Violation",
            "queryId": "MyQuery",
            "title": "My Policy",
            "severity": "high"
        })))
        .with_status(201)
        .with_body(r#"{"data":{"policyId":"acme-1","title":"My Policy","severity":"high"}}"#)
        .create_async()
        .await;
    let bulk = server
        .mock("PATCH", "/api/v2/Policies")
        .match_body(Matcher::Json(json!([
            {"policyId": "acme-1", "enabled": false},
            {"policyId": "acme-2", "severity": "low"}
        ])))
        .with_status(200)
        .with_body(r#"{"data":[{"policyId":"acme-1"},{"policyId":"acme-2"}]}"#)
        .create_async()
        .await;

    let policy = parse_new_policy(
        "policies:\n  - policyType: Violation\n    queryId: MyQuery\n    title: My Policy\n    severity: high\n    enabled: true\n",
    )
    .unwrap();
    let created = client.policies().create(&policy).await.unwrap();
    assert_eq!(created.policy_id, "acme-1");

    let updated = client
        .policies()
        .update_many(&[
            BulkUpdatePolicy {
                policy_id: "acme-1".into(),
                enabled: Some(false),
                ..Default::default()
            },
            BulkUpdatePolicy {
                policy_id: "acme-2".into(),
                severity: "low".into(),
                ..Default::default()
            },
        ])
        .await
        .unwrap();
    assert_eq!(updated.len(), 2);

    create.assert_async().await;
    bulk.assert_async().await;
}

#[tokio::test]
async fn test_policy_tags_and_id_required() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let _tags = server
        .mock("GET", "/api/v2/Policies/Tags")
        .with_status(200)
        .with_body(r#"{"data":["domain:AWS","security:compliance"]}"#)
        .create_async()
        .await;

    let tags = client.policies().list_tags().await.unwrap();
    assert_eq!(tags, vec!["domain:AWS", "security:compliance"]);

    let err = client.policies().delete("").await.unwrap_err();
    assert_eq!(err.to_string(), "specify a policy ID");
}

#[tokio::test]
async fn test_policy_exception_update_strips_server_fields() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let update = server
        .mock("PATCH", "/api/v2/Exceptions/EXC_1")
        .match_query(Matcher::UrlEncoded("policyId".into(), "lacework-global-1".into()))
        .match_body(Matcher::Json(json!({
            "description": "ignore test accounts",
            "constraints": [{"fieldKey": "accountIds", "fieldValues": ["123"]}]
        })))
        .with_status(200)
        .with_body(r#"{"data":{"exceptionId":"EXC_1","description":"ignore test accounts"}}"#)
        .create_async()
        .await;

    let exception = PolicyException {
        exception_id: "EXC_1".into(),
        description: "ignore test accounts".into(),
        constraints: vec![PolicyExceptionConstraint {
            field_key: "accountIds".into(),
            field_values: vec!["123".into()],
        }],
        last_update_time: "2022-01-01T00:00:00Z".into(),
        last_update_user: "jane@example.com".into(),
    };
    let updated = client
        .policy_exceptions()
        .update("lacework-global-1", &exception)
        .await
        .unwrap();

    assert_eq!(updated.exception_id, "EXC_1");
    update.assert_async().await;

    let err = client
        .policy_exceptions()
        .get("lacework-global-1", "")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "specify exception and policy IDs");
}

// ============================================================================
// Report Rules
// ============================================================================

#[tokio::test]
async fn test_report_rule_create() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let create = server
        .mock("POST", "/api/v2/ReportRules")
        .match_body(Matcher::PartialJson(json!({
            "type": "Report",
            "intgGuidList": ["EMAIL_1"],
            "filters": {"name": "weekly", "enabled": 1, "severity": [1, 2]},
            "reportNotificationTypes": {"awsCis14": true}
        })))
        .with_status(201)
        .with_body(
            json!({"data": {
                "mcGuid": "RULE_1",
                "type": "Report",
                "intgGuidList": ["EMAIL_1"],
                "filters": {"name": "weekly", "enabled": 1, "severity": [1, 2]},
                "reportNotificationTypes": {"awsCis14": true}
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let rule = ReportRule::new(
        "weekly",
        ReportRuleConfig {
            email_alert_channels: vec!["EMAIL_1".into()],
            severities: ReportRuleSeverities::from_names(&["critical", "high"]),
            notification_types: vec!["awsCis14".into()],
            ..Default::default()
        },
    )
    .unwrap();
    let created = client.report_rules().create(&rule).await.unwrap();

    assert_eq!(created.guid, "RULE_1");
    assert_eq!(created.filter.status(), "Enabled");
    create.assert_async().await;

    let err = client.report_rules().delete("").await.unwrap_err();
    assert_eq!(err.to_string(), "specify an intgGuid");
}

// ============================================================================
// Compliance
// ============================================================================

#[tokio::test]
async fn test_recommendations_patch() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let _list = server
        .mock("GET", "/api/v2/recommendations/aws")
        .with_status(200)
        .with_body(r#"{"data":[{"AWS_CIS_1_1":{"enabled":true},"AWS_CIS_1_2":{"enabled":true}}]}"#)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/api/v2/recommendations/aws")
        .match_body(Matcher::Json(json!({"AWS_CIS_1_1": "disable", "AWS_CIS_1_2": "disable"})))
        .with_status(200)
        .with_body(r#"{"data":[{"AWS_CIS_1_1":{"enabled":false},"AWS_CIS_1_2":{"enabled":false}}]}"#)
        .create_async()
        .await;

    let recs = client.recommendations().list(CloudProvider::Aws).await.unwrap();
    let state = RecommendationState::with_state(&recs, false);
    let patched = client
        .recommendations()
        .patch(CloudProvider::Aws, &state)
        .await
        .unwrap();

    assert!(patched.iter().all(|r| !r.enabled));
    patch.assert_async().await;
}

#[tokio::test]
async fn test_suppressions_list() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let _list = server
        .mock("GET", "/api/v2/suppressions/gcp/allExceptions")
        .with_status(200)
        .with_body(
            r#"{"data":[{"recommendationExceptions":{
                "GCP_CIS_1_1": {"enabled": true, "suppressionConditions": [{"comments": "legacy"}]}
            }}]}"#,
        )
        .create_async()
        .await;

    let suppressions = client.suppressions().list(CloudProvider::Gcp).await.unwrap();
    let s = &suppressions["GCP_CIS_1_1"];
    assert!(s.enabled);
    assert_eq!(s.suppression_conditions[0].comment, "legacy");
}

#[tokio::test]
async fn test_report_json_and_validation() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let report = server
        .mock("GET", "/api/v2/Reports")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("primaryQueryId".into(), "tenant-1".into()),
            Matcher::UrlEncoded("secondaryQueryId".into(), "sub-1".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[{"reportType":"AZURE_CIS_131","reportTitle":"Azure CIS","recommendations":[]}]}"#)
        .create_async()
        .await;

    let reports = client
        .reports()
        .get(&ReportConfig::azure("tenant-1", "sub-1", ""))
        .await
        .unwrap();
    assert_eq!(reports[0].report_title, "Azure CIS");
    report.assert_async().await;

    let err = client
        .reports()
        .get(&ReportConfig::gcp("org-1", "", "GCP_CIS13"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "project id and org id are required");
}

#[tokio::test]
async fn test_report_pdf_to_file() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let _pdf = server
        .mock("GET", "/api/v2/Reports")
        .match_query(Matcher::UrlEncoded("format".into(), "pdf".into()))
        .with_status(200)
        .with_body(b"%PDF-1.7")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    let written = client
        .reports()
        .download_pdf(&ReportConfig::aws("123456789012", ""), &path)
        .await
        .unwrap();

    assert_eq!(written, 8);
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
}

#[tokio::test]
async fn test_report_pdf_error_leaves_no_file() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let _pdf = server
        .mock("GET", "/api/v2/Reports")
        .match_query(Matcher::UrlEncoded("format".into(), "pdf".into()))
        .with_status(500)
        .with_body(r#"{"data":{"message":"report generation failed"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    let err = client
        .reports()
        .download_pdf(&ReportConfig::aws("123456789012", ""), &path)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("report generation failed"));
    assert!(!path.exists());
}

// ============================================================================
// Vulnerabilities
// ============================================================================

#[tokio::test]
async fn test_vulnerability_search_all_pages() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let next = format!("{}/api/v2/Vulnerabilities/Containers/search/abc", server.url());
    let first = server
        .mock("POST", "/api/v2/Vulnerabilities/Containers/search")
        .match_body(Matcher::PartialJson(json!({
            "filters": [{"expression": "eq", "field": "severity", "value": "Critical"}]
        })))
        .with_status(200)
        .with_body(
            json!({
                "data": [{"vulnId": "CVE-1", "severity": "Critical"}],
                "paging": {"rows": 1, "totalRows": 2, "urls": {"nextPage": next}}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/v2/Vulnerabilities/Containers/search/abc")
        .with_status(200)
        .with_body(r#"{"data":[{"vulnId":"CVE-2","severity":"Critical"}],"paging":{"rows":1,"totalRows":2,"urls":{}}}"#)
        .create_async()
        .await;

    let filter = SearchFilter {
        time_filter: Some(TimeFilter::last_days(1).unwrap()),
        ..SearchFilter::with_filter(Filter::eq("severity", "Critical"))
    };
    let resp = client
        .vulnerabilities()
        .search_containers_all_pages(&filter)
        .await
        .unwrap();

    let ids: Vec<&str> = resp.data.iter().map(|v| v.vuln_id.as_str()).collect();
    assert_eq!(ids, vec!["CVE-1", "CVE-2"]);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_vulnerability_inverted_window_rejected() {
    let mut server = Server::new_async().await;
    let (client, _token) = authed_client(&mut server).await;

    let search = server
        .mock("POST", "/api/v2/Vulnerabilities/Containers/search")
        .expect(0)
        .create_async()
        .await;

    let now = chrono::Utc::now();
    let filter = SearchFilter {
        time_filter: Some(TimeFilter::new(now, now - chrono::Duration::days(1))),
        ..Default::default()
    };
    let err = client
        .vulnerabilities()
        .search_containers(&filter)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "date range should have a start time before the end time"
    );
    search.assert_async().await;
}
