//! Integration tests for the GitLab client against a mock HTTP server.

#[cfg(test)]
mod api_tests {
    use integrations_gitlab::{
        GitLabClient, GitLabErrorKind, Issue, Params, Project, ProjectHook, ProjectIssue,
        ProjectMember, User,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use wiremock::matchers::{any, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "T";

    fn client_for(server: &MockServer) -> GitLabClient {
        GitLabClient::builder()
            .base_url(server.uri())
            .private_token(TOKEN)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn list_sends_token_and_parses_items_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users"))
            .and(query_param("private_token", TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "username": "john_smith"},
                {"id": 2, "username": "jane_doe", "theme_id": 2}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).list::<User>(&Params::new()).await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, Some(1));
        assert_eq!(users[0].username.as_deref(), Some("john_smith"));
        assert_eq!(users[1].id, Some(2));
        assert_eq!(users[1].extra.get("theme_id"), Some(&json!(2)));
    }

    #[tokio::test]
    async fn get_appends_id_before_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users/5"))
            .and(query_param("private_token", TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 5, "username": "john_smith"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).get::<User>(5, &Params::new()).await.unwrap();

        assert_eq!(user.id, Some(5));
        assert_eq!(user.username.as_deref(), Some("john_smith"));
    }

    #[tokio::test]
    async fn placeholder_substitution_builds_parent_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/projects/7/hooks"))
            .and(query_param("private_token", TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 11, "url": "http://ci.example.com/build"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let params = Params::new().set("project_id", 7);
        let hooks = client_for(&server)
            .list::<ProjectHook>(&params)
            .await
            .unwrap();

        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].url.as_deref(), Some("http://ci.example.com/build"));
    }

    #[tokio::test]
    async fn leftover_params_become_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users"))
            .and(query_param("private_token", TOKEN))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let params = Params::new().set("per_page", 100);
        let users = client_for(&server).list::<User>(&params).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn nested_objects_deserialize_into_their_kinds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/projects/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "name": "Diaspora",
                "owner": {"id": 1, "username": "john_smith", "name": "John Smith"}
            })))
            .mount(&server)
            .await;

        let project = client_for(&server)
            .get::<Project>(3, &Params::new())
            .await
            .unwrap();

        assert_eq!(project.name.as_deref(), Some("Diaspora"));
        let owner = project.owner.unwrap();
        assert_eq!(owner.id, Some(1));
        assert_eq!(owner.name.as_deref(), Some("John Smith"));
    }

    #[tokio::test]
    async fn member_list_returns_plain_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/projects/3/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "username": "john_smith", "state": "active"}
            ])))
            .mount(&server)
            .await;

        let params = Params::new().set("project_id", 3);
        let members: Vec<User> = client_for(&server)
            .list::<ProjectMember>(&params)
            .await
            .unwrap();

        assert_eq!(members[0].username.as_deref(), Some("john_smith"));
        assert_eq!(members[0].state.as_deref(), Some("active"));
    }

    #[tokio::test]
    async fn create_posts_form_body_and_expects_201() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/users"))
            .and(query_param("private_token", TOKEN))
            .and(body_string_contains("username=jane_doe"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 9, "username": "jane_doe"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let data = [("username", "jane_doe"), ("email", "jane@example.com")];
        let user = client_for(&server)
            .create::<User, _>(&data, &Params::new())
            .await
            .unwrap();

        assert_eq!(user.id, Some(9));
    }

    #[tokio::test]
    async fn create_on_non_201_is_a_create_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/users"))
            .respond_with(ResponseTemplate::new(400).set_body_string("400 (Bad request)"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create::<User, _>(&[("username", "jane_doe")], &Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Create);
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.body(), Some("400 (Bad request)"));
    }

    #[tokio::test]
    async fn update_puts_to_id_suffixed_url() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v3/projects/7/issues/42"))
            .and(query_param("private_token", TOKEN))
            .and(body_string_contains("closed=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42, "project_id": 7, "title": "broken link", "closed": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = Params::new().set("project_id", 7);
        let issue: Issue = client_for(&server)
            .update::<ProjectIssue, _>(42, &[("closed", "1")], &params)
            .await
            .unwrap();

        assert_eq!(issue.id, Some(42));
        assert_eq!(issue.closed, Some(true));
    }

    #[tokio::test]
    async fn update_on_non_200_is_an_update_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v3/projects/7/issues/42"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404 Not Found"))
            .mount(&server)
            .await;

        let params = Params::new().set("project_id", 7);
        let err = client_for(&server)
            .update::<ProjectIssue, _>(42, &[("closed", "1")], &params)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Update);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.body(), Some("404 Not Found"));
    }

    #[tokio::test]
    async fn get_on_non_200_is_a_get_error_with_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users/5"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404 Not Found"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get::<User>(5, &Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Get);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.body(), Some("404 Not Found"));
    }

    #[tokio::test]
    async fn list_on_non_200_is_a_get_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list::<User>(&Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Get);
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.body(), Some("boom"));
    }

    #[tokio::test]
    async fn delete_returns_true_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/users/5"))
            .and(query_param("private_token", TOKEN))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let deleted = client_for(&server)
            .delete::<User>(5, &Params::new())
            .await
            .unwrap();
        assert!(deleted);
    }

    #[test_case(403)]
    #[test_case(404)]
    #[test_case(500)]
    #[tokio::test]
    async fn delete_returns_false_and_never_errors_on_non_200(status: u16) {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/users/5"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let deleted = client_for(&server)
            .delete::<User>(5, &Params::new())
            .await
            .unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn disabled_operation_fails_without_any_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete::<Project>(3, &Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::NotSupported);
        server.verify().await;
    }

    #[tokio::test]
    async fn missing_placeholder_fails_without_any_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list::<ProjectHook>(&Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::MissingParameter);
        server.verify().await;
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        // Nothing listens on port 1.
        let client = GitLabClient::builder()
            .base_url("http://127.0.0.1:1")
            .private_token(TOKEN)
            .build()
            .unwrap();

        let err = client.list::<User>(&Params::new()).await.unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Connection);
        assert!(format!("{}", err).contains("http://127.0.0.1:1/api/v3"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list::<User>(&Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), GitLabErrorKind::Deserialization);
    }
}
