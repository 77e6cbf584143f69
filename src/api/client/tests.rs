use std::time::Duration;

use mockito::Matcher;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::*;

const TASKS_BODY: &str = r#"{
	"kind": "tasks",
	"data": [
		{"id": "T2", "title": "Second", "description": "<p>b</p>", "briefDescription": "b", "status": "Active", "permalink": "https://www.wrike.com/open.htm?id=2"},
		{"id": "T1", "title": "First", "description": "<p>a</p>", "briefDescription": "a", "status": "Completed", "permalink": "https://www.wrike.com/open.htm?id=1"}
	]
}"#;

fn client_for(server: &mockito::ServerGuard) -> WrikeClient {
	let host = Url::parse(&server.url()).expect("server url");
	WrikeClient::new(&host, "secret").expect("client")
}

#[tokio::test]
async fn tasks_request_sends_bearer_token_and_query() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api/v4/tasks")
		.match_header("authorization", "bearer secret")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("fields".into(), "[description]".into()),
			Matcher::UrlEncoded("title".into(), "release plan".into()),
		]))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(TASKS_BODY)
		.create_async()
		.await;

	let client = client_for(&server);
	let params = QueryParams::new()
		.with("fields", "[description]")
		.with("title", "release plan");
	let tasks = client
		.tasks(&params, &CancellationToken::new())
		.await
		.expect("tasks");

	mock.assert_async().await;
	let ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
	assert_eq!(ids, vec!["T2", "T1"]);
}

#[tokio::test]
async fn contacts_are_decoded() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api/v4/contacts")
		.with_status(200)
		.with_body(r#"{"kind":"contacts","data":[{"id":"U1","firstName":"Ada","me":false},{"id":"U2","me":true}]}"#)
		.create_async()
		.await;

	let client = client_for(&server);
	let users = client
		.contacts(&CancellationToken::new())
		.await
		.expect("contacts");

	mock.assert_async().await;
	assert_eq!(users.len(), 2);
	assert!(users[1].me);
	assert!(!users[0].me);
}

#[tokio::test]
async fn error_description_in_body_is_surfaced() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api/v4/contacts")
		.with_status(401)
		.with_body(r#"{"errorDescription":"Access token is invalid","error":"not_authorized"}"#)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.contacts(&CancellationToken::new())
		.await
		.unwrap_err();

	assert_eq!(
		err,
		SearchError::Api {
			status: 401,
			message: "Access token is invalid".into(),
		}
	);
}

#[tokio::test]
async fn pre_cancelled_token_skips_the_network() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api/v4/tasks")
		.expect(0)
		.create_async()
		.await;

	let client = client_for(&server);
	let cancel = CancellationToken::new();
	cancel.cancel();
	let err = client.tasks(&QueryParams::new(), &cancel).await.unwrap_err();

	assert!(err.is_cancelled());
	mock.assert_async().await;
}

#[tokio::test]
async fn cancelling_mid_request_aborts_the_call() {
	// Accepts the connection and never answers.
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	let (accepted_tx, accepted_rx) = oneshot::channel();
	let server = tokio::spawn(async move {
		let (socket, _) = listener.accept().await.expect("accept");
		let _ = accepted_tx.send(());
		tokio::time::sleep(Duration::from_secs(60)).await;
		drop(socket);
	});

	let host = Url::parse(&format!("http://{addr}")).expect("url");
	let client = WrikeClient::new(&host, "secret").expect("client");
	let cancel = CancellationToken::new();
	let trigger = cancel.clone();
	tokio::spawn(async move {
		if accepted_rx.await.is_ok() {
			trigger.cancel();
		}
	});

	let outcome = tokio::time::timeout(Duration::from_secs(10), client.contacts(&cancel))
		.await
		.expect("cancellation should end the request");
	assert_eq!(outcome.unwrap_err(), SearchError::Cancelled);
	server.abort();
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	drop(listener);

	let host = Url::parse(&format!("http://{addr}")).expect("url");
	let client = WrikeClient::new(&host, "secret").expect("client");
	let err = client
		.tasks(&QueryParams::new(), &CancellationToken::new())
		.await
		.unwrap_err();

	assert!(matches!(err, SearchError::Transport(_)), "got {err:?}");
	assert!(!err.is_cancelled());
}

#[test]
fn endpoint_urls_keep_host_path_prefix() {
	let host = Url::parse("https://proxy.example.com/wrike").expect("url");
	let client = WrikeClient::new(&host, "t").expect("client");
	assert_eq!(
		client.endpoint_url("tasks").expect("url").as_str(),
		"https://proxy.example.com/wrike/api/v4/tasks"
	);

	let host = Url::parse(DEFAULT_HOST).expect("url");
	let client = WrikeClient::new(&host, "t").expect("client");
	assert_eq!(
		client.endpoint_url("contacts").expect("url").as_str(),
		"https://www.wrike.com/api/v4/contacts"
	);
}

#[test]
fn error_status_without_body_uses_status_text() {
	let err = decode_response::<Task>("tasks", StatusCode::SERVICE_UNAVAILABLE, b"<html>")
		.unwrap_err();
	assert_eq!(err.to_string(), "Service Unavailable");
}

#[test]
fn error_description_wins_even_with_success_status() {
	let err = decode_response::<Task>(
		"tasks",
		StatusCode::OK,
		br#"{"errorDescription":"Parameter 'title' value is invalid"}"#,
	)
	.unwrap_err();
	assert_eq!(err.to_string(), "Parameter 'title' value is invalid");
}

#[test]
fn legacy_message_field_is_used_for_failures() {
	let err = decode_response::<Task>("tasks", StatusCode::BAD_REQUEST, br#"{"message":"bad"}"#)
		.unwrap_err();
	assert_eq!(err.to_string(), "bad");
}

#[test]
fn unexpected_shapes_are_malformed() {
	let err = decode_response::<Task>("tasks", StatusCode::OK, br#"{"items":[]}"#).unwrap_err();
	assert!(matches!(err, SearchError::Malformed { endpoint: "tasks", .. }));

	let err = decode_response::<Task>("tasks", StatusCode::OK, b"not json").unwrap_err();
	assert!(matches!(err, SearchError::Malformed { .. }));
}
