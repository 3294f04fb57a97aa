//! Tests for save date HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test as actix_test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    FixtureSaveDateCommand, FixtureSaveDateQuery, MockSaveDateCommand, MockSaveDateQuery,
};
use crate::domain::{SaveDateService, TRACE_ID_HEADER};
use crate::inbound::http::json::json_config;
use crate::middleware::Trace;
use crate::outbound::persistence::InMemorySaveDateRepository;

fn memory_state() -> HttpState {
    HttpState::from_service(Arc::new(SaveDateService::new(
        Arc::new(InMemorySaveDateRepository::new()),
        Arc::new(DefaultClock),
    )))
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .service(create_save_date)
                .service(list_save_dates),
        )
}

#[fixture]
fn valid_payload() -> Value {
    json!({
        "title": "Casamento João e Maria",
        "event_subtitle": "Uma celebração de amor",
        "event_summary": "Venha celebrar conosco este momento especial",
        "event_times": [
            {"label": "Cerimônia", "time": "14:00"},
            {"label": "Cocktail", "time": "15:30"}
        ],
        "event_venue": "Salão de Festas",
        "event_address": "Rua das Flores, 123",
        "event_city": "São Paulo"
    })
}

fn post_json(payload: &Value) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/api/v1/save-dates")
        .set_json(payload)
        .to_request()
}

fn get_list() -> actix_http::Request {
    actix_test::TestRequest::get()
        .uri("/api/v1/save-dates")
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn create_returns_enveloped_record(valid_payload: Value) {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], CREATED_MESSAGE);

    let data = &body["data"];
    for field in [
        "title",
        "event_subtitle",
        "event_summary",
        "event_times",
        "event_venue",
        "event_address",
        "event_city",
    ] {
        assert_eq!(data[field], valid_payload[field], "{field}");
    }
    assert!(uuid::Uuid::parse_str(data["id"].as_str().expect("id string")).is_ok());
    assert_eq!(data["created_at"], data["updated_at"]);
    assert_eq!(data.as_object().expect("data object").len(), 10);
}

#[rstest]
#[actix_web::test]
async fn create_without_subtitle_reports_null(mut valid_payload: Value) {
    valid_payload
        .as_object_mut()
        .expect("payload object")
        .remove("event_subtitle");
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"]["event_subtitle"], Value::Null);
}

#[rstest]
#[case("title", json!("AB"))]
#[case("event_summary", json!("Curta"))]
#[case("event_venue", json!("Lo"))]
#[case("event_address", json!("En"))]
#[case("event_city", json!("A"))]
#[case("event_times", json!([]))]
#[case("event_times", json!("not a list"))]
#[actix_web::test]
async fn invalid_field_is_reported_alone(
    mut valid_payload: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    valid_payload[field] = value;
    let mut command = MockSaveDateCommand::new();
    command.expect_create().never();
    let state = HttpState::new(Arc::new(command), Arc::new(FixtureSaveDateQuery));
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let keys: Vec<&String> = body.as_object().expect("error mapping").keys().collect();
    assert_eq!(keys, vec![field]);
    assert!(body[field].is_array());
}

#[rstest]
#[case("25:00")]
#[case("14:60")]
#[case("2:30 PM")]
#[case("invalid_time")]
#[actix_web::test]
async fn invalid_slot_time_is_rejected(mut valid_payload: Value, #[case] time: &str) {
    valid_payload["event_times"] = json!([{"label": "Evento", "time": time}]);
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["event_times"],
        json!(["[0] time: Time must be in HH:MM 24-hour format."])
    );
}

#[rstest]
#[actix_web::test]
async fn rejected_payload_is_not_stored(mut valid_payload: Value) {
    valid_payload["title"] = json!("AB");
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listed: Value =
        actix_test::read_body_json(actix_test::call_service(&app, get_list()).await).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case(json!([1, 2, 3]))]
#[case(json!("text"))]
#[case(Value::Null)]
#[actix_web::test]
async fn non_object_body_is_invalid_request(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, post_json(&payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn malformed_json_uses_error_envelope() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/save-dates")
        .insert_header(ContentType::json())
        .set_payload("{\"title\": ")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["traceId"], trace_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn non_json_content_type_is_unsupported_media_type(valid_payload: Value) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/save-dates")
        .insert_header(ContentType::plaintext())
        .set_payload(valid_payload.to_string())
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "unsupported_media_type");
}

#[rstest]
#[actix_web::test]
async fn list_is_empty_for_new_store() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let response = actix_test::call_service(&app, get_list()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn list_returns_created_record(valid_payload: Value) {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let created: Value =
        actix_test::read_body_json(actix_test::call_service(&app, post_json(&valid_payload)).await)
            .await;
    let first: Value =
        actix_test::read_body_json(actix_test::call_service(&app, get_list()).await).await;
    let second: Value =
        actix_test::read_body_json(actix_test::call_service(&app, get_list()).await).await;

    assert_eq!(first, json!([created["data"].clone()]));
    assert_eq!(first, second);
}

#[rstest]
#[case(
    Error::service_unavailable("save date repository unavailable"),
    StatusCode::SERVICE_UNAVAILABLE
)]
#[case(
    Error::internal("relation \"save_dates\" does not exist"),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[actix_web::test]
async fn list_surfaces_store_failures(#[case] failure: Error, #[case] status: StatusCode) {
    let mut query = MockSaveDateQuery::new();
    query
        .expect_list_all()
        .times(1)
        .return_once(move || Err(failure));
    let state = HttpState::new(Arc::new(FixtureSaveDateCommand), Arc::new(query));
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(&app, get_list()).await;

    assert_eq!(response.status(), status);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(
        !body["message"]
            .as_str()
            .expect("message string")
            .contains("save_dates\""),
        "internal detail leaked: {body}"
    );
}

#[rstest]
#[actix_web::test]
async fn create_surfaces_store_failures(valid_payload: Value) {
    let mut command = MockSaveDateCommand::new();
    command
        .expect_create()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("save date repository unavailable")));
    let state = HttpState::new(Arc::new(command), Arc::new(FixtureSaveDateQuery));
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(&app, post_json(&valid_payload)).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "service_unavailable");
}
