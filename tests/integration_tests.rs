// Integration tests for the dashboard HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use std::sync::Arc;
use talent_matchmaker::routes::{self, dashboard::AppState};
use talent_matchmaker::{resolve_defaults, DashboardData, DashboardLoader, DashboardState, ScoreScale};

fn app_state() -> AppState {
    AppState {
        loader: Arc::new(DashboardLoader::new(100, 60)),
        score_scale: ScoreScale::default(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_default_dashboard() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let state: DashboardState<DashboardData> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(state, DashboardState::ready(resolve_defaults()));
}

#[actix_web::test]
async fn test_query_overrides() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/dashboard?name=Jane&key_skills=Go,Rust&match3_score=91&match3_name=Sam%20Ito")
        .to_request();
    let state: DashboardState<DashboardData> = test::call_and_read_body_json(&app, req).await;

    let DashboardState::Ready { dashboard } = state else {
        panic!("expected ready state");
    };
    assert_eq!(dashboard.member.name, "Jane");
    assert_eq!(dashboard.member.key_skills, vec!["Go", "Rust"]);
    assert_eq!(dashboard.member.industry, "Technology");
    assert_eq!(dashboard.matches[2].name, "Sam Ito");
    assert_eq!(dashboard.matches[2].matching_score, 91);
    assert_eq!(dashboard.matches[0].name, "Alice Smith");
}

#[actix_web::test]
async fn test_dashboard_view() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/dashboard/view?name=Mary%20Ann%20Lee&career_stage=Senior")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ready");
    let view = &body["dashboard"];
    assert_eq!(view["title"], "Talent Pool Matchmaker Dashboard");
    assert_eq!(view["profile"]["initials"], "MAL");
    assert_eq!(view["profile"]["headline"], "Technology | Senior");
    assert_eq!(view["matches"].as_array().map(Vec::len), Some(3));
    assert_eq!(view["matches"][0]["slot"], 1);
    assert_eq!(view["matches"][0]["score_percent"], 85);
}

#[actix_web::test]
async fn test_health_reports_cache() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["cached_dashboards"].is_u64());
}

#[actix_web::test]
async fn test_malformed_queries_degrade_to_ready() {
    let app = init_app!();

    let queries = [
        "%",
        "%ZZ",
        "a=%FF%FE",
        "=&&==",
        "name&name=x",
        "name=a&name=b",
        "%00=%00",
        "a[b]=c",
        "&&&%%%===",
    ];

    for query in queries {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/dashboard?{}", query))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "query {}", query);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ready", "query {}", query);
        assert_eq!(body["dashboard"]["matches"].as_array().map(Vec::len), Some(3), "query {}", query);
    }
}
