//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::config::API_KEY_VAR;
use crate::seoul::FetchError;

use super::dto::*;
use super::notice::Notice;
use super::session::{DashboardQuery, Session};
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/api/arrivals", get(arrivals))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Dashboard page.
///
/// Fetch failures become notices on the page; only template errors fail
/// the request.
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let session = Session::from_query(query, &state.dashboard.default_station);
    let mut notices = Vec::new();
    let mut board = None;

    if state.feed.is_none() {
        notices.extend(Notice::missing_key());
    }

    if session.station.is_empty() {
        notices.push(Notice::enter_station());
    } else if let Some(feed) = &state.feed {
        match feed.board(&session.station).await {
            Ok(grouped) if grouped.is_empty() => notices.push(Notice::no_trains()),
            Ok(grouped) => {
                let fetched_at = Local::now().format("%H:%M:%S").to_string();
                board = Some(BoardView::new(&session.station, &grouped, fetched_at));
            }
            Err(e) => {
                tracing::warn!(
                    station = %session.station,
                    kind = e.kind(),
                    error = %e,
                    "fetch failed"
                );
                notices.extend(Notice::from_fetch_error(&e));
            }
        }
    }

    let template = DashboardTemplate {
        session,
        notices,
        board,
        refresh_interval_secs: state.dashboard.auto_refresh_secs,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// Arrivals for a station as JSON.
async fn arrivals(
    State(state): State<AppState>,
    Query(req): Query<ArrivalsRequest>,
) -> Result<Json<ArrivalsResponse>, AppError> {
    let station = req.station.trim();
    if station.is_empty() {
        return Err(AppError::BadRequest {
            message: "station is required".to_string(),
        });
    }

    let feed = state.feed.as_ref().ok_or_else(|| AppError::Unavailable {
        message: format!("{API_KEY_VAR} is not set"),
    })?;

    let board = feed.board(station).await?;
    let fetched_at = Local::now().to_rfc3339();

    Ok(Json(ArrivalsResponse::new(station, &board, fetched_at)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Upstream { kind: &'static str, message: String },
    Internal { message: String },
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotConfigured(message) => AppError::Unavailable { message },
            _ => AppError::Upstream {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, kind) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::Unavailable { message } => {
                (StatusCode::SERVICE_UNAVAILABLE, message, Some("config"))
            }
            AppError::Upstream { kind, message } => (StatusCode::BAD_GATEWAY, message, Some(kind)),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        tracing::error!(%status, kind, "{message}");

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::seoul::{ArrivalFeed, FixtureFeed};

    fn fixture_state() -> AppState {
        let feed = ArrivalFeed::Fixture(FixtureFeed::new("data/fixtures").unwrap());
        AppState::new(Some(feed), DashboardConfig::default())
    }

    fn query(station: Option<&str>) -> Query<DashboardQuery> {
        Query(DashboardQuery {
            station: station.map(String::from),
            auto: None,
            refresh: None,
        })
    }

    async fn page(state: AppState, station: Option<&str>) -> String {
        dashboard(State(state), query(station)).await.unwrap().0
    }

    #[tokio::test]
    async fn default_station_is_shown() {
        let html = page(fixture_state(), None).await;

        // Quotes around the station name are HTML-escaped
        assert!(html.contains("지축&#x27; 역 하행선 도착 정보"));
        assert!(html.contains("지축&#x27; 역 상행선 도착 정보"));
        assert!(html.contains("2분 5초 후"));
        assert!(html.contains("막차"));
        assert!(!html.contains("접수"));
    }

    #[tokio::test]
    async fn legacy_fixture_renders() {
        let html = page(fixture_state(), Some("강남")).await;
        assert!(html.contains("성수 방면"));
        assert!(html.contains("신도림 방면"));
        assert!(html.contains("2호선"));
    }

    #[tokio::test]
    async fn blank_station_prompts() {
        let html = page(fixture_state(), Some("  ")).await;
        assert!(html.contains("위에 역 이름을 입력해주세요"));
        assert!(!html.contains("역 하행선 도착 정보"));
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let html = page(fixture_state(), Some("빈역")).await;
        assert!(html.contains("현재 도착 예정인 열차가 없습니다."));
        assert!(!html.contains("notice-error"));
    }

    #[tokio::test]
    async fn api_error_is_shown() {
        let html = page(fixture_state(), Some("오류역")).await;
        assert!(html.contains("API 오류: invalid key"));
        assert!(html.contains("해당 역을 찾을 수 없습니다"));
    }

    #[tokio::test]
    async fn unexpected_shape_lists_keys() {
        let html = page(fixture_state(), Some("이상한역")).await;
        assert!(html.contains("예상치 못한 API 응답 형식입니다"));
        assert!(html.contains("developerMessage"));
    }

    #[tokio::test]
    async fn missing_key_warns_without_failing() {
        let state = AppState::new(None, DashboardConfig::default());
        let html = page(state, None).await;
        assert!(html.contains("API_KEY를 설정해주세요."));
        assert!(html.contains("역 이름을 입력하세요"));
    }

    #[tokio::test]
    async fn auto_refresh_adds_meta_refresh() {
        let html = dashboard(
            State(fixture_state()),
            Query(DashboardQuery {
                station: Some("강남".into()),
                auto: Some("on".into()),
                refresh: Some("3".into()),
            }),
        )
        .await
        .unwrap()
        .0;

        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("station_input_3"));
        assert!(html.contains("value=\"4\""));
    }

    #[tokio::test]
    async fn arrivals_json() {
        let Json(response) = arrivals(
            State(fixture_state()),
            Query(ArrivalsRequest {
                station: " 지축 ".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.station, "지축");
        assert_eq!(response.count, 5);
        assert_eq!(response.up.len(), 2);
        assert_eq!(response.down.len(), 3);
        assert_eq!(response.up[0].time, "2분 5초 후");
    }

    #[tokio::test]
    async fn arrivals_json_errors() {
        let blank = arrivals(
            State(fixture_state()),
            Query(ArrivalsRequest { station: "".into() }),
        )
        .await
        .unwrap_err();
        assert_eq!(blank.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = arrivals(
            State(fixture_state()),
            Query(ArrivalsRequest {
                station: "오류역".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);

        let unconfigured = arrivals(
            State(AppState::new(None, DashboardConfig::default())),
            Query(ArrivalsRequest {
                station: "지축".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(
            unconfigured.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn error_body_carries_kind() {
        let err = arrivals(
            State(fixture_state()),
            Query(ArrivalsRequest {
                station: "이상한역".into(),
            }),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["kind"], "unexpected_shape");
        assert!(body["error"].as_str().unwrap().contains("developerMessage"));
    }

    #[tokio::test]
    async fn hand_edited_refresh_still_renders() {
        for uri in ["/?station=%EA%B0%95%EB%82%A8&refresh=x", "/?station=%EA%B0%95%EB%82%A8&refresh="] {
            let uri: axum::http::Uri = uri.parse().unwrap();
            let query = Query::<DashboardQuery>::try_from_uri(&uri).unwrap();

            let html = dashboard(State(fixture_state()), query).await.unwrap().0;
            assert!(html.contains("station_input_0"));
            assert!(html.contains("성수 방면"));
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
