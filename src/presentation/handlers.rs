// HTTP request handlers
use crate::domain::time_slice::TimeSliceKey;
use crate::infrastructure::locale::LocaleCatalog;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Latest composed view: map layers, viewport and formatted stats.
pub async fn current_view(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.latest_view() {
        Some(view) => Json(view).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Select a time slice by code (ENE..DIC or Annual).
pub async fn select_slice(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    let Some(key) = TimeSliceKey::parse(&key) else {
        return StatusCode::BAD_REQUEST;
    };
    command_status(state.dashboard.select_slice(key).await)
}

pub async fn toggle_playback(State(state): State<Arc<AppState>>) -> StatusCode {
    command_status(state.dashboard.toggle_playback().await)
}

pub async fn toggle_stations(State(state): State<Arc<AppState>>) -> StatusCode {
    command_status(state.dashboard.toggle_stations().await)
}

pub async fn set_language(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    command_status(state.dashboard.set_language(code).await)
}

/// String catalog for control relabeling; unknown codes get the fallback.
pub async fn get_catalog(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<LocaleCatalog> {
    Json(state.locales.get(&code).clone())
}

fn command_status(result: anyhow::Result<()>) -> StatusCode {
    match result {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("failed to dispatch command: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::dataset::fixtures;
    use crate::domain::map::Viewport;
    use crate::domain::view::RenderedView;
    use crate::infrastructure::locale;
    use crate::infrastructure::view_channel::ChannelRenderSink;
    use std::time::Duration;
    use tokio::sync::watch;
    use tokio::time::sleep;

    fn app_state(view: watch::Receiver<Option<RenderedView>>) -> Arc<AppState> {
        let (sink, _unused) = ChannelRenderSink::channel();
        let dashboard = DashboardService::spawn(
            Arc::new(fixtures::dataset()),
            Arc::new(locale::fixtures::locales()),
            Viewport {
                center_lat: 4.5,
                center_lon: -73.5,
                zoom: 4.0,
                basemap: "carto-darkmatter".to_string(),
            },
            Duration::from_millis(1500),
            Arc::new(sink),
        );
        Arc::new(AppState {
            dashboard,
            view,
            locales: Arc::new(locale::fixtures::locales()),
        })
    }

    #[tokio::test]
    async fn test_view_before_first_render_is_service_unavailable() {
        let (_tx, rx) = watch::channel::<Option<RenderedView>>(None);
        let state = app_state(rx);

        let response = current_view(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_after_first_render_is_ok() {
        let (sink, rx) = ChannelRenderSink::channel();
        let dashboard = DashboardService::spawn(
            Arc::new(fixtures::dataset()),
            Arc::new(locale::fixtures::locales()),
            Viewport {
                center_lat: 4.5,
                center_lon: -73.5,
                zoom: 4.0,
                basemap: "carto-darkmatter".to_string(),
            },
            Duration::from_millis(1500),
            Arc::new(sink),
        );
        let state = Arc::new(AppState {
            dashboard,
            view: rx,
            locales: Arc::new(locale::fixtures::locales()),
        });
        sleep(Duration::from_millis(10)).await;

        let response = current_view(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_select_slice_rejects_garbage_key() {
        let (_tx, rx) = watch::channel::<Option<RenderedView>>(None);
        let state = app_state(rx);

        let status = select_slice(Path("XYZ".to_string()), State(state)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_select_slice_accepts_known_key() {
        let (_tx, rx) = watch::channel::<Option<RenderedView>>(None);
        let state = app_state(rx);

        let status = select_slice(Path("FEB".to_string()), State(state)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
