use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::passes::VisualPassReport;
use crate::web::server::AppState;

use super::templates::{format_pass_table, format_summary, PageTemplate};

/// Template rendering failure, reported as a bare 500
pub struct PageError(askama::Error);

impl From<askama::Error> for PageError {
    fn from(e: askama::Error) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Renders visual passes for every configured satellite. Bound to all paths
/// and methods.
pub async fn satellite_passes(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let outcome = state.client.fetch_reports(&state.config.satellites).await;

    let status = match &outcome.error {
        Some(e) => {
            log::warn!("Serving {} report(s): {}", outcome.reports.len(), e);
            format!("Error: {}", e)
        }
        None => "OK".to_string(),
    };

    let page = PageTemplate {
        title: &state.config.page.title,
        heading: &state.config.page.heading,
        count: outcome.reports.len(),
        content: render_reports(&outcome.reports)?,
        status,
    };

    Ok(Html(page.render()?))
}

fn render_reports(reports: &[VisualPassReport]) -> Result<String, askama::Error> {
    let mut content = String::new();
    for report in reports {
        content.push_str(&format_summary(report)?);
        content.push_str("<br/>");
        content.push_str(&format_pass_table(report)?);
        content.push_str("<br/>");
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::{DataSource, FixtureSource, PassClient};
    use crate::web::config::Config;
    use crate::web::server::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_with(satellites: Vec<u32>) -> AppState {
        let config = Config {
            satellites,
            ..Config::default()
        };
        let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");
        AppState {
            config: Arc::new(config),
            client: Arc::new(PassClient::new(DataSource::Fixture(FixtureSource::new(
                fixtures,
            )))),
        }
    }

    async fn get(state: AppState, method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn renders_every_configured_satellite() {
        let (status, body) = get(state_with(vec![25544, 48274, 20580]), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>Satellites: 3</p>"));
        assert!(body.contains("SPACE STATION (25544)"));
        assert!(body.contains("CSS (TIANHE) (48274)"));
        assert!(body.contains("HST (20580)"));
        assert!(body.contains("Status: OK"));
        assert_eq!(body.matches("<table>").count(), 3);
        assert_eq!(body.matches("<br/>").count(), 6);
    }

    #[tokio::test]
    async fn reports_keep_configured_order() {
        let (_, body) = get(state_with(vec![20580, 25544]), Method::GET, "/").await;

        let hst = body.find("HST (20580)").unwrap();
        let iss = body.find("SPACE STATION (25544)").unwrap();
        assert!(hst < iss);
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_partial_page() {
        let (status, body) = get(state_with(vec![25544, 11111, 20580]), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>Satellites: 1</p>"));
        assert!(body.contains("SPACE STATION (25544)"));
        assert!(!body.contains("HST (20580)"));
        assert!(body.contains("Status: Error: obtaining visual passes for satellite 11111"));
    }

    #[tokio::test]
    async fn first_failure_leaves_an_empty_page() {
        let (status, body) = get(state_with(vec![11111, 25544]), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>Satellites: 0</p>"));
        assert!(!body.contains("<table>"));
        assert!(body.contains("Error:"));
    }

    #[tokio::test]
    async fn every_path_and_method_is_served() {
        for (method, uri) in [
            (Method::GET, "/anything/at/all"),
            (Method::POST, "/"),
            (Method::DELETE, "/passes?x=1"),
        ] {
            let (status, body) = get(state_with(vec![20580]), method, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("HST (20580)"));
        }
    }
}
