#[cfg(test)]
mod integration_tests {
    use crate::config::ServerConfig;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        FAILING_COUNTRY, REJECTED_COUNTRY, UNREACHABLE_UPSTREAM, setup_test_app,
        spawn_stub_upstream, test_config,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{
        CountriesResponse, ErrorDetail, FormField, PredictionForm, PredictionResponse,
        detail_from_body, failure_message, format_prediction,
    };

    fn prediction_form(country: &str) -> PredictionForm {
        let mut form = PredictionForm::default();
        for (field, value) in [
            (FormField::Year, "2015"),
            (FormField::Country, country),
            (FormField::TuberculosisTreatment, "87"),
            (FormField::HospitalBeds, "1.4"),
            (FormField::UrbanPopulation, "25.6"),
            (FormField::RuralPopulation, "74.4"),
            (FormField::Gdp, "1464"),
        ] {
            form.set(field, value).unwrap();
        }
        form
    }

    #[tokio::test]
    async fn test_health_check() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.upstream, upstream);
    }

    #[tokio::test]
    async fn test_countries_are_forwarded() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server.get("/api/countries").await;

        response.assert_status(StatusCode::OK);
        let body: CountriesResponse = response.json();
        assert_eq!(body.countries, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_prediction_is_forwarded() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server
            .post("/api/predict")
            .json(&prediction_form("Kenya"))
            .await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert_eq!(format_prediction(body.prediction), "72.35 years");
    }

    #[tokio::test]
    async fn test_prediction_error_detail_is_preserved() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server
            .post("/api/predict")
            .json(&prediction_form(REJECTED_COUNTRY))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let detail = detail_from_body(&response.text());
        assert_eq!(failure_message(detail.as_deref()), "bad input");
    }

    #[tokio::test]
    async fn test_prediction_error_without_detail_falls_back() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server
            .post("/api/predict")
            .json(&prediction_form(FAILING_COUNTRY))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal Server Error");
        let detail = detail_from_body(&response.text());
        assert_eq!(
            failure_message(detail.as_deref()),
            "Failed to get prediction. Please try again."
        );
    }

    #[tokio::test]
    async fn test_api_prefix_is_stripped_when_configured() {
        let upstream = spawn_stub_upstream().await;
        let config = ServerConfig {
            strip_api_prefix: true,
            ..test_config(&upstream)
        };
        let server = TestServer::new(setup_test_app(config)).unwrap();

        let response = server.get("/api/countries").await;

        response.assert_status(StatusCode::OK);
        let body: CountriesResponse = response.json();
        assert_eq!(body.countries, vec!["Stripped"]);

        let response = server
            .post("/api/predict")
            .json(&prediction_form("Kenya"))
            .await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_api_paths_keep_method_and_query() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server
            .delete("/api/echo")
            .add_query_param("year", "2015")
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "DELETE /api/echo?year=2015");
    }

    #[tokio::test]
    async fn test_documented_paths_forward_every_method() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server.get("/api/predict").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "GET /api/predict");
    }

    #[tokio::test]
    async fn test_unknown_upstream_path_passes_status_through() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server.get("/api/unknown").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_bad_gateway() {
        let server = TestServer::new(setup_test_app(test_config(UNREACHABLE_UPSTREAM))).unwrap();

        let response = server
            .post("/api/predict")
            .json(&prediction_form("Kenya"))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorDetail = response.json();
        assert_eq!(body.detail, "Upstream prediction service unavailable");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_for_countries() {
        let server = TestServer::new(setup_test_app(test_config(UNREACHABLE_UPSTREAM))).unwrap();

        let response = server.get("/api/countries").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(detail_from_body(&response.text()).is_some());
    }

    #[tokio::test]
    async fn test_frontend_is_served_with_index_fallback() {
        let upstream = spawn_stub_upstream().await;
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>predictor</html>").unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log('app');").unwrap();

        let config = ServerConfig {
            static_dir: dist.path().to_string_lossy().into_owned(),
            ..test_config(&upstream)
        };
        let server = TestServer::new(setup_test_app(config)).unwrap();

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "<html>predictor</html>");

        let response = server.get("/app.js").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "console.log('app');");

        let response = server.get("/some/client/route").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "<html>predictor</html>");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let upstream = spawn_stub_upstream().await;
        let server = TestServer::new(setup_test_app(test_config(&upstream))).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["paths"]["/api/predict"]["post"].is_object());
        assert!(body["paths"]["/api/countries"]["get"].is_object());
    }
}
