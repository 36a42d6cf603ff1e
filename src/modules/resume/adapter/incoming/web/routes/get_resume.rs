use actix_web::{get, web, Responder};
use tracing::error;

use crate::resume::application::ports::incoming::use_cases::GetResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public résumé data: education, experience and certifications together.
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.get.execute().await {
        Ok(view) => ApiResponse::success(view),

        Err(GetResumeError::QueryFailed(msg)) => {
            error!("Resume lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::resume::application::ports::incoming::use_cases::{GetResumeUseCase, ResumeView};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGet {
        result: Result<ResumeView, GetResumeError>,
    }

    #[async_trait]
    impl GetResumeUseCase for MockGet {
        async fn execute(&self) -> Result<ResumeView, GetResumeError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn resume_is_public() {
        let app_state = TestAppStateBuilder::default()
            .with_get_resume(MockGet {
                result: Ok(ResumeView {
                    education: vec![],
                    experience: vec![],
                    certifications: vec![],
                }),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_resume_handler)).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["education"].is_array());
        assert!(body["data"]["certifications"].is_array());
    }
}
