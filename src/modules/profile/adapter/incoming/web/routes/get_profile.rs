use actix_web::{get, web, Responder};
use tracing::error;

use crate::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile for the home/about pages.
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(view) => ApiResponse::success(view),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetProfileError::QueryFailed(msg)) => {
            error!("Profile lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::profile::application::ports::incoming::use_cases::{
        GetProfileUseCase, ProfileView,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGetProfile {
        result: Result<ProfileView, GetProfileError>,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfile {
        async fn execute(&self) -> Result<ProfileView, GetProfileError> {
            self.result.clone()
        }
    }

    fn view() -> ProfileView {
        ProfileView {
            id: Uuid::new_v4(),
            headline: "Software Engineer".to_string(),
            bio: "I build things.".to_string(),
            location: Some("Kupang".to_string()),
            contact_email: None,
            skills: vec!["Rust".to_string()],
            image_url: Some("https://cdn.example.com/profile-images/me.webp".to_string()),
            social_links: serde_json::json!({}),
            updated_at: Utc::now(),
        }
    }

    async fn get_profile(mock: MockGetProfile) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_get_profile(mock).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn profile_is_public() {
        let (status, body) = get_profile(MockGetProfile { result: Ok(view()) }).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["headline"], "Software Engineer");
        assert_eq!(
            body["data"]["image_url"],
            "https://cdn.example.com/profile-images/me.webp"
        );
    }

    #[actix_web::test]
    async fn unset_profile_returns_404() {
        let (status, body) = get_profile(MockGetProfile {
            result: Err(GetProfileError::NotFound),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }
}
