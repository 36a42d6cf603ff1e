use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::incoming::use_cases::{CreateProjectError, ProjectInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Shared request body for create, update and bulk save.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectRequestDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub image_location: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<ProjectRequestDto> for ProjectInput {
    fn from(dto: ProjectRequestDto) -> Self {
        ProjectInput {
            title: dto.title,
            description: dto.description,
            tech_stack: dto.tech_stack,
            image_location: dto.image_location,
            repo_url: dto.repo_url,
            live_url: dto.live_url,
            featured: dto.featured,
        }
    }
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner().into()).await {
        Ok(view) => ApiResponse::created(view),

        Err(CreateProjectError::SaveFailed(msg)) => {
            error!("Project create failed: {}", msg);
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
    use uuid::Uuid;

    use crate::project::application::ports::incoming::use_cases::{
        CreateProjectUseCase, ProjectView,
    };
    use crate::tests::support::{admin_bearer, app_state_builder::TestAppStateBuilder};

    #[derive(Clone)]
    struct MockCreate {
        result: Result<ProjectView, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreate {
        async fn execute(&self, _input: ProjectInput) -> Result<ProjectView, CreateProjectError> {
            self.result.clone()
        }
    }

    fn view() -> ProjectView {
        ProjectView {
            id: Uuid::new_v4(),
            title: "Portfolio".to_string(),
            description: "Site".to_string(),
            tech_stack: vec![],
            image_url: None,
            repo_url: None,
            live_url: None,
            featured: false,
            order_index: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn post_project(mock: MockCreate) -> StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(mock)
            .build();
        let (token, provider) = admin_bearer();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "title": "Portfolio",
                "description": "Site"
            }))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn create_returns_201() {
        let status = post_project(MockCreate { result: Ok(view()) }).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn save_failure_returns_500() {
        let status = post_project(MockCreate {
            result: Err(CreateProjectError::SaveFailed("db down".to_string())),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
