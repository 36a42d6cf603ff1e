use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::document::application::ports::incoming::use_cases::DeleteDocumentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/documents/{id}")]
pub async fn delete_document_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.document.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteDocumentError::NotFound) => {
            ApiResponse::not_found("DOCUMENT_NOT_FOUND", "Document not found")
        }

        Err(DeleteDocumentError::DeleteFailed(msg)) => {
            error!("Document delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::document::application::ports::incoming::use_cases::DeleteDocumentUseCase;
    use crate::tests::support::{admin_bearer, app_state_builder::TestAppStateBuilder};

    #[derive(Clone)]
    struct MockDelete {
        result: Result<(), DeleteDocumentError>,
    }

    #[async_trait]
    impl DeleteDocumentUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteDocumentError> {
            self.result.clone()
        }
    }

    async fn delete_document(mock: MockDelete) -> StatusCode {
        let app_state = TestAppStateBuilder::default().with_delete_document(mock).build();
        let (token, provider) = admin_bearer();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(delete_document_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/documents/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn delete_returns_204() {
        let status = delete_document(MockDelete { result: Ok(()) }).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn missing_document_returns_404() {
        let status = delete_document(MockDelete {
            result: Err(DeleteDocumentError::NotFound),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
