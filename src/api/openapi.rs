use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, SessionUserDto,
};
use crate::contact::adapter::incoming::web::routes::ContactRequestDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio site and its admin dashboard",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,

        // Contact endpoint
        crate::contact::adapter::incoming::web::routes::send_contact_message_handler,

        // The remaining endpoints share the same envelope and guard
        // conventions; they are documented as they get annotated.
        // crate::profile::adapter::incoming::web::routes::get_profile_handler,
        // crate::project::adapter::incoming::web::routes::get_projects_handler,
        // crate::skill::adapter::incoming::web::routes::get_skills_handler,
        // crate::resume::adapter::incoming::web::routes::get_resume_handler,
        // crate::document::adapter::incoming::web::routes::get_documents_handler,
        // crate::gallery::adapter::incoming::web::routes::get_gallery_handler,
    ),
    components(schemas(
        LoginRequestDto,
        LoginResponse,
        SessionUserDto,
        ContactRequestDto,
        ErrorResponse,
        ErrorDetail,
    )),
    tags(
        (name = "auth", description = "Session management for the admin dashboard"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Adds the bearer scheme the admin routes expect.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();

        let components = doc.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );

        doc
    }
}
