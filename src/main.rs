pub mod modules;
pub use modules::auth;
pub use modules::contact;
pub use modules::document;
pub use modules::gallery;
pub use modules::profile;
pub use modules::project;
pub use modules::resume;
pub use modules::skill;
pub use modules::storage;

pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_revocation_redis::RedisTokenRevocationList;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::password_hasher::PasswordVerifier;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::service::get_session_service::GetSessionService;
use crate::auth::application::service::login_service::LoginService;
use crate::auth::application::service::logout_service::LogoutService;

use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::service::send_contact_message_service::SendContactMessageService;

use crate::document::adapter::outgoing::document_repository_postgres::DocumentRepositoryPostgres;
use crate::document::application::document_use_cases::DocumentUseCases;
use crate::document::application::service::delete_document_service::DeleteDocumentService;
use crate::document::application::service::get_documents_service::GetDocumentsService;
use crate::document::application::service::save_documents_service::SaveDocumentsService;

use crate::gallery::adapter::outgoing::gallery_repository_postgres::GalleryRepositoryPostgres;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::service::delete_gallery_item_service::DeleteGalleryItemService;
use crate::gallery::application::service::get_gallery_service::GetGalleryService;
use crate::gallery::application::service::save_gallery_service::SaveGalleryService;

use crate::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::get_profile_service::GetProfileService;
use crate::profile::application::service::update_profile_service::UpdateProfileService;

use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::create_project_service::CreateProjectService;
use crate::project::application::service::delete_project_service::DeleteProjectService;
use crate::project::application::service::list_projects_service::ListProjectsService;
use crate::project::application::service::save_projects_service::SaveProjectsService;
use crate::project::application::service::update_project_service::UpdateProjectService;

use crate::resume::adapter::outgoing::resume_repository_postgres::ResumeRepositoryPostgres;
use crate::resume::application::ports::outgoing::resume_repository::ResumeRepository;
use crate::resume::application::resume_use_cases::ResumeUseCases;
use crate::resume::application::service::get_resume_service::GetResumeService;
use crate::resume::application::service::save_sections_service::SaveResumeSectionsService;

use crate::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::skill::application::service::get_skills_service::GetSkillsService;
use crate::skill::application::service::save_skills_service::SaveSkillsService;
use crate::skill::application::skill_use_cases::SkillUseCases;

use crate::storage::adapter::outgoing::gcs_object_store::GcsObjectStore;
use crate::storage::application::ports::outgoing::object_store::ObjectStore;
use crate::storage::application::service::browse_folder_service::BrowseFolderService;
use crate::storage::application::service::create_folder_service::CreateFolderService;
use crate::storage::application::service::delete_folder_service::DeleteFolderService;
use crate::storage::application::service::delete_object_service::DeleteObjectService;
use crate::storage::application::service::init_upload_service::InitUploadService;
use crate::storage::application::storage_use_cases::StorageUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub resume: ResumeUseCases,
    pub document: DocumentUseCases,
    pub gallery: GalleryUseCases,
    pub storage: StorageUseCases,
    pub contact: ContactUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    // Object storage
    let bucket = env::var("STORAGE_BUCKET").expect("STORAGE_BUCKET is not set");
    let public_base_url =
        env::var("PUBLIC_ASSET_BASE_URL").expect("PUBLIC_ASSET_BASE_URL is not set");

    // SMTP setup for the contact form
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let contact_recipient = env::var("CONTACT_RECIPIENT").expect("CONTACT_RECIPIENT not set");
    let smtp_sender = if environment == "development" || environment == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP relay configuration")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared adapters
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());
    let password_verifier: Arc<dyn PasswordVerifier> = Arc::new(Argon2Hasher::new());

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let revocations = RedisTokenRevocationList::new(Arc::clone(&redis_arc));

    let object_store = GcsObjectStore::new(bucket);
    let object_store_arc: Arc<dyn ObjectStore> = Arc::new(object_store.clone());

    // Auth
    let auth = AuthUseCases {
        login: Arc::new(LoginService::new(
            user_query.clone(),
            Arc::clone(&password_verifier),
            Arc::clone(&token_provider_arc),
        )),
        logout: Arc::new(LogoutService::new(
            revocations.clone(),
            Arc::clone(&token_provider_arc),
        )),
        session: Arc::new(GetSessionService::new(
            user_query,
            revocations,
            Arc::clone(&token_provider_arc),
        )),
    };

    // Profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(
            profile_repo.clone(),
            public_base_url.clone(),
        )),
        update: Arc::new(UpdateProfileService::new(
            profile_repo,
            public_base_url.clone(),
        )),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        list: Arc::new(ListProjectsService::new(
            project_repo.clone(),
            public_base_url.clone(),
        )),
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            public_base_url.clone(),
        )),
        update: Arc::new(UpdateProjectService::new(
            project_repo.clone(),
            public_base_url.clone(),
        )),
        delete: Arc::new(DeleteProjectService::new(project_repo.clone())),
        save_all: Arc::new(SaveProjectsService::new(
            project_repo,
            public_base_url.clone(),
        )),
    };

    // Skills
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill = SkillUseCases {
        get: Arc::new(GetSkillsService::new(skill_repo.clone())),
        save: Arc::new(SaveSkillsService::new(skill_repo)),
    };

    // Resume
    let resume_repo = ResumeRepositoryPostgres::new(Arc::clone(&db_arc));
    let resume_repo_arc: Arc<dyn ResumeRepository> = Arc::new(resume_repo.clone());
    let save_sections = Arc::new(SaveResumeSectionsService::new(resume_repo_arc));
    let resume = ResumeUseCases {
        get: Arc::new(GetResumeService::new(resume_repo)),
        save_education: save_sections.clone(),
        save_experience: save_sections.clone(),
        save_certifications: save_sections,
    };

    // Documents
    let document_repo = DocumentRepositoryPostgres::new(Arc::clone(&db_arc));
    let document = DocumentUseCases {
        get: Arc::new(GetDocumentsService::new(
            document_repo.clone(),
            public_base_url.clone(),
        )),
        save: Arc::new(SaveDocumentsService::new(
            document_repo.clone(),
            public_base_url.clone(),
        )),
        delete: Arc::new(DeleteDocumentService::new(
            document_repo,
            Arc::clone(&object_store_arc),
        )),
    };

    // Gallery
    let gallery_repo = GalleryRepositoryPostgres::new(Arc::clone(&db_arc));
    let gallery = GalleryUseCases {
        get: Arc::new(GetGalleryService::new(
            gallery_repo.clone(),
            public_base_url.clone(),
        )),
        save: Arc::new(SaveGalleryService::new(
            gallery_repo.clone(),
            public_base_url.clone(),
        )),
        delete: Arc::new(DeleteGalleryItemService::new(
            gallery_repo,
            Arc::clone(&object_store_arc),
        )),
    };

    // Storage (virtual folder browser)
    let storage = StorageUseCases {
        browse: Arc::new(BrowseFolderService::new(
            object_store.clone(),
            public_base_url.clone(),
        )),
        create_folder: Arc::new(CreateFolderService::new(object_store.clone())),
        delete_folder: Arc::new(DeleteFolderService::new(object_store.clone())),
        delete_object: Arc::new(DeleteObjectService::new(object_store.clone())),
        init_upload: Arc::new(InitUploadService::new(object_store, public_base_url)),
    };

    // Contact
    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let contact = ContactUseCases {
        send: Arc::new(SendContactMessageService::new(
            email_sender,
            contact_recipient,
        )),
    };

    let state = AppState {
        auth,
        profile,
        project,
        skill,
        resume,
        document,
        gallery,
        storage,
        contact,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::build()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::save_projects_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::save_skills_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::save_education_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::save_experience_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::save_certifications_handler);
    // Documents
    cfg.service(crate::document::adapter::incoming::web::routes::get_documents_handler);
    cfg.service(crate::document::adapter::incoming::web::routes::save_documents_handler);
    cfg.service(crate::document::adapter::incoming::web::routes::delete_document_handler);
    // Gallery
    cfg.service(crate::gallery::adapter::incoming::web::routes::get_gallery_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::save_gallery_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::delete_gallery_item_handler);
    // Storage folder browser
    cfg.service(crate::storage::adapter::incoming::web::routes::list_folder_handler);
    cfg.service(crate::storage::adapter::incoming::web::routes::create_folder_handler);
    cfg.service(crate::storage::adapter::incoming::web::routes::delete_folder_handler);
    cfg.service(crate::storage::adapter::incoming::web::routes::delete_object_handler);
    cfg.service(crate::storage::adapter::incoming::web::routes::init_upload_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::send_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
