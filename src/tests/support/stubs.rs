//! Inert use-case implementations for handler tests: every AppState slot
//! gets one so a test only has to mock the use case it actually exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    GetSessionError, GetSessionUseCase, LoginError, LoginOutcome, LoginRequest, LoginUseCase,
    LogoutError, LogoutUseCase, SessionUser,
};
use crate::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::document::application::ports::incoming::use_cases::{
    DeleteDocumentError, DeleteDocumentUseCase, DocumentInput, DocumentView, GetDocumentsError,
    GetDocumentsUseCase, SaveDocumentsError, SaveDocumentsUseCase,
};
use crate::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryItemError, DeleteGalleryItemUseCase, GalleryItemInput, GalleryItemView,
    GetGalleryError, GetGalleryUseCase, SaveGalleryError, SaveGalleryUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, ProfileView, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_repository::UpsertProfileData;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    ListProjectsError, ListProjectsUseCase, ProjectInput, ProjectView, SaveProjectsError,
    SaveProjectsUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::resume::application::ports::incoming::use_cases::{
    CertificationView, EducationView, ExperienceView, GetResumeError, GetResumeUseCase,
    ResumeView, SaveCertificationsUseCase, SaveEducationUseCase, SaveExperienceUseCase,
    SaveResumeSectionError,
};
use crate::resume::application::ports::outgoing::resume_repository::{
    CertificationDraft, EducationDraft, ExperienceDraft,
};
use crate::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase, SaveSkillsError, SaveSkillsUseCase, SkillCategoryInput,
    SkillCategoryView,
};
use crate::storage::application::domain::folder::FolderListing;
use crate::storage::application::ports::incoming::use_cases::{
    BrowseFolderError, BrowseFolderUseCase, CreateFolderError, CreateFolderUseCase,
    DeleteFolderError, DeleteFolderUseCase, DeleteObjectError, DeleteObjectUseCase,
    InitUploadError, InitUploadOutcome, InitUploadRequest, InitUploadUseCase,
};

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubGetSessionUseCase;

#[async_trait]
impl GetSessionUseCase for StubGetSessionUseCase {
    async fn execute(&self, _token: &str) -> Result<SessionUser, GetSessionError> {
        Err(GetSessionError::TokenRevoked)
    }
}

/* --------------------------------------------------
 * Profile
 * -------------------------------------------------- */

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<ProfileView, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _data: UpsertProfileData,
    ) -> Result<ProfileView, UpdateProfileError> {
        Err(UpdateProfileError::SaveFailed("stub".to_string()))
    }
}

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectView>, ListProjectsError> {
        Ok(vec![])
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _input: ProjectInput) -> Result<ProjectView, CreateProjectError> {
        Err(CreateProjectError::SaveFailed("stub".to_string()))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _input: ProjectInput,
    ) -> Result<ProjectView, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        Ok(())
    }
}

pub struct StubSaveProjectsUseCase;

#[async_trait]
impl SaveProjectsUseCase for StubSaveProjectsUseCase {
    async fn execute(
        &self,
        _inputs: Vec<ProjectInput>,
    ) -> Result<Vec<ProjectView>, SaveProjectsError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------
 * Skills
 * -------------------------------------------------- */

pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError> {
        Ok(vec![])
    }
}

pub struct StubSaveSkillsUseCase;

#[async_trait]
impl SaveSkillsUseCase for StubSaveSkillsUseCase {
    async fn execute(
        &self,
        _inputs: Vec<SkillCategoryInput>,
    ) -> Result<Vec<SkillCategoryView>, SaveSkillsError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------
 * Resume
 * -------------------------------------------------- */

pub struct StubGetResumeUseCase;

#[async_trait]
impl GetResumeUseCase for StubGetResumeUseCase {
    async fn execute(&self) -> Result<ResumeView, GetResumeError> {
        Ok(ResumeView {
            education: vec![],
            experience: vec![],
            certifications: vec![],
        })
    }
}

pub struct StubSaveResumeSectionsUseCase;

#[async_trait]
impl SaveEducationUseCase for StubSaveResumeSectionsUseCase {
    async fn execute(
        &self,
        _drafts: Vec<EducationDraft>,
    ) -> Result<Vec<EducationView>, SaveResumeSectionError> {
        Ok(vec![])
    }
}

#[async_trait]
impl SaveExperienceUseCase for StubSaveResumeSectionsUseCase {
    async fn execute(
        &self,
        _drafts: Vec<ExperienceDraft>,
    ) -> Result<Vec<ExperienceView>, SaveResumeSectionError> {
        Ok(vec![])
    }
}

#[async_trait]
impl SaveCertificationsUseCase for StubSaveResumeSectionsUseCase {
    async fn execute(
        &self,
        _drafts: Vec<CertificationDraft>,
    ) -> Result<Vec<CertificationView>, SaveResumeSectionError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------
 * Documents
 * -------------------------------------------------- */

pub struct StubGetDocumentsUseCase;

#[async_trait]
impl GetDocumentsUseCase for StubGetDocumentsUseCase {
    async fn execute(&self) -> Result<Vec<DocumentView>, GetDocumentsError> {
        Ok(vec![])
    }
}

pub struct StubSaveDocumentsUseCase;

#[async_trait]
impl SaveDocumentsUseCase for StubSaveDocumentsUseCase {
    async fn execute(
        &self,
        _inputs: Vec<DocumentInput>,
    ) -> Result<Vec<DocumentView>, SaveDocumentsError> {
        Ok(vec![])
    }
}

pub struct StubDeleteDocumentUseCase;

#[async_trait]
impl DeleteDocumentUseCase for StubDeleteDocumentUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteDocumentError> {
        Ok(())
    }
}

/* --------------------------------------------------
 * Gallery
 * -------------------------------------------------- */

pub struct StubGetGalleryUseCase;

#[async_trait]
impl GetGalleryUseCase for StubGetGalleryUseCase {
    async fn execute(
        &self,
        _category: Option<String>,
    ) -> Result<Vec<GalleryItemView>, GetGalleryError> {
        Ok(vec![])
    }
}

pub struct StubSaveGalleryUseCase;

#[async_trait]
impl SaveGalleryUseCase for StubSaveGalleryUseCase {
    async fn execute(
        &self,
        _inputs: Vec<GalleryItemInput>,
    ) -> Result<Vec<GalleryItemView>, SaveGalleryError> {
        Ok(vec![])
    }
}

pub struct StubDeleteGalleryItemUseCase;

#[async_trait]
impl DeleteGalleryItemUseCase for StubDeleteGalleryItemUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteGalleryItemError> {
        Ok(())
    }
}

/* --------------------------------------------------
 * Storage
 * -------------------------------------------------- */

pub struct StubBrowseFolderUseCase;

#[async_trait]
impl BrowseFolderUseCase for StubBrowseFolderUseCase {
    async fn execute(
        &self,
        path: &str,
        _limit: Option<usize>,
    ) -> Result<FolderListing, BrowseFolderError> {
        Ok(FolderListing {
            path: path.to_string(),
            folders: vec![],
            files: vec![],
            truncated: false,
        })
    }
}

pub struct StubCreateFolderUseCase;

#[async_trait]
impl CreateFolderUseCase for StubCreateFolderUseCase {
    async fn execute(&self, _path: &str) -> Result<(), CreateFolderError> {
        Ok(())
    }
}

pub struct StubDeleteFolderUseCase;

#[async_trait]
impl DeleteFolderUseCase for StubDeleteFolderUseCase {
    async fn execute(&self, _path: &str) -> Result<u32, DeleteFolderError> {
        Ok(0)
    }
}

pub struct StubDeleteObjectUseCase;

#[async_trait]
impl DeleteObjectUseCase for StubDeleteObjectUseCase {
    async fn execute(&self, _key: &str) -> Result<(), DeleteObjectError> {
        Ok(())
    }
}

pub struct StubInitUploadUseCase;

#[async_trait]
impl InitUploadUseCase for StubInitUploadUseCase {
    async fn execute(
        &self,
        _request: InitUploadRequest,
    ) -> Result<InitUploadOutcome, InitUploadError> {
        Err(InitUploadError::InvalidTarget("stub".to_string()))
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

pub struct StubSendContactMessageUseCase;

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SendContactMessageError> {
        Ok(())
    }
}
