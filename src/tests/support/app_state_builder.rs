use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetSessionUseCase, LoginUseCase, LogoutUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::document::application::document_use_cases::DocumentUseCases;
use crate::document::application::ports::incoming::use_cases::{
    DeleteDocumentUseCase, GetDocumentsUseCase, SaveDocumentsUseCase,
};
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryItemUseCase, GetGalleryUseCase, SaveGalleryUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, SaveProjectsUseCase,
    UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, SaveCertificationsUseCase, SaveEducationUseCase, SaveExperienceUseCase,
};
use crate::resume::application::resume_use_cases::ResumeUseCases;
use crate::skill::application::ports::incoming::use_cases::{
    GetSkillsUseCase, SaveSkillsUseCase,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::storage::application::ports::incoming::use_cases::{
    BrowseFolderUseCase, CreateFolderUseCase, DeleteFolderUseCase, DeleteObjectUseCase,
    InitUploadUseCase,
};
use crate::storage::application::storage_use_cases::StorageUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an AppState with stubs everywhere, letting each test override
/// just the use case under test.
pub struct TestAppStateBuilder {
    login: Arc<dyn LoginUseCase + Send + Sync>,
    logout: Arc<dyn LogoutUseCase + Send + Sync>,
    session: Arc<dyn GetSessionUseCase + Send + Sync>,
    get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    list_projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
    create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    update_project: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    save_projects: Arc<dyn SaveProjectsUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    save_skills: Arc<dyn SaveSkillsUseCase + Send + Sync>,
    get_resume: Arc<dyn GetResumeUseCase + Send + Sync>,
    save_education: Arc<dyn SaveEducationUseCase + Send + Sync>,
    save_experience: Arc<dyn SaveExperienceUseCase + Send + Sync>,
    save_certifications: Arc<dyn SaveCertificationsUseCase + Send + Sync>,
    get_documents: Arc<dyn GetDocumentsUseCase + Send + Sync>,
    save_documents: Arc<dyn SaveDocumentsUseCase + Send + Sync>,
    delete_document: Arc<dyn DeleteDocumentUseCase + Send + Sync>,
    get_gallery: Arc<dyn GetGalleryUseCase + Send + Sync>,
    save_gallery: Arc<dyn SaveGalleryUseCase + Send + Sync>,
    delete_gallery_item: Arc<dyn DeleteGalleryItemUseCase + Send + Sync>,
    browse_folder: Arc<dyn BrowseFolderUseCase + Send + Sync>,
    create_folder: Arc<dyn CreateFolderUseCase + Send + Sync>,
    delete_folder: Arc<dyn DeleteFolderUseCase + Send + Sync>,
    delete_object: Arc<dyn DeleteObjectUseCase + Send + Sync>,
    init_upload: Arc<dyn InitUploadUseCase + Send + Sync>,
    send_contact: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: Arc::new(StubLoginUseCase),
            logout: Arc::new(StubLogoutUseCase),
            session: Arc::new(StubGetSessionUseCase),
            get_profile: Arc::new(StubGetProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            list_projects: Arc::new(StubListProjectsUseCase),
            create_project: Arc::new(StubCreateProjectUseCase),
            update_project: Arc::new(StubUpdateProjectUseCase),
            delete_project: Arc::new(StubDeleteProjectUseCase),
            save_projects: Arc::new(StubSaveProjectsUseCase),
            get_skills: Arc::new(StubGetSkillsUseCase),
            save_skills: Arc::new(StubSaveSkillsUseCase),
            get_resume: Arc::new(StubGetResumeUseCase),
            save_education: Arc::new(StubSaveResumeSectionsUseCase),
            save_experience: Arc::new(StubSaveResumeSectionsUseCase),
            save_certifications: Arc::new(StubSaveResumeSectionsUseCase),
            get_documents: Arc::new(StubGetDocumentsUseCase),
            save_documents: Arc::new(StubSaveDocumentsUseCase),
            delete_document: Arc::new(StubDeleteDocumentUseCase),
            get_gallery: Arc::new(StubGetGalleryUseCase),
            save_gallery: Arc::new(StubSaveGalleryUseCase),
            delete_gallery_item: Arc::new(StubDeleteGalleryItemUseCase),
            browse_folder: Arc::new(StubBrowseFolderUseCase),
            create_folder: Arc::new(StubCreateFolderUseCase),
            delete_folder: Arc::new(StubDeleteFolderUseCase),
            delete_object: Arc::new(StubDeleteObjectUseCase),
            init_upload: Arc::new(StubInitUploadUseCase),
            send_contact: Arc::new(StubSendContactMessageUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_session(mut self, uc: impl GetSessionUseCase + Send + Sync + 'static) -> Self {
        self.session = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_projects = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_save_projects(
        mut self,
        uc: impl SaveProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_projects = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_save_skills(mut self, uc: impl SaveSkillsUseCase + Send + Sync + 'static) -> Self {
        self.save_skills = Arc::new(uc);
        self
    }

    pub fn with_get_resume(mut self, uc: impl GetResumeUseCase + Send + Sync + 'static) -> Self {
        self.get_resume = Arc::new(uc);
        self
    }

    pub fn with_save_education(
        mut self,
        uc: impl SaveEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_education = Arc::new(uc);
        self
    }

    pub fn with_save_experience(
        mut self,
        uc: impl SaveExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_experience = Arc::new(uc);
        self
    }

    pub fn with_save_certifications(
        mut self,
        uc: impl SaveCertificationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_certifications = Arc::new(uc);
        self
    }

    pub fn with_get_documents(
        mut self,
        uc: impl GetDocumentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_documents = Arc::new(uc);
        self
    }

    pub fn with_save_documents(
        mut self,
        uc: impl SaveDocumentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_documents = Arc::new(uc);
        self
    }

    pub fn with_delete_document(
        mut self,
        uc: impl DeleteDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_document = Arc::new(uc);
        self
    }

    pub fn with_get_gallery(mut self, uc: impl GetGalleryUseCase + Send + Sync + 'static) -> Self {
        self.get_gallery = Arc::new(uc);
        self
    }

    pub fn with_save_gallery(
        mut self,
        uc: impl SaveGalleryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_gallery = Arc::new(uc);
        self
    }

    pub fn with_delete_gallery_item(
        mut self,
        uc: impl DeleteGalleryItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_gallery_item = Arc::new(uc);
        self
    }

    pub fn with_browse_folder(
        mut self,
        uc: impl BrowseFolderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.browse_folder = Arc::new(uc);
        self
    }

    pub fn with_create_folder(
        mut self,
        uc: impl CreateFolderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_folder = Arc::new(uc);
        self
    }

    pub fn with_delete_folder(
        mut self,
        uc: impl DeleteFolderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_folder = Arc::new(uc);
        self
    }

    pub fn with_delete_object(
        mut self,
        uc: impl DeleteObjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_object = Arc::new(uc);
        self
    }

    pub fn with_init_upload(mut self, uc: impl InitUploadUseCase + Send + Sync + 'static) -> Self {
        self.init_upload = Arc::new(uc);
        self
    }

    pub fn with_send_contact(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                login: self.login,
                logout: self.logout,
                session: self.session,
            },
            profile: ProfileUseCases {
                get: self.get_profile,
                update: self.update_profile,
            },
            project: ProjectUseCases {
                list: self.list_projects,
                create: self.create_project,
                update: self.update_project,
                delete: self.delete_project,
                save_all: self.save_projects,
            },
            skill: SkillUseCases {
                get: self.get_skills,
                save: self.save_skills,
            },
            resume: ResumeUseCases {
                get: self.get_resume,
                save_education: self.save_education,
                save_experience: self.save_experience,
                save_certifications: self.save_certifications,
            },
            document: DocumentUseCases {
                get: self.get_documents,
                save: self.save_documents,
                delete: self.delete_document,
            },
            gallery: GalleryUseCases {
                get: self.get_gallery,
                save: self.save_gallery,
                delete: self.delete_gallery_item,
            },
            storage: StorageUseCases {
                browse: self.browse_folder,
                create_folder: self.create_folder,
                delete_folder: self.delete_folder,
                delete_object: self.delete_object,
                init_upload: self.init_upload,
            },
            contact: ContactUseCases {
                send: self.send_contact,
            },
        })
    }
}
