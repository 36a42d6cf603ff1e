use async_trait::async_trait;

use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, ProfileView,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::profile::application::service::record_to_view;

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, public_base_url: String) -> Self {
        Self {
            repository,
            public_base_url,
        }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileView, GetProfileError> {
        match self.repository.get_first().await {
            Ok(record) => Ok(record_to_view(record, &self.public_base_url)),
            Err(ProfileRepositoryError::NotFound) => Err(GetProfileError::NotFound),
            Err(e) => Err(GetProfileError::QueryFailed(e.to_string())),
        }
    }
}
