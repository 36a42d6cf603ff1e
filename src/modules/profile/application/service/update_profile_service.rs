use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileView, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, UpsertProfileData,
};
use crate::profile::application::service::record_to_view;
use crate::storage::application::domain::location::normalize_location;

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> UpdateProfileService<R>
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
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        mut data: UpsertProfileData,
    ) -> Result<ProfileView, UpdateProfileError> {
        // Locations are persisted in normalized form: our URLs shrink to
        // keys, foreign URLs stay whole.
        data.image_location = data
            .image_location
            .map(|loc| normalize_location(&loc, &self.public_base_url))
            .filter(|loc| !loc.is_empty());

        data.headline = data.headline.trim().to_string();

        let record = self
            .repository
            .upsert(owner, data)
            .await
            .map_err(|e| UpdateProfileError::SaveFailed(e.to_string()))?;

        Ok(record_to_view(record, &self.public_base_url))
    }
}
