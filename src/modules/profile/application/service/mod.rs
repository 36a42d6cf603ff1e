pub mod get_profile_service;
pub mod update_profile_service;

use crate::profile::application::ports::incoming::use_cases::ProfileView;
use crate::profile::application::ports::outgoing::profile_repository::ProfileRecord;
use crate::storage::application::domain::location::public_url;

pub(crate) fn record_to_view(record: ProfileRecord, public_base_url: &str) -> ProfileView {
    ProfileView {
        id: record.id,
        headline: record.headline,
        bio: record.bio,
        location: record.location,
        contact_email: record.contact_email,
        skills: record.skills,
        image_url: record
            .image_location
            .as_deref()
            .map(|loc| public_url(loc, public_base_url)),
        social_links: record.social_links,
        updated_at: record.updated_at,
    }
}
