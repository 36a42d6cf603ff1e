pub mod create_project_service;
pub mod delete_project_service;
pub mod list_projects_service;
pub mod save_projects_service;
pub mod update_project_service;

use crate::project::application::ports::incoming::use_cases::{ProjectInput, ProjectView};
use crate::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord,
};
use crate::storage::application::domain::location::{normalize_location, public_url};

pub(crate) fn record_to_view(record: ProjectRecord, public_base_url: &str) -> ProjectView {
    ProjectView {
        id: record.id,
        title: record.title,
        description: record.description,
        tech_stack: record.tech_stack,
        image_url: record
            .image_location
            .as_deref()
            .map(|loc| public_url(loc, public_base_url)),
        repo_url: record.repo_url,
        live_url: record.live_url,
        featured: record.featured,
        order_index: record.order_index,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub(crate) fn input_to_draft(input: ProjectInput, public_base_url: &str) -> ProjectDraft {
    ProjectDraft {
        title: input.title.trim().to_string(),
        description: input.description,
        tech_stack: input.tech_stack,
        image_location: input
            .image_location
            .map(|loc| normalize_location(&loc, public_base_url))
            .filter(|loc| !loc.is_empty()),
        repo_url: input.repo_url,
        live_url: input.live_url,
        featured: input.featured,
    }
}
