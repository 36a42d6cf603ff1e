pub mod get_skills_service;
pub mod save_skills_service;

use crate::skill::application::ports::incoming::use_cases::{SkillCategoryView, SkillView};
use crate::skill::application::ports::outgoing::skill_repository::SkillCategoryRecord;

pub(crate) fn record_to_view(record: SkillCategoryRecord) -> SkillCategoryView {
    SkillCategoryView {
        id: record.id,
        title: record.title,
        order_index: record.order_index,
        skills: record
            .skills
            .into_iter()
            .map(|s| SkillView {
                id: s.id,
                name: s.name,
                level: s.level,
                order_index: s.order_index,
            })
            .collect(),
    }
}
