pub mod get_resume_service;
pub mod save_sections_service;

use crate::resume::application::ports::incoming::use_cases::{
    CertificationView, EducationView, ExperienceView,
};
use crate::resume::application::ports::outgoing::resume_repository::{
    CertificationRecord, EducationRecord, ExperienceRecord,
};

pub(crate) fn education_view(record: EducationRecord) -> EducationView {
    EducationView {
        id: record.id,
        institution: record.institution,
        degree: record.degree,
        field: record.field,
        start_year: record.start_year,
        end_year: record.end_year,
        order_index: record.order_index,
    }
}

pub(crate) fn experience_view(record: ExperienceRecord) -> ExperienceView {
    ExperienceView {
        id: record.id,
        company: record.company,
        title: record.title,
        summary: record.summary,
        start_date: record.start_date,
        end_date: record.end_date,
        order_index: record.order_index,
    }
}

pub(crate) fn certification_view(record: CertificationRecord) -> CertificationView {
    CertificationView {
        id: record.id,
        name: record.name,
        issuer: record.issuer,
        issued_on: record.issued_on,
        credential_url: record.credential_url,
        order_index: record.order_index,
    }
}
