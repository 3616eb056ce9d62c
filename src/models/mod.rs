pub mod achievement;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use achievement::Achievement;
pub use education::Education;
pub use experience::Experience;
pub use profile::Profile;
pub use project::Project;
pub use skill::Skill;

use chrono::NaiveDate;

use crate::domain::DomainError;

pub(crate) fn require_text(entity: &str, field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{entity}.{field} is required"
        )));
    }
    Ok(())
}

pub(crate) fn require_date_order(
    entity: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), DomainError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(DomainError::validation(format!(
            "{entity}.end_date {end} is before start_date {start}"
        )));
    }
    Ok(())
}

// List columns are stored as JSON arrays
pub(crate) fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
