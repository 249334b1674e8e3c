use serde::Serialize;

use crate::models::resume::ExtractedResumeData;

/// Prefill values for the onboarding form.
///
/// Every field is copied from the extracted record; nothing is derived beyond
/// reusing the salary for both salary inputs and the country as nationality
/// when the record carries no separate nationality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub skills: Vec<String>,
}

impl From<&ExtractedResumeData> for FormDefaults {
    fn from(data: &ExtractedResumeData) -> Self {
        Self {
            full_name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            phone_country_code: data.phone_country_code.clone(),
            linkedin_url: data.linkedin.clone(),
            current_job_title: data.job_title.clone(),
            current_salary: data.salary.clone(),
            expected_salary: data.salary.clone(),
            city: data.location.city.clone(),
            state: data.location.state.clone(),
            country: data.location.country.clone(),
            zip_code: data.location.zip_code.clone(),
            nationality: data
                .nationality
                .clone()
                .or_else(|| data.location.country.clone()),
            skills: data.skills.clone(),
        }
    }
}
