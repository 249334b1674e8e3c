use serde::{Deserialize, Serialize};

/// Location fields recovered from a resume. Always present on the record,
/// even when every component is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.zip_code.is_none()
    }
}

/// Best-effort structured interpretation of one uploaded resume.
///
/// Every populated field is a (possibly normalised) literal match from the
/// source text. `None` means "not found", never "found empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Last 10 digits of the matched number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Present exactly when `phone` is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Digits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// Mirrors `location.country`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

impl ExtractedResumeData {
    /// Number of scalar and list fields that carry a value.
    pub fn populated_fields(&self) -> usize {
        let scalars = [
            &self.name,
            &self.email,
            &self.phone,
            &self.phone_country_code,
            &self.job_title,
            &self.linkedin,
            &self.salary,
            &self.nationality,
            &self.location.city,
            &self.location.state,
            &self.location.country,
            &self.location.zip_code,
        ];
        let lists = [&self.experience, &self.skills, &self.education];

        scalars.iter().filter(|f| f.is_some()).count()
            + lists.iter().filter(|l| !l.is_empty()).count()
    }
}
