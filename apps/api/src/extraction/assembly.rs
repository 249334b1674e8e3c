//! Result assembly: run every pass once over the shared text and group the
//! outputs into an `ExtractedResumeData`. No inference happens here beyond
//! what the passes decided.

use tracing::debug;

use crate::extraction::career::{
    extract_education, extract_experience, extract_job_title, extract_skills,
};
use crate::extraction::contact::{extract_email, extract_linkedin, extract_phone};
use crate::extraction::location::{extract_city, extract_country, extract_state, extract_zip_code};
use crate::extraction::name::extract_name;
use crate::extraction::salary::extract_salary;
use crate::extraction::text::ResumeText;
use crate::models::resume::{ExtractedResumeData, Location};

pub fn assemble(raw: &str) -> ExtractedResumeData {
    let text = ResumeText::new(raw);

    let phone = extract_phone(&text);
    let city = extract_city(&text);
    let zip_code = extract_zip_code(&text, city.is_some());
    let country = extract_country(&text);

    let record = ExtractedResumeData {
        name: extract_name(&text),
        email: extract_email(&text),
        phone: phone.as_ref().map(|p| p.number.clone()),
        phone_country_code: phone.map(|p| p.country_code),
        location: Location {
            city,
            state: extract_state(&text),
            country: country.clone(),
            zip_code,
        },
        job_title: extract_job_title(&text),
        experience: extract_experience(&text),
        skills: extract_skills(&text),
        education: extract_education(&text),
        linkedin: extract_linkedin(&text),
        salary: extract_salary(&text),
        nationality: country,
    };

    debug!(
        chars = raw.len(),
        populated = record.populated_fields(),
        has_location = !record.location.is_empty(),
        "Assembled resume record"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = "Jane Doe\njane.doe@example.com\n+1 555-123-4567\nSan Francisco, CA 94105\nSoftware Engineer at Acme Corp\nSkills: JavaScript, Python";

    const PRIYA: &str = r#"Priya Raman
priya.raman@mail.in | +91 98765 43210 | linkedin.com/in/priya-raman
Address: Koramangala, Bangalore, Karnataka, India 560034

SUMMARY
Backend developer with 6 years of experience building payment systems.

PROFESSIONAL EXPERIENCE
Senior Software Engineer at Razorpay Ltd, 2020 - Present
Owned settlement reconciliation services in Go and Kafka
Software Engineer, Infosys Ltd (2017 - 2020)
Previous CTC: INR 9,50,000; Current CTC: INR 24,00,000

SKILLS
Python, Kafka, PostgreSQL, Docker, Kubernetes, AWS

EDUCATION
Bachelor of Engineering, Anna University, 2017
"#;

    #[test]
    fn test_end_to_end_scenario() {
        let record = assemble(JANE);
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(record.phone.as_deref(), Some("5551234567"));
        assert_eq!(record.phone_country_code.as_deref(), Some("+1"));
        assert_eq!(record.location.city.as_deref(), Some("San Francisco"));
        assert_eq!(record.location.zip_code.as_deref(), Some("94105"));
        assert!(record
            .job_title
            .as_deref()
            .is_some_and(|t| t.contains("Software Engineer")));
        assert!(record.skills.contains(&"Javascript".to_string()));
        assert!(record.skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_full_resume() {
        let record = assemble(PRIYA);
        assert_eq!(record.name.as_deref(), Some("Priya Raman"));
        assert_eq!(record.email.as_deref(), Some("priya.raman@mail.in"));
        assert_eq!(record.phone.as_deref(), Some("9876543210"));
        assert_eq!(record.phone_country_code.as_deref(), Some("+91"));
        assert_eq!(
            record.linkedin.as_deref(),
            Some("https://linkedin.com/in/priya-raman")
        );
        assert_eq!(record.location.city.as_deref(), Some("Bangalore"));
        assert_eq!(record.location.state.as_deref(), Some("Karnataka"));
        assert_eq!(record.location.country.as_deref(), Some("India"));
        assert_eq!(record.location.zip_code.as_deref(), Some("560034"));
        assert_eq!(record.nationality, record.location.country);
        assert_eq!(
            record.job_title.as_deref(),
            Some("Senior Software Engineer")
        );
        assert_eq!(record.salary.as_deref(), Some("2400000"));
        assert_eq!(
            record.skills,
            vec!["Python", "Postgresql", "Kafka", "Aws", "Docker", "Kubernetes"]
        );
        assert_eq!(
            record.education,
            vec!["Bachelor of Engineering, Anna University, 2017".to_string()]
        );
        assert_eq!(record.experience.len(), 2);
        assert!(record.experience[0].starts_with("Senior Software Engineer at Razorpay"));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        assert_eq!(assemble(PRIYA), assemble(PRIYA));
        assert_eq!(
            serde_json::to_string(&assemble(JANE)).unwrap(),
            serde_json::to_string(&assemble(JANE)).unwrap()
        );
    }

    #[test]
    fn test_no_fabrication() {
        for raw in [JANE, PRIYA] {
            let record = assemble(raw);
            let lower = raw.to_lowercase();
            let verbatim = [
                &record.name,
                &record.email,
                &record.job_title,
                &record.location.zip_code,
            ];
            for value in verbatim.into_iter().flatten() {
                assert!(raw.contains(value.as_str()), "{value} not in source");
            }
            for value in [&record.location.city, &record.location.state]
                .into_iter()
                .flatten()
            {
                assert!(lower.contains(&value.to_lowercase()), "{value} not in source");
            }
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            if let Some(phone) = &record.phone {
                assert!(digits.contains(phone.as_str()));
            }
            for line in record.experience.iter().chain(&record.education) {
                assert!(raw.contains(line.as_str()));
            }
        }
    }

    #[test]
    fn test_text_without_signals_yields_empty_record() {
        let record = assemble("lorem ipsum dolor sit amet");
        assert_eq!(record, ExtractedResumeData::default());
        assert!(record.location.is_empty());
    }

    #[test]
    fn test_phone_fields_present_together() {
        let record = assemble("Reach me at +49 30 1234");
        assert_eq!(record.phone, None);
        assert_eq!(record.phone_country_code, None);
    }
}
