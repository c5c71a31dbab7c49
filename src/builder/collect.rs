use std::path::Path;

use log::{info, warn};

use crate::builder::validate::{
    Rule, validate_email, validate_name, validate_phone, validate_required,
};
use crate::errors::ResumeError;
use crate::input::{FieldCollector, FieldKind};
use crate::models::profile::{
    EducationEntry, LanguageSkill, PRESENT, PersonalInfo, Proficiency, Reference, ResumeProfile,
    WorkExperience,
};
use crate::utils::config::{Config, Delimiter};
use crate::utils::image::make_thumbnail;

/// Collects each section of a [`ResumeProfile`] through the injected
/// [`FieldCollector`], validating formatted fields and preserving the order
/// everything was entered in. One builder owns one in-progress profile.
pub struct ProfileBuilder<'a, C: FieldCollector> {
    config: Config,
    collector: &'a mut C,
}

impl<'a, C: FieldCollector> ProfileBuilder<'a, C> {
    pub fn new(config: Config, collector: &'a mut C) -> Self {
        Self { config, collector }
    }

    /// Runs the whole session in fixed order: personal info, education, work,
    /// languages, skills, references. `photo` is an optional image to shrink
    /// into a thumbnail under `out_dir`.
    pub fn build_profile(
        &mut self,
        photo: Option<&Path>,
        out_dir: &Path,
    ) -> Result<ResumeProfile, ResumeError> {
        let personal_info = self.collect_personal_info(photo, out_dir)?;
        let education = self.collect_education()?;
        let work_experiences = self.collect_work_experience()?;
        let languages = self.collect_languages()?;
        let skills = self.collect_skills()?;
        let references = self.collect_references()?;

        Ok(ResumeProfile {
            personal_info,
            education,
            work_experiences,
            languages,
            skills,
            references,
        })
    }

    pub fn collect_personal_info(
        &mut self,
        photo: Option<&Path>,
        out_dir: &Path,
    ) -> Result<PersonalInfo, ResumeError> {
        self.collector.section("Personal Information");

        let name = self.validated("full name", FieldKind::Text, validate_name)?;
        let email = self.validated("email address", FieldKind::Email, validate_email)?;
        let phone = self.validated("phone number", FieldKind::Phone, validate_phone)?;
        let address = self.validated("address", FieldKind::Text, validate_required)?;

        let photo = match photo {
            Some(path) => match make_thumbnail(path, out_dir) {
                Ok(thumb) => Some(thumb),
                Err(e) => {
                    // report and carry on without a picture
                    warn!("{}, continuing without a profile photo", e);
                    None
                }
            },
            None => None,
        };

        info!("personal information collected for {}", name);
        Ok(PersonalInfo {
            name,
            email,
            phone,
            address,
            photo,
        })
    }

    pub fn collect_education(&mut self) -> Result<Vec<EducationEntry>, ResumeError> {
        self.collector.section("Education");

        let mut entries = Vec::new();
        while entries.len() < self.config.limits.max_education_entries {
            let institution =
                self.trimmed("institution name (blank to finish)", FieldKind::Text)?;
            if institution.is_empty() {
                break;
            }

            let degree = self.trimmed("degree / qualification", FieldKind::Text)?;
            let graduation_year = self.trimmed("graduation year", FieldKind::Year)?;

            entries.push(EducationEntry {
                institution,
                degree,
                graduation_year,
            });
        }

        info!("collected {} education entries", entries.len());
        Ok(entries)
    }

    pub fn collect_work_experience(&mut self) -> Result<Vec<WorkExperience>, ResumeError> {
        self.collector.section("Work Experience");

        let mut entries = Vec::new();
        while entries.len() < self.config.limits.max_work_entries {
            let company = self.trimmed("company name (blank to finish)", FieldKind::Text)?;
            if company.is_empty() {
                break;
            }

            let job_title = self.trimmed("job title", FieldKind::Text)?;
            let start_date = self.trimmed("start date", FieldKind::Date)?;
            let end_date = normalize_end_date(&self.trimmed("end date", FieldKind::Date)?);
            let raw = self.trimmed("key responsibilities", FieldKind::List)?;
            let responsibilities =
                split_responsibilities(&raw, self.config.input.responsibility_delimiter);

            entries.push(WorkExperience {
                company,
                job_title,
                start_date,
                end_date,
                responsibilities,
            });
        }

        info!("collected {} work experiences", entries.len());
        Ok(entries)
    }

    pub fn collect_languages(&mut self) -> Result<Vec<LanguageSkill>, ResumeError> {
        self.collector.section("Languages");

        let mut entries = Vec::new();
        while entries.len() < self.config.limits.max_languages {
            let language = self.trimmed("language (blank to finish)", FieldKind::Text)?;
            if language.is_empty() {
                break;
            }

            let proficiency = loop {
                let raw = self.trimmed(
                    "proficiency (Native/Fluent/Advanced/Intermediate/Basic)",
                    FieldKind::Text,
                )?;
                match raw.parse::<Proficiency>() {
                    Ok(level) => break level,
                    Err(reason) => self.collector.reject("proficiency", &reason),
                }
            };

            entries.push(LanguageSkill {
                language,
                proficiency,
            });
        }

        info!("collected {} languages", entries.len());
        Ok(entries)
    }

    pub fn collect_skills(&mut self) -> Result<Vec<String>, ResumeError> {
        self.collector.section("Skills");

        let mut skills = Vec::new();
        while skills.len() < self.config.limits.max_skills {
            let skill = self.trimmed("skill (blank to finish)", FieldKind::Text)?;
            if skill.is_empty() {
                break;
            }
            skills.push(skill);
        }

        info!("collected {} skills", skills.len());
        Ok(skills)
    }

    /// Always collects exactly `max_references` entries. Reference fields are
    /// free text and may be left blank.
    pub fn collect_references(&mut self) -> Result<Vec<Reference>, ResumeError> {
        let mut references = Vec::new();
        for i in 1..=self.config.limits.max_references {
            self.collector.section(&format!("Reference {}", i));

            references.push(Reference {
                name: self.trimmed("reference name", FieldKind::Text)?,
                company: self.trimmed("reference's company", FieldKind::Text)?,
                phone: self.trimmed("reference's phone number", FieldKind::Phone)?,
                email: self.trimmed("reference's email", FieldKind::Email)?,
            });
        }

        info!("collected {} references", references.len());
        Ok(references)
    }

    /// Re-prompts until `rule` passes. When the surface runs out of input the
    /// failure propagates as a validation error naming the field.
    fn validated(
        &mut self,
        field: &'static str,
        kind: FieldKind,
        rule: Rule,
    ) -> Result<String, ResumeError> {
        loop {
            let value = match self.collector.request(field, kind) {
                Ok(raw) => raw.trim().to_string(),
                Err(ResumeError::Input(e)) => {
                    return Err(ResumeError::Validation {
                        field,
                        reason: format!("no valid value supplied before input ended ({})", e),
                    });
                }
                Err(e) => return Err(e),
            };

            match rule(&value) {
                Ok(()) => return Ok(value),
                Err(reason) => {
                    warn!("rejected {}: {}", field, reason);
                    self.collector.reject(field, &reason);
                }
            }
        }
    }

    fn trimmed(&mut self, field: &str, kind: FieldKind) -> Result<String, ResumeError> {
        Ok(self.collector.request(field, kind)?.trim().to_string())
    }
}

/// Cuts the free-text responsibilities field into trimmed bullet points.
/// Empty pieces (stray delimiters, trailing newline) are dropped.
pub fn split_responsibilities(raw: &str, delimiter: Delimiter) -> Vec<String> {
    raw.split(delimiter.as_char())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

fn normalize_end_date(raw: &str) -> String {
    if raw.eq_ignore_ascii_case(PRESENT) {
        PRESENT.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::input::scripted::ScriptedCollector;
    use crate::utils::config::ConfigInner;

    fn test_config() -> Config {
        Arc::new(ConfigInner::default())
    }

    fn config_with<F: FnOnce(&mut ConfigInner)>(tweak: F) -> Config {
        let mut inner = ConfigInner::default();
        tweak(&mut inner);
        Arc::new(inner)
    }

    const NO_PHOTO: Option<&Path> = None;

    #[test]
    fn personal_info_returns_valid_fields_unchanged() {
        let mut collector = ScriptedCollector::new([
            "Jane Doe",
            "jane@example.com",
            "+12345678901",
            "42 Main St",
        ]);
        let config = test_config();
        let info = ProfileBuilder::new(config, &mut collector)
            .collect_personal_info(NO_PHOTO, Path::new("."))
            .unwrap();

        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.phone, "+12345678901");
        assert_eq!(info.address, "42 Main St");
        assert_eq!(info.photo, None);
        assert!(collector.rejections.is_empty());
    }

    #[test]
    fn malformed_email_is_rejected_then_retried() {
        let mut collector = ScriptedCollector::new([
            "Jane Doe",
            "not-an-email",
            "jane@example.com",
            "+12345678901",
            "42 Main St",
        ]);
        let config = test_config();
        let info = ProfileBuilder::new(config, &mut collector)
            .collect_personal_info(NO_PHOTO, Path::new("."))
            .unwrap();

        assert_eq!(info.email, "jane@example.com");
        assert_eq!(collector.rejections.len(), 1);
        assert_eq!(collector.rejections[0].0, "email address");
    }

    #[test]
    fn email_that_never_validates_fails_with_field_name() {
        let mut collector = ScriptedCollector::new(["Jane Doe", "not-an-email"]);
        let config = test_config();
        let err = ProfileBuilder::new(config, &mut collector)
            .collect_personal_info(NO_PHOTO, Path::new("."))
            .unwrap_err();

        match err {
            ResumeError::Validation { field, .. } => assert_eq!(field, "email address"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_institution_yields_empty_education() {
        let mut collector = ScriptedCollector::new([""]);
        let config = test_config();
        let entries = ProfileBuilder::new(config, &mut collector)
            .collect_education()
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn education_stops_after_first_blank_institution() {
        let mut collector =
            ScriptedCollector::new(["MIT", "BSc Computer Science", "2019", ""]);
        let config = test_config();
        let entries = ProfileBuilder::new(config, &mut collector)
            .collect_education()
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].degree, "BSc Computer Science");
        assert_eq!(entries[0].graduation_year, "2019");
    }

    #[test]
    fn education_respects_configured_maximum() {
        // max 1: the loop ends without asking for a sentinel
        let config = config_with(|c| c.limits.max_education_entries = 1);
        let mut collector = ScriptedCollector::new(["MIT", "BSc", "2019"]);
        let entries = ProfileBuilder::new(config, &mut collector)
            .collect_education()
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn work_experiences_preserve_submission_order() {
        let mut collector = ScriptedCollector::new([
            "Acme", "Engineer", "2019-01", "2020-01", "built things",
            "Globex", "Senior Engineer", "2020-02", "2022-06", "led things",
            "Initech", "Staff Engineer", "2022-07", "present", "owned things",
            "",
        ]);
        let config = test_config();
        let entries = ProfileBuilder::new(config, &mut collector)
            .collect_work_experience()
            .unwrap();

        let companies: Vec<_> = entries.iter().map(|w| w.company.as_str()).collect();
        assert_eq!(companies, ["Acme", "Globex", "Initech"]);
        assert_eq!(entries[2].end_date, PRESENT);
    }

    #[test]
    fn responsibilities_are_split_and_trimmed() {
        let pieces =
            split_responsibilities("write code, test code, ship code", Delimiter::Comma);
        assert_eq!(pieces, ["write code", "test code", "ship code"]);
    }

    #[test]
    fn newline_delimiter_splits_on_lines() {
        let pieces =
            split_responsibilities("write code\ntest code\n\nship code\n", Delimiter::Newline);
        assert_eq!(pieces, ["write code", "test code", "ship code"]);
    }

    #[test]
    fn languages_reprompt_until_proficiency_parses() {
        let mut collector =
            ScriptedCollector::new(["Spanish", "decent", "Intermediate", ""]);
        let config = test_config();
        let entries = ProfileBuilder::new(config, &mut collector)
            .collect_languages()
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].language, "Spanish");
        assert_eq!(entries[0].proficiency, Proficiency::Intermediate);
        assert_eq!(collector.rejections.len(), 1);
    }

    #[test]
    fn references_collects_exactly_the_configured_count() {
        let config = config_with(|c| c.limits.max_references = 2);
        let mut collector = ScriptedCollector::new([
            "Ada Lovelace", "Analytical Engines", "+12025550001", "ada@engines.example",
            "", "", "", "",
        ]);
        let references = ProfileBuilder::new(config, &mut collector)
            .collect_references()
            .unwrap();

        assert_eq!(references.len(), 2);
        assert_eq!(references[0].name, "Ada Lovelace");
        assert!(references[1].is_blank());
    }

    #[test]
    fn build_profile_end_to_end_with_empty_sections() {
        let mut collector = ScriptedCollector::new([
            // personal
            "Jane Doe", "jane@example.com", "+12345678901", "42 Main St",
            // education / work / languages / skills sentinels
            "", "", "", "",
            // three empty references
            "", "", "", "",
            "", "", "", "",
            "", "", "", "",
        ]);
        let config = test_config();
        let profile = ProfileBuilder::new(config, &mut collector)
            .build_profile(NO_PHOTO, Path::new("."))
            .unwrap();

        assert_eq!(profile.personal_info.name, "Jane Doe");
        assert_eq!(profile.personal_info.email, "jane@example.com");
        assert_eq!(profile.personal_info.phone, "+12345678901");
        assert!(profile.education.is_empty());
        assert!(profile.work_experiences.is_empty());
        assert!(profile.languages.is_empty());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.references.len(), 3);
    }

    #[test]
    fn build_profile_rejects_bad_email_before_assembly() {
        let mut collector = ScriptedCollector::new(["Jane Doe", "not-an-email"]);
        let config = test_config();
        let err = ProfileBuilder::new(config, &mut collector)
            .build_profile(NO_PHOTO, Path::new("."))
            .unwrap_err();
        assert!(matches!(err, ResumeError::Validation { .. }));
    }

    #[test]
    fn photo_failure_surfaces_but_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let mut collector = ScriptedCollector::new([
            "Jane Doe",
            "jane@example.com",
            "+12345678901",
            "42 Main St",
        ]);
        let config = test_config();
        let info = ProfileBuilder::new(config, &mut collector)
            .collect_personal_info(Some(&dir.path().join("missing.png")), dir.path())
            .unwrap();
        assert_eq!(info.photo, None);
        assert_eq!(info.name, "Jane Doe");
    }

    #[test]
    fn supplied_photo_is_stored_as_thumbnail_reference() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.png");
        image::RgbImage::new(60, 80).save(&source).unwrap();

        let mut collector = ScriptedCollector::new([
            "Jane Doe",
            "jane@example.com",
            "+12345678901",
            "42 Main St",
        ]);
        let config = test_config();
        let info = ProfileBuilder::new(config, &mut collector)
            .collect_personal_info(Some(&source), dir.path())
            .unwrap();

        let thumb = info.photo.expect("thumbnail reference");
        assert!(thumb.exists());
    }

    #[test]
    fn skills_preserve_order_and_duplicates() {
        let mut collector = ScriptedCollector::new(["Rust", "SQL", "Rust", ""]);
        let config = test_config();
        let skills = ProfileBuilder::new(config, &mut collector)
            .collect_skills()
            .unwrap();
        assert_eq!(skills, ["Rust", "SQL", "Rust"]);
    }
}
