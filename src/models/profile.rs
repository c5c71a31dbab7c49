use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Sentinel accepted in a work experience's end date for ongoing positions.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Path to the 150x150 thumbnail written during collection, if a photo
    /// was supplied and processing succeeded.
    pub photo: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub company: String,
    pub job_title: String,
    pub start_date: String,
    /// Free text, or [`PRESENT`] for a current position.
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(Proficiency::Native),
            "fluent" => Ok(Proficiency::Fluent),
            "advanced" => Ok(Proficiency::Advanced),
            "intermediate" => Ok(Proficiency::Intermediate),
            "basic" => Ok(Proficiency::Basic),
            other => Err(format!(
                "unknown proficiency '{}', expected one of Native/Fluent/Advanced/Intermediate/Basic",
                other
            )),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl Reference {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.company.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
    }
}

/// The aggregate record produced by one collection session. All list sections
/// keep insertion order; nothing is deduplicated or reordered. Once handed to
/// the renderer the profile is read-only (the assembler borrows it).
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeProfile {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperience>,
    pub languages: Vec<LanguageSkill>,
    pub skills: Vec<String>,
    pub references: Vec<Reference>,
}
