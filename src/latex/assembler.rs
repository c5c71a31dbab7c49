use crate::models::profile::{
    EducationEntry, LanguageSkill, Reference, ResumeProfile, WorkExperience,
};

static TEMPLATE: &str = include_str!("template.tex");
static LOCALE_MAP_EN: [(&str, &str); 5] = [
    ("EDUCATION_HEADER", "Education"),
    ("EXPERIENCE_HEADER", "Professional Experience"),
    ("LANGUAGES_HEADER", "Languages"),
    ("SKILLS_HEADER", "Skills"),
    ("REFERENCES_HEADER", "References"),
];
static LOCALE_MAP_PT: [(&str, &str); 5] = [
    ("EDUCATION_HEADER", "Educação"),
    ("EXPERIENCE_HEADER", "Experiência Profissional"),
    ("LANGUAGES_HEADER", "Idiomas"),
    ("SKILLS_HEADER", "Habilidades"),
    ("REFERENCES_HEADER", "Referências"),
];

#[derive(Debug, Clone, Default)]
pub enum ResumeLanguage {
    #[default]
    English,
    Portuguese,
}

impl From<&str> for ResumeLanguage {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => ResumeLanguage::Portuguese,
            "en" | "en-us" | "english" => ResumeLanguage::English,
            _ => ResumeLanguage::default(),
        }
    }
}

/// Output filename convention: `{name}_resume.pdf`, with path separators
/// replaced so the name can never escape the output directory.
pub fn output_filename(name: &str) -> String {
    format!("{}_resume.pdf", name.replace(['/', '\\'], "_"))
}

/// Turns a finalized [`ResumeProfile`] into a LaTeX document. Borrows the
/// profile read-only; sections with no entries are omitted entirely.
pub struct LatexResumeAssembler<'a> {
    language: ResumeLanguage,
    profile: &'a ResumeProfile,
}

impl<'a> LatexResumeAssembler<'a> {
    pub fn new(profile: &'a ResumeProfile, language: impl Into<Option<ResumeLanguage>>) -> Self {
        Self {
            language: language.into().unwrap_or_default(),
            profile,
        }
    }

    pub fn assemble(&self) -> String {
        TEMPLATE
            .replace("<<NAME>>", &escape_latex(&self.profile.personal_info.name))
            .replace("<<CONTACT>>", &self.contact())
            .replace(
                "<<EDUCATION>>",
                &self.section("EDUCATION_HEADER", Self::education(&self.profile.education)),
            )
            .replace(
                "<<EXPERIENCE>>",
                &self.section(
                    "EXPERIENCE_HEADER",
                    Self::experience(&self.profile.work_experiences),
                ),
            )
            .replace(
                "<<LANGUAGES>>",
                &self.section("LANGUAGES_HEADER", Self::languages(&self.profile.languages)),
            )
            .replace(
                "<<SKILLS>>",
                &self.section("SKILLS_HEADER", Self::skills(&self.profile.skills)),
            )
            .replace(
                "<<REFERENCES>>",
                &self.section(
                    "REFERENCES_HEADER",
                    Self::references(&self.profile.references),
                ),
            )
    }

    fn header_for<'k>(&self, key: &'k str) -> &'k str {
        let locale_map = match self.language {
            ResumeLanguage::English => &LOCALE_MAP_EN,
            ResumeLanguage::Portuguese => &LOCALE_MAP_PT,
        };

        locale_map
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }

    fn section(&self, header_key: &str, body: String) -> String {
        if body.is_empty() {
            return String::new();
        }

        format!("\\section*{{{}}}\n{}", self.header_for(header_key), body)
    }

    fn contact(&self) -> String {
        let info = &self.profile.personal_info;
        [&info.email, &info.phone, &info.address]
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| escape_latex(v))
            .collect::<Vec<String>>()
            .join(" \\ $|$ \\ ")
    }

    fn education(entries: &[EducationEntry]) -> String {
        entries
            .iter()
            .map(|e| {
                format!(
                    "\\noindent \\textbf{{{}}} \\hfill {} \\\\\n\\textit{{{}}}\n",
                    escape_latex(&e.institution),
                    escape_latex(&e.graduation_year),
                    escape_latex(&e.degree),
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn experience(entries: &[WorkExperience]) -> String {
        entries
            .iter()
            .map(|w| {
                let mut out = format!(
                    "\\noindent \\textbf{{{}}} \\hfill {} -- {} \\\\\n\\textit{{{}}}\n",
                    escape_latex(&w.job_title),
                    escape_latex(&w.start_date),
                    escape_latex(&w.end_date),
                    escape_latex(&w.company),
                );

                if !w.responsibilities.is_empty() {
                    out.push_str("\\begin{itemize}[noitemsep,topsep=0pt,leftmargin=*]\n");
                    for bullet in &w.responsibilities {
                        out.push_str(&format!("    \\item {}\n", escape_latex(bullet)));
                    }
                    out.push_str("\\end{itemize}\n");
                }

                out
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn languages(entries: &[LanguageSkill]) -> String {
        if entries.is_empty() {
            return String::new();
        }

        let mut out = String::from("\\begin{itemize}[noitemsep,topsep=0pt,leftmargin=*]\n");
        for l in entries {
            out.push_str(&format!(
                "    \\item \\textbf{{{}}} -- {}\n",
                escape_latex(&l.language),
                l.proficiency.as_str(),
            ));
        }
        out.push_str("\\end{itemize}\n");
        out
    }

    fn skills(skills: &[String]) -> String {
        skills
            .iter()
            .map(|s| escape_latex(s))
            .collect::<Vec<String>>()
            .join(" \\ $\\cdot$ \\ ")
    }

    fn references(references: &[Reference]) -> String {
        references
            .iter()
            .filter(|r| !r.is_blank())
            .map(|r| {
                let contact = [&r.phone, &r.email]
                    .iter()
                    .filter(|v| !v.is_empty())
                    .map(|v| escape_latex(v))
                    .collect::<Vec<String>>()
                    .join(" \\ $|$ \\ ");

                format!(
                    "\\noindent \\textbf{{{}}} \\hfill {} \\\\\n{}\n",
                    escape_latex(&r.name),
                    escape_latex(&r.company),
                    contact,
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("\\&"),
            '%' => result.push_str("\\%"),
            '$' => result.push_str("\\$"),
            '#' => result.push_str("\\#"),
            '_' => result.push_str("\\_"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '^' => result.push_str("\\textasciicircum{}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '\\' => result.push_str("\\textbackslash{}"),
            _ => result.push(c),
        }
    }

    result
}
