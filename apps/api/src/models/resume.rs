use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One work-experience row from the résumé form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub responsibilities: Vec<String>,
}

impl Experience {
    /// Rows missing title, company or dates are ignored, as the form does.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.company, &self.start, &self.end]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.responsibilities
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start: String,
    pub end: String,
    pub gpa: Option<String>,
}

impl Education {
    pub fn is_complete(&self) -> bool {
        [&self.degree, &self.institution, &self.start, &self.end]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// A project the candidate wrote up themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProject {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub url: Option<String>,
}

impl UserProject {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.technologies, &self.description]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Everything collected by the résumé form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub location: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub projects: Vec<UserProject>,
    pub certifications: Vec<String>,
}

/// Section names of the candidate résumé text, in rendering order.
pub const SECTIONS: &[&str] = &["summary", "experience", "education", "skills", "projects"];

impl ResumeData {
    pub fn contact_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.phone.trim().is_empty()
    }

    /// Required form fields left blank, in form order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("summary", &self.summary),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if non_blank(&self.technical_skills).next().is_none() {
            missing.push("technical_skills");
        }
        missing
    }

    pub fn complete_experiences(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter().filter(|e| e.is_complete())
    }

    pub fn complete_education(&self) -> impl Iterator<Item = &Education> {
        self.education.iter().filter(|e| e.is_complete())
    }

    pub fn complete_projects(&self) -> impl Iterator<Item = &UserProject> {
        self.projects.iter().filter(|p| p.is_complete())
    }

    /// Builds the lower-cased per-section text used for one scoring pass.
    pub fn to_resume_text(&self) -> ResumeText {
        let experience = self
            .complete_experiences()
            .flat_map(|e| {
                [e.title.as_str(), e.company.as_str()]
                    .into_iter()
                    .chain(e.bullets())
            })
            .collect::<Vec<_>>()
            .join(" ");

        let education = self
            .complete_education()
            .flat_map(|e| [e.degree.as_str(), e.institution.as_str()])
            .collect::<Vec<_>>()
            .join(" ");

        let skills = non_blank(&self.technical_skills)
            .chain(non_blank(&self.soft_skills))
            .collect::<Vec<_>>()
            .join(", ");

        let projects = self
            .complete_projects()
            .flat_map(|p| {
                [
                    p.name.as_str(),
                    p.technologies.as_str(),
                    p.description.as_str(),
                ]
            })
            .collect::<Vec<_>>()
            .join(" ");

        ResumeText::from_sections([
            ("summary", self.summary.trim().to_string()),
            ("experience", experience),
            ("education", education),
            ("skills", skills),
            ("projects", projects),
        ])
    }
}

fn non_blank(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Lower-cased résumé text keyed by section name. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeText {
    sections: BTreeMap<String, String>,
}

impl ResumeText {
    pub fn from_sections<K, V>(sections: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        Self {
            sections: sections
                .into_iter()
                .map(|(k, v)| (k.into(), v.as_ref().to_lowercase()))
                .collect(),
        }
    }

    /// Section text, empty when the section is absent.
    pub fn section(&self, name: &str) -> &str {
        self.sections.get(name).map(String::as_str).unwrap_or("")
    }

    /// All sections joined with spaces, in [`SECTIONS`] order then any extras.
    pub fn combined(&self) -> String {
        let known = SECTIONS.iter().map(|s| self.section(s));
        let extra = self
            .sections
            .iter()
            .filter(|(k, _)| !SECTIONS.contains(&k.as_str()))
            .map(|(_, v)| v.as_str());
        known
            .chain(extra)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
