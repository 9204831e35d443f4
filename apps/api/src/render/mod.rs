//! HTML résumé rendering for preview and download.
//!
//! The template (`templates/resume.html`) auto-escapes every value.

use askama::Template;

use crate::models::resume::ResumeData;
use crate::scoring::project_ranker::RankedProject;

struct ExperienceView<'a> {
    title: &'a str,
    company: &'a str,
    dates: String,
    bullets: Vec<&'a str>,
}

struct EducationView<'a> {
    degree: &'a str,
    institution: &'a str,
    dates: String,
    gpa: &'a str,
}

struct ProjectView<'a> {
    name: &'a str,
    technologies: &'a str,
    description: &'a str,
    url: &'a str,
}

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeTemplate<'a> {
    name: &'a str,
    contact: Vec<&'a str>,
    links: Vec<&'a str>,
    summary: &'a str,
    experiences: Vec<ExperienceView<'a>>,
    projects: Vec<ProjectView<'a>>,
    education: Vec<EducationView<'a>>,
    technical_skills: Vec<&'a str>,
    soft_skills: Vec<&'a str>,
    certifications: Vec<&'a str>,
}

/// Renders the résumé document.
///
/// `selected_projects` are catalogue write-ups chosen by the last analysis; they
/// follow the candidate's own projects in the Projects section.
pub fn render_resume_html(
    resume: &ResumeData,
    selected_projects: &[RankedProject],
) -> Result<String, askama::Error> {
    let own_projects = resume.complete_projects().map(|p| ProjectView {
        name: p.name.trim(),
        technologies: p.technologies.trim(),
        description: p.description.trim(),
        url: p.url.as_deref().map(str::trim).unwrap_or(""),
    });
    let catalogue_projects = selected_projects.iter().map(|r| ProjectView {
        name: &r.project.title,
        technologies: "",
        description: &r.project.description,
        url: "",
    });

    let template = ResumeTemplate {
        name: resume.name.trim(),
        contact: non_blank([&resume.location, &resume.email, &resume.phone]),
        links: non_blank([&resume.linkedin, &resume.github, &resume.portfolio]),
        summary: resume.summary.trim(),
        experiences: resume
            .complete_experiences()
            .map(|e| ExperienceView {
                title: e.title.trim(),
                company: e.company.trim(),
                dates: format!("{} - {}", e.start.trim(), e.end.trim()),
                bullets: e.bullets().collect(),
            })
            .collect(),
        projects: own_projects.chain(catalogue_projects).collect(),
        education: resume
            .complete_education()
            .map(|e| EducationView {
                degree: e.degree.trim(),
                institution: e.institution.trim(),
                dates: format!("{} - {}", e.start.trim(), e.end.trim()),
                gpa: e.gpa.as_deref().map(str::trim).unwrap_or(""),
            })
            .collect(),
        technical_skills: non_blank(&resume.technical_skills),
        soft_skills: non_blank(&resume.soft_skills),
        certifications: non_blank(&resume.certifications),
    };

    template.render()
}

/// `"Ada Lovelace"` → `"Ada_Lovelace_resume.html"`. Only header-safe ASCII is kept.
pub fn download_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '_' | '-' | '.'))
        .collect();
    let stem = if stem.trim_matches('_').is_empty() {
        "resume"
    } else {
        stem.as_str()
    };
    format!("{stem}_resume.html")
}

fn non_blank<'a, S>(values: impl IntoIterator<Item = &'a S>) -> Vec<&'a str>
where
    S: AsRef<str> + ?Sized + 'a,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ProjectEntry;
    use crate::models::resume::{Education, Experience, UserProject};

    fn full_resume() -> ResumeData {
        ResumeData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "London, UK".to_string(),
            github: "https://github.com/ada".to_string(),
            summary: "Engineer who writes <fast> code & tests".to_string(),
            experiences: vec![Experience {
                title: "Engineer".to_string(),
                company: "Analytical Engines".to_string(),
                start: "Jan 2020".to_string(),
                end: "Present".to_string(),
                responsibilities: vec!["Built the scheduler".to_string(), "".to_string()],
            }],
            education: vec![Education {
                degree: "BSc Mathematics".to_string(),
                institution: "University of London".to_string(),
                start: "2012".to_string(),
                end: "2015".to_string(),
                gpa: Some("3.9".to_string()),
            }],
            technical_skills: vec!["Rust".to_string(), "SQL".to_string()],
            projects: vec![UserProject {
                name: "Difference Engine".to_string(),
                technologies: "Brass".to_string(),
                description: "Mechanical calculator".to_string(),
                url: None,
            }],
            certifications: vec!["AWS Certified".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_all_sections() {
        let html = render_resume_html(&full_resume(), &[]).unwrap();
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("London, UK | ada@example.com | 555-0100"));
        assert!(html.contains(r#"<a href="https://github.com/ada">"#));
        assert!(html.contains("Work Experience"));
        assert!(html.contains("<li>Built the scheduler</li>"));
        assert!(html.contains("Jan 2020 - Present"));
        assert!(html.contains("GPA: 3.9"));
        assert!(html.contains(r#"<span class="skill">Rust</span>"#));
        assert!(html.contains("<li>AWS Certified</li>"));
        assert!(!html.contains("Soft Skills"));
    }

    #[test]
    fn test_values_are_html_escaped() {
        let html = render_resume_html(&full_resume(), &[]).unwrap();
        assert!(html.contains("writes &#60;fast&#62; code &#38; tests"));
        assert!(!html.contains("<fast>"));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let resume = ResumeData {
            name: "Grace".to_string(),
            ..Default::default()
        };
        let html = render_resume_html(&resume, &[]).unwrap();
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("<h2>Projects</h2>"));
        assert!(!html.contains("Education"));
        assert!(!html.contains("Professional Summary"));
    }

    #[test]
    fn test_selected_catalogue_projects_follow_own_projects() {
        let selected = vec![RankedProject {
            project: ProjectEntry {
                title: "GraphQL API Gateway".to_string(),
                description: "Federates legacy services".to_string(),
                keywords: vec!["graphql".to_string()],
            },
            relevance_score: 12,
        }];
        let html = render_resume_html(&full_resume(), &selected).unwrap();
        let own = html.find("Difference Engine").unwrap();
        let catalogue = html.find("GraphQL API Gateway").unwrap();
        assert!(own < catalogue);
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("Ada Lovelace"), "Ada_Lovelace_resume.html");
        assert_eq!(download_file_name("   "), "resume_resume.html");
        assert_eq!(download_file_name("a\"b/c"), "abc_resume.html");
    }
}
