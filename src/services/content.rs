// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Built-in guidance content.
//!
//! Everything here is constructed fresh on each call; timestamps and IDs
//! reflect the request, not a stored publication.

use crate::models::content::TemplateSection;
use crate::models::{BlogPost, JobGuidance, ResumeTemplate, ResumeTemplateContent, TemplateLink};
use chrono::{DateTime, Utc};

const BLOG_AUTHOR: &str = "Devset Team";

/// Blog posts, stamped with `now`.
pub fn blog_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    [
        (
            "How to Stay Motivated While Learning to Code",
            "Practical tips to maintain motivation during your coding journey",
            ["motivation", "learning", "coding"],
        ),
        (
            "Building Your First Portfolio Project",
            "Step-by-step guide to creating impressive portfolio projects",
            ["portfolio", "projects", "career"],
        ),
        (
            "Networking Tips for CS Students",
            "How to build professional relationships in the tech industry",
            ["networking", "career", "students"],
        ),
    ]
    .into_iter()
    .map(|(title, excerpt, tags)| BlogPost {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: BLOG_AUTHOR.to_string(),
        created_at: now,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    })
    .collect()
}

pub fn job_guidance() -> JobGuidance {
    JobGuidance {
        internship_tips: strings(&[
            "Start applying early - many companies recruit 3-6 months in advance",
            "Customize your resume for each application",
            "Build projects that demonstrate relevant skills",
            "Practice coding interviews on platforms like LeetCode",
            "Network with professionals on LinkedIn",
            "Attend career fairs and tech meetups",
        ]),
        application_process: strings(&[
            "Research the company and role thoroughly",
            "Tailor your cover letter to the specific position",
            "Highlight relevant projects and experiences",
            "Prepare for technical and behavioral interviews",
            "Follow up appropriately after interviews",
            "Be persistent but respectful",
        ]),
        resume_templates: vec![
            TemplateLink {
                name: "Software Engineer Resume Template".to_string(),
                description: "Perfect for software development roles".to_string(),
                url: "https://docs.google.com/document/d/example1".to_string(),
            },
            TemplateLink {
                name: "Data Science Resume Template".to_string(),
                description: "Tailored for data science positions".to_string(),
                url: "https://docs.google.com/document/d/example2".to_string(),
            },
            TemplateLink {
                name: "Cybersecurity Resume Template".to_string(),
                description: "Optimized for security roles".to_string(),
                url: "https://docs.google.com/document/d/example3".to_string(),
            },
        ],
        interview_prep: strings(&[
            "Practice coding problems daily",
            "Review data structures and algorithms",
            "Prepare STAR method examples for behavioral questions",
            "Research common interview questions for your target role",
            "Mock interviews with peers or mentors",
            "Prepare thoughtful questions to ask the interviewer",
        ]),
    }
}

struct TemplateSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    /// Role-specific skills and project sections
    skills: &'static str,
    projects: &'static str,
}

const TEMPLATES: &[TemplateSpec] = &[
    TemplateSpec {
        id: "software_engineer",
        name: "Software Engineer Resume",
        description: "Clean, ATS-friendly layout for software development roles",
        category: "Software Engineering",
        skills: "Languages: Java, Python, TypeScript\nTools: Git, Docker, CI/CD\nConcepts: Data structures, algorithms, system design",
        projects: "Project name | Tech stack\n- What you built and why\n- Measurable impact (users, latency, coverage)",
    },
    TemplateSpec {
        id: "data_scientist",
        name: "Data Scientist Resume",
        description: "Highlights analysis, modelling and experimentation work",
        category: "Data Science",
        skills: "Languages: Python, R, SQL\nLibraries: Pandas, NumPy, scikit-learn\nMethods: Statistics, machine learning, visualization",
        projects: "Analysis or model name | Dataset\n- Question answered\n- Model performance and business outcome",
    },
    TemplateSpec {
        id: "web_developer",
        name: "Web Developer Resume",
        description: "Portfolio-first layout for frontend and full-stack roles",
        category: "Web Development",
        skills: "Frontend: HTML, CSS, JavaScript, React\nBackend: Node.js, REST APIs, databases\nPractices: Accessibility, responsive design, testing",
        projects: "Site or app name | Live URL\n- Features you implemented\n- Performance or accessibility improvements",
    },
    TemplateSpec {
        id: "cybersecurity",
        name: "Cybersecurity Resume",
        description: "Emphasizes certifications, labs and incident experience",
        category: "Cybersecurity",
        skills: "Areas: Network security, incident response, risk assessment\nTools: Wireshark, Nmap, Metasploit, SIEM\nPlatforms: Linux, Windows, cloud",
        projects: "Lab or CTF name | Platform\n- Scenario and techniques used\n- Findings and remediation",
    },
];

/// Templates available for download.
pub fn resume_templates() -> Vec<ResumeTemplate> {
    TEMPLATES
        .iter()
        .map(|t| ResumeTemplate {
            id: t.id.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            category: t.category.to_string(),
            preview_url: format!("/static/resume-templates/{}.png", t.id),
            download_url: format!("/api/resume-templates/{}/download", t.id),
        })
        .collect()
}

/// Full outline of one template, or `None` for an unknown ID.
pub fn resume_template_content(template_id: &str) -> Option<ResumeTemplateContent> {
    let template = TEMPLATES.iter().find(|t| t.id == template_id)?;

    let sections = [
        (
            "Contact Information",
            "Full Name\nCity, State | Phone | Email\nLinkedIn | GitHub | Portfolio",
        ),
        (
            "Professional Summary",
            "Two or three sentences on your focus, strongest skills and the role you want.",
        ),
        ("Technical Skills", template.skills),
        (
            "Experience",
            "Job Title | Company | Dates\n- Action verb + what you did + result\n- Quantify impact wherever possible",
        ),
        ("Projects", template.projects),
        (
            "Education",
            "Degree, Major | University | Graduation Date\nRelevant coursework, GPA if 3.5+",
        ),
        (
            "Certifications",
            "Certification name | Issuer | Year",
        ),
    ]
    .into_iter()
    .map(|(name, content)| TemplateSection {
        name: name.to_string(),
        content: content.to_string(),
    })
    .collect();

    Some(ResumeTemplateContent {
        template_name: template.name.to_string(),
        sections,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
