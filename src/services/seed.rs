// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Career path catalog and the startup seeding step.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{CareerPath, LearningResource, RoadmapStep};

/// Populate the career path collection with the catalog if it is empty.
///
/// Returns the number of paths inserted (0 when the collection already had data).
pub async fn initialize_career_paths(db: &FirestoreDb) -> Result<usize, AppError> {
    if db.has_career_paths().await? {
        tracing::info!("Career paths already present, skipping seed");
        return Ok(0);
    }

    let catalog = career_path_catalog();
    db.insert_career_paths(&catalog).await?;
    tracing::info!(count = catalog.len(), "Seeded career path catalog");

    Ok(catalog.len())
}

/// The six career tracks, each with fresh IDs.
pub fn career_path_catalog() -> Vec<CareerPath> {
    vec![
        path(
            "Web Developer",
            "Build websites and web applications using modern technologies",
            "🌐",
            &["HTML", "CSS", "JavaScript", "React", "Node.js", "Python", "Git"],
            &[
                ("HTML & CSS Fundamentals", "2-4 weeks", "Learn the building blocks of web pages"),
                ("JavaScript Basics", "4-6 weeks", "Add interactivity to your websites"),
                ("Frontend Framework (React)", "6-8 weeks", "Build dynamic user interfaces"),
                ("Backend Development", "8-10 weeks", "Learn server-side programming"),
                ("Database Management", "4-6 weeks", "Store and manage application data"),
                ("Deployment & DevOps", "3-4 weeks", "Deploy your applications to the web"),
            ],
            &[
                ("freeCodeCamp", "https://freecodecamp.org", "course"),
                ("MDN Web Docs", "https://developer.mozilla.org", "documentation"),
                ("JavaScript30", "https://javascript30.com", "practice"),
                ("React Official Tutorial", "https://react.dev/learn", "tutorial"),
            ],
            "$65,000 - $120,000",
            "13% growth (faster than average)",
            "Beginner to Intermediate",
        ),
        path(
            "Data Scientist",
            "Analyze large datasets to extract insights and build predictive models",
            "📊",
            &["Python", "R", "SQL", "Machine Learning", "Statistics", "Pandas", "NumPy", "Matplotlib"],
            &[
                ("Python Programming", "4-6 weeks", "Master Python fundamentals"),
                ("Statistics & Math", "6-8 weeks", "Essential mathematical foundations"),
                ("Data Manipulation", "4-6 weeks", "Learn Pandas and NumPy"),
                ("Data Visualization", "3-4 weeks", "Create compelling data visualizations"),
                ("Machine Learning", "8-12 weeks", "Build predictive models"),
                ("Advanced Topics", "ongoing", "Deep learning, NLP, computer vision"),
            ],
            &[
                ("Kaggle Learn", "https://kaggle.com/learn", "course"),
                ("Coursera Data Science", "https://coursera.org", "specialization"),
                ("Python for Data Analysis", "https://wesmckinney.com/book/", "book"),
                ("Jupyter Notebooks", "https://jupyter.org", "tool"),
            ],
            "$95,000 - $165,000",
            "35% growth (much faster than average)",
            "Intermediate to Advanced",
        ),
        path(
            "Cybersecurity Analyst",
            "Protect organizations from cyber threats and security breaches",
            "🔒",
            &[
                "Network Security",
                "Ethical Hacking",
                "Risk Assessment",
                "Incident Response",
                "Python",
                "Linux",
                "Cryptography",
            ],
            &[
                ("IT Fundamentals", "4-6 weeks", "Computer networks and systems"),
                ("Security Basics", "6-8 weeks", "Core security principles"),
                ("Network Security", "6-8 weeks", "Firewalls, VPNs, and monitoring"),
                ("Ethical Hacking", "8-10 weeks", "Penetration testing techniques"),
                ("Incident Response", "4-6 weeks", "Handle security breaches"),
                ("Certifications", "3-6 months", "Security+, CEH, CISSP"),
            ],
            &[
                ("Cybrary", "https://cybrary.it", "platform"),
                ("TryHackMe", "https://tryhackme.com", "practice"),
                ("SANS Training", "https://sans.org", "training"),
                ("Security+ Study Guide", "https://comptia.org", "certification"),
            ],
            "$85,000 - $140,000",
            "33% growth (much faster than average)",
            "Intermediate",
        ),
        path(
            "Software Engineer",
            "Design, develop, and maintain software applications and systems",
            "💻",
            &[
                "Programming Languages",
                "Data Structures",
                "Algorithms",
                "System Design",
                "Git",
                "Testing",
                "Agile",
            ],
            &[
                ("Programming Fundamentals", "6-8 weeks", "Choose a language and master basics"),
                ("Data Structures & Algorithms", "8-12 weeks", "Essential CS concepts"),
                ("Object-Oriented Programming", "4-6 weeks", "Design patterns and OOP principles"),
                ("Software Development Practices", "6-8 weeks", "Version control, testing, debugging"),
                ("System Design", "8-10 weeks", "Architecture and scalability"),
                ("Specialization", "ongoing", "Mobile, web, systems, or game development"),
            ],
            &[
                ("LeetCode", "https://leetcode.com", "practice"),
                ("GitHub", "https://github.com", "platform"),
                ("Clean Code", "https://amazon.com", "book"),
                (
                    "System Design Primer",
                    "https://github.com/donnemartin/system-design-primer",
                    "guide",
                ),
            ],
            "$85,000 - $160,000",
            "25% growth (much faster than average)",
            "Intermediate to Advanced",
        ),
        path(
            "AI Engineer",
            "Develop artificial intelligence and machine learning solutions",
            "🤖",
            &[
                "Python",
                "Machine Learning",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "NLP",
                "Computer Vision",
            ],
            &[
                ("Python & Math Foundations", "6-8 weeks", "Linear algebra, calculus, statistics"),
                ("Machine Learning Basics", "8-10 weeks", "Supervised and unsupervised learning"),
                ("Deep Learning", "10-12 weeks", "Neural networks and frameworks"),
                ("Specialization Areas", "12-16 weeks", "NLP, computer vision, or reinforcement learning"),
                ("MLOps", "6-8 weeks", "Model deployment and monitoring"),
                ("Advanced Research", "ongoing", "Latest AI developments and research"),
            ],
            &[
                ("Fast.ai", "https://fast.ai", "course"),
                ("Deep Learning Specialization", "https://coursera.org", "specialization"),
                ("Papers With Code", "https://paperswithcode.com", "research"),
                ("Hugging Face", "https://huggingface.co", "platform"),
            ],
            "$120,000 - $200,000",
            "23% growth (much faster than average)",
            "Advanced",
        ),
        path(
            "Cloud Engineer",
            "Design and manage cloud infrastructure and services",
            "☁️",
            &[
                "AWS/Azure/GCP",
                "Docker",
                "Kubernetes",
                "Infrastructure as Code",
                "DevOps",
                "Linux",
                "Networking",
            ],
            &[
                ("Linux & Networking", "4-6 weeks", "System administration basics"),
                ("Cloud Platform Basics", "6-8 weeks", "Choose AWS, Azure, or GCP"),
                ("Containerization", "4-6 weeks", "Docker and container orchestration"),
                ("Infrastructure as Code", "6-8 weeks", "Terraform, CloudFormation"),
                ("CI/CD Pipelines", "4-6 weeks", "Automated deployment processes"),
                ("Monitoring & Security", "6-8 weeks", "Cloud security and observability"),
            ],
            &[
                ("AWS Training", "https://aws.amazon.com/training/", "training"),
                ("A Cloud Guru", "https://acloudguru.com", "platform"),
                ("Docker Documentation", "https://docs.docker.com", "documentation"),
                ("Kubernetes.io", "https://kubernetes.io/docs/", "documentation"),
            ],
            "$95,000 - $155,000",
            "15% growth (faster than average)",
            "Intermediate to Advanced",
        ),
    ]
}

/// Build one catalog entry; roadmap steps are numbered from 1 in the given order.
#[allow(clippy::too_many_arguments)]
fn path(
    title: &str,
    description: &str,
    icon: &str,
    skills: &[&str],
    roadmap: &[(&str, &str, &str)],
    resources: &[(&str, &str, &str)],
    salary_range: &str,
    job_outlook: &str,
    difficulty_level: &str,
) -> CareerPath {
    CareerPath {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        roadmap: roadmap
            .iter()
            .zip(1u32..)
            .map(|(&(title, duration, description), step)| RoadmapStep {
                step,
                title: title.to_string(),
                duration: duration.to_string(),
                description: description.to_string(),
            })
            .collect(),
        resources: resources
            .iter()
            .map(|&(name, url, kind)| LearningResource {
                name: name.to_string(),
                url: url.to_string(),
                kind: kind.to_string(),
            })
            .collect(),
        salary_range: salary_range.to_string(),
        job_outlook: job_outlook.to_string(),
        difficulty_level: difficulty_level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_tracks() {
        let catalog = career_path_catalog();
        let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Web Developer",
                "Data Scientist",
                "Cybersecurity Analyst",
                "Software Engineer",
                "AI Engineer",
                "Cloud Engineer",
            ]
        );
    }

    #[test]
    fn test_roadmaps_are_numbered_from_one() {
        for path in career_path_catalog() {
            let steps: Vec<u32> = path.roadmap.iter().map(|s| s.step).collect();
            let expected: Vec<u32> = (1..=path.roadmap.len() as u32).collect();
            assert_eq!(steps, expected, "roadmap of {}", path.title);
            assert!(!path.resources.is_empty());
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = career_path_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let db = FirestoreDb::in_memory();

        assert_eq!(initialize_career_paths(&db).await.unwrap(), 6);
        assert_eq!(initialize_career_paths(&db).await.unwrap(), 0);
        assert_eq!(db.list_career_paths().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_seeding_fails_when_store_is_down() {
        let db = FirestoreDb::new_mock();
        let result = initialize_career_paths(&db).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
