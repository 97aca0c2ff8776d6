// SPDX-License-Identifier: MIT
// Copyright 2026 TechPathfinder Contributors

//! Job search against the Adzuna job board, with built-in sample listings
//! when the board is not configured or unavailable.

use crate::error::AppError;
use crate::models::job::JobSearchRequest;
use crate::models::JobListing;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const ADZUNA_COUNTRY: &str = "us";
const RESULTS_PER_PAGE: u32 = 20;

/// Search results as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobSearchResponse {
    pub results: Vec<JobListing>,
    pub count: usize,
}

/// Adzuna job board client.
#[derive(Clone)]
pub struct AdzunaClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl AdzunaClient {
    pub fn new(app_id: String, app_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ADZUNA_BASE_URL.to_string(),
            app_id,
            app_key,
        }
    }

    /// First page of listings matching the request.
    pub async fn search(&self, request: &JobSearchRequest) -> Result<Vec<JobListing>, AppError> {
        let url = format!("{}/{}/search/1", self.base_url, ADZUNA_COUNTRY);

        let mut params = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("what", request.query.clone()),
            ("results_per_page", RESULTS_PER_PAGE.to_string()),
        ];
        if let Some(location) = non_blank(&request.location) {
            params.push(("where", location.to_string()));
        }
        match non_blank(&request.job_type) {
            Some("full_time") => params.push(("full_time", "1".to_string())),
            Some("part_time") => params.push(("part_time", "1".to_string())),
            // Adzuna has no internship flag; narrow by keyword instead.
            Some("internship") => params.push(("what_and", "intern".to_string())),
            _ => {}
        }

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Adzuna request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Internal(anyhow::anyhow!(
                "Adzuna returned HTTP {}",
                status
            )));
        }

        let body: AdzunaSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Adzuna JSON parse error: {}", e)))?;

        let fallback_type = non_blank(&request.job_type).unwrap_or("full_time");
        Ok(body
            .results
            .into_iter()
            .map(|job| job.into_listing(fallback_type))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct AdzunaSearchResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    created: Option<DateTime<Utc>>,
    #[serde(default)]
    redirect_url: String,
    company: Option<AdzunaName>,
    location: Option<AdzunaName>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    contract_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaName {
    display_name: String,
}

impl AdzunaJob {
    fn into_listing(self, fallback_type: &str) -> JobListing {
        JobListing {
            id: self.id,
            title: self.title,
            company: self
                .company
                .map(|c| c.display_name)
                .unwrap_or_else(|| "Unknown company".to_string()),
            location: self
                .location
                .map(|l| l.display_name)
                .unwrap_or_else(|| "Remote".to_string()),
            description: self.description,
            salary: format_salary(self.salary_min, self.salary_max),
            job_type: self
                .contract_time
                .unwrap_or_else(|| fallback_type.to_string()),
            posted_date: self.created.unwrap_or_else(Utc::now),
            apply_url: self.redirect_url,
        }
    }
}

fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if (max - min).abs() >= 1.0 => {
            format!("${} - ${}", thousands(min), thousands(max))
        }
        (Some(v), _) | (None, Some(v)) => format!("${}", thousands(v)),
        (None, None) => "Not specified".to_string(),
    }
}

fn thousands(value: f64) -> String {
    let digits = (value.round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Job search with graceful degradation to sample listings.
#[derive(Clone)]
pub struct JobSearchService {
    adzuna: Option<AdzunaClient>,
}

impl JobSearchService {
    pub fn new(credentials: Option<(String, String)>) -> Self {
        Self {
            adzuna: credentials.map(|(id, key)| AdzunaClient::new(id, key)),
        }
    }

    pub fn uses_job_board(&self) -> bool {
        self.adzuna.is_some()
    }

    pub async fn search(&self, request: &JobSearchRequest) -> JobSearchResponse {
        let results = match &self.adzuna {
            Some(client) => match client.search(request).await {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!(error = %e, "Job board search failed, using sample listings");
                    sample_listings(request, Utc::now())
                }
            },
            None => sample_listings(request, Utc::now()),
        };

        JobSearchResponse {
            count: results.len(),
            results,
        }
    }
}

/// Illustrative listings shaped after the query.
pub fn sample_listings(request: &JobSearchRequest, now: DateTime<Utc>) -> Vec<JobListing> {
    const COMPANIES: [(&str, &str, &str, &str); 5] = [
        ("TechCorp Solutions", "San Francisco, CA", "Junior", "$70,000 - $95,000"),
        ("InnovateLabs", "New York, NY", "", "$85,000 - $120,000"),
        ("CloudScale Inc.", "Seattle, WA", "Senior", "$130,000 - $170,000"),
        ("DataBridge Analytics", "Austin, TX", "Associate", "$75,000 - $100,000"),
        ("SecureNet Systems", "Remote", "", "$90,000 - $125,000"),
    ];
    const TYPES: [&str; 3] = ["full_time", "part_time", "internship"];

    let role = title_case(&request.query);
    let location = non_blank(&request.location);
    let job_type = non_blank(&request.job_type);

    COMPANIES
        .iter()
        .enumerate()
        .map(|(i, &(company, default_location, level, salary))| {
            let title = if level.is_empty() {
                role.clone()
            } else {
                format!("{} {}", level, role)
            };
            let job_type = job_type.unwrap_or(TYPES[i % TYPES.len()]);
            JobListing {
                id: format!("sample-{}", i + 1),
                description: format!(
                    "{} is hiring a {} to join a collaborative engineering team. \
                     Work on real products, learn from experienced mentors and grow your career.",
                    company, title
                ),
                title,
                company: company.to_string(),
                location: location.unwrap_or(default_location).to_string(),
                salary: salary.to_string(),
                job_type: job_type.to_string(),
                posted_date: now - Duration::days(i as i64 + 1),
                apply_url: "#".to_string(),
            }
        })
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str, location: Option<&str>, job_type: Option<&str>) -> JobSearchRequest {
        JobSearchRequest {
            query: query.to_string(),
            location: location.map(String::from),
            job_type: job_type.map(String::from),
        }
    }

    #[test]
    fn test_sample_listings_follow_the_query() {
        let now = Utc::now();
        let listings = sample_listings(
            &request("software engineer", Some("San Francisco"), Some("internship")),
            now,
        );

        assert_eq!(listings.len(), 5);
        for job in &listings {
            assert!(job.title.contains("Software Engineer"), "{}", job.title);
            assert_eq!(job.location, "San Francisco");
            assert_eq!(job.job_type, "internship");
            assert!(job.posted_date < now);
        }
    }

    #[test]
    fn test_sample_listings_without_filters_mix_job_types() {
        let listings = sample_listings(&request("data scientist", Some(""), None), Utc::now());
        assert!(listings.iter().any(|j| j.job_type == "full_time"));
        assert!(listings.iter().any(|j| j.job_type == "internship"));
        assert_eq!(listings[1].location, "New York, NY");
    }

    #[test]
    fn test_adzuna_job_mapping() {
        let raw = serde_json::json!({
            "id": "4412",
            "title": "Backend Engineer",
            "description": "Build APIs",
            "created": "2026-09-01T12:00:00Z",
            "redirect_url": "https://www.adzuna.com/details/4412",
            "company": {"display_name": "Acme"},
            "location": {"display_name": "Denver, Colorado"},
            "salary_min": 95000.0,
            "salary_max": 125000.0
        });
        let job: AdzunaJob = serde_json::from_value(raw).unwrap();
        let listing = job.into_listing("part_time");

        assert_eq!(listing.company, "Acme");
        assert_eq!(listing.salary, "$95,000 - $125,000");
        assert_eq!(listing.job_type, "part_time");
        assert_eq!(listing.apply_url, "https://www.adzuna.com/details/4412");
    }

    #[test]
    fn test_salary_formatting() {
        assert_eq!(format_salary(None, None), "Not specified");
        assert_eq!(format_salary(Some(1_250_000.0), None), "$1,250,000");
        assert_eq!(format_salary(Some(500.0), Some(500.0)), "$500");
    }

    #[tokio::test]
    async fn test_search_without_credentials_uses_samples() {
        let service = JobSearchService::new(None);
        assert!(!service.uses_job_board());

        let response = service.search(&request("rust developer", None, None)).await;
        assert_eq!(response.count, response.results.len());
        assert!(response.count > 0);
    }
}
