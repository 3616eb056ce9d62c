//! Demo resume used by `SEED_DEMO=1` and local development.
//!
//! Everything goes through the repository contracts, so seeding exercises
//! the same validation as any other caller.

use chrono::NaiveDate;

use crate::domain::{Context, ProfileFilter, RepoResult};
use crate::infrastructure::Repositories;
use crate::models::{Achievement, Education, Experience, Profile, Project, Skill};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Inserts the demo resume unless a profile already exists.
///
/// Returns `false` when the store was left untouched.
pub async fn seed_demo_resume(repos: &Repositories, ctx: &Context) -> RepoResult<bool> {
    let existing = repos
        .profiles
        .get_all(ctx, &ProfileFilter::default().with_limit(1))
        .await?;
    if !existing.is_empty() {
        tracing::info!("profile already present, skipping demo data");
        return Ok(false);
    }

    let mut profile = Profile::new("Alex Morgan", "Backend engineer");
    profile.summary = Some("Builds data-heavy services in Rust and Go.".to_owned());
    profile.email = Some("alex@example.com".to_owned());
    profile.location = Some("Lisbon, PT".to_owned());
    profile.github_url = Some("https://github.com/alexmorgan".to_owned());
    repos.profiles.create(ctx, profile).await?;

    let mut current = Experience::new("Northwind", "Senior Engineer", date(2021, 4, 1));
    current.is_current = true;
    current.employment_type = Some("full_time".to_owned());
    current.technologies = vec!["rust".to_owned(), "postgres".to_owned()];
    repos.experiences.create(ctx, current).await?;

    let mut previous = Experience::new("Contoso", "Software Engineer", date(2017, 9, 1));
    previous.end_date = Some(date(2021, 3, 31));
    previous.employment_type = Some("full_time".to_owned());
    previous.technologies = vec!["go".to_owned(), "kafka".to_owned()];
    repos.experiences.create(ctx, previous).await?;

    let skills = [
        Skill::new("Rust", "languages", 5).featured(),
        Skill::new("Go", "languages", 4),
        Skill::new("PostgreSQL", "databases", 4).featured(),
        Skill::new("Kubernetes", "infrastructure", 3),
    ];
    for (position, mut skill) in skills.into_iter().enumerate() {
        skill.sort_order = position as i32;
        repos.skills.create(ctx, skill).await?;
    }

    let mut cert = Achievement::new(
        "Certified Kubernetes Administrator",
        "certification",
        date(2022, 2, 11),
    );
    cert.issuer = Some("CNCF".to_owned());
    repos.achievements.create(ctx, cert).await?;

    let mut talk = Achievement::new("RustConf speaker", "award", date(2023, 9, 13));
    talk.is_featured = true;
    repos.achievements.create(ctx, talk).await?;

    let mut degree = Education::new("University of Porto", "BSc", date(2013, 9, 15));
    degree.field_of_study = Some("Computer Science".to_owned());
    degree.end_date = Some(date(2017, 7, 1));
    repos.education.create(ctx, degree).await?;

    let mut project = Project::new("resume-store", "backend");
    project.status = Some("active".to_owned());
    project.technologies = vec!["rust".to_owned(), "sqlite".to_owned()];
    project.start_date = Some(date(2024, 1, 5));
    project.is_featured = true;
    repos.projects.create(ctx, project).await?;

    tracing::info!("demo resume seeded");
    Ok(true)
}
