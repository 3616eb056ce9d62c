use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume_store::domain::{
    AchievementFilter, EducationFilter, ExperienceFilter, ProfileFilter, ProjectFilter,
    SkillFilter,
};
use resume_store::{Context, RepoResult, Repositories, config, db, seed};

/// Row counts per entity, logged at startup.
async fn log_summary(repos: &Repositories, ctx: &Context) -> RepoResult<()> {
    let profile_filter = ProfileFilter::default();
    let experience_filter = ExperienceFilter::default();
    let skill_filter = SkillFilter::default();
    let achievement_filter = AchievementFilter::default();
    let education_filter = EducationFilter::default();
    let project_filter = ProjectFilter::default();
    let (profiles, experiences, skills, achievements, education, projects) = futures::try_join!(
        repos.profiles.get_all(ctx, &profile_filter),
        repos.experiences.get_all(ctx, &experience_filter),
        repos.skills.get_all(ctx, &skill_filter),
        repos.achievements.get_all(ctx, &achievement_filter),
        repos.education.get_all(ctx, &education_filter),
        repos.projects.get_all(ctx, &project_filter),
    )?;

    tracing::info!(
        profiles = profiles.len(),
        experiences = experiences.len(),
        skills = skills.len(),
        achievements = achievements.len(),
        education = education.len(),
        projects = projects.len(),
        "resume store ready"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_store=debug,sea_orm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db_with(&config)
        .await
        .expect("Failed to initialize database");

    let repos = Repositories::new(db);
    let ctx = Context::background();

    // Cancel in-flight work on Ctrl-C
    let shutdown = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling");
            shutdown.cancel();
        }
    });

    if std::env::var("SEED_DEMO").is_ok() {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_resume(&repos, &ctx).await {
            tracing::error!(kind = e.kind().as_str(), "Failed to seed data: {}", e);
        }
    }

    if let Err(e) = log_summary(&repos, &ctx).await {
        tracing::error!(kind = e.kind().as_str(), "Failed to read store: {}", e);
        std::process::exit(1);
    }
}
