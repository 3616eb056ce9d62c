mod common;

use common::{date, setup_repos};
use resume_store::models::{Achievement, Education, Experience, Profile, Project, Skill};
use resume_store::{Context, ErrorKind};

#[tokio::test]
async fn test_profile_create_then_get_round_trips() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let mut input = Profile::new("Ada Lovelace", "Analytical engine programmer");
    input.email = Some("ada@example.com".to_string());
    input.location = Some("London".to_string());

    let created = repos.profiles.create(&ctx, input.clone()).await.unwrap();
    let id = created.id.expect("create assigns an id");
    assert!(id > 0);
    assert!(created.created_at.is_some());

    let mut expected = input;
    expected.id = Some(id);
    expected.created_at = created.created_at.clone();
    expected.updated_at = created.updated_at.clone();
    assert_eq!(created, expected);

    let fetched = repos.profiles.get_by_id(&ctx, id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_caller_supplied_id() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let mut skill = Skill::new("Rust", "languages", 5);
    skill.id = Some(999);

    let created = repos.skills.create(&ctx, skill).await.unwrap();
    assert_ne!(created.id, Some(999));
    assert!(repos.skills.get_by_id(&ctx, 999).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_every_entity_round_trips() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let mut experience = Experience::new("Northwind", "Engineer", date(2020, 1, 6));
    experience.end_date = Some(date(2022, 12, 31));
    experience.technologies = vec!["rust".to_string(), "sqlite".to_string()];
    let created = repos.experiences.create(&ctx, experience).await.unwrap();
    let fetched = repos
        .experiences
        .get_by_id(&ctx, created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.technologies, vec!["rust", "sqlite"]);

    let mut achievement = Achievement::new("Best paper", "award", date(2021, 6, 15));
    achievement.issuer = Some("ACM".to_string());
    let created = repos.achievements.create(&ctx, achievement).await.unwrap();
    let fetched = repos
        .achievements
        .get_by_id(&ctx, created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let mut education = Education::new("MIT", "MSc", date(2015, 9, 1));
    education.is_current = true;
    let created = repos.education.create(&ctx, education).await.unwrap();
    let fetched = repos
        .education
        .get_by_id(&ctx, created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, created);
    assert!(fetched.is_current);

    let mut project = Project::new("resume-store", "backend");
    project.start_date = Some(date(2024, 1, 5));
    project.is_featured = true;
    let created = repos.projects.create(&ctx, project).await.unwrap();
    let fetched = repos
        .projects
        .get_by_id(&ctx, created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_rejects_missing_required_fields() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let err = repos
        .profiles
        .create(&ctx, Profile::new("", "Engineer"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.operation(), "create");
    assert_eq!(err.entity(), "profile");

    let mut backwards = Experience::new("Acme", "Engineer", date(2020, 1, 1));
    backwards.end_date = Some(date(2019, 1, 1));
    let err = repos.experiences.create(&ctx, backwards).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = repos
        .skills
        .create(&ctx, Skill::new("Rust", "languages", 9))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // Nothing was written
    let all = repos
        .skills
        .get_all(&ctx, &Default::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let created = repos
        .skills
        .create(&ctx, Skill::new("Go", "languages", 3))
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.proficiency = 4;
    changed.is_featured = true;
    changed.years_of_experience = Some(6);

    let updated = repos.skills.update(&ctx, changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.proficiency, 4);
    assert!(updated.is_featured);
    assert_eq!(updated.created_at, created.created_at);

    let fetched = repos
        .skills
        .get_by_id(&ctx, created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found_and_inserts_nothing() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let mut ghost = Project::new("ghost", "backend");
    ghost.id = Some(42);

    let err = repos.projects.update(&ctx, ghost).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), "update");
    assert_eq!(err.kind().status_code(), 404);

    let all = repos
        .projects
        .get_all(&ctx, &Default::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_update_without_id_is_validation_error() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let err = repos
        .education
        .update(&ctx, Education::new("MIT", "BSc", date(2010, 9, 1)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again_are_not_found() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let created = repos
        .achievements
        .create(&ctx, Achievement::new("CKA", "certification", date(2022, 2, 11)))
        .await
        .unwrap();
    let id = created.id.unwrap();

    repos.achievements.delete(&ctx, id).await.unwrap();

    let err = repos.achievements.get_by_id(&ctx, id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), "get_by_id");

    let err = repos.achievements.delete(&ctx, id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), "delete");
    assert_eq!(
        err.to_string(),
        format!("repository error during delete on achievement: achievement not found (id {id})")
    );
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let err = repos.experiences.get_by_id(&ctx, 0).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = repos.experiences.delete(&ctx, -1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_get_primary_profile() {
    let repos = setup_repos().await;
    let ctx = Context::background();

    let err = repos.profiles.get_primary(&ctx).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), "get_primary");

    let first = repos
        .profiles
        .create(&ctx, Profile::new("Ada", "Engineer"))
        .await
        .unwrap();
    repos
        .profiles
        .create(&ctx, Profile::new("Grace", "Admiral"))
        .await
        .unwrap();

    let primary = repos.profiles.get_primary(&ctx).await.unwrap();
    assert_eq!(primary, first);
}
