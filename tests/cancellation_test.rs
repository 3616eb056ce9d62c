mod common;

use std::time::Duration;

use common::{date, setup_repos};
use resume_store::domain::{ExperienceFilter, SkillFilter};
use resume_store::models::{Experience, Skill};
use resume_store::{Context, DomainError, ErrorKind};

#[tokio::test]
async fn test_cancelled_context_does_not_reach_storage() {
    let repos = setup_repos().await;
    let cancelled = Context::background();
    cancelled.cancel();

    let err = repos
        .skills
        .create(&cancelled, Skill::new("Rust", "languages", 5))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.is_cancelled());
    assert_eq!(err.operation(), "create");
    assert!(matches!(
        err.find_cause::<DomainError>(),
        Some(DomainError::Cancelled)
    ));

    // The insert never ran
    let live = Context::background();
    let all = repos
        .skills
        .get_all(&live, &SkillFilter::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_every_operation_honors_cancellation() {
    let repos = setup_repos().await;
    let live = Context::background();
    let stored = repos
        .experiences
        .create(&live, Experience::new("Acme", "Engineer", date(2020, 1, 1)))
        .await
        .unwrap();
    let id = stored.id.unwrap();

    let cancelled = live.child();
    cancelled.cancel();

    let kinds = [
        repos
            .experiences
            .get_all(&cancelled, &ExperienceFilter::default())
            .await
            .unwrap_err()
            .kind(),
        repos.experiences.get_by_id(&cancelled, id).await.unwrap_err().kind(),
        repos.experiences.get_current(&cancelled).await.unwrap_err().kind(),
        repos
            .experiences
            .update(&cancelled, stored.clone())
            .await
            .unwrap_err()
            .kind(),
        repos.experiences.delete(&cancelled, id).await.unwrap_err().kind(),
    ];
    assert!(kinds.iter().all(|kind| *kind == ErrorKind::Cancelled));

    // Parent context is unaffected and the row survived
    let still_there = repos.experiences.get_by_id(&live, id).await.unwrap();
    assert_eq!(still_there, stored);
}

#[tokio::test]
async fn test_expired_deadline_is_cancelled_kind() {
    let repos = setup_repos().await;
    let expired = Context::with_timeout(Duration::ZERO);

    let err = repos.profiles.get_primary(&expired).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(matches!(
        err.find_cause::<DomainError>(),
        Some(DomainError::DeadlineExceeded)
    ));
}

#[tokio::test]
async fn test_generous_deadline_lets_work_finish() {
    let repos = setup_repos().await;
    let ctx = Context::with_timeout(Duration::from_secs(30));

    let created = repos
        .skills
        .create(&ctx, Skill::new("SQL", "databases", 4))
        .await
        .unwrap();
    assert!(created.id.is_some());
}
