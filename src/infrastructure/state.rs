//! Aggregate container holding one repository per entity family

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    AchievementRepository, EducationRepository, ExperienceRepository, ProfileRepository,
    ProjectRepository, SkillRepository,
};
use crate::infrastructure::{
    SeaOrmAchievementRepository, SeaOrmEducationRepository, SeaOrmExperienceRepository,
    SeaOrmProfileRepository, SeaOrmProjectRepository, SeaOrmSkillRepository,
};

/// Single dependency handed to upper layers.
///
/// Built once at wiring time and shared by cloning; fields are never
/// reassigned afterwards. Implementations hold no reference back to it.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub experiences: Arc<dyn ExperienceRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub achievements: Arc<dyn AchievementRepository>,
    pub education: Arc<dyn EducationRepository>,
    pub projects: Arc<dyn ProjectRepository>,
}

impl Repositories {
    /// Create the container with all SeaORM repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            profiles: Arc::new(SeaOrmProfileRepository::new(db.clone())),
            experiences: Arc::new(SeaOrmExperienceRepository::new(db.clone())),
            skills: Arc::new(SeaOrmSkillRepository::new(db.clone())),
            achievements: Arc::new(SeaOrmAchievementRepository::new(db.clone())),
            education: Arc::new(SeaOrmEducationRepository::new(db.clone())),
            projects: Arc::new(SeaOrmProjectRepository::new(db)),
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
