//! Filter criteria for repository queries
//!
//! One plain value struct per entity. Every predicate is optional and `None`
//! means "no constraint"; set predicates are ANDed. `limit`/`offset` of
//! `None` or `Some(0)` are unspecified.
//!
//! `matches` mirrors the SQL translation in the storage adapters and is what
//! in-memory doubles and tests filter with.

use chrono::{Datelike, NaiveDate};

use crate::models::{Achievement, Education, Experience, Profile, Project, Skill};

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.filter(|n| *n > 0),
            offset: offset.filter(|n| *n > 0),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    /// Applies the window to an already ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skipped = items
            .into_iter()
            .skip(self.offset.unwrap_or(0) as usize);
        match self.limit {
            Some(limit) => skipped.take(limit as usize).collect(),
            None => skipped.collect(),
        }
    }
}

macro_rules! paginated {
    ($filter:ty) => {
        impl $filter {
            pub fn with_limit(mut self, limit: u64) -> Self {
                self.limit = Some(limit);
                self
            }

            pub fn with_offset(mut self, offset: u64) -> Self {
                self.offset = Some(offset);
                self
            }

            pub fn pagination(&self) -> Pagination {
                Pagination::new(self.limit, self.offset)
            }
        }
    };
}

fn eq_opt<T: PartialEq + ?Sized>(wanted: Option<&T>, actual: &T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

fn eq_nullable(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

/// Filter criteria for profile queries
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileFilter {
    pub email: Option<String>,
    pub location: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(ProfileFilter);

impl ProfileFilter {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        eq_nullable(self.email.as_deref(), profile.email.as_deref())
            && eq_nullable(self.location.as_deref(), profile.location.as_deref())
    }
}

/// Filter criteria for experience queries
///
/// `started_after`/`started_before` bound `start_date` inclusively.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExperienceFilter {
    pub company: Option<String>,
    pub employment_type: Option<String>,
    pub started_after: Option<NaiveDate>,
    pub started_before: Option<NaiveDate>,
    pub is_current: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(ExperienceFilter);

impl ExperienceFilter {
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = Some(employment_type.into());
        self
    }

    pub fn started_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.started_after = from;
        self.started_before = to;
        self
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = Some(is_current);
        self
    }

    pub fn matches(&self, experience: &Experience) -> bool {
        eq_opt(self.company.as_deref(), experience.company.as_str())
            && eq_nullable(
                self.employment_type.as_deref(),
                experience.employment_type.as_deref(),
            )
            && within(experience.start_date, self.started_after, self.started_before)
            && eq_opt(self.is_current.as_ref(), &experience.is_current)
    }
}

/// Filter criteria for skill queries
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SkillFilter {
    pub category: Option<String>,
    /// Inclusive lower bound on proficiency.
    pub min_proficiency: Option<i32>,
    pub is_featured: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(SkillFilter);

impl SkillFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_proficiency(mut self, proficiency: i32) -> Self {
        self.min_proficiency = Some(proficiency);
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        eq_opt(self.category.as_deref(), skill.category.as_str())
            && self
                .min_proficiency
                .is_none_or(|min| skill.proficiency >= min)
            && eq_opt(self.is_featured.as_ref(), &skill.is_featured)
    }
}

/// Filter criteria for achievement queries
///
/// `year` and `date_from`/`date_to` both constrain `achieved_on` and are
/// ANDed when combined.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AchievementFilter {
    pub achievement_type: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub is_featured: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(AchievementFilter);

impl AchievementFilter {
    pub fn with_type(mut self, achievement_type: impl Into<String>) -> Self {
        self.achievement_type = Some(achievement_type.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    pub fn matches(&self, achievement: &Achievement) -> bool {
        eq_opt(
            self.achievement_type.as_deref(),
            achievement.achievement_type.as_str(),
        ) && eq_nullable(self.issuer.as_deref(), achievement.issuer.as_deref())
            && self
                .year
                .is_none_or(|year| achievement.achieved_on.year() == year)
            && within(achievement.achieved_on, self.date_from, self.date_to)
            && eq_opt(self.is_featured.as_ref(), &achievement.is_featured)
    }
}

/// Filter criteria for education queries
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EducationFilter {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub started_after: Option<NaiveDate>,
    pub started_before: Option<NaiveDate>,
    pub is_current: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(EducationFilter);

impl EducationFilter {
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = Some(degree.into());
        self
    }

    pub fn started_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.started_after = from;
        self.started_before = to;
        self
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = Some(is_current);
        self
    }

    pub fn matches(&self, education: &Education) -> bool {
        eq_opt(self.institution.as_deref(), education.institution.as_str())
            && eq_opt(self.degree.as_deref(), education.degree.as_str())
            && within(education.start_date, self.started_after, self.started_before)
            && eq_opt(self.is_current.as_ref(), &education.is_current)
    }
}

/// Filter criteria for project queries
///
/// `year` matches projects whose `start_date` falls in that year; projects
/// without a start date never match it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub year: Option<i32>,
    pub is_featured: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

paginated!(ProjectFilter);

impl ProjectFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        eq_opt(self.category.as_deref(), project.category.as_str())
            && eq_nullable(self.status.as_deref(), project.status.as_deref())
            && self
                .year
                .is_none_or(|year| project.start_date.is_some_and(|d| d.year() == year))
            && eq_opt(self.is_featured.as_ref(), &project.is_featured)
    }
}
