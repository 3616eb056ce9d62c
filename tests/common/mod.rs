#![allow(dead_code)]

use chrono::NaiveDate;
use resume_store::{Repositories, db};

// Helper to create repositories over a fresh in-memory database
pub async fn setup_repos() -> Repositories {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    Repositories::new(db)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn ids<T>(items: &[T], id: impl Fn(&T) -> Option<i32>) -> Vec<i32> {
    items.iter().map(|item| id(item).expect("stored entity has id")).collect()
}
