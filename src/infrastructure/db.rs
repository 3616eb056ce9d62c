use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use super::config::Config;

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut config = Config::in_memory();
    config.database_url = database_url.to_string();
    init_db_with(&config).await
}

pub async fn init_db_with(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(config.sql_logging);

    // Every pooled connection to `:memory:` would be its own empty database
    if config.database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    tracing::info!(profile = %config.profile, "database connected");

    run_migrations(&db).await?;

    Ok(db)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        headline TEXT NOT NULL,
        summary TEXT,
        email TEXT,
        phone TEXT,
        location TEXT,
        website TEXT,
        github_url TEXT,
        linkedin_url TEXT,
        avatar_url TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS experiences (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        position TEXT NOT NULL,
        location TEXT,
        employment_type TEXT,
        start_date TEXT NOT NULL,
        end_date TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 0,
        description TEXT,
        technologies TEXT NOT NULL DEFAULT '[]',
        sort_order INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        proficiency INTEGER NOT NULL CHECK (proficiency BETWEEN 1 AND 5),
        years_of_experience INTEGER,
        is_featured BOOLEAN NOT NULL DEFAULT 0,
        sort_order INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS achievements (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        achievement_type TEXT NOT NULL,
        issuer TEXT,
        achieved_on TEXT NOT NULL,
        description TEXT,
        url TEXT,
        is_featured BOOLEAN NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS education (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        institution TEXT NOT NULL,
        degree TEXT NOT NULL,
        field_of_study TEXT,
        start_date TEXT NOT NULL,
        end_date TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 0,
        grade TEXT,
        description TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        category TEXT NOT NULL,
        status TEXT,
        technologies TEXT NOT NULL DEFAULT '[]',
        url TEXT,
        repository_url TEXT,
        start_date TEXT,
        end_date TEXT,
        is_featured BOOLEAN NOT NULL DEFAULT 0,
        sort_order INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_experiences_is_current ON experiences(is_current)",
    "CREATE INDEX IF NOT EXISTS idx_skills_category ON skills(category)",
    "CREATE INDEX IF NOT EXISTS idx_skills_is_featured ON skills(is_featured)",
    "CREATE INDEX IF NOT EXISTS idx_achievements_type ON achievements(achievement_type)",
    "CREATE INDEX IF NOT EXISTS idx_achievements_achieved_on ON achievements(achieved_on)",
    "CREATE INDEX IF NOT EXISTS idx_projects_category ON projects(category)",
    "CREATE INDEX IF NOT EXISTS idx_projects_is_featured ON projects(is_featured)",
];

// Idempotent: safe to run on every start
async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }
    tracing::debug!(statements = SCHEMA.len(), "schema ensured");
    Ok(())
}
