use color_eyre::Result;
use sqlx::SqlitePool;

struct Migration {
    version: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "V1",
        sql: include_str!("../../migrations/V1__init.sql"),
    },
    Migration {
        version: "V2",
        sql: include_str!("../../migrations/V2__seed_categories.sql"),
    },
];

pub async fn run(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    for migration in MIGRATIONS {
        if applied(pool, migration.version).await? {
            continue;
        }

        // Execute multi-statement SQL using raw_sql
        sqlx::raw_sql(migration.sql).execute(pool).await?;

        sqlx::query("INSERT INTO schema_migrations (version) VALUES (?)")
            .bind(migration.version)
            .execute(pool)
            .await?;

        tracing::info!(version = migration.version, "applied database migration");
    }

    Ok(())
}

pub async fn applied(pool: &SqlitePool, version: &str) -> Result<bool> {
    let applied: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = ?)")
            .bind(version)
            .fetch_one(pool)
            .await?;

    Ok(applied)
}
