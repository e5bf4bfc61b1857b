use color_eyre::Result;

use super::Db;

impl Db {
    /// Category names ordered by category id.
    pub async fn category_names(&self) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }
}
