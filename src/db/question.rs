use color_eyre::Result;

use super::models::Question;
use super::Db;

impl Db {
    /// All questions ordered by id for stable paging.
    pub async fn all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match against the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question LIKE '%' || ? || '%' ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn insert_question(
        &self,
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new question created with id: {id}");

        Ok(id)
    }

    /// Delete by id. Returns false when no such question existed.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
