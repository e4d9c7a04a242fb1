use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::Goal;
use crate::domain::goal::models::GoalId;
use crate::domain::goal::models::GoalText;
use crate::domain::goal::ports::GoalRepository;
use crate::domain::user::models::UserId;

pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GoalRow {
    id: Uuid,
    owner_id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<GoalRow> for Goal {
    type Error = GoalError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let text = GoalText::new(row.text).map_err(|e| {
            GoalError::DatabaseError(format!("Corrupt text stored for goal {}: {}", row.id, e))
        })?;

        Ok(Goal {
            id: GoalId(row.id),
            owner_id: UserId(row.owner_id),
            text,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn create(&self, goal: Goal) -> Result<Goal, GoalError> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, owner_id, text, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(goal.id.0)
        .bind(goal.owner_id.0)
        .bind(goal.text.as_str())
        .bind(goal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        Ok(goal)
    }

    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, GoalError> {
        sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, owner_id, text, created_at
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GoalError::DatabaseError(e.to_string()))?
        .map(Goal::try_from)
        .transpose()
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Goal>, GoalError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, owner_id, text, created_at
            FROM goals
            WHERE owner_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Goal::try_from).collect()
    }

    async fn delete(&self, id: GoalId) -> Result<(), GoalError> {
        let result = sqlx::query(
            r#"
            DELETE FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(GoalError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str) -> GoalRow {
        GoalRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_to_goal() {
        let row = row("run 5k");
        let (id, owner_id) = (row.id, row.owner_id);

        let goal = Goal::try_from(row).unwrap();

        assert_eq!(goal.id, GoalId(id));
        assert_eq!(goal.owner_id, UserId(owner_id));
        assert_eq!(goal.text.as_str(), "run 5k");
    }

    #[test]
    fn test_corrupt_row_is_database_error() {
        assert!(matches!(
            Goal::try_from(row("   ")),
            Err(GoalError::DatabaseError(_))
        ));
    }
}
