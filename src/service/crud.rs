//! CRUD execution against the pooled store. Reads are generic over [`Record`]; inserts are typed per table.

use crate::error::AppError;
use crate::models::{Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, Record, User};
use crate::sql::{delete_by_id, insert_returning_id, select_by_id, select_list, sync_identity_sequence};
use crate::store::Backend;
use sqlx::{Any, AnyConnection, AnyPool, Transaction};

pub struct CrudService;

impl CrudService {
    /// All rows of `T`'s table, ordered by id. Empty tables yield an empty vec.
    pub async fn list<T: Record>(pool: &AnyPool) -> Result<Vec<T>, AppError> {
        let sql = select_list(&T::TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read<T: Record>(pool: &AnyPool, id: i64) -> Result<Option<T>, AppError> {
        let sql = select_by_id(&T::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Delete one row by id and return it as it was. `None` when no such row exists.
    pub async fn delete<T: Record>(pool: &AnyPool, id: i64) -> Result<Option<T>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(row) = Self::fetch_by_id::<T>(&mut tx, id).await? else {
            return Ok(None);
        };
        let sql = delete_by_id(T::TABLE.name);
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn create_planet(pool: &AnyPool, backend: Backend, new: &NewPlanet) -> Result<Planet, AppError> {
        let mut columns = vec!["name", "description", "diameter"];
        if new.id.is_some() {
            columns.insert(0, "id");
        }
        let sql = insert_returning_id(Planet::TABLE.name, &columns);
        tracing::debug!(sql = %sql, "query (tx)");

        let mut tx = pool.begin().await?;
        let mut q = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(id) = new.id {
            q = q.bind(id);
        }
        let id = q
            .bind(new.name.as_str())
            .bind(new.description.as_str())
            .bind(new.diameter.as_str())
            .fetch_one(&mut *tx)
            .await?;
        if new.id.is_some() {
            Self::sync_identity(&mut tx, backend, Planet::TABLE.name).await?;
        }
        Self::reload(tx, id).await
    }

    pub async fn create_character(pool: &AnyPool, new: &NewCharacter) -> Result<Character, AppError> {
        let sql = insert_returning_id(
            Character::TABLE.name,
            &["name", "description", "gender", "height"],
        );
        tracing::debug!(sql = %sql, "query (tx)");

        let mut tx = pool.begin().await?;
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(new.name.as_str())
            .bind(new.description.as_deref())
            .bind(new.gender.as_deref())
            .bind(new.height)
            .fetch_one(&mut *tx)
            .await?;
        Self::reload(tx, id).await
    }

    pub async fn create_user(pool: &AnyPool, backend: Backend, new: &NewUser) -> Result<User, AppError> {
        let mut columns = vec!["name", "email", "password", "is_active"];
        if new.id.is_some() {
            columns.insert(0, "id");
        }
        let sql = insert_returning_id(User::TABLE.name, &columns);
        tracing::debug!(sql = %sql, "query (tx)");

        let mut tx = pool.begin().await?;
        let mut q = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(id) = new.id {
            q = q.bind(id);
        }
        let id = q
            .bind(new.name.as_str())
            .bind(new.email.as_str())
            .bind(new.password.as_str())
            .bind(new.is_active)
            .fetch_one(&mut *tx)
            .await?;
        if new.id.is_some() {
            Self::sync_identity(&mut tx, backend, User::TABLE.name).await?;
        }
        Self::reload(tx, id).await
    }

    pub async fn create_favorite(pool: &AnyPool, new: &NewFavorite) -> Result<Favorite, AppError> {
        let sql = insert_returning_id(
            Favorite::TABLE.name,
            &["user_id", "planet_id", "character_id"],
        );
        tracing::debug!(sql = %sql, "query (tx)");

        let mut tx = pool.begin().await?;
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(new.user_id)
            .bind(new.planet_id)
            .bind(new.character_id)
            .fetch_one(&mut *tx)
            .await?;
        Self::reload(tx, id).await
    }

    async fn sync_identity(conn: &mut AnyConnection, backend: Backend, table: &str) -> Result<(), AppError> {
        if !backend.syncs_identity_after_explicit_id() {
            return Ok(());
        }
        let sql = sync_identity_sequence(table);
        tracing::debug!(sql = %sql, "query (tx)");
        sqlx::query(&sql).execute(&mut *conn).await?;
        Ok(())
    }

    /// Read back a freshly inserted row inside its transaction, then commit.
    async fn reload<T: Record>(mut tx: Transaction<'_, Any>, id: i64) -> Result<T, AppError> {
        let row = Self::fetch_by_id::<T>(&mut tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(row)
    }

    async fn fetch_by_id<T: Record>(conn: &mut AnyConnection, id: i64) -> Result<Option<T>, AppError> {
        let sql = select_by_id(&T::TABLE);
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect, ensure_tables};

    async fn pool() -> AnyPool {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool, Backend::Sqlite).await.unwrap();
        pool
    }

    fn user(id: Option<i64>, email: &str, is_active: bool) -> NewUser {
        NewUser {
            id,
            name: "Padme".into(),
            email: email.into(),
            password: "naboo".into(),
            is_active,
        }
    }

    fn planet(id: Option<i64>, name: &str) -> NewPlanet {
        NewPlanet {
            id,
            name: name.into(),
            description: "lakes".into(),
            diameter: "12120".into(),
        }
    }

    #[tokio::test]
    async fn user_flag_survives_create_read_list_and_delete() {
        let pool = pool().await;
        let on = CrudService::create_user(&pool, Backend::Sqlite, &user(None, "a@naboo.gov", true))
            .await
            .unwrap();
        let off = CrudService::create_user(&pool, Backend::Sqlite, &user(None, "b@naboo.gov", false))
            .await
            .unwrap();
        assert!(on.is_active);
        assert!(!off.is_active);

        let read = CrudService::read::<User>(&pool, off.id).await.unwrap().unwrap();
        assert_eq!(read, off);

        let all = CrudService::list::<User>(&pool).await.unwrap();
        assert_eq!(
            all.iter().map(|u| u.is_active).collect::<Vec<_>>(),
            vec![true, false]
        );

        let gone = CrudService::delete::<User>(&pool, on.id).await.unwrap().unwrap();
        assert_eq!(gone, on);
    }

    #[tokio::test]
    async fn generated_ids_continue_after_explicit_ones() {
        let pool = pool().await;
        let fixed = CrudService::create_planet(&pool, Backend::Sqlite, &planet(Some(7), "Naboo"))
            .await
            .unwrap();
        assert_eq!(fixed.id, 7);
        let next = CrudService::create_planet(&pool, Backend::Sqlite, &planet(None, "Mustafar"))
            .await
            .unwrap();
        assert!(next.id > 7, "generated id {} collides with explicit id", next.id);

        let u = CrudService::create_user(&pool, Backend::Sqlite, &user(Some(3), "c@naboo.gov", true))
            .await
            .unwrap();
        let v = CrudService::create_user(&pool, Backend::Sqlite, &user(None, "d@naboo.gov", true))
            .await
            .unwrap();
        assert_eq!(u.id, 3);
        assert!(v.id > 3);
    }
}
