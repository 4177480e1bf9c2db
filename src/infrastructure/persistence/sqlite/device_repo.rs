//! SQLite Device Repository

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{DeviceFilter, DeviceRepositoryPort, RepositoryError};
use crate::domain::{Device, DeviceState};

const DEVICE_COLUMNS: &str = "id, name, brand, state, created_at";
const HEALTH_TIMEOUT: Duration = Duration::from_secs(1);

/// SQLite Device Repository
pub struct SqliteDeviceRepository {
    pool: DbPool,
}

impl SqliteDeviceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct DeviceRow {
    id: String,
    name: String,
    brand: String,
    state: String,
    created_at: String,
}

impl TryFrom<DeviceRow> for Device {
    type Error = RepositoryError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        Ok(Device {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            brand: row.brand,
            state: DeviceState::parse(&row.state).ok_or_else(|| {
                RepositoryError::SerializationError(format!("Unknown device state: {}", row.state))
            })?,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl DeviceRepositoryPort for SqliteDeviceRepository {
    async fn create(&self, device: &Device) -> Result<Device, RepositoryError> {
        let row: DeviceRow = sqlx::query_as(&format!(
            "INSERT INTO devices ({}) VALUES (?, ?, ?, ?, ?) RETURNING {}",
            DEVICE_COLUMNS, DEVICE_COLUMNS
        ))
        .bind(device.id.to_string())
        .bind(&device.name)
        .bind(&device.brand)
        .bind(device.state.as_str())
        .bind(device.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::Duplicate(device.id)
            }
            other => database_error(other),
        })?;

        Device::try_from(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Device>, RepositoryError> {
        let row: Option<DeviceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM devices WHERE id = ?",
            DEVICE_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Device::try_from).transpose()
    }

    async fn update(&self, device: &Device) -> Result<Device, RepositoryError> {
        let row: Option<DeviceRow> = sqlx::query_as(&format!(
            "UPDATE devices SET name = ?, brand = ?, state = ? WHERE id = ? RETURNING {}",
            DEVICE_COLUMNS
        ))
        .bind(&device.name)
        .bind(&device.brand)
        .bind(device.state.as_str())
        .bind(device.id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.ok_or(RepositoryError::NotFound(device.id))
            .and_then(Device::try_from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM devices WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn list(&self, filter: &DeviceFilter) -> Result<Vec<Device>, RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM devices WHERE 1=1", DEVICE_COLUMNS));

        if let Some(state) = filter.state {
            builder.push(" AND state = ").push_bind(state.as_str());
        }
        if let Some(brand) = filter.brand.as_deref() {
            builder.push(" AND brand = ").push_bind(brand);
        }

        let rows: Vec<DeviceRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(Device::try_from).collect()
    }

    async fn health(&self) -> HashMap<String, String> {
        let mut stats = HashMap::new();

        let ping = tokio::time::timeout(HEALTH_TIMEOUT, sqlx::query("SELECT 1").execute(&self.pool));
        match ping.await {
            Ok(Ok(_)) => {
                stats.insert("status".to_string(), "up".to_string());
                stats.insert("message".to_string(), "healthy DB".to_string());
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Database health check failed");
                stats.insert("status".to_string(), "down".to_string());
                stats.insert("error".to_string(), format!("db down: {}", e));
            }
            Err(_) => {
                tracing::error!("Database health check timed out");
                stats.insert("status".to_string(), "down".to_string());
                stats.insert("error".to_string(), "db down: ping timed out".to_string());
            }
        }

        stats.insert("connections".to_string(), self.pool.size().to_string());
        stats
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteDeviceRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteDeviceRepository::new(pool)
    }

    fn device(name: &str, brand: &str, state: DeviceState) -> Device {
        let mut device = Device::new(name, brand);
        device.state = state;
        device
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repo().await;
        let created = repo
            .create(&device("Phone", "Acme", DeviceState::Available))
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Phone");
        assert_eq!(found.state, DeviceState::Available);
        assert_eq!(found.created_at, created.created_at);

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_the_new_device_unchanged() {
        let repo = repo().await;
        let new = Device::new("Phone", "Acme");

        let created = repo.create(&new).await.unwrap();
        assert_eq!(created, new);
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = repo().await;
        let d = device("Phone", "Acme", DeviceState::Available);
        repo.create(&d).await.unwrap();
        assert!(matches!(
            repo.create(&d).await,
            Err(RepositoryError::Duplicate(id)) if id == d.id
        ));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let repo = repo().await;
        let original = repo
            .create(&device("Phone", "Acme", DeviceState::Available))
            .await
            .unwrap();

        let mut changed = original.clone();
        changed.brand = "Globex".to_string();
        changed.state = DeviceState::InUse;
        let updated = repo.update(&changed).await.unwrap();

        assert_eq!(updated.brand, "Globex");
        assert_eq!(updated.state, DeviceState::InUse);
        assert_eq!(updated.created_at, original.created_at);

        let missing = device("Ghost", "None", DeviceState::Available);
        assert!(matches!(
            repo.update(&missing).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let d = repo
            .create(&device("Phone", "Acme", DeviceState::Available))
            .await
            .unwrap();

        repo.delete(d.id).await.unwrap();
        assert!(repo.find_by_id(d.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(d.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_filters_are_conjunctive() {
        let repo = repo().await;
        repo.create(&device("Device1", "BrandA", DeviceState::Available))
            .await
            .unwrap();
        repo.create(&device("Device2", "BrandB", DeviceState::InUse))
            .await
            .unwrap();
        repo.create(&device("Device3", "BrandA", DeviceState::InUse))
            .await
            .unwrap();

        let cases = [
            (DeviceFilter::default(), 3),
            (DeviceFilter::new(None, Some("BrandA".to_string())), 2),
            (DeviceFilter::new(Some(DeviceState::InUse), None), 2),
            (
                DeviceFilter::new(Some(DeviceState::InUse), Some("BrandA".to_string())),
                1,
            ),
            (DeviceFilter::new(Some(DeviceState::Inactive), None), 0),
        ];

        for (filter, expected) in cases {
            let devices = repo.list(&filter).await.unwrap();
            assert_eq!(devices.len(), expected, "filter: {:?}", filter);
            assert!(devices.iter().all(|d| filter.matches(d)));
        }
    }

    #[tokio::test]
    async fn test_filter_values_are_bound() {
        let repo = repo().await;
        repo.create(&device("Phone", "Acme", DeviceState::Available))
            .await
            .unwrap();

        let hostile = DeviceFilter::new(None, Some("x' OR '1'='1".to_string()));
        assert!(repo.list(&hostile).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_and_close() {
        let repo = repo().await;
        let health = repo.health().await;
        assert_eq!(health.get("status").map(String::as_str), Some("up"));

        repo.close().await.unwrap();
        let health = repo.health().await;
        assert_eq!(health.get("status").map(String::as_str), Some("down"));
    }
}
