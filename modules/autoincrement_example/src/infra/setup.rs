//! ORM setup - connection lifecycle and session resources
//!
//! [`OrmSetup::initialize`] connects, creating the SQLite file when needed,
//! and brings the schema up to date. Sessions are handed out as
//! [`OrmResource`] guards; a guard returns its slot to the pool when dropped,
//! so every exit path checks the resource back in.

use crate::config::Config;
use crate::contract::EmployeeError;
use crate::domain::EmployeeRepository;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::SeaOrmEmployeeRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Process-level ORM context: one connection pool plus a bounded set of sessions
pub struct OrmSetup {
    conn: Arc<DatabaseConnection>,
    resources: Arc<Semaphore>,
    max_resources: usize,
    next_resource_id: AtomicU64,
}

impl OrmSetup {
    /// Connect and migrate
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;

        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .connect_timeout(config.database.connect_timeout)
            .sqlx_logging(config.database.sqlx_logging);

        let conn = Database::connect(options).await?;
        Migrator::up(&conn, None).await?;
        tracing::info!(
            max_resources = config.max_resources,
            "ORM setup initialized, schema is up to date"
        );

        Ok(Self {
            conn: Arc::new(conn),
            resources: Arc::new(Semaphore::new(config.max_resources)),
            max_resources: config.max_resources,
            next_resource_id: AtomicU64::new(1),
        })
    }

    /// Wait for a free session resource
    pub async fn checkout_resource(&self) -> Result<OrmResource, EmployeeError> {
        let permit = Arc::clone(&self.resources)
            .acquire_owned()
            .await
            .map_err(|_| EmployeeError::NotInitialized)?;
        let id = self.next_resource_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(resource = id, "checked out ORM resource");

        Ok(OrmResource {
            id,
            repo: SeaOrmEmployeeRepository::new(Arc::clone(&self.conn)),
            _permit: permit,
        })
    }

    /// Return a session resource to the pool
    pub fn checkin_resource(&self, resource: OrmResource) {
        tracing::debug!(resource = resource.id, "checked in ORM resource");
        drop(resource);
    }

    /// Sessions currently free
    pub fn available_resources(&self) -> usize {
        self.resources.available_permits()
    }

    pub fn max_resources(&self) -> usize {
        self.max_resources
    }

    /// Underlying connection, for schema inspection and maintenance
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the pool; call once when the application exits
    pub async fn cleanup(self) -> anyhow::Result<()> {
        self.resources.close();
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => conn.close().await?,
            Err(_) => tracing::warn!("ORM connection still shared at cleanup, leaving it open"),
        }
        tracing::info!("ORM setup cleaned up");
        Ok(())
    }
}

/// One checked-out ORM session
pub struct OrmResource {
    id: u64,
    repo: SeaOrmEmployeeRepository,
    _permit: OwnedSemaphorePermit,
}

impl OrmResource {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Employee operations bound to this session
    pub fn employees(&self) -> &dyn EmployeeRepository {
        &self.repo
    }
}
