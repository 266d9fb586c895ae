//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::EmployeeError;
use crate::domain::{run_demo, DemoReport, TRANSCRIPT_TARGET};
use crate::infra::OrmSetup;
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Employee demo module
///
/// Owns the ORM setup between `init` and `cleanup`. Without a setup, `run`
/// does nothing.
pub struct EmployeeDemoModule {
    setup: RwLock<Option<Arc<OrmSetup>>>,
}

impl Default for EmployeeDemoModule {
    fn default() -> Self {
        Self {
            setup: RwLock::new(None),
        }
    }
}

impl EmployeeDemoModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect, migrate and keep the setup for later runs
    pub async fn init(&self, config: Config) -> Result<()> {
        if self.is_initialized() {
            tracing::warn!("Employee demo module already initialized");
            return Ok(());
        }

        let setup = OrmSetup::initialize(&config).await?;
        *self.setup.write() = Some(Arc::new(setup));

        tracing::info!("Employee demo module initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.setup.read().is_some()
    }

    /// Current ORM setup, if initialized
    pub fn setup(&self) -> Option<Arc<OrmSetup>> {
        self.setup.read().clone()
    }

    /// Run the demo script on one checked-out session
    ///
    /// Returns `Ok(None)` when the module has no ORM setup. The session is
    /// checked back in whether the script succeeds or fails.
    pub async fn run(&self) -> Result<Option<DemoReport>, EmployeeError> {
        let Some(setup) = self.setup() else {
            tracing::warn!("ORM setup unavailable, skipping demo");
            return Ok(None);
        };

        let resource = setup.checkout_resource().await?;
        let result = run_demo(resource.employees()).await;
        setup.checkin_resource(resource);

        match result {
            Ok(report) => {
                tracing::info!(rows = report.final_rows.len(), "Employee demo completed");
                Ok(Some(report))
            }
            Err(e) => {
                tracing::error!(error = %e, "Employee demo failed");
                tracing::error!(target: TRANSCRIPT_TARGET, "Exception: {}", e);
                Err(e)
            }
        }
    }

    /// Release the ORM setup; safe to call more than once
    pub async fn cleanup(&self) -> Result<()> {
        let setup = self.setup.write().take();
        let Some(setup) = setup else {
            return Ok(());
        };

        match Arc::try_unwrap(setup) {
            Ok(setup) => setup.cleanup().await,
            Err(_) => {
                tracing::warn!("ORM setup still in use at cleanup, releasing reference only");
                Ok(())
            }
        }
    }
}
