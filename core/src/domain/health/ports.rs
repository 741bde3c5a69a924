use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::ReadinessStatus};

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<ReadinessStatus, CoreError>> + Send;
}
