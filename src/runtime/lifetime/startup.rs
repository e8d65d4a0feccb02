use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::GradebookServices;
use crate::storage::Storage;
use crate::utils::{Argon2Hasher, CredentialHasher};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub services: GradebookServices,
}

/// 创建密码哈希器
fn create_hasher(config: &AppConfig) -> Result<Arc<dyn CredentialHasher>> {
    let hasher = Argon2Hasher::new(&config.argon2)?;
    debug!(
        "Argon2id hasher ready (m_cost={}, t_cost={}, p_cost={})",
        config.argon2.memory_cost, config.argon2.time_cost, config.argon2.parallelism
    );
    Ok(Arc::new(hasher))
}

/// 输出数据库概况
async fn report_database(storage: &Arc<dyn Storage>) {
    match storage.count_teachers().await {
        Ok(0) => info!("No teachers registered yet"),
        Ok(count) => info!("Database has {} registered teacher(s)", count),
        Err(e) => warn!("Failed to count teachers: {}", e),
    }
}

/// 准备启动上下文
/// 包括存储（含迁移）、密码哈希器和领域服务
pub async fn prepare_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    report_database(&storage).await;

    let hasher = create_hasher(config)?;
    let services = GradebookServices::new(storage.clone(), hasher, config);

    Ok(StartupContext { storage, services })
}
