use std::sync::Arc;

use common::{ArticleGenerator, TitleResolver};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub titles: Arc<dyn TitleResolver>,
    pub generator: Arc<dyn ArticleGenerator>,
}
