use crate::config::AppConfig;
use crate::expenses::{ExpenseStorage, MemExpenseStorage};
use crate::nutshells::{HttpPeopleSource, Nutshells, PeopleSource};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub nutshells: Arc<Nutshells>,
    pub expenses: Arc<dyn ExpenseStorage>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let source = Arc::new(HttpPeopleSource::new(
            &config.people.base_url,
            Duration::from_secs(config.people.timeout_secs),
        )?) as Arc<dyn PeopleSource>;
        let expenses = Arc::new(MemExpenseStorage::default()) as Arc<dyn ExpenseStorage>;

        Ok(Self::from_parts(Arc::new(config), source, expenses))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        source: Arc<dyn PeopleSource>,
        expenses: Arc<dyn ExpenseStorage>,
    ) -> Self {
        Self {
            config,
            nutshells: Arc::new(Nutshells::new(source)),
            expenses,
        }
    }
}
