use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::nutshells::{
    dto::Person,
    error::{FetchError, LoadError},
    source::PeopleSource,
};

pub const FIRST_PAGE: u32 = 1;
/// Hard stop for a server that never returns an empty page.
pub const MAX_PAGE: u32 = 100;
pub const VIEW_LIMIT: usize = 5;

/// The five newest people with a non-null email, newest first.
///
/// The sort is stable, so people sharing a signup date keep their input
/// order. Only an explicit `null` email is dropped; an empty or missing
/// email is kept.
pub fn reduce(mut people: Vec<Person>) -> Vec<Person> {
    people.sort_by(|a, b| b.signup_date.cmp(&a.signup_date));
    people.retain(|p| !p.has_null_email());
    people.truncate(VIEW_LIMIT);
    people
}

/// Contacts list: reads every page from a [`PeopleSource`] and publishes the reduced view.
pub struct Nutshells {
    source: Arc<dyn PeopleSource>,
    people: RwLock<Arc<Vec<Person>>>,
}

impl Nutshells {
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        Self {
            source,
            people: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// The last published view list. Empty until a load completes.
    pub async fn people(&self) -> Arc<Vec<Person>> {
        Arc::clone(&*self.people.read().await)
    }

    pub async fn load(&self) -> Result<Arc<Vec<Person>>, LoadError> {
        self.load_all(FIRST_PAGE).await
    }

    /// Reads pages from `start_page` until an empty one, reduces, then publishes.
    ///
    /// On error nothing is published and the previous view list stays.
    #[instrument(skip(self))]
    pub async fn load_all(&self, start_page: u32) -> Result<Arc<Vec<Person>>, LoadError> {
        let all = self.fetch_all(start_page).await?;
        let read = all.len();
        let people = Arc::new(reduce(all));

        *self.people.write().await = Arc::clone(&people);
        info!(read, published = people.len(), "people loaded");
        Ok(people)
    }

    /// Accumulates every page from `start_page` up to the first empty one, in page order.
    ///
    /// Pages are 1-based; a `start_page` of 0 reads from [`FIRST_PAGE`].
    pub async fn fetch_all(&self, start_page: u32) -> Result<Vec<Person>, LoadError> {
        let mut page = start_page.max(FIRST_PAGE);
        let mut all = Vec::new();

        loop {
            if page > MAX_PAGE {
                warn!(page, "> 100 pages");
                return Err(LoadError::PageCeiling { page });
            }

            let read = match self.read_page(page).await {
                Ok(read) => read,
                Err(e) => {
                    error!(error = %e, page, "failure");
                    return Err(e.into());
                }
            };
            debug!(page, count = read.len(), "page read");

            if read.is_empty() {
                return Ok(all);
            }
            all.extend(read);
            page += 1;
        }
    }

    // Every request in the batch has to succeed. The batch is a single page today.
    async fn read_page(&self, page: u32) -> Result<Vec<Person>, FetchError> {
        let requests = vec![self.source.fetch_page(page)];
        let pages = join_all(requests)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pages.into_iter().flatten().collect())
    }
}
