use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, info, warn};

use crate::domain::errors::StoreError;

/// Opens whatever "ready to query" handle a backend needs (a pool, a client).
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: Send + Sync + 'static;

    async fn establish(&self) -> Result<Self::Handle>;
}

type Attempt<H> = Shared<BoxFuture<'static, Result<Arc<H>, Arc<anyhow::Error>>>>;

enum Slot<H> {
    Empty,
    Connecting(Attempt<H>),
    Ready(Arc<H>),
}

/// Holds the one connection handle of the process.
///
/// `connect` is idempotent: once a handle exists every call returns it, and
/// callers arriving while an attempt is running all await that attempt and
/// receive its outcome, success or failure. A failed attempt leaves the
/// manager empty, so the next call tries again.
pub struct ConnectionManager<C>
where
    C: Connector,
{
    connector: Arc<C>,
    slot: Mutex<Slot<C::Handle>>,
}

impl<C> ConnectionManager<C>
where
    C: Connector + 'static,
{
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
            slot: Mutex::new(Slot::Empty),
        }
    }

    pub async fn connect(&self) -> Result<Arc<C::Handle>, StoreError> {
        let attempt = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            match &*slot {
                Slot::Ready(handle) => return Ok(Arc::clone(handle)),
                Slot::Connecting(attempt) => attempt.clone(),
                Slot::Empty => {
                    let attempt = self.start_attempt();
                    *slot = Slot::Connecting(attempt.clone());
                    attempt
                }
            }
        };

        let outcome = attempt.clone().await;

        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let settles_this_attempt =
            matches!(&*slot, Slot::Connecting(current) if Shared::ptr_eq(current, &attempt));

        match outcome {
            Ok(handle) => {
                if settles_this_attempt {
                    *slot = Slot::Ready(Arc::clone(&handle));
                }
                Ok(handle)
            }
            Err(err) => {
                if settles_this_attempt {
                    *slot = Slot::Empty;
                }
                Err(StoreError::connection(anyhow!("{err:#}")))
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        matches!(&*slot, Slot::Ready(_))
    }

    fn start_attempt(&self) -> Attempt<C::Handle> {
        let connector = Arc::clone(&self.connector);
        async move {
            debug!("connection_manager: establishing connection");
            match connector.establish().await {
                Ok(handle) => {
                    info!("connection_manager: connection established");
                    Ok(Arc::new(handle))
                }
                Err(err) => {
                    warn!(error = ?err, "connection_manager: connection attempt failed");
                    Err(Arc::new(err))
                }
            }
        }
        .boxed()
        .shared()
    }
}
