use super::DbConnection;
use crate::errors::StorageError;
use rusqlite::{Connection, TransactionBehavior};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};
use tradejournal_core::errors::{Error, Result};

// A write job runs against the writer's connection inside an open transaction.
// It returns core::Result since that's what callers expect.
type Job<T> = Box<dyn FnOnce(&Connection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor.
    ///
    /// The job runs inside an immediate transaction that is committed when it
    /// returns `Ok` and rolled back otherwise.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| StorageError::WriterClosed)?;

        let boxed = ret_rx.await.map_err(|_| StorageError::WriterClosed)??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("Failed to downcast writer actor result".to_string()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. Jobs are processed serially in the order they were sent.
pub fn spawn_writer(db: DbConnection) -> WriteHandle {
    // The channel is bounded; 256 pending writes is plenty for one journal.
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(256);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = run_job(&db, job);
            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

fn run_job(db: &DbConnection, job: ErasedJob) -> Result<Box<dyn Any + Send + 'static>> {
    let mut conn = db.lock().map_err(|_| StorageError::LockPoisoned)?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(StorageError::from)?;

    // Dropping the transaction on error rolls it back.
    let value = job(&tx)?;
    tx.commit().map_err(StorageError::from)?;
    Ok(value)
}
