//! Process-wide dataset registry.
//!
//! The registry owns the published [`CorrespondenceDataset`] behind a
//! [`RelinkableHandle`].  Readers take an `Arc` snapshot and keep it for the
//! whole operation; publishing swaps the handle, so a reader sees either
//! the old dataset or the new one, never a mix.
//!
//! Once a consistency failure has been observed the registry is marked
//! untrusted and refuses to hand out snapshots until a fresh dataset is
//! published (or the built-in one restored).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hijri_core::errors::{Error, Result};
use hijri_core::{define_singleton, ensure, RelinkableHandle};

use crate::dataset::{CorrespondenceDataset, DatasetRecord};

define_singleton!(REGISTRY, DatasetRegistry, DatasetRegistry::with_builtin());

/// Holder of the currently published dataset.
#[derive(Debug)]
pub struct DatasetRegistry {
    handle: RelinkableHandle<CorrespondenceDataset>,
    trusted: AtomicBool,
}

impl DatasetRegistry {
    /// The process-wide registry, built from the built-in sources on first
    /// access.
    pub fn global() -> &'static DatasetRegistry {
        &REGISTRY
    }

    /// A standalone registry publishing `dataset`.
    pub fn new(dataset: CorrespondenceDataset) -> Self {
        DatasetRegistry {
            handle: RelinkableHandle::new(dataset),
            trusted: AtomicBool::new(true),
        }
    }

    fn with_builtin() -> Self {
        match CorrespondenceDataset::builtin() {
            Ok(dataset) => Self::new(dataset),
            Err(err) => {
                tracing::error!(%err, "failed to build the built-in dataset");
                DatasetRegistry {
                    handle: RelinkableHandle::null(),
                    trusted: AtomicBool::new(true),
                }
            }
        }
    }

    /// Snapshot of the published dataset.
    ///
    /// # Errors
    /// [`Error::DataConsistency`] if nothing is published or the registry
    /// has been marked untrusted.
    pub fn current(&self) -> Result<Arc<CorrespondenceDataset>> {
        ensure!(
            self.is_trusted(),
            DataConsistency,
            "dataset marked untrusted after a consistency failure; publish a new dataset"
        );
        self.handle
            .current()
            .ok_or_else(|| Error::DataConsistency("no dataset published".into()))
    }

    /// Atomically replace the published dataset and restore trust.
    pub fn publish(&self, dataset: CorrespondenceDataset) {
        let methods: Vec<_> = dataset.methods().collect();
        self.handle.link_to(dataset);
        self.trusted.store(true, Ordering::Release);
        tracing::info!(?methods, "dataset published");
    }

    /// Validate a flat record snapshot and publish it.
    ///
    /// On error the previously published dataset stays in place.
    pub fn refresh_from_records(
        &self,
        records: impl IntoIterator<Item = DatasetRecord>,
    ) -> Result<()> {
        match CorrespondenceDataset::from_records(records) {
            Ok(dataset) => {
                self.publish(dataset);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "rejected dataset snapshot");
                Err(err)
            }
        }
    }

    /// Rebuild and publish the built-in dataset.
    pub fn reset_to_builtin(&self) -> Result<()> {
        self.publish(CorrespondenceDataset::builtin()?);
        Ok(())
    }

    /// Stop handing out snapshots until the next publish.
    pub fn mark_untrusted(&self, cause: &Error) {
        if self.trusted.swap(false, Ordering::AcqRel) {
            tracing::error!(%cause, "dataset marked untrusted");
        }
    }

    /// `false` after [`mark_untrusted`](Self::mark_untrusted) until the next
    /// publish.
    pub fn is_trusted(&self) -> bool {
        self.trusted.load(Ordering::Acquire)
    }

    /// Pass `result` through, marking the registry untrusted if it carries
    /// a consistency failure.
    pub(crate) fn observe<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.is_fatal() {
                self.mark_untrusted(err);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{MethodTable, MonthStart};
    use hijri_core::CalendarMethod;

    fn tiny() -> CorrespondenceDataset {
        let starts = vec![MonthStart {
            ordinal: 512_060,
            year: 1446,
            month: 1,
        }];
        let table =
            MethodTable::from_month_starts(CalendarMethod::HJCoSA, starts, 512_090).unwrap();
        CorrespondenceDataset::from_tables([table]).unwrap()
    }

    #[test]
    fn publish_swaps_snapshot() {
        let registry = DatasetRegistry::new(CorrespondenceDataset::default());
        let before = registry.current().unwrap();
        assert_eq!(before.methods().count(), 0);
        registry.publish(tiny());
        assert_eq!(registry.current().unwrap().methods().count(), 1);
        // An old snapshot is unaffected by the swap.
        assert_eq!(before.methods().count(), 0);
    }

    #[test]
    fn untrusted_until_published() {
        let registry = DatasetRegistry::new(tiny());
        let ok: Result<()> = registry.observe(Err(Error::OutOfRange("x".into())));
        assert!(ok.is_err());
        assert!(registry.is_trusted());

        let _ = registry.observe::<()>(Err(Error::DataConsistency("broken".into())));
        assert!(!registry.is_trusted());
        assert!(matches!(registry.current(), Err(Error::DataConsistency(_))));

        registry.publish(tiny());
        assert!(registry.is_trusted());
        assert!(registry.current().is_ok());
    }

    #[test]
    fn rejected_refresh_keeps_previous() {
        let registry = DatasetRegistry::new(tiny());
        let err = registry.refresh_from_records(Vec::new()).unwrap_err();
        assert!(err.is_fatal());
        assert!(registry.is_trusted());
        assert_eq!(registry.current().unwrap().methods().count(), 1);
    }
}
