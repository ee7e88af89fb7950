//! Per-compartment resource listing with per-service failure isolation.

use crate::clients::{
    FunctionsApi, LoggingApi, NotificationApi, ObjectStorageApi, QueueApi, StreamingApi,
};
use crate::inventory::{ResourceInventory, ResourceKind};
use crate::oci::{OciError, OciResult};
use std::sync::Arc;

/// A service listing that failed and was degraded to "no resources".
#[derive(Debug)]
pub struct ListFailure {
    pub kind: ResourceKind,
    pub error: OciError,
}

/// The inventory of one compartment plus the listing failures that were
/// suppressed while building it.
#[derive(Debug)]
pub struct CompartmentListing {
    pub inventory: ResourceInventory,
    pub failures: Vec<ListFailure>,
}

/// Lists the supported services of one compartment at a time.
///
/// Client handles are injected so tests can substitute mocks. Each service
/// call is independent: a failure leaves that kind's list empty and is
/// reported in [`CompartmentListing::failures`] instead of aborting the rest.
pub struct ResourceLister {
    functions: Arc<dyn FunctionsApi>,
    logging: Arc<dyn LoggingApi>,
    notification: Arc<dyn NotificationApi>,
    object_storage: Arc<dyn ObjectStorageApi>,
    queue: Arc<dyn QueueApi>,
    streaming: Arc<dyn StreamingApi>,
}

impl ResourceLister {
    pub fn new(
        functions: Arc<dyn FunctionsApi>,
        logging: Arc<dyn LoggingApi>,
        notification: Arc<dyn NotificationApi>,
        object_storage: Arc<dyn ObjectStorageApi>,
        queue: Arc<dyn QueueApi>,
        streaming: Arc<dyn StreamingApi>,
    ) -> Self {
        Self {
            functions,
            logging,
            notification,
            object_storage,
            queue,
            streaming,
        }
    }

    /// Build the resource inventory of one compartment. Calls are issued
    /// sequentially, one service after another.
    pub async fn list_compartment(&self, compartment_id: &str) -> CompartmentListing {
        let mut inventory = ResourceInventory::default();
        let mut failures = Vec::new();

        let mut record = |kind: ResourceKind, result: OciResult<Vec<String>>| match result {
            Ok(ids) => ids,
            Err(error) => {
                failures.push(ListFailure { kind, error });
                Vec::new()
            }
        };

        inventory.functions = record(
            ResourceKind::Functions,
            self.functions
                .list_functions(compartment_id)
                .await
                .map(|items| items.into_iter().map(|f| f.id).collect()),
        );
        inventory.log_groups = record(
            ResourceKind::LogGroups,
            self.logging
                .list_log_groups(compartment_id)
                .await
                .map(|items| items.into_iter().map(|g| g.id).collect()),
        );
        // Metrics are not listable; the kind stays empty.
        inventory.topics = record(
            ResourceKind::Topics,
            self.notification
                .list_topics(compartment_id)
                .await
                .map(|items| items.into_iter().map(|t| t.topic_id).collect()),
        );
        inventory.buckets = record(
            ResourceKind::Buckets,
            self.list_bucket_names(compartment_id).await,
        );
        inventory.queues = record(
            ResourceKind::Queues,
            self.queue
                .list_queues(compartment_id)
                .await
                .map(|items| items.into_iter().map(|q| q.id).collect()),
        );
        inventory.streams = record(
            ResourceKind::Streams,
            self.streaming
                .list_streams(compartment_id)
                .await
                .map(|items| items.into_iter().map(|s| s.id).collect()),
        );

        CompartmentListing {
            inventory,
            failures,
        }
    }

    /// Namespace lookup followed by the bucket listing; a failure in either
    /// degrades the whole kind.
    async fn list_bucket_names(&self, compartment_id: &str) -> OciResult<Vec<String>> {
        let namespace = self.object_storage.get_namespace().await?;
        let buckets = self
            .object_storage
            .list_buckets(&namespace, compartment_id)
            .await?;
        Ok(buckets.into_iter().map(|b| b.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{
        BucketSummary, FunctionSummary, LogGroupSummary, QueueSummary, StreamSummary, TopicSummary,
    };
    use async_trait::async_trait;

    fn unavailable() -> OciError {
        OciError::ServiceError {
            status: 404,
            message: "NotAuthorizedOrNotFound".to_string(),
        }
    }

    struct NoFunctions;
    #[async_trait]
    impl FunctionsApi for NoFunctions {
        async fn list_functions(&self, _: &str) -> OciResult<Vec<FunctionSummary>> {
            Ok(Vec::new())
        }
    }

    struct NoLogGroups;
    #[async_trait]
    impl LoggingApi for NoLogGroups {
        async fn list_log_groups(&self, _: &str) -> OciResult<Vec<LogGroupSummary>> {
            Ok(Vec::new())
        }
    }

    struct NoTopics;
    #[async_trait]
    impl NotificationApi for NoTopics {
        async fn list_topics(&self, _: &str) -> OciResult<Vec<TopicSummary>> {
            Ok(Vec::new())
        }
    }

    struct Buckets(Vec<&'static str>);
    #[async_trait]
    impl ObjectStorageApi for Buckets {
        async fn get_namespace(&self) -> OciResult<String> {
            Ok("axaxnpcrorw5".to_string())
        }
        async fn list_buckets(&self, _: &str, _: &str) -> OciResult<Vec<BucketSummary>> {
            Ok(self
                .0
                .iter()
                .map(|name| BucketSummary {
                    name: (*name).to_string(),
                })
                .collect())
        }
    }

    struct BrokenObjectStorage;
    #[async_trait]
    impl ObjectStorageApi for BrokenObjectStorage {
        async fn get_namespace(&self) -> OciResult<String> {
            Err(unavailable())
        }
        async fn list_buckets(&self, _: &str, _: &str) -> OciResult<Vec<BucketSummary>> {
            panic!("must not be reached when the namespace lookup fails");
        }
    }

    struct Queues(Vec<&'static str>);
    #[async_trait]
    impl QueueApi for Queues {
        async fn list_queues(&self, _: &str) -> OciResult<Vec<QueueSummary>> {
            Ok(self
                .0
                .iter()
                .map(|id| QueueSummary {
                    id: (*id).to_string(),
                })
                .collect())
        }
    }

    struct NoStreams;
    #[async_trait]
    impl StreamingApi for NoStreams {
        async fn list_streams(&self, _: &str) -> OciResult<Vec<StreamSummary>> {
            Ok(Vec::new())
        }
    }

    fn lister(
        object_storage: Arc<dyn ObjectStorageApi>,
        queue: Arc<dyn QueueApi>,
    ) -> ResourceLister {
        ResourceLister::new(
            Arc::new(NoFunctions),
            Arc::new(NoLogGroups),
            Arc::new(NoTopics),
            object_storage,
            queue,
            Arc::new(NoStreams),
        )
    }

    #[tokio::test]
    async fn empty_compartment_yields_empty_inventory_with_all_kinds() {
        let lister = lister(Arc::new(Buckets(Vec::new())), Arc::new(Queues(Vec::new())));
        let listing = lister.list_compartment("ocid1.compartment.oc1..aaaa").await;
        assert!(listing.inventory.is_empty());
        assert!(listing.failures.is_empty());
        for kind in ResourceKind::ALL {
            assert!(listing.inventory.get(kind).is_empty());
        }
    }

    #[tokio::test]
    async fn bucket_failure_does_not_affect_queues() {
        let lister = lister(
            Arc::new(BrokenObjectStorage),
            Arc::new(Queues(vec!["ocid1.queue.oc1..q1"])),
        );
        let listing = lister.list_compartment("ocid1.compartment.oc1..aaaa").await;

        assert!(listing.inventory.buckets.is_empty());
        assert_eq!(listing.inventory.queues, ["ocid1.queue.oc1..q1"]);

        assert_eq!(listing.failures.len(), 1);
        assert_eq!(listing.failures[0].kind, ResourceKind::Buckets);
    }

    #[tokio::test]
    async fn successful_listings_fill_their_kinds() {
        let lister = lister(
            Arc::new(Buckets(vec!["audit-logs", "exports"])),
            Arc::new(Queues(vec!["ocid1.queue.oc1..q1"])),
        );
        let listing = lister.list_compartment("ocid1.compartment.oc1..aaaa").await;
        assert_eq!(listing.inventory.buckets, ["audit-logs", "exports"]);
        assert_eq!(listing.inventory.queues, ["ocid1.queue.oc1..q1"]);
        assert!(listing.inventory.metrics.is_empty());
        assert!(listing.failures.is_empty());
    }
}
