//! Service clients behind traits so the lister and enumerator can be
//! exercised with mock implementations.

mod functions;
mod identity;
mod logging;
mod notification;
mod object_storage;
mod queue;
mod streaming;

pub use functions::{FunctionSummary, FunctionsApi, FunctionsClient};
pub use identity::{Compartment, IdentityApi, IdentityClient};
pub use logging::{LogGroupSummary, LoggingApi, LoggingClient};
pub use notification::{NotificationApi, NotificationClient, TopicSummary};
pub use object_storage::{BucketSummary, ObjectStorageApi, ObjectStorageClient};
pub use queue::{QueueApi, QueueClient, QueueSummary};
pub use streaming::{StreamSummary, StreamingApi, StreamingClient};

/// One page of a paginated list operation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `opc-next-page` token; `None` on the last page.
    pub next_page: Option<String>,
}
