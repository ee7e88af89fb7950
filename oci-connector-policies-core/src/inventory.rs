//! Per-compartment resource inventory.

use std::fmt;

/// The closed set of resource kinds the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Functions,
    LogGroups,
    Metrics,
    Topics,
    Buckets,
    Queues,
    Streams,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Functions,
        ResourceKind::LogGroups,
        ResourceKind::Metrics,
        ResourceKind::Topics,
        ResourceKind::Buckets,
        ResourceKind::Queues,
        ResourceKind::Streams,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Functions => "functions",
            ResourceKind::LogGroups => "log_groups",
            ResourceKind::Metrics => "metrics",
            ResourceKind::Topics => "topics",
            ResourceKind::Buckets => "buckets",
            ResourceKind::Queues => "queues",
            ResourceKind::Streams => "streams",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource identifiers found in one compartment, one list per kind.
///
/// A struct rather than a map so every kind is present by construction.
/// Built fresh per compartment and discarded after policy generation;
/// inventories are never merged across compartments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceInventory {
    pub functions: Vec<String>,
    pub log_groups: Vec<String>,
    /// Always empty: the provider has no direct "list metrics" operation at
    /// this granularity. The field exists so the generator's metrics
    /// templates have an input.
    pub metrics: Vec<String>,
    pub topics: Vec<String>,
    pub buckets: Vec<String>,
    pub queues: Vec<String>,
    pub streams: Vec<String>,
}

impl ResourceInventory {
    pub fn get(&self, kind: ResourceKind) -> &[String] {
        match kind {
            ResourceKind::Functions => &self.functions,
            ResourceKind::LogGroups => &self.log_groups,
            ResourceKind::Metrics => &self.metrics,
            ResourceKind::Topics => &self.topics,
            ResourceKind::Buckets => &self.buckets,
            ResourceKind::Queues => &self.queues,
            ResourceKind::Streams => &self.streams,
        }
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|&kind| self.get(kind).is_empty())
    }
}
