//! The fixed policy templates, one dispatch-table entry per kind/role pair.
//!
//! Template text matches the statements OCI documents for service connector
//! sources and targets. The compartment id is substituted unquoted, resource
//! ids and the connector compartment id quoted; every condition clause pins
//! the principal type to `serviceconnector` and the principal's compartment
//! to the connector compartment.

use crate::inventory::{ResourceInventory, ResourceKind};

/// Printed after each statement on the CLI output.
pub const STATEMENT_SEPARATOR: &str = "---";

/// Whether a template grants the connector read access (source) or write
/// access (target) to the resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Target,
}

struct TemplateEntry {
    kind: ResourceKind,
    role: Role,
    /// Renders the statement(s) for one resource id into `out`.
    render: fn(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str),
}

/// Emission order is fixed: functions, log groups, metrics (source then
/// target), topics, buckets, queues, streams (source then target).
const TEMPLATE_TABLE: &[TemplateEntry] = &[
    TemplateEntry {
        kind: ResourceKind::Functions,
        role: Role::Target,
        render: render_function,
    },
    TemplateEntry {
        kind: ResourceKind::LogGroups,
        role: Role::Target,
        render: render_log_group,
    },
    TemplateEntry {
        kind: ResourceKind::Metrics,
        role: Role::Source,
        render: render_metrics_source,
    },
    TemplateEntry {
        kind: ResourceKind::Metrics,
        role: Role::Target,
        render: render_metrics_target,
    },
    TemplateEntry {
        kind: ResourceKind::Topics,
        role: Role::Target,
        render: render_topic,
    },
    TemplateEntry {
        kind: ResourceKind::Buckets,
        role: Role::Target,
        render: render_bucket,
    },
    TemplateEntry {
        kind: ResourceKind::Queues,
        role: Role::Source,
        render: render_queue,
    },
    TemplateEntry {
        kind: ResourceKind::Streams,
        role: Role::Source,
        render: render_stream_source,
    },
    TemplateEntry {
        kind: ResourceKind::Streams,
        role: Role::Target,
        render: render_stream_target,
    },
];

/// The policy statements for one compartment, in table order, each kind's
/// resources in inventory order. Pure and deterministic: the same inputs
/// always produce the same sequence. No deduplication, no sorting, no
/// validation of the identifiers.
pub fn generate_policies(
    compartment_id: &str,
    inventory: &ResourceInventory,
    connector_compartment_id: &str,
) -> Vec<String> {
    let mut statements = Vec::new();
    for entry in TEMPLATE_TABLE {
        for resource_id in inventory.get(entry.kind) {
            (entry.render)(
                &mut statements,
                compartment_id,
                resource_id,
                connector_compartment_id,
            );
        }
    }
    statements
}

/// Functions serve as task or target; each function gets a `fn-function`
/// and a `fn-invocation` grant.
fn render_function(out: &mut Vec<String>, cid: &str, _rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to use fn-function in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         request.principal.compartment.id='{scc}'}}"
    ));
    out.push(format!(
        "Allow any-user to use fn-invocation in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

fn render_log_group(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to use loganalytics-log-group in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.loganalytics-log-group.id='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

/// The resource id here is a compartment id, not a metric id; the grant is
/// tenancy-wide, scoped by `target.compartment.id`. Unexercised for now
/// since the metrics list is always empty.
fn render_metrics_source(out: &mut Vec<String>, _cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to read metrics in tenancy \
         where all {{request.principal.type='serviceconnector', \
         request.principal.compartment.id='{scc}', \
         target.compartment.id in ('{rid}') }}"
    ));
}

/// Here the resource id is a metrics namespace string.
fn render_metrics_target(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to use metrics in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.metrics.namespace='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

/// No per-topic target clause: the grant covers every topic in the
/// compartment, even though topic ids are what the lister collects.
fn render_topic(out: &mut Vec<String>, cid: &str, _rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to use ons-topics in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

fn render_bucket(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to manage objects in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.bucket.name='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

fn render_queue(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to {{ QUEUE_READ , QUEUE_CONSUME }} in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.queue.id='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

fn render_stream_source(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to {{STREAM_READ, STREAM_CONSUME}} in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.stream.id='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

fn render_stream_target(out: &mut Vec<String>, cid: &str, rid: &str, scc: &str) {
    out.push(format!(
        "Allow any-user to use stream-push in compartment id {cid} \
         where all {{request.principal.type='serviceconnector', \
         target.stream.id='{rid}', \
         request.principal.compartment.id='{scc}'}}"
    ));
}

/// The fixed kind/role emission order.
pub fn emission_order() -> Vec<(ResourceKind, Role)> {
    TEMPLATE_TABLE
        .iter()
        .map(|entry| (entry.kind, entry.role))
        .collect()
}
