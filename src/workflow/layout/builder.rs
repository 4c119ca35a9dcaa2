//! Workflow graph construction: scoping, adjacency, level assignment, stage
//! grouping, and connection derivation.

use std::collections::{HashMap, HashSet};

use crate::workflow::domain::{BusinessId, TaskId, TaskRecord};

use super::geometry::{COLUMN_WIDTH, GROUP_GAP, ROW_HEIGHT};
use super::node::{StageGroup, WorkflowConnection, WorkflowLayout, WorkflowNode};

/// Builds the layered layout for one task snapshot.
///
/// When `scope` is given, only tasks owned by that business participate and
/// dependency edges crossing the scope boundary are treated as absent. The
/// function is pure and infallible: inconsistent input (dangling edges,
/// self-loops, cycles, duplicate ids) degrades by filtering or defaulting
/// rather than failing, and an empty snapshot yields an empty layout.
#[must_use]
pub fn build_workflow(tasks: &[TaskRecord], scope: Option<BusinessId>) -> WorkflowLayout {
    let records = scoped_records(tasks, scope);
    if records.is_empty() {
        return WorkflowLayout::default();
    }

    let adjacency = Adjacency::from_records(&records);
    let levels = assign_levels(&records, &adjacency);
    let (stage_groups, rows) = group_by_stage(&records);

    let nodes = records
        .iter()
        .map(|record| {
            let level = levels.get(&record.id).copied().unwrap_or(0);
            WorkflowNode {
                id: record.id,
                title: record.title.clone(),
                status: record.status_or_default(),
                priority: record.priority_or_default(),
                business_name: record.business_name.clone(),
                stage: record.stage_label().to_owned(),
                upstream: adjacency.upstream_of(record.id).to_vec(),
                downstream: adjacency.downstream_of(record.id).to_vec(),
                level,
                x: level * COLUMN_WIDTH,
                y: rows.get(&record.id).copied().unwrap_or(0),
            }
        })
        .collect();

    let connections = adjacency
        .edges
        .iter()
        .map(|&(parent, dependent)| WorkflowConnection { parent, dependent })
        .collect();

    WorkflowLayout {
        nodes,
        connections,
        stage_groups,
    }
}

/// Applies the business scope and collapses duplicate ids.
///
/// A duplicate id keeps its first position in the snapshot but carries the
/// data of the last occurrence (last-write-wins, an accepted edge case of
/// the remote backend).
fn scoped_records(tasks: &[TaskRecord], scope: Option<BusinessId>) -> Vec<&TaskRecord> {
    let mut order: Vec<TaskId> = Vec::new();
    let mut by_id: HashMap<TaskId, &TaskRecord> = HashMap::new();

    for record in tasks
        .iter()
        .filter(|record| scope.is_none_or(|business| record.business_id == business))
    {
        if by_id.insert(record.id, record).is_none() {
            order.push(record.id);
        }
    }

    order
        .iter()
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}

/// Direct dependency relations within one working set.
struct Adjacency {
    upstream: HashMap<TaskId, Vec<TaskId>>,
    downstream: HashMap<TaskId, Vec<TaskId>>,
    /// Surviving edges as (parent, dependent) pairs in first-seen order.
    edges: Vec<(TaskId, TaskId)>,
}

impl Adjacency {
    /// Collects surviving edges from the declared dependency lists.
    ///
    /// Self-loops are filtered out, edges whose endpoints are not both in
    /// the working set are dropped silently, and an edge declared on both of
    /// its endpoint rows counts once.
    fn from_records(records: &[&TaskRecord]) -> Self {
        let known: HashSet<TaskId> = records.iter().map(|record| record.id).collect();
        let mut seen: HashSet<(TaskId, TaskId)> = HashSet::new();
        let mut upstream: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut downstream: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut edges: Vec<(TaskId, TaskId)> = Vec::new();

        for edge in records.iter().flat_map(|record| &record.dependencies) {
            if edge.is_self_loop()
                || !known.contains(&edge.parent_task_id)
                || !known.contains(&edge.dependent_task_id)
            {
                continue;
            }
            if !seen.insert((edge.parent_task_id, edge.dependent_task_id)) {
                continue;
            }
            upstream
                .entry(edge.dependent_task_id)
                .or_default()
                .push(edge.parent_task_id);
            downstream
                .entry(edge.parent_task_id)
                .or_default()
                .push(edge.dependent_task_id);
            edges.push((edge.parent_task_id, edge.dependent_task_id));
        }

        Self {
            upstream,
            downstream,
            edges,
        }
    }

    fn upstream_of(&self, id: TaskId) -> &[TaskId] {
        self.upstream.get(&id).map_or(&[], Vec::as_slice)
    }

    fn downstream_of(&self, id: TaskId) -> &[TaskId] {
        self.downstream.get(&id).map_or(&[], Vec::as_slice)
    }
}

/// Assigns topological levels with an explicit worklist.
///
/// Every zero-dependency root seeds the walk at level 0; a node's level is
/// raised to `parent + 1` whenever a longer path reaches it, and raising a
/// level re-queues the node so the increase propagates downstream. Proposed
/// levels are capped at the working-set size: no acyclic path can be that
/// long, so the cap only trips inside cycles and bounds the walk. Nodes
/// never reached from a root (rootless cyclic fragments) keep the default
/// level 0 and render at the leftmost layer.
fn assign_levels(records: &[&TaskRecord], adjacency: &Adjacency) -> HashMap<TaskId, u32> {
    let cap = u32::try_from(records.len()).unwrap_or(u32::MAX);
    let mut levels: HashMap<TaskId, u32> = HashMap::new();

    let mut worklist: Vec<(TaskId, u32)> = records
        .iter()
        .filter(|record| adjacency.upstream_of(record.id).is_empty())
        .map(|record| (record.id, 0))
        .collect();

    while let Some((id, proposed)) = worklist.pop() {
        if proposed >= cap {
            continue;
        }
        if levels.get(&id).is_some_and(|&current| current >= proposed) {
            continue;
        }
        levels.insert(id, proposed);
        for &dependent in adjacency.downstream_of(id) {
            worklist.push((dependent, proposed + 1));
        }
    }

    levels
}

/// Groups records into stage bands and assigns vertical rows.
///
/// Bands are ordered by the first appearance of their stage label; rows
/// advance by [`ROW_HEIGHT`] inside a band and bands stack with
/// [`GROUP_GAP`] between them.
fn group_by_stage(records: &[&TaskRecord]) -> (Vec<StageGroup>, HashMap<TaskId, u32>) {
    let mut order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<TaskId>> = HashMap::new();

    for record in records {
        let entry = members.entry(record.stage_label().to_owned()).or_default();
        if entry.is_empty() {
            order.push(record.stage_label().to_owned());
        }
        entry.push(record.id);
    }

    let mut rows: HashMap<TaskId, u32> = HashMap::new();
    let mut base: u32 = 0;
    let groups = order
        .iter()
        .map(|label| {
            let task_ids = members.get(label).cloned().unwrap_or_default();
            let mut row = base;
            for id in &task_ids {
                rows.insert(*id, row);
                row += ROW_HEIGHT;
            }
            base = row + GROUP_GAP;
            StageGroup {
                stage: label.clone(),
                task_ids,
            }
        })
        .collect();

    (groups, rows)
}
