//! Then steps for workflow layout BDD scenarios.

use super::world::WorkflowLayoutWorld;
use beewise_workflow::workflow::{domain::TaskId, layout::WorkflowLayout};
use rstest_bdd_macros::then;

fn layout(world: &WorkflowLayoutWorld) -> Result<&WorkflowLayout, eyre::Report> {
    world
        .last_layout
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing layout: no build step ran in this scenario"))
}

#[then("the layout contains {count:usize} tasks")]
fn layout_contains_tasks(world: &WorkflowLayoutWorld, count: usize) -> Result<(), eyre::Report> {
    let nodes = layout(world)?.nodes.len();
    if nodes != count {
        return Err(eyre::eyre!("expected {count} tasks, found {nodes}"));
    }
    Ok(())
}

#[then("the layout contains {count:usize} connections")]
fn layout_contains_connections(
    world: &WorkflowLayoutWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let connections = layout(world)?.connections.len();
    if connections != count {
        return Err(eyre::eyre!(
            "expected {count} connections, found {connections}"
        ));
    }
    Ok(())
}

#[then("task {id:i64} is placed at level {level:u32}")]
fn task_is_placed_at_level(
    world: &WorkflowLayoutWorld,
    id: i64,
    level: u32,
) -> Result<(), eyre::Report> {
    let node = layout(world)?
        .nodes
        .iter()
        .find(|node| node.id == TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} is missing from the layout"))?;
    if node.level != level {
        return Err(eyre::eyre!(
            "expected task {id} at level {level}, found {}",
            node.level
        ));
    }
    Ok(())
}

#[then("the summary reports {count:usize} blocked tasks")]
fn summary_reports_blocked(world: &WorkflowLayoutWorld, count: usize) -> Result<(), eyre::Report> {
    let blocked = layout(world)?.summary().blocked;
    if blocked != count {
        return Err(eyre::eyre!(
            "expected {count} blocked tasks, found {blocked}"
        ));
    }
    Ok(())
}
