//! Given steps for workflow layout BDD scenarios.

use super::world::WorkflowLayoutWorld;
use beewise_workflow::workflow::domain::{
    BusinessId, DependencyEdge, TaskId, TaskRecord, TaskStatus,
};
use rstest_bdd_macros::given;

#[given(r#"a task {id:i64} "{title}" for business {business:i64}"#)]
fn declare_task(world: &mut WorkflowLayoutWorld, id: i64, title: String, business: i64) {
    world
        .rows
        .push(TaskRecord::new(TaskId::new(id), title, BusinessId::new(business)));
}

#[given(r#"task {id:i64} has status "{status}""#)]
fn task_has_status(
    world: &mut WorkflowLayoutWorld,
    id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let row = world
        .row_mut(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} was not declared in this scenario"))?;
    row.status = Some(parsed);
    Ok(())
}

#[given("task {dependent:i64} depends on task {parent:i64}")]
fn task_depends_on(
    world: &mut WorkflowLayoutWorld,
    dependent: i64,
    parent: i64,
) -> Result<(), eyre::Report> {
    let row = world
        .row_mut(TaskId::new(dependent))
        .ok_or_else(|| eyre::eyre!("task {dependent} was not declared in this scenario"))?;
    row.dependencies
        .push(DependencyEdge::new(TaskId::new(parent), TaskId::new(dependent)));
    Ok(())
}
