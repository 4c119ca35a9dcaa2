//! When steps for workflow layout BDD scenarios.

use super::world::{WorkflowLayoutWorld, run_async};
use beewise_workflow::workflow::{
    adapters::memory::InMemoryTaskSource,
    domain::BusinessId,
    services::WorkflowOverviewService,
};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use std::sync::Arc;

fn build_layout(
    world: &mut WorkflowLayoutWorld,
    scope: Option<BusinessId>,
) -> Result<(), eyre::Report> {
    let source = Arc::new(InMemoryTaskSource::with_rows(world.rows.clone()));
    let service = WorkflowOverviewService::new(source);
    let layout = run_async(service.overview(scope)).wrap_err("build workflow layout")?;
    world.last_layout = Some(layout);
    Ok(())
}

#[when("the workflow layout is built")]
fn layout_is_built(world: &mut WorkflowLayoutWorld) -> Result<(), eyre::Report> {
    build_layout(world, None)
}

#[when("the workflow layout is built for business {business:i64}")]
fn layout_is_built_scoped(
    world: &mut WorkflowLayoutWorld,
    business: i64,
) -> Result<(), eyre::Report> {
    build_layout(world, Some(BusinessId::new(business)))
}
