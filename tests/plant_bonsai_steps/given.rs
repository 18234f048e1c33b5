//! Given steps for bonsai planting BDD scenarios.

use super::world::{PlantingWorld, run_async};
use bloombonsai::breakdown::adapters::memory::CannedBreakdownGenerator;
use bloombonsai::garden::{
    domain::{GridDimensions, OwnerAddress},
    services::PlantBonsaiRequest,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a gardener with wallet "{address}""#)]
fn a_gardener_with_wallet(world: &mut PlantingWorld, address: String) -> Result<(), eyre::Report> {
    let owner =
        OwnerAddress::new(address).map_err(|err| eyre::eyre!("invalid wallet fixture: {err}"))?;
    world.owner = Some(owner);
    Ok(())
}

#[given(r#"they have already planted a bonsai for the task "{task}""#)]
fn already_planted(world: &mut PlantingWorld, task: String) -> Result<(), eyre::Report> {
    let owner = world
        .owner
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no gardener in scenario world"))?;
    let request = PlantBonsaiRequest::new(owner.as_str(), task);
    run_async(world.service.plant(request)).wrap_err("plant existing bonsai for scenario")?;
    Ok(())
}

#[given("a garden with a single cell")]
fn a_single_cell_garden(world: &mut PlantingWorld) {
    world.resize_grid(GridDimensions::new(1, 1));
}

#[given("the generator answers with prose instead of a breakdown")]
fn generator_answers_with_prose(world: &mut PlantingWorld) {
    world.swap_generator(CannedBreakdownGenerator::scripted(vec![
        "Sure! First make a plan, then carry it out step by step.".to_owned(),
    ]));
}
