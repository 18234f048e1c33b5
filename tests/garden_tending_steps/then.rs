//! Then steps for garden tending BDD scenarios.

use super::world::{TendingWorld, run_async};
use bloombonsai::garden::{
    domain::GrowthStage, ports::TreeRecordRepository, services::TendingError,
};
use bloombonsai::tree::domain::NodeId;
use rstest_bdd_macros::then;

#[then(r#"the subtask "{node}" is complete"#)]
fn subtask_is_complete(world: &TendingWorld, node: String) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    let node_id = NodeId::new(node).map_err(|err| eyre::eyre!("invalid node fixture: {err}"))?;
    let found = tended
        .tree
        .find(&node_id)
        .ok_or_else(|| eyre::eyre!("subtask {node_id} not found in the tended tree"))?;
    if !found.is_complete() {
        return Err(eyre::eyre!("expected subtask {node_id} to be complete"));
    }
    Ok(())
}

#[then(r#"the subtask "{node}" is not complete"#)]
fn subtask_is_not_complete(world: &TendingWorld, node: String) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    let node_id = NodeId::new(node).map_err(|err| eyre::eyre!("invalid node fixture: {err}"))?;
    let found = tended
        .tree
        .find(&node_id)
        .ok_or_else(|| eyre::eyre!("subtask {node_id} not found in the tended tree"))?;
    if found.is_complete() {
        return Err(eyre::eyre!("expected subtask {node_id} to be incomplete"));
    }
    Ok(())
}

#[then("the bonsai is fully grown")]
fn bonsai_fully_grown(world: &TendingWorld) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    if !tended.tree.is_complete() || !tended.progress.is_all_complete() {
        return Err(eyre::eyre!("expected the tree to be fully complete"));
    }
    Ok(())
}

#[then("the bonsai is not yet fully grown")]
fn bonsai_not_fully_grown(world: &TendingWorld) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    if tended.tree.is_complete() {
        return Err(eyre::eyre!("expected the tree to remain incomplete"));
    }
    Ok(())
}

#[then("the bonsai shows growth stage {stage:u8}")]
fn bonsai_shows_stage(world: &TendingWorld, stage: u8) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    let expected = GrowthStage::try_from(stage.to_string().as_str())
        .map_err(|err| eyre::eyre!("invalid stage fixture: {err}"))?;
    if tended.display_stage != expected {
        return Err(eyre::eyre!(
            "expected growth stage {expected}, got {}",
            tended.display_stage
        ));
    }
    Ok(())
}

#[then("the persisted document matches the tended tree")]
fn persisted_document_matches(world: &TendingWorld) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    let tree_id = world.planted()?.record.tree_id();
    let record = run_async(world.repository.find_by_tree_id(tree_id))
        .map_err(|err| eyre::eyre!("record lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("no record for tree {tree_id}"))?;
    let document = tended
        .tree
        .canonical_json()
        .map_err(|err| eyre::eyre!("canonical document failed: {err}"))?;
    if record.assigned_task() != document {
        return Err(eyre::eyre!(
            "persisted document differs from the tended tree"
        ));
    }
    Ok(())
}

#[then("the tended tree is unchanged")]
fn tended_tree_unchanged(world: &TendingWorld) -> Result<(), eyre::Report> {
    let tended = world.last_tended()?;
    let planted = world.planted()?;
    if tended.tree != planted.tree {
        return Err(eyre::eyre!("tended tree differs from the planted tree"));
    }
    Ok(())
}

#[then("tending fails because the tree is not planted")]
fn fails_unknown_tree(world: &TendingWorld) -> Result<(), eyre::Report> {
    match world.last_tended.as_ref() {
        Some(Err(TendingError::UnknownTree(_))) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected an unknown tree error, got {err}")),
        Some(Ok(_)) => Err(eyre::eyre!("expected tending to fail, but it succeeded")),
        None => Err(eyre::eyre!("missing tending result in scenario world")),
    }
}
