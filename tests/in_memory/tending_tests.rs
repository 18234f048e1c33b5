//! End-to-end tending tests over the in-memory adapters.
//!
//! Toggle semantics are covered by unit tests; these exercise persistence
//! round-trips, write ordering, and the owner-facing garden view.

use crate::in_memory::helpers::{ECHO_LEAVES, Garden, OWNER, garden};
use bloombonsai::garden::{
    domain::{GridCell, GrowthStage, OwnerAddress},
    ports::{TreeRecordRepository, TreeRecordRepositoryError},
};
use bloombonsai::tree::domain::{NodeId, Progress, Subtask, TaskTree, TreeId};
use chrono::Utc;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_toggle_overwrites_the_persisted_document(garden: Garden) {
    let planted = garden
        .plant("Restore the workshop")
        .await
        .expect("planting should succeed");
    let tree_id = planted.record.tree_id();

    let leaf = NodeId::new("1-2-1").expect("valid node id");
    let tended = garden
        .tending
        .toggle_subtask(tree_id, &leaf)
        .await
        .expect("toggle should succeed");

    let record = garden
        .repository
        .find_by_tree_id(tree_id)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    let stored =
        TaskTree::from_canonical_json(record.assigned_task()).expect("stored document decodes");
    assert_eq!(stored, tended.tree);
    assert!(stored.find(&leaf).is_some_and(Subtask::is_complete));
    let document = tended.tree.canonical_json().expect("canonical document");
    assert_eq!(record.assigned_task(), document);
    assert!(record.updated_at() >= record.planted_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_last_writer_wins_when_replicas_race(garden: Garden) {
    let planted = garden
        .plant("Catalogue the library")
        .await
        .expect("planting should succeed");
    let tree_id = planted.record.tree_id();

    // Two replicas toggle different leaves starting from the same document.
    let first_leaf = NodeId::new("1-1-1").expect("valid node id");
    let second_leaf = NodeId::new("1-2-2").expect("valid node id");
    let first = planted.tree.toggle(&first_leaf);
    let second = planted.tree.toggle(&second_leaf);

    let first_document = first.canonical_json().expect("first document");
    let second_document = second.canonical_json().expect("second document");
    garden
        .repository
        .update_assigned_task(tree_id, &first_document, Utc::now())
        .await
        .expect("first write should succeed");
    garden
        .repository
        .update_assigned_task(tree_id, &second_document, Utc::now())
        .await
        .expect("second write should succeed");

    let record = garden
        .repository
        .find_by_tree_id(tree_id)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    let stored =
        TaskTree::from_canonical_json(record.assigned_task()).expect("stored document decodes");
    assert_eq!(stored, second);
    // The earlier replica's toggle is gone, not merged.
    assert!(stored.find(&first_leaf).is_some_and(|node| !node.is_complete()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unplanted_tree_reports_not_found(garden: Garden) {
    let tree_id = TreeId::new("f".repeat(64)).expect("valid tree id");

    let result = garden
        .repository
        .update_assigned_task(&tree_id, "{}", Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(TreeRecordRepositoryError::NotFound(id)) if id == tree_id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn growth_follows_completion_through_the_whole_lifecycle(garden: Garden) {
    let planted = garden
        .plant("Grow a prize pumpkin")
        .await
        .expect("planting should succeed");
    let tree_id = planted.record.tree_id();

    let fresh = garden
        .tending
        .progress_of(tree_id)
        .await
        .expect("progress should succeed");
    assert_eq!(fresh.display_stage, GrowthStage::Seedling);
    assert_eq!(fresh.progress, Progress::new(0, 6));

    let expected_stages = [
        GrowthStage::Sprout,
        GrowthStage::Budding,
        GrowthStage::Budding,
        GrowthStage::FullBloom,
    ];
    for (leaf, expected) in ECHO_LEAVES.iter().zip(expected_stages) {
        let node = NodeId::new(*leaf).expect("valid node id");
        let tended = garden
            .tending
            .toggle_subtask(tree_id, &node)
            .await
            .expect("toggle should succeed");
        assert_eq!(tended.display_stage, expected, "stage after completing {leaf}");
    }

    let first_leaf = NodeId::new("1-1-1").expect("valid node id");
    let undone = garden
        .tending
        .toggle_subtask(tree_id, &first_leaf)
        .await
        .expect("undo should succeed");
    assert_eq!(undone.display_stage, GrowthStage::Budding);
    assert_eq!(undone.progress, Progress::new(4, 6));
    assert!(!undone.tree.is_complete());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_garden_view_spans_every_planting(garden: Garden) {
    let first = garden
        .plant("Mulch the beds")
        .await
        .expect("first planting should succeed");
    let second = garden
        .plant("Prune the hedge")
        .await
        .expect("second planting should succeed");
    garden
        .plant("Rake the leaves")
        .await
        .expect("third planting should succeed");

    let node = NodeId::new("1-1-1").expect("valid node id");
    garden
        .tending
        .toggle_subtask(second.record.tree_id(), &node)
        .await
        .expect("toggle should succeed");

    let owner = OwnerAddress::new(OWNER).expect("valid owner address");
    let view = garden
        .tending
        .garden_view(&owner)
        .await
        .expect("view should succeed");

    let cells: Vec<GridCell> = view.plantings.iter().map(|planting| planting.cell).collect();
    assert_eq!(
        cells,
        vec![GridCell::new(0, 0), GridCell::new(0, 1), GridCell::new(0, 2)]
    );
    let titles: Vec<&str> = view
        .plantings
        .iter()
        .map(|planting| planting.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Mulch the beds", "Prune the hedge", "Rake the leaves"]
    );
    let stages: Vec<GrowthStage> = view.plantings.iter().map(|planting| planting.stage).collect();
    assert_eq!(
        stages,
        vec![GrowthStage::Seedling, GrowthStage::Sprout, GrowthStage::Seedling]
    );

    let tended_cell = view
        .plantings
        .get(1)
        .expect("second planting should be in the view");
    assert_eq!(tended_cell.tree_id, *second.record.tree_id());
    assert_eq!(tended_cell.progress, Progress::new(1, 6));
    let origin_cell = view
        .plantings
        .first()
        .expect("first planting should be in the view");
    assert_eq!(origin_cell.tree_id, *first.record.tree_id());
}
