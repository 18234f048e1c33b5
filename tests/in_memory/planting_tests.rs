//! End-to-end planting tests over the in-memory adapters.
//!
//! Service-level validation failures are covered by unit tests; these
//! exercise what planting leaves behind in the repository and minter.

use crate::in_memory::helpers::{Garden, OWNER, garden};
use bloombonsai::breakdown::adapters::memory::CannedBreakdownGenerator;
use bloombonsai::garden::{
    domain::{GardenDomainError, GridCell, OwnerAddress, Species},
    ports::{TreeRecordRepository, TreeRecordRepositoryError},
    services::{PlantBonsaiRequest, PlantingError},
};
use rstest::rstest;

/// Wallet address of a second gardener.
const NEIGHBOUR: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn planting_is_visible_through_both_lookups(garden: Garden) {
    let planted = garden
        .plant("Ship the release")
        .await
        .expect("planting should succeed");

    let owner = OwnerAddress::new(OWNER).expect("valid owner address");
    let by_owner = garden
        .repository
        .find_by_owner(&owner)
        .await
        .expect("owner lookup should succeed");
    let by_id = garden
        .repository
        .find_by_tree_id(planted.record.tree_id())
        .await
        .expect("identity lookup should succeed");

    assert_eq!(by_owner, vec![planted.record.clone()]);
    assert_eq!(by_id, Some(planted.record.clone()));
    assert_eq!(planted.record.cell(), GridCell::new(0, 0));
    assert_eq!(
        planted.record.species(),
        Species::for_tree(planted.record.tree_id())
    );
    let document = planted.tree.canonical_json().expect("canonical document");
    assert_eq!(planted.record.assigned_task(), document);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn distinct_owners_garden_independently(garden: Garden) {
    garden
        .plant("Write the quarterly report")
        .await
        .expect("first planting should succeed");
    let neighbour_planting = garden
        .planting
        .plant(PlantBonsaiRequest::new(NEIGHBOUR, "Learn to juggle"))
        .await
        .expect("neighbour planting should succeed");

    // Grids are per owner, so the neighbour also starts at the origin.
    assert_eq!(neighbour_planting.record.cell(), GridCell::new(0, 0));

    let owner = OwnerAddress::new(OWNER).expect("valid owner address");
    let neighbour = OwnerAddress::new(NEIGHBOUR).expect("valid neighbour address");
    let owner_records = garden
        .repository
        .find_by_owner(&owner)
        .await
        .expect("owner lookup should succeed");
    let neighbour_records = garden
        .repository
        .find_by_owner(&neighbour)
        .await
        .expect("neighbour lookup should succeed");

    assert_eq!(owner_records.len(), 1);
    assert_eq!(neighbour_records.len(), 1);
    assert!(owner_records.iter().all(|record| record.owner() == &owner));
    assert!(
        neighbour_records
            .iter()
            .all(|record| record.owner() == &neighbour)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_tasks_collide_across_owners(garden: Garden) {
    let planted = garden
        .plant("Build a birdhouse")
        .await
        .expect("first planting should succeed");

    // Same task name, same decomposition, same content identity.
    let replant = garden
        .planting
        .plant(PlantBonsaiRequest::new(NEIGHBOUR, "Build a birdhouse"))
        .await;

    assert!(matches!(
        replant,
        Err(PlantingError::Repository(TreeRecordRepositoryError::DuplicateTree(id)))
            if id == *planted.record.tree_id()
    ));
    let neighbour = OwnerAddress::new(NEIGHBOUR).expect("valid neighbour address");
    let neighbour_records = garden
        .repository
        .find_by_owner(&neighbour)
        .await
        .expect("neighbour lookup should succeed");
    assert!(neighbour_records.is_empty());
    assert_eq!(garden.minter.minted().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_twenty_sixth_planting_overflows_the_default_grid(garden: Garden) {
    for index in 0..25 {
        let task = format!("Task number {index}");
        garden
            .plant(&task)
            .await
            .expect("planting within capacity should succeed");
    }

    let owner = OwnerAddress::new(OWNER).expect("valid owner address");
    let records = garden
        .repository
        .find_by_owner(&owner)
        .await
        .expect("owner lookup should succeed");
    assert_eq!(records.len(), 25);
    let last = records.last().expect("at least one record");
    assert_eq!(last.cell(), GridCell::new(4, 4));

    let overflow = garden.plant("One tree too many").await;
    assert!(matches!(
        overflow,
        Err(PlantingError::Garden(GardenDomainError::GridFull { rows: 5, cols: 5 }))
    ));
    assert_eq!(garden.minter.minted().len(), 25);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_refused_generation_leaves_no_trace() {
    let garden = Garden::with_generator(CannedBreakdownGenerator::failing("model offline"));

    let result = garden.plant("Paint the fence").await;

    assert!(matches!(result, Err(PlantingError::Generator(_))));
    let owner = OwnerAddress::new(OWNER).expect("valid owner address");
    let records = garden
        .repository
        .find_by_owner(&owner)
        .await
        .expect("owner lookup should succeed");
    assert!(records.is_empty());
    assert!(garden.minter.minted().is_empty());
}
