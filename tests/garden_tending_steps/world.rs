//! Shared world state for garden tending BDD scenarios.

use std::sync::Arc;

use bloombonsai::breakdown::adapters::memory::CannedBreakdownGenerator;
use bloombonsai::garden::{
    adapters::memory::InMemoryTreeRecordRepository,
    services::{PlantedBonsai, PlantingService, TendedTree, TendingError, TendingService},
};
use bloombonsai::minting::adapters::memory::RecordingMinter;
use mockable::DefaultClock;
use rstest::fixture;

/// Planting service type used to seed scenarios.
pub type TestPlantingService = PlantingService<
    InMemoryTreeRecordRepository,
    CannedBreakdownGenerator,
    RecordingMinter,
    DefaultClock,
>;

/// Tending service type under test.
pub type TestTendingService = TendingService<InMemoryTreeRecordRepository, DefaultClock>;

/// Wallet address used by every tending scenario.
pub const GARDENER: &str = "0x00a329c0648769a73afac7f9381e08fb43dbea72";

/// Leaf node identifiers of every tree the echoing generator grows.
pub const ECHO_LEAVES: [&str; 4] = ["1-1-1", "1-1-2", "1-2-1", "1-2-2"];

/// Scenario world for garden tending behaviour tests.
pub struct TendingWorld {
    /// Repository shared by both services.
    pub repository: Arc<InMemoryTreeRecordRepository>,
    /// Planting service used to seed scenarios.
    pub planting: TestPlantingService,
    /// Tending service under test.
    pub tending: TestTendingService,
    /// The bonsai planted in the scenario's given steps.
    pub planted: Option<PlantedBonsai>,
    /// Result of the last tending operation.
    pub last_tended: Option<Result<TendedTree, TendingError>>,
}

impl TendingWorld {
    /// Creates a world with an empty garden and the echoing generator.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTreeRecordRepository::new());
        let clock = Arc::new(DefaultClock);
        let planting = PlantingService::new(
            Arc::clone(&repository),
            Arc::new(CannedBreakdownGenerator::echoing()),
            Arc::new(RecordingMinter::new()),
            Arc::clone(&clock),
        );
        let tending = TendingService::new(Arc::clone(&repository), clock);
        Self {
            repository,
            planting,
            tending,
            planted: None,
            last_tended: None,
        }
    }

    /// Returns the bonsai planted by the scenario's given steps.
    ///
    /// # Errors
    ///
    /// Returns an error when no planting happened yet.
    pub fn planted(&self) -> Result<&PlantedBonsai, eyre::Report> {
        self.planted
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no planted bonsai in scenario world"))
    }

    /// Returns the tree produced by the last tending operation.
    ///
    /// # Errors
    ///
    /// Returns an error when the last operation failed or never ran.
    pub fn last_tended(&self) -> Result<&TendedTree, eyre::Report> {
        match self.last_tended.as_ref() {
            Some(Ok(tended)) => Ok(tended),
            Some(Err(err)) => Err(eyre::eyre!("expected a tended tree, got error: {err}")),
            None => Err(eyre::eyre!("missing tending result in scenario world")),
        }
    }
}

impl Default for TendingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TendingWorld {
    TendingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
