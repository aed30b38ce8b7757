//! Fluent builder for constructing a [`BoardingSim`].

use boarding_cabin::BoardingManifest;
use boarding_core::PhysicalParams;

use crate::{AisleQueue, BoardingSim, PassengerStore, SimResult};

/// Builder for [`BoardingSim`].
///
/// # Required inputs
///
/// - [`BoardingManifest`] — who sits where and in what order they board.
///   The manifest is validated at construction, so by the time it reaches
///   the builder the setup invariants already hold.
///
/// # Optional inputs
///
/// | Method       | Default                     |
/// |--------------|-----------------------------|
/// | `.params(p)` | `PhysicalParams::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let manifest = BoardingManifest::random(&layout, 40, &mut rng)?;
/// let mut sim = SimBuilder::new(manifest).build()?;
/// let total = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    manifest: BoardingManifest,
    params:   Option<PhysicalParams>,
}

impl SimBuilder {
    pub fn new(manifest: BoardingManifest) -> Self {
        Self { manifest, params: None }
    }

    /// Override the default physical constants.
    pub fn params(mut self, params: PhysicalParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Validate the configuration and lay out the initial line-up.
    pub fn build(self) -> SimResult<BoardingSim> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        let n = self.manifest.len();

        // Goal position is fixed by the assigned row.
        let goals: Vec<f64> = self
            .manifest
            .seats()
            .iter()
            .map(|s| params.row_position(s.row))
            .collect();

        // The line forms behind the cabin door at fixed spacing: the front
        // passenger at 0, each following one `waiting_space` further back.
        let mut positions = vec![0.0_f64; n];
        for (slot, &person) in self.manifest.queue().iter().enumerate() {
            positions[person.index()] = -params.waiting_space * slot as f64;
        }

        let aisle = AisleQueue::from_queue(self.manifest.queue());
        let passengers = PassengerStore::new(self.manifest.seats().to_vec(), goals, positions);

        Ok(BoardingSim::new(params, passengers, aisle))
    }
}
