use tracing::{debug, warn};

use crate::core::{DataPoint, Dataset, compute_sectors};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::PieChartEngine;

impl<R: Renderer> PieChartEngine<R> {
    /// Replaces the dataset and recomputes all sectors in one pass.
    ///
    /// A dataset that cannot be laid out (for example all values zero) is
    /// rejected and the previous dataset stays in place.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        let sectors = match compute_sectors(&dataset) {
            Ok(sectors) => sectors,
            Err(err) => {
                warn!(
                    error = %err,
                    points = dataset.len(),
                    "rejecting dataset"
                );
                return Err(err);
            }
        };

        debug!(
            points = dataset.len(),
            total = dataset.total(),
            "set dataset"
        );
        self.interaction.retain_within(dataset.len());
        self.dataset = dataset;
        self.sectors = sectors;
        Ok(())
    }

    /// Validates raw points and replaces the dataset.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        let dataset = Dataset::new(points).inspect_err(|err| {
            warn!(error = %err, "rejecting data points");
        })?;
        self.set_dataset(dataset)
    }

    pub fn clear_data(&mut self) {
        debug!("clear dataset");
        self.dataset = Dataset::default();
        self.sectors.clear();
        self.interaction.retain_within(0);
    }
}
