use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-assembly")]
use rayon::prelude::*;

use crate::core::{DataSeries, Viewport};
use crate::render::Scene;

use super::{ChartAssembler, ChartKind};

/// Everything needed to assemble one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: DataSeries,
    pub viewport: Viewport,
}

/// Hashable identity of a [`ChartRequest`], for callers that memoise scenes.
///
/// Floats are compared by value with `NaN == NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneCacheKey {
    kind: ChartKind,
    viewport: [OrderedFloat<f64>; 4],
    channels: Vec<String>,
    labels: Vec<String>,
    values: Vec<OrderedFloat<f64>>,
}

impl ChartRequest {
    #[must_use]
    pub fn new(kind: ChartKind, series: DataSeries, viewport: Viewport) -> Self {
        Self {
            kind,
            series,
            viewport,
        }
    }

    #[must_use]
    pub fn cache_key(&self) -> SceneCacheKey {
        let viewport = self.viewport;
        SceneCacheKey {
            kind: self.kind,
            viewport: [
                OrderedFloat(viewport.width),
                OrderedFloat(viewport.height),
                OrderedFloat(viewport.padding_x),
                OrderedFloat(viewport.padding_y),
            ],
            channels: self.series.channels().to_vec(),
            labels: self.series.labels().map(str::to_owned).collect(),
            values: self
                .series
                .points()
                .iter()
                .flat_map(|point| point.values.iter().copied().map(OrderedFloat))
                .collect(),
        }
    }
}

impl ChartAssembler {
    #[must_use]
    pub fn assemble_request(&self, request: &ChartRequest) -> Scene {
        self.assemble(request.kind, &request.series, request.viewport)
    }

    /// Assembles every request, returning scenes in request order.
    #[must_use]
    pub fn assemble_batch(&self, requests: &[ChartRequest]) -> Vec<Scene> {
        #[cfg(feature = "parallel-assembly")]
        {
            return requests
                .par_iter()
                .map(|request| self.assemble_request(request))
                .collect();
        }

        #[cfg(not(feature = "parallel-assembly"))]
        {
            requests
                .iter()
                .map(|request| self.assemble_request(request))
                .collect()
        }
    }
}
