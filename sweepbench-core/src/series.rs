//! Result Series
//!
//! `ResultSeriesBuilder` is the sweep's single accumulator. It is owned by the
//! sweep loop and turned into a read-only `ResultSeries` once the plan is exhausted.

/// One completed trial: problem size and throughput in Gflops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    dimension: u32,
    measurement: f64,
}

impl SweepPoint {
    /// Create a point
    pub fn new(dimension: u32, measurement: f64) -> Self {
        Self {
            dimension,
            measurement,
        }
    }

    /// Square problem size passed as both width and height
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Throughput in Gflops
    pub fn measurement(&self) -> f64 {
        self.measurement
    }
}

/// Accumulates sweep points in sweep order
#[derive(Debug, Default)]
pub struct ResultSeriesBuilder {
    points: Vec<SweepPoint>,
}

impl ResultSeriesBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder sized for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point. Dimensions must arrive in ascending order.
    pub fn push(&mut self, point: SweepPoint) {
        debug_assert!(
            self.points
                .last()
                .is_none_or(|last| last.dimension < point.dimension),
            "sweep points must be recorded in ascending dimension order"
        );
        self.points.push(point);
    }

    /// Append `(dimension, measurement)` and return the recorded point
    pub fn record(&mut self, dimension: u32, measurement: f64) -> SweepPoint {
        let point = SweepPoint::new(dimension, measurement);
        self.push(point);
        point
    }

    /// Number of points recorded so far
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finalize into a read-only series
    pub fn finish(self) -> ResultSeries {
        ResultSeries {
            points: self.points,
        }
    }
}

/// Finalized, read-only sweep results ordered by ascending dimension
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSeries {
    points: Vec<SweepPoint>,
}

impl ResultSeries {
    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the points in sweep order
    pub fn iter(&self) -> std::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }

    /// X values: the dimensions, in order
    pub fn dimensions(&self) -> Vec<u32> {
        self.points.iter().map(SweepPoint::dimension).collect()
    }

    /// Y values: the Gflops measurements, in order
    pub fn measurements(&self) -> Vec<f64> {
        self.points.iter().map(SweepPoint::measurement).collect()
    }

    /// Measurement recorded for `dimension`
    pub fn get(&self, dimension: u32) -> Option<f64> {
        self.points
            .binary_search_by_key(&dimension, SweepPoint::dimension)
            .ok()
            .map(|i| self.points[i].measurement)
    }

    /// Highest-throughput point; the earliest one wins ties
    pub fn peak(&self) -> Option<SweepPoint> {
        self.points.iter().copied().reduce(|best, p| {
            if p.measurement > best.measurement {
                p
            } else {
                best
            }
        })
    }
}

impl<'a> IntoIterator for &'a ResultSeries {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
