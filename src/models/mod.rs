// Domain models

mod report;
mod sample;

pub use report::{CpuMeasurement, CpuUsageReport, MeasurementError};
pub use sample::{ContainerRecord, Sample, SampleSet};
