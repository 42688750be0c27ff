//! Sector benchmark reference figures.
//!
//! Declared-but-unused by the aggregation model: the scoring phase will
//! compare computed metrics against these values. Sources: ADEME Base
//! Empreinte and sector reporting.

use serde::Serialize;

use super::domain::ExhibitionType;

/// Reference figures for one exhibition profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorBenchmark {
    /// kg CO₂eq per visitor
    pub carbon_per_visitor: f64,
    /// kWh per m² per year
    pub energy_per_m2: f64,
    /// kg per day
    pub waste_per_day: f64,
    /// percent
    pub recycling_rate: f64,
}

/// Benchmark for an exhibition type. Traveling and virtual formats have no
/// dedicated sector figures yet and fall back to the small-museum profile.
pub const fn benchmark_for(exhibition_type: ExhibitionType) -> SectorBenchmark {
    match exhibition_type {
        ExhibitionType::SmallMuseum
        | ExhibitionType::TravelingExhibition
        | ExhibitionType::VirtualExhibition => SectorBenchmark {
            carbon_per_visitor: 2.5,
            energy_per_m2: 150.0,
            waste_per_day: 5.0,
            recycling_rate: 45.0,
        },
        ExhibitionType::LargeMuseum => SectorBenchmark {
            carbon_per_visitor: 3.2,
            energy_per_m2: 180.0,
            waste_per_day: 25.0,
            recycling_rate: 55.0,
        },
        ExhibitionType::TemporaryExhibition => SectorBenchmark {
            carbon_per_visitor: 1.8,
            energy_per_m2: 120.0,
            waste_per_day: 3.0,
            recycling_rate: 40.0,
        },
        ExhibitionType::OutdoorExhibition => SectorBenchmark {
            carbon_per_visitor: 0.8,
            energy_per_m2: 50.0,
            waste_per_day: 2.0,
            recycling_rate: 60.0,
        },
    }
}
