pub mod commercial;
pub mod growth;
pub mod industrial;
pub mod pollution;
pub mod power;
pub mod residential;

pub use commercial::CommercialGrowthSystem;
pub use industrial::IndustrialGrowthSystem;
pub use pollution::PollutionSystem;
pub use power::PowerSystem;
pub use residential::ResidentialGrowthSystem;
