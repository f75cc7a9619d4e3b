mod dashboard;

pub use dashboard::ProfitabilityDashboard;
