//! Results dashboard: report fetch, chart projections, advice classification,
//! and the plain-text report export.

pub mod advice;
pub mod charts;
pub mod export;

mod view;
pub use view::Dashboard;
