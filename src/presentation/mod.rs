// Presentation layer - chart contract and terminal surface
pub mod chart;
pub mod console;
