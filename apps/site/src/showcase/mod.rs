// Skills showcase: chart configuration for the skills section and skill-bar helpers.

pub mod chart;
pub mod handlers;
