/// AI and forecasting models
pub mod ai;
/// Portfolio, risk, options, stress and valuation models
pub mod analytics;
/// Comments and version snapshots
pub mod collaboration;
/// Third-party provider integration models
pub mod integrations;
/// Quotes, profiles and statement selectors
pub mod market;
/// Health and usage models
pub mod platform;
/// Visualization and export models
pub mod visualization;
/// Webhook registration models
pub mod webhooks;

pub use ai::*;
pub use analytics::*;
pub use collaboration::*;
pub use integrations::*;
pub use market::*;
pub use platform::*;
pub use visualization::*;
pub use webhooks::*;
