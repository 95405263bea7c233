//! Data carried between the router's stages.

mod feature_vector;
mod neighbor;
mod routing_decision;
mod thread_record;

pub use feature_vector::FeatureVector;
pub use neighbor::Neighbor;
pub use routing_decision::RoutingDecision;
pub use thread_record::{ThreadId, ThreadRecord};
