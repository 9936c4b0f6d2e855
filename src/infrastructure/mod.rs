//! Infrastructure layer - inference providers, retrieval and the agents built on them

pub mod agents;
pub mod llm;
pub mod logging;
pub mod observability;
pub mod retrieval;
pub mod services;
