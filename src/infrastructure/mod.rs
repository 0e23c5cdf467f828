pub mod llm;
pub mod observability;
pub mod queue;
pub mod store;
