pub mod annotate;
pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod optimizer;
pub mod pipeline;
pub mod scorer;
pub mod script;
pub mod sections;
