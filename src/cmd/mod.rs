pub mod cluster;
pub mod run;
