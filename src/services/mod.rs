pub mod aggregation;
