pub mod histogram_bucket;
