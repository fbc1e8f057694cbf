pub mod rng_source;
