pub mod effect;
pub mod particle;
pub mod pointer;
pub mod rng;
