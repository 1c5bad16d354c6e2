mod windbreaker;

pub use windbreaker::*;
