pub mod capture;
pub mod resample;
pub mod synth;
