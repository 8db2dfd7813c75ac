pub mod counter;
pub mod engine;
pub mod letter_classifier;
pub mod letter_counter;
pub mod mode_selector;
pub mod remote_counter;
pub mod render;
