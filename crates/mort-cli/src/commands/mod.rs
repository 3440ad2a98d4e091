pub mod certificate;
pub mod consult;
pub mod prompt;
pub mod tables;
