pub mod email;
pub mod transcript;
