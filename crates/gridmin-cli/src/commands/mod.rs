pub mod locate;
pub mod sample;
pub mod surfaces;
