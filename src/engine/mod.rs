pub mod mizan;

pub use mizan::Mizan;
