pub mod vas;
