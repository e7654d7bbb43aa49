pub mod reproject;
