pub mod idea;
