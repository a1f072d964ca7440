pub mod passage;
