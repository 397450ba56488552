pub mod node;
pub mod registry;
pub mod rest;
