pub mod config;
pub mod endpoints;
pub mod registry;
pub mod rest;
pub mod rpc;
