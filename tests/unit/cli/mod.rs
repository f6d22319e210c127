//! Unit tests for blastinput argument structs

pub mod args;
