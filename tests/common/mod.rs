#![allow(dead_code)]

pub mod command;
pub mod repository;

pub const OID_A: &str = "1111111111111111111111111111111111111111";
pub const OID_B: &str = "2222222222222222222222222222222222222222";
pub const OID_C: &str = "3333333333333333333333333333333333333333";
