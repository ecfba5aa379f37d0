#![no_std]

pub mod exchange;
pub mod pricefeed;
pub mod storage;
