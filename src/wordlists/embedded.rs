//! Word banks compiled in by the build script
//!
//! `WORDS` feeds the random generator. `KBBI_4` to `KBBI_6` hold the daily
//! answers per length and back the dictionary check.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/kbbi_4.rs"));
include!(concat!(env!("OUT_DIR"), "/kbbi_5.rs"));
include!(concat!(env!("OUT_DIR"), "/kbbi_6.rs"));
