#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fc_reflect as reflect;
pub use fc_utils as utils;
