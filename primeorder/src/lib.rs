#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod named;

mod affine;
mod curve;
mod error;
mod mul;

pub use crate::{
    affine::{AffinePoint, Coordinates},
    curve::Curve,
    error::{Error, Result},
};
pub use num_bigint::{self, BigInt, BigUint};
pub use primefield;
