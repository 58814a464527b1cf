extern crate num;
extern crate rand;
#[macro_use] extern crate log;
#[macro_use] extern crate error_chain;

#[macro_use] mod macro_def;

pub mod errors;
pub mod fp;

pub mod array;
pub mod jagged;
pub mod rect;
pub use array::Array;
pub use jagged::JaggedArray;
pub use rect::RectArray;

pub mod matrix;
pub use matrix::{Matrix, MatrixIter};

mod ops;
pub mod det;
pub use det::Determinant;

pub mod scan;
pub mod generate;
