//! Policy records and catalog transformations

pub mod entities;
pub mod feature;
pub mod price;
pub mod sort;
