mod export;
mod import;
mod xlsx;

/// External (serde) representations of datasets and plans
pub mod ext_repr;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use xlsx::read_workbook;
#[doc(inline)]
pub use xlsx::write_workbook;
