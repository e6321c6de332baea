mod compat;
mod constraints;
mod extract;
mod variables;

#[doc(inline)]
pub use compat::CompatIndex;
#[doc(inline)]
pub use constraints::generate_constraints;
#[doc(inline)]
pub use constraints::objective;
#[doc(inline)]
pub use extract::extract_plan;
#[doc(inline)]
pub use variables::allocate_variables;
#[doc(inline)]
pub use variables::VarTable;
