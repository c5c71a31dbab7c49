pub mod collect;
pub mod validate;
