pub mod inspect;
pub mod trace;
