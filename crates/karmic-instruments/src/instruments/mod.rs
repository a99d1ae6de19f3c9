pub mod deq;
pub mod sss;
