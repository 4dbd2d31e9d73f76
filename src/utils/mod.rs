pub mod radix;
pub mod union_find;

pub use radix::*;
pub use union_find::*;
