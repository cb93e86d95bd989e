mod replay;
pub use replay::*;
