mod de;
pub mod market;
pub mod price;
pub mod ticker;

pub use market::*;
pub use price::*;
pub use ticker::*;
