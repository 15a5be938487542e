pub mod category;
pub mod environment;
pub mod forecast;
pub mod suggestion;
pub mod wardrobe;
pub mod wear_log;

pub use category::*;
pub use environment::*;
pub use forecast::*;
pub use suggestion::*;
pub use wardrobe::*;
pub use wear_log::*;
