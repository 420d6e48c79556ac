pub mod model;
pub mod script;

pub use model::{OutPoint, Transaction, TxInput, TxOutput};
pub use script::Script;
