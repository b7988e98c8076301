pub mod dump;
pub mod error;
pub mod names;
pub mod node;
pub mod port;
pub mod recorded;

pub use error::AxError;
pub use node::AxNode;
pub use port::{AxTreeAccess, AxValue, NodeId};
pub use recorded::{Mutation, RecordedTree};
