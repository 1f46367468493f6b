pub mod node;

pub use node::Node;
pub use rtscope_api::NodeKind;
