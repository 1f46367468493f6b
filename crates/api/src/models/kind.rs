use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw type code that does not name any known node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown node type code {0}")]
pub struct UnknownNodeKind(pub i32);

/// Kind of a node in the symbol forest.
///
/// The discriminants are the type codes the indexer writes into each node record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NodeKind {
    Root = 1,
    Namespace = 2,
    Class = 3,
    Struct = 4,
    MethodDeclaration = 5,
    MethodDefinition = 6,
    Field = 7,
    Variable = 8,
    Enum = 9,
    EnumValue = 10,
    Typedef = 11,
    Macro = 12,
    Reference = 13,
}

impl NodeKind {
    pub const ALL: [NodeKind; 13] = [
        NodeKind::Root,
        NodeKind::Namespace,
        NodeKind::Class,
        NodeKind::Struct,
        NodeKind::MethodDeclaration,
        NodeKind::MethodDefinition,
        NodeKind::Field,
        NodeKind::Variable,
        NodeKind::Enum,
        NodeKind::EnumValue,
        NodeKind::Typedef,
        NodeKind::Macro,
        NodeKind::Reference,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Namespace => "Namespace",
            NodeKind::Class => "Class",
            NodeKind::Struct => "Struct",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::MethodDefinition => "MethodDefinition",
            NodeKind::Field => "Field",
            NodeKind::Variable => "Variable",
            NodeKind::Enum => "Enum",
            NodeKind::EnumValue => "EnumValue",
            NodeKind::Typedef => "Typedef",
            NodeKind::Macro => "Macro",
            NodeKind::Reference => "Reference",
        }
    }
}

impl TryFrom<i32> for NodeKind {
    type Error = UnknownNodeKind;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(UnknownNodeKind(code))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
