//! Operator kinds of the expression language

use ra_core::symbol;
use ra_core::{JoinKind, SetOpKind};
use serde::{Deserialize, Serialize};

/// The nine operators, one per reserved symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    /// σ
    Selection,
    /// π
    Projection,
    /// ⨝
    InnerJoin,
    /// ⟕
    LeftOuterJoin,
    /// ⟖
    RightOuterJoin,
    /// ⟗
    FullOuterJoin,
    /// ∪
    Union,
    /// ∩
    Intersect,
    /// -
    Difference,
}

impl OperatorKind {
    /// Look up the operator for a symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            symbol::SELECTION => OperatorKind::Selection,
            symbol::PROJECTION => OperatorKind::Projection,
            symbol::INNER_JOIN => OperatorKind::InnerJoin,
            symbol::LEFT_OUTER_JOIN => OperatorKind::LeftOuterJoin,
            symbol::RIGHT_OUTER_JOIN => OperatorKind::RightOuterJoin,
            symbol::FULL_OUTER_JOIN => OperatorKind::FullOuterJoin,
            symbol::UNION => OperatorKind::Union,
            symbol::INTERSECTION => OperatorKind::Intersect,
            symbol::DIFFERENCE => OperatorKind::Difference,
            _ => return None,
        })
    }

    /// The operator's symbol
    pub fn symbol(self) -> char {
        match self {
            OperatorKind::Selection => symbol::SELECTION,
            OperatorKind::Projection => symbol::PROJECTION,
            OperatorKind::InnerJoin => symbol::INNER_JOIN,
            OperatorKind::LeftOuterJoin => symbol::LEFT_OUTER_JOIN,
            OperatorKind::RightOuterJoin => symbol::RIGHT_OUTER_JOIN,
            OperatorKind::FullOuterJoin => symbol::FULL_OUTER_JOIN,
            OperatorKind::Union => symbol::UNION,
            OperatorKind::Intersect => symbol::INTERSECTION,
            OperatorKind::Difference => symbol::DIFFERENCE,
        }
    }

    /// Selection and projection take one relation; everything else takes two
    pub fn is_unary(self) -> bool {
        matches!(self, OperatorKind::Selection | OperatorKind::Projection)
    }

    /// Join type for the four join operators
    pub fn join_kind(self) -> Option<JoinKind> {
        match self {
            OperatorKind::InnerJoin => Some(JoinKind::Inner),
            OperatorKind::LeftOuterJoin => Some(JoinKind::LeftOuter),
            OperatorKind::RightOuterJoin => Some(JoinKind::RightOuter),
            OperatorKind::FullOuterJoin => Some(JoinKind::FullOuter),
            _ => None,
        }
    }

    /// Set operation for ∪, ∩ and -
    pub fn set_op_kind(self) -> Option<SetOpKind> {
        match self {
            OperatorKind::Union => Some(SetOpKind::Union),
            OperatorKind::Intersect => Some(SetOpKind::Intersect),
            OperatorKind::Difference => Some(SetOpKind::Difference),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
