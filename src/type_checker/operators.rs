use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::ast::{expressions::BinaryOperator, types::Type};

lazy_static! {
    /// Result type of every legal `left operator right` combination.
    pub static ref OPERATOR_TYPES: HashMap<(BinaryOperator, Type, Type), Type> = {
        let mut map = HashMap::new();

        for operator in [BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Mul, BinaryOperator::Div] {
            map.insert((operator, Type::Int, Type::Int), Type::Int);
            map.insert((operator, Type::Int, Type::Float), Type::Float);
            map.insert((operator, Type::Float, Type::Int), Type::Float);
            map.insert((operator, Type::Float, Type::Float), Type::Float);
        }
        map.insert((BinaryOperator::Add, Type::String, Type::String), Type::String);
        map.insert((BinaryOperator::Mul, Type::String, Type::Int), Type::String);

        for operator in [
            BinaryOperator::Mod,
            BinaryOperator::Shl,
            BinaryOperator::Shr,
            BinaryOperator::BitOr,
            BinaryOperator::BitAnd,
            BinaryOperator::BitXor,
            BinaryOperator::And,
            BinaryOperator::Or,
        ] {
            map.insert((operator, Type::Int, Type::Int), Type::Int);
        }

        // Comparisons yield a boolean-like int
        for operator in BinaryOperator::ALL.iter().filter(|operator| operator.is_comparison()) {
            for (left, right) in [
                (Type::Int, Type::Int),
                (Type::Int, Type::Float),
                (Type::Float, Type::Int),
                (Type::Float, Type::Float),
                (Type::String, Type::String),
            ] {
                map.insert((*operator, left, right), Type::Int);
            }
        }

        map
    };
}

/// Looks up the result type of a binary operation, `None` if the operand
/// types are not accepted by the operator.
pub fn result_type(operator: BinaryOperator, left: Type, right: Type) -> Option<Type> {
    OPERATOR_TYPES.get(&(operator, left, right)).copied()
}
