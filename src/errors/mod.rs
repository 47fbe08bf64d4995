/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 错误类型：张量运算错误与神经网络（节点图/矩阵两种实现）的错误
 */

use std::fmt::Display;
use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("数据长度{data_len}与形状{shape:?}不匹配")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
}

/// 神经网络的错误类型
///
/// 所有错误都在 API 边界（构造或调用时）被提前检测，均属调用方的使用错误，不可重试。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    /// 输入/标签向量的长度与对应层的节点数不一致
    #[error("{message}：期望长度为{expected}，实际为{got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },
    /// 网络结构或训练参数不合法（层数不足、层节点数为0、学习率非正等）
    #[error("配置无效：{0}")]
    InvalidConfiguration(String),
    #[error("非法操作：{0}")]
    InvalidOperation(String),
    /// 配置（JSON）解析失败
    #[error("配置解析失败：{0}")]
    ConfigParse(String),
}

impl NetworkError {
    /// 生成形如“学习率须>0”的配置错误
    pub(crate) fn value_must_satisfy(
        value_name: &str,
        operator: ComparisonOperator,
        threshold: impl Display,
    ) -> Self {
        Self::InvalidConfiguration(format!("{value_name}须{operator}{threshold}"))
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
