/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 梯度检查的公共部分：网络误差、检查记录及其日志输出
 */

use super::graph::NodeId;
use log::{info, warn};
use std::fmt;

/// 数值梯度的扰动量ε
pub const GRADIENT_CHECK_EPSILON: f64 = 1e-4;
/// 相对误差超过此值时打印警告（仅用于日志，梯度检查本身不做通过/失败判断）
pub const GRADIENT_CHECK_WARN_THRESHOLD: f64 = 1e-2;

/// 网络误差：E = ½·Σ(预测值 - 目标值)²
pub fn network_error(prediction: &[f64], target: &[f64]) -> f64 {
    0.5 * prediction
        .iter()
        .zip(target)
        .map(|(p, t)| (p - t) * (p - t))
        .sum::<f64>()
}

/// 被检查的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterId {
    /// 节点图版本中的一条连接
    Connection { upstream: NodeId, downstream: NodeId },
    /// 矩阵版本中第`layer`层权重矩阵 W 的一个元素
    Weight { layer: usize, row: usize, col: usize },
    /// 矩阵版本中第`layer`层偏置向量 b 的一个元素
    Bias { layer: usize, row: usize },
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection {
                upstream,
                downstream,
            } => write!(f, "({upstream}) -> ({downstream})"),
            Self::Weight { layer, row, col } => write!(f, "W{layer}[{row}, {col}]"),
            Self::Bias { layer, row } => write!(f, "b{layer}[{row}]"),
        }
    }
}

/// 单个参数的梯度检查结果
///
/// `actual`是反向传播缓存的梯度 δ·x，它等于 -∂E/∂w；
/// `expected`与之取相同的符号约定：(E(w-ε) - E(w+ε)) / 2ε
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCheckRecord {
    pub parameter: ParameterId,
    pub expected: f64,
    pub actual: f64,
}

impl GradientCheckRecord {
    pub(crate) fn new(
        parameter: ParameterId,
        error_minus: f64,
        error_plus: f64,
        actual: f64,
    ) -> Self {
        Self {
            parameter,
            expected: (error_minus - error_plus) / (2.0 * GRADIENT_CHECK_EPSILON),
            actual,
        }
    }

    pub fn abs_diff(&self) -> f64 {
        (self.expected - self.actual).abs()
    }

    /// 相对误差 |expected - actual| / max(|expected|, |actual|)，两者都为0时返回0
    pub fn relative_error(&self) -> f64 {
        let scale = self.expected.abs().max(self.actual.abs());
        if scale == 0.0 {
            0.0
        } else {
            self.abs_diff() / scale
        }
    }

    /// 相对误差不超过`relative_tolerance`，或绝对误差不超过`absolute_tolerance`（梯度接近0时）
    pub fn is_close(&self, relative_tolerance: f64, absolute_tolerance: f64) -> bool {
        self.relative_error() <= relative_tolerance || self.abs_diff() <= absolute_tolerance
    }

    pub(crate) fn log(&self) {
        info!("{self}");
        if self.relative_error() > GRADIENT_CHECK_WARN_THRESHOLD {
            warn!(
                "参数{}的梯度偏差较大，相对误差为{:.6}",
                self.parameter,
                self.relative_error()
            );
        }
    }
}

impl fmt::Display for GradientCheckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected gradient: {:.6}, actual gradient: {:.6}",
            self.parameter, self.expected, self.actual
        )
    }
}
