/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 单个神经元的训练器：感知器与线性单元。
 *                 二者的更新规则相同：δ = label - output，wᵢ += rate·δ·xᵢ，b += rate·δ
 */

use super::validation::{
    check_dimension, validate_iterations, validate_rate, validate_sample_count,
};
use super::{Activation, Identity, TraitActivation};
use crate::errors::{ComparisonOperator, NetworkError};
use log::info;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    activation: Activation,
    weights: Vec<f64>,
    bias: f64,
}

impl Perceptron {
    /// 权重与偏置都初始化为0
    pub fn new(input_num: usize, activation: Activation) -> Result<Self, NetworkError> {
        if input_num == 0 {
            return Err(NetworkError::value_must_satisfy(
                "输入个数",
                ComparisonOperator::GreaterThan,
                0,
            ));
        }
        Ok(Self {
            activation,
            weights: vec![0.0; input_num],
            bias: 0.0,
        })
    }

    pub fn predict(&self, input: &[f64]) -> Result<f64, NetworkError> {
        check_dimension(self.weights.len(), input.len(), "输入向量长度与权重个数不一致")?;
        Ok(self.output(input))
    }

    fn output(&self, input: &[f64]) -> f64 {
        let weighted_input: f64 = input.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        self.activation.forward(weighted_input + self.bias)
    }

    /// 把全部样本按顺序训练`iterations`轮，训练前一次性校验所有参数
    pub fn train(
        &mut self,
        input_vecs: &[Vec<f64>],
        labels: &[f64],
        iterations: usize,
        rate: f64,
    ) -> Result<(), NetworkError> {
        validate_rate(rate)?;
        validate_iterations(iterations)?;
        validate_sample_count(labels.len(), input_vecs.len())?;
        for input in input_vecs {
            check_dimension(self.weights.len(), input.len(), "样本长度与权重个数不一致")?;
        }

        for _ in 0..iterations {
            for (input, &label) in input_vecs.iter().zip(labels) {
                let delta = label - self.output(input);
                for (w, x) in self.weights.iter_mut().zip(input) {
                    *w += rate * delta * x;
                }
                self.bias += rate * delta;
            }
        }
        info!(
            "单神经元训练完成：{}个样本，{}轮，学习率{}",
            input_vecs.len(),
            iterations,
            rate
        );
        Ok(())
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "weights\t:{:?}", self.weights)?;
        write!(f, "bias\t:{:.6}", self.bias)
    }
}

/// 线性单元：激活函数为恒等函数的感知器，可用于回归
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit(Perceptron);

impl LinearUnit {
    pub fn new(input_num: usize) -> Result<Self, NetworkError> {
        Ok(Self(Perceptron::new(input_num, Identity.into())?))
    }

    pub fn predict(&self, input: &[f64]) -> Result<f64, NetworkError> {
        self.0.predict(input)
    }

    pub fn train(
        &mut self,
        input_vecs: &[Vec<f64>],
        labels: &[f64],
        iterations: usize,
        rate: f64,
    ) -> Result<(), NetworkError> {
        self.0.train(input_vecs, labels, iterations, rate)
    }

    pub fn weights(&self) -> &[f64] {
        self.0.weights()
    }

    pub fn bias(&self) -> f64 {
        self.0.bias()
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
