/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 激活函数。注意`backward`的参数是激活函数自身的“输出”而非加权输入，
 *                 如 sigmoid 的导数写作 σ'(z) = σ(z)·(1-σ(z))
 */

use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

#[enum_dispatch]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ActivationName", into = "ActivationName")]
pub enum Activation {
    Sigmoid,
    /// 阶跃函数，仅用于感知器
    Step,
    /// 恒等函数，仅用于线性单元
    Identity,
}

// enum_dispatch 会把各变体展开为`Sigmoid(Sigmoid)`的形式，
// 序列化时借助此枚举使配置中只出现小写名称，如"sigmoid"
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ActivationName {
    Sigmoid,
    Step,
    Identity,
}

impl From<ActivationName> for Activation {
    fn from(name: ActivationName) -> Self {
        match name {
            ActivationName::Sigmoid => Sigmoid.into(),
            ActivationName::Step => Step.into(),
            ActivationName::Identity => Identity.into(),
        }
    }
}

impl From<Activation> for ActivationName {
    fn from(activation: Activation) -> Self {
        match activation {
            Activation::Sigmoid(_) => Self::Sigmoid,
            Activation::Step(_) => Self::Step,
            Activation::Identity(_) => Self::Identity,
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Sigmoid.into()
    }
}

#[enum_dispatch(Activation)]
pub trait TraitActivation {
    /// 由加权输入计算输出
    fn forward(&self, weighted_input: f64) -> f64;

    /// 由输出（而非加权输入）计算导数
    fn backward(&self, output: f64) -> f64;

    fn forward_tensor(&self, weighted_input: &Tensor) -> Tensor {
        weighted_input.map(|z| self.forward(z))
    }

    fn backward_tensor(&self, output: &Tensor) -> Tensor {
        output.map(|a| self.backward(a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sigmoid;

impl TraitActivation for Sigmoid {
    fn forward(&self, weighted_input: f64) -> f64 {
        1.0 / (1.0 + (-weighted_input).exp())
    }

    fn backward(&self, output: f64) -> f64 {
        output * (1.0 - output)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Step;

impl TraitActivation for Step {
    fn forward(&self, weighted_input: f64) -> f64 {
        if weighted_input > 0.0 { 1.0 } else { 0.0 }
    }

    // 阶跃函数几乎处处导数为0
    fn backward(&self, _output: f64) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Identity;

impl TraitActivation for Identity {
    fn forward(&self, weighted_input: f64) -> f64 {
        weighted_input
    }

    fn backward(&self, _output: f64) -> f64 {
        1.0
    }
}
