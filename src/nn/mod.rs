/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 负责全连接神经网络的构建与训练。
 *                 `graph`为逐节点计算的节点图版本，`fc`为矩阵版本，二者数学上等价
 */

mod activation;
mod config;
pub mod fc;
mod gradient_check;
pub mod graph;
mod perceptron;
mod validation;

pub use activation::{Activation, Identity, Sigmoid, Step, TraitActivation};
pub use config::{DEFAULT_INIT_RANGE, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE, NetworkConfig};
pub use gradient_check::{
    GRADIENT_CHECK_EPSILON, GRADIENT_CHECK_WARN_THRESHOLD, GradientCheckRecord, ParameterId,
    network_error,
};
pub use perceptron::{LinearUnit, Perceptron};

#[cfg(test)]
mod tests;
