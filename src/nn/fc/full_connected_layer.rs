/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 矩阵版本的全连接层：output = f(W·input + b)
 */

use crate::errors::NetworkError;
use crate::nn::validation::validate_init_range;
use crate::nn::{Activation, TraitActivation};
use crate::tensor::Tensor;
use rand::Rng;
use std::fmt;

/// 全连接层。W的形状为[输出数, 输入数]，b的形状为[输出数, 1]；
/// `input`/`output`/`delta`/`w_grad`/`b_grad`为最近一次前向/反向传播的缓存，每次调用都会被覆盖
#[derive(Debug, Clone)]
pub struct FullConnectedLayer {
    activation: Activation,
    w: Tensor,
    b: Tensor,
    input: Tensor,
    output: Tensor,
    delta: Tensor,
    w_grad: Tensor,
    b_grad: Tensor,
}

impl FullConnectedLayer {
    /// W 的每个元素服从[-init_range, init_range)上的均匀分布，b 初始化为0
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        activation: Activation,
        init_range: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        validate_init_range(init_range)?;
        let w = Tensor::random_uniform(output_size, input_size, -init_range, init_range, rng);
        Ok(Self::with_parameters(
            w,
            Tensor::zeros(output_size, 1),
            activation,
        ))
    }

    /// 以给定的参数构建层，调用方须保证 b 的形状为[W的行数, 1]
    pub(crate) fn with_parameters(w: Tensor, b: Tensor, activation: Activation) -> Self {
        let (output_size, input_size) = (w.rows(), w.cols());
        Self {
            activation,
            w,
            b,
            input: Tensor::zeros(input_size, 1),
            output: Tensor::zeros(output_size, 1),
            delta: Tensor::zeros(input_size, 1),
            w_grad: Tensor::zeros(output_size, input_size),
            b_grad: Tensor::zeros(output_size, 1),
        }
    }

    /// 前向计算，`input`为列向量
    pub fn forward(&mut self, input: &Tensor) -> &Tensor {
        self.input = input.clone();
        let weighted_input = self.w.mat_mul(input) + &self.b;
        self.output = self.activation.forward_tensor(&weighted_input);
        &self.output
    }

    /// 反向计算W和b的梯度，`delta_array`为本层输出端的误差项（即下一层算得的delta），
    /// 返回传给上一层的误差项：f'(input) ⊙ (Wᵀ·delta_array)
    pub fn backward(&mut self, delta_array: &Tensor) -> &Tensor {
        self.delta =
            self.activation.backward_tensor(&self.input) * self.w.transpose().mat_mul(delta_array);
        self.w_grad = delta_array.mat_mul(&self.input.transpose());
        self.b_grad = delta_array.clone();
        &self.delta
    }

    /// 按梯度更新参数：W += rate·W_grad，b += rate·b_grad
    pub fn update(&mut self, rate: f64) {
        self.w += &(rate * &self.w_grad);
        self.b += &(rate * &self.b_grad);
    }

    /// 整体替换W和b，形状须与当前一致
    pub fn set_parameters(&mut self, w: Tensor, b: Tensor) -> Result<(), NetworkError> {
        if w.shape() != self.w.shape() || b.shape() != self.b.shape() {
            return Err(NetworkError::InvalidOperation(format!(
                "参数形状须为W{:?}、b{:?}，实际为W{:?}、b{:?}",
                self.w.shape(),
                self.b.shape(),
                w.shape(),
                b.shape()
            )));
        }
        self.w = w;
        self.b = b;
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.w.cols()
    }

    pub fn output_size(&self) -> usize {
        self.w.rows()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn w(&self) -> &Tensor {
        &self.w
    }

    pub fn b(&self) -> &Tensor {
        &self.b
    }

    pub(crate) fn w_mut(&mut self) -> &mut Tensor {
        &mut self.w
    }

    pub(crate) fn b_mut(&mut self) -> &mut Tensor {
        &mut self.b
    }

    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub fn output(&self) -> &Tensor {
        &self.output
    }

    pub fn delta(&self) -> &Tensor {
        &self.delta
    }

    pub fn w_grad(&self) -> &Tensor {
        &self.w_grad
    }

    pub fn b_grad(&self) -> &Tensor {
        &self.b_grad
    }
}

impl fmt::Display for FullConnectedLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W:\n{}b:\n{}", self.w, self.b)
    }
}
